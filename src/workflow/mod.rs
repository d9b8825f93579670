pub mod enhance_flow;
pub mod quiz_session;

pub use enhance_flow::{EnhanceFlow, EnhanceOutcome};
pub use quiz_session::{find_question, grade, QuizSession};
