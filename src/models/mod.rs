pub mod choice;
pub mod language;
pub mod loaders;
pub mod question;

pub use choice::{AnswerKey, ChoiceSet, Letter};
pub use language::{contains_hangul, DisplayMode, Language};
pub use loaders::{load_corpus, load_translations, save_corpus, save_translations, validate_corpus};
pub use question::{ParsedQuestion, Question};

/// 选项翻译词典：英文选项全文 → 韩语译文（空字符串表示尚未翻译）
pub type TranslationDict = std::collections::BTreeMap<String, String>;
