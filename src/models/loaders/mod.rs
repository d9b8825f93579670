pub mod json_loader;

pub use json_loader::{load_corpus, load_translations, save_corpus, save_translations, validate_corpus};
