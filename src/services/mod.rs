pub mod answer_extractor;
pub mod choice_parser;
pub mod dump_parser;
pub mod explanation_service;
pub mod language_selector;
pub mod phrase_rules;
pub mod phrase_translator;
pub mod wrong_note_writer;

pub use language_selector::{ChoiceSource, DisplayQuestion, LanguageSelector};
pub use phrase_translator::PhraseTranslator;
pub use wrong_note_writer::WrongNoteWriter;
