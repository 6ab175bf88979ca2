pub mod document;
pub mod parser;

pub use document::{FieldValue, SaveDocument, Section};
pub use parser::parse_save_text;
