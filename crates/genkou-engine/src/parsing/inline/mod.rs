pub mod cursor;
pub mod kinds;
pub mod parser;
pub mod types;

pub use parser::tokenize;
pub use types::{InlineToken, semantic_text};
