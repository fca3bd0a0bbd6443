pub mod enumeration;
pub mod extract;
pub mod href;

pub use enumeration::break_numbered_lines;
pub use extract::{ExtractedText, extract_internal_links};
pub use href::normalize_internal_href;
