pub mod index;
pub mod io;
pub mod links;
pub mod models;
pub mod parsing;

// Re-export key types for easier usage
pub use index::{ContentKind, InternalLinkMeta, LinkIndex, LinkIndexService, generic_label};
pub use links::{ExtractedText, break_numbered_lines, extract_internal_links};
pub use models::content::{CarEntry, ContentEntry, ContentSnapshot, TaxonRef};
pub use parsing::{
    blocks::{Block, Heading, ParsedManuscript},
    inline::{InlineToken, tokenize},
    parse_manuscript,
};
