pub mod builder;
pub mod kinds;
pub mod types;

pub use builder::BlockBuilder;
pub use types::{Block, Heading, ParsedManuscript};
