//! Line prefixes that open block-level constructs.
//!
//! The prefix constants live here; the builder matches against them and
//! never hardcodes `## ` or `- `.

pub struct HeadingLine;

impl HeadingLine {
    pub const H2: &'static str = "## ";
    pub const H3: &'static str = "### ";
}

pub struct BulletLine;

impl BulletLine {
    pub const PREFIX: &'static str = "- ";
}
