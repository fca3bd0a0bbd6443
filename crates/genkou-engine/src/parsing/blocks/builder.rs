use super::{
    kinds::{BulletLine, HeadingLine},
    types::{Block, Heading, ParsedManuscript},
};

/// Accumulates manuscript lines into ordered blocks.
///
/// Two buffers are maintained: paragraph lines (joined with a single space
/// on flush) and list items. A `- ` line flushes only the paragraph buffer,
/// so a run of bullets accumulates into one list; any prose line breaks an
/// in-progress list.
pub struct BlockBuilder {
    para: Vec<String>,
    items: Vec<String>,
    blocks: Vec<Block>,
    headings: Vec<Heading>,
}

impl BlockBuilder {
    pub fn new() -> Self {
        Self {
            para: vec![],
            items: vec![],
            blocks: vec![],
            headings: vec![],
        }
    }

    /// Consumes one line. `index` is the 0-based position in the normalized
    /// line list and feeds heading id derivation.
    pub fn push(&mut self, index: usize, line: &str) {
        let trimmed = line.trim();

        if trimmed.is_empty() {
            self.flush_paragraph();
            self.flush_list();
            return;
        }
        if let Some(rest) = trimmed.strip_prefix(HeadingLine::H3) {
            self.open_heading(3, index, rest);
            return;
        }
        if let Some(rest) = trimmed.strip_prefix(HeadingLine::H2) {
            self.open_heading(2, index, rest);
            return;
        }
        if let Some(rest) = trimmed.strip_prefix(BulletLine::PREFIX) {
            self.flush_paragraph();
            self.items.push(rest.trim().to_string());
            return;
        }

        self.flush_list();
        self.para.push(trimmed.to_string());
    }

    /// EOF flush.
    pub fn finish(mut self) -> ParsedManuscript {
        self.flush_paragraph();
        self.flush_list();
        ParsedManuscript {
            blocks: self.blocks,
            headings: self.headings,
        }
    }

    fn open_heading(&mut self, level: u8, index: usize, rest: &str) {
        self.flush_paragraph();
        self.flush_list();
        let heading = Heading::new(level, index, rest.trim());
        self.headings.push(heading.clone());
        self.blocks.push(Block::Heading(heading));
    }

    fn flush_paragraph(&mut self) {
        if self.para.is_empty() {
            return;
        }
        let text = std::mem::take(&mut self.para).join(" ");
        self.blocks.push(Block::Paragraph { text });
    }

    fn flush_list(&mut self) {
        if self.items.is_empty() {
            return;
        }
        let items = std::mem::take(&mut self.items);
        self.blocks.push(Block::List { items });
    }
}

impl Default for BlockBuilder {
    fn default() -> Self {
        Self::new()
    }
}
