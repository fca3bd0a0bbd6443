/// A tokenized inline unit within one block's text.
///
/// Variants own their text, so a token sequence is self-contained and
/// immutable once built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InlineToken {
    /// Plain text that isn't part of any matched construct. Unmatched
    /// `*`/`＊` characters have already been stripped.
    Text(String),
    /// Bold emphasis. Content is tokenized recursively, so links can nest.
    Bold(Vec<InlineToken>),
    /// A markdown-style link. An `href` starting with `/` is rendered by the
    /// consuming layer as emphasized text, not an anchor; internal
    /// navigation surfaces only via extracted link cards.
    Link { label: String, href: String },
    /// A glossary tooltip `{{term|tip}}`.
    Tooltip { term: String, tip: String },
}

impl InlineToken {
    /// The token's visible text: bold flattens recursively, a link
    /// contributes its label, a tooltip its term.
    pub fn semantic_text(&self) -> String {
        match self {
            InlineToken::Text(value) => value.clone(),
            InlineToken::Bold(children) => semantic_text(children),
            InlineToken::Link { label, .. } => label.clone(),
            InlineToken::Tooltip { term, .. } => term.clone(),
        }
    }
}

/// Concatenates the semantic text of a token sequence.
pub fn semantic_text(tokens: &[InlineToken]) -> String {
    tokens.iter().map(InlineToken::semantic_text).collect()
}
