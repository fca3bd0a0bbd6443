pub mod blocks;
pub mod inline;

use blocks::{BlockBuilder, ParsedManuscript};

/// Parses a whole manuscript into ordered blocks plus the flat heading list.
///
/// CRLF line endings are normalized to LF before line iteration. An empty
/// manuscript yields empty blocks and headings. Callers holding an
/// `Option<&str>` manuscript normalize with `unwrap_or_default()` first.
pub fn parse_manuscript(manuscript: &str) -> ParsedManuscript {
    let normalized = manuscript.replace("\r\n", "\n");
    let mut builder = BlockBuilder::new();

    for (index, line) in normalized.split('\n').enumerate() {
        builder.push(index, line);
    }

    builder.finish()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parsing::blocks::Block;
    use pretty_assertions::assert_eq;

    #[test]
    fn parse_mixed_manuscript() {
        let parsed = parse_manuscript("## A\nx\n\n- i1\n- i2\n\ny");

        assert_eq!(parsed.blocks.len(), 4);
        match &parsed.blocks[0] {
            Block::Heading(h) => {
                assert_eq!(h.level, 2);
                assert_eq!(h.text, "A");
                assert_eq!(h.id, "h2-0");
            }
            other => panic!("expected heading, got {other:?}"),
        }
        assert_eq!(
            parsed.blocks[1],
            Block::Paragraph {
                text: "x".to_string()
            }
        );
        assert_eq!(
            parsed.blocks[2],
            Block::List {
                items: vec!["i1".to_string(), "i2".to_string()]
            }
        );
        assert_eq!(
            parsed.blocks[3],
            Block::Paragraph {
                text: "y".to_string()
            }
        );
        assert_eq!(parsed.headings.len(), 1);
    }

    #[test]
    fn empty_manuscript() {
        let parsed = parse_manuscript("");
        assert!(parsed.blocks.is_empty());
        assert!(parsed.headings.is_empty());
    }

    #[test]
    fn crlf_is_normalized() {
        let parsed = parse_manuscript("## A\r\nx\r\n");
        assert_eq!(parsed.blocks.len(), 2);
        assert_eq!(
            parsed.blocks[1],
            Block::Paragraph {
                text: "x".to_string()
            }
        );
    }
}
