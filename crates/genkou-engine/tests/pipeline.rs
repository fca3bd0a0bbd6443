//! End-to-end pipeline tests: extraction feeding tokenization, block
//! parsing feeding the table of contents, and card labeling via the index.

use genkou_engine::{
    Block, ContentEntry, ContentSnapshot, InlineToken, LinkIndexService, extract_internal_links,
    generic_label, parse_manuscript, parsing::inline::semantic_text, tokenize,
};
use pretty_assertions::assert_eq;

fn text(s: &str) -> InlineToken {
    InlineToken::Text(s.to_string())
}

#[test]
fn extracted_text_tokenizes_cleanly() {
    let extracted = extract_internal_links("見る: [在庫一覧](/cars/foo) と **注意点**。");
    assert_eq!(extracted.text, "見る: 在庫一覧 と **注意点**。");
    assert_eq!(extracted.internal_hrefs, vec!["/cars/foo".to_string()]);

    let tokens = tokenize(&extracted.text);
    assert_eq!(
        tokens,
        vec![
            text("見る: 在庫一覧 と "),
            InlineToken::Bold(vec![text("注意点")]),
            text("。"),
        ]
    );
}

#[test]
fn checklist_item_to_cards() {
    let snapshot = ContentSnapshot {
        guides: vec![ContentEntry {
            slug: "insurance".to_string(),
            title: "Insurance".to_string(),
            title_ja: Some("輸入車の保険GUIDE".to_string()),
            name: None,
        }],
        ..ContentSnapshot::default()
    };
    let service = LinkIndexService::new(snapshot);

    let extracted = extract_internal_links("詳しくは guide/insurance と column/unknown を参照");
    assert_eq!(
        extracted.internal_hrefs,
        vec!["/guide/insurance".to_string(), "/column/unknown".to_string()]
    );
    assert_eq!(service.card_title("/guide/insurance"), "輸入車の保険GUIDE");
    assert_eq!(service.card_title("/column/unknown"), "関連COLUMN");
    assert_eq!(generic_label("/news/recall"), "関連リンク");
}

#[test]
fn manuscript_parse_produces_ordered_blocks_and_toc() {
    let manuscript = "## 費用の目安\n輸入車の維持費は\n車種で大きく変わる。\n\n- 自動車税\n- 任意保険\n\n### 保険の内訳\n以下のとおり。";
    let parsed = parse_manuscript(manuscript);

    let kinds: Vec<&str> = parsed
        .blocks
        .iter()
        .map(|b| match b {
            Block::Heading(_) => "heading",
            Block::Paragraph { .. } => "paragraph",
            Block::List { .. } => "list",
        })
        .collect();
    assert_eq!(
        kinds,
        vec!["heading", "paragraph", "list", "heading", "paragraph"]
    );

    assert_eq!(
        parsed.blocks[1],
        Block::Paragraph {
            text: "輸入車の維持費は 車種で大きく変わる。".to_string()
        }
    );

    let toc: Vec<(&str, u8)> = parsed
        .headings
        .iter()
        .map(|h| (h.id.as_str(), h.level))
        .collect();
    assert_eq!(toc, vec![("h2-0", 2), ("h3-7", 3)]);
}

#[test]
fn second_extraction_finds_nothing() {
    let raw = "## まとめ\n[保険GUIDE](/guide/insurance) を読み、 cars/bmw-320i を見る。\n1)査定 2)契約";
    let first = extract_internal_links(raw);
    assert_eq!(
        first.internal_hrefs,
        vec!["/guide/insurance".to_string(), "/cars/bmw-320i".to_string()]
    );

    let second = extract_internal_links(&first.text);
    assert!(second.internal_hrefs.is_empty());
    assert_eq!(second.text, first.text);
}

#[test]
fn tokenization_preserves_semantic_text() {
    // No construct consumes syntax here, so the semantic text is the input
    // minus unmatched asterisks; nothing else is lost or reordered.
    let inputs = [
        "プレーンな文章です。",
        "壊れた**太字と[リンク](閉じない",
        "{{セパレータなし}}と*単独アスタリスク",
        "見る: 在庫一覧 と **注意点**。",
    ];
    for input in inputs {
        let tokens = tokenize(input);
        let expected: String = input.chars().filter(|c| *c != '*' && *c != '＊').collect();
        assert_eq!(semantic_text(&tokens), expected, "input: {input}");
    }

    // Matched links and tooltips keep label/term and drop their syntax.
    let tokens = tokenize("**[内側リンク](/guide/loan)**と{{ABS|解説}}の入れ子");
    assert_eq!(semantic_text(&tokens), "内側リンクとABSの入れ子");
}

#[test]
fn malformed_syntax_never_panics() {
    let nasty = [
        "**",
        "[",
        "{{",
        "[]()",
        "[a](",
        "{{|}}",
        "{{｜}}",
        "** [a](/guide/x ** {{y",
        "1)2)3)",
    ];
    for input in nasty {
        let _ = tokenize(input);
        let _ = extract_internal_links(input);
        let _ = parse_manuscript(input);
    }
}
