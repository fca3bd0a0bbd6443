use super::{
    cursor::Cursor,
    kinds::{Emphasis, MdLink, Tooltip},
    types::InlineToken,
};

/// Tokenizes one block's text span into a sequence of [`InlineToken`]s.
///
/// At each position the candidate markers are tried in fixed priority order:
/// link `[`, then bold `**`, then tooltip `{{`. Malformed syntax never
/// fails the call; the marker characters degrade to literal text, after
/// which unmatched `*`/`＊` are stripped from text runs.
pub fn tokenize(span: &str) -> Vec<InlineToken> {
    let mut cur = Cursor::new(span);
    let mut out = vec![];
    let mut text_start = cur.pos();

    while !cur.eof() {
        let marker_start = cur.pos();
        if let Some(token) = try_parse_link(&mut cur) {
            flush_text(&mut out, cur.slice(text_start, marker_start));
            out.push(token);
            text_start = cur.pos();
            continue;
        }
        if let Some(token) = try_parse_bold(&mut cur) {
            flush_text(&mut out, cur.slice(text_start, marker_start));
            out.push(token);
            text_start = cur.pos();
            continue;
        }
        if let Some(token) = try_parse_tooltip(&mut cur) {
            flush_text(&mut out, cur.slice(text_start, marker_start));
            out.push(token);
            text_start = cur.pos();
            continue;
        }
        cur.bump();
    }

    flush_text(&mut out, cur.slice(text_start, cur.pos()));
    out
}

/// Emits accumulated plain text, dropping unmatched asterisks.
///
/// Text that becomes empty after stripping produces no token at all, so a
/// lone failed `**` leaves no trace in the output.
fn flush_text(out: &mut Vec<InlineToken>, raw: &str) {
    let stripped: String = raw
        .chars()
        .filter(|c| *c != Emphasis::STAR as char && *c != Emphasis::FULLWIDTH_STAR)
        .collect();
    if !stripped.is_empty() {
        out.push(InlineToken::Text(stripped));
    }
}

/// Attempts to parse `[label](href)` at the current position.
///
/// The label closes at the first `]`, the href at the first `)`; both are
/// trimmed. Returns `None` (cursor restored) if the shape doesn't match,
/// leaving the `[` to be consumed as literal text.
fn try_parse_link(cur: &mut Cursor<'_>) -> Option<InlineToken> {
    if cur.peek() != Some(MdLink::OPEN) {
        return None;
    }

    let saved = cur.clone();
    cur.bump(); // [
    let label_start = cur.pos();
    while !cur.eof() && cur.peek() != Some(MdLink::LABEL_CLOSE) {
        cur.bump();
    }
    if cur.peek() != Some(MdLink::LABEL_CLOSE) {
        *cur = saved;
        return None;
    }
    let label_end = cur.pos();
    cur.bump(); // ]

    if cur.peek() != Some(MdLink::HREF_OPEN) {
        *cur = saved;
        return None;
    }
    cur.bump(); // (
    let href_start = cur.pos();
    while !cur.eof() && cur.peek() != Some(MdLink::HREF_CLOSE) {
        cur.bump();
    }
    if cur.peek() != Some(MdLink::HREF_CLOSE) {
        *cur = saved;
        return None;
    }
    let href_end = cur.pos();
    cur.bump(); // )

    Some(InlineToken::Link {
        label: cur.slice(label_start, label_end).trim().to_string(),
        href: cur.slice(href_start, href_end).trim().to_string(),
    })
}

/// Attempts to parse `**content**` at the current position.
///
/// Content must be non-empty and free of literal `*`. On success the content
/// is tokenized recursively, so `**[label](href)**` nests a link inside the
/// bold token.
fn try_parse_bold(cur: &mut Cursor<'_>) -> Option<InlineToken> {
    if !cur.starts_with(Emphasis::MARKER) {
        return None;
    }

    let saved = cur.clone();
    cur.bump_n(Emphasis::MARKER.len());
    let inner_start = cur.pos();
    while !cur.eof() && cur.peek() != Some(Emphasis::STAR) {
        cur.bump();
    }
    let inner_end = cur.pos();

    // A single `*` here means literal star content; EOF means unterminated.
    if !cur.starts_with(Emphasis::MARKER) || inner_end == inner_start {
        *cur = saved;
        return None;
    }
    cur.bump_n(Emphasis::MARKER.len());

    let inner = cur.slice(inner_start, inner_end);
    Some(InlineToken::Bold(tokenize(inner)))
}

/// Attempts to parse `{{term|tip}}` (ASCII or full-width separator) at the
/// current position.
///
/// Requires a closing `}}` and a separator leaving a non-empty trimmed term
/// and tip on both sides; otherwise the `{{` degrades to literal text.
fn try_parse_tooltip(cur: &mut Cursor<'_>) -> Option<InlineToken> {
    if !cur.starts_with(Tooltip::OPEN) {
        return None;
    }

    let saved = cur.clone();
    cur.bump_n(Tooltip::OPEN.len());
    let rest = cur.rest();
    let close = match rest.find(Tooltip::CLOSE) {
        Some(off) => off,
        None => {
            *cur = saved;
            return None;
        }
    };
    let inner = &rest[..close];

    let (sep_at, sep_len) = match find_separator(inner) {
        Some(found) => found,
        None => {
            *cur = saved;
            return None;
        }
    };
    let term = inner[..sep_at].trim();
    let tip = inner[sep_at + sep_len..].trim();
    if term.is_empty() || tip.is_empty() {
        *cur = saved;
        return None;
    }

    cur.bump_n(close + Tooltip::CLOSE.len());
    Some(InlineToken::Tooltip {
        term: term.to_string(),
        tip: tip.to_string(),
    })
}

/// Finds the first `|` or `｜` in the tooltip interior, returning its byte
/// position and encoded length.
fn find_separator(inner: &str) -> Option<(usize, usize)> {
    let ascii = inner.find(Tooltip::SEP);
    let fullwidth = inner.find(Tooltip::SEP_FULLWIDTH);
    match (ascii, fullwidth) {
        (Some(a), Some(f)) if f < a => Some((f, Tooltip::SEP_FULLWIDTH.len_utf8())),
        (Some(a), _) => Some((a, 1)),
        (None, Some(f)) => Some((f, Tooltip::SEP_FULLWIDTH.len_utf8())),
        (None, None) => None,
    }
}
