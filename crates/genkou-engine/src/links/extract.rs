use std::sync::LazyLock;

use regex::{Captures, Regex};

use super::{enumeration::break_numbered_lines, href::normalize_internal_href};

/// Display-ready text plus the internal references stripped out of it.
///
/// `internal_hrefs` is de-duplicated with first-seen order preserved; the
/// rendering layer shows one navigation card per entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractedText {
    pub text: String,
    pub internal_hrefs: Vec<String>,
}

static MD_LINK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\[([^\]]*)\]\(([^)]+)\)").expect("hardcoded pattern"));

/// A section path preceded by start-of-text or a non-alphanumeric boundary
/// character, which is kept when the path is deleted.
static BARE_PATH: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)(^|[^A-Za-z0-9])(/?(?:guide|column|cars|heritage|news)/[a-z0-9\-_/]+)")
        .expect("hardcoded pattern")
});

static MULTI_SPACE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[ 　]{2,}").expect("hardcoded pattern"));

static MULTI_NEWLINE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\n{3,}").expect("hardcoded pattern"));

/// Strips internal references out of raw manuscript text.
///
/// Two ordered passes: markdown links whose href normalizes to an internal
/// path collapse to their label (an empty label collapses to nothing —
/// known rough edge, kept as-is); then bare section paths are deleted,
/// keeping the boundary character that preceded them. Whitespace is
/// normalized afterwards and inline enumerations are broken onto their own
/// lines. External links and paths that fail normalization are left
/// untouched.
pub fn extract_internal_links(raw: &str) -> ExtractedText {
    let mut found: Vec<String> = Vec::new();

    let after_md = MD_LINK.replace_all(raw, |caps: &Captures<'_>| {
        match normalize_internal_href(&caps[2]) {
            Some(href) => {
                found.push(href);
                caps[1].to_string()
            }
            None => caps[0].to_string(),
        }
    });

    let after_bare = BARE_PATH.replace_all(&after_md, |caps: &Captures<'_>| {
        match normalize_internal_href(&caps[2]) {
            Some(href) => {
                found.push(href);
                caps[1].to_string()
            }
            None => caps[0].to_string(),
        }
    });

    let collapsed = MULTI_SPACE.replace_all(&after_bare, " ");
    let collapsed = MULTI_NEWLINE.replace_all(&collapsed, "\n\n");
    let text = break_numbered_lines(collapsed.trim());

    let mut internal_hrefs: Vec<String> = Vec::new();
    for href in found {
        if !internal_hrefs.contains(&href) {
            internal_hrefs.push(href);
        }
    }

    ExtractedText {
        text,
        internal_hrefs,
    }
}
