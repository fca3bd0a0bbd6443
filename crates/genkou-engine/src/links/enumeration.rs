use std::sync::LazyLock;

use regex::Regex;

/// One or two ASCII digits followed by an ASCII or full-width closing paren.
static NUMBERED: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[0-9]{1,2}[)）]").expect("hardcoded pattern"));

/// Breaks inline `1) 2) 3)` enumerations onto their own lines.
///
/// Every numbered marker that is not at position 0 and not already at the
/// start of a line gets a newline inserted in front of it; spaces directly
/// before the marker are folded into that newline. A marker already at line
/// start is left untouched.
pub fn break_numbered_lines(text: &str) -> String {
    let mut out = String::with_capacity(text.len() + 8);
    let mut last = 0;

    for m in NUMBERED.find_iter(text) {
        out.push_str(&text[last..m.start()]);
        if m.start() > 0 {
            while out.ends_with(' ') || out.ends_with('　') {
                out.pop();
            }
            if !out.is_empty() && !out.ends_with('\n') {
                out.push('\n');
            }
        }
        out.push_str(m.as_str());
        last = m.end();
    }
    out.push_str(&text[last..]);
    out
}
