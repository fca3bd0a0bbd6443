/// First path segments that address first-party content.
pub const SECTIONS: [&str; 5] = ["guide", "column", "cars", "heritage", "news"];

/// Quote and bracket characters stripped from both ends of a candidate.
const WRAPPING: [char; 20] = [
    '"', '\'', '(', ')', '[', ']', '<', '>', '「', '」', '『', '』', '（', '）', '【', '】', '〈',
    '〉', '《', '》',
];

/// Sentence punctuation stripped from the tail only.
const TRAILING: [char; 8] = ['。', '、', '！', '？', '!', '?', '.', ','];

/// Cleans a candidate string into a canonical internal path, or rejects it.
///
/// Trims, strips wrapping punctuation and trailing sentence punctuation,
/// forces a leading slash, collapses repeated slashes, drops a trailing
/// slash (unless the path is just `/`) and accepts only paths whose first
/// segment is one of [`SECTIONS`]. The segment comparison ignores ASCII
/// case to match the case-insensitive bare-path scan; the path itself is
/// preserved as written. Never panics; rejection returns `None` and the
/// caller leaves the original text untouched.
pub fn normalize_internal_href(candidate: &str) -> Option<String> {
    let mut s = candidate.trim();
    loop {
        let before = s;
        s = s.trim_matches(|c| WRAPPING.contains(&c));
        s = s.trim_end_matches(|c| TRAILING.contains(&c));
        s = s.trim();
        if s == before {
            break;
        }
    }
    if s.is_empty() {
        return None;
    }

    let mut path = String::with_capacity(s.len() + 1);
    if !s.starts_with('/') {
        path.push('/');
    }
    let mut prev_slash = false;
    for c in s.chars() {
        if c == '/' {
            if prev_slash {
                continue;
            }
            prev_slash = true;
        } else {
            prev_slash = false;
        }
        path.push(c);
    }
    if path.len() > 1 && path.ends_with('/') {
        path.pop();
    }

    let first_segment = path[1..].split('/').next().unwrap_or("");
    SECTIONS
        .iter()
        .any(|section| first_segment.eq_ignore_ascii_case(section))
        .then_some(path)
}
