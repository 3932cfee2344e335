use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref WHITESPACE_RUN: Regex = Regex::new(r"\s+").unwrap();

    // Everything except Unicode word characters, hyphens, and whitespace.
    // Whitespace is already collapsed to hyphens by the time this runs.
    static ref NON_ANCHOR_CHAR: Regex = Regex::new(r"[^-\w\s]").unwrap();
}

/// Strip surrounding spaces, tabs, and hash signs from a heading.
///
/// A hash run at the end of the line is closing syntax and is removed, but
/// an escaped hash (`\#`) is ordinary text: the escaped character survives
/// while the rest of the trailing run is still stripped, so `foo \###`
/// becomes `foo \#`.
pub fn strip_heading_decoration(text: &str) -> &str {
    let stripped = text.trim_start_matches([' ', '\t', '#']);

    let bytes = stripped.as_bytes();
    let mut end = stripped.len();
    while end > 0 && matches!(bytes[end - 1], b' ' | b'\t' | b'#') {
        end -= 1;
    }
    // A backslash just before the trailing run escapes the run's first
    // character; keep that one character.
    if end > 0 && end < stripped.len() && bytes[end - 1] == b'\\' {
        end += 1;
    }

    &stripped[..end]
}

/// Convert a Markdown heading into its relative URL anchor.
///
/// Matches the anchor GitHub derives for the heading: lower-cased, stripped
/// of decoration, whitespace runs collapsed to single hyphens, everything
/// that is not a Unicode word character or hyphen removed. Letters and
/// digits from non-Latin scripts are preserved.
pub fn heading_anchor(text: &str) -> String {
    let lowered = text.to_lowercase();
    let stripped = strip_heading_decoration(&lowered);
    let hyphenated = WHITESPACE_RUN.replace_all(stripped, "-");
    let anchor = NON_ANCHOR_CHAR.replace_all(&hyphenated, "");

    // A run of punctuation at the end leaves multiple hyphens behind;
    // collapse them to exactly one.
    if anchor.ends_with("--") {
        format!("{}-", anchor.trim_matches('-'))
    } else {
        anchor.into_owned()
    }
}

/// Escape `[` and `]` so the text is safe inside a Markdown link label.
pub fn escape_brackets(text: &str) -> String {
    text.replace('[', "\\[").replace(']', "\\]")
}
