use lazy_static::lazy_static;
use regex::Regex;

use crate::markdown::types::Header;

lazy_static! {
    // An ATX heading, GitHub-flavored: up to three leading whitespace
    // characters, one to six hashes, at least one whitespace character,
    // then the heading text. Seven or more hashes match nothing.
    static ref HEADER_PAT: Regex = Regex::new(r"^\s{0,3}(#{1,6})\s+(.*)").unwrap();
}

/// Scan a document for ATX headings, skipping fenced code blocks.
///
/// Returns a fresh iterator over the document on every call; nothing is
/// shared between calls. A line starting with three backticks toggles the
/// fence state, so an opening fence hides the lines after it and the
/// closing fence line itself is visible again (and never looks like a
/// heading). A fence that is never closed hides the rest of the document.
pub fn scan_headers(document: &str) -> impl Iterator<Item = Header> + '_ {
    let mut in_code_fence = false;

    document.split('\n').filter_map(move |line| {
        if line.starts_with("```") {
            in_code_fence = !in_code_fence;
        }
        if in_code_fence {
            return None;
        }

        HEADER_PAT.captures(line).map(|cap| Header {
            level: cap[1].len(),
            text: cap[2].to_string(),
        })
    })
}
