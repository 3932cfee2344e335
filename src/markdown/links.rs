use lazy_static::lazy_static;
use regex::Regex;

use crate::markdown::types::Link;

lazy_static! {
    // An inline Markdown link. The URL part must tolerate parentheses
    // nested one level deep, as in
    // [Text here](https://www.cool.com/this(-is-a)-link.html),
    // without closing early at the inner `)`.
    static ref MD_LINK_PAT: Regex = Regex::new(
        r"\[([^\[\]]+)\]\((([^\s)(]|\([^\s)(]*\))*)\)"
    )
    .unwrap();
}

/// Find inline links in a Markdown string, in scan order.
///
/// Each link records the 1-based line and character column of the start of
/// its label (the character after the opening bracket).
pub fn extract_links(document: &str) -> Vec<Link> {
    let mut links = Vec::new();

    for cap in MD_LINK_PAT.captures_iter(document) {
        if let (Some(label), Some(url)) = (cap.get(1), cap.get(2)) {
            let (line, column) = line_col(document, label.start());
            links.push(Link {
                label: label.as_str().to_string(),
                url: url.as_str().to_string(),
                line,
                column,
            });
        }
    }

    links
}

/// 1-based line and column of a byte offset. Both `\r` and `\n` count as
/// line separators, so CRLF advances the line twice; columns count
/// characters, not bytes.
fn line_col(document: &str, position: usize) -> (usize, usize) {
    let mut line = 1;
    let mut column = 1;

    for (idx, ch) in document.char_indices() {
        if idx == position {
            break;
        } else if ch == '\r' || ch == '\n' {
            line += 1;
            column = 1;
        } else {
            column += 1;
        }
    }

    (line, column)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_simple_link() {
        let links = extract_links("[link here](https://github.com/scottfrazer/mdtoc/)");
        assert_eq!(links.len(), 1);
        assert_eq!(links[0].label, "link here");
        assert_eq!(links[0].url, "https://github.com/scottfrazer/mdtoc/");
        assert_eq!((links[0].line, links[0].column), (1, 2));
    }

    #[test]
    fn test_parenthesized_url() {
        let links = extract_links("[multi parens??](https://google.com/co(mp)uting(iscool))");
        assert_eq!(links.len(), 1);
        assert_eq!(links[0].label, "multi parens??");
        assert_eq!(links[0].url, "https://google.com/co(mp)uting(iscool)");
    }

    #[test]
    fn test_positions() {
        let document = "x\n[a](b)\nmore [link here](https://github.com/scottfrazer/mdtoc/) end";
        let links = extract_links(document);
        assert_eq!(links.len(), 2);
        assert_eq!((links[0].line, links[0].column), (2, 2));
        assert_eq!((links[1].line, links[1].column), (3, 7));
    }

    #[test]
    fn test_crlf_counts_twice() {
        let links = extract_links("a\r\n[x](y)");
        assert_eq!(links.len(), 1);
        assert_eq!((links[0].line, links[0].column), (3, 2));
    }

    #[test]
    fn test_columns_count_characters() {
        let links = extract_links("é [a](b)");
        assert_eq!((links[0].line, links[0].column), (1, 4));
    }

    #[test]
    fn test_empty_target() {
        let links = extract_links("[empty]()");
        assert_eq!(links.len(), 1);
        assert_eq!(links[0].url, "");
    }

    #[test]
    fn test_no_links() {
        assert!(extract_links("nothing [here").is_empty());
        assert!(extract_links("").is_empty());
    }
}
