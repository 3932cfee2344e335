use std::collections::HashMap;

use crate::markdown::slug::{escape_brackets, heading_anchor, strip_heading_decoration};
use crate::markdown::types::Header;

/// Render headings as a nested Markdown bullet list.
///
/// Each heading becomes `* [text](#anchor)` indented two spaces per level
/// below the top. Repeated anchors get a `-1`, `-2`, ... suffix in order of
/// appearance; the suffix counter lives and dies with this call, so two
/// documents never share state. Lines are joined with a single newline and
/// there is no trailing newline; no headings yields an empty string.
pub fn render_toc<I>(headers: I) -> String
where
    I: IntoIterator<Item = Header>,
{
    let mut lines = Vec::new();
    let mut seen: HashMap<String, usize> = HashMap::new();

    for header in headers {
        let mut anchor = heading_anchor(&header.text);

        // First occurrence keeps the base anchor; the Nth repeat gets -N.
        let n = seen.entry(anchor.clone()).or_insert(0);
        if *n > 0 {
            anchor = format!("{}-{}", anchor, *n);
        }
        *n += 1;

        lines.push(format!(
            "{}* [{}](#{})",
            "  ".repeat(header.level.saturating_sub(1)),
            escape_brackets(strip_heading_decoration(&header.text)),
            anchor,
        ));
    }

    lines.join("\n")
}
