/// A single ATX heading found in a document.
///
/// `text` is the raw remainder of the heading line, still carrying any
/// surrounding whitespace and closing hash marks; stripping happens at
/// render time so the slug and the display text derive from one source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Header {
    /// Heading level, 1 through 6
    pub level: usize,
    /// Raw heading text as matched
    pub text: String,
}

/// An inline Markdown link `[label](url)` with its document position.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Link {
    /// Text between the square brackets
    pub label: String,
    /// Link target, possibly empty
    pub url: String,
    /// 1-based line of the start of the label
    pub line: usize,
    /// 1-based character column of the start of the label
    pub column: usize,
}
