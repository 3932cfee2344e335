use lazy_static::lazy_static;
use regex::{NoExpand, Regex};

use crate::markdown::headers::scan_headers;
use crate::markdown::toc::renderer::render_toc;
use crate::utils::error::{MdtocError, MdtocResult};

/// Opening delimiter of the managed block.
pub const TOC_START: &str = "<!---toc start-->";
/// Closing delimiter of the managed block.
pub const TOC_END: &str = "<!---toc end-->";

lazy_static! {
    // (?s) lets the block span lines; the lazy group stops at the first
    // end tag. The [ \t]* runs swallow indentation around both tags.
    static ref TOC_SPAN: Regex =
        Regex::new(r"(?s)[ \t]*<!---toc start-->(.*?)<!---toc end-->[ \t]*").unwrap();
}

/// Replace the delimited block in `document` with a freshly rendered
/// table of contents.
///
/// The document must contain exactly one start/end delimiter pair;
/// zero or several pairs is a `MalformedDocument` error. Everything
/// between the delimiters is discarded. Header text is inserted
/// literally, so `$` in a heading never triggers capture expansion.
pub fn patch_document(document: &str) -> MdtocResult<String> {
    let table = render_toc(scan_headers(document));

    match TOC_SPAN.find_iter(document).count() {
        0 => Err(MdtocError::MalformedDocument(format!(
            "Document missing toc start/end tags.\n\
             Add these delimiters to your Markdown file:\n\n\
             \t{}\n\
             \t{}\n\n\
             Then, run mdtoc against the file again.",
            TOC_START, TOC_END
        ))),
        1 => {
            let replacement = format!("{}\n\n{}\n\n{}", TOC_START, table, TOC_END);
            Ok(TOC_SPAN
                .replace(document, NoExpand(&replacement))
                .into_owned())
        }
        _ => Err(MdtocError::MalformedDocument(
            "Multiple toc start/end tag pairs detected. \
             Your Markdown file should include only one pair of tags"
                .to_string(),
        )),
    }
}
