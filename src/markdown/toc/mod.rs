use std::path::Path;

use crate::utils::error::MdtocResult;
use crate::utils::fs::{read_file, write_file};

mod patcher;
mod renderer;

pub use patcher::{patch_document, TOC_END, TOC_START};
pub use renderer::render_toc;

/// Rewrite the Markdown file at `path` with a regenerated table of
/// contents between its delimiter pair.
///
/// The file is read whole and written back whole. Nothing is written
/// when the document is malformed, so a failed run leaves the file
/// exactly as it was.
pub fn update_file(path: &Path) -> MdtocResult<()> {
    let markdown = read_file(path)?;
    let patched = patch_document(&markdown)?;
    write_file(path, &patched)
}
