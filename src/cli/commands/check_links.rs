use std::path::Path;

use crate::report;
use crate::utils::error::MdtocResult;

/// Handle the --check-links pass over the freshly written file
pub fn handle_check_links_command(path: &Path) -> MdtocResult<()> {
    report::check_document_links(path, &report::UreqProbe)
}
