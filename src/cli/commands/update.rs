use log::info;
use std::path::Path;

use crate::markdown::toc;
use crate::utils::error::MdtocResult;

/// Handle the default command: regenerate the table of contents in place
pub fn handle_update_command(path: &Path) -> MdtocResult<()> {
    toc::update_file(path)?;
    info!("Success: wrote TOC to {}", path.display());
    Ok(())
}
