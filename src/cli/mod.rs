pub mod types;
pub mod commands;
pub mod logging;

use clap::Parser;
use log::error;
use std::io;
use std::path::Path;
use std::process::ExitCode;

use crate::utils::error::MdtocError;
use crate::utils::path::expand_tilde;

/// Run the command-line interface
pub fn run() -> ExitCode {
    let cli = types::Cli::parse();

    // Initialize logging system
    logging::init_logging(cli.debug);

    let markdown_file = expand_tilde(&cli.markdown_file);

    if let Err(err) = commands::handle_update_command(&markdown_file) {
        report_failure(&err, &markdown_file);
        return ExitCode::FAILURE;
    }

    // Link checking runs against the file just written, so a failed
    // update skips it.
    if cli.check_links {
        if let Err(err) = commands::handle_check_links_command(&markdown_file) {
            report_failure(&err, &markdown_file);
            return ExitCode::FAILURE;
        }
    }

    ExitCode::SUCCESS
}

fn report_failure(err: &MdtocError, path: &Path) {
    match err {
        MdtocError::Io(source) if source.kind() == io::ErrorKind::NotFound => {
            error!("Failed: Not found: {}", path.display());
        }
        other => error!("Failed: {}", other),
    }
}
