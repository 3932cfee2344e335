use std::process::ExitCode;

// Module declarations
mod cli;
mod markdown;
mod report;
mod utils;

fn main() -> ExitCode {
    // Run the CLI
    cli::run()
}
