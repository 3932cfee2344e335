use clap::Parser;
use std::path::PathBuf;

const LONG_ABOUT: &str = "\
Adds a table of contents to Markdown (.md) files.

The table is written between a pair of delimiter lines:

<!---toc start-->
... anything ...
<!---toc end-->

Whatever sits between the delimiters is replaced by a freshly
generated table of contents, and the file is overwritten in place.";

/// Main CLI parser structure
#[derive(Parser)]
#[command(name = "mdtoc")]
#[command(about = "Adds a table of contents to Markdown files", long_about = LONG_ABOUT)]
#[command(version)]
pub struct Cli {
    /// Relative or absolute path of the Markdown (.md) file to overwrite
    #[arg(value_name = "MARKDOWN_FILE")]
    pub markdown_file: PathBuf,

    /// Find all hyperlinks and ensure that they point to something valid
    #[arg(long, default_value_t = false)]
    pub check_links: bool,

    /// Enable verbose debugging
    #[arg(short = 'g', long, default_value_t = false)]
    pub debug: bool,
}
