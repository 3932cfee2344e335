use std::error::Error;
use std::fmt;
use std::io;

/// Common result type for mdtoc operations
pub type MdtocResult<T> = Result<T, MdtocError>;

/// Error types for mdtoc operations
#[derive(Debug)]
pub enum MdtocError {
    /// IO error wrapper
    Io(io::Error),
    /// Markdown formatted incorrectly: the toc delimiter pair is missing or
    /// appears more than once
    MalformedDocument(String),
}

impl fmt::Display for MdtocError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MdtocError::Io(err) => write!(f, "IO error: {}", err),
            MdtocError::MalformedDocument(msg) => write!(f, "{}", msg),
        }
    }
}

impl Error for MdtocError {}

impl From<io::Error> for MdtocError {
    fn from(err: io::Error) -> Self {
        MdtocError::Io(err)
    }
}
