//! Error types for gtmkit library.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for gtmkit operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur while building a booklet.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O error when reading or writing files.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// A source document could not be read.
    #[error("Failed to read {}: {source}", path.display())]
    Read {
        /// Path of the source document
        path: PathBuf,
        /// Underlying I/O error
        source: io::Error,
    },

    /// The output directory could not be created.
    #[error("Failed to create output directory {}: {source}", path.display())]
    CreateDir {
        /// Directory that could not be created
        path: PathBuf,
        /// Underlying I/O error
        source: io::Error,
    },

    /// Error while serializing the PDF structure.
    #[error("PDF writing error: {0}")]
    Pdf(String),

    /// Error during rendering (layout, JSON).
    #[error("Rendering error: {0}")]
    Render(String),
}

impl From<lopdf::Error> for Error {
    fn from(err: lopdf::Error) -> Self {
        match err {
            lopdf::Error::IO(e) => Error::Io(e),
            _ => Error::Pdf(err.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::Read {
            path: PathBuf::from("docs/README.md"),
            source: io::Error::new(io::ErrorKind::NotFound, "file not found"),
        };
        assert_eq!(
            err.to_string(),
            "Failed to read docs/README.md: file not found"
        );

        let err = Error::Render("frame too small".to_string());
        assert_eq!(err.to_string(), "Rendering error: frame too small");
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = io::Error::new(io::ErrorKind::PermissionDenied, "denied");
        let err: Error = io_err.into();
        assert!(matches!(err, Error::Io(_)));
    }
}
