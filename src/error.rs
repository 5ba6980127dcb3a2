//! Error types for pagestitch library.

use std::io;
use thiserror::Error;

/// Result type alias for pagestitch operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur during layout reconstruction.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O error when reading or writing files.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// The page-layout input could not be decoded.
    #[error("Invalid page layout: {0}")]
    InvalidLayout(String),

    /// The geometry provider failed to open, parse or extract from a page.
    #[error("Geometry provider error: {0}")]
    Geometry(String),

    /// A page failed while processing a range. Aborts the whole range.
    #[error("Page {page} failed: {source}")]
    PageFailure {
        /// Zero-based index of the failing page
        page: usize,
        /// Underlying failure
        #[source]
        source: Box<Error>,
    },

    /// Page number is out of range.
    #[error("Page {0} is out of range (document has {1} pages)")]
    PageOutOfRange(usize, usize),

    /// Invalid page range specification.
    #[error("Invalid page range: {0}")]
    InvalidPageRange(String),

    /// Invalid configuration value.
    #[error("Invalid configuration: {0}")]
    Config(String),

    /// Error during rendering (JSON, text, Markdown).
    #[error("Rendering error: {0}")]
    Render(String),

    /// Generic error with message.
    #[error("{0}")]
    Other(String),
}

impl Error {
    /// Attach the index of the page being processed.
    ///
    /// Errors that already carry a page are returned unchanged.
    pub fn at_page(self, page: usize) -> Self {
        match self {
            Error::PageFailure { .. } => self,
            other => Error::PageFailure {
                page,
                source: Box::new(other),
            },
        }
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        if err.is_io() {
            Error::Io(err.into())
        } else {
            Error::InvalidLayout(err.to_string())
        }
    }
}
