//! Backend error wrapping.
//!
//! Uses [`thiserror`] for ergonomic error derivation. Provides
//! [`BackendError`] wrapping XML-parser and I/O failures, with conversion to
//! [`PageError`] for unified error handling across the workspace.

use pagecat_core::PageError;
use thiserror::Error;

/// Error type for XML backend operations.
#[derive(Debug, Error)]
pub enum BackendError {
    /// The input is not well-formed XML.
    #[error("XML parse error: {0}")]
    Xml(#[from] roxmltree::Error),

    /// The input bytes are not valid UTF-8.
    #[error("invalid UTF-8: {0}")]
    Utf8(#[from] std::str::Utf8Error),

    /// Error reading input data.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<BackendError> for PageError {
    fn from(err: BackendError) -> Self {
        match err {
            BackendError::Xml(e) => PageError::Parse(e.to_string()),
            BackendError::Utf8(e) => PageError::Parse(e.to_string()),
            BackendError::Io(e) => PageError::Io(e.to_string()),
        }
    }
}
