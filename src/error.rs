//! Error types for marktypist library.

use std::io;
use thiserror::Error;

/// Result type alias for marktypist operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur during conversion.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O error when reading or writing files.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// The input file extension does not map to a known source format.
    #[error("Unsupported input format: '{0}'")]
    UnsupportedFormat(String),

    /// A renderer met a node kind it has no visitor for.
    #[error("{renderer} renderer has no visitor for node kind: {kind}")]
    UnsupportedNodeKind {
        /// Name of the renderer that failed
        renderer: &'static str,
        /// Kind name of the offending node
        kind: &'static str,
    },

    /// Input bytes are not valid UTF-8.
    #[error("Encoding error: {0}")]
    Encoding(String),

    /// JSON serialization or deserialization of the document model failed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl Error {
    /// Shorthand for an unsupported node kind error.
    pub(crate) fn unsupported_node(renderer: &'static str, kind: &'static str) -> Self {
        Error::UnsupportedNodeKind { renderer, kind }
    }
}
