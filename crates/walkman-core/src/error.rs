//! Error types for the edges of the extraction pipeline.
//!
//! Extraction itself never fails; these cover reading the document, parsing a
//! base URL or saved tree, and writing the result.

use std::io;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum WalkmanError {
    /// The document could not be read from a file or stdin.
    #[error("read document {path}: {source}")]
    ReadDocument {
        path: String,
        #[source]
        source: io::Error,
    },

    /// The base URL given for href resolution is not an absolute URL.
    #[error("invalid base URL {input:?}: {source}")]
    InvalidBaseUrl {
        input: String,
        #[source]
        source: url::ParseError,
    },

    #[error("write output: {0}")]
    Write(#[source] io::Error),

    /// A saved directory tree file is malformed.
    #[error("invalid tree at line {line}: {reason}")]
    InvalidTree { line: usize, reason: String },

    #[error("serialize output: {0}")]
    Serialize(#[from] serde_json::Error),
}
