//! Error types for swcdifflib

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while loading mapping sources
#[derive(Error, Debug)]
pub enum SwcDiffError {
    /// A referenced source file does not exist
    #[error("source file does not exist: {path}")]
    SourceNotFound { path: PathBuf },

    /// Source kind is unsupported, or two sources clash where distinct
    /// ones are required
    #[error("unsupported source format: {detail}")]
    UnsupportedFormat { detail: String },

    /// A field that must hold a numeric identifier could not be parsed.
    /// Loaders catch this and substitute the absent-field marker.
    #[error("malformed {field} field: '{value}' is not an unsigned integer")]
    MalformedField { field: String, value: String },

    /// Failed to read a source file
    #[error("failed to read source '{path}': {source}")]
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    /// A source document is structurally corrupt
    #[error("failed to parse source '{path}': {message}")]
    SourceParse { path: PathBuf, message: String },
}
