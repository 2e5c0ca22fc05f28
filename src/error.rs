//! Error handling for BLM parsing operations.
//!
//! Structural errors abort the whole parse. `UnknownField` is raised by
//! record accessors and only affects the access that triggered it.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum BlmError {
    #[error("No content received: set either BLM contents or a BLM file path before parsing")]
    NoContent,

    #[error("BLM header invalid - version not found")]
    HeaderMissingVersion,

    #[error("BLM header invalid - End of Field delimiter not found")]
    HeaderMissingFieldDelimiter,

    #[error("BLM header invalid - End of Row delimiter not found")]
    HeaderMissingRowDelimiter,

    #[error(
        "Property with ID '{record_id}' contains a different number of fields than the definition: expected {expected}, found {actual}"
    )]
    SchemaMismatch {
        record_id: String,
        expected: usize,
        actual: usize,
    },

    #[error("Unknown field: {field}")]
    UnknownField { field: String },

    #[error("Invalid BLM format: {reason}")]
    InvalidFormat { reason: String },

    #[error("IO error reading {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Configuration error: {message}")]
    Configuration { message: String },
}

impl BlmError {
    /// Create an I/O error tied to the file being read
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// Create a format error
    pub fn invalid_format(reason: impl Into<String>) -> Self {
        Self::InvalidFormat {
            reason: reason.into(),
        }
    }

    /// Create an unknown field error
    pub fn unknown_field(field: impl Into<String>) -> Self {
        Self::UnknownField {
            field: field.into(),
        }
    }

    /// Create a configuration error
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, BlmError>;
