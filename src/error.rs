//! Error types for the preparation pipeline.
//!
//! Fatal conditions carry their own variant so callers can match on them:
//! a missing mandatory column ([`PrepError::Schema`]) and an unrecognized
//! output encoding ([`PrepError::UnsupportedFormat`]) both abort a run
//! before anything is written. Everything else is propagated through
//! `anyhow` with context at the call site.
//!
//! Coercion failures on individual values are deliberately *not* errors;
//! they degrade to defaults or nulls and are handled by the cleaner (see
//! [`crate::pipeline::clean`]).

use std::fmt;

/// Fatal pipeline errors.
#[derive(Debug)]
pub enum PrepError {
    /// I/O errors while staging or committing artifacts.
    Io(std::io::Error),

    /// A mandatory input column is missing.
    Schema {
        /// Name of the missing column.
        column: String,
    },

    /// An output encoding that is neither parquet nor csv was requested.
    UnsupportedFormat(String),

    /// A configuration value is out of its valid range.
    Config(String),

    /// An artifact path that cannot name a file.
    InvalidPath(String),
}

impl fmt::Display for PrepError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "I/O error: {e}"),
            Self::Schema { column } => {
                write!(f, "required column '{column}' not found in input")
            }
            Self::UnsupportedFormat(format) => {
                write!(
                    f,
                    "unsupported output format '{format}' (expected 'parquet' or 'csv')"
                )
            }
            Self::Config(msg) => write!(f, "configuration error: {msg}"),
            Self::InvalidPath(path) => write!(f, "invalid artifact path: {path}"),
        }
    }
}

impl std::error::Error for PrepError {}

impl From<std::io::Error> for PrepError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err)
    }
}

/// Result type alias for operations that fail with a [`PrepError`].
pub type Result<T> = std::result::Result<T, PrepError>;
