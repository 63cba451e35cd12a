//! Error types for query decoding and header parsing.

use std::error::Error as StdError;

use thiserror::Error;

/// Boxed cause of a field-level decoding failure.
pub type BoxError = Box<dyn StdError + Send + Sync + 'static>;

/// Errors returned by the query decoder and the header parsers.
#[derive(Debug, Error)]
pub enum Error {
    // Decoder misuse
    /// The target type registered a field table the decoder cannot honour.
    #[error("invalid decode target {target}: {reason}")]
    InvalidTarget {
        target: &'static str,
        reason: String,
    },

    // Data errors
    /// A field marked `required` has no non-empty value in the input.
    #[error("missing query string parameter `{key}`")]
    MissingField { key: String },

    /// A present value failed custom decoding or primitive coercion.
    #[error("invalid value for query string parameter `{key}`: {source}")]
    InvalidValue {
        key: String,
        #[source]
        source: BoxError,
    },

    // Content-Range errors
    #[error("invalid range format")]
    InvalidRangeFormat,
    #[error("invalid range")]
    InvalidRange,
}

impl Error {
    /// Returns the lookup key of the offending field, if any.
    pub fn key(&self) -> Option<&str> {
        match self {
            Error::MissingField { key } | Error::InvalidValue { key, .. } => Some(key),
            _ => None,
        }
    }

    /// Whether the error was caused by client input rather than by a
    /// programming mistake.
    pub fn is_bad_request(&self) -> bool {
        !matches!(self, Error::InvalidTarget { .. })
    }

    /// HTTP status code a server would answer with for this error.
    pub fn status_code(&self) -> u16 {
        if self.is_bad_request() { 400 } else { 500 }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
