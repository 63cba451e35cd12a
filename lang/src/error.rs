use thiserror::Error;

/// Errors that can occur when parsing language tags.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    /// The text is not a well-formed language tag
    #[error("invalid language tag: {0:?}")]
    InvalidTag(String),

    /// A quality value in an `Accept-Language` list is malformed or out of range
    #[error("invalid quality value: {0:?}")]
    InvalidQuality(String),

    /// The language tag grammar failed to compile
    #[error("language tag pattern: {0}")]
    Pattern(String),
}

pub type Result<T> = std::result::Result<T, Error>;
