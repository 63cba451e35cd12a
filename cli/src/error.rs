use thiserror::Error;

#[derive(Debug, Error)]
pub(crate) enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("query decode error: {0}")]
    Query(#[from] httputil::Error),

    #[error("language tag error: {0}")]
    Lang(#[from] lang::Error),

    #[error("time error: {0}")]
    Time(#[from] utc::Error),

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("UTF-8 conversion error: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),

    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

pub(crate) type Result<T> = std::result::Result<T, Error>;
