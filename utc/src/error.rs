use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("invalid RFC 3339 time: {0}")]
    Parse(#[from] chrono::ParseError),
    #[error("time is out of the representable range")]
    OutOfRange,
}

pub type Result<T> = std::result::Result<T, Error>;
