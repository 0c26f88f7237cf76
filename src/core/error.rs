use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum CanopyError {
    #[error("Cannot parse config: {0}")]
    ConfigParsingError(String),
    #[error("IO error: {0}")]
    IoError(String),
    #[error("Index query error: {0}")]
    IndexError(String),
    #[error("Store error: {0}")]
    StoreError(String),
    #[error("Invalid request: {0}")]
    InvalidRequest(String),
}

impl From<std::io::Error> for CanopyError {
    fn from(err: std::io::Error) -> Self {
        CanopyError::IoError(err.to_string())
    }
}
