use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    #[error("Memory not found: {0}")]
    MemoryNotFound(String),

    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    // catalog loading and validation
    #[error("Catalog error: {0}")]
    Catalog(String),

    #[error("Config error: {0}")]
    Config(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

pub type InternalResult<T> = Result<T, Error>;

impl Error {
    pub fn internal<S: Into<String>>(message: S) -> Self {
        Error::Internal(message.into())
    }

    pub fn invalid_parameter<S: Into<String>>(message: S) -> Self {
        Error::InvalidParameter(message.into())
    }
}
