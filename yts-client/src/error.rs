use thiserror::Error;

use crate::filters::InvalidFilterError;

#[derive(Error, Debug)]
pub enum Error {
    #[error("YTS API request failed: {0}")]
    Http(String),

    #[error("YTS API responded with status: {0}")]
    Status(u16),

    #[error("YTS API error: {0}")]
    Api(String),

    #[error("failed to decode YTS API response: {0}")]
    Decode(String),

    #[error("{0} is required")]
    MissingParameter(&'static str),

    #[error(transparent)]
    InvalidFilter(#[from] InvalidFilterError),
}

impl Error {
    /// Transport failures and upstream 5xx responses are worth retrying,
    /// everything else is a caller or upstream contract error.
    pub fn is_retryable(&self) -> bool {
        match self {
            Error::Http(_) => true,
            Error::Status(code) => *code >= 500,
            _ => false,
        }
    }
}

impl From<surf::Error> for Error {
    fn from(error: surf::Error) -> Self {
        Error::Http(error.to_string())
    }
}
