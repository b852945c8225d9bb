use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub enum Error {
    Unspecified(String),
    PermissionDenied(String),
    Validation(String),
    SerializationError(String),
    NetworkError(String),
    Unauthorized(String),
    ApiError(u16, String),
}

impl Error {
    /// True when the server rejected the bearer token, meaning the session is no longer usable.
    pub fn is_unauthorized(&self) -> bool {
        matches!(self, Error::Unauthorized(_))
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let text = match self {
            Error::Unspecified(g) => g,
            Error::PermissionDenied(g) => g,
            Error::Validation(g) => g,
            Error::SerializationError(g) => g,
            Error::NetworkError(g) => g,
            Error::Unauthorized(g) => g,
            Error::ApiError(_, g) => g,
        };
        write!(f, "{}", text)
    }
}

impl std::error::Error for Error {}
