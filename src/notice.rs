use crate::Error;
use std::fmt;

/// A user-facing modal message.
#[derive(Debug, Clone, PartialEq)]
pub struct Notice {
    pub title: String,

    pub message: String,
}

impl Notice {
    pub fn new(title: &str, message: &str) -> Notice {
        Notice {
            title: title.to_string(),
            message: message.to_string(),
        }
    }

    pub fn from_error(err: &Error) -> Notice {
        match err {
            Error::PermissionDenied(m) => Notice::new("Permission denied", m),
            Error::NetworkError(_) => Notice::new("Error", "Could not connect to the server."),
            Error::Unauthorized(_) => {
                Notice::new("Session expired", "Please sign in again to continue.")
            }
            // Raw server text is shown as-is unless there is none.
            Error::ApiError(status, body) if body.trim().is_empty() => Notice::new(
                "Error",
                &format!("The server returned status {}.", status),
            ),
            Error::ApiError(_, body) => Notice::new("Error", body),
            Error::SerializationError(_) => {
                Notice::new("Error", "The server sent a response we could not read.")
            }
            Error::Validation(m) => Notice::new("Invalid input", m),
            Error::Unspecified(m) => Notice::new("Error", m),
        }
    }
}

impl fmt::Display for Notice {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}: {}", self.title, self.message)
    }
}
