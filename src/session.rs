use chrono::{DateTime, Utc};
use serde::Serialize;
use std::fmt;

#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct Credentials {
    pub email: String,

    pub password: String,
}

/// An authenticated session. Created by [`crate::Gateway::login`] and passed by reference to every
/// authenticated call; it lives in process memory only.
#[derive(Clone, PartialEq)]
pub struct Session {
    token: String,
    email: String,
    established_at: DateTime<Utc>,
}

impl Session {
    pub fn new(token: String, email: String) -> Session {
        Session {
            token,
            email,
            established_at: Utc::now(),
        }
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn established_at(&self) -> DateTime<Utc> {
        self.established_at
    }

    /// Value for the `Authorization` header.
    pub fn bearer(&self) -> String {
        format!("Bearer {}", self.token)
    }
}

impl fmt::Debug for Session {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("Session")
            .field("token", &"<redacted>")
            .field("email", &self.email)
            .field("established_at", &self.established_at)
            .finish()
    }
}
