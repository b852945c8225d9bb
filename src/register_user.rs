use crate::{Error, Gateway};
use serde::{Deserialize, Serialize};

/// Sign-up form. `confirm_password` never leaves the client.
#[derive(Serialize, Debug, Clone, PartialEq, Default)]
pub struct SignUp {
    pub username: String,

    pub email: String,

    pub password: String,

    #[serde(skip)]
    pub confirm_password: String,
}

impl SignUp {
    pub fn validate(&self) -> Result<(), Error> {
        if self.password != self.confirm_password {
            return Err(Error::Validation(String::from("Passwords do not match.")));
        }
        Ok(())
    }
}

impl Gateway {
    pub async fn register_user(&self, sign_up: &SignUp) -> Result<(), Error> {
        #[derive(Deserialize)]
        struct Failure {
            error: Option<String>,
        }

        sign_up.validate()?;

        let url = self.url("/auth/register");
        let (status, text) = self.send(self.client.post(&url).json(sign_up)).await?;

        if status != 201 {
            let message = serde_json::from_str::<Failure>(&text)
                .ok()
                .and_then(|f| f.error)
                .unwrap_or_else(|| String::from("An error occurred while registering."));
            return Err(Error::ApiError(status, message));
        }

        log::info!("registered user {}", sign_up.email);
        Ok(())
    }
}
