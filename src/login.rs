use crate::{decode, Credentials, Error, Gateway, Session};
use serde::Deserialize;

impl Gateway {
    pub async fn login(&self, credentials: &Credentials) -> Result<Session, Error> {
        #[derive(Deserialize)]
        struct Response {
            token: String,
        }

        #[derive(Deserialize)]
        struct Failure {
            message: Option<String>,
        }

        let url = self.url("/auth/login");
        let (status, text) = self
            .send(self.client.post(&url).json(credentials))
            .await?;

        if status != 200 {
            let message = serde_json::from_str::<Failure>(&text)
                .ok()
                .and_then(|f| f.message)
                .unwrap_or_else(|| String::from("An error occurred while signing in."));
            log::info!("login rejected for {} ({})", credentials.email, status);
            return Err(Error::ApiError(status, message));
        }

        let res: Response = decode(&url, &text)?;
        log::info!("signed in as {}", credentials.email);
        Ok(Session::new(res.token, credentials.email.clone()))
    }
}
