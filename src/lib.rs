mod app;
pub use app::App;
mod cheapest;
pub use cheapest::select_cheapest;
mod config;
pub use config::{Config, REQUIRED_VARIABLES};
mod create_station;
mod error;
pub use error::Error;
mod fuel;
pub use fuel::{parse_price, FuelKind, FuelPriceSet};
mod get_nearby_stations;
pub use get_nearby_stations::{SearchQuery, DEFAULT_RADIUS_KM, MAX_RADIUS_KM, MIN_RADIUS_KM};
mod get_stations_near_point;
pub use get_stations_near_point::{distance_meters, nearest_station};
mod location;
pub use location::{DeniedLocation, FixedLocation, LocationProvider};
mod login;
mod map;
pub use map::{MapState, Marker};
mod notice;
pub use notice::Notice;
mod register_user;
pub use register_user::SignUp;
mod registration;
pub use registration::{RegistrationForm, RegistrationState};
mod screen;
pub use screen::Screen;
mod sequence;
pub use sequence::{SearchSequencer, Ticket};
mod session;
pub use session::{Credentials, Session};
mod station;
pub use station::{Coordinates, Station, StationDraft};
use serde::de::DeserializeOwned;

/// HTTP client for the fuel station server.
#[derive(Clone)]
pub struct Gateway {
    client: reqwest::Client,
    base_url: String,
}

impl Gateway {
    pub fn new(config: &Config) -> Result<Gateway, Error> {
        let mut headers = reqwest::header::HeaderMap::new();
        headers.insert(
            "Content-Type",
            reqwest::header::HeaderValue::from_static("application/json"),
        );
        headers.insert(
            "Accept",
            reqwest::header::HeaderValue::from_static("application/json"),
        );

        let mut builder = reqwest::ClientBuilder::new()
            .default_headers(headers)
            .https_only(config.https_only);
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }

        let client = match builder.build() {
            Ok(r) => r,
            Err(err) => {
                return Err(Error::Unspecified(format!(
                    "Could not create reqwest client ({}).",
                    err
                )))
            }
        };

        Ok(Gateway {
            client,
            base_url: config.base_url.clone(),
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    async fn get<T: DeserializeOwned>(&self, url: &str, session: &Session) -> Result<T, Error> {
        let request = self
            .client
            .get(url)
            .header(reqwest::header::AUTHORIZATION, session.bearer());
        let (status, text) = self.send(request).await?;
        let text = check_status(status, text)?;
        decode(url, &text)
    }

    /// Sends a request and returns the status code and body text. Only transport failures are
    /// errors here; status interpretation is left to the caller.
    async fn send(&self, request: reqwest::RequestBuilder) -> Result<(u16, String), Error> {
        let res = match request.send().await {
            Ok(r) => r,
            Err(err) => {
                log::warn!("request failed: {}", err);
                return Err(Error::NetworkError(format!(
                    "Could not send request ({}).",
                    err
                )));
            }
        };

        let status = res.status().as_u16();
        let text = match res.text().await {
            Ok(text) => text,
            Err(err) => {
                log::warn!("could not read response body: {}", err);
                return Err(Error::NetworkError(format!(
                    "Could not retrieve body text ({}).",
                    err
                )));
            }
        };
        log::debug!("response status {}", status);

        Ok((status, text))
    }
}

fn check_status(status: u16, text: String) -> Result<String, Error> {
    if status == 401 || status == 403 {
        return Err(Error::Unauthorized(format!(
            "Session is no longer valid ({}).",
            status
        )));
    }

    if !(200..=299).contains(&status) {
        return Err(Error::ApiError(status, text));
    }

    Ok(text)
}

fn decode<T: DeserializeOwned>(url: &str, text: &str) -> Result<T, Error> {
    match serde_json::from_str(text) {
        Ok(r) => Ok(r),
        Err(err) => {
            log::warn!("malformed response from {}: {}", url, err);
            Err(Error::SerializationError(format!(
                "Could not deserialize response from \"{}\" ({}).",
                text, err
            )))
        }
    }
}
