use crate::{Coordinates, Error, FuelKind, Gateway, Session, Station};
use serde::Deserialize;

pub const MIN_RADIUS_KM: f64 = 1.0;
pub const MAX_RADIUS_KM: f64 = 50.0;
pub const DEFAULT_RADIUS_KM: f64 = 5.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SearchQuery {
    pub coordinates: Coordinates,

    radius_km: f64,

    pub fuel: Option<FuelKind>,
}

impl SearchQuery {
    /// The radius is clamped to `[MIN_RADIUS_KM, MAX_RADIUS_KM]`; a NaN radius falls back to
    /// the default.
    pub fn new(coordinates: Coordinates, radius_km: f64, fuel: Option<FuelKind>) -> SearchQuery {
        let radius_km = if radius_km.is_nan() {
            DEFAULT_RADIUS_KM
        } else {
            radius_km.clamp(MIN_RADIUS_KM, MAX_RADIUS_KM)
        };
        SearchQuery {
            coordinates,
            radius_km,
            fuel,
        }
    }

    pub fn radius_km(&self) -> f64 {
        self.radius_km
    }

    fn params(&self) -> Vec<(&'static str, String)> {
        let mut params = vec![
            ("latitude", self.coordinates.latitude.to_string()),
            ("longitude", self.coordinates.longitude.to_string()),
            ("raio", self.radius_km.to_string()),
        ];
        if let Some(fuel) = self.fuel {
            params.push(("combustivel", fuel.key().to_string()));
        }
        params
    }
}

impl Gateway {
    pub async fn get_nearby_stations(
        &self,
        session: &Session,
        query: &SearchQuery,
    ) -> Result<Vec<Station>, Error> {
        #[derive(Deserialize)]
        struct Response {
            postos: Vec<Station>,
        }

        //http://host:3000/api/postos/proximos?latitude=-23.5&longitude=-46.6&raio=5
        //&combustivel=diesel

        let url = self.url("/api/postos/proximos");
        let request = self
            .client
            .get(&url)
            .query(&query.params())
            .header(reqwest::header::AUTHORIZATION, session.bearer());
        let (status, text) = self.send(request).await?;
        let text = crate::check_status(status, text)?;
        let res: Response = crate::decode(&url, &text)?;

        log::debug!(
            "{} stations within {} km",
            res.postos.len(),
            query.radius_km
        );
        Ok(res.postos)
    }
}
