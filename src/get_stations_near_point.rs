use crate::{Coordinates, Error, Gateway, Session, Station};

impl Gateway {
    /// Proximity pre-check run before showing the registration form. The result is advisory: it
    /// can prefill the form but does not prevent duplicate registrations.
    pub async fn get_stations_near_point(
        &self,
        session: &Session,
        point: Coordinates,
    ) -> Result<Vec<Station>, Error> {
        //http://host:3000/api/postos/proximidade/-23.55/-46.63

        let url = self.url(&format!(
            "/api/postos/proximidade/{}/{}",
            point.latitude, point.longitude
        ));
        self.get(&url, session).await
    }
}

/// Returns the station closest to `point` together with its distance in meters.
pub fn nearest_station(stations: &[Station], point: Coordinates) -> Option<(&Station, f64)> {
    let mut closest: Option<(&Station, f64)> = None;
    for station in stations {
        let distance = distance_meters(point, station.coordinates());
        match &closest {
            Some((_, closest_distance)) => {
                if &distance < closest_distance {
                    closest = Some((station, distance));
                }
            }
            None => closest = Some((station, distance)),
        }
    }
    closest
}

/// Equirectangular approximation. Good enough at the few-kilometer scale of a station search.
pub fn distance_meters(a: Coordinates, b: Coordinates) -> f64 {
    let x = deg2rad(a.longitude - b.longitude) * f64::cos(deg2rad((a.latitude + b.latitude) / 2.0));
    let y = deg2rad(a.latitude - b.latitude);
    6371000.0 * f64::sqrt(x * x + y * y)
}

fn deg2rad(degrees: f64) -> f64 {
    degrees * (std::f64::consts::PI / 180.0)
}
