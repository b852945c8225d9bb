use crate::{
    select_cheapest, Coordinates, Error, FuelKind, Notice, SearchQuery, SearchSequencer, Session,
    Station, Ticket, DEFAULT_RADIUS_KM,
};

#[derive(Debug, Clone, PartialEq)]
pub struct Marker {
    pub station_id: String,

    pub coordinates: Coordinates,

    pub title: String,

    pub description: String,

    /// Set on the cheapest station for the selected fuel.
    pub highlighted: bool,
}

/// State behind the map screen. Every accepted search replaces the station list wholesale.
#[derive(Debug)]
pub struct MapState {
    session: Session,
    center: Coordinates,
    query: SearchQuery,
    stations: Vec<Station>,
    notice: Option<Notice>,
    sequencer: SearchSequencer,
}

impl MapState {
    pub fn new(session: Session, center: Coordinates) -> MapState {
        MapState {
            session,
            center,
            query: SearchQuery::new(center, DEFAULT_RADIUS_KM, None),
            stations: vec![],
            notice: None,
            sequencer: SearchSequencer::new(),
        }
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn center(&self) -> Coordinates {
        self.center
    }

    pub fn query(&self) -> &SearchQuery {
        &self.query
    }

    pub fn stations(&self) -> &[Station] {
        &self.stations
    }

    pub fn notice(&self) -> Option<&Notice> {
        self.notice.as_ref()
    }

    pub fn take_notice(&mut self) -> Option<Notice> {
        self.notice.take()
    }

    pub fn set_center(&mut self, center: Coordinates) {
        self.center = center;
        self.query = SearchQuery::new(center, self.query.radius_km(), self.query.fuel);
    }

    pub fn set_radius(&mut self, radius_km: f64) {
        self.query = SearchQuery::new(self.center, radius_km, self.query.fuel);
    }

    pub fn set_fuel(&mut self, fuel: Option<FuelKind>) {
        self.query.fuel = fuel;
    }

    /// Starts a search with the current settings.
    pub fn begin_search(&mut self) -> (Ticket, SearchQuery) {
        (self.sequencer.issue(), self.query)
    }

    /// Applies a search result if `ticket` is still the latest one issued. Failures clear the
    /// station list and leave a notice. Returns whether the result was applied.
    pub fn apply_search(&mut self, ticket: Ticket, result: Result<Vec<Station>, Error>) -> bool {
        if !self.sequencer.is_latest(ticket) {
            log::warn!("discarding stale search result {:?}", ticket);
            return false;
        }

        match result {
            Ok(stations) => {
                self.stations = stations;
                self.notice = None;
            }
            Err(err) => {
                log::warn!("search failed: {}", err);
                self.stations = vec![];
                self.notice = Some(Notice::from_error(&err));
            }
        }
        true
    }

    pub fn cheapest(&self) -> Option<&Station> {
        select_cheapest(&self.stations, self.query.fuel)
    }

    pub fn markers(&self) -> Vec<Marker> {
        let cheapest = self.cheapest();

        self.stations
            .iter()
            .map(|station| {
                let price = self
                    .query
                    .fuel
                    .and_then(|fuel| station.prices.get(fuel).map(|p| (fuel, p)));
                let description = match price {
                    Some((fuel, p)) => format!("{} | {}: {:.2}", station.address, fuel, p),
                    None => station.address.clone(),
                };
                Marker {
                    station_id: station.id.clone(),
                    coordinates: station.coordinates(),
                    title: station.name.clone(),
                    description,
                    highlighted: cheapest.map_or(false, |c| std::ptr::eq(c, station)),
                }
            })
            .collect()
    }
}
