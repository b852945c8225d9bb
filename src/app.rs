use crate::{
    nearest_station, Credentials, Error, FuelKind, Gateway, LocationProvider, Notice,
    RegistrationForm, Screen, SignUp,
};

/// Drives the screens against the server. Every failure ends here: it becomes a [`Notice`] and
/// the current action stops. Nothing is retried.
pub struct App<L: LocationProvider> {
    gateway: Gateway,
    location: L,
    screen: Screen,
    notice: Option<Notice>,
}

impl<L: LocationProvider> App<L> {
    pub fn new(gateway: Gateway, location: L) -> App<L> {
        App {
            gateway,
            location,
            screen: Screen::Welcome,
            notice: None,
        }
    }

    pub fn screen(&self) -> &Screen {
        &self.screen
    }

    pub fn notice(&self) -> Option<&Notice> {
        self.notice.as_ref()
    }

    pub fn take_notice(&mut self) -> Option<Notice> {
        self.notice.take()
    }

    pub fn go_to_sign_in(&mut self) -> bool {
        let res = self.screen.go_to_sign_in();
        self.settle(res).is_some()
    }

    pub fn go_to_sign_up(&mut self) -> bool {
        let res = self.screen.go_to_sign_up();
        self.settle(res).is_some()
    }

    pub fn back(&mut self) -> bool {
        let res = self.screen.back();
        self.settle(res).is_some()
    }

    pub fn logout(&mut self) {
        self.screen.sign_out();
    }

    pub async fn sign_up(&mut self, sign_up: &SignUp) -> bool {
        if !matches!(self.screen, Screen::SignUp) {
            let res = Err(self.illegal("sign up"));
            return self.settle::<()>(res).is_some();
        }

        let res = self.gateway.register_user(sign_up).await;
        if self.settle(res).is_none() {
            return false;
        }

        self.notice = Some(Notice::new("Success", "User registered."));
        let res = self.screen.go_to_sign_in();
        self.settle(res).is_some()
    }

    /// Signs in, asks for the device position and runs the first nearby search.
    pub async fn sign_in(&mut self, credentials: &Credentials) -> bool {
        if !matches!(self.screen, Screen::SignIn) {
            let res = Err(self.illegal("sign in"));
            return self.settle::<()>(res).is_some();
        }

        let res = self.gateway.login(credentials).await;
        let session = match self.settle(res) {
            Some(session) => session,
            None => return false,
        };

        let res = self.location.current_position().await;
        let center = match self.settle(res) {
            Some(center) => center,
            None => return false,
        };

        let res = self.screen.signed_in(session, center);
        if self.settle(res).is_none() {
            return false;
        }
        self.search().await
    }

    /// Runs a nearby search with the map's current settings. Returns whether the result was
    /// applied and succeeded.
    pub async fn search(&mut self) -> bool {
        let (ticket, query, session) = match self.screen.map_mut() {
            Some(map) => {
                let (ticket, query) = map.begin_search();
                (ticket, query, map.session().clone())
            }
            None => {
                let res = Err(self.illegal("search"));
                return self.settle::<()>(res).is_some();
            }
        };

        let res = self.gateway.get_nearby_stations(&session, &query).await;
        if let Err(err) = &res {
            if err.is_unauthorized() {
                return self.settle(res).is_some();
            }
        }

        let ok = res.is_ok();
        let map = match self.screen.map_mut() {
            Some(map) => map,
            None => return false,
        };
        if !map.apply_search(ticket, res) {
            return false;
        }
        if let Some(notice) = map.take_notice() {
            self.notice = Some(notice);
        }
        ok
    }

    pub async fn change_radius(&mut self, radius_km: f64) -> bool {
        if let Some(map) = self.screen.map_mut() {
            map.set_radius(radius_km);
        }
        self.search().await
    }

    pub async fn change_fuel(&mut self, fuel: Option<FuelKind>) -> bool {
        if let Some(map) = self.screen.map_mut() {
            map.set_fuel(fuel);
        }
        self.search().await
    }

    /// Applies a new radius and fuel filter with a single search.
    pub async fn refine(&mut self, radius_km: f64, fuel: Option<FuelKind>) -> bool {
        if let Some(map) = self.screen.map_mut() {
            map.set_radius(radius_km);
            map.set_fuel(fuel);
        }
        self.search().await
    }

    /// Opens the registration form at the device position. A station already registered nearby
    /// prefills the form.
    pub async fn open_registration(&mut self) -> bool {
        let session = match self.screen.map_mut() {
            Some(map) => map.session().clone(),
            None => {
                let res = Err(self.illegal("registration"));
                return self.settle::<()>(res).is_some();
            }
        };

        let res = self.location.current_position().await;
        let position = match self.settle(res) {
            Some(position) => position,
            None => return false,
        };

        let mut form = RegistrationForm::at(position);
        let mut existing = None;
        match self
            .gateway
            .get_stations_near_point(&session, position)
            .await
        {
            Ok(stations) => {
                if let Some((station, distance)) = nearest_station(&stations, position) {
                    log::info!(
                        "prefilling registration from \"{}\" ({:.0} m away)",
                        station.name,
                        distance
                    );
                    form.prefill_from(station);
                    existing = Some(station.clone());
                }
            }
            Err(err) if err.is_unauthorized() => {
                return self.settle::<()>(Err(err)).is_some();
            }
            Err(err) => log::warn!("proximity check failed: {}", err),
        }

        let res = self.screen.open_registration(form);
        if self.settle(res).is_none() {
            return false;
        }
        if let Some(state) = self.screen.registration_mut() {
            state.existing = existing;
        }
        true
    }

    pub fn registration_form_mut(&mut self) -> Option<&mut RegistrationForm> {
        self.screen.registration_mut().map(|state| &mut state.form)
    }

    /// Submits the registration form. Success returns to the map; failure stays on the form.
    pub async fn submit_registration(&mut self) -> bool {
        let (session, draft) = match self.screen.registration() {
            Some(state) => (state.session.clone(), state.form.to_draft()),
            None => {
                let res = Err(self.illegal("submit"));
                return self.settle::<()>(res).is_some();
            }
        };
        let draft = match self.settle(draft) {
            Some(draft) => draft,
            None => return false,
        };

        let res = self.gateway.create_station(&session, &draft).await;
        if self.settle(res).is_none() {
            return false;
        }

        self.notice = Some(Notice::new("Success", "Station registered."));
        let res = self.screen.back();
        self.settle(res).is_some()
    }

    fn illegal(&self, action: &str) -> Error {
        Error::Validation(format!(
            "Cannot {} from the {} screen.",
            action,
            self.screen.name()
        ))
    }

    /// Converts a failure into a notice. An unauthorized response also ends the session.
    fn settle<T>(&mut self, res: Result<T, Error>) -> Option<T> {
        match res {
            Ok(value) => Some(value),
            Err(err) => {
                log::warn!("{} screen: {}", self.screen.name(), err);
                if err.is_unauthorized() {
                    self.screen.sign_out();
                }
                self.notice = Some(Notice::from_error(&err));
                None
            }
        }
    }
}
