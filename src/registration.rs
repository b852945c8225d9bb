use crate::{
    parse_price, Coordinates, Error, FuelKind, FuelPriceSet, Session, Station, StationDraft,
};

/// Raw text of the station registration form, as typed by the user.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RegistrationForm {
    pub name: String,
    pub latitude: String,
    pub longitude: String,
    pub address: String,
    pub gasoline: String,
    pub ethanol: String,
    pub diesel: String,
    pub natural_gas: String,
}

impl RegistrationForm {
    pub fn at(position: Coordinates) -> RegistrationForm {
        RegistrationForm {
            latitude: position.latitude.to_string(),
            longitude: position.longitude.to_string(),
            ..RegistrationForm::default()
        }
    }

    /// Copies an existing record into the form so the user can update its prices.
    pub fn prefill_from(&mut self, station: &Station) {
        self.name = station.name.clone();
        self.latitude = station.latitude.to_string();
        self.longitude = station.longitude.to_string();
        self.address = station.address.clone();
        for kind in FuelKind::ALL {
            *self.price_mut(kind) = station
                .prices
                .get(kind)
                .map(|p| p.to_string())
                .unwrap_or_default();
        }
    }

    pub fn price(&self, kind: FuelKind) -> &str {
        match kind {
            FuelKind::Gasoline => &self.gasoline,
            FuelKind::Ethanol => &self.ethanol,
            FuelKind::Diesel => &self.diesel,
            FuelKind::NaturalGas => &self.natural_gas,
        }
    }

    pub fn price_mut(&mut self, kind: FuelKind) -> &mut String {
        match kind {
            FuelKind::Gasoline => &mut self.gasoline,
            FuelKind::Ethanol => &mut self.ethanol,
            FuelKind::Diesel => &mut self.diesel,
            FuelKind::NaturalGas => &mut self.natural_gas,
        }
    }

    pub fn to_draft(&self) -> Result<StationDraft, Error> {
        let mut prices = FuelPriceSet::default();
        for kind in FuelKind::ALL {
            prices.set(kind, parse_price(self.price(kind))?);
        }

        Ok(StationDraft {
            name: self.name.trim().to_string(),
            latitude: coordinate("latitude", &self.latitude)?,
            longitude: coordinate("longitude", &self.longitude)?,
            address: self.address.trim().to_string(),
            prices,
        })
    }
}

fn coordinate(field: &str, text: &str) -> Result<f64, Error> {
    match text.trim().replace(',', ".").parse::<f64>() {
        Ok(value) if value.is_finite() => Ok(value),
        _ => Err(Error::Validation(format!(
            "The {} \"{}\" is not a number.",
            field, text
        ))),
    }
}

/// State behind the registration screen.
#[derive(Debug, Clone)]
pub struct RegistrationState {
    pub session: Session,

    pub form: RegistrationForm,

    /// Nearby record found by the proximity pre-check, if any.
    pub existing: Option<Station>,
}

impl RegistrationState {
    pub fn new(session: Session, form: RegistrationForm) -> RegistrationState {
        RegistrationState {
            session,
            form,
            existing: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> RegistrationForm {
        RegistrationForm {
            name: " Posto Sol ".to_string(),
            latitude: "-23,55".to_string(),
            longitude: "-46.63".to_string(),
            address: "Rua A, 10".to_string(),
            gasoline: "5.89".to_string(),
            ethanol: "".to_string(),
            diesel: "6,10".to_string(),
            natural_gas: " ".to_string(),
        }
    }

    #[test]
    fn coerces_text_fields() {
        let draft = filled().to_draft().unwrap();
        assert_eq!(draft.name, "Posto Sol");
        assert_eq!(draft.latitude, -23.55);
        assert_eq!(draft.prices.gasoline, Some(5.89));
        assert_eq!(draft.prices.ethanol, None);
        assert_eq!(draft.prices.diesel, Some(6.10));
        assert_eq!(draft.prices.natural_gas, None);
    }

    #[test]
    fn missing_coordinates_are_rejected() {
        let mut form = filled();
        form.longitude = String::new();
        assert!(matches!(form.to_draft(), Err(Error::Validation(_))));
    }

    #[test]
    fn bad_price_is_rejected() {
        let mut form = filled();
        *form.price_mut(FuelKind::Ethanol) = "-3".to_string();
        assert!(matches!(form.to_draft(), Err(Error::Validation(_))));
    }

    #[test]
    fn prefill_round_trips_through_draft() {
        let mut prices = FuelPriceSet::default();
        prices.set(FuelKind::NaturalGas, Some(4.25));
        let station = Station {
            id: "x".to_string(),
            name: "Posto Lua".to_string(),
            latitude: -22.9,
            longitude: -43.2,
            address: "Av. Atlântica".to_string(),
            prices,
        };

        let mut form = RegistrationForm::at(Coordinates::new(0.0, 0.0));
        form.prefill_from(&station);
        let draft = form.to_draft().unwrap();
        assert_eq!(draft.name, station.name);
        assert_eq!(draft.address, station.address);
        assert_eq!(draft.latitude, station.latitude);
        assert_eq!(draft.prices, station.prices);
    }
}
