use crate::Error;
use serde::de::{self, Deserializer};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Serialize, Deserialize, Debug, PartialEq, Eq, Hash, Clone, Copy)]
pub enum FuelKind {
    #[serde(rename = "gasolina")]
    Gasoline,
    #[serde(rename = "etanol")]
    Ethanol,
    #[serde(rename = "diesel")]
    Diesel,
    #[serde(rename = "gnv")]
    NaturalGas,
}

impl FuelKind {
    pub const ALL: [FuelKind; 4] = [
        FuelKind::Gasoline,
        FuelKind::Ethanol,
        FuelKind::Diesel,
        FuelKind::NaturalGas,
    ];

    /// Key used by the server, both in price maps and in the `combustivel` query parameter.
    pub fn key(&self) -> &'static str {
        match self {
            FuelKind::Gasoline => "gasolina",
            FuelKind::Ethanol => "etanol",
            FuelKind::Diesel => "diesel",
            FuelKind::NaturalGas => "gnv",
        }
    }
}

impl fmt::Display for FuelKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.key())
    }
}

impl FromStr for FuelKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "gasolina" | "gasoline" => Ok(FuelKind::Gasoline),
            "etanol" | "ethanol" => Ok(FuelKind::Ethanol),
            "diesel" => Ok(FuelKind::Diesel),
            "gnv" | "cng" | "natural-gas" => Ok(FuelKind::NaturalGas),
            other => Err(Error::Validation(format!("Unknown fuel kind \"{}\".", other))),
        }
    }
}

/// Per-fuel prices of a station. `None` means the fuel is not sold or the price is unknown.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, Default, PartialEq)]
pub struct FuelPriceSet {
    #[serde(rename = "gasolina", default, deserialize_with = "price")]
    pub gasoline: Option<f64>,

    #[serde(rename = "etanol", default, deserialize_with = "price")]
    pub ethanol: Option<f64>,

    #[serde(default, deserialize_with = "price")]
    pub diesel: Option<f64>,

    #[serde(rename = "gnv", default, deserialize_with = "price")]
    pub natural_gas: Option<f64>,
}

impl FuelPriceSet {
    pub fn get(&self, kind: FuelKind) -> Option<f64> {
        match kind {
            FuelKind::Gasoline => self.gasoline,
            FuelKind::Ethanol => self.ethanol,
            FuelKind::Diesel => self.diesel,
            FuelKind::NaturalGas => self.natural_gas,
        }
    }

    pub fn set(&mut self, kind: FuelKind, price: Option<f64>) {
        let slot = match kind {
            FuelKind::Gasoline => &mut self.gasoline,
            FuelKind::Ethanol => &mut self.ethanol,
            FuelKind::Diesel => &mut self.diesel,
            FuelKind::NaturalGas => &mut self.natural_gas,
        };
        *slot = price;
    }
}

/// Coerces user-entered price text. Blank text is an absent price; both `.` and `,` are accepted
/// as decimal separator.
pub fn parse_price(text: &str) -> Result<Option<f64>, Error> {
    let text = text.trim();
    if text.is_empty() {
        return Ok(None);
    }

    let value = match text.replace(',', ".").parse::<f64>() {
        Ok(value) => value,
        Err(_) => {
            return Err(Error::Validation(format!(
                "Could not parse \"{}\" as a price.",
                text
            )))
        }
    };

    if !value.is_finite() || value < 0.0 {
        return Err(Error::Validation(format!(
            "Price must be a non-negative number, got \"{}\".",
            text
        )));
    }

    Ok(Some(value))
}

// Prices arrive either as numbers or as the raw strings older clients posted.
fn price<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Number(f64),
        Text(String),
    }

    let value = match Option::<Raw>::deserialize(deserializer)? {
        None => return Ok(None),
        Some(Raw::Number(value)) => value,
        Some(Raw::Text(text)) => match parse_price(&text) {
            Ok(parsed) => return Ok(parsed),
            Err(err) => return Err(de::Error::custom(err)),
        },
    };

    if !value.is_finite() || value < 0.0 {
        return Err(de::Error::custom(format!(
            "price must be non-negative, got {}",
            value
        )));
    }
    Ok(Some(value))
}
