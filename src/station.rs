use crate::FuelPriceSet;
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
pub struct Coordinates {
    pub latitude: f64,

    pub longitude: f64,
}

impl Coordinates {
    pub fn new(latitude: f64, longitude: f64) -> Coordinates {
        Coordinates {
            latitude,
            longitude,
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Station {
    #[serde(rename = "_id", alias = "id")]
    pub id: String,

    #[serde(rename = "nome")]
    pub name: String,

    pub latitude: f64,

    pub longitude: f64,

    #[serde(rename = "endereco", default)]
    pub address: String,

    #[serde(rename = "precosCombustiveis", default)]
    pub prices: FuelPriceSet,
}

impl Station {
    pub fn coordinates(&self) -> Coordinates {
        Coordinates::new(self.latitude, self.longitude)
    }
}

/// Body of a create request. The server assigns the identifier.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct StationDraft {
    #[serde(rename = "nome")]
    pub name: String,

    pub latitude: f64,

    pub longitude: f64,

    #[serde(rename = "endereco")]
    pub address: String,

    #[serde(rename = "precosCombustiveis")]
    pub prices: FuelPriceSet,
}
