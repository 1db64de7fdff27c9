use foundation::geo::{GeoBounds, GeoPoint};
use serde::{Deserialize, Serialize};

/// Rectangular extent of a state in degrees.
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct StateBounds {
    pub north: f64,
    pub south: f64,
    pub east: f64,
    pub west: f64,
}

impl StateBounds {
    pub fn geo(&self) -> GeoBounds {
        GeoBounds::new(self.north, self.south, self.east, self.west)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct State {
    pub id: String,
    pub name: String,
    /// Two-letter postal code.
    pub code: String,
    pub center_lat: f64,
    pub center_lon: f64,
    pub bounds: StateBounds,
}

impl State {
    pub fn center(&self) -> GeoPoint {
        GeoPoint::new(self.center_lat, self.center_lon)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct City {
    pub id: String,
    pub name: String,
    pub state_id: String,
    pub state_code: String,
    pub lat: f64,
    pub lon: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub population: Option<u64>,
}

impl City {
    pub fn position(&self) -> GeoPoint {
        GeoPoint::new(self.lat, self.lon)
    }
}

/// One city's measured value for one year.
///
/// `id` is derived as `"<city_id>-<year>"`; exactly one point exists per
/// (city, year) pair.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MetricPoint {
    pub id: String,
    pub city_id: String,
    pub city_name: String,
    pub state_id: String,
    pub state_code: String,
    pub lat: f64,
    pub lon: f64,
    pub value: f64,
    pub year: i32,
}

impl MetricPoint {
    pub fn position(&self) -> GeoPoint {
        GeoPoint::new(self.lat, self.lon)
    }
}

/// The full in-memory dataset.
///
/// Loaded once per process; read-only afterwards. Vec order is load order and
/// is the public iteration order of every query.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Dataset {
    pub states: Vec<State>,
    pub cities: Vec<City>,
    pub metrics: Vec<MetricPoint>,
}

impl Dataset {
    pub fn state(&self, id: &str) -> Option<&State> {
        self.states.iter().find(|s| s.id == id)
    }

    pub fn city(&self, id: &str) -> Option<&City> {
        self.cities.iter().find(|c| c.id == id)
    }
}
