use serde_json::json;

use crate::request::QueryError;
use crate::resolver::Resolver;

/// Half-width in degrees of the square drawn around a city.
pub const CITY_BUFFER_DEG: f64 = 0.1;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum BoundaryKind {
    State,
    City,
}

impl BoundaryKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            BoundaryKind::State => "STATE",
            BoundaryKind::City => "CITY",
        }
    }
}

impl std::str::FromStr for BoundaryKind {
    type Err = QueryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "STATE" => Ok(BoundaryKind::State),
            "CITY" => Ok(BoundaryKind::City),
            other => Err(QueryError::UnknownBoundaryKind(other.to_string())),
        }
    }
}

/// A derived administrative outline.
///
/// `geojson` is a serialized GeoJSON `Feature` carrying a closed polygon ring
/// plus a `properties` bag; consumers treat it as opaque.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Boundary {
    pub kind: BoundaryKind,
    pub id: String,
    pub geojson: String,
}

/// Closed 5-point rectangle ring, wound
/// (west,north) -> (east,north) -> (east,south) -> (west,south) -> (west,north).
fn closed_ring(west: f64, north: f64, east: f64, south: f64) -> Vec<[f64; 2]> {
    vec![
        [west, north],
        [east, north],
        [east, south],
        [west, south],
        [west, north],
    ]
}

fn polygon_feature(ring: Vec<[f64; 2]>, properties: serde_json::Value) -> String {
    json!({
        "type": "Feature",
        "geometry": {
            "type": "Polygon",
            "coordinates": [ring],
        },
        "properties": properties,
    })
    .to_string()
}

impl Resolver {
    /// Derive the outline for a state or city.
    ///
    /// States use their rectangular bounds; cities a fixed-size square around
    /// their coordinate. An id that does not resolve is `None`, not an error.
    pub fn boundary(&self, kind: BoundaryKind, id: &str) -> Option<Boundary> {
        let geojson = match kind {
            BoundaryKind::State => {
                let state = self.dataset().state(id)?;
                let b = &state.bounds;
                polygon_feature(
                    closed_ring(b.west, b.north, b.east, b.south),
                    json!({ "name": state.name, "code": state.code }),
                )
            }
            BoundaryKind::City => {
                let city = self.dataset().city(id)?;
                polygon_feature(
                    closed_ring(
                        city.lon - CITY_BUFFER_DEG,
                        city.lat + CITY_BUFFER_DEG,
                        city.lon + CITY_BUFFER_DEG,
                        city.lat - CITY_BUFFER_DEG,
                    ),
                    json!({ "name": city.name }),
                )
            }
        };

        Some(Boundary {
            kind,
            id: id.to_string(),
            geojson,
        })
    }
}
