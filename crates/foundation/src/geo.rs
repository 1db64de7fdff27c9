/// A geographic position in WGS84 degrees.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct GeoPoint {
    pub lat: f64,
    pub lon: f64,
}

impl GeoPoint {
    pub fn new(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }
}

/// Axis-aligned bounding box in latitude/longitude degrees.
///
/// Invariant after construction: `north >= south` and `east >= west`.
/// A box produced from a single point (or identical points) has zero spans;
/// that is a valid, deliberately representable state.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct GeoBounds {
    pub north: f64,
    pub south: f64,
    pub east: f64,
    pub west: f64,
}

impl GeoBounds {
    pub fn new(north: f64, south: f64, east: f64, west: f64) -> Self {
        Self {
            north,
            south,
            east,
            west,
        }
    }

    pub fn lat_span(&self) -> f64 {
        self.north - self.south
    }

    pub fn lon_span(&self) -> f64 {
        self.east - self.west
    }

    /// Arithmetic midpoint of the box.
    pub fn center(&self) -> GeoPoint {
        GeoPoint::new(
            (self.north + self.south) / 2.0,
            (self.east + self.west) / 2.0,
        )
    }

    /// Grow the box outward on every side by `fraction` of the matching span.
    ///
    /// A zero-span axis stays zero-span: padding is proportional, not absolute.
    pub fn padded(&self, fraction: f64) -> Self {
        let lat_pad = self.lat_span() * fraction;
        let lon_pad = self.lon_span() * fraction;
        Self {
            north: self.north + lat_pad,
            south: self.south - lat_pad,
            east: self.east + lon_pad,
            west: self.west - lon_pad,
        }
    }
}
