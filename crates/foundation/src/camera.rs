/// A snapshot of the 3D map viewport.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct CameraPose {
    pub longitude: f64,
    pub latitude: f64,
    pub zoom: f64,
    /// Tilt from vertical, degrees.
    pub pitch: f64,
    /// Rotation from north, degrees.
    pub bearing: f64,
}

impl CameraPose {
    pub const fn new(longitude: f64, latitude: f64, zoom: f64, pitch: f64, bearing: f64) -> Self {
        Self {
            longitude,
            latitude,
            zoom,
            pitch,
            bearing,
        }
    }
}

/// Initial view: continental United States.
impl Default for CameraPose {
    fn default() -> Self {
        Self::new(-98.5795, 39.8283, 4.0, 45.0, 0.0)
    }
}
