use dataset::MetricPoint;

/// Footprint radius of a rendered column, meters.
pub const COLUMN_RADIUS_M: f64 = 2000.0;
/// Elevation of the tallest column in a result set, meters.
pub const MAX_ELEVATION_M: f64 = 50_000.0;

/// Blue gradient endpoints: the normalized value blends each channel from
/// base toward base + range.
const COLOR_BASE: [f64; 3] = [59.0, 130.0, 200.0];
const COLOR_RANGE: [f64; 3] = [196.0, 125.0, 55.0];
const COLOR_ALPHA: u8 = 200;

/// One renderable extruded column, ready for the render surface.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ColumnPoint {
    /// `[lon, lat]`, render-surface axis order.
    pub position: [f64; 2],
    pub fill_color: [u8; 4],
    pub elevation: f64,
}

/// Derive renderable columns from a metric result set.
///
/// Color and elevation are normalized against the min/max value of this
/// result set, not any global scale. A set whose values are all equal
/// normalizes to 0 (no divide by zero); order follows the input.
pub fn column_points(metrics: &[&MetricPoint]) -> Vec<ColumnPoint> {
    if metrics.is_empty() {
        return Vec::new();
    }

    let mut min = f64::INFINITY;
    let mut max = f64::NEG_INFINITY;
    for m in metrics {
        min = min.min(m.value);
        max = max.max(m.value);
    }
    let span = max - min;

    metrics
        .iter()
        .map(|m| {
            let normalized = if span > 0.0 { (m.value - min) / span } else { 0.0 };
            let elevation = if max > 0.0 {
                (m.value / max) * MAX_ELEVATION_M
            } else {
                0.0
            };
            ColumnPoint {
                position: [m.lon, m.lat],
                fill_color: [
                    channel(0, normalized),
                    channel(1, normalized),
                    channel(2, normalized),
                    COLOR_ALPHA,
                ],
                elevation,
            }
        })
        .collect()
}

fn channel(i: usize, normalized: f64) -> u8 {
    (COLOR_BASE[i] + normalized * COLOR_RANGE[i]).floor() as u8
}
