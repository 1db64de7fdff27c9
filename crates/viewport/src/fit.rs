use foundation::camera::CameraPose;
use foundation::geo::{GeoBounds, GeoPoint};

pub const MIN_ZOOM: f64 = 2.0;
pub const MAX_ZOOM: f64 = 12.0;
/// Zoom used when there is nothing to fit.
pub const DEFAULT_ZOOM: f64 = 4.0;

/// Pitch applied to every fitted pose, degrees.
pub const FITTED_PITCH: f64 = 45.0;

pub fn center_of(bounds: &GeoBounds) -> GeoPoint {
    bounds.center()
}

/// Zoom level at which `bounds` fits the viewport.
///
/// Each axis contributes `log2(360 / span)`; the smaller wins so both axes
/// fit, minus a half-level of margin, clamped to `[MIN_ZOOM, MAX_ZOOM]`.
/// A zero span makes an axis contribution infinite, which the clamp collapses
/// to `MAX_ZOOM`; the result is always finite.
pub fn zoom_for(bounds: &GeoBounds) -> f64 {
    let lat_zoom = axis_zoom(bounds.lat_span());
    let lon_zoom = axis_zoom(bounds.lon_span());
    (lat_zoom.min(lon_zoom) - 0.5).clamp(MIN_ZOOM, MAX_ZOOM)
}

fn axis_zoom(span_deg: f64) -> f64 {
    if span_deg <= 0.0 {
        // Degenerate axis: fully zoomed in once clamped.
        return f64::INFINITY;
    }
    (360.0 / span_deg).log2()
}

/// Camera pose framing `bounds`, or the default continental view for `None`.
///
/// Pitch is pinned to [`FITTED_PITCH`] and bearing to 0 so animations always
/// settle in the same orientation.
pub fn fit_camera(bounds: Option<GeoBounds>) -> CameraPose {
    match bounds {
        Some(b) => {
            let center = center_of(&b);
            CameraPose::new(center.lon, center.lat, zoom_for(&b), FITTED_PITCH, 0.0)
        }
        None => CameraPose {
            zoom: DEFAULT_ZOOM,
            ..CameraPose::default()
        },
    }
}

#[cfg(test)]
mod tests {
    use super::{DEFAULT_ZOOM, FITTED_PITCH, MAX_ZOOM, MIN_ZOOM, fit_camera, zoom_for};
    use crate::bounds::compute_bounds;
    use foundation::geo::{GeoBounds, GeoPoint};

    #[test]
    fn zoom_stays_in_clamp_range() {
        let cases = [
            GeoBounds::new(85.0, -85.0, 180.0, -180.0), // whole world
            GeoBounds::new(41.0, 29.0, -69.0, -81.0),   // multi-state
            GeoBounds::new(40.01, 40.0, -73.99, -74.0), // city block
        ];
        for b in cases {
            let z = zoom_for(&b);
            assert!(z.is_finite());
            assert!((MIN_ZOOM..=MAX_ZOOM).contains(&z), "zoom {z} out of range");
        }
    }

    #[test]
    fn wider_axis_wins() {
        // Lon span 40 degrees, lat span 10: the lon axis needs the smaller
        // zoom and must dictate the result.
        let b = GeoBounds::new(40.0, 30.0, -60.0, -100.0);
        let expected = (360.0_f64 / 40.0).log2() - 0.5;
        assert!((zoom_for(&b) - expected).abs() < 1e-12);
    }

    #[test]
    fn zero_span_box_is_max_zoom_not_nan() {
        let b = compute_bounds(vec![GeoPoint::new(40.0, -74.0); 5]).expect("bounds");
        let z = zoom_for(&b);
        assert!(z.is_finite());
        assert_eq!(z, MAX_ZOOM);
    }

    #[test]
    fn absent_bounds_fit_to_default_view() {
        let pose = fit_camera(None);
        assert_eq!(pose.zoom, DEFAULT_ZOOM);
        assert_eq!(pose.longitude, -98.5795);
        assert_eq!(pose.latitude, 39.8283);
    }

    #[test]
    fn fitted_pose_centers_the_box() {
        let b = GeoBounds::new(40.0, 30.0, -70.0, -80.0);
        let pose = fit_camera(Some(b));
        assert_eq!(pose.latitude, 35.0);
        assert_eq!(pose.longitude, -75.0);
        assert_eq!(pose.pitch, FITTED_PITCH);
        assert_eq!(pose.bearing, 0.0);
    }
}
