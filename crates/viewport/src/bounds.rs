use foundation::geo::{GeoBounds, GeoPoint};

/// Outward padding applied to each side, as a fraction of the span.
pub const BOUNDS_PADDING: f64 = 0.1;

/// Padded bounding box of a point set.
///
/// `None` for an empty input; callers treat that as "no camera move". A set
/// of identical points yields a zero-span box, before and after padding.
pub fn compute_bounds<I>(points: I) -> Option<GeoBounds>
where
    I: IntoIterator<Item = GeoPoint>,
{
    let mut iter = points.into_iter();
    let first = iter.next()?;

    let mut north = first.lat;
    let mut south = first.lat;
    let mut east = first.lon;
    let mut west = first.lon;

    for p in iter {
        north = north.max(p.lat);
        south = south.min(p.lat);
        east = east.max(p.lon);
        west = west.min(p.lon);
    }

    Some(GeoBounds::new(north, south, east, west).padded(BOUNDS_PADDING))
}
