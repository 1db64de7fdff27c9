/// Easing curves over normalized progress `t` in `[0, 1]`.
///
/// All curves map 0 -> 0 and 1 -> 1.
pub fn ease_out_cubic(t: f64) -> f64 {
    1.0 - (1.0 - t).powi(3)
}

pub fn ease_in_out_cubic(t: f64) -> f64 {
    if t < 0.5 {
        4.0 * t * t * t
    } else {
        1.0 - (-2.0 * t + 2.0).powi(3) / 2.0
    }
}

/// Linear blend between `start` and `end` at eased progress `t`.
pub fn lerp(start: f64, end: f64, t: f64) -> f64 {
    start + (end - start) * t
}

#[cfg(test)]
mod tests {
    use super::{ease_in_out_cubic, ease_out_cubic, lerp};

    fn assert_close(a: f64, b: f64) {
        assert!((a - b).abs() < 1e-12, "expected {a} ~= {b}");
    }

    #[test]
    fn ease_out_cubic_endpoints() {
        assert_close(ease_out_cubic(0.0), 0.0);
        assert_close(ease_out_cubic(1.0), 1.0);
    }

    #[test]
    fn ease_out_cubic_decelerates() {
        // More than half of the travel happens in the first half of the time.
        assert!(ease_out_cubic(0.5) > 0.5);
        assert_close(ease_out_cubic(0.5), 0.875);
    }

    #[test]
    fn ease_in_out_cubic_is_symmetric() {
        assert_close(ease_in_out_cubic(0.5), 0.5);
        assert_close(
            ease_in_out_cubic(0.25) + ease_in_out_cubic(0.75),
            1.0,
        );
    }

    #[test]
    fn lerp_blends() {
        assert_close(lerp(10.0, 20.0, 0.0), 10.0);
        assert_close(lerp(10.0, 20.0, 0.5), 15.0);
        assert_close(lerp(10.0, 20.0, 1.0), 20.0);
    }
}
