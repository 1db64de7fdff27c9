//! Query -> bounds -> fit -> animate, the way the map client drives it.

use std::sync::Arc;

use foundation::camera::CameraPose;
use foundation::time::Time;
use query::{MetricFilter, Resolver};
use runtime::ticker::ManualTicker;
use viewport::animator::{ANIMATION_DURATION_MS, CameraAnimator};
use viewport::bounds::compute_bounds;
use viewport::fit::{DEFAULT_ZOOM, FITTED_PITCH, MAX_ZOOM, MIN_ZOOM, fit_camera};

fn resolver() -> Resolver {
    Resolver::new(Arc::new(dataset::sample::generate()))
}

#[test]
fn filtered_metrics_produce_a_fitted_pose() {
    let r = resolver();
    let mut filter = MetricFilter::year(2023);
    filter.state_id = Some("4".to_string()); // Florida

    let points = r.metrics(&filter);
    assert_eq!(points.len(), 4);

    let bounds = compute_bounds(points.iter().map(|m| m.position())).expect("bounds");
    // All four Florida cities sit inside the padded box.
    for m in &points {
        assert!(m.lat <= bounds.north && m.lat >= bounds.south);
        assert!(m.lon <= bounds.east && m.lon >= bounds.west);
    }

    let pose = fit_camera(Some(bounds));
    assert!(pose.zoom >= MIN_ZOOM && pose.zoom <= MAX_ZOOM);
    assert_eq!(pose.pitch, FITTED_PITCH);
    assert!(pose.latitude > 24.0 && pose.latitude < 31.0);
    assert!(pose.longitude > -88.0 && pose.longitude < -80.0);
}

#[test]
fn empty_result_set_means_no_camera_move() {
    let r = resolver();
    let points = r.metrics(&MetricFilter::year(1900));
    assert!(points.is_empty());

    let bounds = compute_bounds(points.iter().map(|m| m.position()));
    assert!(bounds.is_none());

    // Fitting "nothing" still yields a defined default view.
    let pose = fit_camera(bounds);
    assert_eq!(pose.zoom, DEFAULT_ZOOM);
}

#[test]
fn single_city_filter_hits_the_zoom_ceiling() {
    let r = resolver();
    let mut filter = MetricFilter::year(2024);
    filter.city_id = Some("301".to_string()); // one point, zero-span box

    let points = r.metrics(&filter);
    let bounds = compute_bounds(points.iter().map(|m| m.position())).expect("bounds");
    let pose = fit_camera(Some(bounds));
    assert!(pose.zoom.is_finite());
    assert_eq!(pose.zoom, MAX_ZOOM);
    assert!((pose.latitude - 40.7128).abs() < 1e-9);
}

#[test]
fn camera_flies_to_each_new_filter_without_jumping() {
    let r = resolver();
    let mut ticker = ManualTicker::new();
    let mut animator = CameraAnimator::new(CameraPose::default());

    // Fly toward California's 2022 metrics.
    let mut filter = MetricFilter::year(2022);
    filter.state_id = Some("1".to_string());
    let ca = r.metrics(&filter);
    let ca_pose = fit_camera(compute_bounds(ca.iter().map(|m| m.position())));
    animator.animate_to(ca_pose, Time(0.0), &mut ticker);
    assert!(ticker.take_pending());

    let mid = animator.tick(Time(ANIMATION_DURATION_MS / 2.0), &mut ticker);
    assert!(ticker.take_pending());

    // User switches to Texas mid-flight: the new animation starts where the
    // camera currently is.
    filter.state_id = Some("2".to_string());
    let tx = r.metrics(&filter);
    let tx_pose = fit_camera(compute_bounds(tx.iter().map(|m| m.position())));
    animator.animate_to(tx_pose, Time(ANIMATION_DURATION_MS / 2.0), &mut ticker);
    assert_eq!(animator.pose(), mid);
    assert!(ticker.take_pending());

    // And settles exactly on the Texas target with no further ticks.
    let final_pose = animator.tick(
        Time(ANIMATION_DURATION_MS / 2.0 + ANIMATION_DURATION_MS),
        &mut ticker,
    );
    assert_eq!(final_pose, tx_pose);
    assert!(!animator.is_animating());
    assert!(!ticker.has_pending());
}
