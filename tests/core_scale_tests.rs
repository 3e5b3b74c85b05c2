use approx::assert_abs_diff_eq;
use line_chart_rs::core::{LinearScale, PlotArea, EdgeInsets, ValueRange, Viewport, guard_range};

#[test]
fn normalization_maps_range_ends_and_midpoint() {
    let scale = LinearScale::new(10.0, 110.0).expect("valid scale");

    assert_eq!(scale.normalize(10.0), 0.0);
    assert_eq!(scale.normalize(110.0), 1.0);
    assert_abs_diff_eq!(scale.normalize(60.0), 0.5, epsilon = 1e-12);
}

#[test]
fn normalization_round_trip_within_tolerance() {
    let scale = LinearScale::new(-3.5, 42.0).expect("valid scale");
    let original = 17.25;
    let recovered = scale.denormalize(scale.normalize(original));
    assert_abs_diff_eq!(recovered, original, epsilon = 1e-9);
}

#[test]
fn strict_scale_rejects_degenerate_domain() {
    assert!(LinearScale::new(3.0, 3.0).is_err());
    assert!(LinearScale::new(f64::NAN, 1.0).is_err());
}

#[test]
fn guarded_scale_widens_degenerate_range_around_value() {
    let scale = LinearScale::guarded(ValueRange::new(7.0, 7.0));
    assert_eq!(scale.domain(), (6.5, 7.5));
    assert_eq!(scale.normalize(7.0), 0.5);
}

#[test]
fn guarded_range_reorders_and_replaces_non_finite_bounds() {
    assert_eq!(
        guard_range(ValueRange::new(9.0, 1.0)),
        ValueRange::new(1.0, 9.0)
    );
    assert_eq!(
        guard_range(ValueRange::new(f64::NEG_INFINITY, 1.0)),
        ValueRange::new(0.0, 1.0)
    );
}

#[test]
fn plot_area_subtracts_margins_and_flips_y() {
    let area = PlotArea::from_viewport(Viewport::new(200, 100), EdgeInsets::new(10.0, 20.0, 30.0, 40.0));
    assert_eq!(area.left, 20.0);
    assert_eq!(area.top, 10.0);
    assert_eq!(area.width, 140.0);
    assert_eq!(area.height, 60.0);

    let bottom_left = area.project(0.0, 0.0);
    let top_right = area.project(1.0, 1.0);
    assert_eq!((bottom_left.x, bottom_left.y), (20.0, 70.0));
    assert_eq!((top_right.x, top_right.y), (160.0, 10.0));
}

#[test]
fn oversized_margins_collapse_plot_area() {
    let area = PlotArea::from_viewport(Viewport::new(50, 50), EdgeInsets::uniform(40.0));
    assert_eq!(area.width, 0.0);
    assert_eq!(area.height, 0.0);
}

#[test]
fn degenerate_range_widens_beyond_float_precision() {
    for value in [1e17, -1.7e18, f64::MAX, f64::MIN] {
        let scale = LinearScale::guarded(ValueRange::new(value, value));
        let (start, end) = scale.domain();
        assert!(start < end, "{value} stayed degenerate");
        assert!(start.is_finite() && end.is_finite());
        let normalized = scale.normalize(value);
        assert!((0.0..=1.0).contains(&normalized));
    }

    let scale = LinearScale::guarded(ValueRange::new(1e17, 1e17));
    assert_abs_diff_eq!(scale.normalize(1e17), 0.5, epsilon = 0.05);
}

#[test]
fn normalization_handles_spans_wider_than_f64_max() {
    let scale = LinearScale::guarded(ValueRange::new(-1e308, 1e308));
    assert_eq!(scale.normalize(-1e308), 0.0);
    assert_eq!(scale.normalize(1e308), 1.0);
    assert_eq!(scale.normalize(0.0), 0.5);
    assert_eq!(scale.denormalize(1.0), 1e308);
}
