use approx::assert_abs_diff_eq;
use line_chart_rs::core::{
    DefaultTickLabeler, GeometryLayout, GridStep, LinePlot, PathCommand, PlotPath, PointStore,
    ScreenPoint, ValueRegion, Viewport, cardinal_spline_path, compute_geometry, flatten_path,
};

fn layout() -> GeometryLayout {
    let mut layout = GeometryLayout::new(Viewport::new(200, 100));
    layout.visible_region = Some(ValueRegion::new(0.0, 2.0, 0.0, 10.0));
    layout.x_grid_step = GridStep::None;
    layout.y_grid_step = GridStep::None;
    layout
}

fn three_point_plot() -> LinePlot {
    LinePlot::new("triad", PointStore::from_values(&[2.0, 9.0, 4.0]))
}

#[test]
fn straight_plot_of_three_points_has_two_segments() {
    let plot = three_point_plot();
    let geometry = compute_geometry(&[&plot], &layout(), &DefaultTickLabeler);
    let path = &geometry.plots[0].path;

    assert_eq!(path.segment_count(), 2);
    assert!(!path.is_smooth());
    assert!(matches!(path.commands()[0], PathCommand::MoveTo(_)));
    assert!(matches!(path.commands()[1], PathCommand::LineTo(_)));
    assert!(matches!(path.commands()[2], PathCommand::LineTo(_)));
}

#[test]
fn smoothed_plot_passes_through_every_point() {
    let plot = three_point_plot().with_smoothing(0.3);
    let geometry = compute_geometry(&[&plot], &layout(), &DefaultTickLabeler);
    let plot_geometry = &geometry.plots[0];

    assert!(plot_geometry.path.is_smooth());
    assert_eq!(plot_geometry.path.segment_count(), 2);
    assert_eq!(plot_geometry.path.anchor_points(), plot_geometry.points);
}

#[test]
fn smoothing_keeps_data_order() {
    let points = [
        ScreenPoint::new(30.0, 0.0),
        ScreenPoint::new(10.0, 20.0),
        ScreenPoint::new(20.0, 5.0),
    ];
    let path = cardinal_spline_path(&points, 0.0);
    assert_eq!(path.anchor_points(), points.to_vec());
}

#[test]
fn smoothing_two_points_yields_single_curve() {
    let points = [ScreenPoint::new(0.0, 0.0), ScreenPoint::new(10.0, 10.0)];
    let path = cardinal_spline_path(&points, 0.5);
    assert_eq!(path.segment_count(), 1);
    assert_eq!(path.anchor_points(), points.to_vec());
}

#[test]
fn short_series_produce_trivial_paths() {
    assert!(cardinal_spline_path(&[], 0.2).is_empty());
    assert!(PlotPath::polyline(&[]).is_empty());

    let single = cardinal_spline_path(&[ScreenPoint::new(1.0, 1.0)], 0.2);
    assert_eq!(single.commands().len(), 1);
    assert_eq!(single.segment_count(), 0);
}

#[test]
fn catmull_rom_controls_follow_neighbour_tangent() {
    let points = [
        ScreenPoint::new(0.0, 0.0),
        ScreenPoint::new(6.0, 6.0),
        ScreenPoint::new(12.0, 0.0),
    ];
    let path = cardinal_spline_path(&points, 0.0);
    let PathCommand::CubicTo { control2, .. } = path.commands()[1] else {
        panic!("expected cubic segment");
    };
    // Tangent at the middle point is (p2 - p0) / 2 = (6, 0); control2 = p1 - tangent / 3.
    assert_abs_diff_eq!(control2.x, 4.0, epsilon = 1e-12);
    assert_abs_diff_eq!(control2.y, 6.0, epsilon = 1e-12);
}

#[test]
fn flattened_curve_stays_near_its_anchors() {
    let points = [
        ScreenPoint::new(0.0, 50.0),
        ScreenPoint::new(50.0, 0.0),
        ScreenPoint::new(100.0, 50.0),
    ];
    let flattened = flatten_path(&cardinal_spline_path(&points, 0.2), 8);
    assert_eq!(flattened.len(), 1 + 2 * 8);
    assert_eq!(flattened[8], points[1]);
    assert_eq!(*flattened.last().expect("points"), points[2]);
}
