use line_chart_rs::api::{LineChart, LineChartConfig};
use line_chart_rs::core::{
    Axis, DefaultTickLabeler, GeometryLayout, GridStep, IconHandle, TickLabeler, ValueRange,
    ValueRegion, Viewport, compute_geometry, tick_values,
};
use line_chart_rs::render::NullRenderer;

fn chart() -> LineChart<NullRenderer> {
    let config = LineChartConfig::default()
        .with_visible_region(ValueRegion::new(0.0, 10.0, 0.0, 10.0))
        .with_grid_steps(GridStep::Value(2.0), GridStep::Value(2.0));
    LineChart::new(NullRenderer::default(), Viewport::new(400, 300), config).expect("chart init")
}

#[test]
fn default_predicates_emit_every_step() {
    let mut chart = chart();
    let geometry = chart.geometry();
    let expected = vec![0.0, 2.0, 4.0, 6.0, 8.0, 10.0];

    for axis in [Axis::X, Axis::Y] {
        assert_eq!(geometry.grid_values(axis).collect::<Vec<_>>(), expected);
        assert_eq!(geometry.label_values(axis).collect::<Vec<_>>(), expected);
    }

    let texts: Vec<&str> = geometry
        .labels
        .iter()
        .filter(|label| label.axis == Axis::Y)
        .map(|label| label.text.as_str())
        .collect();
    assert_eq!(texts, vec!["0", "2", "4", "6", "8", "10"]);
}

#[test]
fn label_predicate_suppresses_only_matching_tick() {
    let mut chart = chart();
    chart.set_label_predicate(Axis::Y, |value| (value - 4.0).abs() > 1e-9);
    let geometry = chart.geometry();

    assert_eq!(
        geometry.label_values(Axis::Y).collect::<Vec<_>>(),
        vec![0.0, 2.0, 6.0, 8.0, 10.0]
    );
    assert_eq!(geometry.grid_values(Axis::Y).count(), 6);
    assert_eq!(geometry.label_values(Axis::X).count(), 6);
}

#[test]
fn grid_predicate_is_independent_from_label_predicate() {
    let mut chart = chart();
    chart.set_grid_predicate(Axis::X, |value| value > 5.0);
    let geometry = chart.geometry();

    assert_eq!(
        geometry.grid_values(Axis::X).collect::<Vec<_>>(),
        vec![6.0, 8.0, 10.0]
    );
    assert_eq!(geometry.label_values(Axis::X).count(), 6);
}

#[test]
fn formatters_and_icons_supply_label_content() {
    let mut chart = chart();
    chart.set_label_formatter(Axis::X, |value| format!("day {value}"));
    chart.set_label_formatter(Axis::Y, |value| format!("${value:.2}"));
    chart.set_y_icon_provider(|value| (value >= 8.0).then(|| IconHandle::new("flag")));
    let geometry = chart.geometry();

    let x_first = geometry
        .labels
        .iter()
        .find(|label| label.axis == Axis::X)
        .expect("x labels");
    assert_eq!(x_first.text, "day 0");
    assert!(x_first.icon.is_none());

    let y_labels: Vec<_> = geometry
        .labels
        .iter()
        .filter(|label| label.axis == Axis::Y)
        .collect();
    assert_eq!(y_labels[1].text, "$2.00");
    let icons: Vec<f64> = y_labels
        .iter()
        .filter(|label| label.icon.is_some())
        .map(|label| label.value)
        .collect();
    assert_eq!(icons, vec![8.0, 10.0]);
}

#[test]
fn clearing_callbacks_restores_defaults() {
    let mut chart = chart();
    chart.set_label_formatter(Axis::Y, |_| "x".to_owned());
    chart.set_label_predicate(Axis::Y, |_| false);
    chart.clear_label_formatter(Axis::Y);
    chart.clear_label_predicate(Axis::Y);
    let geometry = chart.geometry();

    let texts: Vec<&str> = geometry
        .labels
        .iter()
        .filter(|label| label.axis == Axis::Y)
        .map(|label| label.text.as_str())
        .collect();
    assert_eq!(texts, vec!["0", "2", "4", "6", "8", "10"]);
}

#[test]
fn malformed_grid_steps_produce_no_ticks() {
    let range = ValueRange::new(0.0, 10.0);
    assert!(tick_values(range, GridStep::Value(-2.0)).is_empty());
    assert!(tick_values(range, GridStep::Value(0.0)).is_empty());
    assert!(tick_values(range, GridStep::Value(f64::NAN)).is_empty());
    assert!(tick_values(range, GridStep::Count(0)).is_empty());
    assert!(tick_values(range, GridStep::None).is_empty());

    let mut layout = GeometryLayout::new(Viewport::new(100, 100));
    layout.x_grid_step = GridStep::Value(-1.0);
    let geometry = compute_geometry(&[], &layout, &DefaultTickLabeler);
    assert_eq!(geometry.grid_values(Axis::X).count(), 0);
    assert_eq!(geometry.grid_values(Axis::Y).count(), 4);
}

#[test]
fn value_step_starts_at_range_minimum() {
    let ticks = tick_values(ValueRange::new(1.0, 9.0), GridStep::Value(2.0));
    assert_eq!(ticks.as_slice(), &[1.0, 3.0, 5.0, 7.0, 9.0]);
}

#[test]
fn custom_labeler_drives_geometry_directly() {
    struct EvenOnly;

    impl TickLabeler for EvenOnly {
        fn should_draw_label(&self, _axis: Axis, value: f64) -> bool {
            value % 4.0 == 0.0
        }

        fn label_text(&self, axis: Axis, value: f64) -> String {
            format!("{axis:?}={value}")
        }
    }

    let mut layout = GeometryLayout::new(Viewport::new(100, 100));
    layout.visible_region = Some(ValueRegion::new(0.0, 8.0, 0.0, 8.0));
    layout.x_grid_step = GridStep::Value(2.0);
    layout.y_grid_step = GridStep::None;
    let geometry = compute_geometry(&[], &layout, &EvenOnly);

    let texts: Vec<&str> = geometry.labels.iter().map(|label| label.text.as_str()).collect();
    assert_eq!(texts, vec!["X=0", "X=4", "X=8"]);
    assert_eq!(geometry.grid_values(Axis::X).count(), 5);
}
