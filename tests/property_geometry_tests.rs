use line_chart_rs::api::{LineChart, LineChartConfig};
use line_chart_rs::core::{
    DataPoint, GridStep, LinePlot, LinearScale, PointStore, ValueRange, Viewport, tick_values,
};
use line_chart_rs::render::NullRenderer;
use proptest::prelude::*;

fn chart() -> LineChart<NullRenderer> {
    let config = LineChartConfig::default().with_grid_steps(GridStep::Count(4), GridStep::Count(4));
    LineChart::new(NullRenderer::default(), Viewport::new(640, 480), config).expect("chart init")
}

proptest! {
    #[test]
    fn point_store_length_matches_request(count in 0usize..2_048) {
        prop_assert_eq!(PointStore::with_point_count(count).len(), count);
    }

    #[test]
    fn negative_counts_never_build_a_store(count in i64::MIN..0) {
        prop_assert!(PointStore::try_from(count).is_err());
    }

    #[test]
    fn normalization_is_linear(
        min in -1_000.0f64..1_000.0,
        span in 0.001f64..1_000.0,
        ratio in 0.0f64..=1.0
    ) {
        let scale = LinearScale::guarded(ValueRange::new(min, min + span));
        let value = min + span * ratio;
        prop_assert!((scale.normalize(value) - ratio).abs() <= 1e-6);
    }

    #[test]
    fn auto_fitted_points_stay_inside_plot_area(
        xs in proptest::collection::vec(-10_000.0f64..10_000.0, 1..64),
        ys in proptest::collection::vec(-10_000.0f64..10_000.0, 1..64),
        smoothing in any::<bool>()
    ) {
        let len = xs.len().min(ys.len());
        let points: Vec<DataPoint> = (0..len).map(|i| DataPoint::new(xs[i], ys[i])).collect();
        let mut plot = LinePlot::new("prop", PointStore::from_points(points));
        plot.set_bezier_smoothing(smoothing);

        let mut chart = chart();
        chart.add_plot(plot);
        let geometry = chart.geometry().clone();
        let area = geometry.plot_area;
        let plot = &geometry.plots[0];

        prop_assert_eq!(plot.points.len(), len);
        prop_assert_eq!(plot.path.segment_count(), len - 1);
        prop_assert_eq!(plot.path.anchor_points(), plot.points.clone());
        for point in &plot.points {
            prop_assert!(point.x >= area.left - 1e-6 && point.x <= area.right() + 1e-6);
            prop_assert!(point.y >= area.top - 1e-6 && point.y <= area.bottom() + 1e-6);
        }
        for normalized in &plot.normalized {
            prop_assert!((-1e-9..=1.0 + 1e-9).contains(&normalized.x));
            prop_assert!((-1e-9..=1.0 + 1e-9).contains(&normalized.y));
        }

        chart.render().expect("generated geometry renders");
    }

    #[test]
    fn value_step_ticks_are_evenly_spaced_and_bounded(
        min in -100.0f64..100.0,
        span in 1.0f64..100.0,
        step in 0.5f64..10.0
    ) {
        let range = ValueRange::new(min, min + span);
        let ticks = tick_values(range, GridStep::Value(step));

        prop_assert!(!ticks.is_empty());
        prop_assert_eq!(ticks[0], min);
        for tick in &ticks {
            prop_assert!(*tick >= range.min && *tick <= range.max);
        }
        for pair in ticks.windows(2) {
            prop_assert!(((pair[1] - pair[0]) - step).abs() <= 1e-6);
        }
    }
}
