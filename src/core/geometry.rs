use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::core::bounds::effective_region;
use crate::core::primitives::format_numeric_label;
use crate::core::smoothing::cardinal_spline_path;
use crate::core::ticks::tick_values;
use crate::core::{
    DataPointMarkerStyle, EdgeInsets, GridStep, LinePlot, LinearScale, PathCommand, PlotArea,
    PlotPath, ScreenPoint, ValueRange, ValueRegion, Viewport,
};
use crate::render::{Color, TextHAlign};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Axis {
    X,
    Y,
}

/// Opaque image reference resolved by the host (asset name, atlas key, ...).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct IconHandle(pub String);

impl IconHandle {
    #[must_use]
    pub fn new(key: impl Into<String>) -> Self {
        Self(key.into())
    }
}

/// Where value (Y) labels sit relative to the plot area.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ValueLabelPosition {
    /// Outside the left edge, right-aligned.
    #[default]
    Left,
    /// Outside the right edge, left-aligned.
    Right,
    /// Just inside the left edge, left-aligned over the plot.
    LeftMirrored,
}

/// Per-tick decisions delegated to the host.
///
/// Every method has a default, so an implementation only overrides what it
/// customizes: all labels and gridlines drawn, numeric label text, no icons.
pub trait TickLabeler {
    fn should_draw_label(&self, _axis: Axis, _value: f64) -> bool {
        true
    }

    fn should_draw_grid(&self, _axis: Axis, _value: f64) -> bool {
        true
    }

    fn label_text(&self, _axis: Axis, value: f64) -> String {
        format_numeric_label(value)
    }

    fn icon(&self, _axis: Axis, _value: f64) -> Option<IconHandle> {
        None
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultTickLabeler;

impl TickLabeler for DefaultTickLabeler {}

/// Layout inputs of one geometry pass.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeometryLayout {
    pub viewport: Viewport,
    pub margin: EdgeInsets,
    pub visible_region: Option<ValueRegion>,
    pub x_grid_step: GridStep,
    pub y_grid_step: GridStep,
    pub value_label_position: ValueLabelPosition,
    pub label_padding_px: f64,
}

impl GeometryLayout {
    #[must_use]
    pub fn new(viewport: Viewport) -> Self {
        Self {
            viewport,
            margin: EdgeInsets::default(),
            visible_region: None,
            x_grid_step: GridStep::default(),
            y_grid_step: GridStep::default(),
            value_label_position: ValueLabelPosition::default(),
            label_padding_px: 4.0,
        }
    }
}

/// Position in the unit square of the visible region; `(0, 0)` is the lower-left corner.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct NormalizedPoint {
    pub x: f64,
    pub y: f64,
}

impl NormalizedPoint {
    #[must_use]
    pub fn lerp(self, target: Self, t: f64) -> Self {
        Self {
            x: self.x + (target.x - self.x) * t,
            y: self.y + (target.y - self.y) * t,
        }
    }
}

/// Styling copied from the plot at computation time.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlotStyle {
    pub color: Color,
    pub line_width: f64,
    pub fill_color: Option<Color>,
    pub marker: DataPointMarkerStyle,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlotGeometry {
    pub name: String,
    pub style: PlotStyle,
    pub normalized: Vec<NormalizedPoint>,
    pub points: Vec<ScreenPoint>,
    pub path: PlotPath,
    /// Closed area under the line down to the plot-area bottom.
    pub fill: Option<PlotPath>,
    pub markers: Vec<ScreenPoint>,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GridLine {
    pub axis: Axis,
    pub value: f64,
    pub normalized: f64,
    pub from: ScreenPoint,
    pub to: ScreenPoint,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AxisLabel {
    pub axis: Axis,
    pub value: f64,
    pub normalized: f64,
    pub anchor: ScreenPoint,
    pub h_align: TextHAlign,
    pub text: String,
    pub icon: Option<IconHandle>,
}

/// Immutable result of one geometry pass.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartGeometry {
    pub viewport: Viewport,
    pub plot_area: PlotArea,
    pub x_range: ValueRange,
    pub y_range: ValueRange,
    pub plots: Vec<PlotGeometry>,
    pub grid_lines: Vec<GridLine>,
    pub labels: Vec<AxisLabel>,
}

impl ChartGeometry {
    pub fn grid_values(&self, axis: Axis) -> impl Iterator<Item = f64> + '_ {
        self.grid_lines
            .iter()
            .filter(move |line| line.axis == axis)
            .map(|line| line.value)
    }

    pub fn label_values(&self, axis: Axis) -> impl Iterator<Item = f64> + '_ {
        self.labels
            .iter()
            .filter(move |label| label.axis == axis)
            .map(|label| label.value)
    }
}

/// Computes the full geometry snapshot.
///
/// Total over its inputs: empty plot lists, degenerate ranges, malformed grid
/// steps and non-finite samples degrade the output instead of failing.
#[must_use]
pub fn compute_geometry(
    plots: &[&LinePlot],
    layout: &GeometryLayout,
    labeler: &dyn TickLabeler,
) -> ChartGeometry {
    let region = effective_region(layout.visible_region, plots.iter().copied());
    let x_scale = LinearScale::guarded(region.x);
    let y_scale = LinearScale::guarded(region.y);
    if x_scale.range() != region.x || y_scale.range() != region.y {
        debug!(
            x_min = region.x.min,
            x_max = region.x.max,
            y_min = region.y.min,
            y_max = region.y.max,
            "value region guarded before normalization"
        );
    }

    let plot_area = PlotArea::from_viewport(layout.viewport, layout.margin);
    let plot_geometries: Vec<PlotGeometry> = plots
        .iter()
        .map(|plot| project_plot(plot, x_scale, y_scale, plot_area))
        .collect();

    let mut grid_lines = Vec::new();
    let mut labels = Vec::new();
    for (axis, scale, step) in [
        (Axis::X, x_scale, layout.x_grid_step),
        (Axis::Y, y_scale, layout.y_grid_step),
    ] {
        for value in tick_values(scale.range(), step) {
            let normalized = scale.normalize(value);
            if labeler.should_draw_grid(axis, value) {
                grid_lines.push(grid_line(axis, value, normalized, plot_area));
            }
            if labeler.should_draw_label(axis, value) {
                labels.push(axis_label(axis, value, normalized, plot_area, layout, labeler));
            }
        }
    }

    trace!(
        plots = plot_geometries.len(),
        grid_lines = grid_lines.len(),
        labels = labels.len(),
        "computed chart geometry"
    );

    ChartGeometry {
        viewport: layout.viewport,
        plot_area,
        x_range: x_scale.range(),
        y_range: y_scale.range(),
        plots: plot_geometries,
        grid_lines,
        labels,
    }
}

fn project_plot(
    plot: &LinePlot,
    x_scale: LinearScale,
    y_scale: LinearScale,
    plot_area: PlotArea,
) -> PlotGeometry {
    let normalized: Vec<NormalizedPoint> = plot
        .data()
        .iter()
        .filter(|point| point.is_finite())
        .map(|point| NormalizedPoint {
            x: x_scale.normalize(point.x),
            y: y_scale.normalize(point.y),
        })
        .collect();
    let points: Vec<ScreenPoint> = normalized
        .iter()
        .map(|unit| plot_area.project(unit.x, unit.y))
        .collect();

    let path = if plot.bezier_smoothing() {
        cardinal_spline_path(&points, plot.smoothing_tension())
    } else {
        PlotPath::polyline(&points)
    };

    let fill = match (plot.fill_color(), points.first(), points.last()) {
        (Some(_), Some(first), Some(last)) if points.len() >= 2 => {
            let mut fill = path.clone();
            fill.push(PathCommand::LineTo(ScreenPoint::new(last.x, plot_area.bottom())));
            fill.push(PathCommand::LineTo(ScreenPoint::new(first.x, plot_area.bottom())));
            fill.push(PathCommand::Close);
            Some(fill)
        }
        _ => None,
    };

    let marker = plot.marker();
    let markers = if marker.visible {
        points.clone()
    } else {
        Vec::new()
    };

    PlotGeometry {
        name: plot.name().to_owned(),
        style: PlotStyle {
            color: plot.color(),
            line_width: plot.line_width(),
            fill_color: plot.fill_color(),
            marker,
        },
        normalized,
        points,
        path,
        fill,
        markers,
    }
}

fn grid_line(axis: Axis, value: f64, normalized: f64, area: PlotArea) -> GridLine {
    let (from, to) = match axis {
        Axis::X => {
            let x = area.project(normalized, 0.0).x;
            (ScreenPoint::new(x, area.top), ScreenPoint::new(x, area.bottom()))
        }
        Axis::Y => {
            let y = area.project(0.0, normalized).y;
            (ScreenPoint::new(area.left, y), ScreenPoint::new(area.right(), y))
        }
    };
    GridLine {
        axis,
        value,
        normalized,
        from,
        to,
    }
}

fn axis_label(
    axis: Axis,
    value: f64,
    normalized: f64,
    area: PlotArea,
    layout: &GeometryLayout,
    labeler: &dyn TickLabeler,
) -> AxisLabel {
    let padding = if layout.label_padding_px.is_finite() {
        layout.label_padding_px.max(0.0)
    } else {
        0.0
    };

    let (anchor, h_align, icon) = match axis {
        Axis::X => {
            let x = area.project(normalized, 0.0).x;
            (
                ScreenPoint::new(x, area.bottom() + padding),
                TextHAlign::Center,
                None,
            )
        }
        Axis::Y => {
            let y = area.project(0.0, normalized).y;
            let (x, h_align) = match layout.value_label_position {
                ValueLabelPosition::Left => (area.left - padding, TextHAlign::Right),
                ValueLabelPosition::Right => (area.right() + padding, TextHAlign::Left),
                ValueLabelPosition::LeftMirrored => (area.left + padding, TextHAlign::Left),
            };
            (
                ScreenPoint::new(x, y),
                h_align,
                labeler.icon(axis, value),
            )
        }
    };

    AxisLabel {
        axis,
        value,
        normalized,
        anchor,
        h_align,
        text: labeler.label_text(axis, value),
        icon,
    }
}
