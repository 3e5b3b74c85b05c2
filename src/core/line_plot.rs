use serde::{Deserialize, Serialize};

use crate::core::smoothing::{DEFAULT_TENSION, sanitize_tension};
use crate::core::{PointStore, ValueRange};
use crate::render::Color;

/// Marker drawn on each data point when enabled.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DataPointMarkerStyle {
    pub visible: bool,
    pub color: Color,
    pub background_color: Color,
    pub radius: f64,
    pub stroke_width: f64,
}

impl Default for DataPointMarkerStyle {
    fn default() -> Self {
        Self {
            visible: false,
            color: Color::BLACK,
            background_color: Color::WHITE,
            radius: 1.0,
            stroke_width: 1.0,
        }
    }
}

/// One named series plus its styling.
///
/// The plot exclusively owns its [`PointStore`]; replacing data means building a
/// new store and swapping it in with [`LinePlot::set_chart_data`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LinePlot {
    name: String,
    data: PointStore,
    color: Color,
    fill_color: Option<Color>,
    line_width: f64,
    marker: DataPointMarkerStyle,
    bezier_smoothing: bool,
    smoothing_tension: f64,
}

impl LinePlot {
    #[must_use]
    pub fn new(name: impl Into<String>, data: PointStore) -> Self {
        Self {
            name: name.into(),
            data,
            color: Color::rgb(0.2, 0.4, 0.8),
            fill_color: None,
            line_width: 1.0,
            marker: DataPointMarkerStyle::default(),
            bezier_smoothing: false,
            smoothing_tension: DEFAULT_TENSION,
        }
    }

    #[must_use]
    pub fn with_color(mut self, color: Color) -> Self {
        self.color = color;
        self
    }

    #[must_use]
    pub fn with_fill_color(mut self, fill_color: Color) -> Self {
        self.fill_color = Some(fill_color);
        self
    }

    #[must_use]
    pub fn with_line_width(mut self, line_width: f64) -> Self {
        self.line_width = line_width;
        self
    }

    #[must_use]
    pub fn with_data_points(mut self, marker: DataPointMarkerStyle) -> Self {
        self.marker = marker;
        self
    }

    #[must_use]
    pub fn with_smoothing(mut self, tension: f64) -> Self {
        self.bezier_smoothing = true;
        self.smoothing_tension = tension;
        self
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    #[must_use]
    pub fn data(&self) -> &PointStore {
        &self.data
    }

    /// Swaps the whole dataset and returns the previous store.
    pub fn set_chart_data(&mut self, data: PointStore) -> PointStore {
        std::mem::replace(&mut self.data, data)
    }

    #[must_use]
    pub fn color(&self) -> Color {
        self.color
    }

    pub fn set_color(&mut self, color: Color) {
        self.color = color;
    }

    #[must_use]
    pub fn fill_color(&self) -> Option<Color> {
        self.fill_color
    }

    pub fn set_fill_color(&mut self, fill_color: Option<Color>) {
        self.fill_color = fill_color;
    }

    #[must_use]
    pub fn line_width(&self) -> f64 {
        self.line_width
    }

    pub fn set_line_width(&mut self, line_width: f64) {
        self.line_width = line_width;
    }

    #[must_use]
    pub fn marker(&self) -> DataPointMarkerStyle {
        self.marker
    }

    pub fn set_marker(&mut self, marker: DataPointMarkerStyle) {
        self.marker = marker;
    }

    pub fn set_display_data_point(&mut self, visible: bool) {
        self.marker.visible = visible;
    }

    #[must_use]
    pub fn bezier_smoothing(&self) -> bool {
        self.bezier_smoothing
    }

    pub fn set_bezier_smoothing(&mut self, enabled: bool) {
        self.bezier_smoothing = enabled;
    }

    /// Effective tension in `[0, 1]`.
    #[must_use]
    pub fn smoothing_tension(&self) -> f64 {
        sanitize_tension(self.smoothing_tension)
    }

    pub fn set_smoothing_tension(&mut self, tension: f64) {
        self.smoothing_tension = tension;
    }

    /// Finite x/y extents of the data, `None` when no finite point exists.
    #[must_use]
    pub fn data_bounds(&self) -> Option<(ValueRange, ValueRange)> {
        crate::core::bounds::data_bounds(self.data.as_slice())
    }
}
