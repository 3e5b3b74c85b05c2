use serde::{Deserialize, Serialize};

use crate::core::{EdgeInsets, GridStep, ValueLabelPosition, ValueRegion};
use crate::error::{ChartError, ChartResult};
use crate::render::Color;

/// Text styling for one axis' labels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LabelStyle {
    pub font_size_px: f64,
    pub text_color: Color,
    #[serde(default)]
    pub background_color: Option<Color>,
}

impl Default for LabelStyle {
    fn default() -> Self {
        Self {
            font_size_px: 10.0,
            text_color: Color::rgb(0.4, 0.4, 0.4),
            background_color: None,
        }
    }
}

/// Chart-wide configuration.
///
/// Serializable so hosts can persist chart setup; every field has a default
/// so partial JSON documents load.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LineChartConfig {
    #[serde(default = "default_margin")]
    pub margin: EdgeInsets,
    #[serde(default)]
    pub visible_region: Option<ValueRegion>,
    #[serde(default)]
    pub x_grid_step: GridStep,
    #[serde(default)]
    pub y_grid_step: GridStep,
    #[serde(default = "default_axis_color")]
    pub axis_color: Color,
    #[serde(default = "default_axis_line_width")]
    pub axis_line_width: f64,
    #[serde(default = "default_draw_inner_grid")]
    pub draw_inner_grid: bool,
    #[serde(default = "default_inner_grid_color")]
    pub inner_grid_color: Color,
    #[serde(default = "default_inner_grid_line_width")]
    pub inner_grid_line_width: f64,
    #[serde(default)]
    pub x_label_style: LabelStyle,
    #[serde(default)]
    pub y_label_style: LabelStyle,
    #[serde(default)]
    pub y_icon_background_color: Option<Color>,
    #[serde(default)]
    pub value_label_position: ValueLabelPosition,
    #[serde(default = "default_label_padding_px")]
    pub label_padding_px: f64,
    #[serde(default = "default_animation_duration_secs")]
    pub animation_duration_secs: f64,
}

impl Default for LineChartConfig {
    fn default() -> Self {
        Self {
            margin: default_margin(),
            visible_region: None,
            x_grid_step: GridStep::default(),
            y_grid_step: GridStep::default(),
            axis_color: default_axis_color(),
            axis_line_width: default_axis_line_width(),
            draw_inner_grid: default_draw_inner_grid(),
            inner_grid_color: default_inner_grid_color(),
            inner_grid_line_width: default_inner_grid_line_width(),
            x_label_style: LabelStyle::default(),
            y_label_style: LabelStyle::default(),
            y_icon_background_color: None,
            value_label_position: ValueLabelPosition::default(),
            label_padding_px: default_label_padding_px(),
            animation_duration_secs: default_animation_duration_secs(),
        }
    }
}

impl LineChartConfig {
    #[must_use]
    pub fn with_margin(mut self, margin: EdgeInsets) -> Self {
        self.margin = margin;
        self
    }

    /// Pins the mapped value range instead of fitting it to the data.
    #[must_use]
    pub fn with_visible_region(mut self, region: ValueRegion) -> Self {
        self.visible_region = Some(region);
        self
    }

    #[must_use]
    pub fn with_grid_steps(mut self, x_grid_step: GridStep, y_grid_step: GridStep) -> Self {
        self.x_grid_step = x_grid_step;
        self.y_grid_step = y_grid_step;
        self
    }

    #[must_use]
    pub fn with_value_label_position(mut self, position: ValueLabelPosition) -> Self {
        self.value_label_position = position;
        self
    }

    #[must_use]
    pub fn with_inner_grid(mut self, enabled: bool) -> Self {
        self.draw_inner_grid = enabled;
        self
    }

    #[must_use]
    pub fn with_animation_duration_secs(mut self, seconds: f64) -> Self {
        self.animation_duration_secs = seconds;
        self
    }

    pub fn to_json_pretty(&self) -> ChartResult<String> {
        serde_json::to_string_pretty(self).map_err(|e| {
            ChartError::InvalidData(format!("failed to serialize chart config: {e}"))
        })
    }

    pub fn from_json_str(input: &str) -> ChartResult<Self> {
        let config: Self = serde_json::from_str(input).map_err(|e| {
            ChartError::InvalidData(format!("failed to parse chart config json: {e}"))
        })?;
        super::validation::validate_config(config)
    }
}

fn default_margin() -> EdgeInsets {
    EdgeInsets::uniform(5.0)
}

fn default_axis_color() -> Color {
    Color::BLACK
}

fn default_axis_line_width() -> f64 {
    1.0
}

fn default_draw_inner_grid() -> bool {
    true
}

fn default_inner_grid_color() -> Color {
    Color::rgb(0.85, 0.85, 0.85)
}

fn default_inner_grid_line_width() -> f64 {
    0.5
}

fn default_label_padding_px() -> f64 {
    4.0
}

fn default_animation_duration_secs() -> f64 {
    0.5
}
