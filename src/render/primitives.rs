use serde::{Deserialize, Serialize};

use crate::core::{PlotPath, ScreenPoint};
use crate::error::{ChartError, ChartResult};

/// RGBA color in normalized 0..=1 channel values.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Color {
    pub red: f64,
    pub green: f64,
    pub blue: f64,
    pub alpha: f64,
}

impl Color {
    pub const BLACK: Self = Self::rgb(0.0, 0.0, 0.0);
    pub const WHITE: Self = Self::rgb(1.0, 1.0, 1.0);
    pub const TRANSPARENT: Self = Self::rgba(0.0, 0.0, 0.0, 0.0);

    #[must_use]
    pub const fn rgba(red: f64, green: f64, blue: f64, alpha: f64) -> Self {
        Self {
            red,
            green,
            blue,
            alpha,
        }
    }

    #[must_use]
    pub const fn rgb(red: f64, green: f64, blue: f64) -> Self {
        Self::rgba(red, green, blue, 1.0)
    }

    #[must_use]
    pub const fn with_alpha(self, alpha: f64) -> Self {
        Self::rgba(self.red, self.green, self.blue, alpha)
    }

    pub fn validate(self) -> ChartResult<()> {
        for (channel, value) in [
            ("red", self.red),
            ("green", self.green),
            ("blue", self.blue),
            ("alpha", self.alpha),
        ] {
            if !value.is_finite() || !(0.0..=1.0).contains(&value) {
                return Err(ChartError::InvalidData(format!(
                    "color channel `{channel}` must be finite and in [0, 1]"
                )));
            }
        }
        Ok(())
    }
}

fn validate_stroke_width(width: f64, what: &str) -> ChartResult<()> {
    if !width.is_finite() || width <= 0.0 {
        return Err(ChartError::InvalidData(format!(
            "{what} stroke width must be finite and > 0"
        )));
    }
    Ok(())
}

fn validate_point(point: ScreenPoint, what: &str) -> ChartResult<()> {
    if !point.x.is_finite() || !point.y.is_finite() {
        return Err(ChartError::InvalidData(format!(
            "{what} coordinates must be finite"
        )));
    }
    Ok(())
}

/// Draw command for one straight line (axis or gridline) in pixel space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinePrimitive {
    pub x1: f64,
    pub y1: f64,
    pub x2: f64,
    pub y2: f64,
    pub stroke_width: f64,
    pub color: Color,
}

impl LinePrimitive {
    #[must_use]
    pub const fn new(x1: f64, y1: f64, x2: f64, y2: f64, stroke_width: f64, color: Color) -> Self {
        Self {
            x1,
            y1,
            x2,
            y2,
            stroke_width,
            color,
        }
    }

    pub fn validate(self) -> ChartResult<()> {
        validate_point(ScreenPoint::new(self.x1, self.y1), "line")?;
        validate_point(ScreenPoint::new(self.x2, self.y2), "line")?;
        validate_stroke_width(self.stroke_width, "line")?;
        self.color.validate()
    }
}

/// Stroked and/or filled path, one per plot line or plot fill.
#[derive(Debug, Clone, PartialEq)]
pub struct PathPrimitive {
    pub path: PlotPath,
    pub stroke: Option<(Color, f64)>,
    pub fill: Option<Color>,
}

impl PathPrimitive {
    #[must_use]
    pub fn stroked(path: PlotPath, color: Color, stroke_width: f64) -> Self {
        Self {
            path,
            stroke: Some((color, stroke_width)),
            fill: None,
        }
    }

    #[must_use]
    pub fn filled(path: PlotPath, color: Color) -> Self {
        Self {
            path,
            stroke: None,
            fill: Some(color),
        }
    }

    pub fn validate(&self) -> ChartResult<()> {
        if self.stroke.is_none() && self.fill.is_none() {
            return Err(ChartError::InvalidData(
                "path primitive needs a stroke or a fill".to_owned(),
            ));
        }
        for point in self.path.points() {
            validate_point(point, "path")?;
        }
        if let Some((color, width)) = self.stroke {
            validate_stroke_width(width, "path")?;
            color.validate()?;
        }
        if let Some(color) = self.fill {
            color.validate()?;
        }
        Ok(())
    }
}

/// Data-point marker.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CirclePrimitive {
    pub center: ScreenPoint,
    pub radius: f64,
    pub fill: Color,
    pub stroke: Color,
    pub stroke_width: f64,
}

impl CirclePrimitive {
    pub fn validate(self) -> ChartResult<()> {
        validate_point(self.center, "circle")?;
        if !self.radius.is_finite() || self.radius <= 0.0 {
            return Err(ChartError::InvalidData(
                "circle radius must be finite and > 0".to_owned(),
            ));
        }
        validate_stroke_width(self.stroke_width, "circle")?;
        self.fill.validate()?;
        self.stroke.validate()
    }
}

/// Horizontal text alignment relative to `TextPrimitive::x`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TextHAlign {
    Left,
    Center,
    Right,
}

/// Draw command for one label in pixel space. `y` is the vertical center.
#[derive(Debug, Clone, PartialEq)]
pub struct TextPrimitive {
    pub text: String,
    pub x: f64,
    pub y: f64,
    pub font_size_px: f64,
    pub color: Color,
    pub background: Option<Color>,
    pub h_align: TextHAlign,
}

impl TextPrimitive {
    #[must_use]
    pub fn new(
        text: impl Into<String>,
        x: f64,
        y: f64,
        font_size_px: f64,
        color: Color,
        h_align: TextHAlign,
    ) -> Self {
        Self {
            text: text.into(),
            x,
            y,
            font_size_px,
            color,
            background: None,
            h_align,
        }
    }

    #[must_use]
    pub fn with_background(mut self, background: Option<Color>) -> Self {
        self.background = background;
        self
    }

    pub fn validate(&self) -> ChartResult<()> {
        if self.text.is_empty() {
            return Err(ChartError::InvalidData(
                "text primitive must not be empty".to_owned(),
            ));
        }
        validate_point(ScreenPoint::new(self.x, self.y), "text")?;
        if !self.font_size_px.is_finite() || self.font_size_px <= 0.0 {
            return Err(ChartError::InvalidData(
                "font size must be finite and > 0".to_owned(),
            ));
        }
        if let Some(background) = self.background {
            background.validate()?;
        }
        self.color.validate()
    }
}

/// Host-resolved image drawn next to a value label.
#[derive(Debug, Clone, PartialEq)]
pub struct IconPrimitive {
    pub icon: crate::core::IconHandle,
    pub x: f64,
    pub y: f64,
    pub size_px: f64,
    pub background: Option<Color>,
    pub h_align: TextHAlign,
}

impl IconPrimitive {
    pub fn validate(&self) -> ChartResult<()> {
        validate_point(ScreenPoint::new(self.x, self.y), "icon")?;
        if !self.size_px.is_finite() || self.size_px <= 0.0 {
            return Err(ChartError::InvalidData(
                "icon size must be finite and > 0".to_owned(),
            ));
        }
        match self.background {
            Some(background) => background.validate(),
            None => Ok(()),
        }
    }
}
