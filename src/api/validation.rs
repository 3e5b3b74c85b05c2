use crate::core::{EdgeInsets, ValueRegion, Viewport};
use crate::error::{ChartError, ChartResult};

use super::{LabelStyle, LineChartConfig};

pub(super) fn validate_viewport(viewport: Viewport) -> ChartResult<Viewport> {
    if !viewport.is_valid() {
        return Err(ChartError::InvalidViewport {
            width: viewport.width,
            height: viewport.height,
        });
    }
    Ok(viewport)
}

/// Grid steps are deliberately not checked: malformed steps render no ticks.
pub(super) fn validate_config(config: LineChartConfig) -> ChartResult<LineChartConfig> {
    validate_margin(config.margin)?;
    if let Some(region) = config.visible_region {
        validate_visible_region(region)?;
    }

    config.axis_color.validate()?;
    validate_positive_width(config.axis_line_width, "axis line width")?;
    config.inner_grid_color.validate()?;
    validate_positive_width(config.inner_grid_line_width, "inner grid line width")?;
    validate_label_style(config.x_label_style)?;
    validate_label_style(config.y_label_style)?;
    if let Some(color) = config.y_icon_background_color {
        color.validate()?;
    }

    if !config.label_padding_px.is_finite() || config.label_padding_px < 0.0 {
        return Err(ChartError::InvalidData(
            "label padding must be finite and >= 0".to_owned(),
        ));
    }
    if !config.animation_duration_secs.is_finite() || config.animation_duration_secs < 0.0 {
        return Err(ChartError::InvalidData(
            "animation duration must be finite and >= 0".to_owned(),
        ));
    }

    Ok(config)
}

pub(super) fn validate_visible_region(region: ValueRegion) -> ChartResult<ValueRegion> {
    if !region.x.is_finite() || !region.y.is_finite() {
        return Err(ChartError::InvalidData(
            "visible region bounds must be finite".to_owned(),
        ));
    }
    Ok(region)
}

fn validate_margin(margin: EdgeInsets) -> ChartResult<()> {
    for (side, value) in [
        ("top", margin.top),
        ("left", margin.left),
        ("bottom", margin.bottom),
        ("right", margin.right),
    ] {
        if !value.is_finite() || value < 0.0 {
            return Err(ChartError::InvalidData(format!(
                "margin `{side}` must be finite and >= 0"
            )));
        }
    }
    Ok(())
}

fn validate_label_style(style: LabelStyle) -> ChartResult<()> {
    if !style.font_size_px.is_finite() || style.font_size_px <= 0.0 {
        return Err(ChartError::InvalidData(
            "label font size must be finite and > 0".to_owned(),
        ));
    }
    style.text_color.validate()?;
    if let Some(background) = style.background_color {
        background.validate()?;
    }
    Ok(())
}

fn validate_positive_width(width: f64, what: &str) -> ChartResult<()> {
    if !width.is_finite() || width <= 0.0 {
        return Err(ChartError::InvalidData(format!(
            "{what} must be finite and > 0"
        )));
    }
    Ok(())
}
