use crate::core::{Axis, AxisLabel, ChartGeometry, PlotGeometry, ValueLabelPosition};
use crate::render::{
    CirclePrimitive, Color, IconPrimitive, LinePrimitive, PathPrimitive, RenderFrame, TextHAlign,
    TextPrimitive,
};

use super::LineChartConfig;

const ICON_TEXT_GAP_PX: f64 = 2.0;
const ICON_FONT_SCALE: f64 = 1.2;

/// Turns a geometry snapshot into draw commands.
///
/// Plots keep insertion order, so later plots draw over earlier ones. Styling
/// that cannot be drawn (non-positive widths or radii, out-of-range color
/// channels) drops that primitive instead of producing an invalid frame.
#[must_use]
pub fn build_render_frame(geometry: &ChartGeometry, config: &LineChartConfig) -> RenderFrame {
    let mut frame = RenderFrame::new(geometry.viewport);

    if config.draw_inner_grid {
        frame.lines.extend(geometry.grid_lines.iter().map(|line| {
            LinePrimitive::new(
                line.from.x,
                line.from.y,
                line.to.x,
                line.to.y,
                config.inner_grid_line_width,
                config.inner_grid_color,
            )
        }));
    }
    push_axis_lines(&mut frame, geometry, config);

    for plot in &geometry.plots {
        push_plot(&mut frame, plot);
    }

    for label in &geometry.labels {
        push_label(&mut frame, label, config);
    }

    frame
}

fn push_axis_lines(frame: &mut RenderFrame, geometry: &ChartGeometry, config: &LineChartConfig) {
    let area = geometry.plot_area;
    let axis_x = match config.value_label_position {
        ValueLabelPosition::Right => area.right(),
        ValueLabelPosition::Left | ValueLabelPosition::LeftMirrored => area.left,
    };
    frame.lines.push(LinePrimitive::new(
        area.left,
        area.bottom(),
        area.right(),
        area.bottom(),
        config.axis_line_width,
        config.axis_color,
    ));
    frame.lines.push(LinePrimitive::new(
        axis_x,
        area.top,
        axis_x,
        area.bottom(),
        config.axis_line_width,
        config.axis_color,
    ));
}

fn push_plot(frame: &mut RenderFrame, plot: &PlotGeometry) {
    let style = plot.style;
    let fill_color = style.fill_color.filter(|color| drawable_color(*color));
    if let (Some(fill), Some(color)) = (&plot.fill, fill_color) {
        frame.paths.push(PathPrimitive::filled(fill.clone(), color));
    }
    if plot.path.segment_count() > 0
        && style.line_width.is_finite()
        && style.line_width > 0.0
        && drawable_color(style.color)
    {
        frame.paths.push(PathPrimitive::stroked(
            plot.path.clone(),
            style.color,
            style.line_width,
        ));
    }

    let marker = style.marker;
    let drawable_marker = marker.radius.is_finite()
        && marker.radius > 0.0
        && marker.stroke_width.is_finite()
        && marker.stroke_width > 0.0
        && drawable_color(marker.color)
        && drawable_color(marker.background_color);
    if drawable_marker {
        frame
            .circles
            .extend(plot.markers.iter().map(|center| CirclePrimitive {
                center: *center,
                radius: marker.radius,
                fill: marker.background_color,
                stroke: marker.color,
                stroke_width: marker.stroke_width,
            }));
    }
}

fn drawable_color(color: Color) -> bool {
    color.validate().is_ok()
}

fn push_label(frame: &mut RenderFrame, label: &AxisLabel, config: &LineChartConfig) {
    let style = match label.axis {
        Axis::X => config.x_label_style,
        Axis::Y => config.y_label_style,
    };
    let mut text_x = label.anchor.x;
    let text_y = match label.axis {
        Axis::X => label.anchor.y + style.font_size_px / 2.0,
        Axis::Y => label.anchor.y,
    };

    if let Some(icon) = &label.icon {
        let size_px = style.font_size_px * ICON_FONT_SCALE;
        frame.icons.push(IconPrimitive {
            icon: icon.clone(),
            x: label.anchor.x,
            y: text_y,
            size_px,
            background: config.y_icon_background_color,
            h_align: label.h_align,
        });
        let shift = size_px + ICON_TEXT_GAP_PX;
        match label.h_align {
            TextHAlign::Right => text_x -= shift,
            TextHAlign::Left => text_x += shift,
            TextHAlign::Center => {}
        }
    }

    if label.text.is_empty() {
        return;
    }
    frame.texts.push(
        TextPrimitive::new(
            label.text.clone(),
            text_x,
            text_y,
            style.font_size_px,
            style.text_color,
            label.h_align,
        )
        .with_background(style.background_color.filter(|color| *color != Color::TRANSPARENT)),
    );
}
