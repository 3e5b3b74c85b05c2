//! Cardinal spline smoothing.
//!
//! Each segment `p1 -> p2` becomes one cubic Bézier whose control points follow
//! the cardinal-spline tangents:
//!
//! ```text
//! c1 = p1 + (1 - tension) * (p2 - p0) / 6
//! c2 = p2 - (1 - tension) * (p3 - p1) / 6
//! ```
//!
//! with `p0`/`p3` clamped to the end points at the series boundaries.
//! `tension = 0` is the Catmull-Rom spline, `tension = 1` collapses the controls
//! onto the end points and yields straight segments. Every segment ends on a
//! data point, so the curve passes through all inputs.

use crate::core::{PathCommand, PlotPath, ScreenPoint};

pub const DEFAULT_TENSION: f64 = 0.2;

/// Clamps `tension` into `[0, 1]`; non-finite input falls back to the default.
#[must_use]
pub fn sanitize_tension(tension: f64) -> f64 {
    if tension.is_finite() {
        tension.clamp(0.0, 1.0)
    } else {
        DEFAULT_TENSION
    }
}

/// Builds a smoothed path through `points` in the given order.
#[must_use]
pub fn cardinal_spline_path(points: &[ScreenPoint], tension: f64) -> PlotPath {
    let Some(first) = points.first().copied() else {
        return PlotPath::new();
    };

    let scale = (1.0 - sanitize_tension(tension)) / 6.0;
    let last_index = points.len() - 1;
    let mut path = PlotPath::with_capacity(points.len());
    path.push(PathCommand::MoveTo(first));

    for index in 0..last_index {
        let p0 = points[index.saturating_sub(1)];
        let p1 = points[index];
        let p2 = points[index + 1];
        let p3 = points[(index + 2).min(last_index)];

        let control1 = ScreenPoint::new(p1.x + (p2.x - p0.x) * scale, p1.y + (p2.y - p0.y) * scale);
        let control2 = ScreenPoint::new(p2.x - (p3.x - p1.x) * scale, p2.y - (p3.y - p1.y) * scale);
        path.push(PathCommand::CubicTo {
            control1,
            control2,
            to: p2,
        });
    }

    path
}

/// Point on a cubic Bézier at parameter `t`.
#[must_use]
pub fn cubic_point(
    start: ScreenPoint,
    control1: ScreenPoint,
    control2: ScreenPoint,
    end: ScreenPoint,
    t: f64,
) -> ScreenPoint {
    let u = 1.0 - t;
    let a = u * u * u;
    let b = 3.0 * u * u * t;
    let c = 3.0 * u * t * t;
    let d = t * t * t;
    ScreenPoint::new(
        a * start.x + b * control1.x + c * control2.x + d * end.x,
        a * start.y + b * control1.y + c * control2.y + d * end.y,
    )
}

/// Samples each cubic segment into `samples_per_segment` straight pieces.
///
/// Useful for hosts that can only draw polylines; straight segments are kept.
#[must_use]
pub fn flatten_path(path: &PlotPath, samples_per_segment: usize) -> Vec<ScreenPoint> {
    let samples = samples_per_segment.max(1);
    let mut output = Vec::new();
    let mut cursor: Option<ScreenPoint> = None;

    for command in path.commands() {
        match *command {
            PathCommand::MoveTo(point) | PathCommand::LineTo(point) => {
                output.push(point);
                cursor = Some(point);
            }
            PathCommand::CubicTo {
                control1,
                control2,
                to,
            } => {
                let start = cursor.unwrap_or(to);
                for step in 1..=samples {
                    let t = step as f64 / samples as f64;
                    output.push(cubic_point(start, control1, control2, to, t));
                }
                cursor = Some(to);
            }
            PathCommand::Close => {}
        }
    }

    output
}
