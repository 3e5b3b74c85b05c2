use crate::core::{ChartGeometry, PlotGeometry};

/// Ease-in-out cubic over `[0, 1]`.
#[must_use]
pub fn ease_in_out_cubic(t: f64) -> f64 {
    if t < 0.5 {
        4.0 * t * t * t
    } else {
        let u = -2.0 * t + 2.0;
        1.0 - u * u * u / 2.0
    }
}

/// Tween between two geometry snapshots.
///
/// Plots are matched by z-order. Interpolation happens only when every pair
/// has the same point count and path structure; otherwise the transition cuts
/// over to the target. Grid lines and labels always come from the target.
#[derive(Debug, Clone, PartialEq)]
pub struct GeometryTransition {
    from: ChartGeometry,
    to: ChartGeometry,
    interpolated: bool,
}

impl GeometryTransition {
    #[must_use]
    pub fn new(from: ChartGeometry, to: ChartGeometry) -> Self {
        let interpolated = from.plots.len() == to.plots.len()
            && from
                .plots
                .iter()
                .zip(&to.plots)
                .all(|(left, right)| plots_correspond(left, right));
        Self {
            from,
            to,
            interpolated,
        }
    }

    #[must_use]
    pub fn is_interpolated(&self) -> bool {
        self.interpolated
    }

    #[must_use]
    pub fn source(&self) -> &ChartGeometry {
        &self.from
    }

    #[must_use]
    pub fn target(&self) -> &ChartGeometry {
        &self.to
    }

    /// Geometry at linear `progress` in `[0, 1]`; easing is applied internally.
    ///
    /// Non-finite progress is treated as finished.
    #[must_use]
    pub fn frame_at(&self, progress: f64) -> ChartGeometry {
        let progress = if progress.is_finite() {
            progress.clamp(0.0, 1.0)
        } else {
            1.0
        };
        if !self.interpolated || progress >= 1.0 {
            return self.to.clone();
        }

        let t = ease_in_out_cubic(progress);
        let mut frame = self.to.clone();
        for (target, source) in frame.plots.iter_mut().zip(&self.from.plots) {
            tween_plot(source, target, t);
        }
        frame
    }
}

fn plots_correspond(left: &PlotGeometry, right: &PlotGeometry) -> bool {
    left.points.len() == right.points.len()
        && left.markers.len() == right.markers.len()
        && left.path.is_compatible_with(&right.path)
        && match (&left.fill, &right.fill) {
            (Some(a), Some(b)) => a.is_compatible_with(b),
            (None, None) => true,
            _ => false,
        }
}

/// Writes `lerp(source, target, t)` into `target`; shapes were checked up front.
fn tween_plot(source: &PlotGeometry, target: &mut PlotGeometry, t: f64) {
    for (to, from) in target.normalized.iter_mut().zip(&source.normalized) {
        *to = from.lerp(*to, t);
    }
    for (to, from) in target.points.iter_mut().zip(&source.points) {
        *to = from.lerp(*to, t);
    }
    for (to, from) in target.markers.iter_mut().zip(&source.markers) {
        *to = from.lerp(*to, t);
    }
    if let Some(path) = source.path.lerp(&target.path, t) {
        target.path = path;
    }
    let fill = match (&source.fill, &target.fill) {
        (Some(from), Some(to)) => from.lerp(to, t),
        _ => None,
    };
    if fill.is_some() {
        target.fill = fill;
    }
}
