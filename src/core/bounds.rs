use crate::core::{DataPoint, LinePlot, ValueRange, ValueRegion};

/// Finite extents of `points` on both axes. Non-finite samples are skipped.
#[must_use]
pub fn data_bounds(points: &[DataPoint]) -> Option<(ValueRange, ValueRange)> {
    let mut finite = points.iter().filter(|point| point.is_finite());
    let first = finite.next()?;
    let seed = (
        ValueRange::new(first.x, first.x),
        ValueRange::new(first.y, first.y),
    );

    Some(finite.fold(seed, |(x, y), point| {
        (
            x.union(ValueRange::new(point.x, point.x)),
            y.union(ValueRange::new(point.y, point.y)),
        )
    }))
}

/// Union of all plot extents; `None` when no plot holds a finite point.
pub fn plots_bounds<'a>(plots: impl IntoIterator<Item = &'a LinePlot>) -> Option<ValueRegion> {
    plots
        .into_iter()
        .filter_map(LinePlot::data_bounds)
        .reduce(|(ax, ay), (bx, by)| (ax.union(bx), ay.union(by)))
        .map(|(x, y)| ValueRegion { x, y })
}

/// Region mapped onto the plot area before degenerate-range guarding.
///
/// An explicit region wins; otherwise data extents are used, and `[0, 1]` on
/// both axes when there is no data at all.
pub fn effective_region<'a>(
    explicit: Option<ValueRegion>,
    plots: impl IntoIterator<Item = &'a LinePlot>,
) -> ValueRegion {
    explicit
        .or_else(|| plots_bounds(plots))
        .unwrap_or(ValueRegion::new(0.0, 1.0, 0.0, 1.0))
}
