use crate::core::types::ValueRange;
use crate::error::{ChartError, ChartResult};

/// Half-width substituted around a degenerate range so its value lands mid-band.
pub const DEGENERATE_HALF_SPAN: f64 = 0.5;

/// Minimum widening in ulps of the degenerate value, for magnitudes where
/// [`DEGENERATE_HALF_SPAN`] rounds away.
const DEGENERATE_RELATIVE_ULPS: f64 = 8.0;

/// Linear value-to-unit mapping for one axis.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearScale {
    domain_start: f64,
    domain_end: f64,
}

impl LinearScale {
    pub fn new(domain_start: f64, domain_end: f64) -> ChartResult<Self> {
        if !domain_start.is_finite() || !domain_end.is_finite() || domain_start == domain_end {
            return Err(ChartError::InvalidData(
                "scale domain must be finite and non-zero".to_owned(),
            ));
        }

        Ok(Self {
            domain_start,
            domain_end,
        })
    }

    /// Builds a scale that never fails.
    ///
    /// Reversed bounds are reordered, non-finite bounds fall back to `[0, 1]`
    /// and a zero-width range is widened by [`DEGENERATE_HALF_SPAN`] on each side
    /// (more for magnitudes where that would round away).
    #[must_use]
    pub fn guarded(range: ValueRange) -> Self {
        let range = guard_range(range);
        Self {
            domain_start: range.min,
            domain_end: range.max,
        }
    }

    #[must_use]
    pub fn domain(self) -> (f64, f64) {
        (self.domain_start, self.domain_end)
    }

    #[must_use]
    pub fn range(self) -> ValueRange {
        ValueRange::new(self.domain_start, self.domain_end)
    }

    /// `(value - start) / (end - start)`; values outside the domain leave `[0, 1]`.
    ///
    /// Domains wider than `f64::MAX` are evaluated at half scale.
    #[must_use]
    pub fn normalize(self, value: f64) -> f64 {
        let span = self.domain_end - self.domain_start;
        if span.is_finite() {
            return (value - self.domain_start) / span;
        }
        (value / 2.0 - self.domain_start / 2.0) / (self.domain_end / 2.0 - self.domain_start / 2.0)
    }

    #[must_use]
    pub fn denormalize(self, unit: f64) -> f64 {
        let span = self.domain_end - self.domain_start;
        if span.is_finite() {
            return self.domain_start + unit * span;
        }
        self.domain_start * (1.0 - unit) + self.domain_end * unit
    }
}

/// Range normalization shared by [`LinearScale::guarded`] and bound reporting.
#[must_use]
pub fn guard_range(range: ValueRange) -> ValueRange {
    if !range.is_finite() {
        return ValueRange::new(0.0, 1.0);
    }

    let (min, max) = if range.min <= range.max {
        (range.min, range.max)
    } else {
        (range.max, range.min)
    };

    if min == max {
        let half = (min.abs() * f64::EPSILON * DEGENERATE_RELATIVE_ULPS).max(DEGENERATE_HALF_SPAN);
        return ValueRange::new((min - half).max(f64::MIN), (max + half).min(f64::MAX));
    }

    ValueRange::new(min, max)
}
