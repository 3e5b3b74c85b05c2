use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::ValueRange;

/// Upper bound on ticks per axis; tiny steps over wide ranges are truncated.
pub const MAX_TICKS_PER_AXIS: usize = 1_024;

/// Relative slack used to keep the range end when float steps land just past it.
const TICK_END_TOLERANCE: f64 = 1e-9;

pub type TickValues = SmallVec<[f64; 16]>;

/// Tick spacing on one axis.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GridStep {
    /// No ticks on this axis.
    None,
    /// Ticks every `step` value units starting at the range minimum.
    Value(f64),
    /// Range split into `n` equal steps (`n + 1` ticks).
    Count(u32),
}

impl Default for GridStep {
    fn default() -> Self {
        Self::Count(3)
    }
}

/// Enumerates tick values for `range`.
///
/// Malformed steps (non-finite, zero or negative value steps, zero counts)
/// produce no ticks instead of failing.
#[must_use]
pub fn tick_values(range: ValueRange, step: GridStep) -> TickValues {
    let mut ticks = TickValues::new();
    if !range.is_finite() || range.max < range.min {
        return ticks;
    }

    match step {
        GridStep::None => {}
        GridStep::Value(step) => {
            if !step.is_finite() || step <= 0.0 {
                return ticks;
            }
            let limit = range.max + range.span().abs().max(step) * TICK_END_TOLERANCE;
            for index in 0..MAX_TICKS_PER_AXIS {
                // Multiply instead of accumulating to keep drift bounded.
                let value = range.min + step * index as f64;
                if value > limit {
                    break;
                }
                let value = value.min(range.max);
                // Steps below the precision of `range.min` round onto earlier ticks.
                if ticks.last().is_some_and(|last| value <= *last) {
                    continue;
                }
                ticks.push(value);
                if value >= range.max {
                    break;
                }
            }
        }
        GridStep::Count(count) => {
            if count == 0 {
                return ticks;
            }
            let count = (count as usize).min(MAX_TICKS_PER_AXIS - 1);
            let span = range.span();
            for index in 0..=count {
                let ratio = index as f64 / count as f64;
                let value = if span.is_finite() {
                    range.min + span * ratio
                } else {
                    range.min * (1.0 - ratio) + range.max * ratio
                };
                ticks.push(value);
            }
        }
    }

    ticks
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn value_step_keeps_range_end_despite_float_drift() {
        let ticks = tick_values(ValueRange::new(0.0, 0.3), GridStep::Value(0.1));
        assert_eq!(ticks.len(), 4);
        assert_eq!(ticks[3], 0.3);
    }

    #[test]
    fn tick_count_is_capped() {
        let ticks = tick_values(ValueRange::new(0.0, 1e9), GridStep::Value(1.0));
        assert_eq!(ticks.len(), MAX_TICKS_PER_AXIS);
    }

    #[test]
    fn value_step_below_float_precision_yields_distinct_ticks() {
        let ticks = tick_values(ValueRange::new(1e17, 1e17 + 1000.0), GridStep::Value(1.0));
        assert!(!ticks.is_empty());
        assert!(ticks.windows(2).all(|pair| pair[0] < pair[1]));
    }

    #[test]
    fn count_step_spans_ranges_wider_than_f64_max() {
        let ticks = tick_values(ValueRange::new(-1e308, 1e308), GridStep::Count(2));
        assert_eq!(ticks.as_slice(), &[-1e308, 0.0, 1e308]);
    }

    #[test]
    fn count_step_includes_both_ends() {
        let ticks = tick_values(ValueRange::new(-1.0, 1.0), GridStep::Count(4));
        assert_eq!(ticks.as_slice(), &[-1.0, -0.5, 0.0, 0.5, 1.0]);
    }
}
