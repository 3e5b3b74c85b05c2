use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use rust_decimal::prelude::{FromPrimitive, ToPrimitive};

use crate::error::{ChartError, ChartResult};

const DEFAULT_LABEL_DECIMALS: u32 = 6;

pub fn decimal_to_f64(value: Decimal, field_name: &str) -> ChartResult<f64> {
    value.to_f64().ok_or_else(|| {
        ChartError::InvalidData(format!("{field_name} cannot be represented as f64"))
    })
}

#[must_use]
pub fn datetime_to_unix_seconds(time: DateTime<Utc>) -> f64 {
    time.timestamp_millis() as f64 / 1000.0
}

/// Default tick label text: at most six decimals, trailing zeros trimmed.
///
/// Accumulated float error such as `0.30000000000000004` prints as `0.3`.
#[must_use]
pub fn format_numeric_label(value: f64) -> String {
    if !value.is_finite() {
        return value.to_string();
    }

    match Decimal::from_f64(value) {
        Some(decimal) => {
            let rounded = decimal.round_dp(DEFAULT_LABEL_DECIMALS).normalize();
            if rounded.is_zero() {
                // Avoid "-0" for tiny negative values.
                "0".to_owned()
            } else {
                rounded.to_string()
            }
        }
        None => value.to_string(),
    }
}
