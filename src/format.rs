//! Number rendering for `POS` and `ANGLE` events.

use serde::{Deserialize, Serialize};

/// Controls how coordinates and angles are printed.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NumberFormat {
    /// Maximum number of decimal places. Default: 2.
    pub precision: usize,
    /// Values whose magnitude is below this are printed as `0`. Default: 1e-9.
    pub zero_epsilon: f64,
}

impl Default for NumberFormat {
    fn default() -> Self {
        Self {
            precision: 2,
            zero_epsilon: 1e-9,
        }
    }
}

impl NumberFormat {
    /// Renders `value` rounded to `precision` decimals with trailing zeros removed.
    ///
    /// Integral results print without a decimal point, and negative zero
    /// prints as `0`. Non-finite values print as `inf`, `-inf` or `NaN`.
    pub fn format(&self, value: f64) -> String {
        let value = if value.abs() < self.zero_epsilon {
            0.0
        } else {
            value
        };
        let mut text = format!("{:.*}", self.precision, value);
        if text.contains('.') {
            let trimmed = text.trim_end_matches('0').trim_end_matches('.').len();
            text.truncate(trimmed);
        }
        if text == "-0" {
            text.remove(0);
        }
        text
    }
}
