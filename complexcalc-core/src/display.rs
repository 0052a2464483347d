//! Human-readable formatting: "3 - 4i", "5", "7i".
//!
//! Components are rounded to 10 decimal places before any comparison or
//! output, which scrubs the floating-point noise left behind by the polar
//! conversions in power and root.

use std::fmt;

use crate::complex::{Complex, NEAR_ZERO};

/// Decimal places kept when rounding for display.
const DISPLAY_DECIMALS: i32 = 10;

/// Round to `DISPLAY_DECIMALS` places, collapsing -0.0 to 0.0.
///
/// Ties at the 10th decimal round away from zero (`f64::round`).
fn round_for_display(value: f64) -> f64 {
    // At 1e6 and above, f64 spacing already exceeds 1e-10, so rounding to
    // 10 decimals is an identity. Scaling first would overflow to inf for
    // huge components and lose mantissa bits past 2^53.
    if value.abs() >= 1e6 {
        return value;
    }
    let scale = 10f64.powi(DISPLAY_DECIMALS);
    let rounded = (value * scale).round() / scale;
    if rounded == 0.0 {
        0.0
    } else {
        rounded
    }
}

impl fmt::Display for Complex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let re = round_for_display(self.re);
        let im = round_for_display(self.im);

        // Pure real: drop the imaginary term entirely.
        if im.abs() < NEAR_ZERO {
            return write!(f, "{}", re);
        }
        // Pure imaginary: drop the real term.
        if re.abs() < NEAR_ZERO {
            return write!(f, "{}i", im);
        }
        if im < 0.0 {
            write!(f, "{} - {}i", re, -im)
        } else {
            write!(f, "{} + {}i", re, im)
        }
    }
}
