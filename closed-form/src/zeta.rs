//! Closed form of ζ(2), the Basel problem.

use std::f64::consts::PI;

/// Returns `π²/6`, the sum of `1/n²` over all positive integers.
pub fn zeta_function() -> f64 {
    PI * PI / 6.0
}
