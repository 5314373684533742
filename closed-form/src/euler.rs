//! Euler's formula and Euler's identity.

use num_complex::{Complex, Complex64};
use num_traits::Float;
use std::f64::consts::PI;

/// Evaluates Euler's formula `exp(i·θ) = cos θ + i·sin θ`.
///
/// The result lies on the unit circle for any finite `theta`. NaN and
/// infinite angles propagate through the exponential per IEEE-754.
pub fn euler_formula<T: Float>(theta: T) -> Complex<T> {
    Complex::new(T::zero(), theta).exp()
}

/// Computes `e^(iπ) + 1` in double precision.
///
/// Mathematically this is exactly zero. In `f64` the finite representation
/// of π leaves a residual of about 1.2246e-16, since `sin(PI)` is not zero.
pub fn euler_identity() -> Complex64 {
    euler_formula(PI) + 1.0
}
