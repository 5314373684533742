//! Truncated p-series and integral-test tail bounds.
//!
//! The Riemann zeta function for real `s > 1` is the convergent series
//! `ζ(s) = Σ_{n≥1} n^{-s}`. Summing the first `N` terms leaves a remainder
//! bracketed by the integral test:
//!
//! ```text
//! (N+1)^{1-s} / (s-1)  <  ζ(s) - S_N  <  N^{1-s} / (s-1)
//! ```
//!
//! These helpers let a caller compare a partial Basel sum with the closed
//! form returned by [`crate::zeta_function`].

use log::debug;
use thiserror::Error;

/// Number of Basel terms summed by the reference debug routine (`n = 1..=9999`).
pub const DEFAULT_BASEL_TERMS: usize = 9999;

/// Errors that can occur when evaluating a truncated series
#[derive(Error, Debug, Clone, Copy, PartialEq)]
pub enum SeriesError {
    #[error("series must include at least one term")]
    NoTerms,

    #[error("p-series diverges for exponent {0}, require s > 1")]
    Divergent(f64),
}

fn validate(s: f64, terms: usize) -> Result<(), SeriesError> {
    // Negated comparison also rejects NaN
    if !(s > 1.0) {
        return Err(SeriesError::Divergent(s));
    }
    if terms == 0 {
        return Err(SeriesError::NoTerms);
    }
    Ok(())
}

/// Sums the first `terms` terms of the p-series `Σ 1/n^s`.
///
/// Terms are accumulated from smallest to largest so the small tail terms
/// are not swamped by the leading `1.0`.
///
/// # Errors
/// * `SeriesError::Divergent` - If `s` is not strictly greater than 1
/// * `SeriesError::NoTerms` - If `terms` is zero
pub fn zeta_partial_sum(s: f64, terms: usize) -> Result<f64, SeriesError> {
    validate(s, terms)?;

    let sum: f64 = (1..=terms).rev().map(|n| (n as f64).powf(-s)).sum();

    debug!("zeta partial sum: s = {s}, terms = {terms}, sum = {sum}");
    Ok(sum)
}

/// Sums the first `terms` reciprocal squares, approximating `π²/6`.
///
/// # Errors
/// * `SeriesError::NoTerms` - If `terms` is zero
pub fn basel_partial_sum(terms: usize) -> Result<f64, SeriesError> {
    zeta_partial_sum(2.0, terms)
}

/// Returns `(lower, upper)` bounds on `ζ(s) - S_N` where `S_N` is the
/// partial sum over the first `terms` terms.
///
/// # Errors
/// * `SeriesError::Divergent` - If `s` is not strictly greater than 1
/// * `SeriesError::NoTerms` - If `terms` is zero
pub fn zeta_tail_bounds(s: f64, terms: usize) -> Result<(f64, f64), SeriesError> {
    validate(s, terms)?;

    let n = terms as f64;
    let lower = (n + 1.0).powf(1.0 - s) / (s - 1.0);
    let upper = n.powf(1.0 - s) / (s - 1.0);

    Ok((lower, upper))
}
