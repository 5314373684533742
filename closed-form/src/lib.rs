//! Closed-form evaluation of classical mathematical identities.
//!
//! Two evaluators are provided, each a pure function of no arguments:
//!
//! - [`euler_identity`] computes `e^(iπ) + 1`, which is zero up to rounding.
//! - [`zeta_function`] computes `π²/6`, the value of ζ(2) (the Basel problem).
//!
//! Both are also reachable through the [`ClosedForm`] trait via the unit
//! structs [`EulerIdentityEvaluator`] and [`ZetaFunctionEvaluator`].
//!
//! With the `series` feature (on by default) the [`series`] module adds
//! truncated p-series sums and integral-test tail bounds, for comparing a
//! partial Basel sum against its closed form.
//!
//! ```
//! use closed_form::{euler_identity, zeta_function};
//!
//! let residual = euler_identity();
//! assert!(residual.norm() < 1e-12);
//! assert!((zeta_function() - 1.6449340668482264).abs() < 1e-12);
//! ```

pub mod euler;
pub mod evaluator;
#[cfg(feature = "series")]
pub mod series;
pub mod zeta;

pub use euler::{euler_formula, euler_identity};
pub use evaluator::{ClosedForm, EulerIdentityEvaluator, ZetaFunctionEvaluator};
#[cfg(feature = "series")]
pub use series::{
    basel_partial_sum, zeta_partial_sum, zeta_tail_bounds, SeriesError, DEFAULT_BASEL_TERMS,
};
pub use zeta::zeta_function;
