//! Common call surface for closed-form evaluators.

use num_complex::Complex64;

use crate::euler::euler_identity;
use crate::zeta::zeta_function;

/// A constant defined by a closed-form expression.
///
/// Implementors are stateless, so `evaluate` is pure and may be called
/// concurrently from any thread.
pub trait ClosedForm {
    /// Type of the evaluated constant.
    type Value: Copy;

    /// Human-readable name of the identity.
    const NAME: &'static str;

    /// Evaluates the expression.
    fn evaluate(&self) -> Self::Value;
}

/// Evaluates `e^(iπ) + 1`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct EulerIdentityEvaluator;

impl ClosedForm for EulerIdentityEvaluator {
    type Value = Complex64;
    const NAME: &'static str = "Euler's identity";

    fn evaluate(&self) -> Complex64 {
        euler_identity()
    }
}

/// Evaluates `π²/6`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct ZetaFunctionEvaluator;

impl ClosedForm for ZetaFunctionEvaluator {
    type Value = f64;
    const NAME: &'static str = "Basel problem";

    fn evaluate(&self) -> f64 {
        zeta_function()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_send_sync<T: Send + Sync>() {}

    #[test]
    fn test_evaluators_are_thread_safe() {
        assert_send_sync::<EulerIdentityEvaluator>();
        assert_send_sync::<ZetaFunctionEvaluator>();
    }

    #[test]
    fn test_evaluate_matches_free_functions() {
        let euler = EulerIdentityEvaluator.evaluate();
        assert_eq!(euler.re.to_bits(), euler_identity().re.to_bits());
        assert_eq!(euler.im.to_bits(), euler_identity().im.to_bits());

        assert_eq!(
            ZetaFunctionEvaluator.evaluate().to_bits(),
            zeta_function().to_bits()
        );
    }

    #[test]
    fn test_names() {
        assert_eq!(EulerIdentityEvaluator::NAME, "Euler's identity");
        assert_eq!(ZetaFunctionEvaluator::NAME, "Basel problem");
    }
}
