//! Closed-form identity table.
//!
//! Evaluates Euler's identity and the Basel problem, then compares the
//! closed form of ζ(2) against a truncated sum of reciprocal squares.
//!
//! # Usage
//!
//! ```bash
//! RUST_LOG=debug cargo run --example identity_dump
//! ```

use closed_form::{
    basel_partial_sum, zeta_tail_bounds, ClosedForm, EulerIdentityEvaluator,
    ZetaFunctionEvaluator, DEFAULT_BASEL_TERMS,
};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let euler = EulerIdentityEvaluator.evaluate();
    let zeta = ZetaFunctionEvaluator.evaluate();

    println!("| Identity | Value |");
    println!("|----------|-------|");
    println!(
        "| {} | {:.4e} {:+.4e}i |",
        EulerIdentityEvaluator::NAME,
        euler.re,
        euler.im
    );
    println!("| {} | {:.16} |", ZetaFunctionEvaluator::NAME, zeta);

    let partial = basel_partial_sum(DEFAULT_BASEL_TERMS)?;
    let (lower, upper) = zeta_tail_bounds(2.0, DEFAULT_BASEL_TERMS)?;
    println!();
    println!("Basel partial sum over {DEFAULT_BASEL_TERMS} terms: {partial:.16}");
    println!(
        "Remainder {:.6e} (integral bounds {:.6e} .. {:.6e})",
        zeta - partial,
        lower,
        upper
    );

    Ok(())
}
