//! Numeric differentiation by symmetric finite differences.
//!
//! Both helpers scale the step with the magnitude of `x`,
//! `h = step · max(1, |x|)`, so the perturbation stays meaningful far from
//! the origin. The denominator uses the spacing actually representable in
//! `f64`, `(x + h) - (x - h)`, rather than the nominal `2h`.
//!
//! The first difference has truncation error `O(h²)` and rounding error
//! `O(ε/h)`; the second difference has rounding error `O(ε/h²)`. Use a
//! larger step for second derivatives.

use scalar_core::Function;

use crate::{Error, evaluate::evaluate};

/// Default step for first derivatives used to find roots.
pub const DEFAULT_STEP: f64 = 1e-7;

/// Default step for first derivatives used to find extrema.
pub const DEFAULT_EXTREMUM_STEP: f64 = 1e-5;

/// Default step for second derivatives.
pub const DEFAULT_SECOND_STEP: f64 = 1e-4;

/// Returns the scaled perturbation for `x`.
fn scaled(x: f64, step: f64) -> f64 {
    step * x.abs().max(1.0)
}

/// Approximates `f'(x)` with `(f(x + h) - f(x - h)) / (2h)`.
///
/// # Errors
///
/// Returns an error if either evaluation fails or is non-finite.
pub fn central_difference<F>(function: &F, x: f64, step: f64) -> Result<f64, Error>
where
    F: Function + ?Sized,
{
    let h = scaled(x, step);
    let (lo, hi) = (x - h, x + h);

    let f_hi = evaluate(function, hi)?.value;
    let f_lo = evaluate(function, lo)?.value;

    Ok((f_hi - f_lo) / (hi - lo))
}

/// Approximates `f''(x)` with `(f(x + h) - 2f(x) + f(x - h)) / h²`.
///
/// The value `f(x)` is passed in because Newton iteration already has it.
///
/// # Errors
///
/// Returns an error if either evaluation fails or is non-finite.
pub fn second_difference<F>(function: &F, x: f64, f_x: f64, step: f64) -> Result<f64, Error>
where
    F: Function + ?Sized,
{
    let nominal = scaled(x, step);
    let hi = x + nominal;
    let h = hi - x;
    let lo = x - h;

    let f_hi = evaluate(function, hi)?.value;
    let f_lo = evaluate(function, lo)?.value;

    Ok((f_hi - 2.0 * f_x + f_lo) / (h * h))
}
