use std::error::Error as StdError;

use thiserror::Error;

use crate::IntervalError;

/// Errors that can occur while solving.
///
/// Every failure is returned to the caller as-is. Solvers never retry, since
/// an ill-posed input stays ill-posed; the caller must supply a different
/// interval, seed, or configuration.
#[derive(Debug, Error)]
pub enum Error {
    /// Bounds, tolerance, or step size were rejected before solving.
    #[error("invalid interval: {0}")]
    InvalidInterval(#[from] IntervalError),

    /// The function has the same sign at both ends of the bracket.
    #[error("no sign change in bracket: f({left}) = {left_value}, f({right}) = {right_value}")]
    NoBracketingSignChange {
        left: f64,
        right: f64,
        left_value: f64,
        right_value: f64,
    },

    /// A Newton step would divide by a derivative too close to zero.
    #[error("derivative {derivative:e} at x = {x} is too close to zero")]
    DerivativeNearZero { x: f64, derivative: f64 },

    /// Newton iteration used every allowed step without meeting the tolerance.
    #[error("not converged after {iters} iterations: last step {step:e} at x = {x}")]
    NotConverged { iters: usize, x: f64, step: f64 },

    /// Newton iteration produced a non-finite iterate.
    #[error("iteration diverged to x = {x} after {iters} iterations")]
    Diverged { iters: usize, x: f64 },

    /// The supplied function failed; the original error is the source.
    #[error("function evaluation failed at x = {x}")]
    FunctionEvaluationFailed {
        x: f64,
        #[source]
        source: Box<dyn StdError + Send + Sync>,
    },

    /// The supplied function returned NaN or an infinity.
    #[error("function returned non-finite value {value} at x = {x}")]
    NonFiniteValue { x: f64, value: f64 },
}

impl Error {
    pub(crate) fn function<E: StdError + Send + Sync + 'static>(x: f64, err: E) -> Self {
        Self::FunctionEvaluationFailed {
            x,
            source: Box::new(err),
        }
    }
}
