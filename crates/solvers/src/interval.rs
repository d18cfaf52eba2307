use thiserror::Error;

/// Reasons an interval, tolerance, or step size is rejected.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum IntervalError {
    /// One or both bounds are non-finite.
    #[error("non-finite bound(s)")]
    NonFinite,

    /// Bounds are equal, giving zero width.
    #[error("zero width")]
    ZeroWidth,

    /// The x tolerance is not finite and positive.
    #[error("tolerance must be finite and positive")]
    NonPositiveTolerance,

    /// A step size is not finite and positive.
    #[error("step must be finite and positive")]
    NonPositiveStep,

    /// The dichotomy probe offset is too large for the tolerance to be reached.
    #[error("delta must be finite, positive, and less than half the tolerance")]
    DeltaTooLarge,
}

/// Ordered finite bounds with `left < right`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct Bounds {
    pub(crate) left: f64,
    pub(crate) right: f64,
}

impl Bounds {
    /// Validates and orders the endpoints.
    ///
    /// Bounds are order-independent: `[5.0, 1.0]` and `[1.0, 5.0]` describe
    /// the same interval.
    ///
    /// # Errors
    ///
    /// Returns `IntervalError` if endpoints are non-finite or equal.
    pub(crate) fn new(bounds: [f64; 2]) -> Result<Self, IntervalError> {
        let [a, b] = bounds;

        if !a.is_finite() || !b.is_finite() {
            return Err(IntervalError::NonFinite);
        }

        #[allow(clippy::float_cmp)]
        if a == b {
            return Err(IntervalError::ZeroWidth);
        }

        let (left, right) = if a < b { (a, b) } else { (b, a) };
        Ok(Self { left, right })
    }

    pub(crate) fn width(&self) -> f64 {
        self.right - self.left
    }
}

/// Checks that an x tolerance is finite and positive.
pub(crate) fn check_tolerance(tol: f64) -> Result<f64, IntervalError> {
    if tol.is_finite() && tol > 0.0 {
        Ok(tol)
    } else {
        Err(IntervalError::NonPositiveTolerance)
    }
}

/// Checks that a step size is finite and positive.
pub(crate) fn check_step(step: f64) -> Result<f64, IntervalError> {
    if step.is_finite() && step > 0.0 {
        Ok(step)
    } else {
        Err(IntervalError::NonPositiveStep)
    }
}
