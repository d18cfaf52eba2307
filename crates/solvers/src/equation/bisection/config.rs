use crate::{IntervalError, interval::check_tolerance};

/// Configuration for the bisection solver.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Config {
    x_abs_tol: f64,
}

impl Default for Config {
    fn default() -> Self {
        Self { x_abs_tol: 1e-12 }
    }
}

impl Config {
    /// Creates a config that stops once the bracket is no wider than `x_abs_tol`.
    ///
    /// # Errors
    ///
    /// Returns [`IntervalError::NonPositiveTolerance`] unless `x_abs_tol` is
    /// finite and positive.
    pub fn new(x_abs_tol: f64) -> Result<Self, IntervalError> {
        Ok(Self {
            x_abs_tol: check_tolerance(x_abs_tol)?,
        })
    }

    /// Returns the absolute bracket-width tolerance.
    #[must_use]
    pub fn x_abs_tol(&self) -> f64 {
        self.x_abs_tol
    }
}
