use crate::{
    IntervalError,
    derivative::{DEFAULT_EXTREMUM_STEP, DEFAULT_SECOND_STEP, DEFAULT_STEP},
    interval::{check_step, check_tolerance},
};

/// Configuration for Newton iteration.
///
/// The defaults suit root finding. Use [`Config::for_extremum`] as the
/// starting point for extremum search, which needs a coarser first
/// difference step.
///
/// The derivative threshold is absolute (`1e-10` by default). For functions
/// whose values are tiny everywhere, such as `1e-12 * (x² - 4)`, every
/// derivative falls below it and the search fails with
/// [`Error::DerivativeNearZero`]; lower it with
/// [`Config::with_min_derivative`] or rescale the function.
///
/// [`Error::DerivativeNearZero`]: crate::Error::DerivativeNearZero
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Config {
    x_abs_tol: f64,
    max_iters: usize,
    step: f64,
    second_step: f64,
    min_derivative: f64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            x_abs_tol: 1e-12,
            max_iters: 100,
            step: DEFAULT_STEP,
            second_step: DEFAULT_SECOND_STEP,
            min_derivative: 1e-10,
        }
    }
}

impl Config {
    /// Creates a config with the given step tolerance and iteration cap.
    ///
    /// Difference steps and the derivative threshold take their defaults.
    ///
    /// # Errors
    ///
    /// Returns [`IntervalError::NonPositiveTolerance`] unless `x_abs_tol` is
    /// finite and positive.
    pub fn new(x_abs_tol: f64, max_iters: usize) -> Result<Self, IntervalError> {
        Ok(Self {
            x_abs_tol: check_tolerance(x_abs_tol)?,
            max_iters,
            ..Self::default()
        })
    }

    /// Returns the default config with difference steps sized for extrema.
    #[must_use]
    pub fn for_extremum() -> Self {
        Self {
            step: DEFAULT_EXTREMUM_STEP,
            ..Self::default()
        }
    }

    /// Sets the relative step of the first difference.
    ///
    /// # Errors
    ///
    /// Returns [`IntervalError::NonPositiveStep`] unless `step` is finite and positive.
    pub fn with_step(self, step: f64) -> Result<Self, IntervalError> {
        Ok(Self {
            step: check_step(step)?,
            ..self
        })
    }

    /// Sets the relative step of the second difference.
    ///
    /// # Errors
    ///
    /// Returns [`IntervalError::NonPositiveStep`] unless `second_step` is
    /// finite and positive.
    pub fn with_second_step(self, second_step: f64) -> Result<Self, IntervalError> {
        Ok(Self {
            second_step: check_step(second_step)?,
            ..self
        })
    }

    /// Sets the absolute magnitude below which a derivative counts as zero.
    ///
    /// The threshold does not scale with the function, so pick it relative to
    /// the slopes expected near the answer.
    ///
    /// # Errors
    ///
    /// Returns [`IntervalError::NonPositiveTolerance`] unless `min_derivative`
    /// is finite and positive.
    pub fn with_min_derivative(self, min_derivative: f64) -> Result<Self, IntervalError> {
        Ok(Self {
            min_derivative: check_tolerance(min_derivative)?,
            ..self
        })
    }

    /// Returns the absolute tolerance on `|x_{n+1} - x_n|`.
    #[must_use]
    pub fn x_abs_tol(&self) -> f64 {
        self.x_abs_tol
    }

    /// Returns the maximum number of Newton steps.
    #[must_use]
    pub fn max_iters(&self) -> usize {
        self.max_iters
    }

    /// Returns the relative step of the first difference.
    #[must_use]
    pub fn step(&self) -> f64 {
        self.step
    }

    /// Returns the relative step of the second difference.
    #[must_use]
    pub fn second_step(&self) -> f64 {
        self.second_step
    }

    /// Returns the magnitude below which a derivative counts as zero.
    #[must_use]
    pub fn min_derivative(&self) -> f64 {
        self.min_derivative
    }
}
