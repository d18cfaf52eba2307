use std::fmt;

use crate::Evaluation;

/// Actions an observer can take during Newton iteration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Stop and return the current iterate.
    StopEarly,
}

/// Event emitted for each Newton step.
///
/// For root finding `residual` is `f(x)` and `derivative` is `f'(x)`.
/// For extremum search they are `f'(x)` and `f''(x)`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Event {
    /// Iteration counter (1-based).
    pub iter: usize,

    /// The current iterate and `f` there.
    pub point: Evaluation,

    /// Quantity being driven to zero.
    pub residual: f64,

    /// Derivative of `residual` used for the step.
    pub derivative: f64,

    /// The next iterate, `x - residual / derivative`.
    pub next_x: f64,
}

impl Event {
    /// Returns the signed Newton step `next_x - x`.
    #[must_use]
    pub fn step(&self) -> f64 {
        self.next_x - self.point.x
    }
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "newton iter {}: {}, residual {:e}, derivative {:e}, next x = {}",
            self.iter, self.point, self.residual, self.derivative, self.next_x
        )
    }
}
