use std::fmt;

use crate::Evaluation;

/// Control actions supported by the bisection solver.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Stop the solver and return the midpoint just evaluated.
    StopEarly,
}

/// Event emitted by the bisection solver after each midpoint evaluation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Event {
    /// Iteration counter (1-based).
    pub iter: usize,

    /// Bracket the midpoint was taken from.
    pub bracket: [f64; 2],

    /// Evaluation at the midpoint.
    pub point: Evaluation,
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [left, right] = self.bracket;
        write!(
            f,
            "bisection iter {}: bracket [{left}, {right}], {}",
            self.iter, self.point
        )
    }
}
