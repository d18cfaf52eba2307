use scalar_core::Goal;

use crate::Status;

/// The result of a bracketed extremum search.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Solution {
    /// Final solver status.
    pub status: Status,

    /// Direction of the search.
    pub goal: Goal,

    /// Estimate of the extremum location.
    pub x: f64,

    /// Function value at `x`.
    pub value: f64,

    /// Final bracket around the extremum.
    pub bracket: [f64; 2],

    /// Number of iterations performed.
    pub iters: usize,
}

impl Solution {
    /// Returns the width of the final bracket.
    #[must_use]
    pub fn width(&self) -> f64 {
        self.bracket[1] - self.bracket[0]
    }
}
