use crate::Status;

/// The result of a bisection solve.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Solution {
    /// Final solver status.
    pub status: Status,

    /// Root estimate.
    pub x: f64,

    /// Function value at `x`.
    pub value: f64,

    /// Final bracket around the root.
    pub bracket: [f64; 2],

    /// Number of midpoint evaluations.
    pub iters: usize,
}

impl Solution {
    /// Returns the width of the final bracket.
    #[must_use]
    pub fn width(&self) -> f64 {
        self.bracket[1] - self.bracket[0]
    }
}
