use std::fmt;

use crate::Evaluation;

/// Event emitted by the golden section solver after each iteration.
///
/// Each iteration shrinks the bracket, reuses one interior probe, and
/// evaluates one new probe. `point` is the new probe and `other` is the
/// reused one; `bracket` is the interval after shrinking.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Event {
    /// Iteration counter (1-based).
    pub iter: usize,

    /// Bracket after this iteration's shrink.
    pub bracket: [f64; 2],

    /// The newly evaluated interior probe.
    pub point: Evaluation,

    /// The interior probe carried over from the previous iteration.
    pub other: Evaluation,
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [left, right] = self.bracket;
        write!(
            f,
            "golden section iter {}: bracket [{left}, {right}], new {}, kept {}",
            self.iter, self.point, self.other
        )
    }
}
