use scalar_core::Goal;

use crate::Evaluation;

use super::bracket::GoldenBracket;

/// Direction to shrink the bracket and where to evaluate next.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(super) enum ShrinkDirection {
    /// Keep `[inner_left, right]`; payload is x for the new `inner_right`.
    ShrinkLeft(f64),

    /// Keep `[left, inner_right]`; payload is x for the new `inner_left`.
    ShrinkRight(f64),
}

impl ShrinkDirection {
    pub(super) fn x(self) -> f64 {
        match self {
            Self::ShrinkLeft(x) | Self::ShrinkRight(x) => x,
        }
    }
}

/// Bracket plus the evaluations at its two interior probes.
pub(super) struct State {
    bracket: GoldenBracket,
    left: Evaluation,
    right: Evaluation,
}

impl State {
    pub(super) fn new(bracket: GoldenBracket, left: Evaluation, right: Evaluation) -> Self {
        Self {
            bracket,
            left,
            right,
        }
    }

    pub(super) fn bracket(&self) -> &GoldenBracket {
        &self.bracket
    }

    /// Pure query: which direction to shrink and where to evaluate next.
    ///
    /// Ties keep the left sub-interval.
    pub(super) fn next_action(&self, goal: Goal) -> ShrinkDirection {
        if goal.transform(self.left.value) <= goal.transform(self.right.value) {
            ShrinkDirection::ShrinkRight(self.bracket.next_inner_left())
        } else {
            ShrinkDirection::ShrinkLeft(self.bracket.next_inner_right())
        }
    }

    /// Applies a shrink and stores the new probe.
    ///
    /// Returns the probe that was carried over.
    pub(super) fn apply(&mut self, direction: ShrinkDirection, point: Evaluation) -> Evaluation {
        match direction {
            ShrinkDirection::ShrinkRight(_) => {
                self.bracket.shrink_right();
                self.right = self.left;
                self.left = point;
                self.right
            }
            ShrinkDirection::ShrinkLeft(_) => {
                self.bracket.shrink_left();
                self.left = self.right;
                self.right = point;
                self.left
            }
        }
    }

    /// Returns the better interior probe; ties go to the left one.
    pub(super) fn best(&self, goal: Goal) -> Evaluation {
        if goal.is_better(self.right.value, self.left.value) {
            self.right
        } else {
            self.left
        }
    }
}
