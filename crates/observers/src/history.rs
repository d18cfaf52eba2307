//! Records the points a solver evaluates.

use scalar_core::Observer;
use scalar_solvers::{Evaluation, sample::SamplePoint};

use crate::traits::HasEvaluations;

/// Collects every evaluation reported by solver events, in order.
///
/// Useful for drawing a solver's path over a [`sample_curve`] of the same
/// function. Pass `&mut history` to read the points after the solve.
///
/// [`sample_curve`]: scalar_solvers::sample::sample_curve
#[derive(Debug, Clone, Default, PartialEq)]
pub struct History {
    points: Vec<Evaluation>,
}

impl History {
    /// Creates an empty history.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the recorded evaluations.
    #[must_use]
    pub fn points(&self) -> &[Evaluation] {
        &self.points
    }

    /// Returns the recorded evaluations as plot points.
    pub fn samples(&self) -> impl Iterator<Item = SamplePoint> + '_ {
        self.points.iter().copied().map(SamplePoint::from)
    }

    /// Returns the most recently recorded evaluation.
    #[must_use]
    pub fn last(&self) -> Option<Evaluation> {
        self.points.last().copied()
    }

    /// Discards all recorded points.
    pub fn clear(&mut self) {
        self.points.clear();
    }

    /// Consumes the history and returns its points.
    #[must_use]
    pub fn into_points(self) -> Vec<Evaluation> {
        self.points
    }
}

impl<E: HasEvaluations, A> Observer<E, A> for History {
    fn observe(&mut self, event: &E) -> Option<A> {
        self.points.extend(event.evaluations());
        None
    }
}

/// Allows `&mut History` to be passed to solvers that take an observer by
/// value, so the points can be read after the solve completes.
impl<E: HasEvaluations, A> Observer<E, A> for &mut History {
    fn observe(&mut self, event: &E) -> Option<A> {
        (**self).observe(event)
    }
}
