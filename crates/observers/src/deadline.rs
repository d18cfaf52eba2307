//! A wall-clock budget for any solver.

use std::time::{Duration, Instant};

use scalar_core::Observer;

use crate::traits::CanStopEarly;

/// Stops a solver once a wall-clock budget has elapsed.
///
/// The clock starts when the deadline is created. The check runs once per
/// solver event, so a single slow function evaluation can overrun the budget;
/// the solver then stops at its next event with
/// [`Status::StoppedByObserver`] and its best estimate so far.
///
/// Pass `&mut deadline` to check [`Deadline::expired`] after the solve.
///
/// [`Status::StoppedByObserver`]: scalar_solvers::Status::StoppedByObserver
#[derive(Debug, Clone, Copy)]
pub struct Deadline {
    start: Instant,
    budget: Duration,
    expired: bool,
}

impl Deadline {
    /// Starts a deadline that expires `budget` from now.
    #[must_use]
    pub fn new(budget: Duration) -> Self {
        Self::starting_at(Instant::now(), budget)
    }

    /// Creates a deadline measured from `start`.
    #[must_use]
    pub fn starting_at(start: Instant, budget: Duration) -> Self {
        Self {
            start,
            budget,
            expired: false,
        }
    }

    /// Returns the budget.
    #[must_use]
    pub fn budget(&self) -> Duration {
        self.budget
    }

    /// Returns true once this deadline has stopped a solver.
    #[must_use]
    pub fn expired(&self) -> bool {
        self.expired
    }

    fn check(&mut self) -> bool {
        if !self.expired && self.start.elapsed() >= self.budget {
            log::warn!(
                "deadline: {:?} budget exceeded, stopping solver",
                self.budget
            );
            self.expired = true;
        }
        self.expired
    }
}

impl<E, A: CanStopEarly> Observer<E, A> for Deadline {
    fn observe(&mut self, _event: &E) -> Option<A> {
        self.check().then(A::stop_early)
    }
}

/// Allows `&mut Deadline` to be passed to solvers that take an observer by
/// value, so [`Deadline::expired`] can be read after the solve completes.
impl<E, A: CanStopEarly> Observer<E, A> for &mut Deadline {
    fn observe(&mut self, event: &E) -> Option<A> {
        (**self).observe(event)
    }
}
