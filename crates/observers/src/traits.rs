//! Capability traits for cross-solver observers.
//!
//! These traits abstract over solver-specific event and action types, so one
//! observer can watch any solver in `scalar-solvers`.
//!
//! # Event traits
//!
//! - [`HasIteration`]: events that carry a 1-based iteration counter
//! - [`HasEvaluations`]: events that expose the points evaluated in that iteration
//!
//! # Action traits
//!
//! - [`CanStopEarly`]: actions that can signal early termination
//!
//! # Example
//!
//! ```rust
//! use scalar_core::Observer;
//! use scalar_observers::traits::{CanStopEarly, HasEvaluations};
//!
//! /// Stops as soon as any evaluated point has `|f(x)| < tolerance`.
//! struct GoodEnough {
//!     tolerance: f64,
//! }
//!
//! impl<E: HasEvaluations, A: CanStopEarly> Observer<E, A> for GoodEnough {
//!     fn observe(&mut self, event: &E) -> Option<A> {
//!         event
//!             .evaluations()
//!             .any(|point| point.value.abs() < self.tolerance)
//!             .then(A::stop_early)
//!     }
//! }
//! ```

use scalar_solvers::{
    Evaluation,
    equation::bisection,
    newton,
    optimization::{dichotomy, golden_section},
};

/// An event that carries an iteration counter.
pub trait HasIteration {
    /// Returns the 1-based iteration that produced this event.
    fn iteration(&self) -> usize;
}

/// An event that exposes the function evaluations made in its iteration.
pub trait HasEvaluations {
    /// Returns the points first evaluated during this iteration.
    ///
    /// Points carried over from an earlier iteration are not repeated, so
    /// collecting across all events lists each solver evaluation once.
    fn evaluations(&self) -> impl Iterator<Item = Evaluation>;
}

/// An action type that can signal early termination.
pub trait CanStopEarly {
    /// Returns the action that stops the solver early.
    fn stop_early() -> Self;
}

// --- HasIteration ---

impl HasIteration for bisection::Event {
    fn iteration(&self) -> usize {
        self.iter
    }
}

impl HasIteration for golden_section::Event {
    fn iteration(&self) -> usize {
        self.iter
    }
}

impl HasIteration for dichotomy::Event {
    fn iteration(&self) -> usize {
        self.iter
    }
}

impl HasIteration for newton::Event {
    fn iteration(&self) -> usize {
        self.iter
    }
}

// --- HasEvaluations ---

impl HasEvaluations for bisection::Event {
    fn evaluations(&self) -> impl Iterator<Item = Evaluation> {
        std::iter::once(self.point)
    }
}

/// Only the new probe; `other` was reported by an earlier event.
impl HasEvaluations for golden_section::Event {
    fn evaluations(&self) -> impl Iterator<Item = Evaluation> {
        std::iter::once(self.point)
    }
}

impl HasEvaluations for dichotomy::Event {
    fn evaluations(&self) -> impl Iterator<Item = Evaluation> {
        [self.left, self.right].into_iter()
    }
}

/// The iterate only; difference-quotient probes are not reported.
impl HasEvaluations for newton::Event {
    fn evaluations(&self) -> impl Iterator<Item = Evaluation> {
        std::iter::once(self.point)
    }
}

// --- CanStopEarly ---

impl CanStopEarly for bisection::Action {
    fn stop_early() -> Self {
        Self::StopEarly
    }
}

impl CanStopEarly for golden_section::Action {
    fn stop_early() -> Self {
        Self::StopEarly
    }
}

impl CanStopEarly for dichotomy::Action {
    fn stop_early() -> Self {
        Self::StopEarly
    }
}

impl CanStopEarly for newton::Action {
    fn stop_early() -> Self {
        Self::StopEarly
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use scalar_core::{Observer, from_fn};

    struct GoodEnough {
        tolerance: f64,
    }

    impl<E: HasEvaluations, A: CanStopEarly> Observer<E, A> for GoodEnough {
        fn observe(&mut self, event: &E) -> Option<A> {
            event
                .evaluations()
                .any(|point| point.value.abs() < self.tolerance)
                .then(A::stop_early)
        }
    }

    #[test]
    fn one_observer_drives_two_solvers() {
        let f = from_fn(|x| x * x - 2.0);

        let by_bisection = bisection::solve(
            &f,
            [0.0, 2.0],
            &bisection::Config::default(),
            GoodEnough { tolerance: 1e-3 },
        )
        .expect("should stop");

        let by_newton = newton::find_root(
            &f,
            2.0,
            &newton::Config::default(),
            GoodEnough { tolerance: 1e-3 },
        )
        .expect("should stop");

        for (x, value) in [
            (by_bisection.x, by_bisection.value),
            (by_newton.x, by_newton.value),
        ] {
            assert!(value.abs() < 1e-3, "f({x}) = {value}");
        }
        assert_eq!(by_bisection.status, scalar_solvers::Status::StoppedByObserver);
        assert_eq!(by_newton.status, scalar_solvers::Status::StoppedByObserver);
    }

    #[test]
    fn dichotomy_reports_both_probes() {
        let f = from_fn(|x: f64| (x - 1.0).abs());

        let mut counts = Vec::new();
        let observer = |event: &dichotomy::Event| {
            counts.push((event.iteration(), event.evaluations().count()));
            None
        };

        dichotomy::minimize(&f, [0.0, 4.0], &dichotomy::Config::default(), observer)
            .expect("should minimize");

        assert!(!counts.is_empty());
        for (i, (iter, count)) in counts.into_iter().enumerate() {
            assert_eq!(iter, i + 1);
            assert_eq!(count, 2);
        }
    }
}
