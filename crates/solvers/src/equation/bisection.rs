//! Bisection (dichotomy) root finding.
//!
//! # Algorithm
//!
//! Given an interval where `f` changes sign, bisection evaluates the midpoint
//! and keeps the half that still straddles the sign change. The bracket width
//! halves every iteration, so the number of iterations is
//! `⌈log₂(width / x_abs_tol)⌉` and the search always terminates.
//!
//! # Preconditions
//!
//! `f(a) · f(b) < 0`. An endpoint where `f` is exactly zero does not satisfy
//! this and is rejected with [`Error::NoBracketingSignChange`], like any
//! other interval without a strict sign change. If `f` has several roots in
//! the interval, bisection finds one of them.
//!
//! # Observer Events
//!
//! The solver emits one [`Event`] per midpoint evaluation. Observers can
//! return [`Action::StopEarly`] to end the search at that midpoint.

mod bracket;
mod config;
mod event;
mod solution;

pub use config::Config;
pub use event::{Action, Event};
pub use solution::Solution;

use scalar_core::{Function, Observer};

use crate::{Error, Status, evaluate::evaluate, interval::Bounds};

use bracket::{Bracket, Sign};

/// Finds a root of `function` in `bracket` using bisection.
///
/// The bounds may be given in either order.
///
/// # Errors
///
/// Returns an error if the bounds are invalid, `f` does not change sign
/// across them, or `f` fails or returns a non-finite value at any evaluated
/// point.
pub fn solve<F, Obs>(
    function: &F,
    bracket: [f64; 2],
    config: &Config,
    mut observer: Obs,
) -> Result<Solution, Error>
where
    F: Function + ?Sized,
    Obs: Observer<Event, Action>,
{
    let bounds = Bounds::new(bracket)?;
    let tol = config.x_abs_tol();

    let left = evaluate(function, bounds.left)?;
    let right = evaluate(function, bounds.right)?;

    #[allow(clippy::float_cmp)]
    let has_zero_end = left.value == 0.0 || right.value == 0.0;
    let bracket = if has_zero_end {
        None
    } else {
        Bracket::new(bounds, Sign::of(left.value), Sign::of(right.value))
    };
    let Some(mut bracket) = bracket else {
        return Err(Error::NoBracketingSignChange {
            left: left.x,
            right: right.x,
            left_value: left.value,
            right_value: right.value,
        });
    };

    log::debug!(
        "bisection: start on [{}, {}] with x_abs_tol = {tol:e}",
        bounds.left,
        bounds.right
    );

    let mut iters = 0;
    while bracket.width() > tol {
        let mid = bracket.midpoint();
        if !bracket.contains_strictly(mid) {
            log::warn!(
                "bisection: bracket {:?} cannot shrink below x_abs_tol = {tol:e}",
                bracket.as_array()
            );
            return finish(function, &bracket, Status::ResolutionLimited, iters);
        }

        let point = evaluate(function, mid)?;
        iters += 1;

        let event = Event {
            iter: iters,
            bracket: bracket.as_array(),
            point,
        };
        log::trace!("{event}");

        if let Some(Action::StopEarly) = observer.observe(&event) {
            log::debug!("bisection: stopped by observer after {iters} iterations");
            return Ok(Solution {
                status: Status::StoppedByObserver,
                x: point.x,
                value: point.value,
                bracket: bracket.as_array(),
                iters,
            });
        }

        #[allow(clippy::float_cmp)]
        if point.value == 0.0 {
            log::debug!("bisection: exact root at x = {mid} after {iters} iterations");
            return Ok(Solution {
                status: Status::Converged,
                x: mid,
                value: point.value,
                bracket: [mid, mid],
                iters,
            });
        }

        bracket.shrink(mid, Sign::of(point.value));
    }

    finish(function, &bracket, Status::Converged, iters)
}

/// Runs bisection without observation.
///
/// # Errors
///
/// Returns an error if the bounds are invalid, `f` does not change sign
/// across them, or `f` fails or returns a non-finite value at any evaluated
/// point.
pub fn solve_unobserved<F>(
    function: &F,
    bracket: [f64; 2],
    config: &Config,
) -> Result<Solution, Error>
where
    F: Function + ?Sized,
{
    solve(function, bracket, config, ())
}

/// Evaluates the final midpoint and builds the solution.
fn finish<F>(
    function: &F,
    bracket: &Bracket,
    status: Status,
    iters: usize,
) -> Result<Solution, Error>
where
    F: Function + ?Sized,
{
    let point = evaluate(function, bracket.midpoint())?;
    log::debug!(
        "bisection: {status:?} at x = {} after {iters} iterations",
        point.x
    );

    Ok(Solution {
        status,
        x: point.x,
        value: point.value,
        bracket: bracket.as_array(),
        iters,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use scalar_core::{from_fn, try_from_fn};
    use thiserror::Error;

    use crate::IntervalError;

    fn tol(x_abs_tol: f64) -> Config {
        Config::new(x_abs_tol).expect("valid tolerance")
    }

    #[test]
    fn finds_square_root() {
        let f = from_fn(|x| x * x - 9.0);

        let solution =
            solve_unobserved(&f, [0.0, 10.0], &Config::default()).expect("should solve");

        assert_eq!(solution.status, Status::Converged);
        assert_relative_eq!(solution.x, 3.0, epsilon = 1e-10);
        assert!(solution.width() <= 1e-12);
    }

    #[test]
    fn identity_converges_to_zero() {
        let f = from_fn(|x| x);

        let solution = solve_unobserved(&f, [-10.0, 10.0], &tol(0.001)).expect("should solve");

        assert_eq!(solution.status, Status::Converged);
        assert_relative_eq!(solution.x, 0.0, epsilon = 1e-3);
    }

    #[test]
    fn exact_zero_stops_at_midpoint() {
        let f = from_fn(|x| x - 2.0);

        let solution = solve_unobserved(&f, [0.0, 4.0], &tol(1e-9)).expect("should solve");

        assert_eq!(solution.status, Status::Converged);
        assert_eq!(solution.iters, 1);
        assert_eq!(solution.x, 2.0);
        assert_eq!(solution.value, 0.0);
    }

    #[test]
    fn bracket_width_meets_tolerance() {
        let f = from_fn(f64::cos);

        let solution = solve_unobserved(&f, [0.0, 3.0], &tol(1e-6)).expect("should solve");

        assert_eq!(solution.status, Status::Converged);
        assert!(solution.width() <= 1e-6);
        assert!(solution.bracket[0] <= solution.x && solution.x <= solution.bracket[1]);
        assert_relative_eq!(solution.x, std::f64::consts::FRAC_PI_2, epsilon = 1e-6);
        // 3 / 2^22 < 1e-6 <= 3 / 2^21
        assert_eq!(solution.iters, 22);
    }

    #[test]
    fn normalizes_reversed_bracket() {
        let f = from_fn(|x| x * x - 36.0);

        let solution = solve_unobserved(&f, [10.0, 0.0], &Config::default())
            .expect("should solve with reversed bracket");

        assert_eq!(solution.status, Status::Converged);
        assert_relative_eq!(solution.x, 6.0, epsilon = 1e-10);
    }

    #[test]
    fn errors_without_sign_change() {
        let f = from_fn(|x| x + 10.0);

        let result = solve_unobserved(&f, [1.0, 5.0], &tol(1e-3));

        assert!(matches!(
            result,
            Err(Error::NoBracketingSignChange { left, right, .. }) if left == 1.0 && right == 5.0
        ));
    }

    #[test]
    fn errors_on_zero_endpoint() {
        let f = from_fn(|x| x);

        let result = solve_unobserved(&f, [0.0, 5.0], &tol(1e-3));

        assert!(matches!(result, Err(Error::NoBracketingSignChange { .. })));
    }

    #[test]
    fn errors_on_invalid_bounds() {
        let f = from_fn(|x| x);

        let result = solve_unobserved(&f, [5.0, 5.0], &Config::default());
        assert!(matches!(
            result,
            Err(Error::InvalidInterval(IntervalError::ZeroWidth))
        ));

        let result = solve_unobserved(&f, [f64::NAN, 5.0], &Config::default());
        assert!(matches!(
            result,
            Err(Error::InvalidInterval(IntervalError::NonFinite))
        ));
    }

    #[test]
    fn observer_can_stop_iteration() {
        let f = from_fn(|x| x * x - 9.0);

        let mut calls = 0usize;
        let observer = |event: &Event| {
            calls += 1;
            (event.iter >= 3).then_some(Action::StopEarly)
        };

        let solution =
            solve(&f, [0.0, 10.0], &Config::default(), observer).expect("should stop cleanly");

        assert_eq!(solution.status, Status::StoppedByObserver);
        assert_eq!(solution.iters, 3);
        assert_eq!(calls, 3);
        // Midpoints: 5, 2.5, 3.75
        assert_relative_eq!(solution.x, 3.75);
        assert_eq!(solution.bracket, [2.5, 5.0]);
    }

    #[test]
    fn observer_sees_shrinking_brackets() {
        let f = from_fn(|x| x - 0.3);

        let mut widths = Vec::new();
        let observer = |event: &Event| {
            widths.push(event.bracket[1] - event.bracket[0]);
            None
        };

        solve(&f, [0.0, 1.0], &tol(1e-3), observer).expect("should solve");

        assert_eq!(widths.len(), 10);
        for pair in widths.windows(2) {
            assert_relative_eq!(pair[1], 0.5 * pair[0]);
        }
    }

    #[test]
    fn tiny_tolerance_is_resolution_limited() {
        let f = from_fn(|x| x - 1.0 / 3.0);

        let solution = solve_unobserved(&f, [0.0, 1.0], &tol(1e-300)).expect("should finish");

        assert_eq!(solution.status, Status::ResolutionLimited);
        assert_relative_eq!(solution.x, 1.0 / 3.0, epsilon = 1e-15);
    }

    #[derive(Debug, Error)]
    #[error("log of non-positive number {0}")]
    struct LogDomain(f64);

    #[test]
    fn function_errors_propagate() {
        let f = try_from_fn(|x: f64| {
            if x > 0.0 {
                Ok(x.ln())
            } else {
                Err(LogDomain(x))
            }
        });

        let result = solve_unobserved(&f, [-1.0, 5.0], &Config::default());

        match result {
            Err(Error::FunctionEvaluationFailed { x, source }) => {
                assert_relative_eq!(x, -1.0);
                assert!(source.downcast_ref::<LogDomain>().is_some());
            }
            other => panic!("expected evaluation failure, got {other:?}"),
        }
    }

    #[test]
    fn non_finite_values_are_errors() {
        let f = from_fn(|x| 1.0 / x);

        // Midpoint of [-1, 1] is 0, where 1/x is infinite.
        let result = solve_unobserved(&f, [-1.0, 1.0], &Config::default());

        assert!(matches!(result, Err(Error::NonFiniteValue { x, .. }) if x == 0.0));
    }

    #[test]
    fn repeated_calls_are_identical() {
        let f = from_fn(|x: f64| x.powi(3) - 2.0 * x - 5.0);

        let first = solve_unobserved(&f, [2.0, 3.0], &tol(1e-10)).expect("should solve");
        let second = solve_unobserved(&f, [2.0, 3.0], &tol(1e-10)).expect("should solve");

        assert_eq!(first.x.to_bits(), second.x.to_bits());
        assert_eq!(first, second);
    }
}
