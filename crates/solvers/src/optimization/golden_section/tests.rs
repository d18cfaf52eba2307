use approx::assert_relative_eq;
use scalar_core::{Goal, from_fn, try_from_fn};
use thiserror::Error;

use crate::{Error, IntervalError, Status};

use super::{
    Action, Config, Event, bracket::PHI, maximize, maximize_unobserved, minimize,
    minimize_unobserved, search,
};

fn tol(x_abs_tol: f64) -> Config {
    Config::new(x_abs_tol).expect("valid tolerance")
}

#[test]
fn finds_parabola_minimum() {
    let f = from_fn(|x: f64| (x - 3.0).powi(2));

    let solution = minimize_unobserved(&f, [-10.0, 10.0], &tol(0.001)).expect("should minimize");

    assert_eq!(solution.status, Status::Converged);
    assert_eq!(solution.goal, Goal::Minimize);
    assert_relative_eq!(solution.x, 3.0, epsilon = 1e-3);
    assert_relative_eq!(solution.value, (solution.x - 3.0).powi(2));
    assert!(solution.width() <= 0.001);
}

#[test]
fn finds_parabola_maximum() {
    let f = from_fn(|x: f64| -(x - 3.0).powi(2) + 5.0);

    let solution = maximize_unobserved(&f, [-10.0, 10.0], &tol(0.001)).expect("should maximize");

    assert_eq!(solution.status, Status::Converged);
    assert_eq!(solution.goal, Goal::Maximize);
    assert_relative_eq!(solution.x, 3.0, epsilon = 1e-3);
    assert_relative_eq!(solution.value, 5.0, epsilon = 1e-6);
}

#[test]
fn finds_cubic_extrema() {
    let f = from_fn(|x: f64| x.powi(3) - 4.0 * x);
    let stationary = 2.0 / 3.0_f64.sqrt();

    let min = minimize_unobserved(&f, [0.0, 3.0], &Config::default()).expect("should minimize");
    assert_relative_eq!(min.x, stationary, epsilon = 1e-6);

    let max = maximize_unobserved(&f, [-3.0, 0.0], &Config::default()).expect("should maximize");
    assert_relative_eq!(max.x, -stationary, epsilon = 1e-6);
}

#[test]
fn search_matches_goal_specific_entry_points() {
    let f = from_fn(|x: f64| (x - 1.0).powi(2));

    let via_search = search(&f, [-4.0, 4.0], Goal::Minimize, &tol(1e-6), ()).expect("should run");
    let via_minimize = minimize_unobserved(&f, [-4.0, 4.0], &tol(1e-6)).expect("should run");

    assert_eq!(via_search, via_minimize);
}

#[test]
fn normalizes_reversed_bracket() {
    let f = from_fn(|x: f64| (x + 2.0).powi(2));

    let forward = minimize_unobserved(&f, [-5.0, 5.0], &tol(1e-6)).expect("should minimize");
    let reversed = minimize_unobserved(&f, [5.0, -5.0], &tol(1e-6)).expect("should minimize");

    assert_eq!(forward, reversed);
    assert_relative_eq!(reversed.x, -2.0, epsilon = 1e-6);
}

#[test]
fn minimum_at_boundary() {
    let f = from_fn(|x| x);

    let solution = minimize_unobserved(&f, [2.0, 7.0], &tol(1e-6)).expect("should minimize");

    assert_relative_eq!(solution.x, 2.0, epsilon = 1e-6);
    assert_relative_eq!(solution.bracket[0], 2.0);
}

#[test]
fn flat_function_keeps_left() {
    let f = from_fn(|_| 1.0);

    let solution = minimize_unobserved(&f, [0.0, 1.0], &tol(1e-4)).expect("should minimize");

    assert_eq!(solution.status, Status::Converged);
    assert_relative_eq!(solution.bracket[0], 0.0);
    assert_relative_eq!(solution.value, 1.0);
}

#[test]
fn bracket_shrinks_by_golden_ratio() {
    let f = from_fn(|x: f64| (x - 0.7).powi(2));

    let mut widths = vec![1.0];
    let observer = |event: &Event| {
        widths.push(event.bracket[1] - event.bracket[0]);
        None
    };

    minimize(&f, [0.0, 1.0], &tol(1e-6), observer).expect("should minimize");

    assert!(widths.len() > 20);
    for pair in widths.windows(2) {
        assert_relative_eq!(pair[1] * PHI, pair[0], max_relative = 1e-6);
    }
}

#[test]
fn observer_can_stop_iteration() {
    let f = from_fn(|x: f64| (x - 3.0).powi(2));

    let mut last = None;
    let observer = |event: &Event| {
        last = Some(*event);
        (event.iter >= 2).then_some(Action::StopEarly)
    };

    let solution = minimize(&f, [-10.0, 10.0], &Config::default(), observer)
        .expect("should stop cleanly");

    let event = last.expect("observer should have been called");
    assert_eq!(solution.status, Status::StoppedByObserver);
    assert_eq!(solution.iters, 2);
    assert_eq!(solution.bracket, event.bracket);
    assert_relative_eq!(solution.width(), 20.0 / (PHI * PHI), max_relative = 1e-12);

    // The returned point is the better of the two probes.
    let best = if event.point.value < event.other.value {
        event.point
    } else {
        event.other
    };
    assert_eq!(solution.x, best.x);
    assert_eq!(solution.value, best.value);
}

#[test]
fn maximize_observer_sees_goal_direction() {
    let f = from_fn(|x: f64| -(x - 3.0).powi(2));

    let mut best_values = Vec::new();
    let observer = |event: &Event| {
        best_values.push(event.point.value.max(event.other.value));
        None
    };

    maximize(&f, [-10.0, 10.0], &tol(1e-3), observer).expect("should maximize");

    for pair in best_values.windows(2) {
        assert!(pair[1] >= pair[0]);
    }
}

#[test]
fn tiny_tolerance_terminates() {
    let f = from_fn(|x: f64| (x - 0.3).powi(2));

    let solution = minimize_unobserved(&f, [0.0, 1.0], &tol(1e-300)).expect("should finish");

    assert_ne!(solution.status, Status::StoppedByObserver);
    assert_relative_eq!(solution.x, 0.3, epsilon = 1e-7);
}

#[test]
fn config_rejects_bad_tolerance() {
    assert_eq!(Config::new(0.0), Err(IntervalError::NonPositiveTolerance));
    assert_eq!(Config::new(-1.0), Err(IntervalError::NonPositiveTolerance));
    assert_eq!(Config::new(f64::NAN), Err(IntervalError::NonPositiveTolerance));
    assert_relative_eq!(Config::default().x_abs_tol(), 1e-9);
}

#[test]
fn errors_on_invalid_bounds() {
    let f = from_fn(|x| x);

    let result = minimize_unobserved(&f, [1.0, 1.0], &Config::default());

    assert!(matches!(
        result,
        Err(Error::InvalidInterval(IntervalError::ZeroWidth))
    ));
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

    // ln is increasing, so the search walks left into the invalid region.
    let result = minimize_unobserved(&f, [-1.0, 5.0], &Config::default());

    match result {
        Err(Error::FunctionEvaluationFailed { x, source }) => {
            assert!(x <= 0.0);
            assert!(source.downcast_ref::<LogDomain>().is_some());
        }
        other => panic!("expected evaluation failure, got {other:?}"),
    }
}

#[test]
fn repeated_calls_are_identical() {
    let f = from_fn(|x: f64| x.cos());

    let first = minimize_unobserved(&f, [2.0, 4.0], &tol(1e-10)).expect("should minimize");
    let second = minimize_unobserved(&f, [2.0, 4.0], &tol(1e-10)).expect("should minimize");

    assert_eq!(first, second);
    assert_relative_eq!(first.x, std::f64::consts::PI, epsilon = 1e-5);
}

#[test]
fn widest_finite_bounds_are_searched() {
    let f = from_fn(f64::abs);

    let solution =
        minimize_unobserved(&f, [-1e308, 1e308], &tol(1e290)).expect("should minimize");

    assert_eq!(solution.status, Status::Converged);
    assert!(solution.x.abs() <= 1e290);
    assert!(solution.bracket[0] <= 0.0 && 0.0 <= solution.bracket[1]);
    assert!(solution.width() <= 1e290);
}
