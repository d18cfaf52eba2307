//! Dichotomy search for the extremum of a unimodal function.
//!
//! # Algorithm
//!
//! Each iteration evaluates two probes a distance `delta` either side of the
//! bracket midpoint and keeps the side holding the better probe. The width
//! goes from `w` to `w/2 + delta`, so it converges to `2·delta` and the
//! tolerance must exceed that for the search to finish. [`Config::new`]
//! enforces this.
//!
//! Far from the origin a fixed `delta` can fall below the float spacing at
//! the midpoint, which would put both probes on the same point. The offset is
//! widened to a few ulps of the midpoint there; if the bracket then cannot
//! reach the tolerance the search ends with [`Status::ResolutionLimited`].
//!
//! Golden section search reaches the same tolerance with fewer evaluations.
//! Dichotomy is kept for its simplicity and its predictable halving.
//!
//! # Observer Events
//!
//! One [`Event`] per iteration, after the bracket update. Observers can
//! return [`Action::StopEarly`] to end the search with the better probe.

use std::fmt;

use scalar_core::{Function, Goal, Observer};

use crate::{
    Error, Evaluation, IntervalError, Status,
    evaluate::evaluate,
    interval::{Bounds, check_tolerance},
    optimization::Solution,
};

/// Configuration for the dichotomy solver.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Config {
    x_abs_tol: f64,
    delta: f64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            x_abs_tol: 1e-6,
            delta: 1e-8,
        }
    }
}

impl Config {
    /// Creates a config with the given bracket-width tolerance and probe offset.
    ///
    /// # Errors
    ///
    /// - [`IntervalError::NonPositiveTolerance`] unless `x_abs_tol` is finite and positive.
    /// - [`IntervalError::DeltaTooLarge`] unless `delta` is finite, positive,
    ///   and `2·delta < x_abs_tol`.
    pub fn new(x_abs_tol: f64, delta: f64) -> Result<Self, IntervalError> {
        let x_abs_tol = check_tolerance(x_abs_tol)?;
        if !(delta.is_finite() && delta > 0.0 && 2.0 * delta < x_abs_tol) {
            return Err(IntervalError::DeltaTooLarge);
        }
        Ok(Self { x_abs_tol, delta })
    }

    /// Returns the absolute bracket-width tolerance.
    #[must_use]
    pub fn x_abs_tol(&self) -> f64 {
        self.x_abs_tol
    }

    /// Returns the offset of each probe from the midpoint.
    ///
    /// This is a lower bound: near large midpoints the offset used is a few
    /// ulps of the midpoint, so the probes stay distinct.
    #[must_use]
    pub fn delta(&self) -> f64 {
        self.delta
    }
}

/// Actions an observer can take during dichotomy search.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Stop and return the better of the two probes just evaluated.
    StopEarly,
}

/// Event emitted after each dichotomy iteration.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Event {
    /// Iteration counter (1-based).
    pub iter: usize,

    /// Bracket after this iteration's update.
    pub bracket: [f64; 2],

    /// Probe left of the midpoint.
    pub left: Evaluation,

    /// Probe right of the midpoint.
    pub right: Evaluation,
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [left, right] = self.bracket;
        write!(
            f,
            "dichotomy iter {}: bracket [{left}, {right}], probes {} and {}",
            self.iter, self.left, self.right
        )
    }
}

/// Returns the probe offset at `mid`, at least four ulps so `mid ± offset`
/// are distinct floats.
fn probe_offset(mid: f64, delta: f64) -> f64 {
    delta.max(4.0 * f64::EPSILON * mid.abs())
}

/// Searches `bracket` for an extremum in the direction given by `goal`.
///
/// The bounds may be given in either order.
///
/// # Errors
///
/// Returns an error if the bounds are invalid, or if `f` fails or returns a
/// non-finite value at any evaluated point.
pub fn search<F, Obs>(
    function: &F,
    bracket: [f64; 2],
    goal: Goal,
    config: &Config,
    mut observer: Obs,
) -> Result<Solution, Error>
where
    F: Function + ?Sized,
    Obs: Observer<Event, Action>,
{
    let Bounds {
        mut left,
        mut right,
    } = Bounds::new(bracket)?;
    let tol = config.x_abs_tol();
    let delta = config.delta();

    log::debug!(
        "dichotomy: {goal} on [{left}, {right}] with x_abs_tol = {tol:e}, delta = {delta:e}"
    );

    let mut iters = 0;
    let mut status = Status::Converged;
    while right - left > tol {
        let width = right - left;
        let mid = 0.5 * left + 0.5 * right;
        let offset = probe_offset(mid, delta);
        let probe_left = evaluate(function, mid - offset)?;
        let probe_right = evaluate(function, mid + offset)?;
        iters += 1;

        if goal.transform(probe_left.value) < goal.transform(probe_right.value) {
            right = probe_right.x;
        } else {
            left = probe_left.x;
        }

        if right - left >= width {
            log::warn!(
                "dichotomy: bracket [{left}, {right}] cannot shrink below x_abs_tol = {tol:e}"
            );
            status = Status::ResolutionLimited;
            break;
        }

        let event = Event {
            iter: iters,
            bracket: [left, right],
            left: probe_left,
            right: probe_right,
        };
        log::trace!("{event}");

        if let Some(Action::StopEarly) = observer.observe(&event) {
            log::debug!("dichotomy: stopped by observer after {iters} iterations");
            let best = if goal.is_better(probe_right.value, probe_left.value) {
                probe_right
            } else {
                probe_left
            };
            return Ok(Solution {
                status: Status::StoppedByObserver,
                goal,
                x: best.x,
                value: best.value,
                bracket: [left, right],
                iters,
            });
        }
    }

    let point = evaluate(function, 0.5 * left + 0.5 * right)?;
    log::debug!(
        "dichotomy: {status:?} at x = {} after {iters} iterations",
        point.x
    );

    Ok(Solution {
        status,
        goal,
        x: point.x,
        value: point.value,
        bracket: [left, right],
        iters,
    })
}

/// Finds the minimum of `function` in `bracket`.
///
/// # Errors
///
/// See [`search`].
pub fn minimize<F, Obs>(
    function: &F,
    bracket: [f64; 2],
    config: &Config,
    observer: Obs,
) -> Result<Solution, Error>
where
    F: Function + ?Sized,
    Obs: Observer<Event, Action>,
{
    search(function, bracket, Goal::Minimize, config, observer)
}

/// Finds the maximum of `function` in `bracket`.
///
/// # Errors
///
/// See [`search`].
pub fn maximize<F, Obs>(
    function: &F,
    bracket: [f64; 2],
    config: &Config,
    observer: Obs,
) -> Result<Solution, Error>
where
    F: Function + ?Sized,
    Obs: Observer<Event, Action>,
{
    search(function, bracket, Goal::Maximize, config, observer)
}

/// Finds the minimum without observation.
///
/// # Errors
///
/// See [`search`].
pub fn minimize_unobserved<F>(
    function: &F,
    bracket: [f64; 2],
    config: &Config,
) -> Result<Solution, Error>
where
    F: Function + ?Sized,
{
    minimize(function, bracket, config, ())
}

/// Finds the maximum without observation.
///
/// # Errors
///
/// See [`search`].
pub fn maximize_unobserved<F>(
    function: &F,
    bracket: [f64; 2],
    config: &Config,
) -> Result<Solution, Error>
where
    F: Function + ?Sized,
{
    maximize(function, bracket, config, ())
}
