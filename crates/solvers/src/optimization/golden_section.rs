//! Golden section search for the extremum of a unimodal function.
//!
//! # Algorithm
//!
//! Two interior probes divide the bracket in the golden ratio. Each
//! iteration compares their values, discards the outer segment beyond the
//! worse probe, and places one new probe. The surviving probe lands exactly
//! on the new golden point, so every iteration costs one evaluation and
//! shrinks the bracket by `1/φ ≈ 0.618`.
//!
//! When the bracket is no wider than `x_abs_tol`, the result is its midpoint
//! along with `f` at that midpoint.
//!
//! # Limitations
//!
//! - On a function with several extrema in the bracket, one local extremum
//!   is returned.
//! - Equal probe values keep the left sub-interval.
//!
//! # Observer Events
//!
//! The solver emits one [`Event`] per iteration, after the bracket has
//! shrunk. Observers can return [`Action::StopEarly`] to end the search with
//! the better of the two current probes.

mod action;
mod bracket;
mod config;
mod event;
mod search;
mod state;

#[cfg(test)]
mod tests;

pub use action::Action;
pub use config::Config;
pub use event::Event;

use scalar_core::{Function, Goal, Observer};

use crate::{Error, optimization::Solution};

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
    observer: Obs,
) -> Result<Solution, Error>
where
    F: Function + ?Sized,
    Obs: Observer<Event, Action>,
{
    search::run(function, bracket, goal, config, observer)
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
