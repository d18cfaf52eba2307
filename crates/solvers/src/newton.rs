//! Newton iteration from a seed, for roots and for extrema.
//!
//! # Algorithm
//!
//! Root finding iterates `x_{n+1} = x_n - f(x_n) / f'(x_n)`. Extremum search
//! applies the same update to the derivative, `x_{n+1} = x_n - f'(x_n) / f''(x_n)`.
//! Derivatives come from the symmetric differences in [`crate::derivative`],
//! so only `f` itself is required.
//!
//! Each step checks, in order:
//!
//! 1. `|derivative| < min_derivative` fails with [`Error::DerivativeNearZero`].
//! 2. A non-finite `x_{n+1}` fails with [`Error::Diverged`].
//! 3. `|x_{n+1} - x_n| <= x_abs_tol` converges at `x_{n+1}`.
//!
//! Running out of `max_iters` fails with [`Error::NotConverged`].
//!
//! Convergence is quadratic near a simple root, but there is no bracket: a
//! poor seed can wander, cycle, or land on a different root.
//!
//! # Observer Events
//!
//! One [`Event`] per step, before the step is taken. Observers can return
//! [`Action::StopEarly`] to end with the current iterate.

mod config;
mod event;
mod solution;


pub use config::Config;
pub use event::{Action, Event};
pub use solution::{ExtremumKind, ExtremumSolution, Solution};

use scalar_core::{Function, Observer};

use crate::{
    Error, Evaluation, IntervalError, Status,
    derivative::{central_difference, second_difference},
    evaluate::evaluate,
};

/// Finds a root of `function` by Newton iteration from `x0`.
///
/// # Errors
///
/// Returns an error if `x0` is not finite, the derivative falls below
/// `min_derivative`, an iterate becomes non-finite, the tolerance is not met
/// within `max_iters`, or `f` fails or returns a non-finite value.
pub fn find_root<F, Obs>(
    function: &F,
    x0: f64,
    config: &Config,
    observer: Obs,
) -> Result<Solution, Error>
where
    F: Function + ?Sized,
    Obs: Observer<Event, Action>,
{
    let outcome = iterate(function, x0, config, Target::Root, observer)?;

    Ok(Solution {
        status: outcome.status,
        x: outcome.point.x,
        value: outcome.point.value,
        step: outcome.step,
        iters: outcome.iters,
    })
}

/// Finds a root without observation.
///
/// # Errors
///
/// See [`find_root`].
pub fn find_root_unobserved<F>(function: &F, x0: f64, config: &Config) -> Result<Solution, Error>
where
    F: Function + ?Sized,
{
    find_root(function, x0, config, ())
}

/// Finds a stationary point of `function` by Newton iteration on `f'`.
///
/// The result is classified by the curvature at the final iterate, so it
/// may be a minimum, a maximum, or neither.
///
/// # Errors
///
/// Same conditions as [`find_root`], with the threshold applied to `f''`.
pub fn find_extremum<F, Obs>(
    function: &F,
    x0: f64,
    config: &Config,
    observer: Obs,
) -> Result<ExtremumSolution, Error>
where
    F: Function + ?Sized,
    Obs: Observer<Event, Action>,
{
    let outcome = iterate(function, x0, config, Target::Extremum, observer)?;
    let Evaluation { x, value } = outcome.point;

    let curvature = second_difference(function, x, value, config.second_step())?;
    let kind = ExtremumKind::from_curvature(curvature, config.min_derivative());
    log::debug!("newton extremum: {kind:?} at x = {x} with f''(x) = {curvature:e}");

    Ok(ExtremumSolution {
        status: outcome.status,
        kind,
        x,
        value,
        curvature,
        step: outcome.step,
        iters: outcome.iters,
    })
}

/// Finds a stationary point without observation.
///
/// # Errors
///
/// See [`find_extremum`].
pub fn find_extremum_unobserved<F>(
    function: &F,
    x0: f64,
    config: &Config,
) -> Result<ExtremumSolution, Error>
where
    F: Function + ?Sized,
{
    find_extremum(function, x0, config, ())
}

/// What the iteration drives to zero.
#[derive(Debug, Clone, Copy)]
enum Target {
    /// `f` itself.
    Root,

    /// `f'`, using `f''` as its derivative.
    Extremum,
}

/// Residual and its derivative at one iterate.
struct Linearization {
    point: Evaluation,
    residual: f64,
    derivative: f64,
}

impl Target {
    fn label(self) -> &'static str {
        match self {
            Self::Root => "root",
            Self::Extremum => "extremum",
        }
    }

    fn linearize<F>(self, function: &F, x: f64, config: &Config) -> Result<Linearization, Error>
    where
        F: Function + ?Sized,
    {
        let point = evaluate(function, x)?;
        let slope = central_difference(function, x, config.step())?;

        Ok(match self {
            Self::Root => Linearization {
                point,
                residual: point.value,
                derivative: slope,
            },
            Self::Extremum => Linearization {
                point,
                residual: slope,
                derivative: second_difference(function, x, point.value, config.second_step())?,
            },
        })
    }
}

/// Where the iteration stopped.
struct Outcome {
    status: Status,
    point: Evaluation,
    step: f64,
    iters: usize,
}

fn iterate<F, Obs>(
    function: &F,
    x0: f64,
    config: &Config,
    target: Target,
    mut observer: Obs,
) -> Result<Outcome, Error>
where
    F: Function + ?Sized,
    Obs: Observer<Event, Action>,
{
    if !x0.is_finite() {
        return Err(IntervalError::NonFinite.into());
    }

    let label = target.label();
    let tol = config.x_abs_tol();
    let max_iters = config.max_iters();
    log::debug!(
        "newton {label}: start at x0 = {x0} with x_abs_tol = {tol:e}, max_iters = {max_iters}"
    );

    let mut x = x0;
    let mut step = f64::INFINITY;

    for iter in 1..=max_iters {
        let Linearization {
            point,
            residual,
            derivative,
        } = target.linearize(function, x, config)?;

        if derivative.abs() < config.min_derivative() {
            log::debug!("newton {label}: derivative {derivative:e} too small at x = {x}");
            return Err(Error::DerivativeNearZero { x, derivative });
        }

        let next_x = x - residual / derivative;
        if !next_x.is_finite() {
            log::warn!("newton {label}: diverged after {iter} iterations");
            return Err(Error::Diverged {
                iters: iter,
                x: next_x,
            });
        }

        let event = Event {
            iter,
            point,
            residual,
            derivative,
            next_x,
        };
        log::trace!("{event}");

        if let Some(Action::StopEarly) = observer.observe(&event) {
            log::debug!("newton {label}: stopped by observer after {iter} iterations");
            return Ok(Outcome {
                status: Status::StoppedByObserver,
                point,
                step,
                iters: iter,
            });
        }

        step = (next_x - x).abs();
        x = next_x;

        if step <= tol {
            let point = evaluate(function, x)?;
            log::debug!("newton {label}: converged at x = {x} after {iter} iterations");
            return Ok(Outcome {
                status: Status::Converged,
                point,
                step,
                iters: iter,
            });
        }
    }

    log::debug!("newton {label}: no convergence after {max_iters} iterations, last step {step:e}");
    Err(Error::NotConverged {
        iters: max_iters,
        x,
        step,
    })
}
