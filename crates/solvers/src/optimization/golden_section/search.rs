use scalar_core::{Function, Goal, Observer};

use crate::{Error, Status, evaluate::evaluate, interval::Bounds, optimization::Solution};

use super::{
    Action, Config, Event,
    bracket::GoldenBracket,
    state::{ShrinkDirection, State},
};

/// Core golden section loop shared by minimization and maximization.
///
/// Probe values pass through [`Goal::transform`] before comparison, so the
/// loop itself always minimizes.
pub(super) fn run<F, Obs>(
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
    let bounds = Bounds::new(bracket)?;
    let tol = config.x_abs_tol();
    let bracket = GoldenBracket::new(bounds);

    log::debug!(
        "golden section: {goal} on [{}, {}] with x_abs_tol = {tol:e}",
        bounds.left,
        bounds.right
    );

    let left = evaluate(function, bracket.inner_left)?;
    let right = evaluate(function, bracket.inner_right)?;
    let mut state = State::new(bracket, left, right);

    // Half-widths stay finite for bounds whose full width overflows.
    let half_tol = 0.5 * tol;
    let mut iters = 0;
    while state.bracket().half_width() > half_tol {
        let half_width = state.bracket().half_width();

        let direction = state.next_action(goal);
        let point = evaluate(function, direction.x())?;
        let other = state.apply(direction, point);
        iters += 1;

        if state.bracket().half_width() >= half_width {
            log::warn!(
                "golden section: bracket {:?} cannot shrink below x_abs_tol = {tol:e}",
                state.bracket().as_array()
            );
            return finish(function, &state, goal, Status::ResolutionLimited, iters);
        }

        let event = Event {
            iter: iters,
            bracket: state.bracket().as_array(),
            point,
            other,
        };
        log::trace!("{event}");

        if let Some(Action::StopEarly) = observer.observe(&event) {
            log::debug!("golden section: stopped by observer after {iters} iterations");
            let best = state.best(goal);
            return Ok(Solution {
                status: Status::StoppedByObserver,
                goal,
                x: best.x,
                value: best.value,
                bracket: state.bracket().as_array(),
                iters,
            });
        }
    }

    finish(function, &state, goal, Status::Converged, iters)
}

/// Evaluates the final bracket midpoint and builds the solution.
fn finish<F>(
    function: &F,
    state: &State,
    goal: Goal,
    status: Status,
    iters: usize,
) -> Result<Solution, Error>
where
    F: Function + ?Sized,
{
    let point = evaluate(function, state.bracket().midpoint())?;
    log::debug!(
        "golden section: {status:?} at x = {} after {iters} iterations",
        point.x
    );

    Ok(Solution {
        status,
        goal,
        x: point.x,
        value: point.value,
        bracket: state.bracket().as_array(),
        iters,
    })
}
