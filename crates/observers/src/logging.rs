//! An observer that forwards every solver event to the [`log`] facade.

use std::fmt::Display;

use log::Level;
use scalar_core::Observer;

/// Logs each event with its `Display` form and never intervenes.
///
/// Solvers already log per-iteration events at `trace`. Use this observer to
/// surface the events of one particular solve at a louder level, or under a
/// target of your choosing.
///
/// # Example
///
/// ```rust
/// use scalar_core::from_fn;
/// use scalar_observers::LogObserver;
/// use scalar_solvers::equation::bisection;
///
/// let f = from_fn(|x| x * x - 2.0);
/// let observer = LogObserver::new(log::Level::Info).with_target("sqrt2");
///
/// let solution = bisection::solve(&f, [0.0, 2.0], &bisection::Config::default(), observer)
///     .expect("should solve");
/// assert!((solution.x - 2.0_f64.sqrt()).abs() < 1e-10);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LogObserver {
    level: Level,
    target: &'static str,
}

impl Default for LogObserver {
    fn default() -> Self {
        Self::new(Level::Debug)
    }
}

impl LogObserver {
    /// Creates an observer that logs at `level` under this crate's target.
    #[must_use]
    pub fn new(level: Level) -> Self {
        Self {
            level,
            target: module_path!(),
        }
    }

    /// Sets the log target.
    #[must_use]
    pub fn with_target(self, target: &'static str) -> Self {
        Self { target, ..self }
    }

    /// Returns the level events are logged at.
    #[must_use]
    pub fn level(&self) -> Level {
        self.level
    }

    /// Returns the log target.
    #[must_use]
    pub fn target(&self) -> &'static str {
        self.target
    }
}

impl<E: Display, A> Observer<E, A> for LogObserver {
    fn observe(&mut self, event: &E) -> Option<A> {
        log::log!(target: self.target, self.level, "{event}");
        None
    }
}
