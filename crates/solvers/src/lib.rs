//! Iterative solvers for scalar functions of one real variable.
//!
//! Every solver borrows a compiled [`Function`], runs to convergence or
//! failure, and returns either a solution or a typed [`Error`]. Solvers are
//! synchronous, keep no state between calls, and never retry: calling one
//! twice with the same inputs gives bit-identical results.
//!
//! # Modules
//!
//! - [`equation`]: root finding on a bracketed interval ([`equation::bisection`])
//! - [`optimization`]: extremum search on a bracketed interval
//!   ([`optimization::golden_section`], [`optimization::dichotomy`])
//! - [`newton`]: Newton iteration from a seed, for roots and extrema
//! - [`derivative`]: symmetric finite differences used by [`newton`]
//! - [`sample`]: `(x, f(x))` samples for plotting
//!
//! # Logging
//!
//! Solvers emit records through the [`log`] facade: `debug` when a search
//! starts and finishes, `trace` per iteration, and `warn` when a search is
//! limited by floating-point resolution. No logger is installed here.
//!
//! [`Function`]: scalar_core::Function

mod error;
mod evaluate;
mod interval;

pub mod derivative;
pub mod equation;
pub mod newton;
pub mod optimization;
pub mod sample;

pub use error::Error;
pub use evaluate::{Evaluation, evaluate};
pub use interval::IntervalError;

/// Indicates how a search finished.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    /// The configured x tolerance was met.
    Converged,

    /// The bracket could not shrink further in `f64` arithmetic.
    ///
    /// The tolerance is finer than the float spacing near the answer.
    /// The returned estimate is as good as the representation allows.
    ResolutionLimited,

    /// Stopped early due to an observer decision.
    StoppedByObserver,
}
