//! Reusable observers for the scalar solvers.
//!
//! This crate provides [`Observer`] implementations and capability traits that
//! work across every solver in `scalar-solvers`.
//!
//! # Observers
//!
//! - [`LogObserver`]: logs each event through the `log` facade
//! - [`Deadline`]: stops a solver once a wall-clock budget is spent
//! - [`History`]: records every evaluated point, for plotting a solver's path
//!
//! # Modules
//!
//! - [`traits`]: capability traits for cross-solver observers
//!   ([`HasIteration`], [`HasEvaluations`], [`CanStopEarly`])
//!
//! [`Observer`]: scalar_core::Observer
//! [`HasIteration`]: traits::HasIteration
//! [`HasEvaluations`]: traits::HasEvaluations
//! [`CanStopEarly`]: traits::CanStopEarly

pub mod traits;

mod deadline;
mod history;
mod logging;

pub use deadline::Deadline;
pub use history::History;
pub use logging::LogObserver;
