//! Solvers for optimization problems: minimizing or maximizing `f`.
//!
//! Both solvers here are derivative-free and work on a bracket that must
//! contain exactly one extremum of the requested kind. The direction is a
//! [`Goal`]; maximizing runs the same search on negated values.
//!
//! # Solvers
//!
//! - [`golden_section`]: one evaluation per iteration, width shrinks by `1/φ`
//! - [`dichotomy`]: two probes around the midpoint, width roughly halves
//!
//! Newton's method for extrema, which needs a seed rather than a bracket,
//! lives in [`crate::newton`].
//!
//! [`Goal`]: scalar_core::Goal

mod solution;

pub mod dichotomy;
pub mod golden_section;

pub use solution::Solution;
