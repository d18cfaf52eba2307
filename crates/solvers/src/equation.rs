//! Solvers for equations, finding `x` where `f(x) = 0`.
//!
//! # Solvers
//!
//! - [`bisection`]: guaranteed convergence on an interval where `f` changes sign
//!
//! Newton's method, which needs a seed rather than a bracket, lives in
//! [`crate::newton`].

pub mod bisection;
