//! Core traits and types shared by the scalar solvers.
//!
//! This crate defines the abstractions that solvers and observers build on:
//!
//! - [`Function`]: a compiled scalar function `f: ℝ → ℝ` that may fail
//! - [`from_fn`], [`try_from_fn`]: adapters that turn closures into functions
//! - [`Observer`]: receives solver events and optionally returns control actions
//! - [`Goal`]: the direction of an extremum search

mod function;
mod goal;
mod observer;

pub use function::{FromFn, Function, TryFromFn, from_fn, try_from_fn};
pub use goal::Goal;
pub use observer::Observer;
