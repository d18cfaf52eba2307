use scalar_core::Goal;

use crate::Status;

/// The result of Newton root finding.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Solution {
    /// Final solver status.
    pub status: Status,

    /// Estimate of the root.
    pub x: f64,

    /// Function value at `x`.
    pub value: f64,

    /// Size of the last Newton step taken, `|x_{n+1} - x_n|`.
    ///
    /// Infinite if an observer stopped the search before the first step.
    pub step: f64,

    /// Number of iterations performed.
    pub iters: usize,
}

/// Classification of a stationary point by the sign of `f''`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExtremumKind {
    /// `f'' > 0`.
    Minimum,

    /// `f'' < 0`.
    Maximum,

    /// `|f''|` is below the derivative threshold; possibly an inflection.
    Flat,
}

impl ExtremumKind {
    /// Classifies a point by its curvature.
    ///
    /// Curvature with magnitude below `threshold` is [`ExtremumKind::Flat`].
    #[must_use]
    pub fn from_curvature(curvature: f64, threshold: f64) -> Self {
        if curvature.abs() < threshold {
            Self::Flat
        } else if curvature > 0.0 {
            Self::Minimum
        } else {
            Self::Maximum
        }
    }

    /// Returns the goal this extremum satisfies, if any.
    #[must_use]
    pub fn goal(self) -> Option<Goal> {
        match self {
            Self::Minimum => Some(Goal::Minimize),
            Self::Maximum => Some(Goal::Maximize),
            Self::Flat => None,
        }
    }
}

/// The result of Newton extremum search.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ExtremumSolution {
    /// Final solver status.
    pub status: Status,

    /// Whether `x` is a minimum, a maximum, or flat.
    pub kind: ExtremumKind,

    /// Estimate of the stationary point.
    pub x: f64,

    /// Function value at `x`.
    pub value: f64,

    /// Second difference `f''(x)`.
    pub curvature: f64,

    /// Size of the last Newton step taken.
    pub step: f64,

    /// Number of iterations performed.
    pub iters: usize,
}
