use std::fmt;

/// Direction of an extremum search.
///
/// Extremum solvers always minimize internally. Values are passed through
/// [`Goal::transform`] before they are compared, so maximizing `f` is the
/// same search as minimizing `-f`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Goal {
    /// Search for the smallest value.
    #[default]
    Minimize,

    /// Search for the largest value.
    Maximize,
}

impl Goal {
    /// Maps a function value to the score the solver minimizes.
    ///
    /// - [`Goal::Minimize`]: returns the value unchanged
    /// - [`Goal::Maximize`]: negates the value
    #[inline]
    #[must_use]
    pub fn transform(self, value: f64) -> f64 {
        match self {
            Self::Minimize => value,
            Self::Maximize => -value,
        }
    }

    /// Returns true if `candidate` is strictly better than `incumbent`.
    #[inline]
    #[must_use]
    pub fn is_better(self, candidate: f64, incumbent: f64) -> bool {
        self.transform(candidate) < self.transform(incumbent)
    }
}

impl fmt::Display for Goal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Minimize => f.write_str("minimize"),
            Self::Maximize => f.write_str("maximize"),
        }
    }
}
