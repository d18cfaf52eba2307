use crate::interval::Bounds;

/// Current bracket bounds and the sign of `f` at each end.
///
/// A bracket always straddles a sign change: `left_sign != right_sign`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(super) struct Bracket {
    left: f64,
    right: f64,
    left_sign: Sign,
}

impl Bracket {
    /// Creates a bracket from ordered bounds with opposite end signs.
    ///
    /// Returns `None` if the signs match.
    pub(super) fn new(bounds: Bounds, left_sign: Sign, right_sign: Sign) -> Option<Self> {
        (left_sign != right_sign).then_some(Self {
            left: bounds.left,
            right: bounds.right,
            left_sign,
        })
    }

    pub(super) fn as_array(&self) -> [f64; 2] {
        [self.left, self.right]
    }

    pub(super) fn midpoint(&self) -> f64 {
        0.5 * (self.left + self.right)
    }

    pub(super) fn width(&self) -> f64 {
        self.right - self.left
    }

    /// Returns true if `x` lies strictly inside the bracket.
    ///
    /// Fails once the bracket is two adjacent floats wide.
    pub(super) fn contains_strictly(&self, x: f64) -> bool {
        self.left < x && x < self.right
    }

    /// Replaces the endpoint whose sign matches `sign` with `x`.
    pub(super) fn shrink(&mut self, x: f64, sign: Sign) {
        if self.left_sign == sign {
            self.left = x;
        } else {
            self.right = x;
        }
    }
}

/// The sign of a function value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum Sign {
    Positive,
    Negative,
}

impl Sign {
    /// Returns the sign of a nonzero value.
    ///
    /// Zero counts as positive; callers handle exact zeros before shrinking.
    pub(super) fn of(value: f64) -> Self {
        if value >= 0.0 {
            Sign::Positive
        } else {
            Sign::Negative
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    fn bounds(a: f64, b: f64) -> Bounds {
        Bounds::new([a, b]).expect("valid bounds")
    }

    #[test]
    fn rejects_matching_signs() {
        assert!(Bracket::new(bounds(0.0, 1.0), Sign::Positive, Sign::Positive).is_none());
        assert!(Bracket::new(bounds(0.0, 1.0), Sign::Negative, Sign::Negative).is_none());
    }

    #[test]
    fn shrink_keeps_sign_change() {
        let mut bracket =
            Bracket::new(bounds(0.0, 2.0), Sign::Negative, Sign::Positive).expect("sign change");

        bracket.shrink(1.0, Sign::Negative);
        let [left, right] = bracket.as_array();
        assert_relative_eq!(left, 1.0);
        assert_relative_eq!(right, 2.0);

        bracket.shrink(1.5, Sign::Positive);
        let [left, right] = bracket.as_array();
        assert_relative_eq!(left, 1.0);
        assert_relative_eq!(right, 1.5);
        assert_relative_eq!(bracket.midpoint(), 1.25);
        assert_relative_eq!(bracket.width(), 0.5);
    }

    #[test]
    fn adjacent_floats_have_no_interior_midpoint() {
        let left = 1.0_f64;
        let right = f64::from_bits(left.to_bits() + 1);
        let bracket =
            Bracket::new(bounds(left, right), Sign::Negative, Sign::Positive).expect("sign change");

        assert!(!bracket.contains_strictly(bracket.midpoint()));
    }

    #[test]
    fn zero_counts_as_positive() {
        assert_eq!(Sign::of(0.0), Sign::Positive);
        assert_eq!(Sign::of(-1e-300), Sign::Negative);
    }
}
