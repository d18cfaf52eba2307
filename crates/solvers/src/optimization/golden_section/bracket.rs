use crate::interval::Bounds;

/// The golden ratio: φ = (1 + √5) / 2
pub(super) const PHI: f64 = 1.618_033_988_749_895;

/// The inverse golden ratio: 1/φ = φ - 1
const INV_PHI: f64 = PHI - 1.0;

/// Golden section search bracket.
///
/// Holds the outer interval `[left, right]` and two interior probes at
/// `right - width/φ` and `left + width/φ`.
///
/// Probes are computed from weighted sums of the endpoints, so any pair of
/// finite bounds gives finite probes even when `right - left` overflows.
#[derive(Debug, Clone, Copy)]
pub(super) struct GoldenBracket {
    pub(super) left: f64,
    pub(super) right: f64,
    pub(super) inner_left: f64,
    pub(super) inner_right: f64,
}

impl GoldenBracket {
    pub(super) fn new(bounds: Bounds) -> Self {
        let Bounds { left, right } = bounds;
        Self {
            left,
            right,
            inner_left: toward(right, left),
            inner_right: toward(left, right),
        }
    }

    /// Returns half the width; finite for any finite bounds.
    pub(super) fn half_width(&self) -> f64 {
        0.5 * self.right - 0.5 * self.left
    }

    pub(super) fn midpoint(&self) -> f64 {
        0.5 * self.left + 0.5 * self.right
    }

    pub(super) fn as_array(&self) -> [f64; 2] {
        [self.left, self.right]
    }

    /// Shrinks to `[left, inner_right]`.
    ///
    /// The old `inner_left` becomes the new `inner_right`.
    pub(super) fn shrink_right(&mut self) {
        self.right = self.inner_right;
        self.inner_right = self.inner_left;
        self.inner_left = toward(self.right, self.left);
    }

    /// Shrinks to `[inner_left, right]`.
    ///
    /// The old `inner_right` becomes the new `inner_left`.
    pub(super) fn shrink_left(&mut self) {
        self.left = self.inner_left;
        self.inner_left = self.inner_right;
        self.inner_right = toward(self.left, self.right);
    }

    /// Returns the new `inner_left` that [`Self::shrink_right`] would place.
    pub(super) fn next_inner_left(&self) -> f64 {
        toward(self.inner_right, self.left)
    }

    /// Returns the new `inner_right` that [`Self::shrink_left`] would place.
    pub(super) fn next_inner_right(&self) -> f64 {
        toward(self.inner_left, self.right)
    }
}

/// Returns the point `1/φ` of the way from `from` to `to`.
///
/// Written as a weighted sum so it cannot overflow for finite endpoints.
fn toward(from: f64, to: f64) -> f64 {
    (1.0 - INV_PHI) * from + INV_PHI * to
}
