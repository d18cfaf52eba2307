//! Uniform sampling of `f` over an interval, for plotting.
//!
//! [`sample_curve`] validates its inputs up front and returns a [`Curve`].
//! Nothing is evaluated until the curve is iterated, and each iteration
//! starts again from the left bound.
//!
//! Sample points are `x_i = left + i·step` for `i = 0..=n`, with
//! `n = ⌊(right - left) / step⌋`. A relative slack of `1e-9` absorbs the
//! rounding in that ratio, so `[-5, 5]` with step `1` gives 11 points and
//! `[0, 0.3]` with step `0.1` gives 4. A final point that lands within the
//! slack of `right` is snapped to `right`.

use std::{fmt, iter::FusedIterator};

use scalar_core::Function;

use crate::{
    Error, Evaluation,
    evaluate::evaluate,
    interval::{Bounds, check_step},
};

const SLACK: f64 = 1e-9;

/// One `(x, f(x))` sample.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SamplePoint {
    pub x: f64,
    pub y: f64,
}

impl From<Evaluation> for SamplePoint {
    fn from(point: Evaluation) -> Self {
        Self {
            x: point.x,
            y: point.value,
        }
    }
}

/// A validated, lazily evaluated sampling of a function.
pub struct Curve<'a, F: ?Sized> {
    function: &'a F,
    left: f64,
    right: f64,
    step: f64,
    len: usize,
}

impl<F: ?Sized> Clone for Curve<'_, F> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<F: ?Sized> Copy for Curve<'_, F> {}

impl<F: ?Sized> fmt::Debug for Curve<'_, F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Curve")
            .field("left", &self.left)
            .field("right", &self.right)
            .field("step", &self.step)
            .field("len", &self.len)
            .finish_non_exhaustive()
    }
}

/// Prepares `(x, f(x))` samples of `function` from one bound to the other.
///
/// The bounds may be given in either order; sampling always runs from the
/// smaller to the larger.
///
/// # Errors
///
/// Returns [`Error::InvalidInterval`] if the bounds are non-finite or equal,
/// or if `step` is not finite and positive. Evaluation errors surface later,
/// from the iterator.
pub fn sample_curve<F>(function: &F, bounds: [f64; 2], step: f64) -> Result<Curve<'_, F>, Error>
where
    F: Function + ?Sized,
{
    let Bounds { left, right } = Bounds::new(bounds)?;
    let step = check_step(step)?;

    let ratio = (right - left) / step;
    // Saturates for absurdly fine steps; the iterator is lazy either way.
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let last = (ratio * (1.0 + SLACK)).floor() as usize;
    let len = last.saturating_add(1);

    log::debug!("sample: {len} points on [{left}, {right}] with step {step}");

    Ok(Curve {
        function,
        left,
        right,
        step,
        len,
    })
}

impl<'a, F> Curve<'a, F>
where
    F: Function + ?Sized,
{
    /// Returns an iterator over the samples, starting from the left bound.
    #[must_use]
    pub fn iter(&self) -> Samples<'a, F> {
        Samples {
            curve: *self,
            next: 0,
            failed: false,
        }
    }

    /// Evaluates every sample, stopping at the first error.
    ///
    /// # Errors
    ///
    /// Returns the first evaluation error.
    pub fn points(&self) -> Result<Vec<SamplePoint>, Error> {
        self.iter().collect()
    }
}

impl<F: ?Sized> Curve<'_, F> {
    /// Returns the number of sample points.
    #[must_use]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Always false; a curve has at least its left bound.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the ordered bounds.
    #[must_use]
    pub fn bounds(&self) -> [f64; 2] {
        [self.left, self.right]
    }

    /// Returns the spacing between samples.
    #[must_use]
    pub fn step(&self) -> f64 {
        self.step
    }

    #[allow(clippy::cast_precision_loss)]
    fn x_at(&self, index: usize) -> f64 {
        let x = self.left + index as f64 * self.step;
        let snap = SLACK * (self.right - self.left);
        if index + 1 == self.len && (self.right - x).abs() <= snap {
            self.right
        } else {
            x.min(self.right)
        }
    }
}

impl<'a, F> IntoIterator for &Curve<'a, F>
where
    F: Function + ?Sized,
{
    type Item = Result<SamplePoint, Error>;
    type IntoIter = Samples<'a, F>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Iterator over the samples of a [`Curve`].
///
/// Yields an evaluation error at most once, then ends.
pub struct Samples<'a, F: ?Sized> {
    curve: Curve<'a, F>,
    next: usize,
    failed: bool,
}

impl<F: ?Sized> Clone for Samples<'_, F> {
    fn clone(&self) -> Self {
        Self {
            curve: self.curve,
            next: self.next,
            failed: self.failed,
        }
    }
}

impl<F> Iterator for Samples<'_, F>
where
    F: Function + ?Sized,
{
    type Item = Result<SamplePoint, Error>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed || self.next >= self.curve.len {
            return None;
        }

        let x = self.curve.x_at(self.next);
        self.next += 1;

        match evaluate(self.curve.function, x) {
            Ok(point) => Some(Ok(point.into())),
            Err(err) => {
                log::debug!("sample: stopped at x = {x}: {err}");
                self.failed = true;
                Some(Err(err))
            }
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.failed {
            (0, Some(0))
        } else {
            let remaining = self.curve.len - self.next;
            (remaining.min(1), Some(remaining))
        }
    }
}

impl<F> FusedIterator for Samples<'_, F> where F: Function + ?Sized {}
