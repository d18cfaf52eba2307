use std::fmt;

use scalar_core::Function;

use crate::Error;

/// A successful, finite evaluation of a function.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Evaluation {
    /// The point that was evaluated.
    pub x: f64,

    /// The function value at `x`.
    pub value: f64,
}

impl fmt::Display for Evaluation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "f({}) = {}", self.x, self.value)
    }
}

/// Evaluates `function` at `x`.
///
/// # Errors
///
/// Returns [`Error::FunctionEvaluationFailed`] if the function fails, or
/// [`Error::NonFiniteValue`] if it returns NaN or an infinity.
pub fn evaluate<F: Function + ?Sized>(function: &F, x: f64) -> Result<Evaluation, Error> {
    let value = function.call(x).map_err(|err| Error::function(x, err))?;

    if !value.is_finite() {
        return Err(Error::NonFiniteValue { x, value });
    }

    Ok(Evaluation { x, value })
}
