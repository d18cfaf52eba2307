use std::{convert::Infallible, marker::PhantomData};

/// A scalar function of one real variable.
///
/// Solvers take a `Function` by reference and call it as many times as the
/// algorithm needs. Expression evaluators should compile their text once into
/// a type implementing this trait, then hand that value to every solver call.
///
/// Evaluation may fail (a domain error such as `ln` of a negative number, or
/// a division by zero detected by the evaluator). Solvers propagate the error
/// unchanged and never substitute a value for it.
pub trait Function {
    type Error: std::error::Error + Send + Sync + 'static;

    /// Evaluates the function at `x`.
    ///
    /// # Errors
    ///
    /// Returns [`Self::Error`] if the function is undefined at `x`.
    fn call(&self, x: f64) -> Result<f64, Self::Error>;
}

impl<F: Function + ?Sized> Function for &F {
    type Error = F::Error;

    fn call(&self, x: f64) -> Result<f64, Self::Error> {
        (**self).call(x)
    }
}

/// A [`Function`] backed by an infallible closure.
///
/// Construct with [`from_fn`].
#[derive(Debug, Clone, Copy)]
pub struct FromFn<F> {
    func: F,
}

/// Wraps an infallible closure as a [`Function`].
///
/// # Example
///
/// ```
/// use scalar_core::{Function, from_fn};
///
/// let f = from_fn(|x| x * x - 4.0);
/// assert_eq!(f.call(3.0), Ok(5.0));
/// ```
pub const fn from_fn<F>(func: F) -> FromFn<F>
where
    F: Fn(f64) -> f64,
{
    FromFn { func }
}

impl<F> Function for FromFn<F>
where
    F: Fn(f64) -> f64,
{
    type Error = Infallible;

    fn call(&self, x: f64) -> Result<f64, Self::Error> {
        Ok((self.func)(x))
    }
}

/// A [`Function`] backed by a fallible closure.
///
/// Construct with [`try_from_fn`].
pub struct TryFromFn<F, E> {
    func: F,
    _error: PhantomData<fn() -> E>,
}

/// Wraps a fallible closure as a [`Function`].
///
/// # Example
///
/// ```
/// use scalar_core::{Function, try_from_fn};
///
/// #[derive(Debug)]
/// struct Domain;
///
/// impl std::fmt::Display for Domain {
///     fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
///         f.write_str("outside the domain")
///     }
/// }
///
/// impl std::error::Error for Domain {}
///
/// let ln = try_from_fn(|x: f64| if x > 0.0 { Ok(x.ln()) } else { Err(Domain) });
/// assert!(ln.call(1.0).is_ok());
/// assert!(ln.call(-1.0).is_err());
/// ```
pub const fn try_from_fn<F, E>(func: F) -> TryFromFn<F, E>
where
    F: Fn(f64) -> Result<f64, E>,
{
    TryFromFn {
        func,
        _error: PhantomData,
    }
}

impl<F, E> Function for TryFromFn<F, E>
where
    F: Fn(f64) -> Result<f64, E>,
    E: std::error::Error + Send + Sync + 'static,
{
    type Error = E;

    fn call(&self, x: f64) -> Result<f64, Self::Error> {
        (self.func)(x)
    }
}

impl<F: Clone, E> Clone for TryFromFn<F, E> {
    fn clone(&self) -> Self {
        Self {
            func: self.func.clone(),
            _error: PhantomData,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use thiserror::Error;

    #[derive(Debug, Error, PartialEq)]
    #[error("negative input {0}")]
    struct Negative(f64);

    fn sqrt(x: f64) -> Result<f64, Negative> {
        if x < 0.0 { Err(Negative(x)) } else { Ok(x.sqrt()) }
    }

    #[test]
    fn from_fn_calls_closure() {
        let f = from_fn(|x| 2.0 * x + 1.0);
        assert_relative_eq!(f.call(3.0).unwrap(), 7.0);
    }

    #[test]
    fn try_from_fn_passes_errors_through() {
        let f = try_from_fn(sqrt);
        assert_relative_eq!(f.call(9.0).unwrap(), 3.0);
        assert_eq!(f.call(-1.0), Err(Negative(-1.0)));
    }

    #[test]
    fn references_are_functions() {
        fn eval_at_two(f: impl Function) -> f64 {
            f.call(2.0).unwrap_or(f64::NAN)
        }

        let f = from_fn(|x| x.powi(3));
        assert_relative_eq!(eval_at_two(&f), 8.0);
        assert_relative_eq!(eval_at_two(&&f), 8.0);
    }
}
