use std::{fmt::Debug, ops::ControlFlow};

use crate::Reducer;

/// A [`Reducer`] that folds each item with a fallible closure and
/// stops at the first error.
///
/// This `struct` is created by [`try_from_fn()`]. See its documentation for more.
#[derive(Clone)]
pub struct TryFromFn<F> {
    f: F,
}

/// Creates a [`Reducer`] over `Result<C, E>` accumulators from a closure
/// returning `Result<C, E>`.
///
/// This corresponds to the closure passed to [`Iterator::try_fold()`].
///
/// The accumulator starts as `Ok(init)`. As soon as the closure returns an `Err`,
/// [`try_step()`](Reducer::try_step) signals a stop and the error is carried
/// to the caller exactly as the closure produced it.
/// Through plain [`step()`](Reducer::step), an `Err` accumulator is passed along
/// untouched and the closure is not called anymore.
///
/// # Examples
///
/// ```
/// use std::num::ParseIntError;
/// use transduce::prelude::*;
///
/// let parse_sum = try_from_fn(|sum: i32, s: &str| Ok::<_, ParseIntError>(sum + s.parse::<i32>()?));
///
/// assert_eq!(reduce(["1", "2", "3"], Ok(0), &parse_sum), Ok(6));
///
/// let mut inputs = ["1", "two", "3"].into_iter();
/// let err = reduce(&mut inputs, Ok(0), &parse_sum).unwrap_err();
///
/// assert_eq!(err, "two".parse::<i32>().unwrap_err());
/// // Stopped right at the faulty input.
/// assert_eq!(inputs.next(), Some("3"));
/// ```
#[inline]
pub const fn try_from_fn<F>(f: F) -> TryFromFn<F> {
    TryFromFn { f }
}

impl<C, T, E, F> Reducer<Result<C, E>, T> for TryFromFn<F>
where
    F: Fn(C, T) -> Result<C, E>,
{
    #[inline]
    fn step(&self, acc: Result<C, E>, item: T) -> Result<C, E> {
        acc.and_then(|acc| (self.f)(acc, item))
    }

    #[inline]
    fn try_step(&self, acc: Result<C, E>, item: T) -> ControlFlow<Result<C, E>, Result<C, E>> {
        match acc.and_then(|acc| (self.f)(acc, item)) {
            Ok(acc) => ControlFlow::Continue(Ok(acc)),
            Err(e) => ControlFlow::Break(Err(e)),
        }
    }
}

impl<F> Debug for TryFromFn<F> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TryFromFn").finish_non_exhaustive()
    }
}
