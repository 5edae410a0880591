use std::{fmt::Debug, ops::ControlFlow};

use crate::Reducer;

use super::Transducer;

/// A [`Transducer`] that expands every item into any number of items.
///
/// This `struct` is created by [`flat_mapping()`]. See its documentation for more.
#[derive(Clone)]
pub struct FlatMapping<F> {
    f: F,
}

/// A [`Reducer`] that hands every item produced by the closure
/// to the underlying reducer, in order.
///
/// This `struct` is created by applying a [`FlatMapping`]. See [`flat_mapping()`] for more.
#[derive(Clone)]
pub struct FlatMap<F, R> {
    f: F,
    reducer: R,
}

/// Creates a [`Transducer`] that forwards every item of `f(x)`, in order.
///
/// The produced items are fed one by one as `f(x)` yields them: nothing is buffered.
/// If the downstream reducer stops midway, the rest of `f(x)` is not pulled.
///
/// This corresponds to [`Iterator::flat_map()`].
///
/// # Examples
///
/// ```
/// use transduce::prelude::*;
///
/// let chars = transduce(["ab", "", "cde"], flat_mapping(str::chars), Append, String::new());
///
/// assert_eq!(chars, "abcde");
/// ```
#[inline]
pub const fn flat_mapping<F>(f: F) -> FlatMapping<F> {
    FlatMapping { f }
}

impl<A, I, F> Transducer<A, I::Item> for FlatMapping<F>
where
    F: Fn(A) -> I,
    I: IntoIterator,
{
    type Reducer<R> = FlatMap<F, R>;

    #[inline]
    fn apply<R>(self, reducer: R) -> FlatMap<F, R> {
        FlatMap { f: self.f, reducer }
    }
}

impl<C, A, I, F, R> Reducer<C, A> for FlatMap<F, R>
where
    F: Fn(A) -> I,
    I: IntoIterator,
    R: Reducer<C, I::Item>,
{
    #[inline]
    fn step(&self, acc: C, item: A) -> C {
        (self.f)(item)
            .into_iter()
            .fold(acc, |acc, item| self.reducer.step(acc, item))
    }

    #[inline]
    fn try_step(&self, acc: C, item: A) -> ControlFlow<C, C> {
        (self.f)(item)
            .into_iter()
            .try_fold(acc, |acc, item| self.reducer.try_step(acc, item))
    }

    fn step_many(&self, acc: C, items: impl IntoIterator<Item = A>) -> ControlFlow<C, C> {
        self.reducer
            .step_many(acc, items.into_iter().flat_map(&self.f))
    }
}

impl<F> Debug for FlatMapping<F> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FlatMapping").finish_non_exhaustive()
    }
}

impl<F, R: Debug> Debug for FlatMap<F, R> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FlatMap")
            .field("reducer", &self.reducer)
            .finish()
    }
}
