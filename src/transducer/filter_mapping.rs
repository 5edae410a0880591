use std::{fmt::Debug, ops::ControlFlow};

use crate::Reducer;

use super::Transducer;

/// A [`Transducer`] that both filters and transforms items with a closure.
///
/// This `struct` is created by [`filter_mapping()`]. See its documentation for more.
#[derive(Clone)]
pub struct FilterMapping<F> {
    f: F,
}

/// A [`Reducer`] that hands `y` to the underlying reducer whenever the closure
/// returns `Some(y)`, and skips the item otherwise.
///
/// This `struct` is created by applying a [`FilterMapping`]. See [`filter_mapping()`] for more.
#[derive(Clone)]
pub struct FilterMap<F, R> {
    f: F,
    reducer: R,
}

/// Creates a [`Transducer`] that forwards `y` whenever `f(x)` is `Some(y)`,
/// and passes the accumulator along untouched when it is `None`.
///
/// This corresponds to [`Iterator::filter_map()`].
///
/// # Examples
///
/// ```
/// use transduce::{prelude::*, num::Sum};
///
/// let parsed = filter_mapping(|s: &str| s.parse::<i32>().ok());
///
/// assert_eq!(transduce(["12", "34", "not a number", "56"], parsed, Sum, 0), 102);
/// ```
#[inline]
pub const fn filter_mapping<F>(f: F) -> FilterMapping<F> {
    FilterMapping { f }
}

impl<A, B, F> Transducer<A, B> for FilterMapping<F>
where
    F: Fn(A) -> Option<B>,
{
    type Reducer<R> = FilterMap<F, R>;

    #[inline]
    fn apply<R>(self, reducer: R) -> FilterMap<F, R> {
        FilterMap { f: self.f, reducer }
    }
}

impl<C, A, B, F, R> Reducer<C, A> for FilterMap<F, R>
where
    F: Fn(A) -> Option<B>,
    R: Reducer<C, B>,
{
    #[inline]
    fn step(&self, acc: C, item: A) -> C {
        match (self.f)(item) {
            Some(item) => self.reducer.step(acc, item),
            None => acc,
        }
    }

    #[inline]
    fn try_step(&self, acc: C, item: A) -> ControlFlow<C, C> {
        match (self.f)(item) {
            Some(item) => self.reducer.try_step(acc, item),
            None => ControlFlow::Continue(acc),
        }
    }

    fn step_many(&self, acc: C, items: impl IntoIterator<Item = A>) -> ControlFlow<C, C> {
        self.reducer
            .step_many(acc, items.into_iter().filter_map(&self.f))
    }
}

impl<F> Debug for FilterMapping<F> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FilterMapping").finish_non_exhaustive()
    }
}

impl<F, R: Debug> Debug for FilterMap<F, R> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FilterMap")
            .field("reducer", &self.reducer)
            .finish()
    }
}
