use std::{fmt::Debug, ops::ControlFlow};

use crate::Reducer;

use super::Transducer;

/// A [`Transducer`] that transforms every item with a closure.
///
/// This `struct` is created by [`mapping()`]. See its documentation for more.
#[derive(Clone)]
pub struct Mapping<F> {
    f: F,
}

/// A [`Reducer`] that transforms every item with a closure before
/// handing it to the underlying reducer.
///
/// This `struct` is created by applying a [`Mapping`]. See [`mapping()`] for more.
#[derive(Clone)]
pub struct Map<F, R> {
    f: F,
    reducer: R,
}

/// Creates a [`Transducer`] that transforms every item with `f`.
///
/// Applied to a downstream reducer, every item `x` is folded as `f(x)`.
/// Exactly one downstream step happens per item: nothing is dropped, nothing is duplicated.
///
/// This corresponds to [`Iterator::map()`].
///
/// # Examples
///
/// ```
/// use transduce::{prelude::*, num::Sum};
///
/// let double = mapping(|x: i32| x * 2);
///
/// assert_eq!(transduce([1, 2, 3], double.clone(), Append, vec![]), [2, 4, 6]);
/// assert_eq!(transduce([1, 2, 3], double, Sum, 0), 12);
/// ```
///
/// The element type may change along the way:
///
/// ```
/// use transduce::prelude::*;
///
/// let lengths = transduce(["a", "bcd", "ef"], mapping(str::len), Append, vec![]);
///
/// assert_eq!(lengths, [1, 3, 2]);
/// ```
#[inline]
pub const fn mapping<F>(f: F) -> Mapping<F> {
    Mapping { f }
}

impl<A, B, F> Transducer<A, B> for Mapping<F>
where
    F: Fn(A) -> B,
{
    type Reducer<R> = Map<F, R>;

    #[inline]
    fn apply<R>(self, reducer: R) -> Map<F, R> {
        Map { f: self.f, reducer }
    }
}

impl<C, A, B, F, R> Reducer<C, A> for Map<F, R>
where
    F: Fn(A) -> B,
    R: Reducer<C, B>,
{
    #[inline]
    fn step(&self, acc: C, item: A) -> C {
        self.reducer.step(acc, (self.f)(item))
    }

    #[inline]
    fn try_step(&self, acc: C, item: A) -> ControlFlow<C, C> {
        self.reducer.try_step(acc, (self.f)(item))
    }

    fn step_many(&self, acc: C, items: impl IntoIterator<Item = A>) -> ControlFlow<C, C> {
        self.reducer.step_many(acc, items.into_iter().map(&self.f))
    }
}

impl<F> Debug for Mapping<F> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Mapping").finish_non_exhaustive()
    }
}

impl<F, R: Debug> Debug for Map<F, R> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Map")
            .field("reducer", &self.reducer)
            .finish()
    }
}
