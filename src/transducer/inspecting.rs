use std::{fmt::Debug, ops::ControlFlow};

use crate::Reducer;

use super::Transducer;

/// A [`Transducer`] that calls a closure on a reference to every item before forwarding it.
///
/// This `struct` is created by [`inspecting()`]. See its documentation for more.
#[derive(Clone)]
pub struct Inspecting<F> {
    f: F,
}

/// A [`Reducer`] that calls a closure on a reference to every item before
/// handing it to the underlying reducer.
///
/// This `struct` is created by applying an [`Inspecting`]. See [`inspecting()`] for more.
#[derive(Clone)]
pub struct Inspect<F, R> {
    f: F,
    reducer: R,
}

/// Creates a [`Transducer`] that calls `f` on a reference to every item,
/// then forwards the item unchanged.
///
/// The closure is `Fn`, so any state it updates must live behind a shared reference
/// (a [`Cell`](std::cell::Cell), for example).
///
/// This corresponds to [`Iterator::inspect()`].
///
/// # Examples
///
/// ```
/// use std::cell::Cell;
/// use transduce::prelude::*;
///
/// let seen = Cell::new(0);
/// let kept = transduce(
///     1..=6,
///     inspecting(|_: &i32| seen.set(seen.get() + 1)).then(filtering(|x: &i32| x % 3 == 0)),
///     Append,
///     vec![],
/// );
///
/// assert_eq!(kept, [3, 6]);
/// assert_eq!(seen.get(), 6);
/// ```
#[inline]
pub const fn inspecting<F>(f: F) -> Inspecting<F> {
    Inspecting { f }
}

impl<A, F> Transducer<A, A> for Inspecting<F>
where
    F: Fn(&A),
{
    type Reducer<R> = Inspect<F, R>;

    #[inline]
    fn apply<R>(self, reducer: R) -> Inspect<F, R> {
        Inspect { f: self.f, reducer }
    }
}

impl<C, A, F, R> Reducer<C, A> for Inspect<F, R>
where
    F: Fn(&A),
    R: Reducer<C, A>,
{
    #[inline]
    fn step(&self, acc: C, item: A) -> C {
        (self.f)(&item);
        self.reducer.step(acc, item)
    }

    #[inline]
    fn try_step(&self, acc: C, item: A) -> ControlFlow<C, C> {
        (self.f)(&item);
        self.reducer.try_step(acc, item)
    }

    fn step_many(&self, acc: C, items: impl IntoIterator<Item = A>) -> ControlFlow<C, C> {
        self.reducer
            .step_many(acc, items.into_iter().inspect(|item| (self.f)(item)))
    }
}

impl<F> Debug for Inspecting<F> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Inspecting").finish_non_exhaustive()
    }
}

impl<F, R: Debug> Debug for Inspect<F, R> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Inspect")
            .field("reducer", &self.reducer)
            .finish()
    }
}
