use std::{fmt::Debug, ops::ControlFlow};

use crate::Reducer;

use super::Transducer;

/// A [`Transducer`] that stops the reduction at the first item failing a predicate.
///
/// This `struct` is created by [`take_while()`]. See its documentation for more.
#[derive(Clone)]
pub struct TakingWhile<P> {
    pred: P,
}

/// A [`Reducer`] that hands items to the underlying reducer while they satisfy
/// a predicate, and signals a stop at the first one that does not.
///
/// This `struct` is created by applying a [`TakingWhile`]. See [`take_while()`] for more.
#[derive(Clone)]
pub struct TakeWhile<P, R> {
    pred: P,
    reducer: R,
}

/// Creates a [`Transducer`] that forwards items while `pred` holds, and stops
/// the reduction at the first item for which it does not.
///
/// The stop is signaled through [`try_step()`](Reducer::try_step), which is what the
/// drivers of this crate use. The item failing `pred` is consumed from the source
/// but never reaches the downstream reducer.
///
/// Since a reducer keeps no state between steps, driving the reducer with plain
/// [`step()`](Reducer::step) cannot remember that it has stopped: it then only
/// skips the items failing `pred`, just like [`filtering()`](crate::filtering).
///
/// This corresponds to [`Iterator::take_while()`].
///
/// # Examples
///
/// ```
/// use transduce::prelude::*;
///
/// let mut source = [1, 2, 3, -1, 4, 5].into_iter();
/// let positives = transduce(&mut source, take_while(|x: &i32| *x > 0), Append, vec![]);
///
/// assert_eq!(positives, [1, 2, 3]);
/// // `-1` was consumed, the rest was left alone.
/// assert_eq!(source.as_slice(), [4, 5]);
/// ```
///
/// Infinite sources are fine, as long as the predicate eventually fails:
///
/// ```
/// use transduce::{prelude::*, num::Sum};
///
/// let sum = transduce(
///     (1..).map(|x: u64| x * x),
///     take_while(|sq: &u64| *sq < 50),
///     Sum,
///     0,
/// );
///
/// assert_eq!(sum, 1 + 4 + 9 + 16 + 25 + 36 + 49);
/// ```
#[inline]
pub const fn take_while<P>(pred: P) -> TakingWhile<P> {
    TakingWhile { pred }
}

impl<A, P> Transducer<A, A> for TakingWhile<P>
where
    P: Fn(&A) -> bool,
{
    type Reducer<R> = TakeWhile<P, R>;

    #[inline]
    fn apply<R>(self, reducer: R) -> TakeWhile<P, R> {
        TakeWhile {
            pred: self.pred,
            reducer,
        }
    }
}

impl<C, A, P, R> Reducer<C, A> for TakeWhile<P, R>
where
    P: Fn(&A) -> bool,
    R: Reducer<C, A>,
{
    #[inline]
    fn step(&self, acc: C, item: A) -> C {
        if (self.pred)(&item) {
            self.reducer.step(acc, item)
        } else {
            acc
        }
    }

    #[inline]
    fn try_step(&self, acc: C, item: A) -> ControlFlow<C, C> {
        if (self.pred)(&item) {
            self.reducer.try_step(acc, item)
        } else {
            ControlFlow::Break(acc)
        }
    }

    // `step_many()` is left to the default: `Iterator::take_while()` would not
    // tell us whether it stopped because of the predicate or the source ran dry.
}

impl<P> Debug for TakingWhile<P> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TakingWhile").finish_non_exhaustive()
    }
}

impl<P, R: Debug> Debug for TakeWhile<P, R> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TakeWhile")
            .field("reducer", &self.reducer)
            .finish()
    }
}
