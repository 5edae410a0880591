use std::ops::ControlFlow;

use crate::{Reducer, Transducer};

/// Folds every item of `source` into `initial` with `operation`, and returns the
/// final accumulator.
///
/// The source is traversed once, left to right. Each item is pulled exactly once
/// and handed to `operation` right away: nothing is buffered in between, however many
/// transducers `operation` is made of. If `source` is empty, `initial` is returned as is.
///
/// If `operation` signals a stop (see [`Reducer::try_step()`]), no further item is pulled
/// and the accumulator at that point is returned.
///
/// Pass the operation by reference to keep using it afterwards.
///
/// # Examples
///
/// ```
/// use transduce::{prelude::*, num::Sum};
///
/// let op = mapping(|x: i32| x + 1)
///     .then(filtering(|x: &i32| x % 2 == 0))
///     .apply(Append);
///
/// assert_eq!(reduce(1..=10, Vec::new(), &op), [2, 4, 6, 8, 10]);
/// assert_eq!(reduce(1..=3, vec![0], &op), [0, 2, 4]);
/// assert_eq!(reduce([], vec![9], op), [9]);
///
/// assert_eq!(reduce([1, 2, 3], 10, Sum), 16);
/// ```
#[inline]
pub fn reduce<I, C, R>(source: I, initial: C, operation: R) -> C
where
    I: IntoIterator,
    R: Reducer<C, I::Item>,
{
    match operation.step_many(initial, source) {
        ControlFlow::Continue(acc) | ControlFlow::Break(acc) => acc,
    }
}

/// Like [`reduce()`], but also tells whether `operation` stopped the reduction early.
///
/// Returns [`Break(acc)`] if `operation` signaled a stop, or [`Continue(acc)`] if
/// `source` was exhausted.
///
/// # Examples
///
/// ```
/// use std::ops::ControlFlow;
/// use transduce::prelude::*;
///
/// let op = take_while(|x: &i32| *x < 3).apply(Append);
///
/// assert_eq!(try_reduce(0..2, vec![], &op), ControlFlow::Continue(vec![0, 1]));
/// assert_eq!(try_reduce(0..9, vec![], &op), ControlFlow::Break(vec![0, 1, 2]));
/// ```
///
/// [`Break(acc)`]: ControlFlow::Break
/// [`Continue(acc)`]: ControlFlow::Continue
#[inline]
pub fn try_reduce<I, C, R>(source: I, initial: C, operation: R) -> ControlFlow<C, C>
where
    I: IntoIterator,
    R: Reducer<C, I::Item>,
{
    operation.step_many(initial, source)
}

/// Applies `transducer` to `reducer`, then [`reduce()`]s `source` into `initial` with it.
///
/// # Examples
///
/// ```
/// use transduce::{prelude::*, num::Sum};
///
/// let xf = mapping(|x: i32| x + 1).then(filtering(|x: &i32| x % 2 == 0));
///
/// assert_eq!(transduce(1..=10, xf.clone(), Append, Vec::new()), [2, 4, 6, 8, 10]);
/// assert_eq!(transduce(1..=10, xf, Sum, 0), 30);
/// ```
#[inline]
pub fn transduce<I, X, B, R, C>(source: I, transducer: X, reducer: R, initial: C) -> C
where
    I: IntoIterator,
    X: Transducer<I::Item, B>,
    X::Reducer<R>: Reducer<C, I::Item>,
{
    reduce(source, initial, transducer.apply(reducer))
}

#[cfg(all(test, feature = "std"))]
mod tests {
    use std::{cell::Cell, ops::ControlFlow};

    use crate::{
        iter::Count,
        num::Sum,
        prelude::*,
        test_utils::{Tally, counted},
    };

    #[test]
    fn empty_source_keeps_initial() {
        assert_eq!(reduce(Vec::<i32>::new(), vec![1, 2], Append), [1, 2]);
        assert_eq!(reduce(std::iter::empty::<i32>(), 5, Sum), 5);
        assert_eq!(
            try_reduce(std::iter::empty::<i32>(), 5, Sum),
            ControlFlow::Continue(5)
        );
    }

    #[test]
    fn every_item_visited_once_in_order() {
        let visits = Cell::new(0);
        let calls = Cell::new(0);

        let out = reduce(
            counted(["a", "b", "c", "d"], &visits),
            String::new(),
            Tally::new(&calls, from_fn(|mut acc: String, s: &str| {
                acc.push_str(s);
                acc
            })),
        );

        assert_eq!(out, "abcd");
        assert_eq!(visits.get(), 4);
        assert_eq!(calls.get(), 4);
    }

    #[test]
    fn stop_leaves_rest_of_source_untouched() {
        let visits = Cell::new(0);
        let out = try_reduce(
            counted(1..=100, &visits),
            0,
            take_while(|x: &i32| *x <= 10).apply(Count),
        );

        assert_eq!(out, ControlFlow::Break(10));
        // The 11th item is pulled to find out it fails the predicate.
        assert_eq!(visits.get(), 11);
    }

    #[test]
    fn sums_incremented_evens() {
        let xf = mapping(|x: i32| x + 1).then(filtering(|x: &i32| x % 2 == 0));

        assert_eq!(transduce(1..=10, xf.clone(), Append, Vec::new()), [2, 4, 6, 8, 10]);
        assert_eq!(transduce(1..=10, xf, Sum, 0), 30);
    }
}
