use std::{fmt::Debug, ops::ControlFlow};

use crate::Reducer;

use super::Transducer;

/// A [`Transducer`] that only lets through the items satisfying a predicate.
///
/// This `struct` is created by [`filtering()`]. See its documentation for more.
#[derive(Clone)]
pub struct Filtering<P> {
    pred: P,
}

/// A [`Reducer`] that only hands the items satisfying a predicate
/// to the underlying reducer.
///
/// This `struct` is created by applying a [`Filtering`]. See [`filtering()`] for more.
#[derive(Clone)]
pub struct Filter<P, R> {
    pred: P,
    reducer: R,
}

/// Creates a [`Transducer`] that only lets through the items for which `pred` returns `true`.
///
/// A rejected item never reaches the downstream reducer, and the accumulator is
/// returned exactly as it came in: same value, same handle, no allocation.
///
/// This corresponds to [`Iterator::filter()`].
///
/// # Examples
///
/// ```
/// use transduce::{prelude::*, iter::Count};
///
/// let evens = filtering(|x: &i32| x % 2 == 0);
///
/// assert_eq!(transduce(1..=10, evens.clone(), Append, vec![]), [2, 4, 6, 8, 10]);
/// assert_eq!(transduce(1..=10, evens, Count, 0), 5);
/// ```
///
/// A rejected item leaves the accumulator untouched:
///
/// ```
/// use transduce::prelude::*;
///
/// let reducer = filtering(|x: &i32| *x > 0).apply(Append);
///
/// let buf = Vec::with_capacity(8);
/// let ptr = buf.as_ptr();
///
/// let buf = reducer.step(buf, -1);
/// assert!(buf.is_empty());
/// assert_eq!(buf.as_ptr(), ptr);
/// ```
#[inline]
pub const fn filtering<P>(pred: P) -> Filtering<P> {
    Filtering { pred }
}

impl<A, P> Transducer<A, A> for Filtering<P>
where
    P: Fn(&A) -> bool,
{
    type Reducer<R> = Filter<P, R>;

    #[inline]
    fn apply<R>(self, reducer: R) -> Filter<P, R> {
        Filter {
            pred: self.pred,
            reducer,
        }
    }
}

impl<C, A, P, R> Reducer<C, A> for Filter<P, R>
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
            ControlFlow::Continue(acc)
        }
    }

    fn step_many(&self, acc: C, items: impl IntoIterator<Item = A>) -> ControlFlow<C, C> {
        self.reducer
            .step_many(acc, items.into_iter().filter(|item| (self.pred)(item)))
    }
}

impl<P> Debug for Filtering<P> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Filtering").finish_non_exhaustive()
    }
}

impl<P, R: Debug> Debug for Filter<P, R> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Filter")
            .field("reducer", &self.reducer)
            .finish()
    }
}

#[cfg(all(test, feature = "std"))]
mod proptests {
    use proptest::collection::vec as propvec;
    use proptest::prelude::*;

    use crate::{
        prelude::*,
        test_utils::{PredError, test_reducer},
    };

    proptest! {
        #[test]
        fn all_step_methods(
            nums in propvec(any::<i32>(), ..100),
            modulus in 1..5_i32,
        ) {
            let pred = |num: &i32| num % modulus == 0;

            test_reducer(
                || nums.iter().copied(),
                || filtering(pred).apply(Append),
                Vec::new,
                false,
                |output, remaining| {
                    if output != nums.iter().copied().filter(pred).collect::<Vec<_>>() {
                        Err(PredError::IncorrectOutput)
                    } else if remaining.next().is_some() {
                        Err(PredError::IncorrectIterConsumption)
                    } else {
                        Ok(())
                    }
                },
            )?;
        }
    }
}
