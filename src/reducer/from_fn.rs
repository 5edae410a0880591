use std::fmt::Debug;

use crate::Reducer;

/// A [`Reducer`] that calls a closure to fold each item.
///
/// This `struct` is created by [`from_fn()`]. See its documentation for more.
#[derive(Clone)]
pub struct FromFn<F> {
    f: F,
}

/// Creates a [`Reducer`] from a closure taking the accumulator and an item,
/// and returning the next accumulator.
///
/// This corresponds to the closure passed to [`Iterator::fold()`].
///
/// You may need to annotate the closure's parameter types,
/// since they cannot be inferred from the use site.
///
/// # Examples
///
/// ```
/// use transduce::prelude::*;
///
/// let concat = from_fn(|mut acc: String, word: &str| {
///     if !acc.is_empty() {
///         acc.push(' ');
///     }
///     acc.push_str(word);
///     acc
/// });
///
/// assert_eq!(reduce(["the", "noble", "singer"], String::new(), concat), "the noble singer");
/// ```
#[inline]
pub const fn from_fn<F>(f: F) -> FromFn<F> {
    FromFn { f }
}

impl<C, T, F> Reducer<C, T> for FromFn<F>
where
    F: Fn(C, T) -> C,
{
    #[inline]
    fn step(&self, acc: C, item: T) -> C {
        (self.f)(acc, item)
    }
}

impl<F> Debug for FromFn<F> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FromFn").finish_non_exhaustive()
    }
}

#[cfg(all(test, feature = "std"))]
mod proptests {
    use proptest::collection::vec as propvec;
    use proptest::prelude::*;

    use crate::test_utils::{PredError, test_reducer};

    use super::*;

    proptest! {
        #[test]
        fn all_step_methods(
            nums in propvec(any::<i64>(), ..100),
            init in any::<i64>(),
        ) {
            // Non-commutative on purpose: order of folding matters.
            let f = |acc: i64, num: i64| acc.wrapping_mul(31).wrapping_add(num);

            test_reducer(
                || nums.iter().copied(),
                || from_fn(f),
                || init,
                false,
                |output, remaining| {
                    if output != nums.iter().copied().fold(init, f) {
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
