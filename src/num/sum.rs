use std::ops::Add;

use crate::Reducer;

/// A [`Reducer`] that adds every item to the accumulator.
///
/// It works with any type implementing [`Add`], and accepts items either by value or
/// by reference (if the accumulator can be added a reference to).
/// Overflow behaves as `+` does.
///
/// This reducer corresponds to [`Iterator::sum()`].
///
/// # Examples
///
/// ```
/// use std::num::Wrapping;
/// use transduce::{prelude::*, num::Sum};
///
/// let nums = [1, 2, 3];
///
/// assert_eq!(reduce(nums, 0, Sum), 6);
/// assert_eq!(reduce(&nums, 10, Sum), 16);
/// assert_eq!(reduce([Wrapping(u8::MAX), Wrapping(2)], Wrapping(0), Sum), Wrapping(1));
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct Sum;

impl<T> Reducer<T, T> for Sum
where
    T: Add<Output = T>,
{
    #[inline]
    fn step(&self, acc: T, item: T) -> T {
        acc + item
    }
}

impl<'a, T> Reducer<T, &'a T> for Sum
where
    T: Add<&'a T, Output = T>,
{
    #[inline]
    fn step(&self, acc: T, item: &'a T) -> T {
        acc + item
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
            nums in propvec(any::<i16>().prop_map_into::<i64>(), ..100),
            init in any::<i16>().prop_map_into::<i64>(),
        ) {
            test_reducer(
                || nums.iter().copied(),
                || Sum,
                || init,
                false,
                |output, remaining| {
                    if output != init + nums.iter().sum::<i64>() {
                        Err(PredError::IncorrectOutput)
                    } else if remaining.next().is_some() {
                        Err(PredError::IncorrectIterConsumption)
                    } else {
                        Ok(())
                    }
                },
            )?;
        }

        #[test]
        fn by_reference(
            nums in propvec(any::<i16>().prop_map_into::<i64>(), ..100),
        ) {
            test_reducer(
                || nums.iter(),
                || Sum,
                || 0_i64,
                false,
                |output, remaining| {
                    if output != nums.iter().sum::<i64>() {
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
