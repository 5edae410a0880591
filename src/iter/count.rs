use std::ops::ControlFlow;

use crate::Reducer;

/// A [`Reducer`] that counts the items it receives into a `usize`.
///
/// This reducer corresponds to [`Iterator::count()`].
///
/// # Examples
///
/// ```
/// use transduce::{prelude::*, iter::Count};
///
/// assert_eq!(reduce("the noble singer".split_whitespace(), 0, Count), 3);
/// assert_eq!(transduce(0..100, filtering(|x: &i32| x % 7 == 0), Count, 0), 15);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct Count;

impl<T> Reducer<usize, T> for Count {
    #[inline]
    fn step(&self, acc: usize, _: T) -> usize {
        // We don't care about overflow, same as `Iterator::count()`.
        acc + 1
    }

    #[inline]
    fn step_many(&self, acc: usize, items: impl IntoIterator<Item = T>) -> ControlFlow<usize, usize> {
        ControlFlow::Continue(acc + items.into_iter().count())
    }
}

#[cfg(all(test, feature = "std"))]
mod proptests {
    use proptest::prelude::*;

    use crate::test_utils::{PredError, test_reducer};

    use super::*;

    proptest! {
        #[test]
        fn all_step_methods(
            count in ..100_usize,
            init in ..100_usize,
        ) {
            test_reducer(
                || std::iter::repeat_n('x', count),
                || Count,
                || init,
                false,
                |output, remaining| {
                    if output != init + count {
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
