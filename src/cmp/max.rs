use std::ops::ControlFlow;

use crate::Reducer;

use super::max_assign;

/// A [`Reducer`] that keeps the maximum item it receives, into an `Option<T>`.
///
/// The accumulator is `None` until the first item arrives.
/// If there are several equally maximum items, the last one is kept.
///
/// This reducer corresponds to [`Iterator::max()`].
///
/// # Examples
///
/// ```
/// use transduce::{prelude::*, cmp::Max};
///
/// assert_eq!(reduce([1, 3, 2, 5, 3], None, Max), Some(5));
/// assert_eq!(reduce(Vec::<i32>::new(), None, Max), None);
///
/// // Starting from a known maximum.
/// assert_eq!(reduce([1, 3, 2], Some(4), Max), Some(4));
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct Max;

impl<T: Ord> Reducer<Option<T>, T> for Max {
    #[inline]
    fn step(&self, acc: Option<T>, item: T) -> Option<T> {
        match acc {
            Some(mut max) => {
                max_assign(&mut max, item);
                Some(max)
            }
            None => Some(item),
        }
    }

    fn step_many(
        &self,
        acc: Option<T>,
        items: impl IntoIterator<Item = T>,
    ) -> ControlFlow<Option<T>, Option<T>> {
        ControlFlow::Continue(acc.into_iter().chain(items).max())
    }
}
