use std::ops::ControlFlow;

use crate::Reducer;

use super::min_assign;

/// A [`Reducer`] that keeps the minimum item it receives, into an `Option<T>`.
///
/// The accumulator is `None` until the first item arrives.
/// If there are several equally minimum items, the first one is kept.
///
/// This reducer corresponds to [`Iterator::min()`].
///
/// # Examples
///
/// ```
/// use transduce::{prelude::*, cmp::Min};
///
/// assert_eq!(reduce([4, 2, 6, 3], None, Min), Some(2));
/// assert_eq!(transduce([4, 2, 6, 3], filtering(|x: &i32| *x > 2), Min, None), Some(3));
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct Min;

impl<T: Ord> Reducer<Option<T>, T> for Min {
    #[inline]
    fn step(&self, acc: Option<T>, item: T) -> Option<T> {
        match acc {
            Some(mut min) => {
                min_assign(&mut min, item);
                Some(min)
            }
            None => Some(item),
        }
    }

    fn step_many(
        &self,
        acc: Option<T>,
        items: impl IntoIterator<Item = T>,
    ) -> ControlFlow<Option<T>, Option<T>> {
        ControlFlow::Continue(acc.into_iter().chain(items).min())
    }
}
