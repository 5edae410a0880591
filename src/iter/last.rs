use std::ops::ControlFlow;

use crate::Reducer;

/// A [`Reducer`] that keeps the last item it receives, into an `Option<T>`.
///
/// This reducer corresponds to [`Iterator::last()`].
///
/// # Examples
///
/// ```
/// use transduce::{prelude::*, iter::Last};
///
/// assert_eq!(transduce(1..=10, filtering(|x: &i32| x % 4 == 0), Last, None), Some(8));
/// assert_eq!(reduce(Vec::<i32>::new(), Some(3), Last), Some(3));
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct Last;

impl<T> Reducer<Option<T>, T> for Last {
    #[inline]
    fn step(&self, _: Option<T>, item: T) -> Option<T> {
        Some(item)
    }

    #[inline]
    fn step_many(
        &self,
        acc: Option<T>,
        items: impl IntoIterator<Item = T>,
    ) -> ControlFlow<Option<T>, Option<T>> {
        // An empty `items` must not wipe out what we already have.
        ControlFlow::Continue(items.into_iter().last().or(acc))
    }
}
