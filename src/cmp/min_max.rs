use itertools::MinMaxResult;

use crate::Reducer;

/// A [`Reducer`] that keeps both the minimum and the maximum items it receives,
/// into a [`MinMaxResult`].
///
/// Starting from [`MinMaxResult::NoElements`], the accumulator becomes:
///
/// - [`MinMaxResult::OneElement`] after exactly one item.
/// - [`MinMaxResult::MinMax`] with the minimum and the maximum (in order) after two or more.
///
///   If there are multiple equally minimum items, the first one is kept.
///   If there are multiple equally maximum items, the last one is kept.
///
/// This reducer corresponds to [`Itertools::minmax()`](itertools::Itertools::minmax).
///
/// # Examples
///
/// ```
/// use itertools::MinMaxResult;
/// use transduce::{prelude::*, cmp::MinMax};
///
/// assert_eq!(reduce(Vec::<i32>::new(), MinMaxResult::NoElements, MinMax), MinMaxResult::NoElements);
/// assert_eq!(reduce([1], MinMaxResult::NoElements, MinMax), MinMaxResult::OneElement(1));
/// assert_eq!(reduce([1, 3, 2], MinMaxResult::NoElements, MinMax), MinMaxResult::MinMax(1, 3));
/// ```
#[cfg_attr(docsrs, doc(cfg(feature = "itertools")))]
#[derive(Debug, Clone, Copy, Default)]
pub struct MinMax;

impl<T: Ord> Reducer<MinMaxResult<T>, T> for MinMax {
    fn step(&self, acc: MinMaxResult<T>, item: T) -> MinMaxResult<T> {
        match acc {
            MinMaxResult::NoElements => MinMaxResult::OneElement(item),
            MinMaxResult::OneElement(prev) if item < prev => MinMaxResult::MinMax(item, prev),
            MinMaxResult::OneElement(prev) => MinMaxResult::MinMax(prev, item),
            // Checking `min` first keeps the first of equal minimums even when `min == max`.
            MinMaxResult::MinMax(min, max) if item < min => MinMaxResult::MinMax(item, max),
            MinMaxResult::MinMax(min, max) if item >= max => MinMaxResult::MinMax(min, item),
            unchanged @ MinMaxResult::MinMax(..) => unchanged,
        }
    }
}
