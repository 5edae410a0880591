use std::ops::ControlFlow;

use crate::Reducer;

/// A [`Reducer`] that appends every item to the accumulator.
///
/// Any accumulator implementing [`Extend`] works: [`Vec`], [`String`],
/// [`HashSet`], [`BTreeMap`] (with `(key, value)` items), and so on.
/// The accumulator is extended in place and handed back, never copied.
///
/// This reducer corresponds to [`Iterator::collect()`], except that it appends to
/// an existing collection, like [`Extend::extend()`].
///
/// # Examples
///
/// ```
/// use std::collections::HashSet;
/// use transduce::prelude::*;
///
/// assert_eq!(reduce([3, 4], vec![1, 2], Append), [1, 2, 3, 4]);
/// assert_eq!(reduce(['o', 'k'], String::from("is "), Append), "is ok");
///
/// let unique: HashSet<_> = transduce([1, 2, 1, 3, 2], mapping(|x: i32| x * 10), Append, HashSet::new());
/// assert_eq!(unique, HashSet::from([10, 20, 30]));
/// ```
///
/// [`Vec`]: std::vec::Vec
/// [`String`]: std::string::String
/// [`HashSet`]: std::collections::HashSet
/// [`BTreeMap`]: std::collections::BTreeMap
#[derive(Debug, Clone, Copy, Default)]
pub struct Append;

impl<C, T> Reducer<C, T> for Append
where
    C: Extend<T>,
{
    #[inline]
    fn step(&self, mut acc: C, item: T) -> C {
        acc.extend(Some(item));
        acc
    }

    #[inline]
    fn step_many(&self, mut acc: C, items: impl IntoIterator<Item = T>) -> ControlFlow<C, C> {
        // `Extend` implementations can reserve from the iterator's size hint.
        acc.extend(items);
        ControlFlow::Continue(acc)
    }
}
