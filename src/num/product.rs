use std::ops::Mul;

use crate::Reducer;

/// A [`Reducer`] that multiplies the accumulator by every item.
///
/// It works with any type implementing [`Mul`], and accepts items either by value or
/// by reference. Overflow behaves as `*` does.
///
/// This reducer corresponds to [`Iterator::product()`].
///
/// # Examples
///
/// ```
/// use transduce::{prelude::*, num::Product};
///
/// let factorial = |n: u64| reduce(1..=n, 1, Product);
///
/// assert_eq!(factorial(0), 1);
/// assert_eq!(factorial(5), 120);
/// assert_eq!(transduce(1..=6, filtering(|x: &u64| x % 2 == 1), Product, 1), 15);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct Product;

impl<T> Reducer<T, T> for Product
where
    T: Mul<Output = T>,
{
    #[inline]
    fn step(&self, acc: T, item: T) -> T {
        acc * item
    }
}

impl<'a, T> Reducer<T, &'a T> for Product
where
    T: Mul<&'a T, Output = T>,
{
    #[inline]
    fn step(&self, acc: T, item: &'a T) -> T {
        acc * item
    }
}
