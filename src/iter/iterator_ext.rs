use crate::{Reducer, Transducer, reduce, transduce};

/// Extends [`Iterator`] with method forms of [`reduce()`] and [`transduce()`].
///
/// This trait is automatically implemented for all [`Iterator`] types.
pub trait IteratorExt: Iterator {
    /// Folds every item of this iterator into `initial` with `operation`.
    ///
    /// See [`reduce()`] for more.
    ///
    /// To use this method, import the [`IteratorExt`] trait.
    ///
    /// # Examples
    ///
    /// ```
    /// use transduce::{prelude::*, cmp::Max};
    ///
    /// let max_len = ["a", "abc", "ab"]
    ///     .into_iter()
    ///     .reduce_with(None, mapping(str::len).apply(Max));
    ///
    /// assert_eq!(max_len, Some(3));
    /// ```
    #[inline]
    fn reduce_with<C, R>(self, initial: C, operation: R) -> C
    where
        Self: Sized,
        R: Reducer<C, Self::Item>,
    {
        reduce(self, initial, operation)
    }

    /// Applies `transducer` to `reducer`, then folds every item of this iterator
    /// into `initial` with it.
    ///
    /// See [`transduce()`] for more.
    ///
    /// To use this method, import the [`IteratorExt`] trait.
    ///
    /// # Examples
    ///
    /// ```
    /// use transduce::prelude::*;
    ///
    /// let words = "the noble and the singer"
    ///     .split_whitespace()
    ///     .transduce(mapping(str::to_uppercase), Append, Vec::new());
    ///
    /// assert_eq!(words, ["THE", "NOBLE", "AND", "THE", "SINGER"]);
    /// ```
    #[inline]
    fn transduce<X, B, R, C>(self, transducer: X, reducer: R, initial: C) -> C
    where
        Self: Sized,
        X: Transducer<Self::Item, B>,
        X::Reducer<R>: Reducer<C, Self::Item>,
    {
        transduce(self, transducer, reducer, initial)
    }
}

impl<I: Iterator> IteratorExt for I {}

#[cfg(all(test, feature = "std"))]
mod tests {
    use crate::{num::Sum, prelude::*};

    #[test]
    fn method_forms_match_free_functions() {
        let xf = || mapping(|x: i32| x + 1).then(filtering(|x: &i32| x % 2 == 0));

        assert_eq!(
            (1..=10).transduce(xf(), Append, Vec::new()),
            transduce(1..=10, xf(), Append, Vec::new()),
        );
        assert_eq!((1..=10).transduce(xf(), Sum, 0), 30);
        assert_eq!((1..=10).reduce_with(0, xf().apply(Sum)), 30);
    }
}
