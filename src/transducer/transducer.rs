use crate::assert_transducer;

use super::Compose;

/// Turns a [`Reducer`] over `B` into a [`Reducer`] over `A`.
///
/// A transducer is independent of the accumulator. [`apply()`](Transducer::apply) wraps
/// any downstream reducer `R`, and the wrapped reducer [`Self::Reducer<R>`] folds items of
/// type `A` into whatever accumulator `R` folds items of type `B` into.
///
/// Transducers are plain values. They are usually [`Clone`] (as long as the closures
/// they hold are), so one definition can be applied to many downstream reducers.
///
/// # Examples
///
/// ```
/// use transduce::{prelude::*, iter::Count};
///
/// let long_words = filtering(|w: &&str| w.len() > 3);
/// let words = "the noble and the singer".split_whitespace();
///
/// assert_eq!(transduce(words.clone(), long_words.clone(), Count, 0), 2);
/// assert_eq!(transduce(words, long_words, Append, vec![]), ["noble", "singer"]);
/// ```
///
/// [`Reducer`]: crate::Reducer
/// [`Self::Reducer<R>`]: Transducer::Reducer
pub trait Transducer<A, B> {
    /// The reducer over `A` that this transducer produces out of a reducer `R` over `B`.
    type Reducer<R>;

    /// Wraps `reducer` with the work of this transducer.
    ///
    /// # Examples
    ///
    /// ```
    /// use transduce::prelude::*;
    ///
    /// let reducer = mapping(|x: i32| x * x).apply(Append);
    ///
    /// assert_eq!(reducer.step(vec![1], 3), [1, 9]);
    /// ```
    fn apply<R>(self, reducer: R) -> Self::Reducer<R>;

    /// Chains `next` after this transducer.
    ///
    /// Every item is first fully processed by `self`, and only what `self` forwards
    /// reaches `next`. The output element type of `self` must be the input element
    /// type of `next`, which is checked at compile time.
    ///
    /// The result is itself a [`Transducer`], so chains can be extended indefinitely.
    /// The way a chain is grouped does not matter:
    /// `a.then(b).then(c)` and `a.then(b.then(c))` behave identically.
    ///
    /// # Examples
    ///
    /// ```
    /// use transduce::prelude::*;
    ///
    /// let add_then_keep_evens = mapping(|x: i32| x + 1).then(filtering(|x: &i32| x % 2 == 0));
    /// let keep_evens_then_add = filtering(|x: &i32| x % 2 == 0).then(mapping(|x: i32| x + 1));
    ///
    /// assert_eq!(transduce(1..=6, add_then_keep_evens, Append, vec![]), [2, 4, 6]);
    /// assert_eq!(transduce(1..=6, keep_evens_then_add, Append, vec![]), [3, 5, 7]);
    /// ```
    #[inline]
    fn then<T, D>(self, next: T) -> Compose<Self, T, B>
    where
        Self: Sized,
        T: Transducer<B, D>,
    {
        assert_transducer::<_, A, D>(Compose::new(self, next))
    }
}
