use std::ops::ControlFlow;

/// A reducing operation: folds one item of type `T` into an accumulator of type `C`.
///
/// The only required method is [`step()`](Reducer::step).
/// The accumulator is passed by value and handed back, so both owned accumulators
/// (a [`Vec`], a running total) and borrowed ones (a `&mut Vec<T>`) work alike.
/// In either case, the value returned is the *same* accumulator, moved through,
/// never copied.
///
/// This trait is dyn-compatible. The bulk method [`step_many()`](Reducer::step_many)
/// is only available on sized reducers.
///
/// # Examples
///
/// ```
/// use transduce::prelude::*;
///
/// let digits = from_fn(|acc: u32, digit: u32| acc * 10 + digit);
///
/// assert_eq!(digits.step(12, 3), 123);
/// assert_eq!(reduce([4, 0, 2], 0, &digits), 402);
///
/// // Stateless, thus reusable.
/// assert_eq!(reduce([7], 0, &digits), 7);
/// ```
///
/// [`Vec`]: std::vec::Vec
pub trait Reducer<C, T> {
    /// Folds `item` into `acc` and returns the resulting accumulator.
    fn step(&self, acc: C, item: T) -> C;

    /// Folds `item` into `acc`, and signals whether more items are still wanted.
    ///
    /// Returns [`Continue(acc)`] if the reducer can take more items, or [`Break(acc)`]
    /// if feeding it further is meaningless. In both cases, `acc` already reflects `item`
    /// (or the decision not to accumulate it).
    ///
    /// The default implementation calls [`step()`](Reducer::step) and always continues.
    ///
    /// # Examples
    ///
    /// ```
    /// use std::ops::ControlFlow;
    /// use transduce::prelude::*;
    ///
    /// let reducer = take_while(|x: &i32| *x < 3).apply(Append);
    ///
    /// assert_eq!(reducer.try_step(vec![], 1), ControlFlow::Continue(vec![1]));
    /// assert_eq!(reducer.try_step(vec![1], 5), ControlFlow::Break(vec![1]));
    /// ```
    ///
    /// [`Continue(acc)`]: ControlFlow::Continue
    /// [`Break(acc)`]: ControlFlow::Break
    #[inline]
    fn try_step(&self, acc: C, item: T) -> ControlFlow<C, C> {
        ControlFlow::Continue(self.step(acc, item))
    }

    /// Folds items from an iterator into `acc` until either the reducer stops
    /// or the iterator is exhausted.
    ///
    /// This is equivalent to calling [`try_step()`](Reducer::try_step) on every item
    /// until a [`Break`](ControlFlow::Break), which is the default implementation.
    /// It can be overridden for optimization. For instance, adaptors push their own
    /// stage into the iterator so that the innermost reducer sees one plain
    /// iterator and may consume it however it likes.
    ///
    /// # Examples
    ///
    /// ```
    /// use std::ops::ControlFlow;
    /// use transduce::prelude::*;
    ///
    /// assert_eq!(
    ///     Append.step_many(vec![1, 2], [3, 4, 5]),
    ///     ControlFlow::Continue(vec![1, 2, 3, 4, 5]),
    /// );
    /// ```
    fn step_many(&self, acc: C, items: impl IntoIterator<Item = T>) -> ControlFlow<C, C>
    where
        Self: Sized,
    {
        // `try_fold` rather than a `for` loop, since some iterators (`chain`, `flat_map`, ...)
        // fold faster than they `next()`.
        items
            .into_iter()
            .try_fold(acc, |acc, item| self.try_step(acc, item))
    }
}

impl<C, T, R> Reducer<C, T> for &R
where
    R: Reducer<C, T>,
{
    #[inline]
    fn step(&self, acc: C, item: T) -> C {
        R::step(self, acc, item)
    }

    #[inline]
    fn try_step(&self, acc: C, item: T) -> ControlFlow<C, C> {
        R::try_step(self, acc, item)
    }

    #[inline]
    fn step_many(&self, acc: C, items: impl IntoIterator<Item = T>) -> ControlFlow<C, C> {
        // `R` can't be `?Sized` here, since this method requires `Sized`.
        // Trait objects are covered by `dyn_impl!` below.
        R::step_many(self, acc, items)
    }
}

macro_rules! dyn_impl {
    ($($traits:ident)*) => {
        impl<'a, C, T> Reducer<C, T> for &(dyn Reducer<C, T> $(+ $traits)* + 'a) {
            #[inline]
            fn step(&self, acc: C, item: T) -> C {
                <dyn Reducer<C, T>>::step(*self, acc, item)
            }

            #[inline]
            fn try_step(&self, acc: C, item: T) -> ControlFlow<C, C> {
                <dyn Reducer<C, T>>::try_step(*self, acc, item)
            }

            // The default `step_many()` is sufficient.
        }
    };
}

dyn_impl!();
dyn_impl!(Send);
dyn_impl!(Sync);
dyn_impl!(Send Sync);

fn _dyn_compatible<C, T>(_: &dyn Reducer<C, T>) {}
