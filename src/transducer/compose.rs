use std::{fmt::Debug, marker::PhantomData};

use crate::assert_transducer;

use super::Transducer;

/// A [`Transducer`] that runs two transducers one after another.
///
/// `B` is the element type flowing from the first transducer into the second.
///
/// This `struct` is created by [`Transducer::then()`] or [`compose()`].
/// See their documentation for more.
pub struct Compose<T1, T2, B> {
    first: T1,
    second: T2,
    // `B` only links the two stages. Without it, `impl Transducer for Compose`
    // would leave the middle element type unconstrained.
    _marker: PhantomData<fn(B) -> B>,
}

impl<T1, T2, B> Compose<T1, T2, B> {
    #[inline]
    pub(in crate::transducer) const fn new(first: T1, second: T2) -> Self {
        Self {
            first,
            second,
            _marker: PhantomData,
        }
    }
}

/// Chains two transducers: `first` runs nearest to the source, then `second`.
///
/// This is the free-function form of [`Transducer::then()`].
///
/// # Examples
///
/// ```
/// use transduce::{prelude::*, num::Sum};
///
/// let xf = compose(mapping(|x: i32| x + 1), filtering(|x: &i32| x % 2 == 0));
///
/// assert_eq!(transduce(1..=10, xf, Sum, 0), 30);
/// ```
#[inline]
pub fn compose<A, B, D, T1, T2>(first: T1, second: T2) -> Compose<T1, T2, B>
where
    T1: Transducer<A, B>,
    T2: Transducer<B, D>,
{
    assert_transducer::<_, A, D>(Compose::new(first, second))
}

impl<A, B, D, T1, T2> Transducer<A, D> for Compose<T1, T2, B>
where
    T1: Transducer<A, B>,
    T2: Transducer<B, D>,
{
    type Reducer<R> = T1::Reducer<T2::Reducer<R>>;

    #[inline]
    fn apply<R>(self, reducer: R) -> Self::Reducer<R> {
        // The stage nearest to the source must be the outermost wrapper.
        self.first.apply(self.second.apply(reducer))
    }
}

impl<T1: Clone, T2: Clone, B> Clone for Compose<T1, T2, B> {
    fn clone(&self) -> Self {
        Self::new(self.first.clone(), self.second.clone())
    }

    fn clone_from(&mut self, source: &Self) {
        self.first.clone_from(&source.first);
        self.second.clone_from(&source.second);
    }
}

impl<T1: Debug, T2: Debug, B> Debug for Compose<T1, T2, B> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Compose")
            .field("first", &self.first)
            .field("second", &self.second)
            .finish()
    }
}


#[cfg(all(test, feature = "std"))]
mod tests {
    use std::cell::{Cell, RefCell};

    use crate::{
        num::Sum,
        prelude::*,
        test_utils::{Tally, counted},
    };

    #[test]
    fn first_stage_sees_items_first() {
        let trace = RefCell::new(Vec::new());

        let out = transduce(
            [1, 2, 3],
            inspecting(|x: &i32| trace.borrow_mut().push(format!("first {x}")))
                .then(filtering(|x: &i32| *x != 2))
                .then(inspecting(|x: &i32| {
                    trace.borrow_mut().push(format!("second {x}"))
                })),
            Append,
            Vec::new(),
        );

        assert_eq!(out, [1, 3]);
        assert_eq!(
            trace.into_inner(),
            ["first 1", "second 1", "first 2", "first 3", "second 3"]
        );
    }

    #[test]
    fn grouping_does_not_matter() {
        let t1 = || mapping(|x: i32| x.wrapping_mul(7));
        let t2 = || filtering(|x: &i32| x % 3 != 0);
        let t3 = || flat_mapping(|x: i32| [x, -x]);

        let left = (t1().then(t2())).then(t3());
        let right = t1().then(t2().then(t3()));

        for len in [0, 1, 5, 40] {
            let source = || (0..len).map(|x| x * 11 - 50);
            assert_eq!(
                transduce(source(), left.clone(), Append, Vec::new()),
                transduce(source(), right.clone(), Append, Vec::new()),
            );
            assert_eq!(
                transduce(source(), left.clone(), Sum, 0),
                transduce(source(), right.clone(), Sum, 0),
            );
        }
    }

    #[test]
    fn one_visit_per_source_item_however_long_the_chain() {
        let visits = Cell::new(0);
        let calls = Cell::new(0);

        let xf = mapping(|x: i32| x + 1)
            .then(filtering(|x: &i32| x % 2 == 0))
            .then(mapping(|x: i32| x * 10))
            .then(filtering(|x: &i32| *x > 40))
            .then(identity());

        let out = transduce(
            counted(1..=10, &visits),
            xf,
            Tally::new(&calls, Append),
            Vec::new(),
        );

        assert_eq!(out, [60, 80, 100]);
        assert_eq!(visits.get(), 10);
        // Only the survivors of every filtering stage reach the terminal reducer.
        assert_eq!(calls.get(), out.len());
    }

    #[test]
    fn composed_reducer_is_reusable() {
        let reducer = mapping(|x: i32| x + 1)
            .then(filtering(|x: &i32| x % 2 == 0))
            .apply(Sum);

        assert_eq!(reduce(1..=10, 0, &reducer), 30);
        assert_eq!(reduce(1..=10, 0, &reducer), 30);
        assert_eq!(reduce(1..=3, 100, &reducer), 106);
    }

    #[test]
    fn empty_source_returns_initial() {
        let xf = mapping(|x: i32| x + 1).then(filtering(|x: &i32| x % 2 == 0));

        assert_eq!(
            transduce(std::iter::empty(), xf.clone(), Append, vec![7, 8]),
            [7, 8]
        );
        assert_eq!(transduce(std::iter::empty(), xf, Sum, 42), 42);
    }
}
