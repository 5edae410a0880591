use super::Transducer;

/// A [`Transducer`] that forwards every item untouched.
///
/// This `struct` is created by [`identity()`]. See its documentation for more.
#[derive(Debug, Clone, Copy, Default)]
pub struct Identity;

/// Creates a [`Transducer`] that forwards every item untouched.
///
/// Applying it returns the downstream reducer as is. It is the neutral element of
/// [`then()`](Transducer::then): chaining it on either side of a transducer changes nothing.
/// It is handy as the starting point of a chain built up conditionally.
///
/// # Examples
///
/// ```
/// use transduce::prelude::*;
///
/// assert_eq!(transduce(1..=3, identity(), Append, vec![]), [1, 2, 3]);
/// assert_eq!(
///     transduce(1..=3, identity().then(mapping(|x: i32| x * 2)), Append, vec![]),
///     [2, 4, 6],
/// );
/// ```
#[inline]
pub const fn identity() -> Identity {
    Identity
}

impl<A> Transducer<A, A> for Identity {
    type Reducer<R> = R;

    #[inline]
    fn apply<R>(self, reducer: R) -> R {
        reducer
    }
}
