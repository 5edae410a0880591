//! [`Reducer`]s for comparing items.
//!
//! They correspond to [`Iterator`]'s comparison-related methods,
//! such as [`Iterator::max()`] and [`Iterator::min()`].
//!
//! This module corresponds to [`std::cmp`].
//!
//! [`Reducer`]: crate::Reducer

mod max;
mod min;
#[cfg(feature = "itertools")]
mod min_max;

pub use max::*;
pub use min::*;
#[cfg(feature = "itertools")]
pub use min_max::*;

#[inline]
fn max_assign<T: Ord>(max: &mut T, value: T) {
    // Don't use `>`. Among equal maximums, the last one wins, as in `Iterator::max()`.
    if value >= *max {
        *max = value
    }
}

#[inline]
fn min_assign<T: Ord>(min: &mut T, value: T) {
    // Don't use `<=`. Among equal minimums, the first one wins, as in `Iterator::min()`.
    if value < *min {
        *min = value
    }
}
