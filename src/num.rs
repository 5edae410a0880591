//! Numeric [`Reducer`]s.
//!
//! This module corresponds to [`std::num`].
//!
//! [`Reducer`]: crate::Reducer

mod product;
mod sum;

pub use product::*;
pub use sum::*;
