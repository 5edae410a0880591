//! [`Reducer`]s mirroring consuming methods of [`Iterator`], and
//! the [`IteratorExt`] extension trait.
//!
//! [`Reducer`]: crate::Reducer

mod count;
mod iterator_ext;
mod last;

pub use count::*;
pub use iterator_ext::*;
pub use last::*;
