//! Re-exports commonly used items from this crate.
//!
//! This module is intended to be imported with a wildcard, providing
//! convenient access to the most frequently used traits, constructors and drivers.
//!
//! # Example
//!
//! ```
//! use transduce::prelude::*;
//! ```

pub use crate::collections::Append;
pub use crate::iter::IteratorExt;
pub use crate::reduce::{reduce, transduce, try_reduce};
pub use crate::reducer::{Reducer, from_fn, try_from_fn};
pub use crate::transducer::{
    Transducer, compose, filter_mapping, filtering, flat_mapping, identity, inspecting, mapping,
    take_while,
};
