//! Composable reducing operations that fuse `map`, `filter` and friends into a single pass.
//!
//! If [`Iterator`] adaptors describe *how to produce* a sequence,
//! a [`Transducer`] describes *how to accumulate* one.
//!
//! # Motivation
//!
//! Suppose we are given the numbers `1..=10`, and we are asked to increment each of them,
//! keep the even results, and both collect and sum what is left.
//!
//! - Approach 1: Materialize every stage
//!
//! ```
//! let incremented: Vec<i32> = (1..=10).map(|x| x + 1).collect();
//! let evens: Vec<i32> = incremented.into_iter().filter(|x| x % 2 == 0).collect();
//! let sum: i32 = evens.iter().sum();
//!
//! assert_eq!(evens, [2, 4, 6, 8, 10]);
//! assert_eq!(sum, 30);
//! ```
//!
//! **Cons:** Every stage allocates a buffer that only lives until the next stage reads it.
//!
//! - Approach 2: [`Iterator`] chains
//!
//! ```
//! let evens: Vec<i32> = (1..=10).map(|x| x + 1).filter(|x| x % 2 == 0).collect();
//! let sum: i32 = (1..=10).map(|x| x + 1).filter(|x| x % 2 == 0).sum();
//!
//! assert_eq!(evens, [2, 4, 6, 8, 10]);
//! assert_eq!(sum, 30);
//! ```
//!
//! **Cons:** The pipeline is glued to the source. We have to spell it out again
//! for every sink, and it cannot be handed around on its own.
//!
//! This crate separates the pipeline from both the source and the sink:
//!
//! ```
//! use transduce::{prelude::*, num::Sum};
//!
//! let xf = mapping(|x: i32| x + 1).then(filtering(|x: &i32| x % 2 == 0));
//!
//! let evens = transduce(1..=10, xf.clone(), Append, Vec::new());
//! let sum = transduce(1..=10, xf, Sum, 0);
//!
//! assert_eq!(evens, [2, 4, 6, 8, 10]);
//! assert_eq!(sum, 30);
//! ```
//!
//! One pass over the source, no intermediate buffers, and the same `xf` serves both sinks.
//!
//! # Reducer
//!
//! A [`Reducer`] is a step function `(accumulator, item) -> accumulator`. Roughly:
//!
//! ```
//! use std::ops::ControlFlow;
//!
//! pub trait Reducer<C, T> {
//!     fn step(&self, acc: C, item: T) -> C;
//!     fn try_step(&self, acc: C, item: T) -> ControlFlow<C, C> {
//!         ControlFlow::Continue(self.step(acc, item))
//!     }
//! }
//! ```
//!
//! It takes `&self`, so it keeps no state between calls and can be reused for as
//! many reductions as we like. The accumulator is owned by the caller and threaded
//! through every call. [`try_step`](Reducer::try_step) lets a reducer ask the
//! driver to stop early (see [`take_while()`]).
//!
//! # Transducer
//!
//! A [`Transducer<A, B>`] turns a reducer over `B` into a reducer over `A`,
//! whatever the accumulator type is. [`mapping()`] and [`filtering()`] are the
//! canonical ones, and [`then()`](Transducer::then) chains them so that the first
//! one runs nearest to the source:
//!
//! ```
//! use transduce::prelude::*;
//!
//! let shout = mapping(|s: &str| s.to_uppercase())
//!     .then(filtering(|s: &String| s.len() > 2))
//!     .apply(Append);
//!
//! assert_eq!(reduce(["hi", "hey", "hello"], Vec::new(), &shout), ["HEY", "HELLO"]);
//! assert_eq!(reduce(["yo"], Vec::new(), &shout), Vec::<String>::new());
//! ```
//!
//! Element types of adjacent stages are checked at compile time:
//!
//! ```compile_fail
//! use transduce::prelude::*;
//!
//! // `filtering` expects `&i32`, but the mapping stage produces `String`s.
//! let xf = mapping(|x: i32| x.to_string()).then(filtering(|x: &i32| *x > 0));
//! ```

#![cfg_attr(docsrs, feature(doc_cfg))]
#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(not(feature = "std"))]
extern crate core as std;

pub mod cmp;
mod collections;
pub mod iter;
pub mod num;
pub mod prelude;
mod reduce;
pub mod reducer;
pub mod transducer;

#[cfg(all(test, feature = "std"))]
mod test_utils;

pub use collections::*;
pub use reduce::*;
pub use reducer::{Reducer, from_fn, try_from_fn};
pub use transducer::{
    Transducer, compose, filter_mapping, filtering, flat_mapping, identity, inspecting, mapping,
    take_while,
};

#[inline(always)]
const fn assert_transducer<X, A, B>(transducer: X) -> X
where
    X: Transducer<A, B>,
{
    transducer
}
