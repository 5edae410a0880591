//! The [`Reducer`] trait and reducers built from closures.
//!
//! A reducer is the step function of a left fold: it receives the running
//! accumulator and one item, and returns the next accumulator.
//! It owns nothing across calls, so a single reducer may drive any number of
//! reductions, one after another or interleaved.
//!
//! # Early termination
//!
//! Besides [`step()`](Reducer::step), a reducer may override
//! [`try_step()`](Reducer::try_step) to return [`Break(acc)`] once further items
//! are meaningless. Drivers such as [`reduce()`](crate::reduce) stop feeding right
//! after a [`Break(acc)`] and return `acc` as the result.
//!
//! Adaptors created by a [`Transducer`](crate::Transducer) always forward the stop
//! signal of the reducer they wrap.
//!
//! # Implementing
//!
//! Most reducers only need [`step()`](Reducer::step).
//!
//! ```
//! use transduce::prelude::*;
//!
//! /// Keeps the longest word seen so far.
//! struct Longest;
//!
//! impl<'a> Reducer<&'a str, &'a str> for Longest {
//!     fn step(&self, acc: &'a str, word: &'a str) -> &'a str {
//!         if word.len() > acc.len() { word } else { acc }
//!     }
//! }
//!
//! let sentence = "the noble and the swordswoman";
//! assert_eq!(reduce(sentence.split_whitespace(), "", Longest), "swordswoman");
//! ```
//!
//! [`Break(acc)`]: std::ops::ControlFlow::Break

mod from_fn;
#[allow(clippy::module_inception)]
mod reducer;
mod try_from_fn;

pub use from_fn::*;
pub use reducer::*;
pub use try_from_fn::*;
