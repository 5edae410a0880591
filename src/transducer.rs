//! The [`Transducer`] trait, its composition, and the transducers this crate provides.
//!
//! A transducer does not accumulate anything by itself. It is applied to a
//! downstream [`Reducer`](crate::Reducer) and produces a new reducer that does
//! its part of the work (transforming, skipping, expanding, stopping) before
//! handing items over. The accumulator type never shows up in a transducer, so the
//! same transducer can be attached to any downstream reducer.
//!
//! | Constructor         | Per item `x`                                              |
//! |---------------------|-----------------------------------------------------------|
//! | [`mapping(f)`]      | forwards `f(x)`                                           |
//! | [`filtering(p)`]    | forwards `x` if `p(&x)`, else passes the accumulator along |
//! | [`filter_mapping(f)`] | forwards `y` if `f(x)` is `Some(y)`                     |
//! | [`flat_mapping(f)`] | forwards every item of `f(x)`, in order                   |
//! | [`inspecting(f)`]   | calls `f(&x)`, then forwards `x`                          |
//! | [`take_while(p)`]   | forwards `x` if `p(&x)`, else stops the reduction         |
//! | [`identity()`]      | forwards `x`                                              |
//!
//! # Composition
//!
//! [`then()`](Transducer::then) chains two transducers. The receiver runs first,
//! nearest to the source, so a chain reads in the same order as an [`Iterator`] chain:
//!
//! ```
//! use transduce::prelude::*;
//!
//! let via_iter: Vec<_> = (1..=10)
//!     .map(|x| x * 3)
//!     .filter(|x| x % 2 == 0)
//!     .take_while(|x| *x < 25)
//!     .collect();
//!
//! let via_transducer = transduce(
//!     1..=10,
//!     mapping(|x: i32| x * 3)
//!         .then(filtering(|x: &i32| x % 2 == 0))
//!         .then(take_while(|x: &i32| *x < 25)),
//!     Append,
//!     Vec::new(),
//! );
//!
//! assert_eq!(via_iter, via_transducer);
//! ```
//!
//! Composition is associative: how a chain is parenthesized never changes the result.
//!
//! [`mapping(f)`]: mapping
//! [`filtering(p)`]: filtering
//! [`filter_mapping(f)`]: filter_mapping
//! [`flat_mapping(f)`]: flat_mapping
//! [`inspecting(f)`]: inspecting
//! [`take_while(p)`]: take_while
//! [`identity()`]: identity

mod compose;
mod filter_mapping;
mod filtering;
mod flat_mapping;
mod identity;
mod inspecting;
mod mapping;
mod take_while;
#[allow(clippy::module_inception)]
mod transducer;

pub use compose::*;
pub use filter_mapping::*;
pub use filtering::*;
pub use flat_mapping::*;
pub use identity::*;
pub use inspecting::*;
pub use mapping::*;
pub use take_while::*;
pub use transducer::*;
