//! Lazy, short-circuiting sequence stages over [`Outcome`] elements.
//!
//! A [`Gatherer`] is a small state machine that consumes one upstream
//! element at a time and answers with a [`Step`]: emit a value downstream,
//! drop the element, or stop accepting upstream input altogether. Keeping
//! the contract this explicit makes the short-circuit logic testable in
//! isolation from whatever iteration engine hosts it.
//!
//! The stages in this module transform sequences of [`Outcome`] values in a
//! single forward pass, never buffering more than the current element:
//!
//! - [`until_err`] / [`until_ok`]: pass elements through until the first
//!   failure (or success), emit it, then stop consuming upstream input
//! - [`filter_ok`] / [`filter_err`]: drop non-matching elements of one
//!   variant, pass the other variant through unconditionally
//! - [`map_ok`] / [`map_err`]: transform one variant's payload
//! - [`flat_map_ok`] / [`flat_map_err`]: replace one variant with a whole
//!   new `Outcome`, emitted verbatim
//! - [`bimap`] / [`bi_flat_map`]: transform every element, whichever
//!   variant it is
//!
//! [`Gather`] hosts any stage on top of a plain [`Iterator`], and the
//! [`GatherExt`] extension trait makes that a one-word adapter.
//!
//! [`Outcome`]: crate::union::Outcome
//!
//! # Examples
//!
//! ```rust
//! use disjunct::gather::{until_err, GatherExt};
//! use disjunct::union::Outcome;
//!
//! let elements: Vec<Outcome<i32, &str>> = vec![
//!     Outcome::Ok(1),
//!     Outcome::Ok(2),
//!     Outcome::Err("x"),
//!     Outcome::Ok(3),
//! ];
//!
//! let gathered: Vec<Outcome<i32, &str>> =
//!     elements.into_iter().gather(until_err()).collect();
//!
//! // The trailing Ok(3) is never consumed from upstream.
//! assert_eq!(
//!     gathered,
//!     vec![Outcome::Ok(1), Outcome::Ok(2), Outcome::Err("x")],
//! );
//! ```

mod iter;
mod stage;
mod stages;

pub use iter::{Gather, GatherExt};
pub use stage::{Gatherer, Step};
pub use stages::{
    BiFlatMap, BiMap, FilterErr, FilterOk, FlatMapErr, FlatMapOk, MapErr, MapOk, UntilErr,
    UntilOk, bi_flat_map, bimap, filter_err, filter_ok, flat_map_err, flat_map_ok, map_err,
    map_ok, until_err, until_ok,
};
