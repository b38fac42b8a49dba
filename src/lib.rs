//! # disjunct
//!
//! Two-variant union value types with functional combinators and
//! short-circuiting sequence adapters.
//!
//! ## Overview
//!
//! This library provides algebraic "disjoint union" value types — a value
//! that holds exactly one of two typed payloads — together with the full
//! combinator vocabulary for working with them without unwrapping:
//!
//! - **[`Either<L, R>`]**: a right-biased union of two arbitrary types
//! - **[`Outcome<T, E>`]**: a success/failure union with `Ok`/`Err` variants
//! - **[`Maybe<T>`]**: an optional value with a payload-free `None`
//! - **[`Try<T>`]**: a failure-capturing union that traps errors and panics
//!   as ordinary data
//!
//! On top of the unions sits a lazy sequence layer: stateful, single-pass
//! [`Gatherer`](gather::Gatherer) stages (short-circuit on the first error,
//! per-variant map/filter, and friends) and the [`Outcomes`](seq::Outcomes)
//! facade over any iterator of [`Outcome`] values.
//!
//! [`Either<L, R>`]: union::Either
//! [`Outcome<T, E>`]: union::Outcome
//! [`Maybe<T>`]: union::Maybe
//! [`Try<T>`]: union::Try
//! [`Outcome`]: union::Outcome
//!
//! ## Feature Flags
//!
//! - `union`: the four union types and their combinators
//! - `gather`: lazy short-circuiting sequence stages
//! - `seq`: the `Outcomes` sequence facade
//! - `full`: enable all features
//!
//! ## Example
//!
//! ```rust
//! use disjunct::prelude::*;
//!
//! let parsed: Vec<Outcome<i32, String>> = vec!["1", "2", "x", "3"]
//!     .into_iter()
//!     .map(|text| match text.parse::<i32>() {
//!         Ok(number) => Outcome::Ok(number),
//!         Err(_) => Outcome::Err(format!("not a number: {text}")),
//!     })
//!     .collect();
//!
//! // Stop after the first failure; "3" is never examined.
//! let gathered: Vec<Outcome<i32, String>> =
//!     parsed.into_iter().outcomes().until_err().collect();
//!
//! assert_eq!(gathered.len(), 3);
//! assert!(gathered[2].is_err());
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
// Note: Disabling redundant_closure_for_method_calls due to clippy 0.1.92 panic bug
#![allow(clippy::redundant_closure_for_method_calls)]

/// Prelude module for convenient imports.
///
/// Re-exports commonly used types and traits.
///
/// # Usage
///
/// ```rust
/// use disjunct::prelude::*;
/// ```
pub mod prelude {

    #[cfg(feature = "union")]
    pub use crate::union::*;

    #[cfg(feature = "gather")]
    pub use crate::gather::*;

    #[cfg(feature = "seq")]
    pub use crate::seq::*;
}

#[cfg(feature = "union")]
pub mod union;

#[cfg(feature = "gather")]
pub mod gather;

#[cfg(feature = "seq")]
pub mod seq;
