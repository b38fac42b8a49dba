//! A sequence facade over iterators of [`Outcome`] values.
//!
//! [`Outcomes`] wraps any iterator whose items are [`Outcome`]s and exposes
//! the gatherer stages as one-word adapters plus variant-aware terminal
//! operations (`find_err`, `any_ok`, `for_each_ok`, ...). Everything else —
//! `take`, `skip`, `collect`, `fold`, and the rest of the engine's
//! vocabulary — passes straight through, because the facade is itself an
//! [`Iterator`].
//!
//! Evaluation is lazy, single-pass, and in encounter order; the
//! short-circuiting adapters are meaningful only under those semantics.
//!
//! [`Outcome`]: crate::union::Outcome
//!
//! # Examples
//!
//! ```rust
//! use disjunct::seq::IntoOutcomes;
//! use disjunct::union::{Maybe, Outcome};
//!
//! let elements: Vec<Outcome<i32, String>> = vec![
//!     Outcome::Ok(1),
//!     Outcome::Err("bad".to_string()),
//!     Outcome::Ok(3),
//! ];
//!
//! let first_failure = elements.into_iter().outcomes().find_err();
//! assert_eq!(first_failure, Maybe::Some("bad".to_string()));
//! ```

mod outcomes;

pub use outcomes::{IntoOutcomes, Outcomes};
