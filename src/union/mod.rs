//! Two-variant union value types.
//!
//! Every type in this module is a disjoint union: it holds exactly one of
//! two typed payloads, never both and never neither. Values are immutable —
//! every combinator consumes the union and returns a new one — and equality
//! is structural (same variant, equal payloads).
//!
//! - [`Either`]: a union of two arbitrary types, right-biased by convention
//! - [`Outcome`]: a success/failure union with `Ok`/`Err` variants
//! - [`Maybe`]: an optional value whose `None` variant carries no payload
//! - [`Try`]: a failure-capturing union that stores errors and panics as
//!   ordinary data ([`Caught`]) instead of unwinding
//!
//! # Examples
//!
//! ## Branching with `Either`
//!
//! ```rust
//! use disjunct::union::Either;
//!
//! let input: Either<String, i32> = Either::Right(21);
//! let doubled = input.map_right(|number| number * 2);
//! assert_eq!(doubled, Either::Right(42));
//! ```
//!
//! ## Validating with `Outcome`
//!
//! ```rust
//! use disjunct::union::Outcome;
//!
//! let age: Outcome<u32, String> = Outcome::Ok(4);
//! let checked = age.filter(|value| *value >= 18, |value| format!("too young: {value}"));
//! assert_eq!(checked, Outcome::Err("too young: 4".to_string()));
//! ```
//!
//! ## Capturing failures with `Try`
//!
//! ```rust
//! use disjunct::union::Try;
//!
//! let halved = Try::of(|| "84".parse::<i32>()).map(|number| number / 2);
//! assert_eq!(halved.success(), Some(42));
//! ```

mod attempt;
mod either;
mod maybe;
mod outcome;

pub use attempt::{BoxError, Caught, Dispose, Interrupt, Try, using, using_pair};
pub use either::Either;
pub use maybe::Maybe;
pub use outcome::Outcome;
