//! Outcome type - a success/failure union.
//!
//! This module provides the `Outcome<T, E>` type, a disjoint union of a
//! success payload (`Ok`) and a failure payload (`Err`). It mirrors the
//! shape of `std::result::Result` while carrying the full combinator set of
//! this crate's union types: `fold`, `bimap`, `filter`, `recover`,
//! `forfeit`, `swap`, and the short-circuiting `and`/`or` family.
//!
//! The name avoids shadowing the prelude's `Result`; conversions in both
//! directions are provided and cost nothing.
//!
//! # Examples
//!
//! ```rust
//! use disjunct::union::Outcome;
//!
//! fn parse(text: &str) -> Outcome<i32, String> {
//!     match text.parse() {
//!         Ok(number) => Outcome::Ok(number),
//!         Err(_) => Outcome::Err(format!("not a number: {text}")),
//!     }
//! }
//!
//! let checked = parse("42")
//!     .filter(|n| *n > 10, |n| format!("too small: {n}"))
//!     .map(|n| n * 2);
//! assert_eq!(checked, Outcome::Ok(84));
//! ```

use std::fmt;

use super::Either;

/// A success/failure union with `Ok` and `Err` variants.
///
/// `Outcome<T, E>` is success-biased: combinators without an `_err` suffix
/// act on the `Ok` payload and pass `Err` values through untouched.
///
/// The union holds exactly one payload. Combinators consume the value and
/// return a new one; nothing is ever mutated in place.
///
/// # Type Parameters
///
/// * `T` - The type of the success value
/// * `E` - The type of the failure value
///
/// # Examples
///
/// ```rust
/// use disjunct::union::Outcome;
///
/// let success: Outcome<i32, String> = Outcome::Ok(42);
/// let failure: Outcome<i32, String> = Outcome::Err("error".to_string());
///
/// assert_eq!(success.map(|x| x * 2), Outcome::Ok(84));
/// assert_eq!(failure.map(|x| x * 2), Outcome::Err("error".to_string()));
/// ```
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Outcome<T, E> {
    /// The success variant.
    Ok(T),
    /// The failure variant.
    Err(E),
}

impl<T, E> Outcome<T, E> {
    // =========================================================================
    // Type Checking
    // =========================================================================

    /// Returns `true` if this is an `Ok` value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use disjunct::union::Outcome;
    ///
    /// let success: Outcome<i32, String> = Outcome::Ok(42);
    /// assert!(success.is_ok());
    ///
    /// let failure: Outcome<i32, String> = Outcome::Err("error".to_string());
    /// assert!(!failure.is_ok());
    /// ```
    #[inline]
    pub const fn is_ok(&self) -> bool {
        matches!(self, Self::Ok(_))
    }

    /// Returns `true` if this is an `Err` value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use disjunct::union::Outcome;
    ///
    /// let failure: Outcome<i32, String> = Outcome::Err("error".to_string());
    /// assert!(failure.is_err());
    ///
    /// let success: Outcome<i32, String> = Outcome::Ok(42);
    /// assert!(!success.is_err());
    /// ```
    #[inline]
    pub const fn is_err(&self) -> bool {
        matches!(self, Self::Err(_))
    }

    // =========================================================================
    // Value Extraction (Consuming)
    // =========================================================================

    /// Converts the `Outcome` into an `Option<T>`, consuming the outcome.
    ///
    /// Returns `Some(t)` if this is `Ok(t)`, otherwise `None`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use disjunct::union::Outcome;
    ///
    /// let success: Outcome<i32, String> = Outcome::Ok(42);
    /// assert_eq!(success.ok(), Some(42));
    ///
    /// let failure: Outcome<i32, String> = Outcome::Err("error".to_string());
    /// assert_eq!(failure.ok(), None);
    /// ```
    #[inline]
    pub fn ok(self) -> Option<T> {
        match self {
            Self::Ok(value) => Some(value),
            Self::Err(_) => None,
        }
    }

    /// Converts the `Outcome` into an `Option<E>`, consuming the outcome.
    ///
    /// Returns `Some(e)` if this is `Err(e)`, otherwise `None`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use disjunct::union::Outcome;
    ///
    /// let failure: Outcome<i32, String> = Outcome::Err("error".to_string());
    /// assert_eq!(failure.err(), Some("error".to_string()));
    ///
    /// let success: Outcome<i32, String> = Outcome::Ok(42);
    /// assert_eq!(success.err(), None);
    /// ```
    #[inline]
    pub fn err(self) -> Option<E> {
        match self {
            Self::Ok(_) => None,
            Self::Err(value) => Some(value),
        }
    }

    // =========================================================================
    // Reference Extraction (Non-consuming)
    // =========================================================================

    /// Returns a reference to the success value if present.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use disjunct::union::Outcome;
    ///
    /// let success: Outcome<i32, String> = Outcome::Ok(42);
    /// assert_eq!(success.ok_ref(), Some(&42));
    /// ```
    #[inline]
    pub const fn ok_ref(&self) -> Option<&T> {
        match self {
            Self::Ok(value) => Some(value),
            Self::Err(_) => None,
        }
    }

    /// Returns a reference to the failure value if present.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use disjunct::union::Outcome;
    ///
    /// let failure: Outcome<i32, String> = Outcome::Err("error".to_string());
    /// assert_eq!(failure.err_ref(), Some(&"error".to_string()));
    /// ```
    #[inline]
    pub const fn err_ref(&self) -> Option<&E> {
        match self {
            Self::Ok(_) => None,
            Self::Err(value) => Some(value),
        }
    }

    // =========================================================================
    // Mapping Operations
    // =========================================================================

    /// Applies a function to the success value if present.
    ///
    /// If this is `Ok(t)`, returns `Ok(function(t))`.
    /// If this is `Err(e)`, returns `Err(e)` unchanged.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use disjunct::union::Outcome;
    ///
    /// let success: Outcome<i32, String> = Outcome::Ok(21);
    /// assert_eq!(success.map(|x| x * 2), Outcome::Ok(42));
    ///
    /// let failure: Outcome<i32, String> = Outcome::Err("error".to_string());
    /// assert_eq!(failure.map(|x| x * 2), Outcome::Err("error".to_string()));
    /// ```
    #[inline]
    pub fn map<U, F>(self, function: F) -> Outcome<U, E>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Self::Ok(value) => Outcome::Ok(function(value)),
            Self::Err(value) => Outcome::Err(value),
        }
    }

    /// Applies a function to the failure value if present.
    ///
    /// If this is `Err(e)`, returns `Err(function(e))`.
    /// If this is `Ok(t)`, returns `Ok(t)` unchanged.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use disjunct::union::Outcome;
    ///
    /// let failure: Outcome<i32, String> = Outcome::Err("error".to_string());
    /// assert_eq!(failure.map_err(|e| e.len()), Outcome::Err(5));
    ///
    /// let success: Outcome<i32, String> = Outcome::Ok(42);
    /// assert_eq!(success.map_err(|e: String| e.len()), Outcome::Ok(42));
    /// ```
    #[inline]
    pub fn map_err<F2, F>(self, function: F) -> Outcome<T, F2>
    where
        F: FnOnce(E) -> F2,
    {
        match self {
            Self::Ok(value) => Outcome::Ok(value),
            Self::Err(value) => Outcome::Err(function(value)),
        }
    }

    /// Applies one of two functions depending on the variant.
    ///
    /// Exactly one of the functions is invoked; the result is wrapped back
    /// into the variant it came from.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use disjunct::union::Outcome;
    ///
    /// let success: Outcome<i32, String> = Outcome::Ok(21);
    /// let result = success.bimap(|n| n * 2, |e: String| e.len());
    /// assert_eq!(result, Outcome::Ok(42));
    ///
    /// let failure: Outcome<i32, String> = Outcome::Err("error".to_string());
    /// let result = failure.bimap(|n: i32| n * 2, |e| e.len());
    /// assert_eq!(result, Outcome::Err(5));
    /// ```
    #[inline]
    pub fn bimap<U, F2, F, G>(self, ok_function: F, err_function: G) -> Outcome<U, F2>
    where
        F: FnOnce(T) -> U,
        G: FnOnce(E) -> F2,
    {
        match self {
            Self::Ok(value) => Outcome::Ok(ok_function(value)),
            Self::Err(value) => Outcome::Err(err_function(value)),
        }
    }

    // =========================================================================
    // Monadic Operations
    // =========================================================================

    /// Applies an outcome-returning function to the success value if present.
    ///
    /// This is the success-biased monadic bind: the function's result is
    /// returned directly, without re-wrapping. An `Err` passes through
    /// unchanged and the function is not invoked.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use disjunct::union::Outcome;
    ///
    /// fn half(n: i32) -> Outcome<i32, String> {
    ///     if n % 2 == 0 {
    ///         Outcome::Ok(n / 2)
    ///     } else {
    ///         Outcome::Err(format!("{n} is odd"))
    ///     }
    /// }
    ///
    /// let even: Outcome<i32, String> = Outcome::Ok(84);
    /// assert_eq!(even.flat_map(half), Outcome::Ok(42));
    ///
    /// let odd: Outcome<i32, String> = Outcome::Ok(7);
    /// assert_eq!(odd.flat_map(half), Outcome::Err("7 is odd".to_string()));
    /// ```
    #[inline]
    pub fn flat_map<U, F>(self, function: F) -> Outcome<U, E>
    where
        F: FnOnce(T) -> Outcome<U, E>,
    {
        match self {
            Self::Ok(value) => function(value),
            Self::Err(value) => Outcome::Err(value),
        }
    }

    /// Applies an outcome-returning function to the failure value if present.
    ///
    /// The failure-sided counterpart of [`flat_map`](Self::flat_map), usable
    /// as a lazy, error-aware `or`. An `Ok` passes through unchanged and the
    /// function is not invoked.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use disjunct::union::Outcome;
    ///
    /// let failure: Outcome<i32, String> = Outcome::Err("7".to_string());
    /// let retried = failure.flat_map_err(|text| match text.parse::<i32>() {
    ///     Ok(number) => Outcome::Ok(number),
    ///     Err(_) => Outcome::Err(text),
    /// });
    /// assert_eq!(retried, Outcome::Ok(7));
    /// ```
    #[inline]
    pub fn flat_map_err<F2, F>(self, function: F) -> Outcome<T, F2>
    where
        F: FnOnce(E) -> Outcome<T, F2>,
    {
        match self {
            Self::Ok(value) => Outcome::Ok(value),
            Self::Err(value) => function(value),
        }
    }

    /// Applies one of two outcome-returning functions depending on the variant.
    ///
    /// Like [`bimap`](Self::bimap), but the invoked function's result is
    /// returned directly rather than re-wrapped.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use disjunct::union::Outcome;
    ///
    /// let failure: Outcome<i32, String> = Outcome::Err("recoverable".to_string());
    /// let result: Outcome<i32, usize> = failure.bi_flat_map(
    ///     |n| Outcome::Ok(n * 2),
    ///     |e| if e == "recoverable" { Outcome::Ok(0) } else { Outcome::Err(e.len()) },
    /// );
    /// assert_eq!(result, Outcome::Ok(0));
    /// ```
    #[inline]
    pub fn bi_flat_map<U, F2, F, G>(self, ok_function: F, err_function: G) -> Outcome<U, F2>
    where
        F: FnOnce(T) -> Outcome<U, F2>,
        G: FnOnce(E) -> Outcome<U, F2>,
    {
        match self {
            Self::Ok(value) => ok_function(value),
            Self::Err(value) => err_function(value),
        }
    }

    // =========================================================================
    // Fold Operation
    // =========================================================================

    /// Eliminates the Outcome by applying one of two functions.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use disjunct::union::Outcome;
    ///
    /// let success: Outcome<i32, String> = Outcome::Ok(42);
    /// assert_eq!(success.fold(|n| n.to_string(), |e| e), "42");
    ///
    /// let failure: Outcome<i32, String> = Outcome::Err("error".to_string());
    /// assert_eq!(failure.fold(|n: i32| n.to_string(), |e| e), "error");
    /// ```
    #[inline]
    pub fn fold<U, F, G>(self, ok_function: F, err_function: G) -> U
    where
        F: FnOnce(T) -> U,
        G: FnOnce(E) -> U,
    {
        match self {
            Self::Ok(value) => ok_function(value),
            Self::Err(value) => err_function(value),
        }
    }

    // =========================================================================
    // Filter Operation
    // =========================================================================

    /// Tests the success value against a predicate, demoting it to `Err` on failure.
    ///
    /// If this is `Ok(t)` and `predicate(&t)` fails, returns
    /// `Err(else_mapper(t))`. A passing `Ok` is returned unchanged, and an
    /// `Err` passes through without invoking either function.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use disjunct::union::Outcome;
    ///
    /// let small: Outcome<i32, String> = Outcome::Ok(4);
    /// let filtered = small.filter(|n| *n > 10, |n| format!("too small: {n}"));
    /// assert_eq!(filtered, Outcome::Err("too small: 4".to_string()));
    ///
    /// let large: Outcome<i32, String> = Outcome::Ok(40);
    /// let filtered = large.filter(|n| *n > 10, |n| format!("too small: {n}"));
    /// assert_eq!(filtered, Outcome::Ok(40));
    /// ```
    #[inline]
    pub fn filter<P, F>(self, predicate: P, else_mapper: F) -> Self
    where
        P: FnOnce(&T) -> bool,
        F: FnOnce(T) -> E,
    {
        match self {
            Self::Ok(value) => {
                if predicate(&value) {
                    Self::Ok(value)
                } else {
                    Self::Err(else_mapper(value))
                }
            }
            Self::Err(value) => Self::Err(value),
        }
    }

    // =========================================================================
    // Asymmetric Folds
    // =========================================================================

    /// Returns the success value, synthesizing one from the failure via `function`.
    ///
    /// The function is invoked only when this is an `Err`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use disjunct::union::Outcome;
    ///
    /// let success: Outcome<i32, String> = Outcome::Ok(42);
    /// assert_eq!(success.recover(|e| e.len() as i32), 42);
    ///
    /// let failure: Outcome<i32, String> = Outcome::Err("boom".to_string());
    /// assert_eq!(failure.recover(|e| e.len() as i32), 4);
    /// ```
    #[inline]
    pub fn recover<F>(self, function: F) -> T
    where
        F: FnOnce(E) -> T,
    {
        match self {
            Self::Ok(value) => value,
            Self::Err(value) => function(value),
        }
    }

    /// Returns the failure value, synthesizing one from the success via `function`.
    ///
    /// The mirror of [`recover`](Self::recover): the function is invoked only
    /// when this is an `Ok`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use disjunct::union::Outcome;
    ///
    /// let failure: Outcome<i32, String> = Outcome::Err("kept".to_string());
    /// assert_eq!(failure.forfeit(|n| n.to_string()), "kept");
    ///
    /// let success: Outcome<i32, String> = Outcome::Ok(42);
    /// assert_eq!(success.forfeit(|n| n.to_string()), "42");
    /// ```
    #[inline]
    pub fn forfeit<F>(self, function: F) -> E
    where
        F: FnOnce(T) -> E,
    {
        match self {
            Self::Ok(value) => function(value),
            Self::Err(value) => value,
        }
    }

    // =========================================================================
    // Inspection
    // =========================================================================

    /// Invokes a consumer on the success value, returning the union unchanged.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use disjunct::union::Outcome;
    ///
    /// let mut seen = None;
    /// let success: Outcome<i32, String> = Outcome::Ok(42);
    /// let unchanged = success.inspect(|n| seen = Some(*n));
    /// assert_eq!(seen, Some(42));
    /// assert_eq!(unchanged, Outcome::Ok(42));
    /// ```
    #[inline]
    pub fn inspect<F>(self, function: F) -> Self
    where
        F: FnOnce(&T),
    {
        if let Self::Ok(value) = &self {
            function(value);
        }
        self
    }

    /// Invokes a consumer on the failure value, returning the union unchanged.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use disjunct::union::Outcome;
    ///
    /// let mut seen = None;
    /// let failure: Outcome<i32, String> = Outcome::Err("boom".to_string());
    /// let unchanged = failure.inspect_err(|e| seen = Some(e.len()));
    /// assert_eq!(seen, Some(4));
    /// assert_eq!(unchanged, Outcome::Err("boom".to_string()));
    /// ```
    #[inline]
    pub fn inspect_err<F>(self, function: F) -> Self
    where
        F: FnOnce(&E),
    {
        if let Self::Err(value) = &self {
            function(value);
        }
        self
    }

    /// Invokes one of two consumers depending on the variant, returning the
    /// union unchanged.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use disjunct::union::Outcome;
    /// use std::cell::RefCell;
    ///
    /// let log = RefCell::new(Vec::new());
    /// let success: Outcome<i32, String> = Outcome::Ok(42);
    /// success.bi_inspect(
    ///     |n| log.borrow_mut().push(format!("ok: {n}")),
    ///     |e| log.borrow_mut().push(format!("err: {e}")),
    /// );
    /// assert_eq!(log.into_inner(), vec!["ok: 42".to_string()]);
    /// ```
    #[inline]
    pub fn bi_inspect<F, G>(self, ok_function: F, err_function: G) -> Self
    where
        F: FnOnce(&T),
        G: FnOnce(&E),
    {
        match &self {
            Self::Ok(value) => ok_function(value),
            Self::Err(value) => err_function(value),
        }
        self
    }

    // =========================================================================
    // Swap Operation
    // =========================================================================

    /// Swaps the Ok and Err variants.
    ///
    /// `Ok(t)` becomes `Err(t)`, and `Err(e)` becomes `Ok(e)`. Swapping twice
    /// restores the original value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use disjunct::union::Outcome;
    ///
    /// let success: Outcome<i32, String> = Outcome::Ok(42);
    /// assert_eq!(success.swap(), Outcome::Err(42));
    /// ```
    #[inline]
    pub fn swap(self) -> Outcome<E, T> {
        match self {
            Self::Ok(value) => Outcome::Err(value),
            Self::Err(value) => Outcome::Ok(value),
        }
    }

    // =========================================================================
    // Alternative Defaults
    // =========================================================================

    /// Returns the success value, or the given default if this is an Err.
    ///
    /// The default is evaluated eagerly; use [`recover`](Self::recover) when
    /// the alternative is expensive to build.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use disjunct::union::Outcome;
    ///
    /// let success: Outcome<i32, String> = Outcome::Ok(42);
    /// assert_eq!(success.unwrap_or(0), 42);
    ///
    /// let failure: Outcome<i32, String> = Outcome::Err("boom".to_string());
    /// assert_eq!(failure.unwrap_or(0), 0);
    /// ```
    #[inline]
    pub fn unwrap_or(self, default: T) -> T {
        match self {
            Self::Ok(value) => value,
            Self::Err(_) => default,
        }
    }

    /// Returns the failure value, or the given default if this is an Ok.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use disjunct::union::Outcome;
    ///
    /// let failure: Outcome<i32, String> = Outcome::Err("kept".to_string());
    /// assert_eq!(failure.unwrap_err_or("other".to_string()), "kept");
    ///
    /// let success: Outcome<i32, String> = Outcome::Ok(42);
    /// assert_eq!(success.unwrap_err_or("other".to_string()), "other");
    /// ```
    #[inline]
    pub fn unwrap_err_or(self, default: E) -> E {
        match self {
            Self::Ok(_) => default,
            Self::Err(value) => value,
        }
    }

    // =========================================================================
    // Boolean Combinators
    // =========================================================================

    /// Returns `other` if this is an Ok, otherwise propagates the Err.
    ///
    /// Mirrors boolean AND over "is this the success variant": an `Err`
    /// short-circuits and `other` is discarded unevaluated.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use disjunct::union::Outcome;
    ///
    /// let first: Outcome<i32, String> = Outcome::Ok(1);
    /// let second: Outcome<&str, String> = Outcome::Ok("two");
    /// assert_eq!(first.and(second), Outcome::Ok("two"));
    ///
    /// let failure: Outcome<i32, String> = Outcome::Err("boom".to_string());
    /// let second: Outcome<&str, String> = Outcome::Ok("two");
    /// assert_eq!(failure.and(second), Outcome::Err("boom".to_string()));
    /// ```
    #[inline]
    pub fn and<U>(self, other: Outcome<U, E>) -> Outcome<U, E> {
        match self {
            Self::Ok(_) => other,
            Self::Err(value) => Outcome::Err(value),
        }
    }

    /// Returns `supplier()` if this is an Ok, otherwise propagates the Err.
    ///
    /// The lazy form of [`and`](Self::and): the supplier is not invoked when
    /// this is an `Err`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use disjunct::union::Outcome;
    ///
    /// let failure: Outcome<i32, String> = Outcome::Err("boom".to_string());
    /// let result: Outcome<i32, String> = failure.and_with(|| unreachable!("not taken"));
    /// assert_eq!(result, Outcome::Err("boom".to_string()));
    /// ```
    #[inline]
    pub fn and_with<U, F>(self, supplier: F) -> Outcome<U, E>
    where
        F: FnOnce() -> Outcome<U, E>,
    {
        match self {
            Self::Ok(_) => supplier(),
            Self::Err(value) => Outcome::Err(value),
        }
    }

    /// Returns the Ok unchanged, or `other` if this is an Err.
    ///
    /// Mirrors boolean OR: an `Ok` short-circuits and `other` is discarded
    /// unevaluated.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use disjunct::union::Outcome;
    ///
    /// let success: Outcome<i32, String> = Outcome::Ok(1);
    /// let fallback: Outcome<i32, usize> = Outcome::Ok(2);
    /// assert_eq!(success.or(fallback), Outcome::Ok(1));
    ///
    /// let failure: Outcome<i32, String> = Outcome::Err("boom".to_string());
    /// let fallback: Outcome<i32, usize> = Outcome::Ok(2);
    /// assert_eq!(failure.or(fallback), Outcome::Ok(2));
    /// ```
    #[inline]
    pub fn or<F2>(self, other: Outcome<T, F2>) -> Outcome<T, F2> {
        match self {
            Self::Ok(value) => Outcome::Ok(value),
            Self::Err(_) => other,
        }
    }

    /// Returns the Ok unchanged, or `supplier()` if this is an Err.
    ///
    /// The lazy form of [`or`](Self::or): the supplier is not invoked when
    /// this is an `Ok`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use disjunct::union::Outcome;
    ///
    /// let success: Outcome<i32, String> = Outcome::Ok(1);
    /// let result: Outcome<i32, String> = success.or_with(|| unreachable!("not taken"));
    /// assert_eq!(result, Outcome::Ok(1));
    /// ```
    #[inline]
    pub fn or_with<F2, F>(self, supplier: F) -> Outcome<T, F2>
    where
        F: FnOnce() -> Outcome<T, F2>,
    {
        match self {
            Self::Ok(value) => Outcome::Ok(value),
            Self::Err(_) => supplier(),
        }
    }

    // =========================================================================
    // Containment
    // =========================================================================

    /// Returns `true` if this is an `Ok` holding a payload equal to `value`.
    ///
    /// An `Err` never matches, regardless of the comparison value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use disjunct::union::Outcome;
    ///
    /// let success: Outcome<i32, String> = Outcome::Ok(42);
    /// assert!(success.contains(&42));
    /// assert!(!success.contains(&7));
    /// ```
    #[inline]
    pub fn contains(&self, value: &T) -> bool
    where
        T: PartialEq,
    {
        match self {
            Self::Ok(payload) => payload == value,
            Self::Err(_) => false,
        }
    }

    /// Returns `true` if this is an `Err` holding a payload equal to `value`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use disjunct::union::Outcome;
    ///
    /// let failure: Outcome<i32, String> = Outcome::Err("boom".to_string());
    /// assert!(failure.contains_err(&"boom".to_string()));
    ///
    /// let success: Outcome<i32, String> = Outcome::Ok(42);
    /// assert!(!success.contains_err(&"boom".to_string()));
    /// ```
    #[inline]
    pub fn contains_err(&self, value: &E) -> bool
    where
        E: PartialEq,
    {
        match self {
            Self::Ok(_) => false,
            Self::Err(payload) => payload == value,
        }
    }

    // =========================================================================
    // Unwrap Operations
    // =========================================================================

    /// Returns the success value, consuming the outcome.
    ///
    /// # Panics
    ///
    /// Panics if this is an `Err` value, with a message that includes the
    /// failure payload.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use disjunct::union::Outcome;
    ///
    /// let success: Outcome<i32, String> = Outcome::Ok(42);
    /// assert_eq!(success.unwrap(), 42);
    /// ```
    #[inline]
    pub fn unwrap(self) -> T
    where
        E: fmt::Debug,
    {
        match self {
            Self::Ok(value) => value,
            Self::Err(value) => {
                panic!("called `Outcome::unwrap()` on an `Err` value: {value:?}")
            }
        }
    }

    /// Returns the failure value, consuming the outcome.
    ///
    /// # Panics
    ///
    /// Panics if this is an `Ok` value, with a message that includes the
    /// success payload.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use disjunct::union::Outcome;
    ///
    /// let failure: Outcome<i32, String> = Outcome::Err("boom".to_string());
    /// assert_eq!(failure.unwrap_err(), "boom".to_string());
    /// ```
    #[inline]
    pub fn unwrap_err(self) -> E
    where
        T: fmt::Debug,
    {
        match self {
            Self::Ok(value) => {
                panic!("called `Outcome::unwrap_err()` on an `Ok` value: {value:?}")
            }
            Self::Err(value) => value,
        }
    }

    /// Returns the success value, panicking with `message` if this is an Err.
    ///
    /// # Panics
    ///
    /// Panics if this is an `Err` value, with a message that includes the
    /// failure payload.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use disjunct::union::Outcome;
    ///
    /// let success: Outcome<i32, String> = Outcome::Ok(42);
    /// assert_eq!(success.expect("value must be present"), 42);
    /// ```
    #[inline]
    pub fn expect(self, message: &str) -> T
    where
        E: fmt::Debug,
    {
        match self {
            Self::Ok(value) => value,
            Self::Err(value) => panic!("{message}: {value:?}"),
        }
    }

    /// Returns the failure value, panicking with `message` if this is an Ok.
    ///
    /// # Panics
    ///
    /// Panics if this is an `Ok` value, with a message that includes the
    /// success payload.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use disjunct::union::Outcome;
    ///
    /// let failure: Outcome<i32, String> = Outcome::Err("boom".to_string());
    /// assert_eq!(failure.expect_err("failure must be present"), "boom".to_string());
    /// ```
    #[inline]
    pub fn expect_err(self, message: &str) -> E
    where
        T: fmt::Debug,
    {
        match self {
            Self::Ok(value) => panic!("{message}: {value:?}"),
            Self::Err(value) => value,
        }
    }

    /// Returns the success value, or an error built from the failure payload.
    ///
    /// The error mapper is invoked only when this is an `Err`, so building an
    /// expensive error costs nothing on the success path.
    ///
    /// # Errors
    ///
    /// Returns `Err(to_error(e))` if this is `Err(e)`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use disjunct::union::Outcome;
    /// use std::io;
    ///
    /// let failure: Outcome<i32, String> = Outcome::Err("missing".to_string());
    /// let result = failure.get_or_raise(|e| io::Error::new(io::ErrorKind::NotFound, e));
    /// assert_eq!(result.unwrap_err().kind(), io::ErrorKind::NotFound);
    /// ```
    #[inline]
    pub fn get_or_raise<X, F>(self, to_error: F) -> Result<T, X>
    where
        F: FnOnce(E) -> X,
    {
        match self {
            Self::Ok(value) => Ok(value),
            Self::Err(value) => Err(to_error(value)),
        }
    }

    // =========================================================================
    // Conversion Operations
    // =========================================================================

    /// Converts into a `std::result::Result`, consuming the outcome.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use disjunct::union::Outcome;
    ///
    /// let success: Outcome<i32, String> = Outcome::Ok(42);
    /// assert_eq!(success.into_result(), Ok(42));
    /// ```
    #[inline]
    pub fn into_result(self) -> Result<T, E> {
        match self {
            Self::Ok(value) => Ok(value),
            Self::Err(value) => Err(value),
        }
    }

    /// Converts into an `Either`, mapping `Ok` to `Right` and `Err` to `Left`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use disjunct::union::{Either, Outcome};
    ///
    /// let success: Outcome<i32, String> = Outcome::Ok(42);
    /// assert_eq!(success.into_either(), Either::Right(42));
    /// ```
    #[inline]
    pub fn into_either(self) -> Either<E, T> {
        match self {
            Self::Ok(value) => Either::Right(value),
            Self::Err(value) => Either::Left(value),
        }
    }
}

// =============================================================================
// Debug Implementation
// =============================================================================

impl<T: fmt::Debug, E: fmt::Debug> fmt::Debug for Outcome<T, E> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Ok(value) => formatter.debug_tuple("Ok").field(value).finish(),
            Self::Err(value) => formatter.debug_tuple("Err").field(value).finish(),
        }
    }
}

// =============================================================================
// From Implementations
// =============================================================================

impl<T, E> From<Result<T, E>> for Outcome<T, E> {
    /// Converts a `std::result::Result` to an `Outcome`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use disjunct::union::Outcome;
    ///
    /// let ok: Result<i32, String> = Ok(42);
    /// let outcome: Outcome<i32, String> = ok.into();
    /// assert_eq!(outcome, Outcome::Ok(42));
    /// ```
    #[inline]
    fn from(result: Result<T, E>) -> Self {
        match result {
            Ok(value) => Self::Ok(value),
            Err(error) => Self::Err(error),
        }
    }
}

impl<T, E> From<Outcome<T, E>> for Result<T, E> {
    /// Converts an `Outcome` to a `std::result::Result`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use disjunct::union::Outcome;
    ///
    /// let outcome: Outcome<i32, String> = Outcome::Err("error".to_string());
    /// let result: Result<i32, String> = outcome.into();
    /// assert_eq!(result, Err("error".to_string()));
    /// ```
    #[inline]
    fn from(outcome: Outcome<T, E>) -> Self {
        outcome.into_result()
    }
}

impl<T, E> From<Either<E, T>> for Outcome<T, E> {
    /// Converts an `Either` to an `Outcome`, mapping `Right` to `Ok` and
    /// `Left` to `Err`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use disjunct::union::{Either, Outcome};
    ///
    /// let right: Either<String, i32> = Either::Right(42);
    /// let outcome: Outcome<i32, String> = right.into();
    /// assert_eq!(outcome, Outcome::Ok(42));
    /// ```
    #[inline]
    fn from(either: Either<E, T>) -> Self {
        match either {
            Either::Left(value) => Self::Err(value),
            Either::Right(value) => Self::Ok(value),
        }
    }
}
