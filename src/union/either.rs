//! Either type - a value that can be one of two types.
//!
//! This module provides the `Either<L, R>` type, which represents a value
//! that is either a `Left(L)` or a `Right(R)`. This is commonly used in
//! functional programming for:
//!
//! - Error handling (Left for errors, Right for success)
//! - Branching computations
//! - Feeding a success/failure pipeline without committing to `Outcome`
//!
//! The combinator set is right-biased: operations without a `_left` suffix
//! act on the `Right` payload and pass `Left` values through untouched.
//!
//! # Examples
//!
//! ```rust
//! use disjunct::union::Either;
//!
//! // Creating Either values
//! let left: Either<i32, String> = Either::Left(42);
//! let right: Either<i32, String> = Either::Right("hello".to_string());
//!
//! // Pattern matching
//! match left {
//!     Either::Left(n) => println!("Got left: {}", n),
//!     Either::Right(s) => println!("Got right: {}", s),
//! }
//!
//! // Using fold to handle both cases
//! let result = right.fold(
//!     |n| format!("Number: {}", n),
//!     |s| format!("String: {}", s),
//! );
//! assert_eq!(result, "String: hello");
//! ```

use std::fmt;

/// A value that can be one of two types.
///
/// `Either<L, R>` represents a value that is either `Left(L)` or `Right(R)`.
/// By convention:
/// - `Left` is often used to represent failure, error, or the first alternative
/// - `Right` is often used to represent success or the second alternative
///
/// The union holds exactly one payload. Combinators consume the value and
/// return a new one; nothing is ever mutated in place.
///
/// # Type Parameters
///
/// * `L` - The type of the left value
/// * `R` - The type of the right value
///
/// # Examples
///
/// ```rust
/// use disjunct::union::Either;
///
/// let success: Either<String, i32> = Either::Right(42);
/// let failure: Either<String, i32> = Either::Left("error".to_string());
///
/// // Map over the right value
/// let doubled = success.map_right(|x| x * 2);
/// assert_eq!(doubled, Either::Right(84));
/// ```
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Either<L, R> {
    /// The left variant, conventionally representing failure or the first alternative.
    Left(L),
    /// The right variant, conventionally representing success or the second alternative.
    Right(R),
}

impl<L, R> Either<L, R> {
    // =========================================================================
    // Type Checking
    // =========================================================================

    /// Returns `true` if this is a `Left` value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use disjunct::union::Either;
    ///
    /// let left: Either<i32, String> = Either::Left(42);
    /// assert!(left.is_left());
    ///
    /// let right: Either<i32, String> = Either::Right("hello".to_string());
    /// assert!(!right.is_left());
    /// ```
    #[inline]
    pub const fn is_left(&self) -> bool {
        matches!(self, Self::Left(_))
    }

    /// Returns `true` if this is a `Right` value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use disjunct::union::Either;
    ///
    /// let right: Either<i32, String> = Either::Right("hello".to_string());
    /// assert!(right.is_right());
    ///
    /// let left: Either<i32, String> = Either::Left(42);
    /// assert!(!left.is_right());
    /// ```
    #[inline]
    pub const fn is_right(&self) -> bool {
        matches!(self, Self::Right(_))
    }

    // =========================================================================
    // Value Extraction (Consuming)
    // =========================================================================

    /// Converts the `Either` into an `Option<L>`, consuming the either.
    ///
    /// Returns `Some(l)` if this is `Left(l)`, otherwise `None`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use disjunct::union::Either;
    ///
    /// let left: Either<i32, String> = Either::Left(42);
    /// assert_eq!(left.left(), Some(42));
    ///
    /// let right: Either<i32, String> = Either::Right("hello".to_string());
    /// assert_eq!(right.left(), None);
    /// ```
    #[inline]
    pub fn left(self) -> Option<L> {
        match self {
            Self::Left(value) => Some(value),
            Self::Right(_) => None,
        }
    }

    /// Converts the `Either` into an `Option<R>`, consuming the either.
    ///
    /// Returns `Some(r)` if this is `Right(r)`, otherwise `None`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use disjunct::union::Either;
    ///
    /// let right: Either<i32, String> = Either::Right("hello".to_string());
    /// assert_eq!(right.right(), Some("hello".to_string()));
    ///
    /// let left: Either<i32, String> = Either::Left(42);
    /// assert_eq!(left.right(), None);
    /// ```
    #[inline]
    pub fn right(self) -> Option<R> {
        match self {
            Self::Left(_) => None,
            Self::Right(value) => Some(value),
        }
    }

    // =========================================================================
    // Reference Extraction (Non-consuming)
    // =========================================================================

    /// Returns a reference to the left value if present.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use disjunct::union::Either;
    ///
    /// let left: Either<i32, String> = Either::Left(42);
    /// assert_eq!(left.left_ref(), Some(&42));
    ///
    /// let right: Either<i32, String> = Either::Right("hello".to_string());
    /// assert_eq!(right.left_ref(), None);
    /// ```
    #[inline]
    pub const fn left_ref(&self) -> Option<&L> {
        match self {
            Self::Left(value) => Some(value),
            Self::Right(_) => None,
        }
    }

    /// Returns a reference to the right value if present.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use disjunct::union::Either;
    ///
    /// let right: Either<i32, String> = Either::Right("hello".to_string());
    /// assert_eq!(right.right_ref(), Some(&"hello".to_string()));
    ///
    /// let left: Either<i32, String> = Either::Left(42);
    /// assert_eq!(left.right_ref(), None);
    /// ```
    #[inline]
    pub const fn right_ref(&self) -> Option<&R> {
        match self {
            Self::Left(_) => None,
            Self::Right(value) => Some(value),
        }
    }

    // =========================================================================
    // Mapping Operations
    // =========================================================================

    /// Applies a function to the left value if present.
    ///
    /// If this is `Left(l)`, returns `Left(function(l))`.
    /// If this is `Right(r)`, returns `Right(r)` unchanged.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use disjunct::union::Either;
    ///
    /// let left: Either<i32, String> = Either::Left(42);
    /// let result = left.map_left(|x| x * 2);
    /// assert_eq!(result, Either::Left(84));
    ///
    /// let right: Either<i32, String> = Either::Right("hello".to_string());
    /// let result = right.map_left(|x: i32| x * 2);
    /// assert_eq!(result, Either::Right("hello".to_string()));
    /// ```
    #[inline]
    pub fn map_left<T, F>(self, function: F) -> Either<T, R>
    where
        F: FnOnce(L) -> T,
    {
        match self {
            Self::Left(value) => Either::Left(function(value)),
            Self::Right(value) => Either::Right(value),
        }
    }

    /// Applies a function to the right value if present.
    ///
    /// If this is `Right(r)`, returns `Right(function(r))`.
    /// If this is `Left(l)`, returns `Left(l)` unchanged.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use disjunct::union::Either;
    ///
    /// let right: Either<i32, String> = Either::Right("hello".to_string());
    /// let result = right.map_right(|s| s.len());
    /// assert_eq!(result, Either::Right(5));
    ///
    /// let left: Either<i32, String> = Either::Left(42);
    /// let result = left.map_right(|s: String| s.len());
    /// assert_eq!(result, Either::Left(42));
    /// ```
    #[inline]
    pub fn map_right<T, F>(self, function: F) -> Either<L, T>
    where
        F: FnOnce(R) -> T,
    {
        match self {
            Self::Left(value) => Either::Left(value),
            Self::Right(value) => Either::Right(function(value)),
        }
    }

    /// Applies one of two functions depending on whether this is Left or Right.
    ///
    /// Exactly one of the functions is invoked; the result is wrapped back
    /// into the variant it came from.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use disjunct::union::Either;
    ///
    /// let left: Either<i32, String> = Either::Left(42);
    /// let result = left.bimap(|x| x * 2, |s: String| s.len());
    /// assert_eq!(result, Either::Left(84));
    ///
    /// let right: Either<i32, String> = Either::Right("hello".to_string());
    /// let result = right.bimap(|x: i32| x * 2, |s| s.len());
    /// assert_eq!(result, Either::Right(5));
    /// ```
    #[inline]
    pub fn bimap<T, U, F, G>(self, left_function: F, right_function: G) -> Either<T, U>
    where
        F: FnOnce(L) -> T,
        G: FnOnce(R) -> U,
    {
        match self {
            Self::Left(value) => Either::Left(left_function(value)),
            Self::Right(value) => Either::Right(right_function(value)),
        }
    }

    // =========================================================================
    // Monadic Operations
    // =========================================================================

    /// Applies a union-returning function to the right value if present.
    ///
    /// This is the right-biased monadic bind: the function's result is
    /// returned directly, without re-wrapping. A `Left` passes through
    /// unchanged and the function is not invoked.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use disjunct::union::Either;
    ///
    /// fn half(n: i32) -> Either<String, i32> {
    ///     if n % 2 == 0 {
    ///         Either::Right(n / 2)
    ///     } else {
    ///         Either::Left(format!("{n} is odd"))
    ///     }
    /// }
    ///
    /// let even: Either<String, i32> = Either::Right(84);
    /// assert_eq!(even.flat_map(half), Either::Right(42));
    ///
    /// let odd: Either<String, i32> = Either::Right(7);
    /// assert_eq!(odd.flat_map(half), Either::Left("7 is odd".to_string()));
    /// ```
    #[inline]
    pub fn flat_map<T, F>(self, function: F) -> Either<L, T>
    where
        F: FnOnce(R) -> Either<L, T>,
    {
        match self {
            Self::Left(value) => Either::Left(value),
            Self::Right(value) => function(value),
        }
    }

    /// Applies a union-returning function to the left value if present.
    ///
    /// The left-sided counterpart of [`flat_map`](Self::flat_map). A `Right`
    /// passes through unchanged and the function is not invoked.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use disjunct::union::Either;
    ///
    /// let left: Either<i32, String> = Either::Left(42);
    /// let result = left.flat_map_left(|n| {
    ///     if n > 0 {
    ///         Either::Right(n.to_string())
    ///     } else {
    ///         Either::Left(n)
    ///     }
    /// });
    /// assert_eq!(result, Either::Right("42".to_string()));
    /// ```
    #[inline]
    pub fn flat_map_left<T, F>(self, function: F) -> Either<T, R>
    where
        F: FnOnce(L) -> Either<T, R>,
    {
        match self {
            Self::Left(value) => function(value),
            Self::Right(value) => Either::Right(value),
        }
    }

    /// Applies one of two union-returning functions depending on the variant.
    ///
    /// Like [`bimap`](Self::bimap), but the invoked function's result is
    /// returned directly rather than re-wrapped.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use disjunct::union::Either;
    ///
    /// let left: Either<i32, String> = Either::Left(-3);
    /// let result: Either<String, usize> = left.bi_flat_map(
    ///     |n| Either::Left(format!("negative: {n}")),
    ///     |s: String| Either::Right(s.len()),
    /// );
    /// assert_eq!(result, Either::Left("negative: -3".to_string()));
    /// ```
    #[inline]
    pub fn bi_flat_map<T, U, F, G>(self, left_function: F, right_function: G) -> Either<T, U>
    where
        F: FnOnce(L) -> Either<T, U>,
        G: FnOnce(R) -> Either<T, U>,
    {
        match self {
            Self::Left(value) => left_function(value),
            Self::Right(value) => right_function(value),
        }
    }

    // =========================================================================
    // Fold Operation
    // =========================================================================

    /// Eliminates the Either by applying one of two functions.
    ///
    /// This is also known as "case analysis" or "pattern matching" as a function.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use disjunct::union::Either;
    ///
    /// let left: Either<i32, String> = Either::Left(42);
    /// let result = left.fold(|x| x.to_string(), |s| s);
    /// assert_eq!(result, "42");
    ///
    /// let right: Either<i32, String> = Either::Right("hello".to_string());
    /// let result = right.fold(|x: i32| x.to_string(), |s| s);
    /// assert_eq!(result, "hello");
    /// ```
    #[inline]
    pub fn fold<T, F, G>(self, left_function: F, right_function: G) -> T
    where
        F: FnOnce(L) -> T,
        G: FnOnce(R) -> T,
    {
        match self {
            Self::Left(value) => left_function(value),
            Self::Right(value) => right_function(value),
        }
    }

    // =========================================================================
    // Filter Operation
    // =========================================================================

    /// Tests the right value against a predicate, demoting it to `Left` on failure.
    ///
    /// If this is `Right(r)` and `predicate(&r)` fails, returns
    /// `Left(else_mapper(r))`. A passing `Right` is returned unchanged, and a
    /// `Left` passes through without invoking either function.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use disjunct::union::Either;
    ///
    /// let small: Either<String, i32> = Either::Right(4);
    /// let filtered = small.filter_or_else(|n| *n > 10, |n| format!("too small: {n}"));
    /// assert_eq!(filtered, Either::Left("too small: 4".to_string()));
    ///
    /// let large: Either<String, i32> = Either::Right(40);
    /// let filtered = large.filter_or_else(|n| *n > 10, |n| format!("too small: {n}"));
    /// assert_eq!(filtered, Either::Right(40));
    /// ```
    #[inline]
    pub fn filter_or_else<P, F>(self, predicate: P, else_mapper: F) -> Self
    where
        P: FnOnce(&R) -> bool,
        F: FnOnce(R) -> L,
    {
        match self {
            Self::Left(value) => Self::Left(value),
            Self::Right(value) => {
                if predicate(&value) {
                    Self::Right(value)
                } else {
                    Self::Left(else_mapper(value))
                }
            }
        }
    }

    // =========================================================================
    // Asymmetric Folds
    // =========================================================================

    /// Returns the right value, synthesizing one from the left via `function`.
    ///
    /// The function is invoked only when this is a `Left`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use disjunct::union::Either;
    ///
    /// let right: Either<String, i32> = Either::Right(42);
    /// assert_eq!(right.recover(|message| message.len() as i32), 42);
    ///
    /// let left: Either<String, i32> = Either::Left("boom".to_string());
    /// assert_eq!(left.recover(|message| message.len() as i32), 4);
    /// ```
    #[inline]
    pub fn recover<F>(self, function: F) -> R
    where
        F: FnOnce(L) -> R,
    {
        match self {
            Self::Left(value) => function(value),
            Self::Right(value) => value,
        }
    }

    /// Returns the left value, synthesizing one from the right via `function`.
    ///
    /// The mirror of [`recover`](Self::recover): the function is invoked only
    /// when this is a `Right`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use disjunct::union::Either;
    ///
    /// let left: Either<String, i32> = Either::Left("kept".to_string());
    /// assert_eq!(left.forfeit(|n| n.to_string()), "kept");
    ///
    /// let right: Either<String, i32> = Either::Right(42);
    /// assert_eq!(right.forfeit(|n| n.to_string()), "42");
    /// ```
    #[inline]
    pub fn forfeit<F>(self, function: F) -> L
    where
        F: FnOnce(R) -> L,
    {
        match self {
            Self::Left(value) => value,
            Self::Right(value) => function(value),
        }
    }

    // =========================================================================
    // Inspection
    // =========================================================================

    /// Invokes a consumer on the right value, returning the union unchanged.
    ///
    /// Useful for logging or debugging mid-chain.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use disjunct::union::Either;
    ///
    /// let mut seen = None;
    /// let right: Either<i32, String> = Either::Right("hello".to_string());
    /// let unchanged = right.inspect(|s| seen = Some(s.len()));
    /// assert_eq!(seen, Some(5));
    /// assert_eq!(unchanged, Either::Right("hello".to_string()));
    /// ```
    #[inline]
    pub fn inspect<F>(self, function: F) -> Self
    where
        F: FnOnce(&R),
    {
        if let Self::Right(value) = &self {
            function(value);
        }
        self
    }

    /// Invokes a consumer on the left value, returning the union unchanged.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use disjunct::union::Either;
    ///
    /// let mut seen = None;
    /// let left: Either<i32, String> = Either::Left(42);
    /// let unchanged = left.inspect_left(|n| seen = Some(*n));
    /// assert_eq!(seen, Some(42));
    /// assert_eq!(unchanged, Either::Left(42));
    /// ```
    #[inline]
    pub fn inspect_left<F>(self, function: F) -> Self
    where
        F: FnOnce(&L),
    {
        if let Self::Left(value) = &self {
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
    /// use disjunct::union::Either;
    ///
    /// use std::cell::RefCell;
    ///
    /// let log = RefCell::new(Vec::new());
    /// let right: Either<i32, String> = Either::Right("hello".to_string());
    /// right.bi_inspect(
    ///     |n| log.borrow_mut().push(format!("left: {n}")),
    ///     |s| log.borrow_mut().push(format!("right: {s}")),
    /// );
    /// assert_eq!(log.into_inner(), vec!["right: hello".to_string()]);
    /// ```
    #[inline]
    pub fn bi_inspect<F, G>(self, left_function: F, right_function: G) -> Self
    where
        F: FnOnce(&L),
        G: FnOnce(&R),
    {
        match &self {
            Self::Left(value) => left_function(value),
            Self::Right(value) => right_function(value),
        }
        self
    }

    // =========================================================================
    // Swap Operation
    // =========================================================================

    /// Swaps the Left and Right variants.
    ///
    /// `Left(l)` becomes `Right(l)`, and `Right(r)` becomes `Left(r)`.
    /// Swapping twice restores the original value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use disjunct::union::Either;
    ///
    /// let left: Either<i32, String> = Either::Left(42);
    /// assert_eq!(left.swap(), Either::Right(42));
    ///
    /// let right: Either<i32, String> = Either::Right("hello".to_string());
    /// assert_eq!(right.swap(), Either::Left("hello".to_string()));
    /// ```
    #[inline]
    pub fn swap(self) -> Either<R, L> {
        match self {
            Self::Left(value) => Either::Right(value),
            Self::Right(value) => Either::Left(value),
        }
    }

    // =========================================================================
    // Alternative Defaults
    // =========================================================================

    /// Returns the right value, or the given default if this is a Left.
    ///
    /// The default is evaluated eagerly; use [`recover`](Self::recover) when
    /// the alternative is expensive to build.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use disjunct::union::Either;
    ///
    /// let right: Either<String, i32> = Either::Right(42);
    /// assert_eq!(right.right_or(0), 42);
    ///
    /// let left: Either<String, i32> = Either::Left("boom".to_string());
    /// assert_eq!(left.right_or(0), 0);
    /// ```
    #[inline]
    pub fn right_or(self, default: R) -> R {
        match self {
            Self::Left(_) => default,
            Self::Right(value) => value,
        }
    }

    /// Returns the left value, or the given default if this is a Right.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use disjunct::union::Either;
    ///
    /// let left: Either<String, i32> = Either::Left("kept".to_string());
    /// assert_eq!(left.left_or("other".to_string()), "kept");
    ///
    /// let right: Either<String, i32> = Either::Right(42);
    /// assert_eq!(right.left_or("other".to_string()), "other");
    /// ```
    #[inline]
    pub fn left_or(self, default: L) -> L {
        match self {
            Self::Left(value) => value,
            Self::Right(_) => default,
        }
    }

    // =========================================================================
    // Boolean Combinators
    // =========================================================================

    /// Returns `other` if this is a Right, otherwise propagates the Left.
    ///
    /// Mirrors boolean AND over "is this the expected variant": a `Left`
    /// short-circuits and `other` is discarded unevaluated.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use disjunct::union::Either;
    ///
    /// let right: Either<String, i32> = Either::Right(1);
    /// let next: Either<String, &str> = Either::Right("two");
    /// assert_eq!(right.and(next), Either::Right("two"));
    ///
    /// let left: Either<String, i32> = Either::Left("boom".to_string());
    /// let next: Either<String, &str> = Either::Right("two");
    /// assert_eq!(left.and(next), Either::Left("boom".to_string()));
    /// ```
    #[inline]
    pub fn and<T>(self, other: Either<L, T>) -> Either<L, T> {
        match self {
            Self::Left(value) => Either::Left(value),
            Self::Right(_) => other,
        }
    }

    /// Returns `supplier()` if this is a Right, otherwise propagates the Left.
    ///
    /// The lazy form of [`and`](Self::and): the supplier is not invoked when
    /// this is a `Left`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use disjunct::union::Either;
    ///
    /// let left: Either<String, i32> = Either::Left("boom".to_string());
    /// let result: Either<String, i32> = left.and_with(|| unreachable!("not taken"));
    /// assert_eq!(result, Either::Left("boom".to_string()));
    /// ```
    #[inline]
    pub fn and_with<T, F>(self, supplier: F) -> Either<L, T>
    where
        F: FnOnce() -> Either<L, T>,
    {
        match self {
            Self::Left(value) => Either::Left(value),
            Self::Right(_) => supplier(),
        }
    }

    /// Returns the Right unchanged, or `other` if this is a Left.
    ///
    /// Mirrors boolean OR: a `Right` short-circuits and `other` is discarded
    /// unevaluated.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use disjunct::union::Either;
    ///
    /// let right: Either<String, i32> = Either::Right(1);
    /// let fallback: Either<&str, i32> = Either::Right(2);
    /// assert_eq!(right.or(fallback), Either::Right(1));
    ///
    /// let left: Either<String, i32> = Either::Left("boom".to_string());
    /// let fallback: Either<&str, i32> = Either::Right(2);
    /// assert_eq!(left.or(fallback), Either::Right(2));
    /// ```
    #[inline]
    pub fn or<T>(self, other: Either<T, R>) -> Either<T, R> {
        match self {
            Self::Left(_) => other,
            Self::Right(value) => Either::Right(value),
        }
    }

    /// Returns the Right unchanged, or `supplier()` if this is a Left.
    ///
    /// The lazy form of [`or`](Self::or): the supplier is not invoked when
    /// this is a `Right`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use disjunct::union::Either;
    ///
    /// let right: Either<String, i32> = Either::Right(1);
    /// let result: Either<String, i32> = right.or_with(|| unreachable!("not taken"));
    /// assert_eq!(result, Either::Right(1));
    /// ```
    #[inline]
    pub fn or_with<T, F>(self, supplier: F) -> Either<T, R>
    where
        F: FnOnce() -> Either<T, R>,
    {
        match self {
            Self::Left(_) => supplier(),
            Self::Right(value) => Either::Right(value),
        }
    }

    // =========================================================================
    // Containment
    // =========================================================================

    /// Returns `true` if this is a `Right` holding a payload equal to `value`.
    ///
    /// A `Left` never matches, regardless of the comparison value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use disjunct::union::Either;
    ///
    /// let right: Either<String, i32> = Either::Right(42);
    /// assert!(right.contains(&42));
    /// assert!(!right.contains(&7));
    ///
    /// let left: Either<String, i32> = Either::Left("boom".to_string());
    /// assert!(!left.contains(&42));
    /// ```
    #[inline]
    pub fn contains(&self, value: &R) -> bool
    where
        R: PartialEq,
    {
        match self {
            Self::Left(_) => false,
            Self::Right(payload) => payload == value,
        }
    }

    /// Returns `true` if this is a `Left` holding a payload equal to `value`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use disjunct::union::Either;
    ///
    /// let left: Either<i32, String> = Either::Left(42);
    /// assert!(left.contains_left(&42));
    ///
    /// let right: Either<i32, String> = Either::Right("hello".to_string());
    /// assert!(!right.contains_left(&42));
    /// ```
    #[inline]
    pub fn contains_left(&self, value: &L) -> bool
    where
        L: PartialEq,
    {
        match self {
            Self::Left(payload) => payload == value,
            Self::Right(_) => false,
        }
    }

    // =========================================================================
    // Unwrap Operations
    // =========================================================================

    /// Returns the left value, consuming the either.
    ///
    /// # Panics
    ///
    /// Panics if this is a `Right` value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use disjunct::union::Either;
    ///
    /// let left: Either<i32, String> = Either::Left(42);
    /// assert_eq!(left.unwrap_left(), 42);
    /// ```
    #[inline]
    pub fn unwrap_left(self) -> L {
        match self {
            Self::Left(value) => value,
            Self::Right(_) => panic!("called `Either::unwrap_left()` on a `Right` value"),
        }
    }

    /// Returns the right value, consuming the either.
    ///
    /// # Panics
    ///
    /// Panics if this is a `Left` value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use disjunct::union::Either;
    ///
    /// let right: Either<i32, String> = Either::Right("hello".to_string());
    /// assert_eq!(right.unwrap_right(), "hello".to_string());
    /// ```
    #[inline]
    pub fn unwrap_right(self) -> R {
        match self {
            Self::Left(_) => panic!("called `Either::unwrap_right()` on a `Left` value"),
            Self::Right(value) => value,
        }
    }

    /// Returns the right value, panicking with `message` if this is a Left.
    ///
    /// # Panics
    ///
    /// Panics if this is a `Left` value, with a message that includes the
    /// left payload.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use disjunct::union::Either;
    ///
    /// let right: Either<String, i32> = Either::Right(42);
    /// assert_eq!(right.expect("value must be present"), 42);
    /// ```
    #[inline]
    pub fn expect(self, message: &str) -> R
    where
        L: fmt::Debug,
    {
        match self {
            Self::Left(value) => panic!("{message}: {value:?}"),
            Self::Right(value) => value,
        }
    }

    /// Returns the left value, panicking with `message` if this is a Right.
    ///
    /// # Panics
    ///
    /// Panics if this is a `Right` value, with a message that includes the
    /// right payload.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use disjunct::union::Either;
    ///
    /// let left: Either<i32, String> = Either::Left(42);
    /// assert_eq!(left.expect_left("left must be present"), 42);
    /// ```
    #[inline]
    pub fn expect_left(self, message: &str) -> L
    where
        R: fmt::Debug,
    {
        match self {
            Self::Left(value) => value,
            Self::Right(value) => panic!("{message}: {value:?}"),
        }
    }

    /// Returns the right value, or an error built from the left payload.
    ///
    /// The error mapper is invoked only when this is a `Left`, so building
    /// an expensive error costs nothing on the success path.
    ///
    /// # Errors
    ///
    /// Returns `Err(to_error(l))` if this is `Left(l)`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use disjunct::union::Either;
    /// use std::io;
    ///
    /// let left: Either<String, i32> = Either::Left("missing".to_string());
    /// let result = left.get_or_raise(|message| {
    ///     io::Error::new(io::ErrorKind::NotFound, message)
    /// });
    /// assert_eq!(result.unwrap_err().kind(), io::ErrorKind::NotFound);
    /// ```
    #[inline]
    pub fn get_or_raise<X, F>(self, to_error: F) -> Result<R, X>
    where
        F: FnOnce(L) -> X,
    {
        match self {
            Self::Left(value) => Err(to_error(value)),
            Self::Right(value) => Ok(value),
        }
    }

    // =========================================================================
    // Conversion Operations
    // =========================================================================

    /// Converts into a pair of `Option`s.
    ///
    /// Returns `(Some(l), None)` for `Left(l)` and `(None, Some(r))` for `Right(r)`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use disjunct::union::Either;
    ///
    /// let left: Either<i32, String> = Either::Left(42);
    /// assert_eq!(left.into_options(), (Some(42), None));
    ///
    /// let right: Either<i32, String> = Either::Right("hello".to_string());
    /// assert_eq!(right.into_options(), (None, Some("hello".to_string())));
    /// ```
    #[inline]
    pub fn into_options(self) -> (Option<L>, Option<R>) {
        match self {
            Self::Left(value) => (Some(value), None),
            Self::Right(value) => (None, Some(value)),
        }
    }
}

// =============================================================================
// Default-based Operations
// =============================================================================

impl<L: Default, R> Either<L, R> {
    /// Returns the left value, or default if this is a Right.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use disjunct::union::Either;
    ///
    /// let left: Either<i32, String> = Either::Left(42);
    /// assert_eq!(left.left_or_default(), 42);
    ///
    /// let right: Either<i32, String> = Either::Right("hello".to_string());
    /// assert_eq!(right.left_or_default(), 0);
    /// ```
    #[inline]
    pub fn left_or_default(self) -> L {
        match self {
            Self::Left(value) => value,
            Self::Right(_) => L::default(),
        }
    }
}

impl<L, R: Default> Either<L, R> {
    /// Returns the right value, or default if this is a Left.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use disjunct::union::Either;
    ///
    /// let right: Either<i32, String> = Either::Right("hello".to_string());
    /// assert_eq!(right.right_or_default(), "hello".to_string());
    ///
    /// let left: Either<i32, String> = Either::Left(42);
    /// assert_eq!(left.right_or_default(), String::new());
    /// ```
    #[inline]
    pub fn right_or_default(self) -> R {
        match self {
            Self::Left(_) => R::default(),
            Self::Right(value) => value,
        }
    }
}

// =============================================================================
// Debug Implementation
// =============================================================================

impl<L: fmt::Debug, R: fmt::Debug> fmt::Debug for Either<L, R> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Left(value) => formatter.debug_tuple("Left").field(value).finish(),
            Self::Right(value) => formatter.debug_tuple("Right").field(value).finish(),
        }
    }
}

// =============================================================================
// From Implementations
// =============================================================================

impl<L, R> From<Result<R, L>> for Either<L, R> {
    /// Converts a `Result` to an `Either`.
    ///
    /// `Ok(r)` becomes `Right(r)`, and `Err(e)` becomes `Left(e)`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use disjunct::union::Either;
    ///
    /// let ok: Result<i32, String> = Ok(42);
    /// let either: Either<String, i32> = ok.into();
    /// assert_eq!(either, Either::Right(42));
    ///
    /// let err: Result<i32, String> = Err("error".to_string());
    /// let either: Either<String, i32> = err.into();
    /// assert_eq!(either, Either::Left("error".to_string()));
    /// ```
    #[inline]
    fn from(result: Result<R, L>) -> Self {
        match result {
            Ok(value) => Self::Right(value),
            Err(error) => Self::Left(error),
        }
    }
}

impl<L, R> From<Either<L, R>> for Result<R, L> {
    /// Converts an `Either` to a `Result`.
    ///
    /// `Right(r)` becomes `Ok(r)`, and `Left(l)` becomes `Err(l)`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use disjunct::union::Either;
    ///
    /// let right: Either<String, i32> = Either::Right(42);
    /// let result: Result<i32, String> = right.into();
    /// assert_eq!(result, Ok(42));
    ///
    /// let left: Either<String, i32> = Either::Left("error".to_string());
    /// let result: Result<i32, String> = left.into();
    /// assert_eq!(result, Err("error".to_string()));
    /// ```
    #[inline]
    fn from(either: Either<L, R>) -> Self {
        match either {
            Either::Left(value) => Err(value),
            Either::Right(value) => Ok(value),
        }
    }
}
