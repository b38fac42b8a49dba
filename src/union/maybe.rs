//! Maybe type - an optional value with a payload-free absent variant.
//!
//! This module provides the `Maybe<T>` type, a union of a present value
//! (`Some`) and an explicit absence marker (`None`). Unlike the other union
//! types in this crate, the second variant carries no payload: absence is a
//! state, not a value, so there is nothing to `swap` into.
//!
//! `Maybe` mirrors the prelude's `Option` and converts to and from it for
//! free; it exists so optional values participate in the same combinator
//! vocabulary (`fold`, `recover`, `and_with`/`or_with`, `get_or_raise`) as
//! the rest of the crate.
//!
//! # Examples
//!
//! ```rust
//! use disjunct::union::Maybe;
//!
//! let present: Maybe<i32> = Maybe::Some(21);
//! let doubled = present.map(|n| n * 2).filter(|n| *n > 10);
//! assert_eq!(doubled, Maybe::Some(42));
//!
//! let absent: Maybe<i32> = Maybe::None;
//! assert_eq!(absent.recover(|| 0), 0);
//! ```

use std::fmt;

/// An optional value: either `Some(T)` or the payload-free `None`.
///
/// `Maybe<T>` is value-biased: every combinator acts on the `Some` payload
/// and passes `None` through untouched. `None` is stateless, so sharing it
/// across threads needs no synchronization.
///
/// # Examples
///
/// ```rust
/// use disjunct::union::Maybe;
///
/// let present = Maybe::Some("hello");
/// assert_eq!(present.map(|s| s.len()), Maybe::Some(5));
///
/// let absent: Maybe<&str> = Maybe::None;
/// assert_eq!(absent.map(|s| s.len()), Maybe::None);
/// ```
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Maybe<T> {
    /// A present value.
    Some(T),
    /// The absence marker; carries no payload.
    None,
}

impl<T> Maybe<T> {
    // =========================================================================
    // Type Checking
    // =========================================================================

    /// Returns `true` if this is a `Some` value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use disjunct::union::Maybe;
    ///
    /// assert!(Maybe::Some(42).is_some());
    /// assert!(!Maybe::<i32>::None.is_some());
    /// ```
    #[inline]
    pub const fn is_some(&self) -> bool {
        matches!(self, Self::Some(_))
    }

    /// Returns `true` if this is `None`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use disjunct::union::Maybe;
    ///
    /// assert!(Maybe::<i32>::None.is_none());
    /// assert!(!Maybe::Some(42).is_none());
    /// ```
    #[inline]
    pub const fn is_none(&self) -> bool {
        matches!(self, Self::None)
    }

    // =========================================================================
    // Value Extraction
    // =========================================================================

    /// Converts the `Maybe` into an `Option<T>`, consuming the maybe.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use disjunct::union::Maybe;
    ///
    /// assert_eq!(Maybe::Some(42).get(), Some(42));
    /// assert_eq!(Maybe::<i32>::None.get(), None);
    /// ```
    #[inline]
    pub fn get(self) -> Option<T> {
        match self {
            Self::Some(value) => Some(value),
            Self::None => None,
        }
    }

    /// Returns a reference to the value if present.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use disjunct::union::Maybe;
    ///
    /// let present = Maybe::Some(42);
    /// assert_eq!(present.some_ref(), Some(&42));
    /// ```
    #[inline]
    pub const fn some_ref(&self) -> Option<&T> {
        match self {
            Self::Some(value) => Some(value),
            Self::None => None,
        }
    }

    // =========================================================================
    // Mapping Operations
    // =========================================================================

    /// Applies a function to the value if present.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use disjunct::union::Maybe;
    ///
    /// assert_eq!(Maybe::Some(21).map(|n| n * 2), Maybe::Some(42));
    /// assert_eq!(Maybe::<i32>::None.map(|n| n * 2), Maybe::None);
    /// ```
    #[inline]
    pub fn map<U, F>(self, function: F) -> Maybe<U>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Self::Some(value) => Maybe::Some(function(value)),
            Self::None => Maybe::None,
        }
    }

    /// Applies a maybe-returning function to the value if present.
    ///
    /// The monadic bind: the function's result is returned directly, without
    /// re-wrapping. `None` passes through and the function is not invoked.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use disjunct::union::Maybe;
    ///
    /// fn checked_half(n: i32) -> Maybe<i32> {
    ///     if n % 2 == 0 { Maybe::Some(n / 2) } else { Maybe::None }
    /// }
    ///
    /// assert_eq!(Maybe::Some(84).flat_map(checked_half), Maybe::Some(42));
    /// assert_eq!(Maybe::Some(7).flat_map(checked_half), Maybe::None);
    /// ```
    #[inline]
    pub fn flat_map<U, F>(self, function: F) -> Maybe<U>
    where
        F: FnOnce(T) -> Maybe<U>,
    {
        match self {
            Self::Some(value) => function(value),
            Self::None => Maybe::None,
        }
    }

    // =========================================================================
    // Fold Operation
    // =========================================================================

    /// Eliminates the Maybe by applying a function to the value, or invoking
    /// a supplier when absent.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use disjunct::union::Maybe;
    ///
    /// let present = Maybe::Some(42);
    /// assert_eq!(present.fold(|n| n.to_string(), || "absent".to_string()), "42");
    ///
    /// let absent: Maybe<i32> = Maybe::None;
    /// assert_eq!(absent.fold(|n| n.to_string(), || "absent".to_string()), "absent");
    /// ```
    #[inline]
    pub fn fold<U, F, G>(self, some_function: F, none_supplier: G) -> U
    where
        F: FnOnce(T) -> U,
        G: FnOnce() -> U,
    {
        match self {
            Self::Some(value) => some_function(value),
            Self::None => none_supplier(),
        }
    }

    // =========================================================================
    // Filter Operation
    // =========================================================================

    /// Tests the value against a predicate, dropping it to `None` on failure.
    ///
    /// There is no second payload to demote into, so a failing value is
    /// simply discarded. `None` passes through without invoking the
    /// predicate.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use disjunct::union::Maybe;
    ///
    /// assert_eq!(Maybe::Some(42).filter(|n| *n > 10), Maybe::Some(42));
    /// assert_eq!(Maybe::Some(4).filter(|n| *n > 10), Maybe::None);
    /// ```
    #[inline]
    pub fn filter<P>(self, predicate: P) -> Self
    where
        P: FnOnce(&T) -> bool,
    {
        match self {
            Self::Some(value) => {
                if predicate(&value) {
                    Self::Some(value)
                } else {
                    Self::None
                }
            }
            Self::None => Self::None,
        }
    }

    // =========================================================================
    // Asymmetric Folds
    // =========================================================================

    /// Returns the value, synthesizing one from the supplier when absent.
    ///
    /// The supplier is invoked only when this is `None`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use disjunct::union::Maybe;
    ///
    /// assert_eq!(Maybe::Some(42).recover(|| 0), 42);
    /// assert_eq!(Maybe::<i32>::None.recover(|| 0), 0);
    /// ```
    #[inline]
    pub fn recover<F>(self, supplier: F) -> T
    where
        F: FnOnce() -> T,
    {
        match self {
            Self::Some(value) => value,
            Self::None => supplier(),
        }
    }

    /// Returns the value, or the given default when absent.
    ///
    /// The default is evaluated eagerly; use [`recover`](Self::recover) when
    /// the alternative is expensive to build.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use disjunct::union::Maybe;
    ///
    /// assert_eq!(Maybe::Some(42).unwrap_or(0), 42);
    /// assert_eq!(Maybe::<i32>::None.unwrap_or(0), 0);
    /// ```
    #[inline]
    pub fn unwrap_or(self, default: T) -> T {
        match self {
            Self::Some(value) => value,
            Self::None => default,
        }
    }

    // =========================================================================
    // Inspection
    // =========================================================================

    /// Invokes a consumer on the value if present, returning the maybe
    /// unchanged.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use disjunct::union::Maybe;
    ///
    /// let mut seen = None;
    /// let unchanged = Maybe::Some(42).inspect(|n| seen = Some(*n));
    /// assert_eq!(seen, Some(42));
    /// assert_eq!(unchanged, Maybe::Some(42));
    /// ```
    #[inline]
    pub fn inspect<F>(self, function: F) -> Self
    where
        F: FnOnce(&T),
    {
        if let Self::Some(value) = &self {
            function(value);
        }
        self
    }

    // =========================================================================
    // Boolean Combinators
    // =========================================================================

    /// Returns `other` if this is a Some, otherwise `None`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use disjunct::union::Maybe;
    ///
    /// assert_eq!(Maybe::Some(1).and(Maybe::Some("two")), Maybe::Some("two"));
    /// assert_eq!(Maybe::<i32>::None.and(Maybe::Some("two")), Maybe::None);
    /// ```
    #[inline]
    pub fn and<U>(self, other: Maybe<U>) -> Maybe<U> {
        match self {
            Self::Some(_) => other,
            Self::None => Maybe::None,
        }
    }

    /// Returns `supplier()` if this is a Some, otherwise `None`.
    ///
    /// The lazy form of [`and`](Self::and): the supplier is not invoked when
    /// this is `None`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use disjunct::union::Maybe;
    ///
    /// let absent: Maybe<i32> = Maybe::None;
    /// let result: Maybe<i32> = absent.and_with(|| unreachable!("not taken"));
    /// assert_eq!(result, Maybe::None);
    /// ```
    #[inline]
    pub fn and_with<U, F>(self, supplier: F) -> Maybe<U>
    where
        F: FnOnce() -> Maybe<U>,
    {
        match self {
            Self::Some(_) => supplier(),
            Self::None => Maybe::None,
        }
    }

    /// Returns the Some unchanged, or `other` when absent.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use disjunct::union::Maybe;
    ///
    /// assert_eq!(Maybe::Some(1).or(Maybe::Some(2)), Maybe::Some(1));
    /// assert_eq!(Maybe::None.or(Maybe::Some(2)), Maybe::Some(2));
    /// ```
    #[inline]
    pub fn or(self, other: Self) -> Self {
        match self {
            Self::Some(value) => Self::Some(value),
            Self::None => other,
        }
    }

    /// Returns the Some unchanged, or `supplier()` when absent.
    ///
    /// The lazy form of [`or`](Self::or): the supplier is not invoked when
    /// this is a `Some`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use disjunct::union::Maybe;
    ///
    /// let present = Maybe::Some(1);
    /// let result = present.or_with(|| unreachable!("not taken"));
    /// assert_eq!(result, Maybe::Some(1));
    /// ```
    #[inline]
    pub fn or_with<F>(self, supplier: F) -> Self
    where
        F: FnOnce() -> Self,
    {
        match self {
            Self::Some(value) => Self::Some(value),
            Self::None => supplier(),
        }
    }

    // =========================================================================
    // Containment
    // =========================================================================

    /// Returns `true` if this is a `Some` holding a payload equal to `value`.
    ///
    /// `None` never matches, regardless of the comparison value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use disjunct::union::Maybe;
    ///
    /// assert!(Maybe::Some(42).contains(&42));
    /// assert!(!Maybe::Some(42).contains(&7));
    /// assert!(!Maybe::<i32>::None.contains(&42));
    /// ```
    #[inline]
    pub fn contains(&self, value: &T) -> bool
    where
        T: PartialEq,
    {
        match self {
            Self::Some(payload) => payload == value,
            Self::None => false,
        }
    }

    // =========================================================================
    // Unwrap Operations
    // =========================================================================

    /// Returns the value, consuming the maybe.
    ///
    /// # Panics
    ///
    /// Panics if this is `None`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use disjunct::union::Maybe;
    ///
    /// assert_eq!(Maybe::Some(42).unwrap(), 42);
    /// ```
    #[inline]
    pub fn unwrap(self) -> T {
        match self {
            Self::Some(value) => value,
            Self::None => panic!("called `Maybe::unwrap()` on a `None` value"),
        }
    }

    /// Returns the value, panicking with `message` when absent.
    ///
    /// # Panics
    ///
    /// Panics with `message` if this is `None`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use disjunct::union::Maybe;
    ///
    /// assert_eq!(Maybe::Some(42).expect("value must be present"), 42);
    /// ```
    #[inline]
    pub fn expect(self, message: &str) -> T {
        match self {
            Self::Some(value) => value,
            Self::None => panic!("{message}"),
        }
    }

    /// Returns the value, or an error built by the supplier when absent.
    ///
    /// The supplier is invoked only when this is `None`, so building an
    /// expensive error costs nothing on the present path.
    ///
    /// # Errors
    ///
    /// Returns `Err(to_error())` if this is `None`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use disjunct::union::Maybe;
    /// use std::io;
    ///
    /// let absent: Maybe<i32> = Maybe::None;
    /// let result = absent.get_or_raise(|| io::Error::from(io::ErrorKind::NotFound));
    /// assert_eq!(result.unwrap_err().kind(), io::ErrorKind::NotFound);
    /// ```
    #[inline]
    pub fn get_or_raise<X, F>(self, to_error: F) -> Result<T, X>
    where
        F: FnOnce() -> X,
    {
        match self {
            Self::Some(value) => Ok(value),
            Self::None => Err(to_error()),
        }
    }
}

// =============================================================================
// Default Implementation
// =============================================================================

impl<T> Default for Maybe<T> {
    /// Returns `None`, the shared absence marker.
    #[inline]
    fn default() -> Self {
        Self::None
    }
}

// =============================================================================
// Debug Implementation
// =============================================================================

impl<T: fmt::Debug> fmt::Debug for Maybe<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Some(value) => formatter.debug_tuple("Some").field(value).finish(),
            Self::None => formatter.write_str("None"),
        }
    }
}

// =============================================================================
// From Implementations
// =============================================================================

impl<T> From<Option<T>> for Maybe<T> {
    /// Converts an `Option` to a `Maybe`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use disjunct::union::Maybe;
    ///
    /// let maybe: Maybe<i32> = Some(42).into();
    /// assert_eq!(maybe, Maybe::Some(42));
    /// ```
    #[inline]
    fn from(option: Option<T>) -> Self {
        match option {
            Some(value) => Self::Some(value),
            None => Self::None,
        }
    }
}

impl<T> From<Maybe<T>> for Option<T> {
    /// Converts a `Maybe` to an `Option`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use disjunct::union::Maybe;
    ///
    /// let option: Option<i32> = Maybe::Some(42).into();
    /// assert_eq!(option, Some(42));
    /// ```
    #[inline]
    fn from(maybe: Maybe<T>) -> Self {
        maybe.get()
    }
}
