//! Try type - a failure-capturing union.
//!
//! This module provides the `Try<T>` type, which holds either a computed
//! value (`Success`) or a captured failure (`Failure`). Failures are stored
//! as ordinary data — a [`Caught`] payload wrapping the original error or
//! panic — so fallible pipelines can be composed without unwinding, and the
//! caller decides at the very end whether to recover or re-raise.
//!
//! Two kinds of raised condition exist:
//!
//! - **Capturable**: any `Error` returned by a callback, and any panic
//!   trapped at a [`Try::catching`] boundary. These become `Failure` values.
//! - **Fatal**: panic payloads of type [`Interrupt`], the crate's
//!   cooperative-cancellation signal. These are never captured; every trap
//!   re-raises them immediately so cancellation keeps propagating. (The
//!   other fatal conditions of a managed runtime — out of memory, stack
//!   overflow — abort the process in Rust and never reach a trap.)
//!
//! # Examples
//!
//! ```rust
//! use disjunct::union::Try;
//!
//! let parsed = Try::of(|| "21".parse::<i32>()).map(|n| n * 2);
//! assert_eq!(parsed.success(), Some(42));
//!
//! let failed = Try::of(|| "x".parse::<i32>());
//! assert!(failed.is_failure());
//! ```

use std::any::Any;
use std::error::Error;
use std::fmt;
use std::panic::{self, UnwindSafe};

/// A boxed error that can cross threads.
///
/// Every failure payload and suppressed secondary error in this module is
/// stored as one of these.
pub type BoxError = Box<dyn Error + Send + Sync + 'static>;

// =============================================================================
// Interrupt
// =============================================================================

/// A cooperative-cancellation signal that must never be captured.
///
/// Raising this as a panic payload (via `std::panic::panic_any`) marks the
/// unwind as fatal to every trap in this module: [`Try::catching`] and
/// friends re-raise it instead of wrapping it into a `Failure`, so the
/// signal keeps propagating to whatever owns the thread.
///
/// # Examples
///
/// ```rust,should_panic
/// use disjunct::union::{Interrupt, Try};
/// use std::panic;
///
/// // The trap refuses to swallow the interrupt; this call panics.
/// let _ = Try::catching(|| -> i32 { panic::panic_any(Interrupt::new()) });
/// ```
#[derive(Debug, Default)]
pub struct Interrupt {
    reason: Option<String>,
}

impl Interrupt {
    /// Creates an interrupt signal with no reason attached.
    #[inline]
    #[must_use]
    pub const fn new() -> Self {
        Self { reason: None }
    }

    /// Creates an interrupt signal carrying a human-readable reason.
    #[inline]
    pub fn with_reason(reason: impl Into<String>) -> Self {
        Self {
            reason: Some(reason.into()),
        }
    }

    /// Returns the attached reason, if any.
    #[inline]
    pub fn reason(&self) -> Option<&str> {
        self.reason.as_deref()
    }
}

impl fmt::Display for Interrupt {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.reason {
            Some(reason) => write!(formatter, "interrupted: {reason}"),
            None => formatter.write_str("interrupted"),
        }
    }
}

/// Whether a panic payload must be re-raised rather than captured.
fn is_fatal(payload: &(dyn Any + Send)) -> bool {
    payload.is::<Interrupt>()
}

// =============================================================================
// Caught
// =============================================================================

/// The failure payload of a [`Try`]: a captured cause plus any suppressed
/// secondary errors.
///
/// The cause is either a boxed [`Error`] (from a fallible callback) or a
/// panic payload (from a [`Try::catching`] trap). Suppressed errors are
/// attached when a cleanup step fails after the primary failure — see
/// [`using`] — and are carried alongside the cause without replacing it.
pub struct Caught {
    cause: Cause,
    suppressed: Vec<BoxError>,
}

enum Cause {
    Error(BoxError),
    Panic(Box<dyn Any + Send + 'static>),
}

impl Caught {
    /// Wraps an error as a captured failure cause.
    #[inline]
    pub fn from_error(error: impl Into<BoxError>) -> Self {
        Self {
            cause: Cause::Error(error.into()),
            suppressed: Vec::new(),
        }
    }

    /// Wraps a panic payload as a captured failure cause.
    ///
    /// Callers are expected to have checked for fatal payloads first; the
    /// trap factories on [`Try`] do this before reaching here.
    #[inline]
    #[must_use]
    pub fn from_panic(payload: Box<dyn Any + Send + 'static>) -> Self {
        Self {
            cause: Cause::Panic(payload),
            suppressed: Vec::new(),
        }
    }

    /// Returns `true` if the cause is a trapped panic rather than an error.
    #[inline]
    #[must_use]
    pub const fn is_panic(&self) -> bool {
        matches!(self.cause, Cause::Panic(_))
    }

    /// Returns the causal error, if the cause is an error.
    #[inline]
    #[must_use]
    pub fn error(&self) -> Option<&(dyn Error + 'static)> {
        match &self.cause {
            Cause::Error(error) => Some(&**error),
            Cause::Panic(_) => None,
        }
    }

    /// Returns the errors suppressed after the primary failure, oldest first.
    #[inline]
    #[must_use]
    pub fn suppressed(&self) -> &[BoxError] {
        &self.suppressed
    }

    /// Attaches a secondary error without replacing the primary cause.
    #[inline]
    pub fn suppress(&mut self, error: impl Into<BoxError>) {
        self.suppressed.push(error.into());
    }

    /// Renders the cause as a human-readable message.
    ///
    /// Panic payloads carry a message only when they are `&str` or `String`
    /// (the payloads produced by the `panic!` macro); anything else renders
    /// as an opaque placeholder.
    #[must_use]
    pub fn message(&self) -> String {
        match &self.cause {
            Cause::Error(error) => error.to_string(),
            Cause::Panic(payload) => panic_message(payload.as_ref()).to_string(),
        }
    }

    /// Re-raises the captured cause, consuming the payload.
    ///
    /// A trapped panic is resumed with its original payload, preserving its
    /// identity for downstream traps; an error cause is wrapped in a new
    /// panic carrying the rendered message.
    pub(crate) fn resume(self, context: &str) -> ! {
        match self.cause {
            Cause::Error(error) => panic!("{context}: {error}"),
            Cause::Panic(payload) => panic::resume_unwind(payload),
        }
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> &str {
    if let Some(text) = payload.downcast_ref::<&str>() {
        text
    } else if let Some(text) = payload.downcast_ref::<String>() {
        text.as_str()
    } else {
        "panic payload of unknown type"
    }
}

impl fmt::Display for Caught {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(&self.message())?;
        if !self.suppressed.is_empty() {
            write!(formatter, " ({} suppressed)", self.suppressed.len())?;
        }
        Ok(())
    }
}

impl fmt::Debug for Caught {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("Caught")
            .field("message", &self.message())
            .field("is_panic", &self.is_panic())
            .field("suppressed", &self.suppressed.len())
            .finish()
    }
}

impl Error for Caught {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        self.error()
    }
}

impl From<BoxError> for Caught {
    #[inline]
    fn from(error: BoxError) -> Self {
        Self::from_error(error)
    }
}

// =============================================================================
// Try
// =============================================================================

/// A computed value or a captured failure.
///
/// `Try<T>` is success-biased: combinators without a failure-oriented name
/// act on the `Success` payload and pass `Failure` values through untouched.
/// Failure payloads are type-erased ([`Caught`]), so `Try` has no structural
/// equality; inspect the variant instead.
///
/// Fallibility is explicit in the combinator signatures: [`try_map`] and
/// [`try_recover`] accept `Result`-returning callbacks whose errors are
/// captured, while panics are trapped only at the [`catching`] construction
/// boundaries.
///
/// [`try_map`]: Self::try_map
/// [`try_recover`]: Self::try_recover
/// [`catching`]: Self::catching
///
/// # Examples
///
/// ```rust
/// use disjunct::union::Try;
///
/// let pipeline = Try::of(|| "84".parse::<i32>())
///     .try_map(|n| u8::try_from(n))
///     .map(|n| n / 2);
/// assert_eq!(pipeline.success(), Some(42));
/// ```
pub enum Try<T> {
    /// The computed value.
    Success(T),
    /// The captured failure.
    Failure(Caught),
}

impl<T> Try<T> {
    // =========================================================================
    // Construction
    // =========================================================================

    /// Wraps a value as a `Success`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use disjunct::union::Try;
    ///
    /// let value = Try::success(42);
    /// assert!(value.is_success());
    /// ```
    #[inline]
    pub const fn success(value: T) -> Self {
        Self::Success(value)
    }

    /// Wraps an error as a `Failure`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use disjunct::union::Try;
    /// use std::io;
    ///
    /// let value: Try<i32> = Try::failure(io::Error::from(io::ErrorKind::NotFound));
    /// assert!(value.is_failure());
    /// ```
    #[inline]
    pub fn failure(error: impl Into<BoxError>) -> Self {
        Self::Failure(Caught::from_error(error))
    }

    /// Runs a fallible supplier, capturing a returned error as a `Failure`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use disjunct::union::Try;
    ///
    /// let parsed = Try::of(|| "42".parse::<i32>());
    /// assert_eq!(parsed.success(), Some(42));
    ///
    /// let failed = Try::of(|| "x".parse::<i32>());
    /// assert!(failed.is_failure());
    /// ```
    #[inline]
    pub fn of<E, F>(supplier: F) -> Self
    where
        E: Into<BoxError>,
        F: FnOnce() -> Result<T, E>,
    {
        match supplier() {
            Ok(value) => Self::Success(value),
            Err(error) => Self::Failure(Caught::from_error(error)),
        }
    }

    /// Runs a supplier inside a panic trap, capturing a non-fatal panic as a
    /// `Failure`.
    ///
    /// Fatal payloads — [`Interrupt`] — are re-raised immediately instead of
    /// being wrapped.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use disjunct::union::Try;
    ///
    /// let trapped: Try<i32> = Try::catching(|| panic!("boom"));
    /// assert!(trapped.is_failure());
    /// ```
    pub fn catching<F>(supplier: F) -> Self
    where
        F: FnOnce() -> T + UnwindSafe,
    {
        match panic::catch_unwind(supplier) {
            Ok(value) => Self::Success(value),
            Err(payload) => {
                if is_fatal(payload.as_ref()) {
                    panic::resume_unwind(payload)
                }
                Self::Failure(Caught::from_panic(payload))
            }
        }
    }

    /// Runs a supplier inside a panic trap that captures only payloads of
    /// type `P`, re-raising everything else.
    ///
    /// The type parameter plays the role of a class token: whether a trapped
    /// payload is wrapped or re-raised is purely a question of its type.
    /// Fatal payloads are re-raised even when `P` would match them.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use disjunct::union::Try;
    /// use std::panic;
    ///
    /// struct Recoverable(&'static str);
    ///
    /// let trapped: Try<i32> =
    ///     Try::catching_as::<Recoverable, _>(|| panic::panic_any(Recoverable("soft")));
    /// assert!(trapped.is_failure());
    /// ```
    pub fn catching_as<P, F>(supplier: F) -> Self
    where
        P: Any,
        F: FnOnce() -> T + UnwindSafe,
    {
        match panic::catch_unwind(supplier) {
            Ok(value) => Self::Success(value),
            Err(payload) => {
                if is_fatal(payload.as_ref()) || !payload.is::<P>() {
                    panic::resume_unwind(payload)
                }
                Self::Failure(Caught::from_panic(payload))
            }
        }
    }

    // =========================================================================
    // Type Checking
    // =========================================================================

    /// Returns `true` if this is a `Success` value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use disjunct::union::Try;
    ///
    /// assert!(Try::success(42).is_success());
    /// ```
    #[inline]
    pub const fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }

    /// Returns `true` if this is a `Failure` value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use disjunct::union::Try;
    /// use std::io;
    ///
    /// let failed: Try<i32> = Try::failure(io::Error::from(io::ErrorKind::NotFound));
    /// assert!(failed.is_failure());
    /// ```
    #[inline]
    pub const fn is_failure(&self) -> bool {
        matches!(self, Self::Failure(_))
    }

    // =========================================================================
    // Value Extraction
    // =========================================================================

    /// Converts into an `Option` of the success value, consuming the try.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use disjunct::union::Try;
    ///
    /// assert_eq!(Try::success(42).success(), Some(42));
    /// ```
    #[inline]
    pub fn success(self) -> Option<T> {
        match self {
            Self::Success(value) => Some(value),
            Self::Failure(_) => None,
        }
    }

    /// Converts into an `Option` of the captured failure, consuming the try.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use disjunct::union::Try;
    ///
    /// let failed: Try<i32> = Try::of(|| "x".parse::<i32>());
    /// assert!(failed.failure().is_some());
    /// ```
    #[inline]
    pub fn failure(self) -> Option<Caught> {
        match self {
            Self::Success(_) => None,
            Self::Failure(caught) => Some(caught),
        }
    }

    /// Returns a reference to the success value if present.
    #[inline]
    pub const fn success_ref(&self) -> Option<&T> {
        match self {
            Self::Success(value) => Some(value),
            Self::Failure(_) => None,
        }
    }

    /// Returns a reference to the captured failure if present.
    #[inline]
    pub const fn failure_ref(&self) -> Option<&Caught> {
        match self {
            Self::Success(_) => None,
            Self::Failure(caught) => Some(caught),
        }
    }

    // =========================================================================
    // Mapping Operations
    // =========================================================================

    /// Applies an infallible function to the success value if present.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use disjunct::union::Try;
    ///
    /// assert_eq!(Try::success(21).map(|n| n * 2).success(), Some(42));
    /// ```
    #[inline]
    pub fn map<U, F>(self, function: F) -> Try<U>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Self::Success(value) => Try::Success(function(value)),
            Self::Failure(caught) => Try::Failure(caught),
        }
    }

    /// Applies a fallible function to the success value, capturing a
    /// returned error as a `Failure`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use disjunct::union::Try;
    ///
    /// let narrowed = Try::success(300).try_map(|n: i32| u8::try_from(n));
    /// assert!(narrowed.is_failure());
    /// ```
    #[inline]
    pub fn try_map<U, E, F>(self, function: F) -> Try<U>
    where
        E: Into<BoxError>,
        F: FnOnce(T) -> Result<U, E>,
    {
        match self {
            Self::Success(value) => match function(value) {
                Ok(mapped) => Try::Success(mapped),
                Err(error) => Try::Failure(Caught::from_error(error)),
            },
            Self::Failure(caught) => Try::Failure(caught),
        }
    }

    /// Applies a try-returning function to the success value if present.
    ///
    /// The monadic bind: the function's result is returned directly, without
    /// re-wrapping. A `Failure` passes through and the function is not
    /// invoked.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use disjunct::union::Try;
    ///
    /// let chained = Try::success("21").flat_map(|text| {
    ///     Try::of(|| text.parse::<i32>()).map(|n| n * 2)
    /// });
    /// assert_eq!(chained.success(), Some(42));
    /// ```
    #[inline]
    pub fn flat_map<U, F>(self, function: F) -> Try<U>
    where
        F: FnOnce(T) -> Try<U>,
    {
        match self {
            Self::Success(value) => function(value),
            Self::Failure(caught) => Try::Failure(caught),
        }
    }

    // =========================================================================
    // Fold Operation
    // =========================================================================

    /// Eliminates the Try by applying one of two functions.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use disjunct::union::Try;
    ///
    /// let message = Try::success(42).fold(
    ///     |n| format!("got {n}"),
    ///     |caught| format!("failed: {caught}"),
    /// );
    /// assert_eq!(message, "got 42");
    /// ```
    #[inline]
    pub fn fold<U, F, G>(self, success_function: F, failure_function: G) -> U
    where
        F: FnOnce(T) -> U,
        G: FnOnce(Caught) -> U,
    {
        match self {
            Self::Success(value) => success_function(value),
            Self::Failure(caught) => failure_function(caught),
        }
    }

    // =========================================================================
    // Filter Operation
    // =========================================================================

    /// Tests the success value against a predicate, demoting it to `Failure`
    /// on failure.
    ///
    /// A `Failure` passes through without invoking either function.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use disjunct::union::Try;
    /// use std::io;
    ///
    /// let rejected = Try::success(4).filter(
    ///     |n| *n > 10,
    ///     |n| io::Error::new(io::ErrorKind::InvalidData, format!("too small: {n}")),
    /// );
    /// assert!(rejected.is_failure());
    /// ```
    #[inline]
    pub fn filter<P, E, F>(self, predicate: P, else_mapper: F) -> Self
    where
        P: FnOnce(&T) -> bool,
        E: Into<BoxError>,
        F: FnOnce(T) -> E,
    {
        match self {
            Self::Success(value) => {
                if predicate(&value) {
                    Self::Success(value)
                } else {
                    Self::Failure(Caught::from_error(else_mapper(value)))
                }
            }
            Self::Failure(caught) => Self::Failure(caught),
        }
    }

    // =========================================================================
    // Recovery
    // =========================================================================

    /// Returns the success value, synthesizing one from the failure via
    /// `function`.
    ///
    /// The function is invoked only when this is a `Failure`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use disjunct::union::Try;
    ///
    /// let failed: Try<i32> = Try::of(|| "x".parse::<i32>());
    /// assert_eq!(failed.recover(|_| 0), 0);
    /// ```
    #[inline]
    pub fn recover<F>(self, function: F) -> T
    where
        F: FnOnce(Caught) -> T,
    {
        match self {
            Self::Success(value) => value,
            Self::Failure(caught) => function(caught),
        }
    }

    /// Attempts to recover from a failure with a fallible function; a
    /// failing recovery produces a new `Failure`.
    ///
    /// Failure propagation is total: errors raised while handling a failure
    /// are themselves captured, never silently dropped.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use disjunct::union::Try;
    ///
    /// let failed: Try<i32> = Try::of(|| "x".parse::<i32>());
    /// let recovered = failed.try_recover(|_| "42".parse::<i32>());
    /// assert_eq!(recovered.success(), Some(42));
    ///
    /// let failed: Try<i32> = Try::of(|| "x".parse::<i32>());
    /// let still_failed = failed.try_recover(|_| "y".parse::<i32>());
    /// assert!(still_failed.is_failure());
    /// ```
    #[inline]
    pub fn try_recover<E, F>(self, function: F) -> Self
    where
        E: Into<BoxError>,
        F: FnOnce(Caught) -> Result<T, E>,
    {
        match self {
            Self::Success(value) => Self::Success(value),
            Self::Failure(caught) => match function(caught) {
                Ok(value) => Self::Success(value),
                Err(error) => Self::Failure(Caught::from_error(error)),
            },
        }
    }

    /// Returns the success value, or the given default on failure.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use disjunct::union::Try;
    ///
    /// let failed: Try<i32> = Try::of(|| "x".parse::<i32>());
    /// assert_eq!(failed.unwrap_or(0), 0);
    /// ```
    #[inline]
    pub fn unwrap_or(self, default: T) -> T {
        match self {
            Self::Success(value) => value,
            Self::Failure(_) => default,
        }
    }

    // =========================================================================
    // Inspection
    // =========================================================================

    /// Invokes a consumer on the success value, returning the try unchanged.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use disjunct::union::Try;
    ///
    /// let mut seen = None;
    /// let unchanged = Try::success(42).inspect(|n| seen = Some(*n));
    /// assert_eq!(seen, Some(42));
    /// assert!(unchanged.is_success());
    /// ```
    #[inline]
    pub fn inspect<F>(self, function: F) -> Self
    where
        F: FnOnce(&T),
    {
        if let Self::Success(value) = &self {
            function(value);
        }
        self
    }

    /// Invokes a consumer on the captured failure, returning the try
    /// unchanged.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use disjunct::union::Try;
    ///
    /// let mut message = None;
    /// let failed: Try<i32> = Try::of(|| "x".parse::<i32>());
    /// let unchanged = failed.inspect_failure(|caught| message = Some(caught.message()));
    /// assert!(message.is_some());
    /// assert!(unchanged.is_failure());
    /// ```
    #[inline]
    pub fn inspect_failure<F>(self, function: F) -> Self
    where
        F: FnOnce(&Caught),
    {
        if let Self::Failure(caught) = &self {
            function(caught);
        }
        self
    }

    // =========================================================================
    // Boolean Combinators
    // =========================================================================

    /// Returns `other` if this is a Success, otherwise propagates the
    /// Failure.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use disjunct::union::Try;
    ///
    /// let second = Try::success(1).and(Try::success("two"));
    /// assert_eq!(second.success(), Some("two"));
    /// ```
    #[inline]
    pub fn and<U>(self, other: Try<U>) -> Try<U> {
        match self {
            Self::Success(_) => other,
            Self::Failure(caught) => Try::Failure(caught),
        }
    }

    /// Returns `supplier()` if this is a Success, otherwise propagates the
    /// Failure.
    ///
    /// The lazy form of [`and`](Self::and): the supplier is not invoked when
    /// this is a `Failure`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use disjunct::union::Try;
    ///
    /// let failed: Try<i32> = Try::of(|| "x".parse::<i32>());
    /// let result: Try<i32> = failed.and_with(|| unreachable!("not taken"));
    /// assert!(result.is_failure());
    /// ```
    #[inline]
    pub fn and_with<U, F>(self, supplier: F) -> Try<U>
    where
        F: FnOnce() -> Try<U>,
    {
        match self {
            Self::Success(_) => supplier(),
            Self::Failure(caught) => Try::Failure(caught),
        }
    }

    /// Returns the Success unchanged, or `other` on failure.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use disjunct::union::Try;
    ///
    /// let failed: Try<i32> = Try::of(|| "x".parse::<i32>());
    /// assert_eq!(failed.or(Try::success(0)).success(), Some(0));
    /// ```
    #[inline]
    pub fn or(self, other: Self) -> Self {
        match self {
            Self::Success(value) => Self::Success(value),
            Self::Failure(_) => other,
        }
    }

    /// Returns the Success unchanged, or `supplier()` on failure.
    ///
    /// The lazy form of [`or`](Self::or): the supplier is not invoked when
    /// this is a `Success`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use disjunct::union::Try;
    ///
    /// let result = Try::success(1).or_with(|| unreachable!("not taken"));
    /// assert_eq!(result.success(), Some(1));
    /// ```
    #[inline]
    pub fn or_with<F>(self, supplier: F) -> Self
    where
        F: FnOnce() -> Self,
    {
        match self {
            Self::Success(value) => Self::Success(value),
            Self::Failure(_) => supplier(),
        }
    }

    // =========================================================================
    // Unwrap Operations
    // =========================================================================

    /// Returns the success value, re-raising the captured failure otherwise.
    ///
    /// # Panics
    ///
    /// Panics if this is a `Failure`. A failure trapped from a panic is
    /// resumed with its **original payload**, preserving its identity for
    /// outer traps; an error-caused failure panics with the rendered cause.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use disjunct::union::Try;
    ///
    /// assert_eq!(Try::success(42).unwrap(), 42);
    /// ```
    #[inline]
    pub fn unwrap(self) -> T {
        match self {
            Self::Success(value) => value,
            Self::Failure(caught) => caught.resume("called `Try::unwrap()` on a `Failure`"),
        }
    }

    /// Returns the success value, re-raising the captured failure with
    /// `message` as context otherwise.
    ///
    /// # Panics
    ///
    /// Panics if this is a `Failure`, with the same re-raise semantics as
    /// [`unwrap`](Self::unwrap).
    ///
    /// # Examples
    ///
    /// ```rust
    /// use disjunct::union::Try;
    ///
    /// assert_eq!(Try::success(42).expect("value must be present"), 42);
    /// ```
    #[inline]
    pub fn expect(self, message: &str) -> T {
        match self {
            Self::Success(value) => value,
            Self::Failure(caught) => caught.resume(message),
        }
    }

    /// Returns the success value, or an error built from the captured
    /// failure.
    ///
    /// The error mapper is invoked only when this is a `Failure`.
    ///
    /// # Errors
    ///
    /// Returns `Err(to_error(caught))` if this is a `Failure`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use disjunct::union::Try;
    ///
    /// let failed: Try<i32> = Try::of(|| "x".parse::<i32>());
    /// let result = failed.get_or_raise(|caught| caught.message());
    /// assert!(result.is_err());
    /// ```
    #[inline]
    pub fn get_or_raise<X, F>(self, to_error: F) -> Result<T, X>
    where
        F: FnOnce(Caught) -> X,
    {
        match self {
            Self::Success(value) => Ok(value),
            Self::Failure(caught) => Err(to_error(caught)),
        }
    }

    // =========================================================================
    // Conversion Operations
    // =========================================================================

    /// Converts into a `std::result::Result`, consuming the try.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use disjunct::union::Try;
    ///
    /// let result = Try::success(42).into_result();
    /// assert!(matches!(result, Ok(42)));
    /// ```
    #[inline]
    pub fn into_result(self) -> Result<T, Caught> {
        match self {
            Self::Success(value) => Ok(value),
            Self::Failure(caught) => Err(caught),
        }
    }
}

// =============================================================================
// Debug Implementation
// =============================================================================

impl<T: fmt::Debug> fmt::Debug for Try<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Success(value) => formatter.debug_tuple("Success").field(value).finish(),
            Self::Failure(caught) => formatter.debug_tuple("Failure").field(caught).finish(),
        }
    }
}

// =============================================================================
// From Implementations
// =============================================================================

impl<T, E: Into<BoxError>> From<Result<T, E>> for Try<T> {
    /// Converts a `std::result::Result` to a `Try`, capturing the error.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use disjunct::union::Try;
    ///
    /// let parsed: Try<i32> = "42".parse::<i32>().into();
    /// assert_eq!(parsed.success(), Some(42));
    /// ```
    #[inline]
    fn from(result: Result<T, E>) -> Self {
        match result {
            Ok(value) => Self::Success(value),
            Err(error) => Self::Failure(Caught::from_error(error)),
        }
    }
}

// =============================================================================
// Scoped Resources
// =============================================================================

/// A resource with a fallible release step.
///
/// `Drop` cannot report errors; resources whose close can fail (flushing
/// writers, syncing files, committing transactions) implement this trait so
/// [`using`] can surface a close-time error instead of discarding it.
pub trait Dispose {
    /// Releases the resource, reporting a close-time failure.
    ///
    /// # Errors
    ///
    /// Returns the error raised while releasing, if any.
    fn dispose(self) -> Result<(), BoxError>;
}

impl Dispose for std::fs::File {
    /// Syncs all buffered state to disk before the handle closes.
    fn dispose(self) -> Result<(), BoxError> {
        self.sync_all().map_err(Into::into)
    }
}

/// Holds a resource and guarantees a best-effort dispose if the owning call
/// unwinds before an explicit release.
struct DisposeGuard<R: Dispose> {
    slot: Option<R>,
}

impl<R: Dispose> DisposeGuard<R> {
    const fn new(resource: R) -> Self {
        Self {
            slot: Some(resource),
        }
    }

    fn resource_mut(&mut self) -> &mut R {
        match &mut self.slot {
            Some(resource) => resource,
            None => unreachable!("resource already released"),
        }
    }

    fn release(mut self) -> Result<(), BoxError> {
        match self.slot.take() {
            Some(resource) => resource.dispose(),
            None => Ok(()),
        }
    }
}

impl<R: Dispose> Drop for DisposeGuard<R> {
    fn drop(&mut self) {
        if let Some(resource) = self.slot.take() {
            // Unwinding past the guard: the panic wins, the close error is lost.
            let _ = resource.dispose();
        }
    }
}

/// Acquires a resource, runs `body` on it, and disposes it on every exit
/// path.
///
/// - Acquisition failure becomes a `Failure` without running `body`.
/// - A `body` error becomes the primary failure; if disposal also fails, the
///   close error is attached as suppressed context.
/// - On `body` success, a failing disposal alone yields a `Failure`.
/// - If `body` panics, the resource is still disposed before the unwind
///   continues.
///
/// # Examples
///
/// ```rust
/// use disjunct::union::{using, BoxError, Dispose};
///
/// struct Session(Vec<String>);
///
/// impl Dispose for Session {
///     fn dispose(self) -> Result<(), BoxError> {
///         Ok(())
///     }
/// }
///
/// let result = using(
///     || Ok::<_, BoxError>(Session(Vec::new())),
///     |session| {
///         session.0.push("hello".to_string());
///         Ok::<_, BoxError>(session.0.len())
///     },
/// );
/// assert_eq!(result.success(), Some(1));
/// ```
pub fn using<R, T, A, B, E1, E2>(acquire: A, body: B) -> Try<T>
where
    R: Dispose,
    A: FnOnce() -> Result<R, E1>,
    B: FnOnce(&mut R) -> Result<T, E2>,
    E1: Into<BoxError>,
    E2: Into<BoxError>,
{
    let resource = match acquire() {
        Ok(resource) => resource,
        Err(error) => return Try::Failure(Caught::from_error(error)),
    };

    let mut guard = DisposeGuard::new(resource);
    let produced = body(guard.resource_mut());
    let released = guard.release();

    match (produced, released) {
        (Ok(value), Ok(())) => Try::Success(value),
        (Ok(_), Err(close_error)) => Try::Failure(Caught::from_error(close_error)),
        (Err(body_error), Ok(())) => Try::Failure(Caught::from_error(body_error)),
        (Err(body_error), Err(close_error)) => {
            let mut caught = Caught::from_error(body_error);
            caught.suppress(close_error);
            Try::Failure(caught)
        }
    }
}

/// Acquires two resources in order, runs `body` on both, and disposes them
/// in reverse acquisition order on every exit path.
///
/// Failure combination follows [`using`]: the body's error is always the
/// primary cause, with close-time errors suppressed into it; when only the
/// closes fail, the second resource's error is primary (it closed first).
/// If the second acquisition fails, the first resource is disposed and any
/// close error is suppressed into the acquisition failure.
pub fn using_pair<R1, R2, T, A1, A2, B, E1, E2, E3>(
    acquire_first: A1,
    acquire_second: A2,
    body: B,
) -> Try<T>
where
    R1: Dispose,
    R2: Dispose,
    A1: FnOnce() -> Result<R1, E1>,
    A2: FnOnce() -> Result<R2, E2>,
    B: FnOnce(&mut R1, &mut R2) -> Result<T, E3>,
    E1: Into<BoxError>,
    E2: Into<BoxError>,
    E3: Into<BoxError>,
{
    let first = match acquire_first() {
        Ok(resource) => resource,
        Err(error) => return Try::Failure(Caught::from_error(error)),
    };
    let mut first_guard = DisposeGuard::new(first);

    let second = match acquire_second() {
        Ok(resource) => resource,
        Err(error) => {
            let mut caught = Caught::from_error(error);
            if let Err(close_error) = first_guard.release() {
                caught.suppress(close_error);
            }
            return Try::Failure(caught);
        }
    };
    let mut second_guard = DisposeGuard::new(second);

    let produced = body(first_guard.resource_mut(), second_guard.resource_mut());

    // Reverse acquisition order.
    let second_released = second_guard.release();
    let first_released = first_guard.release();

    match produced {
        Ok(value) => match (second_released, first_released) {
            (Ok(()), Ok(())) => Try::Success(value),
            (Err(second_error), Ok(())) => Try::Failure(Caught::from_error(second_error)),
            (Ok(()), Err(first_error)) => Try::Failure(Caught::from_error(first_error)),
            (Err(second_error), Err(first_error)) => {
                let mut caught = Caught::from_error(second_error);
                caught.suppress(first_error);
                Try::Failure(caught)
            }
        },
        Err(body_error) => {
            let mut caught = Caught::from_error(body_error);
            if let Err(second_error) = second_released {
                caught.suppress(second_error);
            }
            if let Err(first_error) = first_released {
                caught.suppress(first_error);
            }
            Try::Failure(caught)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::cell::Cell;
    use std::io;

    static_assertions::assert_impl_all!(Try<i32>: Send);
    static_assertions::assert_not_impl_any!(Caught: Sync);

    fn io_error(message: &str) -> io::Error {
        io::Error::other(message.to_string())
    }

    #[rstest]
    fn test_of_captures_returned_error() {
        let failed: Try<i32> = Try::of(|| "x".parse::<i32>());
        assert!(failed.is_failure());

        let caught = failed.failure().expect("failure payload");
        assert!(!caught.is_panic());
        assert!(caught.error().is_some());
    }

    #[rstest]
    fn test_catching_traps_panic_payload() {
        let trapped: Try<i32> = Try::catching(|| panic!("boom"));
        let caught = trapped.failure().expect("failure payload");
        assert!(caught.is_panic());
        assert_eq!(caught.message(), "boom");
    }

    #[rstest]
    fn test_catching_reraises_interrupt() {
        let unwound = panic::catch_unwind(|| {
            Try::catching(|| -> i32 { panic::panic_any(Interrupt::with_reason("shutdown")) })
        });
        let payload = unwound.expect_err("interrupt must propagate");
        let interrupt = payload
            .downcast::<Interrupt>()
            .unwrap_or_else(|_| panic!("payload must keep its identity"));
        assert_eq!(interrupt.reason(), Some("shutdown"));
    }

    #[rstest]
    fn test_catching_as_reraises_unmatched_payload() {
        struct Soft;
        struct Hard;

        let trapped = panic::catch_unwind(|| {
            Try::catching_as::<Soft, _>(|| -> i32 { panic::panic_any(Hard) })
        });
        assert!(trapped.is_err());

        let wrapped: Try<i32> = Try::catching_as::<Soft, _>(|| panic::panic_any(Soft));
        assert!(wrapped.is_failure());
    }

    #[rstest]
    fn test_try_map_captures_on_success_path() {
        let narrowed = Try::success(300).try_map(|n: i32| u8::try_from(n));
        assert!(narrowed.is_failure());

        let kept = Try::success(42).try_map(|n: i32| u8::try_from(n));
        assert_eq!(kept.success(), Some(42u8));
    }

    #[rstest]
    fn test_try_recover_failure_stays_failure() {
        let failed: Try<i32> = Try::of(|| "x".parse::<i32>());
        let still_failed = failed.try_recover(|_| "y".parse::<i32>());
        assert!(still_failed.is_failure());
    }

    #[rstest]
    fn test_unwrap_resumes_original_panic_payload() {
        struct Marker(u64);

        let trapped: Try<i32> = Try::catching_as::<Marker, _>(|| panic::panic_any(Marker(7)));
        let unwound = panic::catch_unwind(panic::AssertUnwindSafe(|| trapped.unwrap()));
        let payload = unwound.expect_err("failure must re-raise");
        let marker = payload
            .downcast::<Marker>()
            .unwrap_or_else(|_| panic!("payload must keep its identity"));
        assert_eq!(marker.0, 7);
    }

    #[rstest]
    fn test_and_with_not_invoked_on_failure() {
        let failed: Try<i32> = Try::of(|| "x".parse::<i32>());
        let result: Try<i32> = failed.and_with(|| panic!("supplier must not run"));
        assert!(result.is_failure());
    }

    #[rstest]
    fn test_or_with_not_invoked_on_success() {
        let result = Try::success(1).or_with(|| panic!("supplier must not run"));
        assert_eq!(result.success(), Some(1));
    }

    struct Probe<'a> {
        close_error: Option<&'a str>,
        disposed: &'a Cell<bool>,
    }

    impl Dispose for Probe<'_> {
        fn dispose(self) -> Result<(), BoxError> {
            self.disposed.set(true);
            match self.close_error {
                Some(message) => Err(io_error(message).into()),
                None => Ok(()),
            }
        }
    }

    #[rstest]
    fn test_using_disposes_on_success() {
        let disposed = Cell::new(false);
        let result = using(
            || {
                Ok::<_, BoxError>(Probe {
                    close_error: None,
                    disposed: &disposed,
                })
            },
            |_| Ok::<_, BoxError>(42),
        );
        assert_eq!(result.success(), Some(42));
        assert!(disposed.get());
    }

    #[rstest]
    fn test_using_suppresses_close_error_under_body_error() {
        let disposed = Cell::new(false);
        let result: Try<i32> = using(
            || {
                Ok::<_, BoxError>(Probe {
                    close_error: Some("close failed"),
                    disposed: &disposed,
                })
            },
            |_| Err(io_error("body failed")),
        );

        let caught = result.failure().expect("failure payload");
        assert_eq!(caught.message(), "body failed");
        assert_eq!(caught.suppressed().len(), 1);
        assert_eq!(caught.suppressed()[0].to_string(), "close failed");
        assert!(disposed.get());
    }

    #[rstest]
    fn test_using_disposes_when_body_panics() {
        let disposed = Cell::new(false);
        let unwound = panic::catch_unwind(panic::AssertUnwindSafe(|| {
            using(
                || {
                    Ok::<_, BoxError>(Probe {
                        close_error: None,
                        disposed: &disposed,
                    })
                },
                |_| -> Result<i32, BoxError> { panic!("body blew up") },
            )
        }));
        assert!(unwound.is_err());
        assert!(disposed.get());
    }

    #[rstest]
    fn test_using_pair_disposes_in_reverse_order() {
        let order = std::cell::RefCell::new(Vec::new());

        struct Ordered<'a> {
            name: &'static str,
            order: &'a std::cell::RefCell<Vec<&'static str>>,
        }

        impl Dispose for Ordered<'_> {
            fn dispose(self) -> Result<(), BoxError> {
                self.order.borrow_mut().push(self.name);
                Ok(())
            }
        }

        let result = using_pair(
            || {
                Ok::<_, BoxError>(Ordered {
                    name: "first",
                    order: &order,
                })
            },
            || {
                Ok::<_, BoxError>(Ordered {
                    name: "second",
                    order: &order,
                })
            },
            |_, _| Ok::<_, BoxError>(()),
        );
        assert!(result.is_success());
        assert_eq!(*order.borrow(), vec!["second", "first"]);
    }

    #[rstest]
    fn test_using_pair_failed_second_acquire_disposes_first() {
        let disposed = Cell::new(false);
        let result: Try<i32> = using_pair(
            || {
                Ok::<_, BoxError>(Probe {
                    close_error: Some("first close failed"),
                    disposed: &disposed,
                })
            },
            || Err::<Probe<'_>, _>(io_error("second acquire failed")),
            |_, _| Ok::<_, BoxError>(0),
        );

        let caught = result.failure().expect("failure payload");
        assert_eq!(caught.message(), "second acquire failed");
        assert_eq!(caught.suppressed().len(), 1);
        assert!(disposed.get());
    }
}
