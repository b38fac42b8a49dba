//! The `Outcomes` facade.

use crate::gather::{
    self, BiFlatMap, BiMap, FilterErr, FilterOk, FlatMapErr, FlatMapOk, Gather, GatherExt,
    MapErr, MapOk, UntilErr, UntilOk,
};
use crate::union::{Maybe, Outcome};

/// A sequence of [`Outcome`] values with variant-aware operations.
///
/// The facade adds two things to the iterator it wraps: the gatherer stages
/// as chainable adapters, and terminal operations that project one variant
/// out of each element before delegating to the engine. It introduces no
/// evaluation semantics of its own — `Outcomes` is an [`Iterator`], and any
/// operation it does not name is available through that impl unchanged.
///
/// # Examples
///
/// ```rust
/// use disjunct::seq::IntoOutcomes;
/// use disjunct::union::Outcome;
///
/// let elements: Vec<Outcome<i32, String>> = vec![
///     Outcome::Ok(1),
///     Outcome::Ok(12),
///     Outcome::Err("bad".to_string()),
/// ];
///
/// let kept: Vec<i32> = elements
///     .into_iter()
///     .outcomes()
///     .filter_ok(|n| *n > 10)
///     .oks()
///     .collect();
/// assert_eq!(kept, vec![12]);
/// ```
#[derive(Clone, Debug)]
pub struct Outcomes<I> {
    inner: I,
}

impl<T, E, I> Outcomes<I>
where
    I: Iterator<Item = Outcome<T, E>>,
{
    /// Wraps an iterator of outcomes.
    #[inline]
    pub const fn new(inner: I) -> Self {
        Self { inner }
    }

    /// Unwraps the facade, returning the underlying iterator.
    #[inline]
    pub fn into_inner(self) -> I {
        self.inner
    }

    // =========================================================================
    // Stage Adapters
    // =========================================================================

    /// Short-circuits the sequence after the first `Err` element.
    ///
    /// See [`gather::until_err`].
    #[inline]
    pub fn until_err(self) -> Outcomes<Gather<I, UntilErr>> {
        Outcomes::new(self.inner.gather(gather::until_err()))
    }

    /// Short-circuits the sequence after the first `Ok` element.
    ///
    /// See [`gather::until_ok`].
    #[inline]
    pub fn until_ok(self) -> Outcomes<Gather<I, UntilOk>> {
        Outcomes::new(self.inner.gather(gather::until_ok()))
    }

    /// Keeps only `Ok` elements matching the predicate; `Err` elements pass
    /// through unconditionally.
    #[inline]
    pub fn filter_ok<P>(self, predicate: P) -> Outcomes<Gather<I, FilterOk<P>>>
    where
        P: FnMut(&T) -> bool,
    {
        Outcomes::new(self.inner.gather(gather::filter_ok(predicate)))
    }

    /// Keeps only `Err` elements matching the predicate; `Ok` elements pass
    /// through unconditionally.
    #[inline]
    pub fn filter_err<P>(self, predicate: P) -> Outcomes<Gather<I, FilterErr<P>>>
    where
        P: FnMut(&E) -> bool,
    {
        Outcomes::new(self.inner.gather(gather::filter_err(predicate)))
    }

    /// Transforms every `Ok` payload, leaving `Err` elements untouched.
    #[inline]
    pub fn map_ok<U, F>(self, function: F) -> Outcomes<Gather<I, MapOk<F>>>
    where
        F: FnMut(T) -> U,
    {
        Outcomes::new(self.inner.gather(gather::map_ok(function)))
    }

    /// Transforms every `Err` payload, leaving `Ok` elements untouched.
    #[inline]
    pub fn map_err<D, F>(self, function: F) -> Outcomes<Gather<I, MapErr<F>>>
    where
        F: FnMut(E) -> D,
    {
        Outcomes::new(self.inner.gather(gather::map_err(function)))
    }

    /// Replaces every `Ok` element with the outcome the function returns.
    #[inline]
    pub fn flat_map_ok<U, F>(self, function: F) -> Outcomes<Gather<I, FlatMapOk<F>>>
    where
        F: FnMut(T) -> Outcome<U, E>,
    {
        Outcomes::new(self.inner.gather(gather::flat_map_ok(function)))
    }

    /// Replaces every `Err` element with the outcome the function returns.
    #[inline]
    pub fn flat_map_err<D, F>(self, function: F) -> Outcomes<Gather<I, FlatMapErr<F>>>
    where
        F: FnMut(E) -> Outcome<T, D>,
    {
        Outcomes::new(self.inner.gather(gather::flat_map_err(function)))
    }

    /// Transforms every element, whichever variant it is.
    #[inline]
    pub fn bimap<U, D, F, G>(
        self,
        ok_function: F,
        err_function: G,
    ) -> Outcomes<Gather<I, BiMap<F, G>>>
    where
        F: FnMut(T) -> U,
        G: FnMut(E) -> D,
    {
        Outcomes::new(self.inner.gather(gather::bimap(ok_function, err_function)))
    }

    /// Replaces every element with the outcome the respective function
    /// returns.
    #[inline]
    pub fn bi_flat_map<U, D, F, G>(
        self,
        ok_function: F,
        err_function: G,
    ) -> Outcomes<Gather<I, BiFlatMap<F, G>>>
    where
        F: FnMut(T) -> Outcome<U, D>,
        G: FnMut(E) -> Outcome<U, D>,
    {
        Outcomes::new(
            self.inner
                .gather(gather::bi_flat_map(ok_function, err_function)),
        )
    }

    // =========================================================================
    // Variant-projecting Terminals
    // =========================================================================

    /// Finds the first `Ok` payload, consuming elements up to and including
    /// it.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use disjunct::seq::IntoOutcomes;
    /// use disjunct::union::{Maybe, Outcome};
    ///
    /// let elements: Vec<Outcome<i32, &str>> = vec![Outcome::Err("a"), Outcome::Ok(7)];
    /// assert_eq!(elements.into_iter().outcomes().find_ok(), Maybe::Some(7));
    /// ```
    #[inline]
    pub fn find_ok(mut self) -> Maybe<T> {
        self.inner.find_map(|element| element.ok()).into()
    }

    /// Finds the first `Err` payload, consuming elements up to and
    /// including it.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use disjunct::seq::IntoOutcomes;
    /// use disjunct::union::{Maybe, Outcome};
    ///
    /// let elements: Vec<Outcome<i32, &str>> = vec![Outcome::Ok(1), Outcome::Err("bad")];
    /// assert_eq!(elements.into_iter().outcomes().find_err(), Maybe::Some("bad"));
    /// ```
    #[inline]
    pub fn find_err(mut self) -> Maybe<E> {
        self.inner.find_map(|element| element.err()).into()
    }

    /// Returns `true` if any `Ok` payload matches the predicate; `Err`
    /// elements are ignored.
    #[inline]
    pub fn any_ok<P>(mut self, mut predicate: P) -> bool
    where
        P: FnMut(&T) -> bool,
    {
        self.inner.any(|element| match element {
            Outcome::Ok(value) => predicate(&value),
            Outcome::Err(_) => false,
        })
    }

    /// Returns `true` if any `Err` payload matches the predicate; `Ok`
    /// elements are ignored.
    #[inline]
    pub fn any_err<P>(mut self, mut predicate: P) -> bool
    where
        P: FnMut(&E) -> bool,
    {
        self.inner.any(|element| match element {
            Outcome::Ok(_) => false,
            Outcome::Err(error) => predicate(&error),
        })
    }

    /// Returns `true` if every element is an `Ok`.
    ///
    /// Short-circuits on the first `Err`.
    #[inline]
    pub fn all_ok(mut self) -> bool {
        self.inner.all(|element| element.is_ok())
    }

    /// Invokes a consumer on every `Ok` payload, in encounter order.
    #[inline]
    pub fn for_each_ok<F>(self, mut consumer: F)
    where
        F: FnMut(T),
    {
        for element in self.inner {
            if let Outcome::Ok(value) = element {
                consumer(value);
            }
        }
    }

    /// Invokes a consumer on every `Err` payload, in encounter order.
    #[inline]
    pub fn for_each_err<F>(self, mut consumer: F)
    where
        F: FnMut(E),
    {
        for element in self.inner {
            if let Outcome::Err(error) = element {
                consumer(error);
            }
        }
    }

    /// Projects out the `Ok` payloads, dropping `Err` elements.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use disjunct::seq::IntoOutcomes;
    /// use disjunct::union::Outcome;
    ///
    /// let elements: Vec<Outcome<i32, &str>> =
    ///     vec![Outcome::Ok(1), Outcome::Err("x"), Outcome::Ok(2)];
    /// let values: Vec<i32> = elements.into_iter().outcomes().oks().collect();
    /// assert_eq!(values, vec![1, 2]);
    /// ```
    #[inline]
    pub fn oks(self) -> impl Iterator<Item = T> {
        self.inner.filter_map(|element| element.ok())
    }

    /// Projects out the `Err` payloads, dropping `Ok` elements.
    #[inline]
    pub fn errs(self) -> impl Iterator<Item = E> {
        self.inner.filter_map(|element| element.err())
    }

    /// Converts the sequence into `std::result::Result` elements, for
    /// engine operations that understand the prelude type (such as
    /// collecting into `Result<Vec<_>, _>`).
    ///
    /// # Examples
    ///
    /// ```rust
    /// use disjunct::seq::IntoOutcomes;
    /// use disjunct::union::Outcome;
    ///
    /// let elements: Vec<Outcome<i32, String>> = vec![Outcome::Ok(1), Outcome::Ok(2)];
    /// let collected: Result<Vec<i32>, String> =
    ///     elements.into_iter().outcomes().into_results().collect();
    /// assert_eq!(collected, Ok(vec![1, 2]));
    /// ```
    #[inline]
    pub fn into_results(self) -> impl Iterator<Item = Result<T, E>> {
        self.inner.map(|element| element.into_result())
    }
}

// =============================================================================
// Engine Passthrough
// =============================================================================

impl<T, E, I> Iterator for Outcomes<I>
where
    I: Iterator<Item = Outcome<T, E>>,
{
    type Item = Outcome<T, E>;

    #[inline]
    fn next(&mut self) -> Option<Outcome<T, E>> {
        self.inner.next()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

/// Extension trait wrapping any iterator of outcomes in the facade.
///
/// # Examples
///
/// ```rust
/// use disjunct::seq::IntoOutcomes;
/// use disjunct::union::Outcome;
///
/// let elements: Vec<Outcome<i32, &str>> = vec![Outcome::Ok(1)];
/// assert!(elements.into_iter().outcomes().all_ok());
/// ```
pub trait IntoOutcomes<T, E>: Iterator<Item = Outcome<T, E>> + Sized {
    /// Wraps this iterator in the [`Outcomes`] facade.
    #[inline]
    fn outcomes(self) -> Outcomes<Self> {
        Outcomes::new(self)
    }
}

impl<T, E, I> IntoOutcomes<T, E> for I where I: Iterator<Item = Outcome<T, E>> {}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn elements() -> Vec<Outcome<i32, String>> {
        vec![
            Outcome::Ok(1),
            Outcome::Err("first".to_string()),
            Outcome::Ok(12),
            Outcome::Err("second".to_string()),
        ]
    }

    #[rstest]
    fn test_find_terminals_project_their_variant() {
        assert_eq!(elements().into_iter().outcomes().find_ok(), Maybe::Some(1));
        assert_eq!(
            elements().into_iter().outcomes().find_err(),
            Maybe::Some("first".to_string()),
        );
    }

    #[rstest]
    fn test_any_ignores_other_variant() {
        assert!(elements().into_iter().outcomes().any_ok(|n| *n > 10));
        assert!(!elements().into_iter().outcomes().any_ok(|n| *n > 100));
        assert!(
            elements()
                .into_iter()
                .outcomes()
                .any_err(|e| e == "second")
        );
    }

    #[rstest]
    fn test_all_ok_short_circuits() {
        let mut consumed = 0;
        let all = elements()
            .into_iter()
            .inspect(|_| consumed += 1)
            .outcomes()
            .all_ok();
        assert!(!all);
        assert_eq!(consumed, 2);
    }

    #[rstest]
    fn test_for_each_preserves_encounter_order() {
        let mut seen = Vec::new();
        elements().into_iter().outcomes().for_each_err(|e| seen.push(e));
        assert_eq!(seen, vec!["first".to_string(), "second".to_string()]);
    }

    #[rstest]
    fn test_engine_operations_pass_through() {
        // take/skip/count come from the Iterator impl, untouched.
        let count = elements().into_iter().outcomes().skip(1).take(2).count();
        assert_eq!(count, 2);
    }

    #[rstest]
    fn test_adapters_chain_and_stay_lazy() {
        let gathered: Vec<Outcome<i32, usize>> = elements()
            .into_iter()
            .outcomes()
            .map_err(|e| e.len())
            .filter_ok(|n| *n > 10)
            .map_ok(|n| n * 10)
            .collect();
        assert_eq!(
            gathered,
            vec![Outcome::Err(5), Outcome::Ok(120), Outcome::Err(6)],
        );
    }

    #[rstest]
    fn test_until_err_through_the_facade() {
        let gathered: Vec<Outcome<i32, String>> =
            elements().into_iter().outcomes().until_err().collect();
        assert_eq!(
            gathered,
            vec![Outcome::Ok(1), Outcome::Err("first".to_string())],
        );
    }
}
