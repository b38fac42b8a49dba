//! Concrete gatherer stages over [`Outcome`] elements.
//!
//! Every stage here is a small state machine implementing
//! [`Gatherer`](super::Gatherer); most are stateless apart from the closure
//! they carry. The two `until_*` stages hold a single irreversible `halted`
//! flag — the whole of their short-circuit state.

use crate::union::Outcome;

use super::stage::{Gatherer, Step};

// =============================================================================
// Short-circuit Stages
// =============================================================================

/// Stage that stops the sequence after emitting the first `Err`.
///
/// See [`until_err`].
#[derive(Clone, Copy, Debug, Default)]
pub struct UntilErr {
    halted: bool,
}

/// Passes every `Ok` element through; the first `Err` is emitted as the
/// final element, after which no further upstream input is accepted.
///
/// # Examples
///
/// ```rust
/// use disjunct::gather::{until_err, GatherExt};
/// use disjunct::union::Outcome;
///
/// let elements: Vec<Outcome<i32, &str>> =
///     vec![Outcome::Ok(1), Outcome::Err("x"), Outcome::Ok(3)];
/// let gathered: Vec<_> = elements.into_iter().gather(until_err()).collect();
/// assert_eq!(gathered, vec![Outcome::Ok(1), Outcome::Err("x")]);
/// ```
#[inline]
#[must_use]
pub const fn until_err() -> UntilErr {
    UntilErr { halted: false }
}

impl<T, E> Gatherer<Outcome<T, E>> for UntilErr {
    type Out = Outcome<T, E>;

    fn integrate(&mut self, element: Outcome<T, E>) -> Step<Outcome<T, E>> {
        if self.halted {
            return Step::Halt;
        }
        match element {
            Outcome::Ok(value) => Step::Yield(Outcome::Ok(value)),
            Outcome::Err(error) => {
                self.halted = true;
                Step::Last(Outcome::Err(error))
            }
        }
    }
}

/// Stage that stops the sequence after emitting the first `Ok`.
///
/// See [`until_ok`].
#[derive(Clone, Copy, Debug, Default)]
pub struct UntilOk {
    halted: bool,
}

/// Passes every `Err` element through; the first `Ok` is emitted as the
/// final element, after which no further upstream input is accepted.
///
/// The mirror of [`until_err`], useful for retry-style sequences where the
/// first success ends the scan.
///
/// # Examples
///
/// ```rust
/// use disjunct::gather::{until_ok, GatherExt};
/// use disjunct::union::Outcome;
///
/// let attempts: Vec<Outcome<i32, &str>> =
///     vec![Outcome::Err("a"), Outcome::Ok(42), Outcome::Err("b")];
/// let gathered: Vec<_> = attempts.into_iter().gather(until_ok()).collect();
/// assert_eq!(gathered, vec![Outcome::Err("a"), Outcome::Ok(42)]);
/// ```
#[inline]
#[must_use]
pub const fn until_ok() -> UntilOk {
    UntilOk { halted: false }
}

impl<T, E> Gatherer<Outcome<T, E>> for UntilOk {
    type Out = Outcome<T, E>;

    fn integrate(&mut self, element: Outcome<T, E>) -> Step<Outcome<T, E>> {
        if self.halted {
            return Step::Halt;
        }
        match element {
            Outcome::Ok(value) => {
                self.halted = true;
                Step::Last(Outcome::Ok(value))
            }
            Outcome::Err(error) => Step::Yield(Outcome::Err(error)),
        }
    }
}

// =============================================================================
// Filter Stages
// =============================================================================

/// Stage that drops `Ok` elements failing a predicate.
///
/// See [`filter_ok`].
#[derive(Clone, Copy, Debug)]
pub struct FilterOk<P> {
    predicate: P,
}

/// Emits an `Ok` element only if the predicate holds; non-matching `Ok`
/// elements are dropped, not converted. `Err` elements pass through
/// unconditionally.
///
/// # Examples
///
/// ```rust
/// use disjunct::gather::{filter_ok, GatherExt};
/// use disjunct::union::Outcome;
///
/// let elements: Vec<Outcome<i32, &str>> =
///     vec![Outcome::Ok(1), Outcome::Ok(20), Outcome::Err("x")];
/// let gathered: Vec<_> = elements
///     .into_iter()
///     .gather(filter_ok(|n: &i32| *n > 10))
///     .collect();
/// assert_eq!(gathered, vec![Outcome::Ok(20), Outcome::Err("x")]);
/// ```
#[inline]
pub const fn filter_ok<P>(predicate: P) -> FilterOk<P> {
    FilterOk { predicate }
}

impl<T, E, P> Gatherer<Outcome<T, E>> for FilterOk<P>
where
    P: FnMut(&T) -> bool,
{
    type Out = Outcome<T, E>;

    fn integrate(&mut self, element: Outcome<T, E>) -> Step<Outcome<T, E>> {
        match element {
            Outcome::Ok(value) => {
                if (self.predicate)(&value) {
                    Step::Yield(Outcome::Ok(value))
                } else {
                    Step::Skip
                }
            }
            Outcome::Err(error) => Step::Yield(Outcome::Err(error)),
        }
    }
}

/// Stage that drops `Err` elements failing a predicate.
///
/// See [`filter_err`].
#[derive(Clone, Copy, Debug)]
pub struct FilterErr<P> {
    predicate: P,
}

/// Emits an `Err` element only if the predicate holds; non-matching `Err`
/// elements are dropped, not converted. `Ok` elements pass through
/// unconditionally.
#[inline]
pub const fn filter_err<P>(predicate: P) -> FilterErr<P> {
    FilterErr { predicate }
}

impl<T, E, P> Gatherer<Outcome<T, E>> for FilterErr<P>
where
    P: FnMut(&E) -> bool,
{
    type Out = Outcome<T, E>;

    fn integrate(&mut self, element: Outcome<T, E>) -> Step<Outcome<T, E>> {
        match element {
            Outcome::Ok(value) => Step::Yield(Outcome::Ok(value)),
            Outcome::Err(error) => {
                if (self.predicate)(&error) {
                    Step::Yield(Outcome::Err(error))
                } else {
                    Step::Skip
                }
            }
        }
    }
}

// =============================================================================
// Map Stages
// =============================================================================

/// Stage that transforms `Ok` payloads.
///
/// See [`map_ok`].
#[derive(Clone, Copy, Debug)]
pub struct MapOk<F> {
    function: F,
}

/// Transforms the payload of every `Ok` element; `Err` elements pass
/// through untouched.
///
/// # Examples
///
/// ```rust
/// use disjunct::gather::{map_ok, GatherExt};
/// use disjunct::union::Outcome;
///
/// let elements: Vec<Outcome<i32, &str>> = vec![Outcome::Ok(21), Outcome::Err("x")];
/// let gathered: Vec<_> = elements.into_iter().gather(map_ok(|n| n * 2)).collect();
/// assert_eq!(gathered, vec![Outcome::Ok(42), Outcome::Err("x")]);
/// ```
#[inline]
pub const fn map_ok<F>(function: F) -> MapOk<F> {
    MapOk { function }
}

impl<T, E, U, F> Gatherer<Outcome<T, E>> for MapOk<F>
where
    F: FnMut(T) -> U,
{
    type Out = Outcome<U, E>;

    fn integrate(&mut self, element: Outcome<T, E>) -> Step<Outcome<U, E>> {
        match element {
            Outcome::Ok(value) => Step::Yield(Outcome::Ok((self.function)(value))),
            Outcome::Err(error) => Step::Yield(Outcome::Err(error)),
        }
    }
}

/// Stage that transforms `Err` payloads.
///
/// See [`map_err`].
#[derive(Clone, Copy, Debug)]
pub struct MapErr<F> {
    function: F,
}

/// Transforms the payload of every `Err` element; `Ok` elements pass
/// through untouched.
#[inline]
pub const fn map_err<F>(function: F) -> MapErr<F> {
    MapErr { function }
}

impl<T, E, D, F> Gatherer<Outcome<T, E>> for MapErr<F>
where
    F: FnMut(E) -> D,
{
    type Out = Outcome<T, D>;

    fn integrate(&mut self, element: Outcome<T, E>) -> Step<Outcome<T, D>> {
        match element {
            Outcome::Ok(value) => Step::Yield(Outcome::Ok(value)),
            Outcome::Err(error) => Step::Yield(Outcome::Err((self.function)(error))),
        }
    }
}

// =============================================================================
// Flat-map Stages
// =============================================================================

/// Stage that replaces `Ok` elements with a new `Outcome`.
///
/// See [`flat_map_ok`].
#[derive(Clone, Copy, Debug)]
pub struct FlatMapOk<F> {
    function: F,
}

/// Replaces every `Ok` element with the `Outcome` the function returns,
/// emitted verbatim; `Err` elements pass through untouched.
///
/// # Examples
///
/// ```rust
/// use disjunct::gather::{flat_map_ok, GatherExt};
/// use disjunct::union::Outcome;
///
/// let elements: Vec<Outcome<i32, String>> = vec![Outcome::Ok(4), Outcome::Ok(40)];
/// let gathered: Vec<_> = elements
///     .into_iter()
///     .gather(flat_map_ok(|n: i32| {
///         if n > 10 {
///             Outcome::Ok(n)
///         } else {
///             Outcome::Err(format!("too small: {n}"))
///         }
///     }))
///     .collect();
/// assert_eq!(
///     gathered,
///     vec![Outcome::Err("too small: 4".to_string()), Outcome::Ok(40)],
/// );
/// ```
#[inline]
pub const fn flat_map_ok<F>(function: F) -> FlatMapOk<F> {
    FlatMapOk { function }
}

impl<T, E, U, F> Gatherer<Outcome<T, E>> for FlatMapOk<F>
where
    F: FnMut(T) -> Outcome<U, E>,
{
    type Out = Outcome<U, E>;

    fn integrate(&mut self, element: Outcome<T, E>) -> Step<Outcome<U, E>> {
        match element {
            Outcome::Ok(value) => Step::Yield((self.function)(value)),
            Outcome::Err(error) => Step::Yield(Outcome::Err(error)),
        }
    }
}

/// Stage that replaces `Err` elements with a new `Outcome`.
///
/// See [`flat_map_err`].
#[derive(Clone, Copy, Debug)]
pub struct FlatMapErr<F> {
    function: F,
}

/// Replaces every `Err` element with the `Outcome` the function returns,
/// emitted verbatim; `Ok` elements pass through untouched.
#[inline]
pub const fn flat_map_err<F>(function: F) -> FlatMapErr<F> {
    FlatMapErr { function }
}

impl<T, E, D, F> Gatherer<Outcome<T, E>> for FlatMapErr<F>
where
    F: FnMut(E) -> Outcome<T, D>,
{
    type Out = Outcome<T, D>;

    fn integrate(&mut self, element: Outcome<T, E>) -> Step<Outcome<T, D>> {
        match element {
            Outcome::Ok(value) => Step::Yield(Outcome::Ok(value)),
            Outcome::Err(error) => Step::Yield((self.function)(error)),
        }
    }
}

// =============================================================================
// Paired Stages
// =============================================================================

/// Stage that transforms both variants' payloads.
///
/// See [`bimap`].
#[derive(Clone, Copy, Debug)]
pub struct BiMap<F, G> {
    ok_function: F,
    err_function: G,
}

/// Applies the respective transform to every element, whichever variant it
/// is; the result stays in the variant it came from.
///
/// # Examples
///
/// ```rust
/// use disjunct::gather::{bimap, GatherExt};
/// use disjunct::union::Outcome;
///
/// let elements: Vec<Outcome<i32, &str>> = vec![Outcome::Ok(21), Outcome::Err("x")];
/// let gathered: Vec<Outcome<i32, usize>> = elements
///     .into_iter()
///     .gather(bimap(|n: i32| n * 2, |e: &str| e.len()))
///     .collect();
/// assert_eq!(gathered, vec![Outcome::Ok(42), Outcome::Err(1)]);
/// ```
#[inline]
pub const fn bimap<F, G>(ok_function: F, err_function: G) -> BiMap<F, G> {
    BiMap {
        ok_function,
        err_function,
    }
}

impl<T, E, U, D, F, G> Gatherer<Outcome<T, E>> for BiMap<F, G>
where
    F: FnMut(T) -> U,
    G: FnMut(E) -> D,
{
    type Out = Outcome<U, D>;

    fn integrate(&mut self, element: Outcome<T, E>) -> Step<Outcome<U, D>> {
        match element {
            Outcome::Ok(value) => Step::Yield(Outcome::Ok((self.ok_function)(value))),
            Outcome::Err(error) => Step::Yield(Outcome::Err((self.err_function)(error))),
        }
    }
}

/// Stage that replaces both variants with new `Outcome`s.
///
/// See [`bi_flat_map`].
#[derive(Clone, Copy, Debug)]
pub struct BiFlatMap<F, G> {
    ok_function: F,
    err_function: G,
}

/// Replaces every element with the `Outcome` the respective function
/// returns, emitted verbatim.
#[inline]
pub const fn bi_flat_map<F, G>(ok_function: F, err_function: G) -> BiFlatMap<F, G> {
    BiFlatMap {
        ok_function,
        err_function,
    }
}

impl<T, E, U, D, F, G> Gatherer<Outcome<T, E>> for BiFlatMap<F, G>
where
    F: FnMut(T) -> Outcome<U, D>,
    G: FnMut(E) -> Outcome<U, D>,
{
    type Out = Outcome<U, D>;

    fn integrate(&mut self, element: Outcome<T, E>) -> Step<Outcome<U, D>> {
        match element {
            Outcome::Ok(value) => Step::Yield((self.ok_function)(value)),
            Outcome::Err(error) => Step::Yield((self.err_function)(error)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    // Stages are driven by hand here; the short-circuit contract must hold
    // without any iterator machinery around it.

    #[rstest]
    fn test_until_err_halts_irreversibly() {
        let mut stage = until_err();

        assert_eq!(
            stage.integrate(Outcome::<i32, &str>::Ok(1)),
            Step::Yield(Outcome::Ok(1)),
        );
        assert_eq!(
            stage.integrate(Outcome::<i32, &str>::Err("x")),
            Step::Last(Outcome::Err("x")),
        );
        // A misbehaving host that keeps feeding gets refusals, not values.
        assert_eq!(stage.integrate(Outcome::<i32, &str>::Ok(2)), Step::Halt);
        assert_eq!(stage.integrate(Outcome::<i32, &str>::Err("y")), Step::Halt);
    }

    #[rstest]
    fn test_until_ok_mirrors_until_err() {
        let mut stage = until_ok();

        assert_eq!(
            stage.integrate(Outcome::<i32, &str>::Err("a")),
            Step::Yield(Outcome::Err("a")),
        );
        assert_eq!(
            stage.integrate(Outcome::<i32, &str>::Ok(42)),
            Step::Last(Outcome::Ok(42)),
        );
        assert_eq!(stage.integrate(Outcome::<i32, &str>::Err("b")), Step::Halt);
    }

    #[rstest]
    fn test_filter_ok_drops_without_converting() {
        let mut stage = filter_ok(|n: &i32| *n > 10);

        assert_eq!(stage.integrate(Outcome::<i32, &str>::Ok(4)), Step::Skip);
        assert_eq!(
            stage.integrate(Outcome::<i32, &str>::Ok(40)),
            Step::Yield(Outcome::Ok(40)),
        );
        assert_eq!(
            stage.integrate(Outcome::<i32, &str>::Err("kept")),
            Step::Yield(Outcome::Err("kept")),
        );
    }

    #[rstest]
    fn test_filter_err_passes_ok_unconditionally() {
        let mut stage = filter_err(|e: &&str| e.len() > 1);

        assert_eq!(
            stage.integrate(Outcome::<i32, &str>::Ok(1)),
            Step::Yield(Outcome::Ok(1)),
        );
        assert_eq!(stage.integrate(Outcome::<i32, &str>::Err("x")), Step::Skip);
        assert_eq!(
            stage.integrate(Outcome::<i32, &str>::Err("xy")),
            Step::Yield(Outcome::Err("xy")),
        );
    }

    #[rstest]
    fn test_map_stages_touch_only_their_variant() {
        let mut ok_stage = map_ok(|n: i32| n * 2);
        assert_eq!(
            ok_stage.integrate(Outcome::<i32, &str>::Ok(21)),
            Step::Yield(Outcome::Ok(42)),
        );
        assert_eq!(
            ok_stage.integrate(Outcome::<i32, &str>::Err("x")),
            Step::Yield(Outcome::Err("x")),
        );

        let mut err_stage = map_err(|e: &str| e.len());
        assert_eq!(
            err_stage.integrate(Outcome::<i32, &str>::Ok(1)),
            Step::Yield(Outcome::Ok(1)),
        );
        assert_eq!(
            err_stage.integrate(Outcome::<i32, &str>::Err("xy")),
            Step::Yield(Outcome::Err(2)),
        );
    }

    #[rstest]
    fn test_flat_map_ok_emits_result_verbatim() {
        let mut stage = flat_map_ok(|n: i32| {
            if n > 10 {
                Outcome::Ok(n)
            } else {
                Outcome::Err("too small")
            }
        });

        assert_eq!(
            stage.integrate(Outcome::Ok(4)),
            Step::Yield(Outcome::Err("too small")),
        );
        assert_eq!(
            stage.integrate(Outcome::Ok(40)),
            Step::Yield(Outcome::Ok(40)),
        );
        assert_eq!(
            stage.integrate(Outcome::Err("upstream")),
            Step::Yield(Outcome::Err("upstream")),
        );
    }

    #[rstest]
    fn test_bi_stages_transform_every_element() {
        let mut map_stage = bimap(|n: i32| n + 1, |e: &str| e.len());
        assert_eq!(
            map_stage.integrate(Outcome::<i32, &str>::Ok(1)),
            Step::Yield(Outcome::Ok(2)),
        );
        assert_eq!(
            map_stage.integrate(Outcome::<i32, &str>::Err("xyz")),
            Step::Yield(Outcome::Err(3)),
        );

        let mut flat_stage = bi_flat_map(
            |n: i32| Outcome::<i32, String>::Ok(n),
            |e: &str| Outcome::<i32, String>::Err(e.to_uppercase()),
        );
        assert_eq!(
            flat_stage.integrate(Outcome::<i32, &str>::Err("soft")),
            Step::Yield(Outcome::Err("SOFT".to_string())),
        );
    }
}
