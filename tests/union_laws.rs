#![cfg(feature = "union")]
//! Property-based tests for the union type laws.
//!
//! Every two-variant union in the crate must satisfy:
//!
//! 1. **Swap Involution**: `u.swap().swap() == u`
//! 2. **Functor Identity**: `u.map(identity) == u`
//! 3. **Functor Composition**: `u.map(f).map(g) == u.map(|x| g(f(x)))`
//! 4. **Monad Left Identity**: `pure(x).flat_map(f) == f(x)`
//! 5. **Monad Right Identity**: `u.flat_map(pure) == u`
//!
//! Alongside the laws, the dispatch and laziness contracts are pinned with
//! concrete cases: `fold` invokes exactly one function, `filter` demotes on
//! the predicate's verdict alone, and the `_with` suppliers run only when
//! their branch is taken.

use disjunct::union::{Either, Maybe, Outcome};
use proptest::prelude::*;
use rstest::rstest;
use std::cell::Cell;

fn either_values() -> impl Strategy<Value = Either<i32, i32>> {
    prop_oneof![
        any::<i32>().prop_map(Either::Left),
        any::<i32>().prop_map(Either::Right),
    ]
}

fn outcome_values() -> impl Strategy<Value = Outcome<i32, i32>> {
    prop_oneof![
        any::<i32>().prop_map(Outcome::Ok),
        any::<i32>().prop_map(Outcome::Err),
    ]
}

fn maybe_values() -> impl Strategy<Value = Maybe<i32>> {
    prop_oneof![any::<i32>().prop_map(Maybe::Some), Just(Maybe::None)]
}

proptest! {
    #[test]
    fn prop_either_swap_involution(value in either_values()) {
        prop_assert_eq!(value.swap().swap(), value);
    }

    #[test]
    fn prop_outcome_swap_involution(value in outcome_values()) {
        prop_assert_eq!(value.swap().swap(), value);
    }

    #[test]
    fn prop_either_functor_identity(value in either_values()) {
        prop_assert_eq!(value.map_right(|x| x), value);
        prop_assert_eq!(value.map_left(|x| x), value);
    }

    #[test]
    fn prop_outcome_functor_identity(value in outcome_values()) {
        prop_assert_eq!(value.map(|x| x), value);
        prop_assert_eq!(value.map_err(|x| x), value);
    }

    #[test]
    fn prop_maybe_functor_identity(value in maybe_values()) {
        prop_assert_eq!(value.map(|x| x), value);
    }

    #[test]
    fn prop_either_functor_composition(value in either_values()) {
        let double = |n: i32| n.wrapping_mul(2);
        let increment = |n: i32| n.wrapping_add(1);
        let stepwise = value.map_right(double).map_right(increment);
        let composed = value.map_right(|n| increment(double(n)));
        prop_assert_eq!(stepwise, composed);
    }

    #[test]
    fn prop_outcome_functor_composition(value in outcome_values()) {
        let double = |n: i32| n.wrapping_mul(2);
        let increment = |n: i32| n.wrapping_add(1);
        let stepwise = value.map(double).map(increment);
        let composed = value.map(|n| increment(double(n)));
        prop_assert_eq!(stepwise, composed);
    }

    #[test]
    fn prop_outcome_monad_left_identity(seed in any::<i32>()) {
        let bind = |n: i32| {
            if n % 2 == 0 {
                Outcome::<i32, i32>::Ok(n.wrapping_div(2))
            } else {
                Outcome::<i32, i32>::Err(n)
            }
        };
        prop_assert_eq!(Outcome::<i32, i32>::Ok(seed).flat_map(bind), bind(seed));
    }

    #[test]
    fn prop_outcome_monad_right_identity(value in outcome_values()) {
        prop_assert_eq!(value.flat_map(Outcome::Ok), value);
    }

    #[test]
    fn prop_either_monad_right_identity(value in either_values()) {
        prop_assert_eq!(value.flat_map(Either::Right), value);
    }

    #[test]
    fn prop_maybe_monad_identities(seed in any::<i32>(), value in maybe_values()) {
        let bind = |n: i32| {
            if n % 2 == 0 { Maybe::Some(n.wrapping_div(2)) } else { Maybe::None }
        };
        prop_assert_eq!(Maybe::Some(seed).flat_map(bind), bind(seed));
        prop_assert_eq!(value.flat_map(Maybe::Some), value);
    }

    #[test]
    fn prop_outcome_fold_agrees_with_bimap(value in outcome_values()) {
        let folded = value.fold(|n| n.wrapping_mul(2), |e| e.wrapping_mul(3));
        let mapped = value
            .bimap(|n| n.wrapping_mul(2), |e| e.wrapping_mul(3))
            .fold(|n| n, |e| e);
        prop_assert_eq!(folded, mapped);
    }

    #[test]
    fn prop_outcome_contains_matches_equality(value in outcome_values(), probe in any::<i32>()) {
        let expected = value.ok_ref() == Some(&probe);
        prop_assert_eq!(value.contains(&probe), expected);
        let expected_err = value.err_ref() == Some(&probe);
        prop_assert_eq!(value.contains_err(&probe), expected_err);
    }
}

// =============================================================================
// Dispatch and laziness cases
// =============================================================================

#[rstest]
fn test_fold_dispatches_to_exactly_one_function() {
    let left: Either<i32, i32> = Either::Left(5);
    assert_eq!(left.fold(|l| l * 2, |_| -1), 10);

    let right: Either<i32, i32> = Either::Right(5);
    assert_eq!(right.fold(|l| l * 2, |_| -1), -1);
}

#[rstest]
fn test_filter_follows_the_predicate_verdict() {
    let small: Outcome<i32, String> = Outcome::Ok(4);
    assert_eq!(
        small.filter(|n| *n > 10, |_| "too small".to_string()),
        Outcome::Err("too small".to_string()),
    );

    let large: Outcome<i32, String> = Outcome::Ok(40);
    assert_eq!(
        large.filter(|n| *n > 10, |_| "too small".to_string()),
        Outcome::Ok(40),
    );
}

#[rstest]
fn test_and_supplier_never_runs_on_failure() {
    let invoked = Cell::new(false);
    let failure: Outcome<i32, String> = Outcome::Err("e".to_string());

    let result = failure.and_with(|| {
        invoked.set(true);
        Outcome::Ok(1)
    });

    assert!(result.is_err());
    assert!(!invoked.get());
}

#[rstest]
fn test_or_supplier_never_runs_on_success() {
    let invoked = Cell::new(false);
    let success: Outcome<i32, String> = Outcome::Ok(1);

    let result = success.or_with(|| {
        invoked.set(true);
        Outcome::Err("fallback".to_string())
    });

    assert_eq!(result, Outcome::Ok(1));
    assert!(!invoked.get());
}

#[rstest]
fn test_recover_sees_the_failure_payload() {
    let failure: Outcome<i32, String> = Outcome::Err("four".to_string());
    assert_eq!(failure.recover(|e| e.len() as i32), 4);
}

#[rstest]
fn test_get_or_raise_builds_error_lazily() {
    let invoked = Cell::new(false);
    let success: Outcome<i32, String> = Outcome::Ok(42);

    let result: Result<i32, String> = success.get_or_raise(|e| {
        invoked.set(true);
        e
    });

    assert_eq!(result, Ok(42));
    assert!(!invoked.get());
}
