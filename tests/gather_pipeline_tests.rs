#![cfg(feature = "seq")]
//! Integration tests for the gatherer stages and the sequence facade.
//!
//! The short-circuit contract is the load-bearing property here: a stage
//! that stops the sequence must also stop upstream consumption, not merely
//! truncate the output. Upstream pulls are counted explicitly to pin that
//! down.

use disjunct::gather::{GatherExt, Gatherer, Step, until_err};
use disjunct::seq::IntoOutcomes;
use disjunct::union::{Maybe, Outcome};
use proptest::prelude::*;
use rstest::rstest;
use std::cell::Cell;

/// Upstream wrapper counting how many elements were actually pulled.
struct Counted<'a, I> {
    inner: I,
    pulled: &'a Cell<usize>,
}

impl<I: Iterator> Iterator for Counted<'_, I> {
    type Item = I::Item;

    fn next(&mut self) -> Option<I::Item> {
        let element = self.inner.next();
        if element.is_some() {
            self.pulled.set(self.pulled.get() + 1);
        }
        element
    }
}

fn counted<I: Iterator>(inner: I, pulled: &Cell<usize>) -> Counted<'_, I> {
    Counted { inner, pulled }
}

// =============================================================================
// Short-circuit consumption
// =============================================================================

#[rstest]
fn test_until_err_stops_consuming_after_first_failure() {
    let pulled = Cell::new(0);
    let elements: Vec<Outcome<i32, String>> = vec![
        Outcome::Ok(1),
        Outcome::Ok(2),
        Outcome::Err("x".to_string()),
        Outcome::Ok(3),
    ];

    let gathered: Vec<_> = counted(elements.into_iter(), &pulled)
        .outcomes()
        .until_err()
        .collect();

    assert_eq!(
        gathered,
        vec![
            Outcome::Ok(1),
            Outcome::Ok(2),
            Outcome::Err("x".to_string()),
        ],
    );
    // The trailing Ok(3) was never produced by upstream.
    assert_eq!(pulled.get(), 3);
}

#[rstest]
fn test_until_ok_stops_consuming_after_first_success() {
    let pulled = Cell::new(0);
    let attempts: Vec<Outcome<i32, String>> = vec![
        Outcome::Err("a".to_string()),
        Outcome::Ok(42),
        Outcome::Err("b".to_string()),
    ];

    let gathered: Vec<_> = counted(attempts.into_iter(), &pulled)
        .outcomes()
        .until_ok()
        .collect();

    assert_eq!(
        gathered,
        vec![Outcome::Err("a".to_string()), Outcome::Ok(42)],
    );
    assert_eq!(pulled.get(), 2);
}

#[rstest]
fn test_find_err_consumes_only_up_to_the_failure() {
    let pulled = Cell::new(0);
    let elements: Vec<Outcome<i32, String>> = vec![
        Outcome::Ok(1),
        Outcome::Err("bad".to_string()),
        Outcome::Ok(3),
    ];

    let found = counted(elements.into_iter(), &pulled).outcomes().find_err();

    assert_eq!(found, Maybe::Some("bad".to_string()));
    assert_eq!(pulled.get(), 2);
}

// =============================================================================
// Stage pipelines
// =============================================================================

#[rstest]
fn test_stages_compose_into_a_single_pass() {
    let elements: Vec<Outcome<i32, String>> = vec![
        Outcome::Ok(3),
        Outcome::Ok(30),
        Outcome::Err("upstream".to_string()),
        Outcome::Ok(7),
    ];

    let gathered: Vec<Outcome<i32, usize>> = elements
        .into_iter()
        .outcomes()
        .filter_ok(|n| *n > 5)
        .map_ok(|n| n + 1)
        .map_err(|e| e.len())
        .collect();

    assert_eq!(
        gathered,
        vec![Outcome::Ok(31), Outcome::Err(8), Outcome::Ok(8)],
    );
}

#[rstest]
fn test_flat_map_err_can_repair_failures() {
    let elements: Vec<Outcome<i32, String>> = vec![
        Outcome::Ok(1),
        Outcome::Err("2".to_string()),
        Outcome::Err("x".to_string()),
    ];

    let gathered: Vec<Outcome<i32, String>> = elements
        .into_iter()
        .outcomes()
        .flat_map_err(|text| match text.parse::<i32>() {
            Ok(number) => Outcome::Ok(number),
            Err(_) => Outcome::Err(text),
        })
        .collect();

    assert_eq!(
        gathered,
        vec![
            Outcome::Ok(1),
            Outcome::Ok(2),
            Outcome::Err("x".to_string()),
        ],
    );
}

#[rstest]
fn test_bi_flat_map_touches_every_element() {
    let elements: Vec<Outcome<i32, String>> =
        vec![Outcome::Ok(4), Outcome::Err("soft".to_string())];

    let gathered: Vec<Outcome<i32, String>> = elements
        .into_iter()
        .outcomes()
        .bi_flat_map(
            |n| {
                if n > 10 {
                    Outcome::Ok(n)
                } else {
                    Outcome::Err(format!("too small: {n}"))
                }
            },
            |e| if e == "soft" { Outcome::Ok(0) } else { Outcome::Err(e) },
        )
        .collect();

    assert_eq!(
        gathered,
        vec![Outcome::Err("too small: 4".to_string()), Outcome::Ok(0)],
    );
}

#[rstest]
fn test_custom_stage_drives_through_the_host() {
    /// Emits running totals of Ok payloads, halting on overflow.
    struct RunningTotal {
        total: i32,
    }

    impl Gatherer<Outcome<i32, String>> for RunningTotal {
        type Out = Outcome<i32, String>;

        fn integrate(&mut self, element: Outcome<i32, String>) -> Step<Outcome<i32, String>> {
            match element {
                Outcome::Ok(value) => match self.total.checked_add(value) {
                    Some(total) => {
                        self.total = total;
                        Step::Yield(Outcome::Ok(total))
                    }
                    None => Step::Halt,
                },
                Outcome::Err(error) => Step::Yield(Outcome::Err(error)),
            }
        }
    }

    let elements: Vec<Outcome<i32, String>> =
        vec![Outcome::Ok(1), Outcome::Ok(2), Outcome::Ok(i32::MAX)];

    let gathered: Vec<_> = elements
        .into_iter()
        .gather(RunningTotal { total: 0 })
        .collect();

    assert_eq!(gathered, vec![Outcome::Ok(1), Outcome::Ok(3)]);
}

// =============================================================================
// Properties
// =============================================================================

fn outcome_sequences() -> impl Strategy<Value = Vec<Outcome<i32, i32>>> {
    prop::collection::vec(
        prop_oneof![
            any::<i32>().prop_map(Outcome::Ok),
            any::<i32>().prop_map(Outcome::Err),
        ],
        0..12,
    )
}

/// Model of `until_err`: the prefix up to and including the first `Err`.
fn prefix_until_err(elements: &[Outcome<i32, i32>]) -> Vec<Outcome<i32, i32>> {
    let mut prefix = Vec::new();
    for element in elements {
        let is_err = element.is_err();
        prefix.push(*element);
        if is_err {
            break;
        }
    }
    prefix
}

proptest! {
    #[test]
    fn prop_until_err_matches_the_prefix_model(elements in outcome_sequences()) {
        let gathered: Vec<_> = elements.iter().copied().gather(until_err()).collect();
        prop_assert_eq!(gathered, prefix_until_err(&elements));
    }

    #[test]
    fn prop_map_ok_preserves_length_and_errs(elements in outcome_sequences()) {
        let gathered: Vec<_> = elements
            .iter()
            .copied()
            .outcomes()
            .map_ok(|n| n.wrapping_mul(2))
            .collect();

        prop_assert_eq!(gathered.len(), elements.len());
        for (before, after) in elements.iter().zip(&gathered) {
            match (before, after) {
                (Outcome::Ok(original), Outcome::Ok(mapped)) => {
                    prop_assert_eq!(original.wrapping_mul(2), *mapped);
                }
                (Outcome::Err(original), Outcome::Err(kept)) => {
                    prop_assert_eq!(original, kept);
                }
                _ => prop_assert!(false, "variant changed under map_ok"),
            }
        }
    }

    #[test]
    fn prop_filter_ok_never_converts_variants(elements in outcome_sequences()) {
        let gathered: Vec<_> = elements
            .iter()
            .copied()
            .outcomes()
            .filter_ok(|n| n % 2 == 0)
            .collect();

        let expected: Vec<_> = elements
            .iter()
            .copied()
            .filter(|element| match element {
                Outcome::Ok(n) => n % 2 == 0,
                Outcome::Err(_) => true,
            })
            .collect();
        prop_assert_eq!(gathered, expected);
    }
}
