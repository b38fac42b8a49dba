#![cfg(feature = "union")]
//! Integration tests for `Try`'s capture boundaries and scoped resources.
//!
//! Covers the two contracts that only show up end to end: fatal payloads
//! must pass through every trap untouched, and resources must be released
//! on every exit path with close-time failures attached as suppressed
//! context rather than replacing the primary cause.

use disjunct::union::{BoxError, Dispose, Interrupt, Try, using, using_pair};
use rstest::rstest;
use std::cell::{Cell, RefCell};
use std::io::{self, Write};
use std::panic;

fn io_error(message: &str) -> io::Error {
    io::Error::other(message.to_string())
}

// =============================================================================
// Fatal passthrough
// =============================================================================

#[rstest]
fn test_interrupt_passes_through_catching() {
    let unwound = panic::catch_unwind(|| {
        Try::catching(|| -> i32 { panic::panic_any(Interrupt::new()) })
    });

    let payload = unwound.expect_err("interrupt must not be captured");
    assert!(payload.is::<Interrupt>());
}

#[rstest]
fn test_interrupt_passes_through_filtered_trap() {
    // Even a trap whose token matches everything refuses the interrupt.
    let unwound = panic::catch_unwind(|| {
        Try::catching_as::<Interrupt, _>(|| -> i32 {
            panic::panic_any(Interrupt::with_reason("drain"))
        })
    });

    let payload = unwound.expect_err("interrupt must not be captured");
    let interrupt = payload
        .downcast::<Interrupt>()
        .unwrap_or_else(|_| panic!("payload must keep its identity"));
    assert_eq!(interrupt.reason(), Some("drain"));
}

#[rstest]
fn test_ordinary_panics_are_captured_and_resumed_intact() {
    struct Token(&'static str);

    let trapped: Try<i32> = Try::catching_as::<Token, _>(|| panic::panic_any(Token("kept")));
    assert!(trapped.is_failure());

    // Re-raising restores the original payload, not a re-wrapped copy.
    let unwound = panic::catch_unwind(panic::AssertUnwindSafe(|| trapped.unwrap()));
    let payload = unwound.expect_err("failure must re-raise");
    let token = payload
        .downcast::<Token>()
        .unwrap_or_else(|_| panic!("payload must keep its identity"));
    assert_eq!(token.0, "kept");
}

// =============================================================================
// Scoped resources
// =============================================================================

struct Tracked<'a> {
    close_error: Option<&'static str>,
    log: &'a RefCell<Vec<&'static str>>,
    name: &'static str,
}

impl Dispose for Tracked<'_> {
    fn dispose(self) -> Result<(), BoxError> {
        self.log.borrow_mut().push(self.name);
        match self.close_error {
            Some(message) => Err(io_error(message).into()),
            None => Ok(()),
        }
    }
}

#[rstest]
fn test_body_failure_keeps_close_error_as_suppressed() {
    let log = RefCell::new(Vec::new());
    let result: Try<i32> = using(
        || {
            Ok::<_, BoxError>(Tracked {
                close_error: Some("close failed"),
                log: &log,
                name: "resource",
            })
        },
        |_| Err(io_error("body failed")),
    );

    let caught = result.failure().expect("failure payload");
    assert_eq!(caught.message(), "body failed");
    assert_eq!(caught.suppressed().len(), 1);
    assert_eq!(caught.suppressed()[0].to_string(), "close failed");
    assert_eq!(*log.borrow(), vec!["resource"]);
}

#[rstest]
fn test_close_failure_alone_becomes_the_failure() {
    let log = RefCell::new(Vec::new());
    let result = using(
        || {
            Ok::<_, BoxError>(Tracked {
                close_error: Some("close failed"),
                log: &log,
                name: "resource",
            })
        },
        |_| Ok::<_, BoxError>(42),
    );

    let caught = result.failure().expect("failure payload");
    assert_eq!(caught.message(), "close failed");
    assert!(caught.suppressed().is_empty());
}

#[rstest]
fn test_acquire_failure_never_runs_the_body() {
    let body_ran = Cell::new(false);
    let result: Try<i32> = using(
        || Err::<Tracked<'_>, _>(io_error("acquire failed")),
        |_| {
            body_ran.set(true);
            Ok::<_, BoxError>(0)
        },
    );

    assert!(result.is_failure());
    assert!(!body_ran.get());
}

#[rstest]
fn test_pair_disposes_in_reverse_order_with_suppression() {
    let log = RefCell::new(Vec::new());
    let result: Try<i32> = using_pair(
        || {
            Ok::<_, BoxError>(Tracked {
                close_error: Some("first close failed"),
                log: &log,
                name: "first",
            })
        },
        || {
            Ok::<_, BoxError>(Tracked {
                close_error: Some("second close failed"),
                log: &log,
                name: "second",
            })
        },
        |_, _| Err(io_error("body failed")),
    );

    // Reverse acquisition order: the second resource closes first.
    assert_eq!(*log.borrow(), vec!["second", "first"]);

    let caught = result.failure().expect("failure payload");
    assert_eq!(caught.message(), "body failed");
    let suppressed: Vec<String> = caught
        .suppressed()
        .iter()
        .map(|error| error.to_string())
        .collect();
    assert_eq!(
        suppressed,
        vec![
            "second close failed".to_string(),
            "first close failed".to_string(),
        ],
    );
}

#[rstest]
fn test_panicking_body_still_disposes_everything() {
    let log = RefCell::new(Vec::new());
    let unwound = panic::catch_unwind(panic::AssertUnwindSafe(|| {
        using_pair(
            || {
                Ok::<_, BoxError>(Tracked {
                    close_error: None,
                    log: &log,
                    name: "first",
                })
            },
            || {
                Ok::<_, BoxError>(Tracked {
                    close_error: None,
                    log: &log,
                    name: "second",
                })
            },
            |_, _| -> Result<i32, BoxError> { panic!("body blew up") },
        )
    }));

    assert!(unwound.is_err());
    assert_eq!(*log.borrow(), vec!["second", "first"]);
}

// =============================================================================
// A real resource
// =============================================================================

#[rstest]
fn test_using_syncs_a_real_file() {
    let path = std::env::temp_dir().join(format!(
        "disjunct-using-test-{}.txt",
        std::process::id(),
    ));

    let written = using(
        || std::fs::File::create(&path),
        |file| file.write_all(b"hello").map(|()| 5usize),
    );
    assert_eq!(written.success(), Some(5));

    let contents = std::fs::read(&path).expect("file must exist");
    assert_eq!(contents, b"hello");

    let _ = std::fs::remove_file(&path);
}
