//! Unit tests for the exception boundary.
//!
//! Covers the immediate `Trial` form (run, catch, match, conversions),
//! the deferred try/catch/finally builder (nothing executes before
//! invoke, cleanup runs exactly once per invoke, repeated invocation
//! re-runs the whole chain), and the async mirrors.

#![cfg(feature = "attempt")]

use rstest::rstest;
use std::panic::{AssertUnwindSafe, catch_unwind};
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use sumrail::attempt::{Fault, Trial, attempt};

// =============================================================================
// Trial: Immediate Form
// =============================================================================

#[rstest]
fn run_captures_a_normal_return_as_success() {
    let trial = Trial::run(|| 1 + 1);
    assert!(trial.is_success());
    assert_eq!(trial.catch(|_| 0), 2);
}

#[rstest]
fn run_captures_a_panic_as_failure() {
    let trial: Trial<i32> = Trial::run(|| panic!("boom"));
    assert!(trial.is_failure());
}

#[rstest]
fn catch_resolves_a_failure_with_the_handler_value() {
    let recovered = Trial::run(|| panic!("boom")).catch(|fault| {
        assert_eq!(fault.message(), "boom");
        -1
    });
    assert_eq!(recovered, -1);
}

#[rstest]
fn catch_never_invokes_the_handler_on_success() {
    let mut handled = 0;
    let value = Trial::run(|| 42).catch(|_| {
        handled += 1;
        0
    });
    assert_eq!(value, 42);
    assert_eq!(handled, 0);
}

#[rstest]
fn match_with_runs_exactly_one_handler() {
    let described = Trial::run(|| 3).match_with(
        |n| format!("success {n}"),
        |fault| format!("failure {fault}"),
    );
    assert_eq!(described, "success 3");

    let described: String = Trial::<i32>::run(|| panic!("late")).match_with(
        |n| format!("success {n}"),
        |fault| format!("failure {fault}"),
    );
    assert_eq!(described, "failure late");
}

#[rstest]
fn fault_message_extracts_formatted_payloads() {
    let trial: Trial<i32> = Trial::run(|| panic!("status {}", 404));
    let message = trial.match_with(|_| String::new(), |fault| fault.message().to_string());
    assert_eq!(message, "status 404");
}

#[rstest]
fn map_transforms_only_success_values() {
    let doubled = Trial::run(|| 21).map(|n| n * 2);
    assert_eq!(doubled.catch(|_| 0), 42);

    let failed: Trial<i32> = Trial::run(|| panic!("boom"));
    assert!(failed.map(|n| n * 2).is_failure());
}

#[cfg(feature = "outcome")]
#[rstest]
fn into_outcome_keeps_the_fault_as_error_payload() {
    let outcome = Trial::<i32>::run(|| panic!("boom")).into_outcome();
    assert!(outcome.is_error());
    assert_eq!(outcome.unwrap_error().message(), "boom");
}

#[cfg(feature = "maybe")]
#[rstest]
fn into_maybe_discards_the_fault() {
    use sumrail::maybe::Maybe;

    assert_eq!(Trial::run(|| 5).into_maybe(), Maybe::some(5));
    assert_eq!(Trial::<i32>::run(|| panic!("boom")).into_maybe(), Maybe::none());
}

// =============================================================================
// Deferred Builder: Nothing Runs Before Invoke
// =============================================================================

#[rstest]
fn the_builder_defers_every_step() {
    let operations = Arc::new(AtomicUsize::new(0));
    let cleanups = Arc::new(AtomicUsize::new(0));

    let op_count = operations.clone();
    let cleanup_count = cleanups.clone();
    let pipeline = attempt(move || {
        op_count.fetch_add(1, Ordering::SeqCst);
        42
    })
    .catch(|_| 0)
    .finally(move || {
        cleanup_count.fetch_add(1, Ordering::SeqCst);
    });

    // Recording the pipeline executed nothing.
    assert_eq!(operations.load(Ordering::SeqCst), 0);
    assert_eq!(cleanups.load(Ordering::SeqCst), 0);

    assert_eq!(pipeline.invoke(), 42);
    assert_eq!(operations.load(Ordering::SeqCst), 1);
    assert_eq!(cleanups.load(Ordering::SeqCst), 1);
}

#[rstest]
fn invoke_returns_the_handler_value_on_fault() {
    let pipeline = attempt(|| {
        if true {
            panic!("exploded")
        }
        0
    })
    .catch(|fault: Fault| {
        assert_eq!(fault.message(), "exploded");
        -1
    });

    assert_eq!(pipeline.invoke(), -1);
}

#[rstest]
fn invoke_without_a_fault_skips_the_handler() {
    let handled = Arc::new(AtomicUsize::new(0));

    let seen = handled.clone();
    let pipeline = attempt(|| 7).catch(move |_| {
        seen.fetch_add(1, Ordering::SeqCst);
        0
    });

    assert_eq!(pipeline.invoke(), 7);
    assert_eq!(handled.load(Ordering::SeqCst), 0);
}

// =============================================================================
// Finally Semantics
// =============================================================================

#[rstest]
fn finally_runs_exactly_once_when_the_operation_returns() {
    let cleanups = Arc::new(AtomicUsize::new(0));

    let cleanup_count = cleanups.clone();
    let pipeline = attempt(|| 1).catch(|_| 0).finally(move || {
        cleanup_count.fetch_add(1, Ordering::SeqCst);
    });

    assert_eq!(pipeline.invoke(), 1);
    assert_eq!(cleanups.load(Ordering::SeqCst), 1);
}

#[rstest]
fn finally_runs_exactly_once_when_the_operation_faults() {
    let cleanups = Arc::new(AtomicUsize::new(0));

    let cleanup_count = cleanups.clone();
    let pipeline = attempt(|| {
        if true {
            panic!("boom")
        }
        0
    })
    .catch(|_| -1)
    .finally(move || {
        cleanup_count.fetch_add(1, Ordering::SeqCst);
    });

    assert_eq!(pipeline.invoke(), -1);
    assert_eq!(cleanups.load(Ordering::SeqCst), 1);
}

#[rstest]
fn finally_runs_even_when_the_handler_faults() {
    let cleanups = Arc::new(AtomicUsize::new(0));

    let cleanup_count = cleanups.clone();
    let pipeline = attempt(|| {
        if true {
            panic!("original")
        }
        0
    })
    .catch(|_| -> i32 { panic!("handler fault") })
    .finally(move || {
        cleanup_count.fetch_add(1, Ordering::SeqCst);
    });

    // The handler fault propagates, but only after the cleanup has run.
    let unwound = catch_unwind(AssertUnwindSafe(|| pipeline.invoke()));
    assert!(unwound.is_err());
    assert_eq!(cleanups.load(Ordering::SeqCst), 1);
}

// =============================================================================
// Re-Entrancy: A Recipe, Not a Result
// =============================================================================

#[rstest]
fn every_invoke_reruns_the_whole_chain() {
    let operations = Arc::new(AtomicUsize::new(0));
    let cleanups = Arc::new(AtomicUsize::new(0));

    let op_count = operations.clone();
    let cleanup_count = cleanups.clone();
    let pipeline = attempt(move || op_count.fetch_add(1, Ordering::SeqCst) + 1)
        .catch(|_| 0)
        .finally(move || {
            cleanup_count.fetch_add(1, Ordering::SeqCst);
        });

    assert_eq!(pipeline.invoke(), 1);
    assert_eq!(pipeline.invoke(), 2);
    assert_eq!(pipeline.invoke(), 3);
    assert_eq!(operations.load(Ordering::SeqCst), 3);
    assert_eq!(cleanups.load(Ordering::SeqCst), 3);
}

#[rstest]
fn attempt_without_catch_yields_a_trial() {
    let pipeline = attempt(|| 21);
    let first = pipeline.invoke();
    let second = pipeline.invoke();
    assert_eq!(first.catch(|_| 0) + second.catch(|_| 0), 42);
}

// =============================================================================
// Async Boundary
// =============================================================================

#[cfg(feature = "async")]
mod async_boundary {
    use super::*;

    #[rstest]
    #[tokio::test]
    async fn run_async_captures_a_normal_return_as_success() {
        let trial = Trial::run_async(|| async { 1 + 1 }).await;
        assert!(trial.is_success());
        assert_eq!(trial.catch(|_| 0), 2);
    }

    #[rstest]
    #[tokio::test]
    async fn run_async_captures_a_panicking_future_as_failure() {
        let trial: Trial<i32> = Trial::run_async(|| async { panic!("async boom") }).await;
        assert!(trial.is_failure());
        let message = trial.match_with(|_| String::new(), |fault| fault.message().to_string());
        assert_eq!(message, "async boom");
    }

    #[rstest]
    #[tokio::test]
    async fn invoke_async_returns_the_handler_value_on_fault() {
        let pipeline = attempt(|| async {
            if true {
                panic!("late")
            }
            0
        })
        .catch(|fault: Fault| {
            assert_eq!(fault.message(), "late");
            -1
        });

        assert_eq!(pipeline.invoke_async().await, -1);
    }

    #[rstest]
    #[tokio::test]
    async fn invoke_async_runs_the_cleanup_exactly_once() {
        let cleanups = Arc::new(AtomicUsize::new(0));

        let cleanup_count = cleanups.clone();
        let pipeline = attempt(|| async { 5 }).catch(|_| 0).finally(move || {
            cleanup_count.fetch_add(1, Ordering::SeqCst);
        });

        assert_eq!(pipeline.invoke_async().await, 5);
        assert_eq!(cleanups.load(Ordering::SeqCst), 1);
    }

    #[rstest]
    #[tokio::test]
    async fn invoke_async_reruns_the_operation_each_time() {
        let operations = Arc::new(AtomicUsize::new(0));

        let op_count = operations.clone();
        let pipeline = attempt(move || {
            let op_count = op_count.clone();
            async move { op_count.fetch_add(1, Ordering::SeqCst) + 1 }
        })
        .catch(|_| 0);

        assert_eq!(pipeline.invoke_async().await, 1);
        assert_eq!(pipeline.invoke_async().await, 2);
    }
}
