//! Unit tests for the closed tagged union family `Union2..Union9`.
//!
//! The central contract: `match_with` invoked with one handler per slot
//! calls exactly the handler matching the constructing variant, for every
//! arity. `effect` does the same and discards results. Exhaustiveness is
//! compile-time (one closure argument per slot), so these tests focus on
//! the runtime dispatch behavior.

#![cfg(feature = "union")]

use rstest::rstest;
use sumrail::union::{Union2, Union3, Union4, Union5, Union6, Union7, Union8, Union9};

// =============================================================================
// Construction and Slot Reporting
// =============================================================================

#[rstest]
fn union2_reports_active_slot() {
    let first: Union2<i32, String> = Union2::first(42);
    assert!(first.is_first());
    assert!(!first.is_second());
    assert_eq!(first.slot(), 1);

    let second: Union2<i32, String> = Union2::second("text".to_string());
    assert!(second.is_second());
    assert!(!second.is_first());
    assert_eq!(second.slot(), 2);
}

#[rstest]
fn union3_reports_active_slot() {
    let third: Union3<i32, String, bool> = Union3::third(true);
    assert!(third.is_third());
    assert!(!third.is_first());
    assert!(!third.is_second());
    assert_eq!(third.slot(), 3);
}

#[rstest]
fn constructors_and_variants_agree() {
    let built: Union2<i32, String> = Union2::first(1);
    let spelled: Union2<i32, String> = Union2::First(1);
    assert_eq!(built, spelled);
}

// =============================================================================
// Exhaustive Dispatch: match_with
// =============================================================================

#[rstest]
fn union2_match_dispatches_first() {
    let value: Union2<i32, String> = Union2::first(21);
    let result = value.match_with(|n| n * 2, |s| s.len() as i32);
    assert_eq!(result, 42);
}

#[rstest]
fn union2_match_dispatches_second() {
    let value: Union2<i32, String> = Union2::second("hello".to_string());
    let result = value.match_with(|n| n * 2, |s| s.len() as i32);
    assert_eq!(result, 5);
}

#[rstest]
fn union3_match_dispatches_each_slot() {
    let cases: Vec<(Union3<i32, i32, i32>, usize)> = vec![
        (Union3::first(0), 1),
        (Union3::second(0), 2),
        (Union3::third(0), 3),
    ];
    for (value, expected) in cases {
        let dispatched = value.match_with(|_| 1, |_| 2, |_| 3);
        assert_eq!(dispatched, expected);
    }
}

#[rstest]
fn union4_match_dispatches_each_slot() {
    let cases: Vec<(Union4<i32, i32, i32, i32>, usize)> = vec![
        (Union4::first(0), 1),
        (Union4::second(0), 2),
        (Union4::third(0), 3),
        (Union4::fourth(0), 4),
    ];
    for (value, expected) in cases {
        let dispatched = value.match_with(|_| 1, |_| 2, |_| 3, |_| 4);
        assert_eq!(dispatched, expected);
    }
}

#[rstest]
fn union5_match_dispatches_each_slot() {
    let cases: Vec<(Union5<i32, i32, i32, i32, i32>, usize)> = vec![
        (Union5::first(0), 1),
        (Union5::second(0), 2),
        (Union5::third(0), 3),
        (Union5::fourth(0), 4),
        (Union5::fifth(0), 5),
    ];
    for (value, expected) in cases {
        let dispatched = value.match_with(|_| 1, |_| 2, |_| 3, |_| 4, |_| 5);
        assert_eq!(dispatched, expected);
    }
}

#[rstest]
fn union6_match_dispatches_each_slot() {
    let cases: Vec<(Union6<i32, i32, i32, i32, i32, i32>, usize)> = vec![
        (Union6::first(0), 1),
        (Union6::second(0), 2),
        (Union6::third(0), 3),
        (Union6::fourth(0), 4),
        (Union6::fifth(0), 5),
        (Union6::sixth(0), 6),
    ];
    for (value, expected) in cases {
        let dispatched = value.match_with(|_| 1, |_| 2, |_| 3, |_| 4, |_| 5, |_| 6);
        assert_eq!(dispatched, expected);
    }
}

#[rstest]
fn union7_match_dispatches_each_slot() {
    let cases: Vec<(Union7<i32, i32, i32, i32, i32, i32, i32>, usize)> = vec![
        (Union7::first(0), 1),
        (Union7::second(0), 2),
        (Union7::third(0), 3),
        (Union7::fourth(0), 4),
        (Union7::fifth(0), 5),
        (Union7::sixth(0), 6),
        (Union7::seventh(0), 7),
    ];
    for (value, expected) in cases {
        let dispatched = value.match_with(|_| 1, |_| 2, |_| 3, |_| 4, |_| 5, |_| 6, |_| 7);
        assert_eq!(dispatched, expected);
    }
}

#[rstest]
fn union8_match_dispatches_each_slot() {
    let cases: Vec<(Union8<i32, i32, i32, i32, i32, i32, i32, i32>, usize)> = vec![
        (Union8::first(0), 1),
        (Union8::second(0), 2),
        (Union8::third(0), 3),
        (Union8::fourth(0), 4),
        (Union8::fifth(0), 5),
        (Union8::sixth(0), 6),
        (Union8::seventh(0), 7),
        (Union8::eighth(0), 8),
    ];
    for (value, expected) in cases {
        let dispatched =
            value.match_with(|_| 1, |_| 2, |_| 3, |_| 4, |_| 5, |_| 6, |_| 7, |_| 8);
        assert_eq!(dispatched, expected);
    }
}

#[rstest]
fn union9_match_dispatches_each_slot() {
    let cases: Vec<(Union9<i32, i32, i32, i32, i32, i32, i32, i32, i32>, usize)> = vec![
        (Union9::first(0), 1),
        (Union9::second(0), 2),
        (Union9::third(0), 3),
        (Union9::fourth(0), 4),
        (Union9::fifth(0), 5),
        (Union9::sixth(0), 6),
        (Union9::seventh(0), 7),
        (Union9::eighth(0), 8),
        (Union9::ninth(0), 9),
    ];
    for (value, expected) in cases {
        let dispatched =
            value.match_with(|_| 1, |_| 2, |_| 3, |_| 4, |_| 5, |_| 6, |_| 7, |_| 8, |_| 9);
        assert_eq!(dispatched, expected);
    }
}

#[rstest]
fn match_receives_the_contained_value() {
    let value: Union3<i32, String, bool> = Union3::second("railway".to_string());
    let length = value.match_with(|_| 0, |s| s.len(), |_| 0);
    assert_eq!(length, 7);
}

// =============================================================================
// Exhaustive Dispatch: effect
// =============================================================================

#[rstest]
fn union2_effect_runs_exactly_one_handler() {
    let mut first_calls = 0;
    let mut second_calls = 0;

    let value: Union2<i32, String> = Union2::first(5);
    value.effect(|_| first_calls += 1, |_| second_calls += 1);

    assert_eq!(first_calls, 1);
    assert_eq!(second_calls, 0);
}

#[rstest]
fn union9_effect_runs_only_the_matching_handler() {
    let mut calls = vec![0usize; 9];
    let value: Union9<i32, i32, i32, i32, i32, i32, i32, i32, i32> = Union9::fifth(0);

    {
        let [c1, c2, c3, c4, c5, c6, c7, c8, c9] = &mut calls[..] else {
            unreachable!();
        };
        value.effect(
            |_| *c1 += 1,
            |_| *c2 += 1,
            |_| *c3 += 1,
            |_| *c4 += 1,
            |_| *c5 += 1,
            |_| *c6 += 1,
            |_| *c7 += 1,
            |_| *c8 += 1,
            |_| *c9 += 1,
        );
    }

    assert_eq!(calls, vec![0, 0, 0, 0, 1, 0, 0, 0, 0]);
}

// =============================================================================
// Async Dispatch
// =============================================================================

#[cfg(feature = "async")]
mod async_dispatch {
    use super::*;

    #[rstest]
    #[tokio::test]
    async fn union2_match_async_awaits_matching_handler() {
        let value: Union2<i32, String> = Union2::first(21);
        let result = value
            .match_async(|n| async move { n * 2 }, |s| async move { s.len() as i32 })
            .await;
        assert_eq!(result, 42);
    }

    #[rstest]
    #[tokio::test]
    async fn union3_effect_async_runs_exactly_one_handler() {
        use std::sync::Arc;
        use std::sync::atomic::{AtomicUsize, Ordering};

        let counter = Arc::new(AtomicUsize::new(0));
        let value: Union3<i32, String, bool> = Union3::third(true);

        let for_third = counter.clone();
        value
            .effect_async(
                |_| async {},
                |_| async {},
                move |_| async move {
                    for_third.fetch_add(1, Ordering::SeqCst);
                },
            )
            .await;

        assert_eq!(counter.load(Ordering::SeqCst), 1);
    }
}
