#![cfg(feature = "lazily")]
//! Property-based tests for the lazy sequence adapters.
//!
//! ## Adapter Laws
//! - **Chain**: `chain([xs, ys])` yields `xs ++ ys`
//! - **Filter**: `filter(xs, p)` agrees with `Iterator::filter`
//! - **Map**: `map(xs, f)` agrees with `Iterator::map`
//! - **Comprehension**: `comprehension(f, xs, [p, q])` == `map(filter(filter(xs, p), q), f)`
//! - **Equate**: `equate(xs, ys, eq)` has length `min(|xs|, |ys|)`
//!
//! ## Restartability Laws
//! - Two traversals of the same adapter yield the same elements
//! - Interleaving two cursors does not change what either one yields

use funk::comprehension;
use funk::eagerly::{materialize, reduce};
use funk::lazily::{Iterable, chain, equate, filter, map};
use proptest::prelude::*;

fn is_even(value: &i32) -> bool {
    value % 2 == 0
}

fn is_positive(value: &i32) -> bool {
    *value > 0
}

fn halve(value: i32) -> i32 {
    value / 2
}

/// Advances two cursors alternately and returns what each one yielded.
fn interleave<I: Iterable>(iterable: &I) -> (Vec<I::Item>, Vec<I::Item>) {
    let mut first = iterable.cursor();
    let mut second = iterable.cursor();
    let (mut left, mut right) = (Vec::new(), Vec::new());
    loop {
        let (a, b) = (first.next(), second.next());
        if a.is_none() && b.is_none() {
            return (left, right);
        }
        left.extend(a);
        right.extend(b);
    }
}

// =============================================================================
// Adapter Laws
// =============================================================================

proptest! {
    #[test]
    fn prop_chain_concatenates(xs in prop::collection::vec(any::<i32>(), 0..20),
                               ys in prop::collection::vec(any::<i32>(), 0..20)) {
        let expected: Vec<i32> = xs.iter().chain(&ys).copied().collect();
        prop_assert_eq!(materialize(&chain(vec![xs, ys])), expected);
    }

    #[test]
    fn prop_filter_matches_iterator_filter(xs in prop::collection::vec(any::<i32>(), 0..50)) {
        let expected: Vec<i32> = xs.iter().copied().filter(is_even).collect();
        prop_assert_eq!(materialize(&filter(xs, is_even)), expected);
    }

    #[test]
    fn prop_map_matches_iterator_map(xs in prop::collection::vec(any::<i32>(), 0..50)) {
        let expected: Vec<i32> = xs.iter().copied().map(halve).collect();
        prop_assert_eq!(materialize(&map(xs, halve)), expected);
    }

    #[test]
    fn prop_comprehension_is_filters_then_map(xs in prop::collection::vec(any::<i32>(), 0..50)) {
        let nested = map(filter(filter(xs.clone(), is_even), is_positive), halve);
        let fused = comprehension!(halve, xs; is_even, is_positive);
        prop_assert_eq!(materialize(&fused), materialize(&nested));
    }

    #[test]
    fn prop_equate_length_is_shorter_length(xs in prop::collection::vec(any::<i32>(), 0..20),
                                            ys in prop::collection::vec(any::<i32>(), 0..20)) {
        let expected = xs.len().min(ys.len());
        let equated = equate(xs, ys, |a: &i32, b: &i32| a == b);
        prop_assert_eq!(equated.cursor().count(), expected);
    }

    #[test]
    fn prop_equate_with_self_is_all_true(xs in prop::collection::vec(any::<i32>(), 0..20)) {
        let equated = equate(&xs, &xs, |a: &&i32, b: &&i32| a == b);
        prop_assert!(equated.cursor().all(|equal| equal));
    }

    #[test]
    fn prop_reduce_sums_filtered(xs in prop::collection::vec(-1000..1000i32, 0..50)) {
        let expected: i32 = xs.iter().copied().filter(is_even).sum();
        prop_assert_eq!(reduce(&filter(xs, is_even), 0, |total: i32, value: i32| total + value), expected);
    }
}

// =============================================================================
// Restartability Laws
// =============================================================================

proptest! {
    #[test]
    fn prop_traversals_repeat(xs in prop::collection::vec(any::<i32>(), 0..30)) {
        let adapted = comprehension!(halve, xs; is_even);
        prop_assert_eq!(materialize(&adapted), materialize(&adapted));
    }

    #[test]
    fn prop_interleaved_chain_cursors(xs in prop::collection::vec(any::<i32>(), 0..20),
                                      ys in prop::collection::vec(any::<i32>(), 0..20)) {
        let chained = chain(vec![xs, ys]);
        let (left, right) = interleave(&chained);
        prop_assert_eq!(&left, &right);
        prop_assert_eq!(left, materialize(&chained));
    }

    #[test]
    fn prop_interleaved_filter_cursors(xs in prop::collection::vec(any::<i32>(), 0..30)) {
        let filtered = filter(xs, is_positive);
        let (left, right) = interleave(&filtered);
        prop_assert_eq!(left, right);
    }

    #[test]
    fn prop_interleaved_equate_cursors(xs in prop::collection::vec(0..3i32, 0..20),
                                       ys in prop::collection::vec(0..3i32, 0..20)) {
        let equated = equate(xs, ys, |a: &i32, b: &i32| a == b);
        let (left, right) = interleave(&equated);
        prop_assert_eq!(left, right);
    }
}
