//! Unit tests for `HashBag`, the hash-backed multiset.
//!
//! A bag counts duplicates: its length is the sum of the multiplicities of
//! its elements, and removing an element removes a single occurrence.

#![cfg(feature = "collections")]

use funk::collections::{Bag, HashBag};
use rstest::{fixture, rstest};

#[fixture]
fn one_two_two_three() -> HashBag<i32> {
    [1, 2, 2, 3].into_iter().collect()
}

// =============================================================================
// Counting
// =============================================================================

#[rstest]
fn duplicates_are_counted(one_two_two_three: HashBag<i32>) {
    assert_eq!(one_two_two_three.len(), 4);
    assert_eq!(one_two_two_three.distinct_len(), 3);
    assert_eq!(one_two_two_three.count(&2), 2);
    assert_eq!(one_two_two_three.count(&9), 0);
}

#[rstest]
fn iteration_repeats_each_occurrence(one_two_two_three: HashBag<i32>) {
    let mut elements: Vec<i32> = one_two_two_three.iter().copied().collect();
    elements.sort_unstable();
    assert_eq!(elements, vec![1, 2, 2, 3]);
}

// =============================================================================
// Removal
// =============================================================================

#[rstest]
fn remove_takes_one_occurrence(mut one_two_two_three: HashBag<i32>) {
    assert!(one_two_two_three.remove(&2));

    assert_eq!(one_two_two_three.len(), 3);
    assert_eq!(one_two_two_three.count(&2), 1);
    assert!(one_two_two_three.contains(&2));
}

#[rstest]
fn remove_all_honours_requested_multiplicity(mut one_two_two_three: HashBag<i32>) {
    let removed = one_two_two_three.remove_all(&[2, 2, 3, 7]);

    assert_eq!(removed, 3);
    assert_eq!(one_two_two_three.len(), 1);
    assert!(!one_two_two_three.contains(&2));
    assert!(one_two_two_three.contains(&1));
}

#[rstest]
fn clear_empties_the_bag(mut one_two_two_three: HashBag<i32>) {
    one_two_two_three.clear();

    assert!(one_two_two_three.is_empty());
    assert_eq!(one_two_two_three.count(&1), 0);
    assert_eq!(one_two_two_three.iter().count(), 0);
}

// =============================================================================
// Equality and Construction
// =============================================================================

#[rstest]
fn equality_ignores_insertion_order(one_two_two_three: HashBag<i32>) {
    let shuffled: HashBag<i32> = [2, 3, 2, 1].into_iter().collect();
    let fewer_twos: HashBag<i32> = [1, 2, 3].into_iter().collect();

    assert_eq!(one_two_two_three, shuffled);
    assert_ne!(one_two_two_three, fewer_twos);
}

#[rstest]
fn add_and_extend_accumulate() {
    let mut bag = HashBag::new();
    bag.add("dog");
    bag.add_all(["cat", "dog"]);
    bag.extend(["dog"]);

    assert_eq!(bag.count(&"dog"), 3);
    assert_eq!(bag.len(), 4);
}

#[rstest]
fn debug_lists_every_occurrence() {
    let bag: HashBag<i32> = [5, 5].into_iter().collect();
    assert_eq!(format!("{bag:?}"), "[5, 5]");
}

// =============================================================================
// Multiplicity Laws
// =============================================================================

mod laws {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn prop_len_is_sum_of_counts(elements in prop::collection::vec(0..5u8, 0..40)) {
            let bag: HashBag<u8> = elements.iter().copied().collect();
            let total: usize = (0..5u8).map(|element| bag.count(&element)).sum();
            prop_assert_eq!(bag.len(), elements.len());
            prop_assert_eq!(total, elements.len());
        }

        #[test]
        fn prop_count_matches_occurrences(elements in prop::collection::vec(0..5u8, 0..40), probe in 0..5u8) {
            let bag: HashBag<u8> = elements.iter().copied().collect();
            let expected = elements.iter().filter(|element| **element == probe).count();
            prop_assert_eq!(bag.count(&probe), expected);
        }

        #[test]
        fn prop_add_then_remove_restores_bag(elements in prop::collection::vec(0..5u8, 0..40), extra in 0..5u8) {
            let original: HashBag<u8> = elements.into_iter().collect();
            let mut bag = original.clone();
            bag.add(extra);
            prop_assert!(bag.remove(&extra));
            prop_assert_eq!(bag, original);
        }
    }
}
