//! Unit tests for predicate values and combinators.
//!
//! `not`, `always_true` and `always_false` produce plain values, so two
//! predicates built the same way are equal and hash alike.

#![cfg(feature = "predicate")]

use funk::FunkError;
use funk::predicate::{
    AlwaysFalse, AlwaysTrue, Not, Predicate, SharedPredicate, always_false, always_true, not, shared, try_not,
};
use rstest::rstest;
use std::collections::HashSet;

// =============================================================================
// Evaluation
// =============================================================================

#[rstest]
#[case(1, false)]
#[case(2, true)]
#[case(-4, true)]
fn not_negates_closure(#[case] value: i32, #[case] expected: bool) {
    let is_odd = |value: &i32| value % 2 != 0;
    assert_eq!(not(is_odd).evaluate(&value), expected);
}

#[rstest]
fn constants_ignore_input() {
    assert!(always_true().evaluate("anything"));
    assert!(!always_false().evaluate(&42));
    assert!(not(always_false()).evaluate(&()));
}

#[rstest]
fn double_negation_restores_result() {
    let is_dog = |name: &&str| *name == "dog";
    let twice = not(not(is_dog));

    assert!(twice.evaluate(&"dog"));
    assert!(!twice.evaluate(&"cat"));
}

// =============================================================================
// Structural Equality
// =============================================================================

#[rstest]
fn not_of_equal_predicates_are_equal() {
    assert_eq!(not(always_false()), not(always_false()));
    assert_eq!(not(always_true()), Not::new(AlwaysTrue));
    assert_eq!(not(always_true()).inner(), &AlwaysTrue);
}

#[rstest]
fn constants_are_equal_to_themselves() {
    assert_eq!(always_true(), AlwaysTrue);
    assert_eq!(always_false(), AlwaysFalse);
}

#[rstest]
fn equal_predicates_hash_alike() {
    let set: HashSet<Not<Not<AlwaysFalse>>> = [not(not(always_false())), Not::new(Not::new(AlwaysFalse))]
        .into_iter()
        .collect();
    assert_eq!(set.len(), 1);
}

// =============================================================================
// Absent Arguments
// =============================================================================

#[rstest]
fn try_not_rejects_absent_predicate() {
    assert_eq!(
        try_not::<AlwaysTrue>(None),
        Err(FunkError::InvalidArgument { argument: "predicate" })
    );
    assert_eq!(try_not(Some(always_true())), Ok(not(always_true())));
}

// =============================================================================
// Shared Predicates
// =============================================================================

#[rstest]
fn shared_predicates_mix_types() {
    let predicates: Vec<SharedPredicate<'_, i32>> = vec![
        shared(|value: &i32| *value > 0),
        shared(not(always_false())),
        shared(always_true()),
    ];

    assert!(predicates.iter().all(|predicate| predicate(&3)));
    assert!(!predicates.iter().all(|predicate| predicate(&-3)));
}
