//! Boolean-valued function values.
//!
//! - [`Predicate`]: a test on a single value, implemented by every
//!   `Fn(&T) -> bool` closure and by the value types below
//! - [`Equivalence`]: a test relating two values
//! - [`Not`], [`AlwaysTrue`], [`AlwaysFalse`]: predicate values with
//!   structural equality, so composed predicates can be compared
//! - [`SharedPredicate`]: a reference-counted, type-erased predicate used
//!   to mix differently-typed predicates in one list
//!
//! # Examples
//!
//! ```rust
//! use funk::predicate::{AlwaysFalse, Not, Predicate, always_false, not};
//!
//! let is_even = |value: &i32| value % 2 == 0;
//! assert!(not(is_even).evaluate(&3));
//!
//! // Predicate values compare by structure, not identity
//! assert_eq!(not(always_false()), Not::new(AlwaysFalse));
//! ```

mod combinators;

use std::rc::Rc;

pub use combinators::{AlwaysFalse, AlwaysTrue, Not, always_false, always_true, not, try_not};

/// A test on a single value.
///
/// Implemented for every closure or function of type `Fn(&T) -> bool`.
/// Closures passed where a `Predicate` is expected need an annotated
/// parameter type, e.g. `|value: &i32| *value > 0`.
pub trait Predicate<T: ?Sized> {
    /// Returns whether `input` satisfies this predicate.
    fn evaluate(&self, input: &T) -> bool;
}

impl<T: ?Sized, F> Predicate<T> for F
where
    F: Fn(&T) -> bool,
{
    #[inline]
    fn evaluate(&self, input: &T) -> bool {
        self(input)
    }
}

/// A relation between a value of type `A` and a value of type `B`.
///
/// Used by [`equate`](crate::lazily::equate) to compare two sequences
/// position by position. Implemented for every `Fn(&A, &B) -> bool`.
pub trait Equivalence<A: ?Sized, B: ?Sized = A> {
    /// Returns whether `first` and `second` are equivalent.
    fn equal(&self, first: &A, second: &B) -> bool;
}

impl<A: ?Sized, B: ?Sized, F> Equivalence<A, B> for F
where
    F: Fn(&A, &B) -> bool,
{
    #[inline]
    fn equal(&self, first: &A, second: &B) -> bool {
        self(first, second)
    }
}

/// A type-erased predicate that can be cloned cheaply.
pub type SharedPredicate<'a, T> = Rc<dyn Fn(&T) -> bool + 'a>;

/// Erases the type of `predicate` so it can sit in a list next to
/// predicates of other types.
///
/// # Examples
///
/// ```rust
/// use funk::predicate::{SharedPredicate, always_true, shared};
///
/// let predicates: Vec<SharedPredicate<'_, i32>> = vec![
///     shared(|value: &i32| *value > 0),
///     shared(always_true()),
/// ];
/// assert!(predicates.iter().all(|predicate| predicate(&4)));
/// ```
pub fn shared<'a, T, P>(predicate: P) -> SharedPredicate<'a, T>
where
    T: ?Sized,
    P: Predicate<T> + 'a,
{
    Rc::new(move |input: &T| predicate.evaluate(input))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn test_closure_is_predicate() {
        let is_positive = |value: &i32| *value > 0;
        assert!(is_positive.evaluate(&1));
        assert!(!is_positive.evaluate(&-1));
    }

    #[rstest]
    fn test_predicate_over_unsized_input() {
        let is_empty = |text: &str| text.is_empty();
        assert!(is_empty.evaluate(""));
        assert!(!is_empty.evaluate("dog"));
    }

    #[rstest]
    fn test_closure_is_equivalence() {
        let case_insensitive = |first: &String, second: &String| first.eq_ignore_ascii_case(second);
        assert!(case_insensitive.equal(&"Dog".to_string(), &"DOG".to_string()));
        assert!(!case_insensitive.equal(&"Cat".to_string(), &"BAT".to_string()));
    }

    #[rstest]
    fn test_shared_predicate_delegates() {
        let predicate: SharedPredicate<'_, i32> = shared(not(|value: &i32| *value > 2));
        let copy = Rc::clone(&predicate);

        assert!(predicate(&1));
        assert!(!copy(&3));
    }
}
