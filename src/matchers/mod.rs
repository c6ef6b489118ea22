//! Matchers for asserting on the values produced by this crate.
//!
//! A [`Matcher`] decides whether a value is acceptable and can describe both
//! what it expects and why a given value falls short. [`assert_that`] turns
//! a failed match into a panic carrying both descriptions.
//!
//! - [`is_left`], [`is_right`], [`is_left_with`], [`is_right_with`]:
//!   matchers over [`Either`](crate::control::Either)
//! - [`has_only_items_in_order`], [`contains_in_any_order`]: matchers over
//!   sequences and bags
//!
//! Matchers are plain values with structural equality, so two matchers built
//! from the same arguments compare equal.
//!
//! # Examples
//!
//! ```rust
//! use funk::collections::HashBag;
//! use funk::control::{Either, left};
//! use funk::matchers::{assert_that, contains_in_any_order, is_left_with};
//!
//! let value: Either<i32, String> = left(3);
//! assert_that(&value, is_left_with(3));
//!
//! let bag: HashBag<i32> = [1, 2, 2, 3].into_iter().collect();
//! assert_that(&bag, contains_in_any_order([2, 1, 3, 2]));
//! ```

mod collections;
mod either;

use std::fmt::{self, Write};

pub use collections::{ContainsInAnyOrder, HasOnlyItemsInOrder, contains_in_any_order, has_only_items_in_order};
pub use either::{
    EitherAnyLeftMatcher, EitherAnyRightMatcher, EitherLeftMatcher, EitherRightMatcher, is_left, is_left_with,
    is_right, is_right_with,
};

/// Accumulated text describing an expectation or a mismatch.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Description {
    text: String,
}

impl Description {
    /// Creates an empty description.
    pub const fn new() -> Self {
        Self { text: String::new() }
    }

    /// Appends literal text.
    pub fn append_text(&mut self, text: &str) -> &mut Self {
        self.text.push_str(text);
        self
    }

    /// Appends the debug rendering of `value`.
    pub fn append_value<V: fmt::Debug + ?Sized>(&mut self, value: &V) -> &mut Self {
        let _ = write!(self.text, "{value:?}");
        self
    }

    /// Returns the text written so far.
    pub fn as_str(&self) -> &str {
        &self.text
    }
}

impl fmt::Display for Description {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(&self.text)
    }
}

/// A test on values of type `T` that can explain itself.
pub trait Matcher<T: ?Sized> {
    /// Returns whether `item` satisfies this matcher.
    fn matches(&self, item: &T) -> bool;

    /// Describes what this matcher expects.
    fn describe_to(&self, description: &mut Description);

    /// Describes why `item` does not satisfy this matcher.
    fn describe_mismatch(&self, item: &T, description: &mut Description);
}

/// Panics unless `matcher` accepts `actual`.
///
/// # Panics
///
/// Panics with the matcher's expectation and mismatch descriptions when the
/// match fails.
#[track_caller]
pub fn assert_that<T, M>(actual: &T, matcher: M)
where
    T: ?Sized,
    M: Matcher<T>,
{
    if matcher.matches(actual) {
        return;
    }
    let mut expected = Description::new();
    matcher.describe_to(&mut expected);
    let mut mismatch = Description::new();
    matcher.describe_mismatch(actual, &mut mismatch);
    panic!("\nExpected: {expected}\n     but: {mismatch}");
}
