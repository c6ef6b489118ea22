use std::fmt;

use super::{Description, Matcher};
use crate::control::Either;

/// Matches any `Left`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct EitherAnyLeftMatcher;

/// Matches any `Right`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct EitherAnyRightMatcher;

/// Matches a `Left` whose payload equals the expected value.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct EitherLeftMatcher<V> {
    expected: V,
}

/// Matches a `Right` whose payload equals the expected value.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct EitherRightMatcher<V> {
    expected: V,
}

/// Matches any `Left`.
pub const fn is_left() -> EitherAnyLeftMatcher {
    EitherAnyLeftMatcher
}

/// Matches any `Right`.
pub const fn is_right() -> EitherAnyRightMatcher {
    EitherAnyRightMatcher
}

/// Matches `Left(expected)`.
pub const fn is_left_with<V>(expected: V) -> EitherLeftMatcher<V> {
    EitherLeftMatcher { expected }
}

/// Matches `Right(expected)`.
pub const fn is_right_with<V>(expected: V) -> EitherRightMatcher<V> {
    EitherRightMatcher { expected }
}

impl<L, R> Matcher<Either<L, R>> for EitherAnyLeftMatcher {
    fn matches(&self, item: &Either<L, R>) -> bool {
        item.is_left()
    }

    fn describe_to(&self, description: &mut Description) {
        description.append_text("Either to be Left.");
    }

    fn describe_mismatch(&self, _item: &Either<L, R>, description: &mut Description) {
        description.append_text("got Right.");
    }
}

impl<L, R> Matcher<Either<L, R>> for EitherAnyRightMatcher {
    fn matches(&self, item: &Either<L, R>) -> bool {
        item.is_right()
    }

    fn describe_to(&self, description: &mut Description) {
        description.append_text("Either to be Right.");
    }

    fn describe_mismatch(&self, _item: &Either<L, R>, description: &mut Description) {
        description.append_text("got Left.");
    }
}

impl<V, L, R> Matcher<Either<L, R>> for EitherLeftMatcher<V>
where
    V: fmt::Debug,
    L: PartialEq<V> + fmt::Debug,
{
    fn matches(&self, item: &Either<L, R>) -> bool {
        item.left_ref().is_some_and(|value| *value == self.expected)
    }

    fn describe_to(&self, description: &mut Description) {
        description
            .append_text("Either to be Left with value ")
            .append_value(&self.expected)
            .append_text(".");
    }

    fn describe_mismatch(&self, item: &Either<L, R>, description: &mut Description) {
        match item.left_ref() {
            Some(value) => description.append_text("got Left with value ").append_value(value),
            None => description.append_text("got Right"),
        }
        .append_text(".");
    }
}

impl<V, L, R> Matcher<Either<L, R>> for EitherRightMatcher<V>
where
    V: fmt::Debug,
    R: PartialEq<V> + fmt::Debug,
{
    fn matches(&self, item: &Either<L, R>) -> bool {
        item.right_ref().is_some_and(|value| *value == self.expected)
    }

    fn describe_to(&self, description: &mut Description) {
        description
            .append_text("Either to be Right with value ")
            .append_value(&self.expected)
            .append_text(".");
    }

    fn describe_mismatch(&self, item: &Either<L, R>, description: &mut Description) {
        match item.right_ref() {
            Some(value) => description.append_text("got Right with value ").append_value(value),
            None => description.append_text("got Left"),
        }
        .append_text(".");
    }
}
