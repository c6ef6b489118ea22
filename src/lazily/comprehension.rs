use std::fmt;
use std::iter::{Fuse, FusedIterator};

use smallvec::SmallVec;

use super::Cursor;
use crate::predicate::SharedPredicate;

/// Inline capacity for predicate lists; comprehensions rarely carry more.
type Predicates<'p, T> = SmallVec<[SharedPredicate<'p, T>; 4]>;

/// A mapper applied to the elements of a source that satisfy every one of
/// a list of predicates, fused into a single pass.
///
/// Built by [`comprehension`](super::comprehension) or the
/// [`comprehension!`](crate::comprehension!) macro.
pub struct Comprehension<'p, S: IntoIterator, F> {
    mapper: F,
    source: S,
    predicates: Predicates<'p, S::Item>,
}

impl<'p, S, F, R> Comprehension<'p, S, F>
where
    S: IntoIterator,
    F: Fn(S::Item) -> R,
{
    pub(super) fn new(mapper: F, source: S, predicates: Predicates<'p, S::Item>) -> Self {
        Self {
            mapper,
            source,
            predicates,
        }
    }

    /// Returns how many predicates guard the mapper.
    pub fn predicate_count(&self) -> usize {
        self.predicates.len()
    }
}

impl<S, F> Clone for Comprehension<'_, S, F>
where
    S: IntoIterator + Clone,
    F: Clone,
{
    fn clone(&self) -> Self {
        Self {
            mapper: self.mapper.clone(),
            source: self.source.clone(),
            predicates: self.predicates.clone(),
        }
    }
}

impl<S, F> fmt::Debug for Comprehension<'_, S, F>
where
    S: IntoIterator + fmt::Debug,
{
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("Comprehension")
            .field("source", &self.source)
            .field("predicates", &self.predicates.len())
            .finish_non_exhaustive()
    }
}

impl<'p, S, F, R> IntoIterator for Comprehension<'p, S, F>
where
    S: IntoIterator,
    F: Fn(S::Item) -> R,
{
    type Item = R;
    type IntoIter = ComprehensionCursor<'p, S::IntoIter, F>;

    fn into_iter(self) -> Self::IntoIter {
        ComprehensionCursor {
            source: self.source.into_iter().fuse(),
            mapper: self.mapper,
            predicates: self.predicates,
            lookahead: None,
            exhausted: false,
        }
    }
}

impl<'p, S, F, R> IntoIterator for &Comprehension<'p, S, F>
where
    S: IntoIterator + Clone,
    F: Fn(S::Item) -> R + Clone,
{
    type Item = R;
    type IntoIter = ComprehensionCursor<'p, S::IntoIter, F>;

    fn into_iter(self) -> Self::IntoIter {
        self.clone().into_iter()
    }
}

/// Traversal state of a [`Comprehension`].
///
/// Source elements are tested against the predicates in order, stopping at
/// the first failure; an element that passes is parked in the lookahead
/// and only mapped when it is taken.
pub struct ComprehensionCursor<'p, C: Iterator, F> {
    source: Fuse<C>,
    mapper: F,
    predicates: Predicates<'p, C::Item>,
    lookahead: Option<C::Item>,
    exhausted: bool,
}

impl<C, F, R> Cursor for ComprehensionCursor<'_, C, F>
where
    C: Iterator,
    F: Fn(C::Item) -> R,
{
    fn has_next(&mut self) -> bool {
        if self.lookahead.is_some() {
            return true;
        }
        for element in self.source.by_ref() {
            if self.predicates.iter().all(|predicate| predicate(&element)) {
                self.lookahead = Some(element);
                return true;
            }
        }
        if !self.exhausted {
            self.exhausted = true;
            tracing::trace!(adapter = "comprehension", "cursor exhausted");
        }
        false
    }
}

impl<C, F, R> Iterator for ComprehensionCursor<'_, C, F>
where
    C: Iterator,
    F: Fn(C::Item) -> R,
{
    type Item = R;

    fn next(&mut self) -> Option<R> {
        if self.has_next() {
            self.lookahead.take().map(&self.mapper)
        } else {
            None
        }
    }
}

impl<C, F, R> FusedIterator for ComprehensionCursor<'_, C, F>
where
    C: Iterator,
    F: Fn(C::Item) -> R,
{
}
