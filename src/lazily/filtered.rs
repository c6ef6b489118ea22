use std::iter::{Fuse, FusedIterator};

use super::Cursor;
use crate::predicate::Predicate;

/// The elements of a source that satisfy a predicate.
///
/// Built by [`filter`](super::filter).
#[derive(Clone, Debug)]
pub struct Filtered<S, P> {
    source: S,
    predicate: P,
}

impl<S, P> Filtered<S, P>
where
    S: IntoIterator,
    P: Predicate<S::Item>,
{
    pub(super) const fn new(source: S, predicate: P) -> Self {
        Self { source, predicate }
    }
}

impl<S, P> IntoIterator for Filtered<S, P>
where
    S: IntoIterator,
    P: Predicate<S::Item>,
{
    type Item = S::Item;
    type IntoIter = FilteredCursor<S::IntoIter, P>;

    fn into_iter(self) -> Self::IntoIter {
        FilteredCursor {
            source: self.source.into_iter().fuse(),
            predicate: self.predicate,
            lookahead: None,
            exhausted: false,
        }
    }
}

impl<S, P> IntoIterator for &Filtered<S, P>
where
    S: IntoIterator + Clone,
    P: Predicate<S::Item> + Clone,
{
    type Item = S::Item;
    type IntoIter = FilteredCursor<S::IntoIter, P>;

    fn into_iter(self) -> Self::IntoIter {
        self.clone().into_iter()
    }
}

/// Traversal state of a [`Filtered`] sequence.
///
/// `has_next` scans forward to the next satisfying element and parks it in
/// a one-element lookahead, so it can be queried repeatedly without
/// consuming anything and the predicate sees each source element once.
pub struct FilteredCursor<C: Iterator, P> {
    source: Fuse<C>,
    predicate: P,
    lookahead: Option<C::Item>,
    exhausted: bool,
}

impl<C, P> Cursor for FilteredCursor<C, P>
where
    C: Iterator,
    P: Predicate<C::Item>,
{
    fn has_next(&mut self) -> bool {
        if self.lookahead.is_some() {
            return true;
        }
        for element in self.source.by_ref() {
            if self.predicate.evaluate(&element) {
                self.lookahead = Some(element);
                return true;
            }
        }
        if !self.exhausted {
            self.exhausted = true;
            tracing::trace!(adapter = "filtered", "cursor exhausted");
        }
        false
    }
}

impl<C, P> Iterator for FilteredCursor<C, P>
where
    C: Iterator,
    P: Predicate<C::Item>,
{
    type Item = C::Item;

    fn next(&mut self) -> Option<Self::Item> {
        if self.has_next() {
            self.lookahead.take()
        } else {
            None
        }
    }
}

impl<C, P> FusedIterator for FilteredCursor<C, P>
where
    C: Iterator,
    P: Predicate<C::Item>,
{
}
