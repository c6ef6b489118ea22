use std::iter::{FusedIterator, Peekable};

use super::Cursor;

/// A source with a mapper applied to each element.
///
/// Built by [`map`](super::map).
#[derive(Clone, Debug)]
pub struct Mapped<S, F> {
    source: S,
    mapper: F,
}

impl<S, F, R> Mapped<S, F>
where
    S: IntoIterator,
    F: Fn(S::Item) -> R,
{
    pub(super) const fn new(source: S, mapper: F) -> Self {
        Self { source, mapper }
    }
}

impl<S, F, R> IntoIterator for Mapped<S, F>
where
    S: IntoIterator,
    F: Fn(S::Item) -> R,
{
    type Item = R;
    type IntoIter = MappedCursor<S::IntoIter, F>;

    fn into_iter(self) -> Self::IntoIter {
        MappedCursor {
            source: self.source.into_iter().peekable(),
            mapper: self.mapper,
        }
    }
}

impl<S, F, R> IntoIterator for &Mapped<S, F>
where
    S: IntoIterator + Clone,
    F: Fn(S::Item) -> R + Clone,
{
    type Item = R;
    type IntoIter = MappedCursor<S::IntoIter, F>;

    fn into_iter(self) -> Self::IntoIter {
        self.clone().into_iter()
    }
}

/// Traversal state of a [`Mapped`] sequence.
pub struct MappedCursor<C: Iterator, F> {
    source: Peekable<C>,
    mapper: F,
}

impl<C, F, R> Cursor for MappedCursor<C, F>
where
    C: Iterator,
    F: Fn(C::Item) -> R,
{
    fn has_next(&mut self) -> bool {
        self.source.peek().is_some()
    }
}

impl<C, F, R> Iterator for MappedCursor<C, F>
where
    C: Iterator,
    F: Fn(C::Item) -> R,
{
    type Item = R;

    fn next(&mut self) -> Option<R> {
        self.source.next().map(&self.mapper)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.source.size_hint()
    }
}

impl<C, F, R> FusedIterator for MappedCursor<C, F>
where
    C: FusedIterator,
    F: Fn(C::Item) -> R,
{
}
