use std::iter::{Fuse, FusedIterator, Peekable};

use super::Cursor;

/// A sequence of sequences, traversed one source after another.
///
/// Built by [`chain`](super::chain).
#[derive(Clone, Debug)]
pub struct Chained<S> {
    sources: S,
}

impl<S> Chained<S>
where
    S: IntoIterator,
    S::Item: IntoIterator,
{
    pub(super) const fn new(sources: S) -> Self {
        Self { sources }
    }
}

impl<S> IntoIterator for Chained<S>
where
    S: IntoIterator,
    S::Item: IntoIterator,
{
    type Item = <S::Item as IntoIterator>::Item;
    type IntoIter = ChainedCursor<S::IntoIter>;

    fn into_iter(self) -> Self::IntoIter {
        ChainedCursor::new(self.sources.into_iter())
    }
}

impl<S> IntoIterator for &Chained<S>
where
    S: IntoIterator + Clone,
    S::Item: IntoIterator,
{
    type Item = <S::Item as IntoIterator>::Item;
    type IntoIter = ChainedCursor<S::IntoIter>;

    fn into_iter(self) -> Self::IntoIter {
        self.clone().into_iter()
    }
}

/// Traversal state of a [`Chained`] sequence.
///
/// Holds the remaining sources and a cursor over the active one. Empty
/// sources are skipped while looking for the next element; once every
/// source is used up the cursor is permanently exhausted.
pub struct ChainedCursor<O>
where
    O: Iterator,
    O::Item: IntoIterator,
{
    sources: Fuse<O>,
    current: Option<Peekable<<O::Item as IntoIterator>::IntoIter>>,
    exhausted: bool,
}

impl<O> ChainedCursor<O>
where
    O: Iterator,
    O::Item: IntoIterator,
{
    fn new(sources: O) -> Self {
        Self {
            sources: sources.fuse(),
            current: None,
            exhausted: false,
        }
    }
}

impl<O> Cursor for ChainedCursor<O>
where
    O: Iterator,
    O::Item: IntoIterator,
{
    fn has_next(&mut self) -> bool {
        loop {
            if let Some(current) = self.current.as_mut()
                && current.peek().is_some()
            {
                return true;
            }
            match self.sources.next() {
                Some(source) => self.current = Some(source.into_iter().peekable()),
                None => {
                    self.current = None;
                    if !self.exhausted {
                        self.exhausted = true;
                        tracing::trace!(adapter = "chained", "cursor exhausted");
                    }
                    return false;
                }
            }
        }
    }
}

impl<O> Iterator for ChainedCursor<O>
where
    O: Iterator,
    O::Item: IntoIterator,
{
    type Item = <O::Item as IntoIterator>::Item;

    fn next(&mut self) -> Option<Self::Item> {
        if self.has_next() {
            self.current.as_mut().and_then(Iterator::next)
        } else {
            None
        }
    }
}

impl<O> FusedIterator for ChainedCursor<O>
where
    O: Iterator,
    O::Item: IntoIterator,
{
}
