use std::iter::{Fuse, FusedIterator, Peekable};

use super::Cursor;

/// Two sequences of possibly different types but the same element type,
/// traversed one after the other.
///
/// Built by [`concat`](super::concat) or the [`chain!`](crate::chain!)
/// macro, which nests concatenations to join any number of sources.
#[derive(Clone, Debug)]
pub struct Concatenated<A, B> {
    first: A,
    second: B,
}

impl<A, B> Concatenated<A, B>
where
    A: IntoIterator,
    B: IntoIterator<Item = A::Item>,
{
    pub(super) const fn new(first: A, second: B) -> Self {
        Self { first, second }
    }
}

impl<A, B> IntoIterator for Concatenated<A, B>
where
    A: IntoIterator,
    B: IntoIterator<Item = A::Item>,
{
    type Item = A::Item;
    type IntoIter = ConcatenatedCursor<A::IntoIter, B::IntoIter>;

    fn into_iter(self) -> Self::IntoIter {
        ConcatenatedCursor {
            first: self.first.into_iter().fuse().peekable(),
            second: self.second.into_iter().fuse().peekable(),
            exhausted: false,
        }
    }
}

impl<A, B> IntoIterator for &Concatenated<A, B>
where
    A: IntoIterator + Clone,
    B: IntoIterator<Item = A::Item> + Clone,
{
    type Item = A::Item;
    type IntoIter = ConcatenatedCursor<A::IntoIter, B::IntoIter>;

    fn into_iter(self) -> Self::IntoIter {
        self.clone().into_iter()
    }
}

/// Traversal state of a [`Concatenated`] sequence.
///
/// The second source is not touched until the first one is used up.
pub struct ConcatenatedCursor<X: Iterator, Y: Iterator> {
    first: Peekable<Fuse<X>>,
    second: Peekable<Fuse<Y>>,
    exhausted: bool,
}

impl<X, Y> Cursor for ConcatenatedCursor<X, Y>
where
    X: Iterator,
    Y: Iterator<Item = X::Item>,
{
    fn has_next(&mut self) -> bool {
        if self.first.peek().is_some() || self.second.peek().is_some() {
            return true;
        }
        if !self.exhausted {
            self.exhausted = true;
            tracing::trace!(adapter = "concatenated", "cursor exhausted");
        }
        false
    }
}

impl<X, Y> Iterator for ConcatenatedCursor<X, Y>
where
    X: Iterator,
    Y: Iterator<Item = X::Item>,
{
    type Item = X::Item;

    fn next(&mut self) -> Option<Self::Item> {
        if self.has_next() {
            self.first.next().or_else(|| self.second.next())
        } else {
            None
        }
    }
}

impl<X, Y> FusedIterator for ConcatenatedCursor<X, Y>
where
    X: Iterator,
    Y: Iterator<Item = X::Item>,
{
}
