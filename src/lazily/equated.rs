use std::iter::{Fuse, FusedIterator, Peekable};

use super::Cursor;
use crate::predicate::Equivalence;

/// Two sequences compared position by position.
///
/// Built by [`equate`](super::equate). The result is as long as the shorter
/// of the two sources.
#[derive(Clone, Debug)]
pub struct Equated<A, B, E> {
    first: A,
    second: B,
    equivalence: E,
}

impl<A, B, E> Equated<A, B, E>
where
    A: IntoIterator,
    B: IntoIterator,
    E: Equivalence<A::Item, B::Item>,
{
    pub(super) const fn new(first: A, second: B, equivalence: E) -> Self {
        Self {
            first,
            second,
            equivalence,
        }
    }
}

impl<A, B, E> IntoIterator for Equated<A, B, E>
where
    A: IntoIterator,
    B: IntoIterator,
    E: Equivalence<A::Item, B::Item>,
{
    type Item = bool;
    type IntoIter = EquatedCursor<A::IntoIter, B::IntoIter, E>;

    fn into_iter(self) -> Self::IntoIter {
        EquatedCursor {
            first: self.first.into_iter().fuse().peekable(),
            second: self.second.into_iter().fuse().peekable(),
            equivalence: self.equivalence,
            exhausted: false,
        }
    }
}

impl<A, B, E> IntoIterator for &Equated<A, B, E>
where
    A: IntoIterator + Clone,
    B: IntoIterator + Clone,
    E: Equivalence<A::Item, B::Item> + Clone,
{
    type Item = bool;
    type IntoIter = EquatedCursor<A::IntoIter, B::IntoIter, E>;

    fn into_iter(self) -> Self::IntoIter {
        self.clone().into_iter()
    }
}

/// Traversal state of an [`Equated`] sequence.
///
/// Advances both source cursors in lockstep and stops as soon as either
/// runs out.
pub struct EquatedCursor<X: Iterator, Y: Iterator, E> {
    first: Peekable<Fuse<X>>,
    second: Peekable<Fuse<Y>>,
    equivalence: E,
    exhausted: bool,
}

impl<X, Y, E> Cursor for EquatedCursor<X, Y, E>
where
    X: Iterator,
    Y: Iterator,
    E: Equivalence<X::Item, Y::Item>,
{
    fn has_next(&mut self) -> bool {
        let available = self.first.peek().is_some() && self.second.peek().is_some();
        if !available && !self.exhausted {
            self.exhausted = true;
            tracing::trace!(adapter = "equated", "cursor exhausted");
        }
        available
    }
}

impl<X, Y, E> Iterator for EquatedCursor<X, Y, E>
where
    X: Iterator,
    Y: Iterator,
    E: Equivalence<X::Item, Y::Item>,
{
    type Item = bool;

    fn next(&mut self) -> Option<bool> {
        if !self.has_next() {
            return None;
        }
        let first = self.first.next()?;
        let second = self.second.next()?;
        Some(self.equivalence.equal(&first, &second))
    }
}

impl<X, Y, E> FusedIterator for EquatedCursor<X, Y, E>
where
    X: Iterator,
    Y: Iterator,
    E: Equivalence<X::Item, Y::Item>,
{
}
