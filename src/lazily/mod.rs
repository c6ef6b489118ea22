//! Lazily evaluated sequence adapters.
//!
//! Every adapter in this module is a *restartable* lazy sequence: building
//! one performs no traversal, and each request for a cursor starts a fresh,
//! independent traversal from the beginning. All work happens while the
//! cursor is advanced.
//!
//! | Adapter | Built by | Yields |
//! |---|---|---|
//! | [`Chained`] | [`chain`] | the elements of each source in turn |
//! | [`Concatenated`] | [`concat`], [`chain!`](crate::chain!) | the elements of sources of different types in turn |
//! | [`Filtered`] | [`filter`] | the source elements satisfying a predicate |
//! | [`Mapped`] | [`map`] | the mapper applied to each source element |
//! | [`Comprehension`] | [`comprehension`], [`comprehension!`](crate::comprehension!) | the mapper applied to elements satisfying every predicate |
//! | [`Equated`] | [`equate`] | one `bool` per position of two sequences |
//!
//! # Restartability
//!
//! A sequence is anything implementing [`Iterable`], which covers every
//! `IntoIterator + Clone` type: `Vec`s, slices, ranges, `&Vec`, cloneable
//! iterators and the adapters themselves. Adapters hold their sources by
//! value, so holding a borrowed source (`&Vec<T>`, `slice.iter()`) shares it
//! rather than copying it, and a restartable source gives a restartable
//! adapter. A single-pass source can only be wrapped if it is `Clone`, in
//! which case every cursor restarts from the iterator's state at the time
//! the adapter was built; sources whose contents change between traversals
//! through interior mutability have undefined results.
//!
//! # Absent arguments
//!
//! The plain constructors take their arguments by value, so a missing
//! argument is a type error. The `try_*` constructors accept `Option`
//! arguments for pipelines assembled at runtime and fail with
//! [`FunkError::InvalidArgument`](crate::FunkError::InvalidArgument) before
//! any element is produced.
//!
//! # Examples
//!
//! ```rust
//! use funk::lazily::{self, Iterable};
//!
//! let evens = lazily::filter(1..=6, |value: &i32| value % 2 == 0);
//! let first: Vec<i32> = evens.cursor().collect();
//! let second: Vec<i32> = evens.cursor().collect();
//!
//! assert_eq!(first, vec![2, 4, 6]);
//! assert_eq!(first, second);
//! ```

mod chained;
mod comprehension;
mod concatenated;
mod equated;
mod filtered;
mod mapped;

pub use chained::{Chained, ChainedCursor};
pub use comprehension::{Comprehension, ComprehensionCursor};
pub use concatenated::{Concatenated, ConcatenatedCursor};
pub use equated::{Equated, EquatedCursor};
pub use filtered::{Filtered, FilteredCursor};
pub use mapped::{Mapped, MappedCursor};

use crate::error::{FunkError, Result, require};
use crate::predicate::{Equivalence, Predicate, SharedPredicate};

/// A restartable sequence: each call to [`cursor`](Iterable::cursor) starts
/// an independent traversal from the beginning.
pub trait Iterable {
    /// The element type.
    type Item;
    /// The per-traversal state.
    type Cursor: Iterator<Item = Self::Item>;

    /// Begins a fresh traversal.
    fn cursor(&self) -> Self::Cursor;
}

impl<I> Iterable for I
where
    I: IntoIterator + Clone,
{
    type Item = I::Item;
    type Cursor = I::IntoIter;

    #[inline]
    fn cursor(&self) -> Self::Cursor {
        self.clone().into_iter()
    }
}

/// The explicit cursor protocol on top of [`Iterator`].
///
/// `has_next` may be queried any number of times between advances without
/// consuming an element. Once a cursor reports no more elements it stays
/// exhausted.
///
/// Answering `has_next` can require pulling one element from the source
/// into the lookahead. An adapter never runs its own mapper for that, but
/// the pull does run whatever work upstream adapters do to produce the
/// element: under `map(map(source, inner), outer)`, `has_next` calls
/// `inner` once and `outer` only on advance.
pub trait Cursor: Iterator {
    /// Returns whether another element is available.
    fn has_next(&mut self) -> bool;

    /// Returns the next element.
    ///
    /// # Errors
    ///
    /// Returns [`FunkError::SequenceExhausted`] when no element is left.
    fn try_next(&mut self) -> Result<Self::Item> {
        self.next().ok_or(FunkError::SequenceExhausted)
    }
}

/// Chains `sources` into one sequence yielding the elements of each source
/// in turn. Empty sources are skipped.
///
/// # Examples
///
/// ```rust
/// use funk::lazily::chain;
///
/// let chained = chain(vec![vec![1, 2, 3], vec![], vec![4, 5]]);
/// assert_eq!(chained.into_iter().collect::<Vec<_>>(), vec![1, 2, 3, 4, 5]);
/// ```
pub fn chain<S>(sources: S) -> Chained<S>
where
    S: IntoIterator,
    S::Item: IntoIterator,
{
    Chained::new(sources)
}

/// Like [`chain`], for a possibly absent sequence of sources.
///
/// # Errors
///
/// Returns [`FunkError::InvalidArgument`] when `sources` is `None`.
pub fn try_chain<S>(sources: Option<S>) -> Result<Chained<S>>
where
    S: IntoIterator,
    S::Item: IntoIterator,
{
    require(sources, "sources").map(Chained::new)
}

/// Joins two sequences that share an element type but may differ in type,
/// yielding every element of `first` and then every element of `second`.
///
/// [`chain`] needs its sources to have one concrete type. `concat` does
/// not, and stays restartable as long as both sides are. See
/// [`chain!`](crate::chain!) for more than two sources.
///
/// # Examples
///
/// ```rust
/// use funk::lazily::{Iterable, concat, filter};
///
/// let evens_then_nine = concat(filter(1..=4, |value: &i32| value % 2 == 0), vec![9]);
/// assert_eq!(evens_then_nine.cursor().collect::<Vec<_>>(), vec![2, 4, 9]);
/// assert_eq!(evens_then_nine.cursor().collect::<Vec<_>>(), vec![2, 4, 9]);
/// ```
pub fn concat<A, B>(first: A, second: B) -> Concatenated<A, B>
where
    A: IntoIterator,
    B: IntoIterator<Item = A::Item>,
{
    Concatenated::new(first, second)
}

/// Like [`concat`], for possibly absent arguments.
///
/// # Errors
///
/// Returns [`FunkError::InvalidArgument`] naming the first absent argument.
pub fn try_concat<A, B>(first: Option<A>, second: Option<B>) -> Result<Concatenated<A, B>>
where
    A: IntoIterator,
    B: IntoIterator<Item = A::Item>,
{
    let first = require(first, "first")?;
    let second = require(second, "second")?;
    Ok(Concatenated::new(first, second))
}

/// Keeps the elements of `source` that satisfy `predicate`.
///
/// The predicate is evaluated exactly once per source element.
///
/// # Examples
///
/// ```rust
/// use funk::lazily::filter;
///
/// let evens = filter(vec![1, 2, 3, 4, 5, 6], |value: &i32| value % 2 == 0);
/// assert_eq!(evens.into_iter().collect::<Vec<_>>(), vec![2, 4, 6]);
/// ```
pub fn filter<S, P>(source: S, predicate: P) -> Filtered<S, P>
where
    S: IntoIterator,
    P: Predicate<S::Item>,
{
    Filtered::new(source, predicate)
}

/// Like [`filter`], for possibly absent arguments.
///
/// # Errors
///
/// Returns [`FunkError::InvalidArgument`] naming the first absent argument.
pub fn try_filter<S, P>(source: Option<S>, predicate: Option<P>) -> Result<Filtered<S, P>>
where
    S: IntoIterator,
    P: Predicate<S::Item>,
{
    let source = require(source, "source")?;
    let predicate = require(predicate, "predicate")?;
    Ok(Filtered::new(source, predicate))
}

/// Applies `mapper` to every element of `source`.
///
/// # Examples
///
/// ```rust
/// use funk::lazily::map;
///
/// let lengths = map(vec!["Dog", "Goldfish"], |name| name.len());
/// assert_eq!(lengths.into_iter().collect::<Vec<_>>(), vec![3, 8]);
/// ```
pub fn map<S, F, R>(source: S, mapper: F) -> Mapped<S, F>
where
    S: IntoIterator,
    F: Fn(S::Item) -> R,
{
    Mapped::new(source, mapper)
}

/// Like [`map`], for possibly absent arguments.
///
/// # Errors
///
/// Returns [`FunkError::InvalidArgument`] naming the first absent argument.
pub fn try_map<S, F, R>(source: Option<S>, mapper: Option<F>) -> Result<Mapped<S, F>>
where
    S: IntoIterator,
    F: Fn(S::Item) -> R,
{
    let source = require(source, "source")?;
    let mapper = require(mapper, "mapper")?;
    Ok(Mapped::new(source, mapper))
}

/// Applies `mapper` to the elements of `source` that satisfy every one of
/// `predicates`, in a single pass.
///
/// Predicates are evaluated in the order given and evaluation stops at the
/// first one that fails. The mapper runs only for elements that are
/// emitted. See [`comprehension!`](crate::comprehension!) for a form that
/// wraps each predicate automatically.
///
/// # Examples
///
/// ```rust
/// use funk::lazily::comprehension;
/// use funk::predicate::shared;
///
/// let odd_multiples_of_three = comprehension(
///     |value: i32| value * 2,
///     vec![3, 4, 5, 6, 7, 8, 9],
///     [shared(|value: &i32| value % 2 != 0), shared(|value: &i32| value % 3 == 0)],
/// );
/// assert_eq!(odd_multiples_of_three.into_iter().collect::<Vec<_>>(), vec![6, 18]);
/// ```
pub fn comprehension<'p, F, S, R, I>(mapper: F, source: S, predicates: I) -> Comprehension<'p, S, F>
where
    S: IntoIterator,
    F: Fn(S::Item) -> R,
    I: IntoIterator<Item = SharedPredicate<'p, S::Item>>,
{
    Comprehension::new(mapper, source, predicates.into_iter().collect())
}

/// Like [`comprehension`], for possibly absent arguments.
///
/// # Errors
///
/// Returns [`FunkError::InvalidArgument`] when the mapper, the source or any
/// of the predicates is `None`.
pub fn try_comprehension<'p, F, S, R, I>(
    mapper: Option<F>,
    source: Option<S>,
    predicates: I,
) -> Result<Comprehension<'p, S, F>>
where
    S: IntoIterator,
    F: Fn(S::Item) -> R,
    I: IntoIterator<Item = Option<SharedPredicate<'p, S::Item>>>,
{
    let mapper = require(mapper, "mapper")?;
    let source = require(source, "source")?;
    let predicates = predicates
        .into_iter()
        .map(|predicate| require(predicate, "predicate"))
        .collect::<Result<_>>()?;
    Ok(Comprehension::new(mapper, source, predicates))
}

/// Compares `first` and `second` position by position with `equivalence`,
/// yielding one `bool` per position until either sequence runs out.
///
/// # Examples
///
/// ```rust
/// use funk::lazily::equate;
///
/// let equated = equate(
///     vec!["Dog", "Cat", "Goldfish"],
///     vec!["DOG", "BAT", "GOLDFISH", "HORSE"],
///     |first: &&str, second: &&str| first.eq_ignore_ascii_case(second),
/// );
/// assert_eq!(equated.into_iter().collect::<Vec<_>>(), vec![true, false, true]);
/// ```
pub fn equate<A, B, E>(first: A, second: B, equivalence: E) -> Equated<A, B, E>
where
    A: IntoIterator,
    B: IntoIterator,
    E: Equivalence<A::Item, B::Item>,
{
    Equated::new(first, second, equivalence)
}

/// Like [`equate`], for possibly absent arguments.
///
/// # Errors
///
/// Returns [`FunkError::InvalidArgument`] naming the first absent argument.
pub fn try_equate<A, B, E>(
    first: Option<A>,
    second: Option<B>,
    equivalence: Option<E>,
) -> Result<Equated<A, B, E>>
where
    A: IntoIterator,
    B: IntoIterator,
    E: Equivalence<A::Item, B::Item>,
{
    let first = require(first, "first")?;
    let second = require(second, "second")?;
    let equivalence = require(equivalence, "equivalence")?;
    Ok(Equated::new(first, second, equivalence))
}

/// Chains any number of sources that share an element type, whatever
/// their concrete types.
///
/// `chain!(a, b, c)` is `concat(a, concat(b, c))`; a single source is
/// returned unchanged.
///
/// # Examples
///
/// ```rust
/// use funk::chain;
/// use funk::lazily::{Iterable, map};
///
/// let mixed = chain!(1..3, vec![10], map(vec![5], |value: i32| value * 100));
/// assert_eq!(mixed.cursor().collect::<Vec<_>>(), vec![1, 2, 10, 500]);
/// ```
#[macro_export]
macro_rules! chain {
    ($source:expr $(,)?) => {
        $source
    };

    ($first:expr, $($remaining:expr),+ $(,)?) => {
        $crate::lazily::concat($first, $crate::chain!($($remaining),+))
    };
}

/// Builds a [`Comprehension`], wrapping each predicate with
/// [`shared`](crate::predicate::shared).
///
/// # Syntax
///
/// - `comprehension!(mapper, source)` - maps every element
/// - `comprehension!(mapper, source; p1, p2, ...)` - maps the elements
///   satisfying every predicate
///
/// # Examples
///
/// ```rust
/// use funk::comprehension;
/// use funk::predicate::always_true;
///
/// let labels = comprehension!(
///     |value: i32| format!("{value}: Looks good"),
///     vec![3, 4, 5, 6, 7, 8, 9];
///     |value: &i32| value % 2 != 0,
///     |value: &i32| value % 3 == 0,
///     always_true(),
/// );
/// assert_eq!(
///     labels.into_iter().collect::<Vec<_>>(),
///     vec!["3: Looks good", "9: Looks good"]
/// );
/// ```
#[macro_export]
macro_rules! comprehension {
    ($mapper:expr, $source:expr $(,)?) => {
        $crate::lazily::comprehension($mapper, $source, [])
    };

    ($mapper:expr, $source:expr; $($predicate:expr),+ $(,)?) => {
        $crate::lazily::comprehension(
            $mapper,
            $source,
            [$($crate::predicate::shared($predicate)),+],
        )
    };
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn test_iterable_restarts_from_beginning() {
        let source = vec![1, 2, 3];
        let mut first = source.cursor();
        assert_eq!(first.next(), Some(1));

        let second: Vec<i32> = source.cursor().collect();
        assert_eq!(second, vec![1, 2, 3]);
        assert_eq!(first.next(), Some(2));
    }

    #[rstest]
    fn test_try_constructors_reject_absent_arguments() {
        let missing_sources = try_chain::<Vec<Vec<i32>>>(None);
        assert_eq!(
            missing_sources.map(|_| ()),
            Err(FunkError::InvalidArgument { argument: "sources" })
        );

        let missing_predicate = try_filter(Some(vec![1]), None::<fn(&i32) -> bool>);
        assert_eq!(
            missing_predicate.map(|_| ()),
            Err(FunkError::InvalidArgument { argument: "predicate" })
        );
    }

    #[rstest]
    fn test_comprehension_macro_without_predicates_maps_everything() {
        let doubled = comprehension!(|value: i32| value * 2, vec![1, 2, 3]);
        assert_eq!(doubled.into_iter().collect::<Vec<_>>(), vec![2, 4, 6]);
    }
}
