//! Eager terminal operations that drain a sequence.
//!
//! - [`materialize`]: collects every element into a `Vec`, in emission order
//! - [`reduce`]: folds every element into an accumulator with a [`Reducer`]
//!
//! # Examples
//!
//! ```rust
//! use funk::eagerly::{materialize, reduce};
//! use funk::lazily::filter;
//!
//! let evens = filter(1..=6, |value: &i32| value % 2 == 0);
//! assert_eq!(materialize(&evens), vec![2, 4, 6]);
//! assert_eq!(reduce(&evens, 0, |total: i32, value: i32| total + value), 12);
//! ```

/// Accumulates elements of type `S` into a value of type `T`.
///
/// Implemented for every `Fn(T, S) -> T`.
pub trait Reducer<S, T> {
    /// Combines the running `accumulator` with the next `element`.
    fn accumulate(&self, accumulator: T, element: S) -> T;
}

impl<S, T, F> Reducer<S, T> for F
where
    F: Fn(T, S) -> T,
{
    #[inline]
    fn accumulate(&self, accumulator: T, element: S) -> T {
        self(accumulator, element)
    }
}

/// Drains `iterable` into a `Vec`, preserving emission order.
pub fn materialize<I: IntoIterator>(iterable: I) -> Vec<I::Item> {
    iterable.into_iter().collect()
}

/// Folds every element of `iterable` into `initial` using `reducer`.
pub fn reduce<I, T, R>(iterable: I, initial: T, reducer: R) -> T
where
    I: IntoIterator,
    R: Reducer<I::Item, T>,
{
    iterable
        .into_iter()
        .fold(initial, |accumulator, element| reducer.accumulate(accumulator, element))
}
