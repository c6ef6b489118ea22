//! Small combinators that show up at the ends of composition chains.
//!
//! - [`identity`]: returns its argument unchanged
//! - [`constant`]: ignores its argument and returns a fixed value
//! - [`flip`]: swaps the arguments of a binary function

/// Returns the value unchanged.
///
/// The unit of composition: `compose2(identity, f)` and `compose2(f, identity)`
/// both behave like `f`.
///
/// # Examples
///
/// ```
/// use funk::compose::{compose2, identity};
///
/// assert_eq!(identity(42), 42);
///
/// let double = |x: i32| x * 2;
/// let composed = compose2(identity, double);
/// assert_eq!(composed(5), double(5));
/// ```
#[inline]
pub fn identity<T>(value: T) -> T {
    value
}

/// Creates a function that always returns `value`, ignoring its input.
///
/// # Examples
///
/// ```
/// use funk::compose::constant;
///
/// let zeros: Vec<i32> = vec![1, 2, 3].into_iter().map(constant(0)).collect();
/// assert_eq!(zeros, vec![0, 0, 0]);
/// ```
#[inline]
pub fn constant<T: Clone, U>(value: T) -> impl Fn(U) -> T + Clone {
    move |_| value.clone()
}

/// Swaps the arguments of a binary function, so that
/// `flip(f)(b, a) == f(a, b)`.
///
/// # Examples
///
/// ```
/// use funk::compose::flip;
///
/// let subtract = |minuend: i32, subtrahend: i32| minuend - subtrahend;
/// let flipped = flip(subtract);
///
/// assert_eq!(flipped(3, 10), 7);
/// ```
#[inline]
pub fn flip<A, B, C, F>(function: F) -> impl Fn(B, A) -> C
where
    F: Fn(A, B) -> C,
{
    move |second_argument, first_argument| function(first_argument, second_argument)
}
