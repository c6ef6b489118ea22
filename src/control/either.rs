//! A value holding exactly one of two alternatives.
//!
//! # Examples
//!
//! ```rust
//! use funk::control::{Either, left, right};
//!
//! let parsed: Either<String, i32> = right(42);
//! let failed: Either<String, i32> = left("not a number".to_string());
//!
//! assert!(parsed.is_right());
//! assert!(failed.is_left());
//! assert_ne!(parsed, failed);
//! ```

/// Either a `Left(L)` or a `Right(R)`, never both.
///
/// Two values are equal when they are the same variant with equal
/// payloads. There is no implicit conversion between the variants; use
/// [`swap`](Either::swap) to move a payload across.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Either<L, R> {
    /// The left alternative.
    Left(L),
    /// The right alternative.
    Right(R),
}

/// Builds a `Left`.
#[inline]
pub const fn left<L, R>(value: L) -> Either<L, R> {
    Either::Left(value)
}

/// Builds a `Right`.
#[inline]
pub const fn right<L, R>(value: R) -> Either<L, R> {
    Either::Right(value)
}

impl<L, R> Either<L, R> {
    /// Returns `true` for a `Left`.
    #[inline]
    pub const fn is_left(&self) -> bool {
        matches!(self, Self::Left(_))
    }

    /// Returns `true` for a `Right`.
    #[inline]
    pub const fn is_right(&self) -> bool {
        matches!(self, Self::Right(_))
    }

    /// Consumes the value, returning the left payload if present.
    #[inline]
    pub fn left(self) -> Option<L> {
        match self {
            Self::Left(value) => Some(value),
            Self::Right(_) => None,
        }
    }

    /// Consumes the value, returning the right payload if present.
    #[inline]
    pub fn right(self) -> Option<R> {
        match self {
            Self::Left(_) => None,
            Self::Right(value) => Some(value),
        }
    }

    /// Borrows the left payload if present.
    #[inline]
    pub const fn left_ref(&self) -> Option<&L> {
        match self {
            Self::Left(value) => Some(value),
            Self::Right(_) => None,
        }
    }

    /// Borrows the right payload if present.
    #[inline]
    pub const fn right_ref(&self) -> Option<&R> {
        match self {
            Self::Left(_) => None,
            Self::Right(value) => Some(value),
        }
    }

    /// Transforms a left payload, leaving a right one untouched.
    ///
    /// ```rust
    /// use funk::control::{Either, left, right};
    ///
    /// let name: Either<&str, i32> = left("dog");
    /// assert_eq!(name.map_left(str::len), left(3));
    ///
    /// let count: Either<&str, i32> = right(7);
    /// assert_eq!(count.map_left(str::len), right(7));
    /// ```
    #[inline]
    pub fn map_left<T, F>(self, function: F) -> Either<T, R>
    where
        F: FnOnce(L) -> T,
    {
        match self {
            Self::Left(value) => Either::Left(function(value)),
            Self::Right(value) => Either::Right(value),
        }
    }

    /// Transforms a right payload, leaving a left one untouched.
    #[inline]
    pub fn map_right<T, F>(self, function: F) -> Either<L, T>
    where
        F: FnOnce(R) -> T,
    {
        match self {
            Self::Left(value) => Either::Left(value),
            Self::Right(value) => Either::Right(function(value)),
        }
    }

    /// Collapses both alternatives into one value.
    ///
    /// ```rust
    /// use funk::control::{Either, right};
    ///
    /// let value: Either<i32, String> = right("hello".to_string());
    /// assert_eq!(value.fold(|number| number.to_string(), |text| text), "hello");
    /// ```
    #[inline]
    pub fn fold<T, F, G>(self, left_function: F, right_function: G) -> T
    where
        F: FnOnce(L) -> T,
        G: FnOnce(R) -> T,
    {
        match self {
            Self::Left(value) => left_function(value),
            Self::Right(value) => right_function(value),
        }
    }

    /// Exchanges the variants: `Left(x)` becomes `Right(x)` and vice versa.
    #[inline]
    pub fn swap(self) -> Either<R, L> {
        match self {
            Self::Left(value) => Either::Right(value),
            Self::Right(value) => Either::Left(value),
        }
    }
}

impl<L, R> From<Result<R, L>> for Either<L, R> {
    /// `Ok` maps to `Right`, `Err` to `Left`.
    #[inline]
    fn from(result: Result<R, L>) -> Self {
        match result {
            Ok(value) => Self::Right(value),
            Err(error) => Self::Left(error),
        }
    }
}

impl<L, R> From<Either<L, R>> for Result<R, L> {
    /// `Right` maps to `Ok`, `Left` to `Err`.
    #[inline]
    fn from(either: Either<L, R>) -> Self {
        match either {
            Either::Left(value) => Err(value),
            Either::Right(value) => Ok(value),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn test_constructors_populate_one_variant() {
        let value: Either<i32, String> = left(42);
        assert!(value.is_left());
        assert!(!value.is_right());
        assert_eq!(value.right_ref(), None);

        let value: Either<i32, String> = right("hello".to_string());
        assert!(value.is_right());
        assert_eq!(value.left_ref(), None);
    }

    #[rstest]
    fn test_same_payload_different_variant_is_unequal() {
        let as_left: Either<i32, i32> = left(1);
        let as_right: Either<i32, i32> = right(1);
        assert_ne!(as_left, as_right);
        assert_eq!(as_left.swap(), as_right);
    }

    #[rstest]
    fn test_result_conversion_roundtrip() {
        let ok: Result<i32, String> = Ok(42);
        let either: Either<String, i32> = ok.into();
        let result: Result<i32, String> = either.into();
        assert_eq!(result, Ok(42));

        let err: Result<i32, String> = Err("error".to_string());
        let either: Either<String, i32> = err.into();
        assert_eq!(either, left("error".to_string()));
    }
}
