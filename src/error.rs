//! Error taxonomy shared by every module of the crate.
//!
//! Failures raised by user-supplied closures are never caught or wrapped:
//! a panicking mapper or predicate unwinds straight through the adapter that
//! called it, and a fallible computation is expressed by making the element
//! type a `Result`, which flows through the adapters untouched.

use thiserror::Error;

/// Errors raised by the adapters and cursors of this crate.
///
/// # Examples
///
/// ```rust
/// use funk::FunkError;
///
/// let error = FunkError::InvalidArgument { argument: "predicate" };
/// assert_eq!(error.to_string(), "required argument `predicate` was absent");
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Error)]
pub enum FunkError {
    /// A required constructor argument (source, predicate, mapper,
    /// equivalence or function) was absent.
    #[error("required argument `{argument}` was absent")]
    InvalidArgument {
        /// Name of the missing argument.
        argument: &'static str,
    },

    /// The next element was requested from a cursor that has none left.
    #[error("no more elements in sequence")]
    SequenceExhausted,
}

/// Result type used throughout the crate.
pub type Result<T> = std::result::Result<T, FunkError>;

/// Unwraps a required argument, failing with [`FunkError::InvalidArgument`]
/// when it is absent.
#[cfg_attr(not(any(feature = "predicate", feature = "lazily")), allow(dead_code))]
pub(crate) fn require<T>(value: Option<T>, argument: &'static str) -> Result<T> {
    value.ok_or_else(|| {
        tracing::debug!(argument, "rejecting construction with absent argument");
        FunkError::InvalidArgument { argument }
    })
}
