use super::Predicate;
use crate::error::{Result, require};

/// Negation of a wrapped predicate: `Not::new(p)` holds exactly when `p`
/// does not.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Not<P> {
    predicate: P,
}

impl<P> Not<P> {
    /// Wraps `predicate`.
    pub const fn new(predicate: P) -> Self {
        Self { predicate }
    }

    /// Returns the negated predicate.
    pub const fn inner(&self) -> &P {
        &self.predicate
    }

    /// Unwraps the negated predicate.
    pub fn into_inner(self) -> P {
        self.predicate
    }
}

impl<T: ?Sized, P: Predicate<T>> Predicate<T> for Not<P> {
    #[inline]
    fn evaluate(&self, input: &T) -> bool {
        !self.predicate.evaluate(input)
    }
}

/// A predicate that holds for every input.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct AlwaysTrue;

impl<T: ?Sized> Predicate<T> for AlwaysTrue {
    #[inline]
    fn evaluate(&self, _input: &T) -> bool {
        true
    }
}

/// A predicate that holds for no input.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct AlwaysFalse;

impl<T: ?Sized> Predicate<T> for AlwaysFalse {
    #[inline]
    fn evaluate(&self, _input: &T) -> bool {
        false
    }
}

static_assertions::assert_impl_all!(AlwaysTrue: Copy, Eq, std::hash::Hash, Send, Sync);
static_assertions::assert_impl_all!(Not<AlwaysFalse>: Copy, Eq, std::hash::Hash, Send, Sync);

/// Negates `predicate`.
///
/// # Examples
///
/// ```rust
/// use funk::predicate::{Predicate, not};
///
/// let is_short = not(|text: &str| text.len() > 3);
/// assert!(is_short.evaluate("cat"));
/// assert!(!is_short.evaluate("goldfish"));
/// ```
pub const fn not<P>(predicate: P) -> Not<P> {
    Not::new(predicate)
}

/// Negates `predicate`, failing with
/// [`FunkError::InvalidArgument`](crate::FunkError::InvalidArgument) when it
/// is absent.
///
/// # Errors
///
/// Returns an error when `predicate` is `None`.
///
/// # Examples
///
/// ```rust
/// use funk::FunkError;
/// use funk::predicate::{AlwaysTrue, try_not};
///
/// assert!(try_not(Some(AlwaysTrue)).is_ok());
/// assert_eq!(
///     try_not::<AlwaysTrue>(None),
///     Err(FunkError::InvalidArgument { argument: "predicate" })
/// );
/// ```
pub fn try_not<P>(predicate: Option<P>) -> Result<Not<P>> {
    require(predicate, "predicate").map(Not::new)
}

/// Returns a predicate that holds for every input.
pub const fn always_true() -> AlwaysTrue {
    AlwaysTrue
}

/// Returns a predicate that holds for no input.
pub const fn always_false() -> AlwaysFalse {
    AlwaysFalse
}
