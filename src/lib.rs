//! # funk
//!
//! Small functional building blocks for Rust: lazily evaluated sequence
//! adapters, function composition, predicate values, a two-variant sum type,
//! multisets and matchers for testing code built on them.
//!
//! ## Overview
//!
//! - **Lazy Sequences**: chain, filter, map, comprehension and equate
//!   adapters that are restartable and do no work until traversed
//! - **Eager Terminals**: materialize and reduce
//! - **Function Composition**: `compose2` to `compose9` and the `compose!` macro
//! - **Predicates**: `not`, `always_true`, `always_false` with structural equality
//! - **Control Structures**: `Either`
//! - **Collections**: `Bag`/`HashBag` multisets and `CollectionBuilder`
//! - **Matchers**: descriptive assertions over `Either` values and collections
//!
//! ## Feature Flags
//!
//! - `compose`: Function composition utilities
//! - `predicate`: Predicate values and combinators
//! - `lazily`: Lazy sequence adapters and eager terminals (implies `predicate`)
//! - `control`: `Either`
//! - `collections`: Bags and the collection builder
//! - `matchers`: Test matchers (implies `control`)
//! - `serde`: `Serialize`/`Deserialize` for `Either` and `HashBag`
//! - `fxhash`: Use `FxHash` as the default bag hasher
//! - `full`: Enable all features
//!
//! ## Example
//!
//! ```rust
//! use funk::prelude::*;
//!
//! let doubled_odds = comprehension!(
//!     |value: i32| value * 2,
//!     1..=9;
//!     |value: &i32| value % 2 != 0,
//!     |value: &i32| value % 3 == 0,
//! );
//! assert_eq!(materialize(&doubled_odds), vec![6, 18]);
//! assert_eq!(materialize(&doubled_odds), vec![6, 18]);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::redundant_closure_for_method_calls)]

/// Prelude module for convenient imports.
///
/// Re-exports commonly used types, traits and functions.
///
/// # Usage
///
/// ```rust
/// use funk::prelude::*;
/// ```
pub mod prelude {
    pub use crate::error::FunkError;

    #[cfg(feature = "compose")]
    pub use crate::compose::*;

    #[cfg(feature = "predicate")]
    pub use crate::predicate::*;

    #[cfg(feature = "lazily")]
    pub use crate::{chain, comprehension};

    #[cfg(feature = "lazily")]
    pub use crate::lazily::{Cursor, Iterable};

    #[cfg(feature = "lazily")]
    pub use crate::eagerly::*;

    #[cfg(feature = "control")]
    pub use crate::control::*;

    #[cfg(feature = "collections")]
    pub use crate::collections::{Bag, CollectionBuilder, HashBag, collection_builder};
}

pub mod error;

pub use error::{FunkError, Result};

#[cfg(feature = "compose")]
pub mod compose;

#[cfg(feature = "predicate")]
pub mod predicate;

#[cfg(feature = "lazily")]
pub mod lazily;

#[cfg(feature = "lazily")]
pub mod eagerly;

#[cfg(feature = "control")]
pub mod control;

#[cfg(feature = "collections")]
pub mod collections;

#[cfg(feature = "matchers")]
pub mod matchers;
