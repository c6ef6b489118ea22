//! Function composition utilities.
//!
//! # Overview
//!
//! - [`compose2`] through [`compose9`]: compose a fixed number of functions,
//!   applied left to right
//! - [`compose!`]: the same composition for any number of functions
//! - [`identity`], [`constant`], [`flip`]: small combinators
//!
//! Composition is strictly left to right and does no memoization: calling
//! the composed function calls every component once, in order. A panic
//! raised by a component propagates unchanged to the caller.
//!
//! ```text
//! compose3(f, g, h)(x) = h(g(f(x)))
//! ```
//!
//! # Laws
//!
//! - **Associativity**: `compose2(f, compose2(g, h)) == compose2(compose2(f, g), h)`
//! - **Identity**: `compose2(identity, f) == f == compose2(f, identity)`
//! - **Nesting**: `composeN(f1, ..., fN)(x) == fN(...f1(x))` for every N in 2..=9
//!
//! # Examples
//!
//! ```
//! use funk::compose::{compose3, identity};
//!
//! let trim = |text: &str| text.trim().to_string();
//! let length = |text: String| text.len();
//! let composed = compose3(trim, identity, length);
//!
//! assert_eq!(composed("  goldfish "), 8);
//! ```

mod compose_macro;
mod fixed_arity;
mod utils;

pub use fixed_arity::{compose2, compose3, compose4, compose5, compose6, compose7, compose8, compose9};
pub use utils::{constant, flip, identity};

// Re-export macros (they are already at crate root via #[macro_export])
pub use crate::compose;
