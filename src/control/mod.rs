//! Algebraic containers.
//!
//! - [`Either`]: a tagged union of two alternatives, built with [`left`]
//!   or [`right`]
//!
//! ```rust
//! use funk::control::{Either, left};
//!
//! let value: Either<&str, i32> = left("missing");
//! assert_eq!(value.left(), Some("missing"));
//! ```

mod either;

pub use either::{Either, left, right};
