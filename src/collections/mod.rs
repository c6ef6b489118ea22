//! Collection helpers.
//!
//! - [`Bag`] and [`HashBag`]: multisets that count duplicate elements
//! - [`CollectionBuilder`]: fluent accumulation into any extendable
//!   container

mod bag;
mod builder;

pub use bag::{Bag, DefaultBagHasher, HashBag, Iter};
pub use builder::{CollectionBuilder, collection_builder};
