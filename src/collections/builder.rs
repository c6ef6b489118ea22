//! Fluent accumulation of elements into a collection.
//!
//! # Examples
//!
//! ```rust
//! use std::collections::BTreeSet;
//! use funk::collections::collection_builder;
//!
//! let builder = collection_builder().with(3).and(1).with_all([2, 1]);
//!
//! assert_eq!(builder.build(), vec![3, 1, 2, 1]);
//! assert_eq!(builder.build_into::<BTreeSet<_>>(), BTreeSet::from([1, 2, 3]));
//! ```

/// Accumulates elements and materializes them into a container.
///
/// [`build`](CollectionBuilder::build) returns a fresh copy each time, so
/// later additions never show up in previously built collections.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CollectionBuilder<E> {
    elements: Vec<E>,
}

/// Starts an empty [`CollectionBuilder`].
pub const fn collection_builder<E>() -> CollectionBuilder<E> {
    CollectionBuilder::new()
}

impl<E> CollectionBuilder<E> {
    /// Creates an empty builder.
    pub const fn new() -> Self {
        Self { elements: Vec::new() }
    }

    /// Adds `element` and returns the builder.
    #[must_use]
    pub fn with(mut self, element: E) -> Self {
        self.elements.push(element);
        self
    }

    /// Same as [`with`](CollectionBuilder::with); reads better after the
    /// first element.
    #[must_use]
    pub fn and(self, element: E) -> Self {
        self.with(element)
    }

    /// Adds every element of `elements` and returns the builder.
    #[must_use]
    pub fn with_all<I: IntoIterator<Item = E>>(mut self, elements: I) -> Self {
        self.elements.extend(elements);
        self
    }

    /// Adds `element` in place.
    pub fn add(&mut self, element: E) -> &mut Self {
        self.elements.push(element);
        self
    }

    /// Returns how many elements have been added.
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    /// Returns whether nothing has been added yet.
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }
}

impl<E: Clone> CollectionBuilder<E> {
    /// Returns a copy of the accumulated elements, in insertion order.
    pub fn build(&self) -> Vec<E> {
        self.elements.clone()
    }

    /// Instantiates an empty `C` and fills it with a copy of the
    /// accumulated elements, in insertion order.
    ///
    /// Any container with a no-argument constructor (`Default`) that can be
    /// extended works: `Vec`, `VecDeque`, `HashSet`, `BTreeSet`,
    /// [`HashBag`](crate::collections::HashBag), ...
    pub fn build_into<C>(&self) -> C
    where
        C: Default + Extend<E>,
    {
        let mut collection = C::default();
        collection.extend(self.elements.iter().cloned());
        collection
    }
}

impl<E> Default for CollectionBuilder<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E> Extend<E> for CollectionBuilder<E> {
    fn extend<I: IntoIterator<Item = E>>(&mut self, iter: I) {
        self.elements.extend(iter);
    }
}

impl<E> FromIterator<E> for CollectionBuilder<E> {
    fn from_iter<I: IntoIterator<Item = E>>(iter: I) -> Self {
        Self {
            elements: iter.into_iter().collect(),
        }
    }
}
