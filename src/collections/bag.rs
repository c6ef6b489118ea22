//! Multisets: collections that permit duplicates and track how many times
//! each element occurs.
//!
//! # Examples
//!
//! ```rust
//! use funk::collections::{Bag, HashBag};
//!
//! let mut bag: HashBag<i32> = [1, 2, 2, 3].into_iter().collect();
//! assert_eq!(bag.len(), 4);
//!
//! bag.remove(&2);
//! assert_eq!(bag.count(&2), 1);
//! assert_eq!(bag.len(), 3);
//! ```

use std::collections::HashMap;
use std::collections::hash_map;
use std::fmt;
use std::hash::{BuildHasher, Hash};
use std::iter::FusedIterator;

/// Hasher used by [`HashBag`] unless another one is named.
#[cfg(feature = "fxhash")]
pub type DefaultBagHasher = rustc_hash::FxBuildHasher;

/// Hasher used by [`HashBag`] unless another one is named.
#[cfg(not(feature = "fxhash"))]
pub type DefaultBagHasher = hash_map::RandomState;

/// A collection of elements permitting duplicates.
///
/// The size of a bag is the sum of the multiplicities of its elements.
/// Iteration order is unspecified.
pub trait Bag<T> {
    /// Adds one occurrence of `element`.
    fn add(&mut self, element: T);

    /// Adds one occurrence of every element of `elements`.
    fn add_all<I>(&mut self, elements: I)
    where
        I: IntoIterator<Item = T>,
    {
        for element in elements {
            self.add(element);
        }
    }

    /// Removes one occurrence of `element`, returning whether one was
    /// present.
    fn remove(&mut self, element: &T) -> bool;

    /// Removes one occurrence per element of `elements`, so asking to remove
    /// the same value twice removes two occurrences. Returns how many
    /// occurrences were actually removed.
    fn remove_all<'a, I>(&mut self, elements: I) -> usize
    where
        I: IntoIterator<Item = &'a T>,
        T: 'a,
    {
        elements
            .into_iter()
            .filter(|element| self.remove(element))
            .count()
    }

    /// Returns whether at least one occurrence of `element` is present.
    fn contains(&self, element: &T) -> bool {
        self.count(element) > 0
    }

    /// Returns the multiplicity of `element`.
    fn count(&self, element: &T) -> usize;

    /// Returns the total number of occurrences.
    fn len(&self) -> usize;

    /// Returns whether the bag holds no elements.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Removes every element.
    fn clear(&mut self);
}

/// A [`Bag`] backed by a hash map from element to multiplicity.
#[derive(Clone)]
pub struct HashBag<T, S = DefaultBagHasher> {
    counts: HashMap<T, usize, S>,
    len: usize,
}

impl<T> HashBag<T> {
    /// Creates an empty bag.
    pub fn new() -> Self {
        Self::default()
    }
}

impl<T, S> HashBag<T, S> {
    /// Creates an empty bag using `hasher`.
    pub fn with_hasher(hasher: S) -> Self {
        Self {
            counts: HashMap::with_hasher(hasher),
            len: 0,
        }
    }

    /// Returns how many distinct elements the bag holds.
    pub fn distinct_len(&self) -> usize {
        self.counts.len()
    }

    /// Iterates over every occurrence, repeating each element as many times
    /// as it was added.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            entries: self.counts.iter(),
            current: None,
            remaining: self.len,
        }
    }
}

impl<T, S: Default> Default for HashBag<T, S> {
    fn default() -> Self {
        Self::with_hasher(S::default())
    }
}

impl<T, S> Bag<T> for HashBag<T, S>
where
    T: Eq + Hash,
    S: BuildHasher,
{
    fn add(&mut self, element: T) {
        *self.counts.entry(element).or_insert(0) += 1;
        self.len += 1;
    }

    fn remove(&mut self, element: &T) -> bool {
        let Some(count) = self.counts.get_mut(element) else {
            return false;
        };
        *count -= 1;
        if *count == 0 {
            self.counts.remove(element);
        }
        self.len -= 1;
        true
    }

    fn count(&self, element: &T) -> usize {
        self.counts.get(element).copied().unwrap_or(0)
    }

    fn len(&self) -> usize {
        self.len
    }

    fn clear(&mut self) {
        self.counts.clear();
        self.len = 0;
    }
}

impl<T, S> PartialEq for HashBag<T, S>
where
    T: Eq + Hash,
    S: BuildHasher,
{
    /// Two bags are equal when every element has the same multiplicity in
    /// both.
    fn eq(&self, other: &Self) -> bool {
        self.len == other.len && self.counts == other.counts
    }
}

impl<T, S> Eq for HashBag<T, S>
where
    T: Eq + Hash,
    S: BuildHasher,
{
}

impl<T: fmt::Debug, S> fmt::Debug for HashBag<T, S> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_list().entries(self.iter()).finish()
    }
}

impl<T, S> FromIterator<T> for HashBag<T, S>
where
    T: Eq + Hash,
    S: BuildHasher + Default,
{
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut bag = Self::default();
        bag.add_all(iter);
        bag
    }
}

impl<T, S> Extend<T> for HashBag<T, S>
where
    T: Eq + Hash,
    S: BuildHasher,
{
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.add_all(iter);
    }
}

impl<'a, T, S> IntoIterator for &'a HashBag<T, S> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Iterator over every occurrence in a [`HashBag`].
pub struct Iter<'a, T> {
    entries: hash_map::Iter<'a, T, usize>,
    current: Option<(&'a T, usize)>,
    remaining: usize,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<&'a T> {
        loop {
            if let Some((element, repeats)) = self.current.as_mut()
                && *repeats > 0
            {
                *repeats -= 1;
                self.remaining -= 1;
                return Some(*element);
            }
            let (element, count) = self.entries.next()?;
            self.current = Some((element, *count));
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

impl<T> FusedIterator for Iter<'_, T> {}

static_assertions::assert_impl_all!(HashBag<i32>: Send, Sync, Clone, Eq);

// =============================================================================
// Serde Support
// =============================================================================

#[cfg(feature = "serde")]
impl<T, S> serde::Serialize for HashBag<T, S>
where
    T: serde::Serialize,
{
    fn serialize<Z>(&self, serializer: Z) -> Result<Z::Ok, Z::Error>
    where
        Z: serde::Serializer,
    {
        use serde::ser::SerializeSeq;
        let mut seq = serializer.serialize_seq(Some(self.len))?;
        for element in self {
            seq.serialize_element(element)?;
        }
        seq.end()
    }
}

#[cfg(feature = "serde")]
struct HashBagVisitor<T, S> {
    marker: std::marker::PhantomData<(T, S)>,
}

#[cfg(feature = "serde")]
impl<'de, T, S> serde::de::Visitor<'de> for HashBagVisitor<T, S>
where
    T: serde::Deserialize<'de> + Eq + Hash,
    S: BuildHasher + Default,
{
    type Value = HashBag<T, S>;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a sequence")
    }

    fn visit_seq<A>(self, mut seq: A) -> Result<Self::Value, A::Error>
    where
        A: serde::de::SeqAccess<'de>,
    {
        let mut bag = HashBag::default();
        while let Some(element) = seq.next_element()? {
            bag.add(element);
        }
        Ok(bag)
    }
}

#[cfg(feature = "serde")]
impl<'de, T, S> serde::Deserialize<'de> for HashBag<T, S>
where
    T: serde::Deserialize<'de> + Eq + Hash,
    S: BuildHasher + Default,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        deserializer.deserialize_seq(HashBagVisitor {
            marker: std::marker::PhantomData,
        })
    }
}
