//! Defines the multimap contract holding unique values per key.

use std::{
    collections::{BTreeSet, HashSet},
    hash::{BuildHasher, Hash},
};

use super::Multimap;

/// A set of the values associated with a single key of a [`SetMultimap`].
pub trait ValueSet<V>: IntoIterator<Item = V> {
    /// Returns `true` if the set contains `value`.
    fn contains(&self, value: &V) -> bool;

    /// Returns the number of values in the set.
    fn len(&self) -> usize;

    /// Returns `true` if the set contains no values.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<V: Eq + Hash, H: BuildHasher> ValueSet<V> for HashSet<V, H> {
    fn contains(&self, value: &V) -> bool {
        HashSet::contains(self, value)
    }

    fn len(&self) -> usize {
        HashSet::len(self)
    }
}

impl<V: Ord> ValueSet<V> for BTreeSet<V> {
    fn contains(&self, value: &V) -> bool {
        BTreeSet::contains(self, value)
    }

    fn len(&self) -> usize {
        BTreeSet::len(self)
    }
}

/// A [`Multimap`] that cannot hold duplicate key-value pairs.
///
/// Adding a key-value pair that is already present has no effect, so [`Multimap::put`] returns
/// `false` for it. [`Multimap::replace_values`] and [`Multimap::remove_all`] return the previous
/// values as a set of type `S`, a [`HashSet`] unless the implementation chooses another set, such
/// as a [`BTreeSet`] for sorted values.
pub trait SetMultimap<K, V, S = HashSet<V>>: Multimap<K, V, Values = S>
where
    S: ValueSet<V>,
{
    /// Returns `true` if `value` is associated with `key`.
    fn contains_entry(&self, key: &K, value: &V) -> bool {
        self.get(key).map_or(false, |values| values.contains(value))
    }

    /// Returns the number of distinct values associated with `key`.
    fn value_count(&self, key: &K) -> usize {
        self.get(key).map_or(0, ValueSet::len)
    }
}
