//! Defines the general multimap contract.

/// A collection mapping keys to values, where a single key may be associated with several values.
///
/// A key is only present while it is associated with at least one value; removing the last value
/// of a key removes the key as well.
pub trait Multimap<K, V> {
    /// The collection holding all values associated with a single key.
    type Values: IntoIterator<Item = V>;

    /// Returns the values associated with `key`, or `None` if `key` is not present.
    fn get(&self, key: &K) -> Option<&Self::Values>;

    /// Returns the number of key-value pairs.
    fn len(&self) -> usize;

    /// Returns `true` if there are no key-value pairs.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns `true` if at least one value is associated with `key`.
    fn contains_key(&self, key: &K) -> bool {
        self.get(key).is_some()
    }

    /// Stores a key-value pair.
    ///
    /// Returns `true` if the multimap changed.
    fn put(&mut self, key: K, value: V) -> bool;

    /// Stores a key-value pair for each of `values`, all under the same `key`.
    ///
    /// Returns `true` if the multimap changed.
    fn put_all<I>(&mut self, key: K, values: I) -> bool
    where
        K: Clone,
        I: IntoIterator<Item = V>,
    {
        values
            .into_iter()
            .fold(false, |changed, value| self.put(key.clone(), value) || changed)
    }

    /// Removes a single key-value pair.
    ///
    /// Returns `true` if the multimap changed.
    fn remove(&mut self, key: &K, value: &V) -> bool;

    /// Replaces all values associated with `key` by `values`.
    ///
    /// Returns the values previously associated with `key`, which are empty if `key` was not
    /// present. Passing no values removes `key`.
    fn replace_values<I>(&mut self, key: K, values: I) -> Self::Values
    where
        I: IntoIterator<Item = V>;

    /// Removes all values associated with `key`.
    ///
    /// Returns the removed values, which are empty if `key` was not present.
    fn remove_all(&mut self, key: &K) -> Self::Values;
}
