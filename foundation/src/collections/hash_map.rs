// SPDX-FileCopyrightText: 2025 Jens Pitkänen <jens.pitkanen@helsinki.fi>
//
// SPDX-License-Identifier: GPL-3.0-or-later

use core::{
    borrow::Borrow,
    fmt::Debug,
    hash::{BuildHasher, Hash},
};

use hashbrown::hash_map;

use crate::ContainerError;

pub use hashbrown::DefaultHashBuilder;

/// An unordered key-value map.
///
/// A thin wrapper over [`hashbrown::HashMap`] with the same insertion and
/// lookup vocabulary as [`SortedMap`](super::SortedMap): [`HashMap::emplace`]
/// never overwrites, [`HashMap::insert_or_assign`] always does, and
/// [`HashMap::at`] is the checked lookup.
#[derive(Clone)]
pub struct HashMap<K, V, S = DefaultHashBuilder> {
    inner: hashbrown::HashMap<K, V, S>,
}

impl<K, V> HashMap<K, V, DefaultHashBuilder> {
    pub fn new() -> Self {
        HashMap {
            inner: hashbrown::HashMap::new(),
        }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        HashMap {
            inner: hashbrown::HashMap::with_capacity(capacity),
        }
    }
}

impl<K, V, S> HashMap<K, V, S> {
    pub fn with_hasher(hasher: S) -> Self {
        HashMap {
            inner: hashbrown::HashMap::with_hasher(hasher),
        }
    }

    pub fn len(&self) -> usize {
        self.inner.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    /// Removes every entry, keeping the allocated capacity.
    pub fn clear(&mut self) {
        self.inner.clear();
    }

    pub fn swap(&mut self, other: &mut Self) {
        core::mem::swap(&mut self.inner, &mut other.inner);
    }

    /// Iterates the entries in an unspecified order.
    pub fn iter(&self) -> hash_map::Iter<'_, K, V> {
        self.inner.iter()
    }

    pub fn iter_mut(&mut self) -> hash_map::IterMut<'_, K, V> {
        self.inner.iter_mut()
    }

    pub fn keys(&self) -> hash_map::Keys<'_, K, V> {
        self.inner.keys()
    }

    pub fn values(&self) -> hash_map::Values<'_, K, V> {
        self.inner.values()
    }
}

impl<K: Hash + Eq, V, S: BuildHasher> HashMap<K, V, S> {
    /// Inserts `value` under `key` if the key is not in the map yet. Returns
    /// true if the value was inserted, false if an existing value was kept.
    pub fn emplace(&mut self, key: K, value: V) -> bool {
        match self.inner.entry(key) {
            hash_map::Entry::Occupied(_) => false,
            hash_map::Entry::Vacant(entry) => {
                entry.insert(value);
                true
            }
        }
    }

    /// Inserts `value` under `key`, replacing and returning the previous
    /// value if there was one.
    pub fn insert_or_assign(&mut self, key: K, value: V) -> Option<V> {
        self.inner.insert(key, value)
    }

    /// Returns the value for `key`, failing with
    /// [`ContainerError::MissingKey`] if there is none.
    pub fn at<Q>(&self, key: &Q) -> Result<&V, ContainerError>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.inner.get(key).ok_or(ContainerError::MissingKey {
            operation: "HashMap::at",
        })
    }

    pub fn at_mut<Q>(&mut self, key: &Q) -> Result<&mut V, ContainerError>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.inner.get_mut(key).ok_or(ContainerError::MissingKey {
            operation: "HashMap::at_mut",
        })
    }

    /// Returns the value for `key`, inserting a default value first if the
    /// key is not in the map yet.
    pub fn get_or_insert_default(&mut self, key: K) -> &mut V
    where
        V: Default,
    {
        self.inner.entry(key).or_default()
    }

    pub fn get<Q>(&self, key: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.inner.get(key)
    }

    pub fn get_mut<Q>(&mut self, key: &Q) -> Option<&mut V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.inner.get_mut(key)
    }

    pub fn contains_key<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.inner.contains_key(key)
    }

    /// Removes the entry for `key`, returning its value if there was one.
    pub fn remove<Q>(&mut self, key: &Q) -> Option<V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.inner.remove(key)
    }

    /// Reserves space for at least `additional` more entries.
    pub fn reserve(&mut self, additional: usize) {
        self.inner.reserve(additional);
    }
}

impl<K, V, S: Default> Default for HashMap<K, V, S> {
    fn default() -> Self {
        HashMap {
            inner: hashbrown::HashMap::default(),
        }
    }
}

impl<K: Debug, V: Debug, S> Debug for HashMap<K, V, S> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_map().entries(self.inner.iter()).finish()
    }
}

impl<K: Hash + Eq, V: PartialEq, S: BuildHasher> PartialEq for HashMap<K, V, S> {
    fn eq(&self, other: &Self) -> bool {
        self.inner == other.inner
    }
}

impl<K: Hash + Eq, V: Eq, S: BuildHasher> Eq for HashMap<K, V, S> {}

/// Collects into a map with [`HashMap::emplace`] semantics: the first value
/// for a duplicated key wins.
impl<K: Hash + Eq, V, S: BuildHasher + Default> FromIterator<(K, V)> for HashMap<K, V, S> {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut map = HashMap::default();
        map.extend(iter);
        map
    }
}

/// Extends with [`HashMap::emplace`] semantics: existing values are kept.
impl<K: Hash + Eq, V, S: BuildHasher> Extend<(K, V)> for HashMap<K, V, S> {
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (key, value) in iter {
            self.emplace(key, value);
        }
    }
}

impl<K, V, S> IntoIterator for HashMap<K, V, S> {
    type Item = (K, V);
    type IntoIter = hash_map::IntoIter<K, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.inner.into_iter()
    }
}

impl<'a, K, V, S> IntoIterator for &'a HashMap<K, V, S> {
    type Item = (&'a K, &'a V);
    type IntoIter = hash_map::Iter<'a, K, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.inner.iter()
    }
}

#[cfg(test)]
mod tests {
    use alloc::{string::String, vec::Vec};

    use super::HashMap;
    use crate::{ContainerError, U32String};

    #[test]
    fn emplace_keeps_existing_values() {
        let mut map = HashMap::new();
        assert!(map.emplace("a", 1));
        assert!(!map.emplace("a", 2));
        assert_eq!(Some(&1), map.get("a"));
        assert_eq!(1, map.len());
    }

    #[test]
    fn insert_or_assign_overwrites() {
        let mut map = HashMap::new();
        assert_eq!(None, map.insert_or_assign(1, "one"));
        assert_eq!(Some("one"), map.insert_or_assign(1, "uno"));
        assert_eq!(Ok(&"uno"), map.at(&1));
    }

    #[test]
    fn at_reports_missing_keys() {
        let mut map: HashMap<u32, u32> = HashMap::new();
        assert_eq!(
            Err(ContainerError::MissingKey {
                operation: "HashMap::at",
            }),
            map.at(&7)
        );
        assert!(map.at_mut(&7).is_err());
        map.emplace(7, 0);
        *map.at_mut(&7).unwrap() += 5;
        assert_eq!(Ok(&5), map.at(&7));
    }

    #[test]
    fn get_or_insert_default_inserts_once() {
        let mut counts: HashMap<String, u32> = HashMap::new();
        for word in ["a", "b", "a", "a"] {
            *counts.get_or_insert_default(String::from(word)) += 1;
        }
        assert_eq!(Some(&3), counts.get("a"));
        assert_eq!(Some(&1), counts.get("b"));
        assert_eq!(2, counts.len());
    }

    #[test]
    fn strings_as_keys() {
        let mut map = HashMap::new();
        map.emplace(U32String::from("key"), 10);
        assert!(map.contains_key(&U32String::from("key")));
        assert!(!map.contains_key(&U32String::from("KEY")));
        assert_eq!(Some(10), map.remove(&U32String::from("key")));
        assert!(map.is_empty());
    }

    #[test]
    fn collecting_keeps_the_first_duplicate() {
        let map: HashMap<_, _> = [(1, 'a'), (2, 'b'), (1, 'c')].into_iter().collect();
        assert_eq!(2, map.len());
        assert_eq!(Some(&'a'), map.get(&1));

        let mut entries: Vec<_> = map.iter().map(|(&k, &v)| (k, v)).collect();
        entries.sort();
        assert_eq!(alloc::vec![(1, 'a'), (2, 'b')], entries);
    }

    #[test]
    fn equality_ignores_insertion_order() {
        let a: HashMap<_, _> = [(1, 1), (2, 2)].into_iter().collect();
        let b: HashMap<_, _> = [(2, 2), (1, 1)].into_iter().collect();
        assert_eq!(a, b);
    }

    #[test]
    fn swap_and_clear() {
        let mut a: HashMap<_, _> = [(1, 1)].into_iter().collect();
        let mut b: HashMap<_, _> = [(2, 2), (3, 3)].into_iter().collect();
        a.swap(&mut b);
        assert_eq!(2, a.len());
        assert_eq!(1, b.len());
        for (_, value) in a.iter_mut() {
            *value *= 10;
        }
        assert_eq!(Some(&30), a.get(&3));
        a.clear();
        assert!(a.is_empty());
    }
}
