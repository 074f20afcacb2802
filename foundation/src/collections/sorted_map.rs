// SPDX-FileCopyrightText: 2025 Jens Pitkänen <jens.pitkanen@helsinki.fi>
//
// SPDX-License-Identifier: GPL-3.0-or-later

use alloc::collections::{btree_map, BTreeMap};
use core::{borrow::Borrow, cmp::Ordering, fmt::Debug, marker::PhantomData};

use crate::ContainerError;

/// A type-level key ordering for [`SortedMap`].
pub trait KeyOrder<K: ?Sized> {
    fn cmp(a: &K, b: &K) -> Ordering;
}

/// Ascending order, i.e. the key type's [`Ord`] implementation.
#[derive(Debug, Clone, Copy, Default)]
pub struct Less;

impl<K: Ord + ?Sized> KeyOrder<K> for Less {
    fn cmp(a: &K, b: &K) -> Ordering {
        a.cmp(b)
    }
}

/// Descending order, the reverse of the key type's [`Ord`] implementation.
#[derive(Debug, Clone, Copy, Default)]
pub struct Greater;

impl<K: Ord + ?Sized> KeyOrder<K> for Greater {
    fn cmp(a: &K, b: &K) -> Ordering {
        b.cmp(a)
    }
}

/// A key stored in the tree, ordered by `C` instead of `K`'s own ordering.
struct Ordered<K, C> {
    key: K,
    order: PhantomData<fn() -> C>,
}

impl<K, C> Ordered<K, C> {
    fn new(key: K) -> Ordered<K, C> {
        Ordered {
            key,
            order: PhantomData,
        }
    }
}

impl<K: Clone, C> Clone for Ordered<K, C> {
    fn clone(&self) -> Self {
        Ordered::new(self.key.clone())
    }
}

/// Either a stored key or a borrowed lookup key. The tree can be searched
/// with `&dyn Lookup` (see the `Borrow` impl below), which lets lookups take
/// `&K` without wrapping an owned key.
trait Lookup<K, C> {
    fn key(&self) -> &K;
}

impl<K, C> Lookup<K, C> for Ordered<K, C> {
    fn key(&self) -> &K {
        &self.key
    }
}

struct Query<'q, K>(&'q K);

impl<K, C> Lookup<K, C> for Query<'_, K> {
    fn key(&self) -> &K {
        self.0
    }
}

impl<'a, K: 'a, C: 'a> Borrow<dyn Lookup<K, C> + 'a> for Ordered<K, C> {
    fn borrow(&self) -> &(dyn Lookup<K, C> + 'a) {
        self
    }
}

impl<K, C: KeyOrder<K>> PartialEq for dyn Lookup<K, C> + '_ {
    fn eq(&self, other: &Self) -> bool {
        C::cmp(self.key(), other.key()) == Ordering::Equal
    }
}

impl<K, C: KeyOrder<K>> Eq for dyn Lookup<K, C> + '_ {}

impl<K, C: KeyOrder<K>> PartialOrd for dyn Lookup<K, C> + '_ {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<K, C: KeyOrder<K>> Ord for dyn Lookup<K, C> + '_ {
    fn cmp(&self, other: &Self) -> Ordering {
        C::cmp(self.key(), other.key())
    }
}

impl<K, C: KeyOrder<K>> PartialEq for Ordered<K, C> {
    fn eq(&self, other: &Self) -> bool {
        C::cmp(&self.key, &other.key) == Ordering::Equal
    }
}

impl<K, C: KeyOrder<K>> Eq for Ordered<K, C> {}

impl<K, C: KeyOrder<K>> PartialOrd for Ordered<K, C> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<K, C: KeyOrder<K>> Ord for Ordered<K, C> {
    fn cmp(&self, other: &Self) -> Ordering {
        C::cmp(&self.key, &other.key)
    }
}

/// A key-value map iterated in key order, ascending by default.
///
/// The ordering is picked with the `C` type parameter ([`Less`] or
/// [`Greater`], or any other [`KeyOrder`]), so two maps with different
/// orderings are different types. Insertion and lookup work like in
/// [`HashMap`](super::HashMap), except that lookups take `&K` rather than any
/// borrowed form of the key: keys are compared with `C`, which is only
/// defined for `K`. A map with [`U32String`](crate::U32String) keys is
/// searched with a `&U32String`, not with a `&str`.
pub struct SortedMap<K, V, C = Less> {
    inner: BTreeMap<Ordered<K, C>, V>,
}

impl<K, V, C> SortedMap<K, V, C> {
    pub fn new() -> Self {
        SortedMap {
            inner: BTreeMap::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.inner.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    pub fn clear(&mut self) {
        self.inner.clear();
    }

    pub fn swap(&mut self, other: &mut Self) {
        core::mem::swap(&mut self.inner, &mut other.inner);
    }

    /// Iterates the entries in key order.
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = (&K, &V)> + ExactSizeIterator + '_ {
        self.inner.iter().map(|(key, value)| (&key.key, value))
    }

    pub fn iter_mut(
        &mut self,
    ) -> impl DoubleEndedIterator<Item = (&K, &mut V)> + ExactSizeIterator + '_ {
        self.inner.iter_mut().map(|(key, value)| (&key.key, value))
    }

    pub fn keys(&self) -> impl DoubleEndedIterator<Item = &K> + ExactSizeIterator + '_ {
        self.inner.keys().map(|key| &key.key)
    }

    pub fn values(&self) -> impl DoubleEndedIterator<Item = &V> + ExactSizeIterator + '_ {
        self.inner.values()
    }
}

impl<K, V, C: KeyOrder<K>> SortedMap<K, V, C> {
    /// Inserts `value` under `key` if the key is not in the map yet. Returns
    /// true if the value was inserted, false if an existing value was kept.
    pub fn emplace(&mut self, key: K, value: V) -> bool {
        match self.inner.entry(Ordered::new(key)) {
            btree_map::Entry::Occupied(_) => false,
            btree_map::Entry::Vacant(entry) => {
                entry.insert(value);
                true
            }
        }
    }

    /// Inserts `value` under `key`, replacing and returning the previous
    /// value if there was one.
    pub fn insert_or_assign(&mut self, key: K, value: V) -> Option<V> {
        self.inner.insert(Ordered::new(key), value)
    }

    /// Returns the value for `key`, failing with
    /// [`ContainerError::MissingKey`] if there is none.
    pub fn at(&self, key: &K) -> Result<&V, ContainerError> {
        self.get(key).ok_or(ContainerError::MissingKey {
            operation: "SortedMap::at",
        })
    }

    pub fn at_mut(&mut self, key: &K) -> Result<&mut V, ContainerError> {
        self.get_mut(key).ok_or(ContainerError::MissingKey {
            operation: "SortedMap::at_mut",
        })
    }

    /// Returns the value for `key`, inserting a default value first if the
    /// key is not in the map yet.
    pub fn get_or_insert_default(&mut self, key: K) -> &mut V
    where
        V: Default,
    {
        self.inner.entry(Ordered::new(key)).or_default()
    }

    pub fn get(&self, key: &K) -> Option<&V> {
        self.inner.get(&Query(key) as &dyn Lookup<K, C>)
    }

    pub fn get_mut(&mut self, key: &K) -> Option<&mut V> {
        self.inner.get_mut(&Query(key) as &dyn Lookup<K, C>)
    }

    pub fn contains_key(&self, key: &K) -> bool {
        self.inner.contains_key(&Query(key) as &dyn Lookup<K, C>)
    }

    /// Removes the entry for `key`, returning its value if there was one.
    pub fn remove(&mut self, key: &K) -> Option<V> {
        self.inner.remove(&Query(key) as &dyn Lookup<K, C>)
    }

    /// The entry that sorts first under `C`.
    pub fn first_key_value(&self) -> Option<(&K, &V)> {
        self.inner.first_key_value().map(|(key, value)| (&key.key, value))
    }

    /// The entry that sorts last under `C`.
    pub fn last_key_value(&self) -> Option<(&K, &V)> {
        self.inner.last_key_value().map(|(key, value)| (&key.key, value))
    }
}

impl<K, V, C> Default for SortedMap<K, V, C> {
    fn default() -> Self {
        SortedMap::new()
    }
}

impl<K: Clone, V: Clone, C> Clone for SortedMap<K, V, C> {
    fn clone(&self) -> Self {
        SortedMap {
            inner: self.inner.clone(),
        }
    }
}

impl<K: Debug, V: Debug, C> Debug for SortedMap<K, V, C> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}

impl<K, V: PartialEq, C: KeyOrder<K>> PartialEq for SortedMap<K, V, C> {
    fn eq(&self, other: &Self) -> bool {
        self.inner == other.inner
    }
}

impl<K, V: Eq, C: KeyOrder<K>> Eq for SortedMap<K, V, C> {}

/// Collects into a map with [`SortedMap::emplace`] semantics: the first value
/// for a duplicated key wins.
impl<K, V, C: KeyOrder<K>> FromIterator<(K, V)> for SortedMap<K, V, C> {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut map = SortedMap::new();
        map.extend(iter);
        map
    }
}

/// Extends with [`SortedMap::emplace`] semantics: existing values are kept.
impl<K, V, C: KeyOrder<K>> Extend<(K, V)> for SortedMap<K, V, C> {
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (key, value) in iter {
            self.emplace(key, value);
        }
    }
}

#[cfg(test)]
mod tests {
    use alloc::{format, vec::Vec};

    use core::cmp::Ordering;

    use super::{Greater, KeyOrder, SortedMap};
    use crate::{ContainerError, U32String};

    struct CaseInsensitive;

    impl KeyOrder<&str> for CaseInsensitive {
        fn cmp(a: &&str, b: &&str) -> Ordering {
            let a = a.chars().map(|c| c.to_ascii_lowercase());
            let b = b.chars().map(|c| c.to_ascii_lowercase());
            a.cmp(b)
        }
    }

    #[test]
    fn iterates_in_ascending_order_by_default() {
        let map: SortedMap<_, _> = [(3, 'c'), (1, 'a'), (2, 'b')].into_iter().collect();
        assert_eq!(alloc::vec![1, 2, 3], map.keys().copied().collect::<Vec<_>>());
        assert_eq!(Some((&1, &'a')), map.first_key_value());
        assert_eq!(Some((&3, &'c')), map.last_key_value());
        assert_eq!("{1: 'a', 2: 'b', 3: 'c'}", format!("{map:?}"));
    }

    #[test]
    fn greater_iterates_in_descending_order() {
        let map: SortedMap<_, _, Greater> = [(3, 'c'), (1, 'a'), (2, 'b')].into_iter().collect();
        assert_eq!(alloc::vec![3, 2, 1], map.keys().copied().collect::<Vec<_>>());
        assert_eq!(Some((&3, &'c')), map.first_key_value());
        assert_eq!(Some(&'b'), map.get(&2));
        let reversed: Vec<_> = map.iter().rev().map(|(&k, _)| k).collect();
        assert_eq!(alloc::vec![1, 2, 3], reversed);
    }

    #[test]
    fn custom_order_decides_key_equality() {
        let mut map = SortedMap::<&str, u32, CaseInsensitive>::new();
        assert!(map.emplace("banana", 2));
        assert!(map.emplace("Apple", 1));
        assert!(!map.emplace("apple", 10));
        assert_eq!(2, map.len());
        assert_eq!(Some(&1), map.get(&"APPLE"));
        assert_eq!(Some(&"Apple"), map.keys().next());
        assert_eq!(Some(1), map.insert_or_assign("aPPLE", 3));
        assert_eq!(Ok(&3), map.at(&"apple"));
        assert_eq!(Some(2), map.remove(&"BANANA"));
        assert_eq!(1, map.len());
    }

    #[test]
    fn emplace_keeps_and_insert_or_assign_replaces() {
        let mut map = SortedMap::<u32, &str>::new();
        assert!(map.emplace(1, "one"));
        assert!(!map.emplace(1, "uno"));
        assert_eq!(Ok(&"one"), map.at(&1));
        assert_eq!(Some("one"), map.insert_or_assign(1, "uno"));
        assert_eq!(Ok(&"uno"), map.at(&1));
    }

    #[test]
    fn checked_and_defaulting_access() {
        let mut map = SortedMap::<U32String, u32>::new();
        let key = U32String::from("hits");
        assert_eq!(
            Err(ContainerError::MissingKey {
                operation: "SortedMap::at",
            }),
            map.at(&key)
        );
        *map.get_or_insert_default(key.clone()) += 1;
        *map.get_or_insert_default(key.clone()) += 1;
        assert_eq!(Ok(&2), map.at(&key));
        *map.at_mut(&key).unwrap() = 10;
        assert_eq!(Some(&10), map.get(&key));
        assert!(map.contains_key(&key));
        assert_eq!(Some(10), map.remove(&key));
        assert!(!map.contains_key(&key));
        assert!(map.at_mut(&key).is_err());
    }

    #[test]
    fn equality_and_clone() {
        let a: SortedMap<_, _> = [(2, 20), (1, 10)].into_iter().collect();
        let mut b = a.clone();
        assert_eq!(a, b);
        for (_, value) in b.iter_mut() {
            *value += 1;
        }
        assert_ne!(a, b);
        assert_eq!(alloc::vec![11, 21], b.values().copied().collect::<Vec<_>>());
    }

    #[test]
    fn swap_and_clear() {
        let mut a: SortedMap<_, _> = [(1, ())].into_iter().collect();
        let mut b = SortedMap::new();
        a.swap(&mut b);
        assert!(a.is_empty());
        assert_eq!(1, b.len());
        b.clear();
        assert!(b.is_empty());
    }
}
