// SPDX-FileCopyrightText: 2025 Jens Pitkänen <jens.pitkanen@helsinki.fi>
//
// SPDX-License-Identifier: GPL-3.0-or-later

mod heap;

use alloc::vec::Vec;
use core::{
    cmp::Ordering,
    fmt::Debug,
    hash::{Hash, Hasher},
    ops::{Index, IndexMut},
    slice,
};

use bytemuck::{Pod, Zeroable};

use super::cursor::{Cursor, StorageTag, NPOS};
use crate::ContainerError;

/// A growable contiguous array type.
///
/// Wraps a [`Vec`] with a larger, more "engine-flavored" set of operations:
/// inserting and removing at either end or at a [`Cursor`], predicate-based
/// searching and removal, heap operations and both stable and unstable
/// sorting.
///
/// Positions in the array are handed out as [`Cursor`]s (e.g. by
/// [`Array::find`]). Any operation that changes the length or the capacity of
/// the array invalidates all cursors taken before it. Lookups that don't find
/// anything return [`Array::end`] (or [`NPOS`] for indices) instead of
/// failing.
///
/// Copying is explicit via [`Clone`], which produces a deep copy with its own
/// storage. [`Array::take`] moves the contents out, leaving an empty array
/// behind.
pub struct Array<T> {
    items: Vec<T>,
    tag: StorageTag,
}

impl<T> Array<T> {
    /// Creates an empty array without allocating.
    pub fn new() -> Array<T> {
        Array {
            items: Vec::new(),
            tag: StorageTag::new(),
        }
    }

    /// Creates an empty array with space for at least `capacity` elements.
    pub fn with_capacity(capacity: usize) -> Array<T> {
        Array::from(Vec::with_capacity(capacity))
    }

    /// Creates an array of `len` default values.
    pub fn with_len(len: usize) -> Array<T>
    where
        T: Default,
    {
        let mut items = Vec::with_capacity(len);
        items.resize_with(len, T::default);
        Array::from(items)
    }

    /// Creates an array of `len` copies of `value`.
    pub fn filled(len: usize, value: T) -> Array<T>
    where
        T: Clone,
    {
        Array::from(alloc::vec![value; len])
    }

    /// Creates an array out of copies of the elements of `source` between
    /// `first` (inclusive) and `last` (exclusive).
    ///
    /// ### Panics
    ///
    /// Panics if either cursor is not valid for `source`, or if `first` is
    /// after `last`.
    pub fn from_cursor_range(source: &Array<T>, first: Cursor, last: Cursor) -> Array<T>
    where
        T: Clone,
    {
        let range = source.range_of(first, last, "Array::from_cursor_range");
        Array::from(source.items[range].to_vec())
    }

    /// Moves the elements out into a new array, leaving this one empty.
    pub fn take(&mut self) -> Array<T> {
        core::mem::take(self)
    }

    /// Runs `f` on the backing [`Vec`], invalidating cursors if the length or
    /// capacity changed.
    pub(crate) fn with_vec<R>(&mut self, f: impl FnOnce(&mut Vec<T>) -> R) -> R {
        let len = self.items.len();
        let capacity = self.items.capacity();
        let result = f(&mut self.items);
        if self.items.len() != len || self.items.capacity() != capacity {
            self.tag.invalidate();
        }
        result
    }

    /// Returns the position of `cursor`, which may also be the end position.
    ///
    /// ### Panics
    ///
    /// Panics if the cursor is stale or from another container.
    fn position_of(&self, cursor: Cursor, operation: &'static str) -> usize {
        let Some(position) = self.tag.resolve(cursor, self.items.len()) else {
            panic!("{operation} was given a cursor that is stale or from another container");
        };
        position
    }

    fn range_of(&self, first: Cursor, last: Cursor, operation: &'static str) -> core::ops::Range<usize> {
        let first = self.position_of(first, operation);
        let last = self.position_of(last, operation);
        assert!(first <= last, "{operation} was given a range that ends before it starts");
        first..last
    }

    /// Returns a cursor for `position`, which must be at most `len`.
    pub(crate) fn cursor_at(&self, position: usize) -> Cursor {
        debug_assert!(position <= self.items.len());
        self.tag.cursor(position)
    }

    /// Returns a cursor to the first element (or the end cursor, if empty).
    pub fn begin(&self) -> Cursor {
        self.tag.cursor(0)
    }

    /// Returns the one-past-the-last cursor, which is also what the `find`
    /// functions return when nothing is found.
    pub fn end(&self) -> Cursor {
        self.tag.cursor(self.items.len())
    }

    /// Constructs an element with `make` and inserts it at `at`, shifting the
    /// following elements back.
    ///
    /// ### Panics
    ///
    /// Panics if `at` is not a valid cursor for this array.
    pub fn emplace(&mut self, at: Cursor, make: impl FnOnce() -> T) {
        let position = self.position_of(at, "Array::emplace");
        self.with_vec(|items| items.insert(position, make()));
    }

    /// Constructs an element with `make` at the start of the array.
    pub fn emplace_first(&mut self, make: impl FnOnce() -> T) -> &mut T {
        self.with_vec(|items| items.insert(0, make()));
        &mut self.items[0]
    }

    /// Constructs an element with `make` at the end of the array. Amortized
    /// O(1).
    pub fn emplace_last(&mut self, make: impl FnOnce() -> T) -> &mut T {
        self.with_vec(|items| items.push(make()));
        let last = self.items.len() - 1;
        &mut self.items[last]
    }

    /// Inserts `value` at the start of the array. O(n).
    pub fn add_first(&mut self, value: T) {
        self.with_vec(|items| items.insert(0, value));
    }

    /// Inserts copies of `values` at the start of the array, in order.
    pub fn add_first_slice(&mut self, values: &[T])
    where
        T: Clone,
    {
        self.add_first_iter(values.iter().cloned());
    }

    /// Inserts the elements of `values` at the start of the array, in order.
    pub fn add_first_iter(&mut self, values: impl IntoIterator<Item = T>) {
        self.with_vec(|items| {
            items.splice(0..0, values);
        });
    }

    /// Appends `value` to the end of the array. Amortized O(1).
    pub fn add_last(&mut self, value: T) {
        self.with_vec(|items| items.push(value));
    }

    /// Appends copies of `values` to the end of the array.
    pub fn add_last_slice(&mut self, values: &[T])
    where
        T: Clone,
    {
        self.with_vec(|items| items.extend_from_slice(values));
    }

    /// Appends the elements of `values` to the end of the array.
    pub fn add_last_iter(&mut self, values: impl IntoIterator<Item = T>) {
        self.with_vec(|items| items.extend(values));
    }

    /// Inserts `value` at `at`, shifting the following elements back.
    ///
    /// ### Panics
    ///
    /// Panics if `at` is not a valid cursor for this array.
    pub fn insert(&mut self, at: Cursor, value: T) {
        let position = self.position_of(at, "Array::insert");
        self.with_vec(|items| items.insert(position, value));
    }

    /// Inserts copies of `values` at `at`, in order.
    ///
    /// ### Panics
    ///
    /// Panics if `at` is not a valid cursor for this array.
    pub fn insert_slice(&mut self, at: Cursor, values: &[T])
    where
        T: Clone,
    {
        self.insert_iter(at, values.iter().cloned());
    }

    /// Inserts the elements of `values` at `at`, in order.
    ///
    /// ### Panics
    ///
    /// Panics if `at` is not a valid cursor for this array.
    pub fn insert_iter(&mut self, at: Cursor, values: impl IntoIterator<Item = T>) {
        let position = self.position_of(at, "Array::insert_iter");
        self.with_vec(|items| {
            items.splice(position..position, values);
        });
    }

    /// Inserts copies of all of `other`'s elements at the start of this array.
    pub fn prepend(&mut self, other: &Array<T>)
    where
        T: Clone,
    {
        self.add_first_slice(&other.items);
    }

    /// Moves all of `other`'s elements to the start of this array, leaving
    /// `other` empty.
    pub fn prepend_from(&mut self, other: &mut Array<T>) {
        if other.items.is_empty() {
            return;
        }
        self.with_vec(|items| {
            items.splice(0..0, other.items.drain(..));
        });
        other.tag.invalidate();
    }

    /// Appends copies of all of `other`'s elements to this array.
    pub fn append(&mut self, other: &Array<T>)
    where
        T: Clone,
    {
        self.add_last_slice(&other.items);
    }

    /// Moves all of `other`'s elements to the end of this array, leaving
    /// `other` empty.
    pub fn append_from(&mut self, other: &mut Array<T>) {
        if other.items.is_empty() {
            return;
        }
        self.with_vec(|items| items.append(&mut other.items));
        other.tag.invalidate();
    }

    /// Removes every element equal to `value`, keeping the order of the rest.
    /// Returns the amount of removed elements.
    pub fn remove(&mut self, value: &T) -> usize
    where
        T: PartialEq,
    {
        self.remove_by(|item| item == value)
    }

    /// Removes and returns the element at `at`.
    ///
    /// ### Panics
    ///
    /// Panics if `at` is not a valid cursor for this array, or if it's the end
    /// cursor.
    pub fn remove_at_cursor(&mut self, at: Cursor) -> T {
        let position = self.position_of(at, "Array::remove_at_cursor");
        assert!(
            position < self.items.len(),
            "Array::remove_at_cursor was given the end cursor"
        );
        self.with_vec(|items| items.remove(position))
    }

    /// Removes and returns the first element, or returns `None` if the array
    /// is empty.
    pub fn remove_first(&mut self) -> Option<T> {
        if self.items.is_empty() {
            return None;
        }
        Some(self.with_vec(|items| items.remove(0)))
    }

    /// Removes and returns the last element, or returns `None` if the array is
    /// empty.
    pub fn remove_last(&mut self) -> Option<T> {
        self.with_vec(Vec::pop)
    }

    /// Removes the elements from `first` (inclusive) to `last` (exclusive).
    ///
    /// ### Panics
    ///
    /// Panics if either cursor is not valid for this array, or if `first` is
    /// after `last`.
    pub fn remove_range(&mut self, first: Cursor, last: Cursor) {
        let range = self.range_of(first, last, "Array::remove_range");
        self.with_vec(|items| {
            items.drain(range);
        });
    }

    /// Removes and returns the element at `index`. Out of bounds indices are
    /// ignored and return `None`.
    pub fn remove_at(&mut self, index: usize) -> Option<T> {
        if index >= self.items.len() {
            return None;
        }
        Some(self.with_vec(|items| items.remove(index)))
    }

    /// Removes every element `predicate` returns true for, keeping the order
    /// of the rest. Returns the amount of removed elements.
    pub fn remove_by(&mut self, mut predicate: impl FnMut(&T) -> bool) -> usize {
        self.with_vec(|items| {
            let len_before = items.len();
            items.retain(|item| !predicate(item));
            len_before - items.len()
        })
    }

    /// Empties out the array, dropping the contained values. The capacity is
    /// kept.
    pub fn remove_all(&mut self) {
        self.with_vec(Vec::clear);
    }

    /// Releases unused capacity, if the allocator allows it.
    pub fn shrink_to_fit(&mut self) {
        self.with_vec(Vec::shrink_to_fit);
    }

    /// Returns a cursor to the first element equal to `value`, or
    /// [`Array::end`].
    pub fn find(&self, value: &T) -> Cursor
    where
        T: PartialEq,
    {
        self.find_by(|item| item == value)
    }

    /// Returns a cursor to the first element `predicate` returns true for, or
    /// [`Array::end`].
    pub fn find_by(&self, predicate: impl FnMut(&T) -> bool) -> Cursor {
        match self.items.iter().position(predicate) {
            Some(position) => self.tag.cursor(position),
            None => self.end(),
        }
    }

    /// Returns a cursor to the element at `index`, or [`Array::end`] if the
    /// index is out of bounds.
    pub fn find_at(&self, index: usize) -> Cursor {
        self.tag.cursor(index.min(self.items.len()))
    }

    /// Returns the index of the element `at` points to, or [`NPOS`] if the
    /// cursor is the end cursor, stale, or from another container.
    pub fn index_of(&self, at: Cursor) -> usize {
        match self.tag.resolve(at, self.items.len()) {
            Some(position) if position < self.items.len() => position,
            _ => NPOS,
        }
    }

    /// Returns the element at `index`.
    ///
    /// Fails with [`ContainerError::OutOfRange`] if the index is out of
    /// bounds.
    pub fn at(&self, index: usize) -> Result<&T, ContainerError> {
        let len = self.items.len();
        self.items
            .get(index)
            .ok_or(ContainerError::out_of_range("Array::at", index, len))
    }

    /// Mutable version of [`Array::at`].
    pub fn at_mut(&mut self, index: usize) -> Result<&mut T, ContainerError> {
        let len = self.items.len();
        self.items
            .get_mut(index)
            .ok_or(ContainerError::out_of_range("Array::at_mut", index, len))
    }

    /// Returns the element at `index`, or `None` if out of bounds.
    pub fn get(&self, index: usize) -> Option<&T> {
        self.items.get(index)
    }

    pub fn get_mut(&mut self, index: usize) -> Option<&mut T> {
        self.items.get_mut(index)
    }

    /// Returns the element `at` points to, or `None` for end, stale and
    /// foreign cursors.
    pub fn get_at_cursor(&self, at: Cursor) -> Option<&T> {
        self.items.get(self.index_of(at))
    }

    pub fn first(&self) -> Option<&T> {
        self.items.first()
    }

    pub fn first_mut(&mut self) -> Option<&mut T> {
        self.items.first_mut()
    }

    pub fn last(&self) -> Option<&T> {
        self.items.last()
    }

    pub fn last_mut(&mut self) -> Option<&mut T> {
        self.items.last_mut()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Returns the amount of elements the array can hold without
    /// reallocating.
    pub fn capacity(&self) -> usize {
        self.items.capacity()
    }

    /// Returns the amount of elements equal to `value`.
    pub fn count(&self, value: &T) -> usize
    where
        T: PartialEq,
    {
        self.count_by(|item| item == value)
    }

    /// Returns the amount of elements `predicate` returns true for.
    pub fn count_by(&self, mut predicate: impl FnMut(&T) -> bool) -> usize {
        self.items.iter().filter(|item| predicate(item)).count()
    }

    /// Exchanges the contents of the two arrays. Cursors of both arrays are
    /// invalidated.
    pub fn swap(&mut self, other: &mut Array<T>) {
        core::mem::swap(&mut self.items, &mut other.items);
        self.tag.invalidate();
        other.tag.invalidate();
    }

    /// Resizes the array to `len` elements, filling any new slots with
    /// default values.
    pub fn resize(&mut self, len: usize)
    where
        T: Default,
    {
        self.with_vec(|items| items.resize_with(len, T::default));
    }

    /// Resizes the array to `len` elements, filling any new slots with copies
    /// of `value`.
    pub fn resize_with_value(&mut self, len: usize, value: T)
    where
        T: Clone,
    {
        self.with_vec(|items| items.resize(len, value));
    }

    /// Resizes the array to `len` elements, filling any new slots with zeroed
    /// values.
    pub fn resize_zeroed(&mut self, len: usize)
    where
        T: Zeroable,
    {
        self.with_vec(|items| items.resize_with(len, T::zeroed));
    }

    /// Makes sure the array has space for at least `capacity` elements in
    /// total. Unlike [`Vec::reserve`], the parameter is not relative to the
    /// current length.
    pub fn reserve(&mut self, capacity: usize) {
        self.with_vec(|items| {
            if capacity > items.capacity() {
                items.reserve_exact(capacity - items.len());
            }
        });
    }

    /// Sorts the array in ascending order. Equal elements may be reordered.
    pub fn sort(&mut self)
    where
        T: Ord,
    {
        self.items.sort_unstable();
    }

    /// Sorts the array with `compare`. Equal elements may be reordered.
    pub fn sort_by(&mut self, compare: impl FnMut(&T, &T) -> Ordering) {
        self.items.sort_unstable_by(compare);
    }

    /// Sorts the array in ascending order, keeping equal elements in their
    /// original order.
    pub fn stable_sort(&mut self)
    where
        T: Ord,
    {
        self.items.sort();
    }

    /// Sorts the array with `compare`, keeping equal elements in their
    /// original order.
    pub fn stable_sort_by(&mut self, compare: impl FnMut(&T, &T) -> Ordering) {
        self.items.sort_by(compare);
    }

    /// Rearranges the array into a binary max-heap. O(n).
    pub fn heapify(&mut self)
    where
        T: Ord,
    {
        self.heapify_by(Ord::cmp);
    }

    /// Rearranges the array into a binary max-heap ordered by `compare`. O(n).
    pub fn heapify_by(&mut self, mut compare: impl FnMut(&T, &T) -> Ordering) {
        heap::make_heap(&mut self.items, &mut compare);
    }

    /// Sorts a heapified array in ascending order. See
    /// [`Array::heap_sort_by`].
    pub fn heap_sort(&mut self)
    where
        T: Ord,
    {
        self.heap_sort_by(Ord::cmp);
    }

    /// Sorts an array previously heapified with [`Array::heapify_by`] into
    /// ascending order according to `compare`.
    ///
    /// `compare` must be the same ordering the array was heapified with. If
    /// it's not, the elements end up in some unspecified order.
    ///
    /// ### Panics
    ///
    /// In debug builds (or with the `precondition-checks` feature), panics if
    /// the array is not a heap under `compare`.
    pub fn heap_sort_by(&mut self, mut compare: impl FnMut(&T, &T) -> Ordering) {
        #[cfg(any(debug_assertions, feature = "precondition-checks"))]
        assert!(
            heap::is_heap(&self.items, &mut compare),
            "Array::heap_sort_by requires the array to be heapified with the same ordering",
        );
        heap::sort_heap(&mut self.items, &mut compare);
    }

    /// Returns true if the array is a max-heap under the natural ordering.
    pub fn is_heap(&self) -> bool
    where
        T: Ord,
    {
        self.is_heap_by(Ord::cmp)
    }

    /// Returns true if the array is a max-heap ordered by `compare`.
    pub fn is_heap_by(&self, mut compare: impl FnMut(&T, &T) -> Ordering) -> bool {
        heap::is_heap(&self.items, &mut compare)
    }

    /// Creates a new array out of the results of calling `f` on each element,
    /// in order. This array is not modified.
    pub fn map<U>(&self, f: impl FnMut(&T) -> U) -> Array<U> {
        Array::from(self.items.iter().map(f).collect::<Vec<U>>())
    }

    pub fn for_each(&self, f: impl FnMut(&T)) {
        self.items.iter().for_each(f);
    }

    pub fn for_each_mut(&mut self, f: impl FnMut(&mut T)) {
        self.items.iter_mut().for_each(f);
    }

    pub fn contains(&self, value: &T) -> bool
    where
        T: PartialEq,
    {
        self.items.contains(value)
    }

    /// Returns true if `predicate` returns true for any element.
    pub fn contains_by(&self, predicate: impl FnMut(&T) -> bool) -> bool {
        self.any_of(predicate)
    }

    pub fn any_of(&self, predicate: impl FnMut(&T) -> bool) -> bool {
        self.items.iter().any(predicate)
    }

    /// Returns true if `predicate` returns true for all elements, including
    /// when the array is empty.
    pub fn all_of(&self, predicate: impl FnMut(&T) -> bool) -> bool {
        self.items.iter().all(predicate)
    }

    pub fn none_of(&self, predicate: impl FnMut(&T) -> bool) -> bool {
        !self.any_of(predicate)
    }

    pub fn iter(&self) -> slice::Iter<'_, T> {
        self.items.iter()
    }

    pub fn iter_mut(&mut self) -> slice::IterMut<'_, T> {
        self.items.iter_mut()
    }

    pub fn as_slice(&self) -> &[T] {
        &self.items
    }

    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.items
    }

    pub fn into_vec(self) -> Vec<T> {
        self.items
    }
}

impl<T: Pod> Array<T> {
    /// Returns the elements as tightly packed bytes, e.g. for uploading vertex
    /// data.
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.items)
    }
}

impl<T> Default for Array<T> {
    fn default() -> Self {
        Array::new()
    }
}

impl<T: Clone> Clone for Array<T> {
    fn clone(&self) -> Self {
        Array {
            items: self.items.clone(),
            tag: StorageTag::new(),
        }
    }
}

impl<T: Debug> Debug for Array<T> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_list().entries(&self.items).finish()
    }
}

impl<T: PartialEq> PartialEq for Array<T> {
    fn eq(&self, other: &Self) -> bool {
        self.items == other.items
    }
}

impl<T: Eq> Eq for Array<T> {}

impl<T: Hash> Hash for Array<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.items.hash(state);
    }
}

impl<T> Index<usize> for Array<T> {
    type Output = T;

    fn index(&self, index: usize) -> &T {
        &self.items[index]
    }
}

impl<T> IndexMut<usize> for Array<T> {
    fn index_mut(&mut self, index: usize) -> &mut T {
        &mut self.items[index]
    }
}

impl<T> AsRef<[T]> for Array<T> {
    fn as_ref(&self) -> &[T] {
        &self.items
    }
}

impl<T> AsMut<[T]> for Array<T> {
    fn as_mut(&mut self) -> &mut [T] {
        &mut self.items
    }
}

impl<T> From<Vec<T>> for Array<T> {
    fn from(items: Vec<T>) -> Self {
        Array {
            items,
            tag: StorageTag::new(),
        }
    }
}

impl<T, const N: usize> From<[T; N]> for Array<T> {
    fn from(values: [T; N]) -> Self {
        Array::from(Vec::from(values))
    }
}

impl<T: Clone> From<&[T]> for Array<T> {
    fn from(values: &[T]) -> Self {
        Array::from(values.to_vec())
    }
}

impl<T> FromIterator<T> for Array<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Array::from(iter.into_iter().collect::<Vec<T>>())
    }
}

impl<T> Extend<T> for Array<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.add_last_iter(iter);
    }
}

impl<T> IntoIterator for Array<T> {
    type Item = T;
    type IntoIter = alloc::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a Array<T> {
    type Item = &'a T;
    type IntoIter = slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

impl<'a, T> IntoIterator for &'a mut Array<T> {
    type Item = &'a mut T;
    type IntoIter = slice::IterMut<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter_mut()
    }
}
