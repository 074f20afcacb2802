// SPDX-FileCopyrightText: 2025 Jens Pitkänen <jens.pitkanen@helsinki.fi>
//
// SPDX-License-Identifier: GPL-3.0-or-later

use core::sync::atomic::{AtomicUsize, Ordering};

/// The index returned by [`Array::index_of`](super::Array::index_of) and
/// friends when the cursor doesn't point at an element of the container.
pub const NPOS: usize = usize::MAX;

fn make_storage_id() -> usize {
    static STORAGE_ID_COUNTER: AtomicUsize = AtomicUsize::new(0);
    let prev_id = STORAGE_ID_COUNTER.fetch_add(1, Ordering::Relaxed);
    prev_id.checked_add(1).unwrap()
}

/// Position handle into an [`Array`](super::Array) or a
/// [`U32String`](super::U32String).
///
/// Cursors are only valid for the container they were taken from, and only
/// until the container's length or capacity changes. Sorting, heapifying or
/// writing through `IndexMut` does not invalidate cursors, but the elements
/// they point at may of course be different afterwards.
///
/// Using an invalidated cursor is not undefined behavior: lookups like
/// [`Array::index_of`](super::Array::index_of) return [`NPOS`], and mutating
/// functions taking a cursor panic.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Cursor {
    storage_id: usize,
    generation: u64,
    position: usize,
}

impl Cursor {
    /// Returns a cursor `delta` positions forward (or backward, if negative)
    /// from this one, like `begin() + n` for C++ iterators.
    ///
    /// Moving past the end of the container results in an invalid cursor,
    /// moving before the start clamps to the start.
    pub fn offset(self, delta: isize) -> Cursor {
        let position = if delta < 0 {
            self.position.saturating_sub(delta.unsigned_abs())
        } else {
            self.position.saturating_add(delta as usize)
        };
        Cursor { position, ..self }
    }

    /// Shorthand for `offset(1)`.
    pub fn next(self) -> Cursor {
        self.offset(1)
    }
}

/// Identity and version of a container's backing storage, used to hand out
/// and validate [`Cursor`]s.
///
/// Cloning a tag creates a new identity, since the clone of a container owns
/// separate storage.
#[derive(Debug)]
pub(crate) struct StorageTag {
    id: usize,
    /// Incremented whenever positions handed out earlier may have become
    /// invalid, i.e. when the length or capacity of the storage changes.
    generation: u64,
}

impl StorageTag {
    pub fn new() -> StorageTag {
        StorageTag {
            id: make_storage_id(),
            generation: 0,
        }
    }

    pub fn cursor(&self, position: usize) -> Cursor {
        Cursor {
            storage_id: self.id,
            generation: self.generation,
            position,
        }
    }

    pub fn invalidate(&mut self) {
        self.generation = self.generation.wrapping_add(1);
    }

    /// Returns the position of the cursor if it was created by this tag since
    /// the last invalidation and `position <= len` (the end cursor is valid
    /// too).
    pub fn resolve(&self, cursor: Cursor, len: usize) -> Option<usize> {
        if cursor.storage_id == self.id
            && cursor.generation == self.generation
            && cursor.position <= len
        {
            Some(cursor.position)
        } else {
            None
        }
    }
}

impl Clone for StorageTag {
    fn clone(&self) -> Self {
        StorageTag::new()
    }
}

impl Default for StorageTag {
    fn default() -> Self {
        StorageTag::new()
    }
}
