// SPDX-FileCopyrightText: 2025 Jens Pitkänen <jens.pitkanen@helsinki.fi>
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Binary max-heap algorithms over slices, with a caller-provided ordering.
//!
//! The layout is the usual implicit one: the children of index `i` are at
//! `2 * i + 1` and `2 * i + 2`, and no child compares greater than its parent.

use core::cmp::Ordering;

/// Rearranges `slice` into a max-heap in O(n).
pub fn make_heap<T, F>(slice: &mut [T], cmp: &mut F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    let len = slice.len();
    for root in (0..len / 2).rev() {
        sift_down(slice, root, len, cmp);
    }
}

/// Turns a max-heap into an ascending sequence in O(n log n).
///
/// If `slice` is not a max-heap under `cmp`, the result is some permutation
/// of the input, but not necessarily a sorted one.
pub fn sort_heap<T, F>(slice: &mut [T], cmp: &mut F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    for end in (1..slice.len()).rev() {
        slice.swap(0, end);
        sift_down(slice, 0, end, cmp);
    }
}

/// Returns true if no element of `slice` compares greater than its parent.
pub fn is_heap<T, F>(slice: &[T], cmp: &mut F) -> bool
where
    F: FnMut(&T, &T) -> Ordering,
{
    (1..slice.len()).all(|child| cmp(&slice[(child - 1) / 2], &slice[child]) != Ordering::Less)
}

/// Moves the element at `root` down until both of its children (within
/// `..end`) compare less or equal to it.
fn sift_down<T, F>(slice: &mut [T], mut root: usize, end: usize, cmp: &mut F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    loop {
        let mut child = 2 * root + 1;
        if child >= end {
            break;
        }
        if child + 1 < end && cmp(&slice[child], &slice[child + 1]) == Ordering::Less {
            child += 1;
        }
        if cmp(&slice[root], &slice[child]) != Ordering::Less {
            break;
        }
        slice.swap(root, child);
        root = child;
    }
}
