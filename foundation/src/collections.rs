// SPDX-FileCopyrightText: 2025 Jens Pitkänen <jens.pitkanen@helsinki.fi>
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Growable containers.
//!
//! [`Array`] and [`U32String`] are contiguous sequences handing out
//! [`Cursor`]s for positions. Cursors are plain values that remember which
//! container and which version of its storage they were taken from, so a
//! cursor from before a length- or capacity-changing mutation is detected as
//! stale instead of silently pointing at the wrong element.

mod array;
pub mod codepoint;
mod cursor;
mod hash_map;
mod sorted_map;
mod string;

pub use array::Array;
pub use cursor::{Cursor, NPOS};
pub use hash_map::{DefaultHashBuilder, HashMap};
pub use sorted_map::{Greater, KeyOrder, Less, SortedMap};
pub use string::{Match, Raw, U32String};
