// SPDX-FileCopyrightText: 2025 Jens Pitkänen <jens.pitkanen@helsinki.fi>
//
// SPDX-License-Identifier: GPL-3.0-or-later

#![no_std]

//! Foundation layer for the Iris engine: growable containers, a codepoint
//! string, thin associative maps, and the actor/component lifecycle built on
//! top of them.

extern crate alloc;

pub mod collections;
mod error;
pub mod lifecycle;

pub use collections::{Array, Cursor, HashMap, SortedMap, U32String, NPOS};
pub use error::ContainerError;
