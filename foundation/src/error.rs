// SPDX-FileCopyrightText: 2025 Jens Pitkänen <jens.pitkanen@helsinki.fi>
//
// SPDX-License-Identifier: GPL-3.0-or-later

use thiserror::Error;

/// Error type returned by the bounds-checked accessors of the containers in
/// [`collections`](crate::collections).
///
/// Lookups that can simply miss (e.g. [`Array::find`](crate::Array::find))
/// don't use this, they return an end cursor or [`NPOS`](crate::NPOS)
/// instead.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ContainerError {
    /// An index past the end of a sequence was accessed.
    #[error("OutOfRange: {operation} (index {index}, length {len})")]
    OutOfRange {
        /// The name of the operation that detected the violation, e.g.
        /// `"Array::at"`.
        operation: &'static str,
        index: usize,
        len: usize,
    },
    /// A key was looked up with a checked accessor and it's not in the map.
    #[error("OutOfRange: {operation} (key not found)")]
    MissingKey { operation: &'static str },
}

impl ContainerError {
    pub(crate) fn out_of_range(operation: &'static str, index: usize, len: usize) -> Self {
        ContainerError::OutOfRange {
            operation,
            index,
            len,
        }
    }
}
