// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Error types for dynarr.

use thiserror::Error;

/// Error type for `DynamicArray` operations.
///
/// Every fallible operation leaves the array exactly as it was before the call
/// when it returns one of these.
#[derive(Debug, Error, Eq, PartialEq)]
pub enum DynamicArrayError {
    /// Construction parameters were rejected.
    #[error("Invalid argument: {reason}")]
    InvalidArgument {
        /// What was wrong with the argument.
        reason: &'static str,
    },

    /// A read or insert index fell outside the legal range.
    ///
    /// Reads accept `[0, count)`, inserts accept `[0, count]`. Negative
    /// indices are always out of range.
    #[error("Index out of range: index {index} with count {count}")]
    IndexOutOfRange {
        /// The rejected index.
        index: i64,
        /// Number of live elements at the time of the call.
        count: usize,
    },

    /// The element to remove is not present in the live region.
    #[error("Element not found in array")]
    NotFound,

    /// Doubling the capacity would exceed `usize::MAX`.
    #[error("Integer overflow: doubled capacity would exceed usize::MAX")]
    Overflow,

    /// The allocator refused the backing storage.
    #[error("Allocation failed: could not reserve {requested} slots")]
    AllocationFailed {
        /// Number of slots requested.
        requested: usize,
    },
}

impl DynamicArrayError {
    pub(crate) fn index_out_of_range(index: usize, count: usize) -> Self {
        Self::IndexOutOfRange {
            index: i64::try_from(index).unwrap_or(i64::MAX),
            count,
        }
    }
}
