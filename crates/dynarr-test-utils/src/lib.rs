// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Test utilities for dynarr crates.
//!
//! Exhaustive enumerators for removal orders and insertion positions, plus
//! distinct element labels.
//!
//! ## License
//!
//! GPL-3.0-only

mod labels;
mod permutations;
mod schedules;

pub use labels::labels;
pub use permutations::index_permutations;
pub use schedules::{apply_schedule, insert_schedules};
