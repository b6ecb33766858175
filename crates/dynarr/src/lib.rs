// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Capacity-doubling dynamic array of borrowed string handles.
//!
//! `DynamicArray<'a>` stores `&'a str` handles in a slot buffer it owns and
//! grows explicitly: whenever an insertion would exceed capacity, the buffer is
//! reallocated at twice its size and the live slots are copied across.
//!
//! # Core Guarantees
//!
//! - **Bounded scans**: every read, shift and search touches only the live
//!   region `[0, len)`. Vacant slots are never read.
//! - **Atomic failures**: a failed `read`, `insert`, `append` or `remove`
//!   leaves length, capacity and contents exactly as they were.
//! - **Monotonic capacity**: capacity only grows, always by doubling.
//! - **Borrowed elements**: strings are referenced, never cloned or freed.
//!
//! # Example: Basic Usage
//!
//! ```rust
//! use dynarr::{DynamicArray, DynamicArrayError};
//!
//! fn example() -> Result<(), DynamicArrayError> {
//!     let mut arr = DynamicArray::with_capacity(1)?;
//!     arr.append("STRING4")?;
//!     arr.insert("STRING2", 0)?;
//!     arr.insert("STRING3", 1)?;
//!     assert_eq!(arr.to_display_string(), "[STRING2,STRING3,STRING4]");
//!
//!     arr.remove("STRING3")?;
//!     assert_eq!(arr.as_slice(), ["STRING2", "STRING4"]);
//!
//!     // Reads past the live region fail
//!     assert!(arr.read(2).is_err());
//!     Ok(())
//! }
//! # example().unwrap();
//! ```
//!
//! # Example: Growth
//!
//! ```rust
//! use dynarr::{DynamicArray, DynamicArrayError};
//!
//! fn example() -> Result<(), DynamicArrayError> {
//!     let mut arr = DynamicArray::with_capacity(2)?;
//!     for s in ["a", "b", "c", "d", "e"] {
//!         arr.append(s)?;
//!     }
//!
//!     // 2 → 4 → 8
//!     assert_eq!(arr.capacity(), 8);
//!     assert_eq!(arr.len(), 5);
//!     Ok(())
//! }
//! # example().unwrap();
//! ```
//!
//! # Test Utilities
//!
//! Enable the `test_utils` feature to inject resize failures and exercise
//! error-handling paths:
//!
//! ```toml
//! [dev-dependencies]
//! dynarr = { version = "*", features = ["test_utils"] }
//! ```

#![cfg_attr(not(test), no_std)]
#![warn(missing_docs)]

extern crate alloc;

#[cfg(any(test, feature = "test_utils"))]
mod behaviour;
mod dynamic_array;
mod error;
mod slots;

#[cfg(test)]
mod tests;

pub use dynamic_array::DynamicArray;
pub use error::DynamicArrayError;

#[cfg(any(test, feature = "test_utils"))]
pub use behaviour::DynamicArrayBehaviour;
