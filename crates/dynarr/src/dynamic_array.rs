// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use alloc::boxed::Box;
use alloc::string::{String, ToString};
use core::ops::Deref;

use tracing::{debug, trace};

#[cfg(any(test, feature = "test_utils"))]
use crate::behaviour::DynamicArrayBehaviour;
use crate::error::DynamicArrayError;
use crate::slots;

/// Growable array of borrowed string handles with explicit capacity doubling.
///
/// The array owns its slot storage but only borrows the strings it holds: an
/// element is a `&'a str` supplied by the caller and is never cloned or freed.
///
/// Slots `[0, len)` are live and ordered. Slots `[len, capacity)` are vacant
/// storage that no operation reads. When an insertion would exceed capacity the
/// storage is reallocated at twice its size; capacity never shrinks.
///
/// # Example
///
/// ```rust
/// use dynarr::{DynamicArray, DynamicArrayError};
///
/// fn example() -> Result<(), DynamicArrayError> {
///     let mut arr = DynamicArray::with_capacity(1)?;
///     arr.append("b")?;
///     arr.insert("a", 0)?;
///
///     assert_eq!(arr.capacity(), 2);
///     assert_eq!(arr.read(0)?, "a");
///     assert_eq!(arr.to_display_string(), "[a,b]");
///     Ok(())
/// }
/// # example().unwrap();
/// ```
#[derive(Clone)]
pub struct DynamicArray<'a> {
    slots: Box<[&'a str]>,
    count: usize,
    #[cfg(any(test, feature = "test_utils"))]
    behaviour: DynamicArrayBehaviour,
}

impl<'a> DynamicArray<'a> {
    pub(crate) fn resize_with<F>(
        &mut self,
        #[allow(unused)] mut hook: F,
    ) -> Result<(), DynamicArrayError>
    where
        F: FnMut(&Self),
    {
        let from = self.capacity();
        let to = slots::doubled(from)?;

        #[cfg(any(test, feature = "test_utils"))]
        if matches!(self.behaviour, DynamicArrayBehaviour::FailAtResize) {
            return Err(DynamicArrayError::AllocationFailed { requested: to });
        }

        let grown = slots::grow(&self.slots, self.count, to)?;

        #[cfg(test)]
        hook(&*self);

        // Old storage is released here, after the live slots were copied out.
        self.slots = grown;

        #[cfg(test)]
        hook(&*self);

        debug!(from, to, count = self.count, "array doubling");

        Ok(())
    }

    /// Doubles the capacity, preserving every live element at its index.
    #[cold]
    #[inline(never)]
    pub(crate) fn resize(&mut self) -> Result<(), DynamicArrayError> {
        self.resize_with(|_| {})
    }

    #[inline(always)]
    fn maybe_resize(&mut self) -> Result<(), DynamicArrayError> {
        if self.count < self.capacity() {
            return Ok(());
        }

        self.resize()
    }

    /// Creates an empty array with room for `capacity` elements.
    ///
    /// # Errors
    ///
    /// - [`DynamicArrayError::InvalidArgument`] if `capacity` is zero.
    /// - [`DynamicArrayError::AllocationFailed`] if the storage cannot be reserved.
    pub fn with_capacity(capacity: usize) -> Result<Self, DynamicArrayError> {
        if capacity == 0 {
            return Err(DynamicArrayError::InvalidArgument {
                reason: "capacity must be at least 1",
            });
        }

        Ok(Self {
            slots: slots::allocate(capacity)?,
            count: 0,
            #[cfg(any(test, feature = "test_utils"))]
            behaviour: DynamicArrayBehaviour::default(),
        })
    }

    /// Consumes the array and releases its slot storage.
    ///
    /// Referenced strings are untouched. Dropping the array has the same effect.
    pub fn destroy(self) {
        let Self { slots, count, .. } = self;

        trace!(capacity = slots.len(), count, "destroying array");
        drop(slots);
    }

    /// Changes the failure-injection behaviour.
    #[cfg(any(test, feature = "test_utils"))]
    pub fn change_behaviour(&mut self, behaviour: DynamicArrayBehaviour) {
        self.behaviour = behaviour;
    }

    /// Returns the number of live elements.
    #[inline]
    pub fn len(&self) -> usize {
        self.count
    }

    /// Returns `true` if the array holds no elements.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// Returns the number of allocated slots.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Returns the live elements in order.
    #[inline]
    pub fn as_slice(&self) -> &[&'a str] {
        &self.slots[..self.count]
    }

    /// Iterates over the live elements in order.
    pub fn iter(&self) -> core::iter::Copied<core::slice::Iter<'_, &'a str>> {
        self.as_slice().iter().copied()
    }

    /// Converts a signed index into a slot index.
    ///
    /// # Errors
    ///
    /// Returns [`DynamicArrayError::IndexOutOfRange`] for any negative `index`.
    pub fn signed_index(&self, index: i64) -> Result<usize, DynamicArrayError> {
        usize::try_from(index).map_err(|_| DynamicArrayError::IndexOutOfRange {
            index,
            count: self.count,
        })
    }

    /// Returns the element at `index`.
    ///
    /// # Errors
    ///
    /// Returns [`DynamicArrayError::IndexOutOfRange`] if `index >= len()`.
    pub fn read(&self, index: usize) -> Result<&'a str, DynamicArrayError> {
        self.as_slice()
            .get(index)
            .copied()
            .ok_or_else(|| DynamicArrayError::index_out_of_range(index, self.count))
    }

    /// Inserts `element` at `index`, shifting `[index, len)` one slot right.
    ///
    /// `index == len()` appends. The index is validated before any growth, so a
    /// rejected insert never resizes.
    ///
    /// # Errors
    ///
    /// - [`DynamicArrayError::IndexOutOfRange`] if `index > len()`.
    /// - [`DynamicArrayError::Overflow`] or [`DynamicArrayError::AllocationFailed`]
    ///   if a required resize fails. The array is left unchanged.
    pub fn insert(&mut self, element: &'a str, index: usize) -> Result<(), DynamicArrayError> {
        if index > self.count {
            return Err(DynamicArrayError::index_out_of_range(index, self.count));
        }

        self.maybe_resize()?;

        slots::shift_right(&mut self.slots, index, self.count);
        self.slots[index] = element;
        self.count += 1;

        trace!(index, count = self.count, "inserted element");

        Ok(())
    }

    /// Appends `element` after the last live element.
    ///
    /// # Errors
    ///
    /// Same growth errors as [`insert`](Self::insert).
    pub fn append(&mut self, element: &'a str) -> Result<(), DynamicArrayError> {
        self.insert(element, self.count)
    }

    /// Returns the index of the first live element equal to `element`.
    pub fn position(&self, element: &str) -> Option<usize> {
        self.as_slice().iter().position(|slot| *slot == element)
    }

    /// Returns `true` if a live element equals `element`.
    pub fn contains(&self, element: &str) -> bool {
        self.position(element).is_some()
    }

    /// Removes the first live element equal to `element` and returns its former index.
    ///
    /// Elements after it shift one slot left. Capacity is unchanged.
    ///
    /// # Errors
    ///
    /// Returns [`DynamicArrayError::NotFound`] if no live element matches.
    pub fn remove(&mut self, element: &str) -> Result<usize, DynamicArrayError> {
        let index = self.position(element).ok_or(DynamicArrayError::NotFound)?;

        slots::shift_left(&mut self.slots, index, self.count);
        self.count -= 1;

        trace!(index, count = self.count, "removed element");

        Ok(index)
    }

    /// Renders the live elements as `[a,b,c]`.
    pub fn to_display_string(&self) -> String {
        self.to_string()
    }
}

impl core::fmt::Display for DynamicArray<'_> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str("[")?;
        for (i, element) in self.iter().enumerate() {
            if i != 0 {
                f.write_str(",")?;
            }
            f.write_str(element)?;
        }
        f.write_str("]")
    }
}

impl core::fmt::Debug for DynamicArray<'_> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("DynamicArray")
            .field("len", &self.len())
            .field("capacity", &self.capacity())
            .finish()
    }
}

impl PartialEq for DynamicArray<'_> {
    fn eq(&self, other: &Self) -> bool {
        // Vacant slots and capacity are not part of the value.
        self.as_slice() == other.as_slice()
    }
}

impl Eq for DynamicArray<'_> {}

impl<'a> Deref for DynamicArray<'a> {
    type Target = [&'a str];

    fn deref(&self) -> &Self::Target {
        self.as_slice()
    }
}

impl<'a, 'b> IntoIterator for &'b DynamicArray<'a> {
    type Item = &'a str;
    type IntoIter = core::iter::Copied<core::slice::Iter<'b, &'a str>>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
