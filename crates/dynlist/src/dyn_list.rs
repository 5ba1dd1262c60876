// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use alloc::vec::Vec;
use core::ops::{Deref, DerefMut, Index, IndexMut};

use dynlist_algo::{SearchAlgorithm, SortAlgorithm};

use crate::config::ListConfig;
use crate::error::ListError;
use crate::outcome::MutationOutcome;
use crate::policy::{
    DEFAULT_CAPACITY, DEFAULT_MAX_CAPACITY, clamp_capacity, grow_amount, reserve_target,
    should_shrink, shrink_amount,
};

/// A bounded dynamic array with an explicit capacity policy.
///
/// `DynList` tracks its own logical capacity instead of deferring to `Vec`:
/// it doubles when a push finds it full, halves when it drains below the
/// shrink threshold (see [`policy`](crate::policy)), and never exceeds its
/// maximum capacity.
/// Every capacity change is a reallocation:
///
/// 1. Allocate a new buffer with the target capacity
/// 2. Move the live elements that fit into it
/// 3. Release the old buffer (dropping anything that did not fit)
///
/// Pushing into a list that is full at its maximum capacity drops the value
/// and reports [`MutationOutcome::Full`].
///
/// # Example
///
/// ```rust
/// use dynlist::{DynList, MutationOutcome};
///
/// let mut list = DynList::new();
/// assert_eq!(list.capacity(), 5);
///
/// for i in 0..5 {
///     assert_eq!(list.push(i), MutationOutcome::Stored);
/// }
/// assert_eq!(list.push(5), MutationOutcome::GrewTo { capacity: 10 });
///
/// list.quick_sort();
/// assert_eq!(list.binary_search(&3), Some(3));
/// ```
pub struct DynList<T> {
    buffer: Vec<T>,
    capacity: usize,
    max_capacity: usize,
}

impl<T> DynList<T> {
    /// Creates an empty list with the default capacity and ceiling.
    pub fn new() -> Self {
        Self::from_parts(DEFAULT_CAPACITY, DEFAULT_MAX_CAPACITY)
    }

    /// Creates an empty list with `capacity` slots, clamped to
    /// `[1, DEFAULT_MAX_CAPACITY]`.
    pub fn with_capacity(capacity: usize) -> Self {
        Self::from_parts(
            clamp_capacity(capacity, DEFAULT_MAX_CAPACITY),
            DEFAULT_MAX_CAPACITY,
        )
    }

    /// Creates an empty list from a [`ListConfig`].
    ///
    /// # Errors
    ///
    /// Returns [`ListError::ZeroMaxCapacity`] if the configured ceiling is zero.
    pub fn with_config(config: ListConfig) -> Result<Self, ListError> {
        config.validate()?;

        Ok(Self::from_parts(
            config.effective_initial_capacity(),
            config.max_capacity,
        ))
    }

    fn from_parts(capacity: usize, max_capacity: usize) -> Self {
        debug_assert!(capacity >= 1 && capacity <= max_capacity);

        Self {
            buffer: Vec::with_capacity(capacity),
            capacity,
            max_capacity,
        }
    }

    /// Returns the number of elements in the list.
    #[inline]
    pub fn len(&self) -> usize {
        self.buffer.len()
    }

    /// Returns `true` if the list contains no elements.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    /// Returns the number of slots currently allocated.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Returns the capacity ceiling of this list.
    #[inline]
    pub fn max_capacity(&self) -> usize {
        self.max_capacity
    }

    /// Returns `true` if the next push would be dropped.
    #[inline]
    pub fn is_full(&self) -> bool {
        self.len() == self.capacity && self.capacity == self.max_capacity
    }

    // =========================================================================
    // Storage
    // =========================================================================

    /// Grows the capacity by `amount`, clamped to the maximum capacity.
    ///
    /// Does nothing if the list is already at its ceiling.
    pub fn reserve(&mut self, amount: usize) {
        if self.capacity == self.max_capacity {
            return;
        }

        let target = reserve_target(self.capacity, amount, self.max_capacity);
        if target != self.capacity {
            self.realloc(target);
        }
    }

    /// Shrinks the capacity by `amount`.
    ///
    /// If `amount` covers the whole capacity, the list collapses to a single
    /// empty slot and every element is dropped. Otherwise elements past the
    /// new capacity are dropped.
    pub fn discard(&mut self, amount: usize) {
        if amount >= self.capacity {
            self.buffer = Vec::new();
            self.realloc(1);
            return;
        }

        self.realloc(self.capacity - amount);
    }

    #[cold]
    #[inline(never)]
    fn realloc(&mut self, new_capacity: usize) {
        let keep = self.buffer.len().min(new_capacity);

        let mut buffer = Vec::with_capacity(new_capacity);
        buffer.extend(self.buffer.drain(..keep));

        // Replacing the old buffer drops whatever did not fit.
        self.buffer = buffer;
        self.capacity = new_capacity;
    }

    #[inline]
    fn maybe_shrink(&mut self) {
        if should_shrink(self.len(), self.capacity) {
            self.discard(shrink_amount(self.capacity));
        }
    }

    // =========================================================================
    // Mutation
    // =========================================================================

    /// Appends `value`, doubling the capacity first if the list is full.
    ///
    /// Returns [`MutationOutcome::Full`] and drops the value if the list is
    /// full at its maximum capacity.
    pub fn push(&mut self, value: T) -> MutationOutcome {
        let mut outcome = MutationOutcome::Stored;

        if self.len() == self.capacity {
            let before = self.capacity;
            self.reserve(grow_amount(before));

            if self.capacity == before {
                return MutationOutcome::Full;
            }

            outcome = MutationOutcome::GrewTo {
                capacity: self.capacity,
            };
        }

        self.buffer.push(value);
        outcome
    }

    /// Inserts `value` at `index`, shifting later elements right.
    ///
    /// The value is pushed, then swapped down pairwise until it reaches
    /// `index`. Valid indices are `0..=len`; anything else returns
    /// [`MutationOutcome::InvalidIndex`] and changes nothing.
    pub fn insert(&mut self, index: usize, value: T) -> MutationOutcome {
        let len = self.len();
        if index > len {
            return MutationOutcome::InvalidIndex { index, len };
        }

        let outcome = self.push(value);
        if outcome.is_stored() {
            for i in (index + 1..=len).rev() {
                self.buffer.swap(i, i - 1);
            }
        }

        outcome
    }

    /// Inserts clones of `values` starting at `index`, keeping their order.
    ///
    /// Equivalent to `insert(index + i, values[i].clone())` for each `i`.
    /// Returns how many values were stored; an `index` past the end stores
    /// nothing.
    pub fn insert_slice(&mut self, index: usize, values: &[T]) -> usize
    where
        T: Clone,
    {
        // Every later offset would be past the end as well.
        if index > self.len() {
            return 0;
        }

        let mut stored = 0;

        for (offset, value) in values.iter().enumerate() {
            if self.insert(index + offset, value.clone()).is_stored() {
                stored += 1;
            }
        }

        stored
    }

    /// Inserts clones of every element of `other` starting at `index`.
    ///
    /// Returns how many values were stored.
    pub fn insert_list(&mut self, index: usize, other: &DynList<T>) -> usize
    where
        T: Clone,
    {
        self.insert_slice(index, other.as_slice())
    }

    /// Removes and returns the last element, then applies the shrink policy.
    pub fn pop(&mut self) -> Option<T> {
        let value = self.buffer.pop()?;
        self.maybe_shrink();
        Some(value)
    }

    /// Removes and returns the element at `index` in O(1).
    ///
    /// The last element takes its place, so order is not preserved. Returns
    /// `None` and changes nothing if `index >= len`.
    pub fn remove(&mut self, index: usize) -> Option<T> {
        if index >= self.len() {
            return None;
        }

        let value = self.buffer.swap_remove(index);
        self.maybe_shrink();
        Some(value)
    }

    /// Removes and returns the element at `index`, shifting later elements
    /// left by one. O(n).
    ///
    /// Returns `None` and changes nothing if `index >= len`.
    pub fn remove_keep_order(&mut self, index: usize) -> Option<T> {
        if index >= self.len() {
            return None;
        }

        let value = self.buffer.remove(index);
        self.maybe_shrink();
        Some(value)
    }

    /// Removes every element equal to `value` with [`remove`](Self::remove).
    ///
    /// Returns how many elements were removed.
    pub fn remove_value(&mut self, value: &T) -> usize
    where
        T: PartialEq,
    {
        self.remove_matching(value, Self::remove)
    }

    /// Removes every element equal to `value` with
    /// [`remove_keep_order`](Self::remove_keep_order).
    ///
    /// Returns how many elements were removed.
    pub fn remove_value_keep_order(&mut self, value: &T) -> usize
    where
        T: PartialEq,
    {
        self.remove_matching(value, Self::remove_keep_order)
    }

    fn remove_matching(&mut self, value: &T, remove: fn(&mut Self, usize) -> Option<T>) -> usize
    where
        T: PartialEq,
    {
        let mut removed = 0;
        let mut i = 0;

        // Whatever moves into slot `i` after a removal is checked next.
        while i < self.len() {
            if self.buffer[i] == *value {
                remove(self, i);
                removed += 1;
            } else {
                i += 1;
            }
        }

        removed
    }

    /// Drops every element and collapses the list to a single slot.
    pub fn clear(&mut self) {
        self.discard(self.capacity);
    }

    // =========================================================================
    // Access
    // =========================================================================

    /// Returns a reference to the element at `index`.
    ///
    /// # Errors
    ///
    /// Returns [`ListError::IndexOutOfBounds`] if `index >= len`.
    pub fn try_get(&self, index: usize) -> Result<&T, ListError> {
        let len = self.len();
        self.buffer
            .get(index)
            .ok_or(ListError::IndexOutOfBounds { index, len })
    }

    /// Returns a mutable reference to the element at `index`.
    ///
    /// # Errors
    ///
    /// Returns [`ListError::IndexOutOfBounds`] if `index >= len`.
    pub fn try_get_mut(&mut self, index: usize) -> Result<&mut T, ListError> {
        let len = self.len();
        self.buffer
            .get_mut(index)
            .ok_or(ListError::IndexOutOfBounds { index, len })
    }

    /// Returns the live elements as a slice.
    pub fn as_slice(&self) -> &[T] {
        &self.buffer
    }

    /// Returns the live elements as a mutable slice.
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.buffer
    }
}

// =============================================================================
// Algorithms
// =============================================================================

impl<T: PartialOrd> DynList<T> {
    /// Sorts the list ascending with [`dynlist_algo::quick_sort`].
    pub fn quick_sort(&mut self) {
        dynlist_algo::quick_sort(&mut self.buffer);
    }

    /// Sorts the list ascending with [`dynlist_algo::cocktail_shaker_sort`].
    pub fn cocktail_shaker_sort(&mut self) {
        dynlist_algo::cocktail_shaker_sort(&mut self.buffer);
    }

    /// Sorts the list ascending with [`dynlist_algo::insertion_sort`].
    pub fn insertion_sort(&mut self) {
        dynlist_algo::insertion_sort(&mut self.buffer);
    }

    /// Sorts the list ascending with [`dynlist_algo::heap_sort`].
    pub fn heap_sort(&mut self) {
        dynlist_algo::heap_sort(&mut self.buffer);
    }

    /// Sorts the list ascending with the given algorithm.
    pub fn sort_with(&mut self, algorithm: SortAlgorithm) {
        algorithm.sort(&mut self.buffer);
    }

    /// Returns `true` if the list is in non-decreasing order.
    pub fn is_sorted(&self) -> bool {
        dynlist_algo::is_sorted(&self.buffer)
    }

    /// Finds `value` in the ascending list with
    /// [`dynlist_algo::binary_search`].
    pub fn binary_search(&self, value: &T) -> Option<usize> {
        dynlist_algo::binary_search(&self.buffer, value)
    }

    /// Finds `value` in the ascending list with
    /// [`dynlist_algo::fibonacci_search`].
    pub fn fibonacci_search(&self, value: &T) -> Option<usize> {
        dynlist_algo::fibonacci_search(&self.buffer, value)
    }

    /// Finds `value` in the ascending list with
    /// [`dynlist_algo::jump_search`].
    pub fn jump_search(&self, value: &T) -> Option<usize> {
        dynlist_algo::jump_search(&self.buffer, value)
    }

    /// Finds `value` in the ascending list with the given algorithm.
    ///
    /// The list must already be sorted; this is not checked and the result
    /// on unsorted data is unspecified.
    pub fn search_with(&self, algorithm: SearchAlgorithm, value: &T) -> Option<usize> {
        algorithm.search(&self.buffer, value)
    }
}

// =============================================================================
// Traits
// =============================================================================

impl<T> Default for DynList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone> Clone for DynList<T> {
    fn clone(&self) -> Self {
        let mut buffer = Vec::with_capacity(self.capacity);
        buffer.extend_from_slice(&self.buffer);

        Self {
            buffer,
            capacity: self.capacity,
            max_capacity: self.max_capacity,
        }
    }

    fn clone_from(&mut self, source: &Self) {
        // Release the current storage before allocating the copy.
        self.buffer = Vec::new();
        self.buffer.reserve_exact(source.capacity);
        self.buffer.extend_from_slice(&source.buffer);

        self.capacity = source.capacity;
        self.max_capacity = source.max_capacity;
    }
}

impl<T: PartialEq> PartialEq for DynList<T> {
    fn eq(&self, other: &Self) -> bool {
        // Capacity is storage state, not content.
        self.buffer == other.buffer
    }
}

impl<T: Eq> Eq for DynList<T> {}

impl<T> Deref for DynList<T> {
    type Target = [T];

    fn deref(&self) -> &Self::Target {
        &self.buffer
    }
}

impl<T> DerefMut for DynList<T> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.buffer
    }
}

impl<T> Index<usize> for DynList<T> {
    type Output = T;

    fn index(&self, index: usize) -> &Self::Output {
        match self.try_get(index) {
            Ok(value) => value,
            Err(err) => panic!("{err}"),
        }
    }
}

impl<T> IndexMut<usize> for DynList<T> {
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        match self.try_get_mut(index) {
            Ok(value) => value,
            Err(err) => panic!("{err}"),
        }
    }
}

impl<T> FromIterator<T> for DynList<T> {
    /// Pushes every item; items arriving after the list is full at its
    /// maximum capacity are dropped.
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut list = Self::new();
        list.extend(iter);
        list
    }
}

impl<T> Extend<T> for DynList<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            if self.push(value) == MutationOutcome::Full {
                break;
            }
        }
    }
}

impl<'a, T> IntoIterator for &'a DynList<T> {
    type Item = &'a T;
    type IntoIter = core::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.buffer.iter()
    }
}

impl<'a, T> IntoIterator for &'a mut DynList<T> {
    type Item = &'a mut T;
    type IntoIter = core::slice::IterMut<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.buffer.iter_mut()
    }
}
