// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use crate::error::ListError;
use crate::policy::{DEFAULT_CAPACITY, DEFAULT_MAX_CAPACITY, clamp_capacity};

/// Construction parameters for a [`DynList`](crate::DynList).
///
/// # Example
///
/// ```rust
/// use dynlist::{DynList, ListConfig, ListError};
///
/// fn example() -> Result<(), ListError> {
///     let config = ListConfig::new()
///         .with_initial_capacity(2)
///         .with_max_capacity(8);
///
///     let list: DynList<u32> = DynList::with_config(config)?;
///     assert_eq!(list.capacity(), 2);
///     assert_eq!(list.max_capacity(), 8);
///     Ok(())
/// }
/// # example().unwrap();
/// ```
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct ListConfig {
    /// Starting capacity, clamped to `[1, max_capacity]`.
    pub initial_capacity: usize,
    /// Capacity ceiling. Must be at least 1.
    pub max_capacity: usize,
}

impl ListConfig {
    /// Returns the default configuration.
    pub const fn new() -> Self {
        Self {
            initial_capacity: DEFAULT_CAPACITY,
            max_capacity: DEFAULT_MAX_CAPACITY,
        }
    }

    /// Sets the starting capacity.
    pub const fn with_initial_capacity(mut self, initial_capacity: usize) -> Self {
        self.initial_capacity = initial_capacity;
        self
    }

    /// Sets the capacity ceiling.
    pub const fn with_max_capacity(mut self, max_capacity: usize) -> Self {
        self.max_capacity = max_capacity;
        self
    }

    /// Checks that the configuration can back a list.
    ///
    /// # Errors
    ///
    /// Returns [`ListError::ZeroMaxCapacity`] if `max_capacity` is zero.
    pub fn validate(&self) -> Result<(), ListError> {
        if self.max_capacity == 0 {
            return Err(ListError::ZeroMaxCapacity);
        }

        Ok(())
    }

    /// Starting capacity after clamping to `[1, max_capacity]`.
    pub const fn effective_initial_capacity(&self) -> usize {
        clamp_capacity(self.initial_capacity, self.max_capacity)
    }
}

impl Default for ListConfig {
    fn default() -> Self {
        Self::new()
    }
}
