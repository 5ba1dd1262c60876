// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

/// Outcome of a [`push`](crate::DynList::push) or
/// [`insert`](crate::DynList::insert).
///
/// `Full` and `InvalidIndex` are not errors: the list is left untouched and
/// the value is dropped.
#[must_use]
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum MutationOutcome {
    /// The value was stored without reallocating.
    Stored,
    /// The buffer grew, then the value was stored.
    GrewTo {
        /// Capacity after growth.
        capacity: usize,
    },
    /// The list is full at its maximum capacity; the value was dropped.
    Full,
    /// Insert index past the end of the list; the value was dropped.
    InvalidIndex {
        /// The requested index.
        index: usize,
        /// The list length at the time of the insert.
        len: usize,
    },
}

impl MutationOutcome {
    /// Returns `true` if the value ended up in the list.
    #[inline]
    pub const fn is_stored(self) -> bool {
        matches!(self, Self::Stored | Self::GrewTo { .. })
    }
}
