// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Error types for dynlist.

use thiserror::Error;

/// Errors that can occur when working with a [`DynList`](crate::DynList).
///
/// Only logic violations are errors. A push at the capacity ceiling or an
/// insert past the end is reported through
/// [`MutationOutcome`](crate::MutationOutcome) instead.
#[derive(Debug, Error, Clone, Copy, Eq, PartialEq)]
pub enum ListError {
    /// Indexed access outside `[0, len)`.
    #[error("index {index} out of range for list of length {len}")]
    IndexOutOfBounds {
        /// The requested index.
        index: usize,
        /// The list length at the time of access.
        len: usize,
    },

    /// A [`ListConfig`](crate::ListConfig) with a maximum capacity of zero.
    #[error("max capacity must be at least 1")]
    ZeroMaxCapacity,
}
