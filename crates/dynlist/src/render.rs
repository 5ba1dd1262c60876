// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Text rendering for diagnostics.

use core::fmt;

use crate::dyn_list::DynList;

/// Renders the list as `[a, b, c]`.
impl<T: fmt::Display> fmt::Display for DynList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;

        for (i, value) in self.iter().enumerate() {
            if i != 0 {
                f.write_str(", ")?;
            }
            write!(f, "{value}")?;
        }

        f.write_str("]")
    }
}

impl<T: fmt::Debug> fmt::Debug for DynList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DynList")
            .field("data", &self.as_slice())
            .field("len", &self.len())
            .field("capacity", &self.capacity())
            .field("max_capacity", &self.max_capacity())
            .finish()
    }
}

/// One-line summary of a list's size, capacity and elements.
///
/// Created by [`DynList::details`].
///
/// # Example
///
/// ```rust
/// use dynlist::DynList;
///
/// let list: DynList<u8> = [4, 2].into_iter().collect();
/// assert_eq!(list.details().to_string(), "Size: 2   Capacity: 5   4 2 ");
/// ```
pub struct Details<'a, T> {
    list: &'a DynList<T>,
}

impl<T> DynList<T> {
    /// Returns a [`Display`](fmt::Display) adapter listing size, capacity
    /// and elements.
    pub fn details(&self) -> Details<'_, T> {
        Details { list: self }
    }
}

impl<T: fmt::Display> fmt::Display for Details<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Size: {}   Capacity: {}   ",
            self.list.len(),
            self.list.capacity()
        )?;

        for value in self.list {
            write!(f, "{value} ")?;
        }

        Ok(())
    }
}
