// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Capacity growth and shrink policy.
//!
//! A full list doubles its capacity (clamped to its maximum). After a
//! removal, a list whose capacity exceeds [`SHRINK_FLOOR`] gives back half of
//! its slots once `len < capacity / 2 - SHRINK_SLACK`. The slack keeps a
//! list hovering around half capacity from growing and shrinking on
//! alternate operations.

/// Capacity of a list created with `DynList::new()`.
pub const DEFAULT_CAPACITY: usize = 5;

/// Capacity ceiling unless configured otherwise.
pub const DEFAULT_MAX_CAPACITY: usize = 500;

/// Capacity multiplier applied when a push finds the list full.
pub const GROWTH_FACTOR: usize = 2;

/// Lists at or below this capacity never shrink.
pub const SHRINK_FLOOR: usize = 5;

/// Hysteresis between the grow and shrink thresholds.
pub const SHRINK_SLACK: usize = 2;

/// Clamps a requested capacity to `[1, max_capacity]`.
#[inline]
pub const fn clamp_capacity(requested: usize, max_capacity: usize) -> usize {
    if requested == 0 {
        1
    } else if requested > max_capacity {
        max_capacity
    } else {
        requested
    }
}

/// Capacity after reserving `amount` more slots, clamped to `max_capacity`.
#[inline]
pub const fn reserve_target(capacity: usize, amount: usize, max_capacity: usize) -> usize {
    let target = capacity.saturating_add(amount);

    if target > max_capacity {
        max_capacity
    } else {
        target
    }
}

/// Slots to reserve when a push finds the list full.
#[inline]
pub const fn grow_amount(capacity: usize) -> usize {
    capacity.saturating_mul(GROWTH_FACTOR - 1)
}

/// Whether a list with `len` elements should give back capacity.
#[inline]
pub const fn should_shrink(len: usize, capacity: usize) -> bool {
    // capacity > SHRINK_FLOOR keeps `capacity / 2 - SHRINK_SLACK` from underflowing.
    capacity > SHRINK_FLOOR && len < capacity / 2 - SHRINK_SLACK
}

/// Slots to discard when shrinking.
#[inline]
pub const fn shrink_amount(capacity: usize) -> usize {
    capacity / GROWTH_FACTOR
}
