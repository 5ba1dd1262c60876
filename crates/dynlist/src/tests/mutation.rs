// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use crate::{DynList, ListConfig, MutationOutcome};

fn list_of(values: &[i32]) -> DynList<i32> {
    let mut list = DynList::new();
    for &value in values {
        assert!(list.push(value).is_stored());
    }
    list
}

fn bounded(max_capacity: usize, values: &[i32]) -> DynList<i32> {
    let config = ListConfig::new()
        .with_initial_capacity(1)
        .with_max_capacity(max_capacity);
    let mut list = DynList::with_config(config).expect("Failed to with_config(..)");
    for &value in values {
        assert!(list.push(value).is_stored());
    }
    list
}

// =============================================================================
// push()
// =============================================================================

#[test]
fn test_push_keeps_order_up_to_max_capacity() {
    let mut list = DynList::new();

    for i in 0..500u32 {
        assert!(list.push(i).is_stored());
    }

    assert_eq!(list.len(), 500);
    assert_eq!(list.capacity(), 500);
    for i in 0..500u32 {
        assert_eq!(list[i as usize], i);
    }
}

#[test]
fn test_push_doubles_capacity_until_max() {
    let mut list = DynList::new();
    let mut growths = Vec::new();

    for i in 0..500u32 {
        if let MutationOutcome::GrewTo { capacity } = list.push(i) {
            growths.push(capacity);
        }
    }

    assert_eq!(growths, [10, 20, 40, 80, 160, 320, 500]);
}

#[test]
fn test_push_reports_growth() {
    let mut list = list_of(&[1, 2, 3, 4, 5]);
    assert_eq!(list.capacity(), 5);

    assert_eq!(list.push(6), MutationOutcome::GrewTo { capacity: 10 });
    assert_eq!(list.push(7), MutationOutcome::Stored);
    assert_eq!(list.as_slice(), &[1, 2, 3, 4, 5, 6, 7]);
}

#[test]
fn test_push_at_ceiling_is_dropped() {
    let mut list = bounded(3, &[1, 2, 3]);
    assert!(list.is_full());

    assert_eq!(list.push(4), MutationOutcome::Full);

    assert_eq!(list.len(), 3);
    assert_eq!(list.capacity(), 3);
    assert_eq!(list.as_slice(), &[1, 2, 3]);
}

#[test]
fn test_push_at_default_ceiling_is_dropped() {
    let mut list: DynList<u32> = (0..500).collect();

    assert!(list.is_full());
    assert_eq!(list.push(500), MutationOutcome::Full);
    assert_eq!(list.len(), 500);
}

#[test]
fn test_push_with_max_capacity_one() {
    let mut list = bounded(1, &[]);

    assert_eq!(list.push(1), MutationOutcome::Stored);
    assert_eq!(list.push(2), MutationOutcome::Full);
    assert_eq!(list.as_slice(), &[1]);
}

// =============================================================================
// insert()
// =============================================================================

#[test]
fn test_insert_at_front() {
    let mut list = list_of(&[2, 4, 6]);

    assert!(list.insert(0, 9).is_stored());

    assert_eq!(list.len(), 4);
    assert_eq!(list.as_slice(), &[9, 2, 4, 6]);
}

#[test]
fn test_insert_in_middle() {
    let mut list = list_of(&[2, 4, 6]);

    assert!(list.insert(2, 5).is_stored());

    assert_eq!(list.as_slice(), &[2, 4, 5, 6]);
}

#[test]
fn test_insert_at_len_appends() {
    let mut list = list_of(&[2, 4, 6]);

    assert!(list.insert(3, 8).is_stored());

    assert_eq!(list.as_slice(), &[2, 4, 6, 8]);
}

#[test]
fn test_insert_into_empty() {
    let mut list = DynList::new();

    assert_eq!(list.insert(0, 'a'), MutationOutcome::Stored);
    assert_eq!(list.as_slice(), &['a']);
}

#[test]
fn test_insert_past_end_is_ignored() {
    let mut list = list_of(&[2, 4, 6]);

    assert_eq!(
        list.insert(5, 1),
        MutationOutcome::InvalidIndex { index: 5, len: 3 }
    );
    assert_eq!(list.as_slice(), &[2, 4, 6]);
}

#[test]
fn test_insert_grows() {
    let mut list = list_of(&[1, 2, 3, 4, 5]);

    assert_eq!(list.insert(1, 9), MutationOutcome::GrewTo { capacity: 10 });
    assert_eq!(list.as_slice(), &[1, 9, 2, 3, 4, 5]);
}

#[test]
fn test_insert_at_ceiling_leaves_list_untouched() {
    let mut list = bounded(3, &[1, 2, 3]);

    assert_eq!(list.insert(0, 0), MutationOutcome::Full);
    assert_eq!(list.as_slice(), &[1, 2, 3]);
}

// =============================================================================
// insert_slice(), insert_list()
// =============================================================================

#[test]
fn test_insert_slice_keeps_order() {
    let mut list = list_of(&[1, 2, 3]);

    assert_eq!(list.insert_slice(1, &[7, 8]), 2);

    assert_eq!(list.as_slice(), &[1, 7, 8, 2, 3]);
}

#[test]
fn test_insert_slice_empty_is_noop() {
    let mut list = list_of(&[1, 2, 3]);

    assert_eq!(list.insert_slice(1, &[]), 0);
    assert_eq!(list.as_slice(), &[1, 2, 3]);
}

#[test]
fn test_insert_slice_stops_storing_at_ceiling() {
    let mut list = bounded(4, &[1, 2, 3]);

    assert_eq!(list.insert_slice(0, &[7, 8, 9]), 1);
    assert_eq!(list.as_slice(), &[7, 1, 2, 3]);
}

#[test]
fn test_insert_slice_at_max_index_is_ignored() {
    let mut list = list_of(&[1, 2, 3]);

    assert_eq!(list.insert_slice(usize::MAX, &[7, 8]), 0);
    assert_eq!(list.insert_slice(4, &[7, 8]), 0);

    assert_eq!(list.as_slice(), &[1, 2, 3]);
    assert_eq!(list.capacity(), 5);
}

#[test]
fn test_insert_list() {
    let mut list = list_of(&[1, 2, 3]);
    let other = list_of(&[10, 20, 30]);

    assert_eq!(list.insert_list(3, &other), 3);

    assert_eq!(list.as_slice(), &[1, 2, 3, 10, 20, 30]);
    assert_eq!(other.as_slice(), &[10, 20, 30]);
}

#[test]
fn test_insert_list_past_end_is_ignored() {
    let mut list = list_of(&[1, 2, 3]);
    let other = list_of(&[10, 20]);

    assert_eq!(list.insert_list(4, &other), 0);
    assert_eq!(list.as_slice(), &[1, 2, 3]);
}

// =============================================================================
// pop()
// =============================================================================

#[test]
fn test_pop() {
    let mut list = list_of(&[1, 2, 3]);

    assert_eq!(list.pop(), Some(3));
    assert_eq!(list.pop(), Some(2));
    assert_eq!(list.as_slice(), &[1]);
}

#[test]
fn test_pop_empty() {
    let mut list: DynList<i32> = DynList::new();

    assert_eq!(list.pop(), None);
    assert_eq!(list.capacity(), 5);
}

#[test]
fn test_pop_shrinks_capacity() {
    let mut list = DynList::with_capacity(10);
    for i in 0..6 {
        assert!(list.push(i).is_stored());
    }

    for _ in 0..3 {
        list.pop();
        assert_eq!(list.capacity(), 10);
    }

    // 2 < 10 / 2 - 2
    list.pop();
    assert_eq!(list.len(), 2);
    assert_eq!(list.capacity(), 5);
    assert_eq!(list.as_slice(), &[0, 1]);
}

#[test]
fn test_pop_never_shrinks_at_floor() {
    let mut list = list_of(&[1, 2, 3, 4, 5]);

    while list.pop().is_some() {}

    assert_eq!(list.capacity(), 5);
}

#[test]
fn test_pop_cascades_down_to_floor() {
    let mut list: DynList<u32> = (0..500).collect();

    while list.pop().is_some() {}

    // 500 -> 250 -> 125 -> 63 -> 32 -> 16 -> 8 -> 4
    assert_eq!(list.capacity(), 4);
}

// =============================================================================
// remove()
// =============================================================================

#[test]
fn test_remove_moves_last_into_hole() {
    let mut list = list_of(&[1, 2, 3, 4, 5]);

    assert_eq!(list.remove(1), Some(2));

    assert_eq!(list.as_slice(), &[1, 5, 3, 4]);
}

#[test]
fn test_remove_last_and_single() {
    let mut list = list_of(&[1, 2, 3]);
    assert_eq!(list.remove(2), Some(3));
    assert_eq!(list.as_slice(), &[1, 2]);

    let mut single = list_of(&[7]);
    assert_eq!(single.remove(0), Some(7));
    assert!(single.is_empty());
}

#[test]
fn test_remove_out_of_range() {
    let mut list = list_of(&[1, 2, 3]);

    assert_eq!(list.remove(3), None);
    assert_eq!(list.as_slice(), &[1, 2, 3]);

    let mut empty: DynList<i32> = DynList::new();
    assert_eq!(empty.remove(0), None);
}

#[test]
fn test_remove_shrinks_capacity() {
    let mut list = DynList::with_capacity(20);
    for i in 0..10 {
        assert!(list.push(i).is_stored());
    }

    for _ in 0..2 {
        list.remove(0);
        assert_eq!(list.capacity(), 20);
    }

    // 7 < 20 / 2 - 2
    list.remove(0);
    assert_eq!(list.capacity(), 10);

    for _ in 0..4 {
        list.remove(0);
    }

    // len 3 is not < 10 / 2 - 2.
    assert_eq!(list.capacity(), 10);
    assert_eq!(list.as_slice(), &[3, 1, 2]);
}

// =============================================================================
// remove_keep_order()
// =============================================================================

#[test]
fn test_remove_keep_order() {
    let mut list = list_of(&[1, 2, 3, 4, 5]);

    assert_eq!(list.remove_keep_order(1), Some(2));

    assert_eq!(list.as_slice(), &[1, 3, 4, 5]);
}

#[test]
fn test_remove_keep_order_out_of_range() {
    let mut list = list_of(&[1, 2, 3]);

    assert_eq!(list.remove_keep_order(3), None);
    assert_eq!(list.as_slice(), &[1, 2, 3]);
}

#[test]
fn test_remove_keep_order_shrinks_capacity() {
    let mut list = DynList::with_capacity(20);
    for i in 0..10 {
        assert!(list.push(i).is_stored());
    }

    for _ in 0..7 {
        list.remove_keep_order(0);
    }

    // Shrank once at len 7 (7 < 20 / 2 - 2); len 3 is not < 10 / 2 - 2.
    assert_eq!(list.capacity(), 10);
    assert_eq!(list.as_slice(), &[7, 8, 9]);
}

// =============================================================================
// remove_value(), remove_value_keep_order()
// =============================================================================

#[test]
fn test_remove_value_removes_every_occurrence() {
    let mut list = list_of(&[1, 2, 1, 3, 1]);

    assert_eq!(list.remove_value(&1), 3);

    assert_eq!(list.as_slice(), &[3, 2]);
}

#[test]
fn test_remove_value_consecutive_matches() {
    let mut list = list_of(&[4, 4, 4, 4]);

    assert_eq!(list.remove_value(&4), 4);
    assert!(list.is_empty());
}

#[test]
fn test_remove_value_absent() {
    let mut list = list_of(&[1, 2, 3]);

    assert_eq!(list.remove_value(&9), 0);
    assert_eq!(list.as_slice(), &[1, 2, 3]);
}

#[test]
fn test_remove_value_keep_order() {
    let mut list = list_of(&[1, 2, 1, 3, 1]);

    assert_eq!(list.remove_value_keep_order(&1), 3);

    assert_eq!(list.as_slice(), &[2, 3]);
}

#[test]
fn test_remove_value_keep_order_consecutive_matches() {
    let mut list = list_of(&[5, 5, 6, 5, 5, 7]);

    assert_eq!(list.remove_value_keep_order(&5), 4);
    assert_eq!(list.as_slice(), &[6, 7]);
}

#[test]
fn test_remove_value_shrinks_capacity() {
    let mut list = DynList::with_capacity(20);
    for value in [7, 7, 7, 1, 7, 7, 7, 2, 7, 7] {
        assert!(list.push(value).is_stored());
    }

    assert_eq!(list.remove_value(&7), 8);

    // 20 -> 10 at len 7, then 10 -> 5 at len 2.
    assert_eq!(list.capacity(), 5);

    let mut rest = list.as_slice().to_vec();
    rest.sort();
    assert_eq!(rest, [1, 2]);
}

#[test]
fn test_remove_value_keep_order_shrinks_capacity() {
    let mut list = DynList::with_capacity(20);
    for value in [7, 7, 7, 1, 7, 7, 7, 2, 7, 7] {
        assert!(list.push(value).is_stored());
    }

    assert_eq!(list.remove_value_keep_order(&7), 8);

    assert_eq!(list.capacity(), 5);
    assert_eq!(list.as_slice(), &[1, 2]);
}
