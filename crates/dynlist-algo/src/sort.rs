// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! In-place, unstable sorts.

/// Sorts the slice ascending with a recursive quicksort.
///
/// The last element of each range is the pivot (Lomuto partition). There is
/// no pivot selection heuristic, so already sorted or reverse sorted input hits
/// the O(n²) worst case; the average is O(n log n).
///
/// # Example
///
/// ```rust
/// use dynlist_algo::quick_sort;
///
/// let mut data = [1, 3, 2];
/// quick_sort(&mut data);
/// assert_eq!(data, [1, 2, 3]);
/// ```
pub fn quick_sort<T: PartialOrd>(slice: &mut [T]) {
    let mut range = slice;

    // Recurse into the smaller partition and loop on the larger one so the
    // stack depth stays O(log n) even when partitions are lopsided.
    while range.len() > 1 {
        let pivot = partition(range);
        let (left, right) = core::mem::take(&mut range).split_at_mut(pivot);
        let right = &mut right[1..];

        if left.len() < right.len() {
            quick_sort(left);
            range = right;
        } else {
            quick_sort(right);
            range = left;
        }
    }
}

/// Places the last element at its sorted position and returns that index.
///
/// Every element `<= pivot` ends up left of the returned index, every
/// element `> pivot` right of it.
fn partition<T: PartialOrd>(slice: &mut [T]) -> usize {
    let high = slice.len() - 1;
    let mut store = 0;

    // The pivot stays at `high` until the final swap, so it is compared in place.
    for j in 0..high {
        if slice[j] <= slice[high] {
            slice.swap(store, j);
            store += 1;
        }
    }

    slice.swap(store, high);
    store
}

/// Sorts the slice ascending with a bidirectional bubble sort.
///
/// Each pass sweeps forward and then backward. After `p` passes the largest
/// `p` elements are already at the tail, so the forward sweep stops `p + 1`
/// slots short of the end; the backward sweep always covers the full range.
/// Terminates after the first pass that performs no swap.
pub fn cocktail_shaker_sort<T: PartialOrd>(slice: &mut [T]) {
    let len = slice.len();
    if len < 2 {
        return;
    }

    let mut passes = 0;

    loop {
        let mut swapped = false;

        for i in 0..len.saturating_sub(passes + 1) {
            if slice[i] > slice[i + 1] {
                slice.swap(i, i + 1);
                swapped = true;
            }
        }

        for i in (1..len).rev() {
            if slice[i - 1] > slice[i] {
                slice.swap(i - 1, i);
                swapped = true;
            }
        }

        if !swapped {
            break;
        }

        passes += 1;
    }
}

/// Sorts the slice ascending with an in-place insertion sort.
///
/// Each key walks left past every larger predecessor. O(n) on sorted input,
/// O(n²) in general.
pub fn insertion_sort<T: PartialOrd>(slice: &mut [T]) {
    for i in 1..slice.len() {
        let mut j = i;

        while j > 0 && slice[j - 1] > slice[j] {
            slice.swap(j - 1, j);
            j -= 1;
        }
    }
}

/// Sorts the slice ascending with heap sort.
///
/// The slice itself is the heap: it is max-heapified bottom-up, then the
/// root is repeatedly swapped to the heap boundary and the reduced heap is
/// sifted down again. O(n log n) in every case.
pub fn heap_sort<T: PartialOrd>(slice: &mut [T]) {
    let len = slice.len();

    for root in (0..len / 2).rev() {
        sift_down(slice, len, root);
    }

    for end in (1..len).rev() {
        slice.swap(0, end);
        sift_down(slice, end, 0);
    }
}

/// Restores the max-heap property for the subtree at `root`, considering
/// only the first `heap_len` elements.
#[inline]
fn sift_down<T: PartialOrd>(slice: &mut [T], heap_len: usize, mut root: usize) {
    loop {
        let left = 2 * root + 1;
        let right = left + 1;
        let mut largest = root;

        if left < heap_len && slice[left] > slice[largest] {
            largest = left;
        }

        if right < heap_len && slice[right] > slice[largest] {
            largest = right;
        }

        if largest == root {
            return;
        }

        slice.swap(root, largest);
        root = largest;
    }
}

/// Returns `true` if the slice is in non-decreasing order.
pub fn is_sorted<T: PartialOrd>(slice: &[T]) -> bool {
    slice.windows(2).all(|pair| pair[0] <= pair[1])
}
