// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Binary search over ascending slices.
//!
//! Both functions walk the same probe sequence: the classic inclusive
//! `[left, right]` window with `mid = floor((left + right) / 2)`, returning
//! as soon as `arr[mid]` equals the target. Internally the upper bound is kept
//! exclusive (`hi = right + 1`) so nothing underflows on an empty slice, but
//! every midpoint is identical to the inclusive formulation. That matters:
//! the counted variant's numbers are part of its contract.
//!
//! # Duplicates
//!
//! On a hit the first occurrence *the probe lands on* wins, which is not
//! necessarily the leftmost one. `[5, 5, 5]` searched for `5` answers `1`.
//!
//! # Precondition
//!
//! The slice must be sorted ascending. This is never checked; an unsorted
//! slice gets an in-bounds but otherwise meaningless answer.

use crate::contracts::{
    binary_search_budget, check_comparison_bound, check_insertion_point_bounds, check_match,
};
use crate::types::Probe;

/// Midpoint of the inclusive window `[left, hi - 1]`, rounded down.
///
/// Requires `left < hi`.
#[inline]
fn midpoint(left: usize, hi: usize) -> usize {
    left + (hi - 1 - left) / 2
}

/// Index at which `target` can be inserted while keeping `arr` ascending.
///
/// If the target is already present, returns the index of the occurrence
/// the search hits. Otherwise returns the number of elements `< target`.
/// The result is always in `0..=arr.len()`.
///
/// # Example
///
/// ```
/// use sift::binary_search_insertion_point;
///
/// let sorted = [1, 1, 2, 3, 3, 4, 5, 5, 5, 6, 9];
/// assert_eq!(binary_search_insertion_point(&sorted, &7), 10);
/// assert_eq!(binary_search_insertion_point(&sorted, &0), 0);
/// assert_eq!(binary_search_insertion_point(&sorted, &10), 11);
/// ```
pub fn binary_search_insertion_point<T: PartialOrd>(arr: &[T], target: &T) -> usize {
    let mut left = 0;
    let mut hi = arr.len();

    while left < hi {
        let mid = midpoint(left, hi);
        if arr[mid] == *target {
            return mid;
        } else if arr[mid] < *target {
            left = mid + 1;
        } else {
            hi = mid;
        }
    }

    check_insertion_point_bounds(left, arr.len());
    left
}

/// Binary search that reports how many midpoints it examined.
///
/// One loop iteration is one comparison: the equal / less / greater test at a
/// single midpoint counts once. Returns as soon as the target is hit, or
/// `Probe::missing` once the window is empty.
///
/// # Example
///
/// ```
/// use sift::binary_search_with_counter;
///
/// let sorted = [1, 1, 2, 3, 3, 4, 5, 5, 5, 6, 9];
/// let probe = binary_search_with_counter(&sorted, &6);
/// assert_eq!(probe.index, Some(9));
/// assert!(probe.comparisons <= 4);
/// ```
pub fn binary_search_with_counter<T: PartialOrd>(arr: &[T], target: &T) -> Probe {
    let mut left = 0;
    let mut hi = arr.len();
    let mut comparisons = 0;

    while left < hi {
        let mid = midpoint(left, hi);
        comparisons += 1;
        if arr[mid] == *target {
            check_match(arr, mid, target);
            return Probe::found(mid, comparisons);
        } else if arr[mid] < *target {
            left = mid + 1;
        } else {
            hi = mid;
        }
    }

    check_comparison_bound(
        "binary search",
        comparisons,
        binary_search_budget(arr.len()),
    );
    Probe::missing(comparisons)
}
