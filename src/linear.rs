// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Linear scans: no precondition, no cleverness, O(n).
//!
//! Two flavors. `find_all_indices` keeps going after the first hit and
//! reports every position that holds the target. `linear_search_with_counter`
//! stops at the first hit and reports how many elements it looked at, which
//! is the baseline the binary and jump counts get measured against.

use crate::contracts::{check_all_matches, check_comparison_bound, check_match};
use crate::types::Probe;

/// Every index `i` with `arr[i] == target`, in ascending order.
///
/// Works on any slice, sorted or not. An empty slice (or no match) gives an
/// empty vector.
///
/// # Example
///
/// ```
/// use sift::find_all_indices;
///
/// let arr = [3, 1, 4, 1, 5, 9, 2, 6, 5, 3, 5];
/// assert_eq!(find_all_indices(&arr, &5), vec![4, 8, 10]);
/// assert!(find_all_indices(&arr, &7).is_empty());
/// ```
pub fn find_all_indices<T: PartialOrd>(arr: &[T], target: &T) -> Vec<usize> {
    let indices: Vec<usize> = arr
        .iter()
        .enumerate()
        .filter(|(_, x)| *x == target)
        .map(|(i, _)| i)
        .collect();

    check_all_matches(arr, &indices, target);
    indices
}

/// Left-to-right scan that stops at the first match and counts comparisons.
///
/// Every visited element costs one comparison, the matching one included.
/// A miss therefore always reports `arr.len()` comparisons.
///
/// # Example
///
/// ```
/// use sift::linear_search_with_counter;
///
/// let arr = [3, 1, 4, 1, 5, 9, 2, 6, 5, 3, 5];
/// let probe = linear_search_with_counter(&arr, &6);
/// assert_eq!((probe.index, probe.comparisons), (Some(7), 8));
/// ```
pub fn linear_search_with_counter<T: PartialOrd>(arr: &[T], target: &T) -> Probe {
    let mut comparisons = 0;

    for (i, x) in arr.iter().enumerate() {
        comparisons += 1;
        if x == target {
            check_match(arr, i, target);
            return Probe::found(i, comparisons);
        }
    }

    check_comparison_bound("linear search", comparisons, arr.len());
    Probe::missing(comparisons)
}
