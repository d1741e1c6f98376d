//! Property tests for binary search on sorted input.
//!
//! Verifies that:
//! 1. The insertion point keeps the slice sorted
//! 2. Absent targets get the unique insertion point
//! 3. The counted search finds exactly the present targets
//! 4. Comparison counts stay within floor(log2(n)) + 1

use super::common::{assert_probe_well_formed, sorted};
use super::oracles::{oracle_lower_bound, oracle_upper_bound};
use proptest::prelude::*;
use sift::{binary_search_insertion_point, binary_search_with_counter};

// ============================================================================
// STRATEGIES
// ============================================================================

/// Sorted vectors with plenty of duplicates.
fn sorted_strategy() -> impl Strategy<Value = Vec<i32>> {
    prop::collection::vec(-25i32..25, 0..300).prop_map(|v| sorted(&v))
}

/// Mix of small and medium sorted vectors (80% small).
fn mixed_sorted_strategy() -> impl Strategy<Value = Vec<i32>> {
    prop_oneof![
        4 => prop::collection::vec(-25i32..25, 0..16).prop_map(|v| sorted(&v)),
        1 => sorted_strategy(),
    ]
}

// ============================================================================
// INSERTION POINT PROPERTIES
// ============================================================================

proptest! {
    /// Property: inserting at the returned index keeps the slice ascending.
    #[test]
    fn prop_insertion_keeps_order(arr in mixed_sorted_strategy(), target in -30i32..30) {
        let k = binary_search_insertion_point(&arr, &target);
        prop_assert!(k <= arr.len());

        let mut inserted = arr.clone();
        inserted.insert(k, target);
        prop_assert!(inserted.windows(2).all(|w| w[0] <= w[1]));
    }

    /// Property: an absent target gets the count of smaller elements; a
    /// present one gets some index holding it (not necessarily the first).
    #[test]
    fn prop_insertion_point_matches_bounds(arr in mixed_sorted_strategy(), target in -30i32..30) {
        let k = binary_search_insertion_point(&arr, &target);
        let lo = oracle_lower_bound(&arr, &target);
        let hi = oracle_upper_bound(&arr, &target);

        if lo == hi {
            prop_assert_eq!(k, lo);
        } else {
            prop_assert!(lo <= k && k < hi, "k={} outside [{}, {})", k, lo, hi);
            prop_assert_eq!(arr[k], target);
        }
    }
}

// ============================================================================
// COUNTED SEARCH PROPERTIES
// ============================================================================

proptest! {
    /// Property: found iff present, and found indices hold the target.
    #[test]
    fn prop_counter_finds_present(arr in sorted_strategy(), target in -30i32..30) {
        let probe = binary_search_with_counter(&arr, &target);
        prop_assert_eq!(probe.is_found(), arr.contains(&target));
        assert_probe_well_formed(&arr, &target, &probe);
    }

    /// Property: at most floor(log2(n)) + 1 midpoints are examined.
    #[test]
    fn prop_counter_log_bound(arr in sorted_strategy(), target in -30i32..30) {
        let probe = binary_search_with_counter(&arr, &target);
        let bound = if arr.is_empty() { 0 } else { arr.len().ilog2() as usize + 1 };
        prop_assert!(probe.comparisons <= bound, "{} > {}", probe.comparisons, bound);
    }

    /// Property: on a hit, the counted search and the insertion point land
    /// on the same index (they walk the same probe sequence).
    #[test]
    fn prop_counter_and_insertion_agree(arr in sorted_strategy(), target in -30i32..30) {
        if let Some(i) = binary_search_with_counter(&arr, &target).index {
            prop_assert_eq!(binary_search_insertion_point(&arr, &target), i);
        }
    }
}
