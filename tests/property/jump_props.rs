//! Property tests for jump search.
//!
//! Jump search must agree with binary search on found / not found, the
//! counted and plain variants must return the same index, and the
//! comparison count is bounded by the block structure.

use super::common::{assert_probe_well_formed, sorted};
use super::oracles::{oracle_isqrt, oracle_lower_bound};
use proptest::prelude::*;
use sift::{binary_search_with_counter, jump_search, jump_search_with_counter};

// ============================================================================
// STRATEGIES
// ============================================================================

fn sorted_strategy() -> impl Strategy<Value = Vec<i32>> {
    prop::collection::vec(-40i32..40, 0..400).prop_map(|v| sorted(&v))
}

/// Strictly increasing vectors, so the found index is unique.
fn distinct_sorted_strategy() -> impl Strategy<Value = Vec<i32>> {
    prop::collection::btree_set(-500i32..500, 0..300).prop_map(|s| s.into_iter().collect())
}

// ============================================================================
// PROPERTIES
// ============================================================================

proptest! {
    /// Property: jump and binary search agree on whether the target exists.
    #[test]
    fn prop_jump_agrees_with_binary(arr in sorted_strategy(), target in -45i32..45) {
        let jump = jump_search(&arr, &target);
        let binary = binary_search_with_counter(&arr, &target);
        prop_assert_eq!(jump.is_some(), binary.is_found());
        if let Some(i) = jump {
            prop_assert_eq!(arr[i], target);
        }
    }

    /// Property: jump search lands on the first occurrence.
    ///
    /// Hops stop at the first block end that is >= target, and the scan walks
    /// forward from the previous block end, so it meets the leftmost match.
    #[test]
    fn prop_jump_finds_leftmost(arr in sorted_strategy(), target in -45i32..45) {
        if let Some(i) = jump_search(&arr, &target) {
            prop_assert_eq!(i, oracle_lower_bound(&arr, &target));
        }
    }

    /// Property: counted and plain variants return the same index.
    #[test]
    fn prop_counted_matches_plain(arr in sorted_strategy(), target in -45i32..45) {
        let probe = jump_search_with_counter(&arr, &target);
        prop_assert_eq!(probe.index, jump_search(&arr, &target));
        assert_probe_well_formed(&arr, &target, &probe);
    }

    /// Property: comparisons stay within 2 * floor(sqrt(n)) + 4.
    #[test]
    fn prop_counted_sqrt_bound(arr in sorted_strategy(), target in -45i32..45) {
        let probe = jump_search_with_counter(&arr, &target);
        let bound = 2 * oracle_isqrt(arr.len()) + 4;
        prop_assert!(probe.comparisons <= bound, "{} > {}", probe.comparisons, bound);
    }

    /// Property: on distinct values the found index is the unique match.
    #[test]
    fn prop_distinct_exact_index(arr in distinct_sorted_strategy(), target in -510i32..510) {
        let expected = arr.iter().position(|&x| x == target);
        prop_assert_eq!(jump_search(&arr, &target), expected);
    }

    /// Property: arbitrary (unsorted) input never panics and never reports a
    /// wrong element.
    #[test]
    fn prop_unsorted_is_safe(arr in prop::collection::vec(-40i32..40, 0..200), target in -45i32..45) {
        let probe = jump_search_with_counter(&arr, &target);
        assert_probe_well_formed(&arr, &target, &probe);
        prop_assert!(probe.comparisons <= arr.len() + 1);
    }
}
