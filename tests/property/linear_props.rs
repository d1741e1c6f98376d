//! Property tests for the linear scans.
//!
//! No ordering precondition here, so inputs are arbitrary.

use super::oracles::oracle_all_indices;
use proptest::prelude::*;
use sift::{find_all_indices, linear_search_with_counter};

// ============================================================================
// STRATEGIES
// ============================================================================

/// Small value range so targets actually hit.
fn values_strategy() -> impl Strategy<Value = Vec<i16>> {
    prop::collection::vec(-10i16..10, 0..100)
}

// ============================================================================
// PROPERTIES
// ============================================================================

proptest! {
    /// Property: find_all_indices is exactly the brute-force answer.
    #[test]
    fn prop_find_all_matches_oracle(arr in values_strategy(), target in -12i16..12) {
        prop_assert_eq!(find_all_indices(&arr, &target), oracle_all_indices(&arr, &target));
    }

    /// Property: every reported index holds the target, ascending, and the
    /// count equals the number of matching elements.
    #[test]
    fn prop_find_all_exact(arr in values_strategy(), target in -12i16..12) {
        let indices = find_all_indices(&arr, &target);
        prop_assert!(indices.windows(2).all(|w| w[0] < w[1]));
        prop_assert!(indices.iter().all(|&i| arr[i] == target));
        prop_assert_eq!(indices.len(), arr.iter().filter(|&&x| x == target).count());
    }

    /// Property: the counter reports first-match position + 1, or n on a miss.
    #[test]
    fn prop_linear_counter(arr in values_strategy(), target in -12i16..12) {
        let probe = linear_search_with_counter(&arr, &target);
        match arr.iter().position(|&x| x == target) {
            Some(first) => {
                prop_assert_eq!(probe.index, Some(first));
                prop_assert_eq!(probe.comparisons, first + 1);
            }
            None => {
                prop_assert_eq!(probe.index, None);
                prop_assert_eq!(probe.comparisons, arr.len());
            }
        }
    }

    /// Property: the first all-indices hit is the counted search's hit.
    #[test]
    fn prop_linear_agrees_with_find_all(arr in values_strategy(), target in -12i16..12) {
        let first = find_all_indices(&arr, &target).first().copied();
        prop_assert_eq!(linear_search_with_counter(&arr, &target).index, first);
    }
}
