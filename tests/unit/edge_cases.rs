//! Edge cases: empty and tiny inputs, duplicates, non-integer element types,
//! and inputs that break the sortedness precondition.

use super::common::{ascending_with_duplicates, assert_probe_well_formed};
use sift::{
    binary_search_insertion_point, binary_search_with_counter, find_all_indices, jump_search,
    jump_search_with_counter, linear_search_with_counter, Probe,
};

#[test]
fn empty_input_never_panics() {
    let empty: [i32; 0] = [];
    assert!(find_all_indices(&empty, &1).is_empty());
    assert_eq!(binary_search_insertion_point(&empty, &1), 0);
    assert_eq!(linear_search_with_counter(&empty, &1), Probe::missing(0));
    assert_eq!(binary_search_with_counter(&empty, &1), Probe::missing(0));
    assert_eq!(jump_search(&empty, &1), None);
    assert_eq!(jump_search_with_counter(&empty, &1), Probe::missing(0));
}

#[test]
fn single_element() {
    let one = [4];
    assert_eq!(binary_search_insertion_point(&one, &3), 0);
    assert_eq!(binary_search_insertion_point(&one, &4), 0);
    assert_eq!(binary_search_insertion_point(&one, &5), 1);
    assert_eq!(binary_search_with_counter(&one, &4), Probe::found(0, 1));
    assert_eq!(jump_search(&one, &4), Some(0));
    assert_eq!(jump_search(&one, &5), None);
}

#[test]
fn all_equal_elements() {
    let same = [7; 9];
    assert_eq!(find_all_indices(&same, &7), (0..9).collect::<Vec<_>>());
    // Binary search hits the middle first
    assert_eq!(binary_search_with_counter(&same, &7), Probe::found(4, 1));
    // Jump search never hops and finds the first element
    assert_eq!(jump_search_with_counter(&same, &7), Probe::found(0, 1));
}

#[test]
fn duplicates_found_by_every_sorted_search() {
    let arr = ascending_with_duplicates(30, 4);
    for target in 0..30 {
        let binary = binary_search_with_counter(&arr, &target);
        let jump = jump_search_with_counter(&arr, &target);
        assert!(binary.is_found() && jump.is_found(), "target {}", target);
        assert_probe_well_formed(&arr, &target, &binary);
        assert_probe_well_formed(&arr, &target, &jump);
    }
}

#[test]
fn floats_and_strings() {
    let floats = [-1.5, 0.0, 0.25, 3.75, 10.0];
    assert_eq!(jump_search(&floats, &3.75), Some(3));
    assert_eq!(binary_search_insertion_point(&floats, &1.0), 3);

    let words = ["apple", "banana", "cherry", "date"];
    assert_eq!(binary_search_with_counter(&words, &"cherry").index, Some(2));
    assert_eq!(jump_search(&words, &"blueberry"), None);
}

#[test]
fn unsorted_input_stays_in_bounds() {
    // Results are meaningless on unsorted input, but must not panic
    let scrambled = [9, 2, 7, 1, 8, 3, 6, 4, 5, 0];
    for target in -1..11 {
        let k = binary_search_insertion_point(&scrambled, &target);
        assert!(k <= scrambled.len());
        assert!(jump_search(&scrambled, &target).map_or(true, |i| scrambled[i] == target));
        let probe = jump_search_with_counter(&scrambled, &target);
        assert!(probe.comparisons <= scrambled.len() + 1);
    }
}

#[test]
fn repeated_calls_are_identical() {
    let arr = [1, 3, 3, 8, 13, 21];
    for target in [0, 3, 8, 22] {
        assert_eq!(
            jump_search_with_counter(&arr, &target),
            jump_search_with_counter(&arr, &target)
        );
        assert_eq!(
            binary_search_with_counter(&arr, &target),
            binary_search_with_counter(&arr, &target)
        );
    }
}
