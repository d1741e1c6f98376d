//! The timing harness.

use super::common::{ascending, SAMPLE};
use sift::{compare_algorithms, Algorithm, Probe};

#[test]
fn sample_comparison_matches_individual_searches() {
    let cmp = compare_algorithms(&SAMPLE, &6);

    let probes: Vec<(Algorithm, Probe)> = cmp.runs.iter().map(|r| (r.algorithm, r.probe)).collect();
    assert_eq!(
        probes,
        vec![
            (Algorithm::Linear, Probe::found(7, 8)),
            (Algorithm::Binary, Probe::found(9, 3)),
            (Algorithm::Jump, Probe::found(9, 4)),
        ]
    );
}

#[test]
fn large_range_comparison() {
    let large = ascending(100_000);
    let cmp = compare_algorithms(&large, &99_999);

    assert!(cmp.agree());
    let linear = cmp.run(Algorithm::Linear).unwrap().probe;
    let binary = cmp.run(Algorithm::Binary).unwrap().probe;
    let jump = cmp.run(Algorithm::Jump).unwrap().probe;
    assert!(binary.comparisons < jump.comparisons);
    assert!(jump.comparisons < linear.comparisons);
}

#[test]
fn unsorted_input_indices_refer_to_sorted_copy() {
    let cmp = compare_algorithms(&[30, 10, 20], &30);
    assert_eq!(cmp.run(Algorithm::Linear).unwrap().probe.index, Some(0));
    assert_eq!(cmp.run(Algorithm::Binary).unwrap().probe.index, Some(2));
    assert_eq!(cmp.run(Algorithm::Jump).unwrap().probe.index, Some(2));
}
