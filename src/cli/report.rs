// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Terminal reports for each CLI operation.
//!
//! Each printer draws one boxed section. The JSON counterparts live next to
//! them so both renderings of an operation stay in one place.

use super::display::{
    count_colored, field, index_colored, list, pad_right, row, section_bot, section_top,
    themed, timing_colored, BOLD, DIM, GRAY, YELLOW,
};
use serde::Serialize;
use sift::{Algorithm, Comparison, Probe};

/// Lists longer than this are elided in the terminal report.
const MAX_SHOWN: usize = 24;

/// Insertion point of a value into a sorted list.
#[derive(Debug, Serialize)]
pub struct Insertion {
    pub sorted: Vec<i64>,
    pub value: i64,
    pub index: usize,
    pub after: Vec<i64>,
}

impl Insertion {
    pub fn new(sorted: Vec<i64>, value: i64, index: usize) -> Self {
        let mut after = Vec::with_capacity(sorted.len() + 1);
        after.extend_from_slice(&sorted[..index]);
        after.push(value);
        after.extend_from_slice(&sorted[index..]);
        Self {
            sorted,
            value,
            index,
            after,
        }
    }
}

pub fn print_input(label: &str, values: &[i64], target: Option<i64>) {
    section_top(label);
    field("list", list(values, MAX_SHOWN));
    if let Some(target) = target {
        field("target", themed(YELLOW, &[BOLD], &target.to_string()));
    }
    section_bot();
}

pub fn print_all_indices(target: i64, indices: &[usize]) {
    section_top("All indices");
    field(&format!("indices of {}", target), list(indices, MAX_SHOWN));
    field("matches", indices.len());
    section_bot();
}

pub fn print_insertion(insertion: &Insertion) {
    section_top("Insertion point");
    field("sorted", list(&insertion.sorted, MAX_SHOWN));
    field(
        &format!("insertion point for {}", insertion.value),
        index_colored(Some(insertion.index)),
    );
    field("after insertion", list(&insertion.after, MAX_SHOWN));
    section_bot();
}

pub fn print_probe(algorithm: Algorithm, probe: &Probe) {
    section_top(&algorithm.to_string());
    field("index", index_colored(probe.index));
    field("comparisons", probe.comparisons);
    if algorithm.requires_sorted() {
        row(&themed(GRAY, &[DIM], "index refers to the sorted copy"));
    }
    section_bot();
}

/// Side-by-side comparison table.
pub fn print_comparison(comparison: &Comparison) {
    section_top("Comparison");
    row(&format!(
        "{}{}{}{}",
        pad_right("algorithm", 18),
        pad_right("index", 10),
        pad_right("comparisons", 14),
        "time"
    ));
    for run in &comparison.runs {
        row(&format!(
            "{}{}{}{}",
            pad_right(&run.algorithm.to_string(), 18),
            pad_right(&index_colored(run.probe.index), 10),
            pad_right(&count_colored(run.probe.comparisons), 14),
            timing_colored(run.elapsed)
        ));
    }
    if !comparison.agree() {
        row(&themed(YELLOW, &[BOLD], "searches disagree on found / not found"));
    }
    section_bot();
}
