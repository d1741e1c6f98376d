// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

use anyhow::{bail, Result};
use clap::Parser;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::Serialize;
use serde_json::json;

use sift::{binary_search_insertion_point, compare_algorithms, find_all_indices, Algorithm};

mod cli;
use cli::display;
use cli::report::{self, Insertion};
use cli::{parse_values, Cli, Commands};

/// The fixed walkthrough list: unsorted, with duplicates.
const SAMPLE: [i64; 11] = [3, 1, 4, 1, 5, 9, 2, 6, 5, 3, 5];
/// Target for the fixed-list walkthrough.
const SAMPLE_TARGET: i64 = 5;
/// Value inserted into the sorted fixed list.
const SAMPLE_INSERT: i64 = 7;
/// Target for the fixed-list comparison counts.
const SAMPLE_COUNT_TARGET: i64 = 6;
/// Size of the large ascending range in the walkthrough.
const LARGE_SIZE: usize = 100_000;

fn main() {
    let cli = Cli::parse();
    cli::logging::init(cli.verbose);

    if let Err(e) = run(cli) {
        eprintln!("error: {:#}", e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let json = cli.json;
    match cli.command {
        Commands::Demo {
            seed,
            size,
            max,
            insert,
        } => run_demo(seed, size, max, insert, json),
        Commands::FindAll { values, target } => {
            let values = parse_values(&values)?;
            run_find_all(&values, target, json)
        }
        Commands::InsertionPoint { values, target } => {
            let values = parse_values(&values)?;
            run_insertion_point(&values, target, json)
        }
        Commands::Search {
            values,
            target,
            algorithm,
        } => {
            let values = parse_values(&values)?;
            run_search(&values, target, algorithm.into(), json)
        }
        Commands::Compare { values, target } => {
            let values = parse_values(&values)?;
            run_compare(&values, target, json)
        }
        Commands::Bench { size, target } => {
            if size == 0 {
                bail!("--size must be at least 1");
            }
            let target = target.unwrap_or(size as i64 - 1);
            let values = ascending(size);
            tracing::info!(size, target, "benchmarking on ascending range");
            run_compare(&values, target, json)
        }
    }
}

fn ascending(n: usize) -> Vec<i64> {
    (0..n as i64).collect()
}

fn emit_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn insertion(values: &[i64], value: i64) -> Insertion {
    let mut sorted = values.to_vec();
    sorted.sort_unstable();
    let index = binary_search_insertion_point(&sorted, &value);
    Insertion::new(sorted, value, index)
}

fn run_find_all(values: &[i64], target: i64, json: bool) -> Result<()> {
    let indices = find_all_indices(values, &target);
    if json {
        return emit_json(&json!({ "target": target, "indices": indices }));
    }
    report::print_input("Input", values, Some(target));
    report::print_all_indices(target, &indices);
    Ok(())
}

fn run_insertion_point(values: &[i64], target: i64, json: bool) -> Result<()> {
    let insertion = insertion(values, target);
    if json {
        return emit_json(&insertion);
    }
    report::print_insertion(&insertion);
    Ok(())
}

fn run_search(values: &[i64], target: i64, algorithm: Algorithm, json: bool) -> Result<()> {
    let probe = if algorithm.requires_sorted() {
        let mut sorted = values.to_vec();
        sorted.sort_unstable();
        algorithm.probe(&sorted, &target)
    } else {
        algorithm.probe(values, &target)
    };

    if json {
        return emit_json(&json!({ "algorithm": algorithm, "probe": probe }));
    }
    report::print_input("Input", values, Some(target));
    report::print_probe(algorithm, &probe);
    Ok(())
}

fn run_compare(values: &[i64], target: i64, json: bool) -> Result<()> {
    let comparison = compare_algorithms(values, &target);
    if json {
        return emit_json(&comparison);
    }
    report::print_input("Input", values, Some(target));
    report::print_comparison(&comparison);
    Ok(())
}

/// Fixed list, large range, then a seeded random list.
fn run_demo(seed: Option<u64>, size: usize, max: i64, insert: i64, json: bool) -> Result<()> {
    if size == 0 {
        bail!("--size must be at least 1");
    }
    if max < 1 {
        bail!("--max must be at least 1, got {}", max);
    }

    let seed = seed.unwrap_or_else(rand::random);
    tracing::info!(seed, size, max, "generating random list");
    let mut rng = StdRng::seed_from_u64(seed);
    let random_list: Vec<i64> = (0..size).map(|_| rng.gen_range(1..=max)).collect();
    let random_target = random_list[rng.gen_range(0..random_list.len())];

    // Fixed list
    let fixed_indices = find_all_indices(&SAMPLE, &SAMPLE_TARGET);
    let fixed_insertion = insertion(&SAMPLE, SAMPLE_INSERT);
    let linear = Algorithm::Linear.probe(&SAMPLE, &SAMPLE_COUNT_TARGET);
    let binary = Algorithm::Binary.probe(&fixed_insertion.sorted, &SAMPLE_COUNT_TARGET);

    // Large range
    let large = ascending(LARGE_SIZE);
    let large_target = LARGE_SIZE as i64 - 1;
    let large_comparison = compare_algorithms(&large, &large_target);

    // Random list
    let random_indices = find_all_indices(&random_list, &random_target);
    let random_insertion = insertion(&random_list, insert);
    let random_comparison = compare_algorithms(&random_list, &random_target);

    if json {
        return emit_json(&json!({
            "seed": seed,
            "fixed": {
                "list": SAMPLE,
                "all_indices": { "target": SAMPLE_TARGET, "indices": fixed_indices },
                "insertion": fixed_insertion,
                "counts": { "target": SAMPLE_COUNT_TARGET, "linear": linear, "binary": binary },
            },
            "large": { "size": LARGE_SIZE, "target": large_target, "comparison": large_comparison },
            "random": {
                "list": random_list,
                "target": random_target,
                "all_indices": random_indices,
                "insertion": random_insertion,
                "comparison": random_comparison,
            },
        }));
    }

    display::title("SIFT: search walkthrough");

    report::print_input("Fixed list", &SAMPLE, None);
    report::print_all_indices(SAMPLE_TARGET, &fixed_indices);
    report::print_insertion(&fixed_insertion);
    report::print_probe(Algorithm::Linear, &linear);
    report::print_probe(Algorithm::Binary, &binary);

    report::print_input(
        &format!("Large range 0..{}", LARGE_SIZE),
        &large,
        Some(large_target),
    );
    report::print_comparison(&large_comparison);

    report::print_input(
        &format!("Random list (seed {})", seed),
        &random_list,
        Some(random_target),
    );
    report::print_all_indices(random_target, &random_indices);
    report::print_insertion(&random_insertion);
    report::print_comparison(&random_comparison);

    Ok(())
}
