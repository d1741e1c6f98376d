// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! CLI definitions for the sift command-line interface.
//!
//! `demo` walks through every search on a fixed list, a large ascending
//! range and a seeded random list. The other subcommands run one operation
//! on a list given on the command line. `--json` swaps the boxed terminal
//! report for machine-readable output.

pub mod display;
pub mod logging;
pub mod report;

use anyhow::{Context, Result};
use clap::{ArgAction, Parser, Subcommand, ValueEnum};
use sift::Algorithm;

#[derive(Parser)]
#[command(
    name = "sift",
    about = "Linear, binary and jump search with comparison counting",
    version
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Emit JSON instead of the terminal report
    #[arg(long, global = true)]
    pub json: bool,

    /// Raise log verbosity (-v info, -vv debug, -vvv trace)
    ///
    /// `SIFT_LOG` takes precedence when set.
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Walk through every search on fixed and random inputs
    Demo {
        /// Seed for the random list (random when omitted)
        #[arg(long)]
        seed: Option<u64>,

        /// Length of the random list
        #[arg(long, default_value = "20")]
        size: usize,

        /// Largest value in the random list (values start at 1)
        #[arg(long, default_value = "100")]
        max: i64,

        /// Value whose insertion point is shown for the random list
        #[arg(long, default_value = "50", allow_hyphen_values = true)]
        insert: i64,
    },

    /// Print every index holding TARGET
    FindAll {
        /// Comma or whitespace separated integers
        #[arg(allow_hyphen_values = true)]
        values: String,

        #[arg(allow_hyphen_values = true)]
        target: i64,
    },

    /// Sort VALUES and print where TARGET would be inserted
    InsertionPoint {
        /// Comma or whitespace separated integers
        #[arg(allow_hyphen_values = true)]
        values: String,

        #[arg(allow_hyphen_values = true)]
        target: i64,
    },

    /// Run one counted search and print (index, comparisons)
    Search {
        /// Comma or whitespace separated integers
        #[arg(allow_hyphen_values = true)]
        values: String,

        #[arg(allow_hyphen_values = true)]
        target: i64,

        /// Algorithm to run (binary and jump search a sorted copy)
        #[arg(short, long, value_enum, default_value = "linear")]
        algorithm: AlgorithmArg,
    },

    /// Time all three counted searches on VALUES
    Compare {
        /// Comma or whitespace separated integers
        #[arg(allow_hyphen_values = true)]
        values: String,

        #[arg(allow_hyphen_values = true)]
        target: i64,
    },

    /// Compare the searches on the ascending range 0..SIZE
    Bench {
        /// Number of elements
        #[arg(long, default_value = "100000")]
        size: usize,

        /// Value to look for (defaults to the last element)
        #[arg(long, allow_hyphen_values = true)]
        target: Option<i64>,
    },
}

/// `--algorithm` values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum AlgorithmArg {
    Linear,
    Binary,
    Jump,
}

impl From<AlgorithmArg> for Algorithm {
    fn from(arg: AlgorithmArg) -> Self {
        match arg {
            AlgorithmArg::Linear => Algorithm::Linear,
            AlgorithmArg::Binary => Algorithm::Binary,
            AlgorithmArg::Jump => Algorithm::Jump,
        }
    }
}

/// Parse a comma or whitespace separated list of integers.
///
/// Empty tokens (`"1,,2"`, trailing commas) are skipped; an empty string
/// is an empty list.
pub fn parse_values(input: &str) -> Result<Vec<i64>> {
    input
        .split(|c: char| c == ',' || c.is_whitespace())
        .filter(|token| !token.is_empty())
        .map(|token| {
            token
                .parse::<i64>()
                .with_context(|| format!("invalid value `{}` in list", token))
        })
        .collect()
}
