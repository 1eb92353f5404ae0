// Dweve perfcmp - Storage Benchmark Comparison Toolkit
//
// Copyright (c) 2025 Dweve IP B.V. and individual contributors.
//
// SPDX-License-Identifier: Apache-2.0
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE file at the
// root of this repository or at: http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! perfcmp command line interface

use clap::Parser;
use perfcmp_cli::cli::Commands;
use perfcmp_cli::logging;
use std::process::ExitCode;

/// perfcmp - storage benchmark comparison toolkit
///
/// Reads the per-system result directories of one benchmark campaign,
/// writes `result.csv`, a text pivot and a chart per benchmark, and prints
/// the pivots.
///
/// # Examples
///
/// ```bash
/// # Compare YCSB runs, uLayFS as the baseline
/// perfcmp ycsb results/ycsb
///
/// # Micro-benchmarks against ext4, tables only
/// perfcmp micro-st results/micro-st --baseline ext4 --no-plot
///
/// # Re-print pivots from an earlier export
/// perfcmp show results/ycsb/result.csv
/// ```
#[derive(Parser)]
#[command(name = "perfcmp")]
#[command(author, version, about = "perfcmp - storage benchmark comparison toolkit", long_about = None)]
struct Cli {
    /// Log debug details to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    match cli.command.execute() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}
