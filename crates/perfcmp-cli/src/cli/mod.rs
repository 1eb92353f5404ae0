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

//! CLI command definitions and argument parsing.
//!
//! - [`compare`]: one command per benchmark campaign
//! - [`report`]: commands over previously exported results

mod compare;
mod report;

use crate::error::CliError;
use clap::{Args, Subcommand};
use std::path::PathBuf;

pub use compare::{CompareArgs, CompareCommands};
pub use report::ReportCommands;

/// Top-level CLI commands enum.
///
/// ```text
/// Commands
/// ├── Compare (micro-st, micro-mt, micro-meta, ycsb, tpcc)
/// └── Report (show)
/// ```
#[derive(Subcommand)]
pub enum Commands {
    // Comparison commands - flattened to appear at top level
    #[command(flatten)]
    Compare(CompareCommands),

    // Report commands - flattened to appear at top level
    #[command(flatten)]
    Report(ReportCommands),
}

impl Commands {
    /// Execute the command.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the configuration cannot be loaded, a result artifact
    /// is malformed, or an output cannot be written.
    pub fn execute(self) -> Result<(), CliError> {
        match self {
            Commands::Compare(cmd) => cmd.execute(),
            Commands::Report(cmd) => cmd.execute(),
        }
    }
}

/// Options controlling variant order and the baseline.
#[derive(Args, Debug, Clone, Default)]
pub struct ConfigArgs {
    /// YAML configuration file (variant priorities, baseline, unit divisors)
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Baseline variant for percentage columns
    #[arg(short, long, value_name = "NAME", conflicts_with = "no_baseline")]
    pub baseline: Option<String>,

    /// Do not add percentage columns
    #[arg(long)]
    pub no_baseline: bool,
}
