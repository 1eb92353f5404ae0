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

//! Comparison commands, one per benchmark campaign.

use super::ConfigArgs;
use crate::commands;
use crate::error::CliError;
use clap::{Args, Subcommand};
use perfcmp::Family;
use std::path::PathBuf;

/// Arguments shared by every comparison command.
#[derive(Args, Debug, Clone)]
pub struct CompareArgs {
    /// Result root holding one directory per variant
    #[arg(value_name = "ROOT")]
    pub root: PathBuf,

    #[command(flatten)]
    pub config: ConfigArgs,

    /// Output directory (defaults to the result root)
    #[arg(short, long, value_name = "DIR")]
    pub output: Option<PathBuf>,

    /// Skip chart rendering
    #[arg(long)]
    pub no_plot: bool,
}

/// Comparison commands.
///
/// Each reads `<ROOT>/<variant>/...`, writes `result.csv`, `<benchmark>.txt`
/// and `<benchmark>.svg`, and prints the pivots.
#[derive(Subcommand)]
pub enum CompareCommands {
    /// Compare single-threaded I/O size sweeps (<variant>/result.json)
    MicroSt(CompareArgs),

    /// Compare multi-threaded scalability sweeps (<variant>/result.json)
    MicroMt(CompareArgs),

    /// Compare metadata latency sweeps (<variant>/result.json)
    MicroMeta(CompareArgs),

    /// Compare YCSB workloads (<variant>/<a..f>-run.log)
    Ycsb(CompareArgs),

    /// Compare TPC-C transaction throughput (<variant>/start/prog.log)
    Tpcc(CompareArgs),
}

impl CompareCommands {
    /// Family this command compares.
    pub fn family(&self) -> Family {
        match self {
            CompareCommands::MicroSt(_) => Family::MicroSt,
            CompareCommands::MicroMt(_) => Family::MicroMt,
            CompareCommands::MicroMeta(_) => Family::MicroMeta,
            CompareCommands::Ycsb(_) => Family::Ycsb,
            CompareCommands::Tpcc(_) => Family::Tpcc,
        }
    }

    /// Execute the comparison.
    pub fn execute(self) -> Result<(), CliError> {
        let family = self.family();
        let args = match self {
            CompareCommands::MicroSt(a)
            | CompareCommands::MicroMt(a)
            | CompareCommands::MicroMeta(a)
            | CompareCommands::Ycsb(a)
            | CompareCommands::Tpcc(a) => a,
        };
        commands::compare(family, &args)
    }
}
