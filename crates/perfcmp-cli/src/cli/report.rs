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

//! Commands over previously exported results.

use super::ConfigArgs;
use crate::commands;
use crate::error::CliError;
use clap::Subcommand;
use std::path::PathBuf;

/// Report commands.
#[derive(Subcommand)]
pub enum ReportCommands {
    /// Print pivots rebuilt from an exported result.csv
    Show {
        /// Exported row store
        #[arg(value_name = "FILE")]
        file: PathBuf,

        #[command(flatten)]
        config: ConfigArgs,
    },
}

impl ReportCommands {
    /// Execute the report command.
    pub fn execute(self) -> Result<(), CliError> {
        match self {
            ReportCommands::Show { file, config } => commands::show(&file, &config),
        }
    }
}
