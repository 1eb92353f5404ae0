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

//! Show command implementation.

use super::load_config;
use crate::cli::ConfigArgs;
use crate::error::CliError;
use perfcmp::{load_table, render_pivots, Pipeline};
use std::path::Path;

/// Rebuild pivots from an exported row store and print them.
pub fn show(file: &Path, args: &ConfigArgs) -> Result<(), CliError> {
    let config = load_config(args)?;
    let table = load_table(file)?;
    let pivots = Pipeline::new(config).compare(&table)?;
    print!("{}", render_pivots(&pivots));
    Ok(())
}
