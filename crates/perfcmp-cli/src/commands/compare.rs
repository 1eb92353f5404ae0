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

//! Comparison command implementation.

use super::load_config;
use crate::cli::CompareArgs;
use crate::error::CliError;
use perfcmp::{render_pivots, Family, Pipeline};

/// Run one comparison and print its pivots.
pub fn compare(family: Family, args: &CompareArgs) -> Result<(), CliError> {
    let config = load_config(&args.config)?;
    let mut pipeline = Pipeline::new(config);
    if let Some(dir) = &args.output {
        pipeline = pipeline.output_dir(dir);
    }
    if args.no_plot {
        pipeline = pipeline.without_plots();
    }

    let report = pipeline.run(family, &args.root)?;
    print!("{}", render_pivots(&report.pivots));
    Ok(())
}
