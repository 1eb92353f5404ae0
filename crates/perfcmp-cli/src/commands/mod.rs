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

//! CLI command implementations

mod compare;
mod show;

pub use compare::compare;
pub use show::show;

use crate::cli::ConfigArgs;
use crate::error::CliError;
use perfcmp::CompareConfig;
use std::fs;
use tracing::debug;

/// Build the effective configuration: the YAML file if given, then the
/// baseline flags on top.
///
/// # Errors
///
/// Returns `Err` if the file cannot be read or is not a valid config.
pub fn load_config(args: &ConfigArgs) -> Result<CompareConfig, CliError> {
    let mut config = match &args.config {
        Some(path) => {
            let text = fs::read_to_string(path).map_err(|e| CliError::io_error(path, e))?;
            let config: CompareConfig = serde_yaml::from_str(&text)
                .map_err(|e| CliError::config(path, e.to_string()))?;
            debug!(path = %path.display(), "loaded config");
            config
        }
        None => CompareConfig::default(),
    };

    if args.no_baseline {
        config = config.with_baseline(None);
    } else if let Some(baseline) = &args.baseline {
        config = config.with_baseline(Some(baseline.as_str()));
    }
    Ok(config)
}
