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

//! Discovery of per-variant result directories.

use perfcmp_core::{PerfError, Result, VariantPriority};
use std::fs;
use std::path::{Path, PathBuf};

/// Subdirectories of `root`, in variant order.
///
/// Entries are first sorted by name so the listing does not depend on the
/// filesystem's enumeration order, then stably sorted by priority.
///
/// # Errors
///
/// [`PerfError::MissingResult`] if `root` does not exist.
pub fn discover_variants(root: &Path, priority: &VariantPriority) -> Result<Vec<PathBuf>> {
    let entries = fs::read_dir(root).map_err(|e| PerfError::from_io(root, &e))?;

    let mut dirs = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|e| PerfError::from_io(root, &e))?;
        let path = entry.path();
        if path.is_dir() {
            dirs.push(path);
        }
    }

    dirs.sort();
    priority.sort_by_variant(&mut dirs, |p| {
        p.file_name().and_then(|n| n.to_str()).unwrap_or_default()
    });
    Ok(dirs)
}
