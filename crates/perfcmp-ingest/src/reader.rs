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

//! The reader capability shared by every input layout.

use crate::raw::RawRecord;
use perfcmp_core::{PerfError, Result};
use std::fs;
use std::path::Path;

/// Variant label plus the raw records read from one result location.
#[derive(Debug, Clone, PartialEq)]
pub struct ReadOutput {
    /// System under test, taken from the location's directory name.
    pub variant: String,
    /// Records in file order.
    pub records: Vec<RawRecord>,
}

/// Reads one result-artifact layout.
///
/// A location is a per-variant directory; readers know which files inside it
/// to look at.
pub trait FormatReader {
    /// Short name for log messages.
    fn name(&self) -> &'static str;

    /// Read every raw record stored under `location`.
    ///
    /// # Errors
    ///
    /// [`PerfError::MissingResult`] if the expected artifact does not exist;
    /// other variants are fatal for the run.
    fn read(&self, location: &Path) -> Result<ReadOutput>;
}

/// Variant name of a location: its last path component.
pub fn variant_name(location: &Path) -> Result<String> {
    location
        .file_name()
        .and_then(|n| n.to_str())
        .filter(|n| !n.is_empty())
        .map(str::to_string)
        .ok_or_else(|| PerfError::malformed(location, "cannot derive a variant name from path"))
}

/// Read a whole artifact, mapping `NotFound` to [`PerfError::MissingResult`].
pub fn read_artifact(path: &Path) -> Result<String> {
    fs::read_to_string(path).map_err(|e| PerfError::from_io(path, &e))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_variant_name() {
        assert_eq!(variant_name(Path::new("/results/ext4-DAX")).unwrap(), "ext4-DAX");
        assert!(variant_name(Path::new("/")).is_err());
    }

    #[test]
    fn test_read_missing_artifact() {
        let err = read_artifact(&PathBuf::from("/definitely/not/here.json")).unwrap_err();
        assert!(err.is_recoverable());
    }
}
