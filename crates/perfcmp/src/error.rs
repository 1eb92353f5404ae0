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

//! Error type for end-to-end comparison runs.

use perfcmp_core::PerfError;
use perfcmp_csv::CsvError;
use std::error::Error as StdError;
use std::path::PathBuf;
use thiserror::Error;

/// Boxed error raised by a pluggable sink.
pub type SinkError = Box<dyn StdError + Send + Sync + 'static>;

/// Errors raised by [`crate::Pipeline`].
#[derive(Debug, Error)]
pub enum PipelineError {
    /// Ingestion, normalization or pivoting failed.
    #[error(transparent)]
    Perf(#[from] PerfError),

    /// Reading a previously exported row store failed.
    #[error(transparent)]
    Csv(#[from] CsvError),

    /// No variant under the result root produced a record.
    #[error("No results found under '{root}'")]
    NoResults {
        /// Result root that was scanned.
        root: PathBuf,
    },

    /// Creating the output directory failed.
    #[error("Failed to create output directory '{path}': {message}")]
    OutputDir {
        /// Directory path.
        path: PathBuf,
        /// Underlying I/O message.
        message: String,
    },

    /// The export sink failed.
    #[error("Export to '{path}' failed: {source}")]
    Export {
        /// Destination file.
        path: PathBuf,
        /// Sink error.
        #[source]
        source: SinkError,
    },

    /// The plot sink failed.
    #[error("Plotting '{path}' failed: {source}")]
    Plot {
        /// Destination file.
        path: PathBuf,
        /// Sink error.
        #[source]
        source: SinkError,
    },
}

/// Result type for pipeline runs.
pub type Result<T> = std::result::Result<T, PipelineError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_perf_error_is_transparent() {
        let inner = PerfError::missing_field("NOVA/start/prog.log", "[0] sc:");
        let msg = inner.to_string();
        let err: PipelineError = inner.into();
        assert_eq!(err.to_string(), msg);
    }

    #[test]
    fn test_no_results_names_root() {
        let err = PipelineError::NoResults {
            root: PathBuf::from("/results/ycsb"),
        };
        assert!(err.to_string().contains("/results/ycsb"));
    }
}
