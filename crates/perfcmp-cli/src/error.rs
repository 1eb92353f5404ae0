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

//! Structured error types for the perfcmp CLI.

use perfcmp::PipelineError;
use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// The main error type for perfcmp CLI operations.
///
/// # Examples
///
/// ```rust,no_run
/// use perfcmp_cli::error::CliError;
///
/// fn read_config(path: &str) -> Result<String, CliError> {
///     std::fs::read_to_string(path).map_err(|e| CliError::io_error(path, e))
/// }
/// ```
#[derive(Error, Debug, Clone)]
pub enum CliError {
    /// I/O operation failed.
    #[error("I/O error for '{path}': {message}")]
    Io {
        /// The file path that caused the error
        path: PathBuf,
        /// The error message
        message: String,
    },

    /// The configuration file could not be parsed.
    #[error("Invalid config '{path}': {message}")]
    Config {
        /// The configuration file
        path: PathBuf,
        /// The parser message
        message: String,
    },

    /// Ingestion, comparison or export failed.
    #[error("{0}")]
    Comparison(String),
}

impl CliError {
    /// Create an I/O error with file path context.
    pub fn io_error(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Io {
            path: path.into(),
            message: source.to_string(),
        }
    }

    /// Create a configuration error.
    pub fn config(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        Self::Config {
            path: path.into(),
            message: message.into(),
        }
    }
}

impl From<PipelineError> for CliError {
    fn from(e: PipelineError) -> Self {
        Self::Comparison(e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_io_error_context() {
        let err = CliError::io_error(
            "perfcmp.yaml",
            io::Error::new(io::ErrorKind::NotFound, "not found"),
        );
        assert_eq!(err.to_string(), "I/O error for 'perfcmp.yaml': not found");
    }

    #[test]
    fn test_pipeline_error_message_is_kept() {
        let err: CliError = PipelineError::NoResults {
            root: PathBuf::from("results"),
        }
        .into();
        assert_eq!(err.to_string(), "No results found under 'results'");
    }
}
