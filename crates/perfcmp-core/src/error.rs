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

//! Error types shared by every stage of the comparison pipeline.

use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Result type for pipeline operations.
pub type Result<T> = std::result::Result<T, PerfError>;

/// Errors raised while ingesting, normalizing or pivoting benchmark results.
///
/// Only [`PerfError::MissingResult`] is recoverable: the pipeline logs it and
/// moves on to the next location. Every other variant aborts the run.
///
/// # Examples
///
/// ```
/// use perfcmp_core::PerfError;
///
/// let err = PerfError::MissingField {
///     artifact: "NOVA/start/prog.log".into(),
///     field: "[2] sc:".to_string(),
/// };
/// assert_eq!(
///     err.to_string(),
///     "Missing field '[2] sc:' in 'NOVA/start/prog.log'"
/// );
/// ```
#[derive(Error, Debug, Clone, PartialEq)]
pub enum PerfError {
    /// An expected result location does not exist.
    #[error("Result location '{}' does not exist", path.display())]
    MissingResult {
        /// The location that was probed
        path: PathBuf,
    },

    /// A structured input lacks an expected field or has the wrong shape.
    #[error("Malformed input in '{}': {reason}", artifact.display())]
    MalformedInput {
        /// The offending artifact
        artifact: PathBuf,
        /// What was wrong with it
        reason: String,
    },

    /// A required pattern is absent from a log's text.
    #[error("Missing field '{field}' in '{}'", artifact.display())]
    MissingField {
        /// The offending artifact
        artifact: PathBuf,
        /// The pattern or field that could not be found
        field: String,
    },

    /// A derived metric would divide by zero.
    #[error("Division by zero computing {metric} for '{}'", artifact.display())]
    DivisionByZero {
        /// The artifact (or benchmark) the metric belongs to
        artifact: PathBuf,
        /// The metric being computed
        metric: String,
    },

    /// A canonical record failed its invariants.
    #[error("Invalid record: {reason}")]
    InvalidRecord {
        /// Which invariant was violated
        reason: String,
    },

    /// I/O failure other than a missing location.
    #[error("I/O error for '{}': {message}", path.display())]
    Io {
        /// The path being accessed
        path: PathBuf,
        /// The underlying error message
        message: String,
    },
}

impl PerfError {
    /// Classify an I/O error: `NotFound` becomes [`PerfError::MissingResult`].
    pub fn from_io(path: impl AsRef<Path>, source: &io::Error) -> Self {
        let path = path.as_ref().to_path_buf();
        if source.kind() == io::ErrorKind::NotFound {
            Self::MissingResult { path }
        } else {
            Self::Io {
                path,
                message: source.to_string(),
            }
        }
    }

    /// Create a malformed-input error.
    pub fn malformed(artifact: impl Into<PathBuf>, reason: impl Into<String>) -> Self {
        Self::MalformedInput {
            artifact: artifact.into(),
            reason: reason.into(),
        }
    }

    /// Create a missing-field error.
    pub fn missing_field(artifact: impl Into<PathBuf>, field: impl Into<String>) -> Self {
        Self::MissingField {
            artifact: artifact.into(),
            field: field.into(),
        }
    }

    /// Create a division-by-zero error.
    pub fn division_by_zero(artifact: impl Into<PathBuf>, metric: impl Into<String>) -> Self {
        Self::DivisionByZero {
            artifact: artifact.into(),
            metric: metric.into(),
        }
    }

    /// Returns true if the pipeline may skip this error and keep going.
    pub fn is_recoverable(&self) -> bool {
        matches!(self, Self::MissingResult { .. })
    }
}

/// Divide `numerator` by `denominator`, refusing a zero denominator.
///
/// # Examples
///
/// ```
/// use perfcmp_core::error::checked_div;
///
/// assert_eq!(checked_div(30.0, 10.0, "Mix.txt", "k txns/s").unwrap(), 3.0);
/// assert!(checked_div(1.0, 0.0, "Mix.txt", "k txns/s").is_err());
/// ```
pub fn checked_div(
    numerator: f64,
    denominator: f64,
    artifact: impl Into<PathBuf>,
    metric: &str,
) -> Result<f64> {
    if denominator == 0.0 {
        return Err(PerfError::division_by_zero(artifact, metric));
    }
    Ok(numerator / denominator)
}
