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

//! Error types for CSV export and read-back.

use perfcmp_core::PerfError;
use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// CSV export and import error types.
///
/// # Examples
///
/// ```
/// use perfcmp_csv::CsvError;
///
/// let err = CsvError::InvalidValue {
///     line: 3,
///     column: "y".to_string(),
///     value: "fast".to_string(),
/// };
/// assert_eq!(err.to_string(), "Invalid value 'fast' in column 'y' at line 3");
/// ```
#[derive(Debug, Error)]
pub enum CsvError {
    /// Missing required column in the header row.
    ///
    /// ```
    /// use perfcmp_csv::CsvError;
    ///
    /// let err = CsvError::MissingColumn("variant".to_string());
    /// assert_eq!(err.to_string(), "Missing required column: variant");
    /// ```
    #[error("Missing required column: {0}")]
    MissingColumn(String),

    /// A cell could not be converted to its column's type.
    #[error("Invalid value '{value}' in column '{column}' at line {line}")]
    InvalidValue {
        /// Line number (1-based, header included).
        line: usize,
        /// Column name.
        column: String,
        /// Offending cell.
        value: String,
    },

    /// Row count exceeded the configured limit.
    #[error("Row limit exceeded: more than {limit} rows")]
    TooManyRows {
        /// Configured maximum.
        limit: usize,
    },

    /// A row decoded fine but does not form a valid canonical record.
    #[error("Invalid record at line {line}: {source}")]
    Record {
        /// Line number (1-based, header included).
        line: usize,
        /// Underlying validation failure.
        #[source]
        source: PerfError,
    },

    /// Writing an output file failed.
    #[error("Failed to write '{path}': {source}")]
    Write {
        /// Destination file.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: io::Error,
    },

    /// Output was not valid UTF-8.
    #[error("Invalid UTF-8 in {context}")]
    InvalidUtf8 {
        /// What was being produced.
        context: String,
    },

    /// Error from the underlying CSV library.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Generic error with a message.
    #[error("{0}")]
    Other(String),
}

/// Result type for CSV operations.
pub type Result<T> = std::result::Result<T, CsvError>;

impl CsvError {
    /// Wrap an I/O error raised while writing `path`.
    pub fn write(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Write {
            path: path.into(),
            source,
        }
    }
}
