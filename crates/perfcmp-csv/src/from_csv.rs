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

//! Read an exported row store back into a result table.

use crate::error::{CsvError, Result};
use crate::to_csv::HEADER;
use perfcmp_core::{CanonicalRecord, ResultTable};
use std::io::Read;

/// Default maximum number of rows read back.
pub const DEFAULT_MAX_ROWS: usize = 1_000_000;

/// Configuration for CSV parsing.
#[derive(Debug, Clone)]
pub struct FromCsvConfig {
    /// Field delimiter (default: ',')
    pub delimiter: u8,
    /// Trim whitespace around every field, labels included (default: false).
    ///
    /// Header names and `y` values are matched trimmed regardless, so the
    /// default keeps labels byte-for-byte as written.
    pub trim: bool,
    /// Maximum number of data rows (default: [`DEFAULT_MAX_ROWS`])
    pub max_rows: usize,
}

impl Default for FromCsvConfig {
    fn default() -> Self {
        Self {
            delimiter: b',',
            trim: false,
            max_rows: DEFAULT_MAX_ROWS,
        }
    }
}

/// Parse CSV text into a result table.
///
/// Columns are located by header name, so extra columns and any column order
/// are accepted.
///
/// # Example
/// ```
/// use perfcmp_csv::from_csv;
///
/// let table = from_csv("variant,benchmark,x,y\next4,ycsb,a,0.75\n").unwrap();
/// assert_eq!(table.records()[0].variant(), "ext4");
/// assert_eq!(table.records()[0].y(), 0.75);
/// ```
pub fn from_csv(csv_data: &str) -> Result<ResultTable> {
    from_csv_with_config(csv_data, FromCsvConfig::default())
}

/// Parse CSV text into a result table with custom configuration.
pub fn from_csv_with_config(csv_data: &str, config: FromCsvConfig) -> Result<ResultTable> {
    from_csv_reader_with_config(csv_data.as_bytes(), config)
}

/// Read CSV from any reader into a result table.
pub fn from_csv_reader<R: Read>(reader: R) -> Result<ResultTable> {
    from_csv_reader_with_config(reader, FromCsvConfig::default())
}

/// Read CSV from any reader into a result table with custom configuration.
///
/// # Errors
///
/// - [`CsvError::MissingColumn`] if a header is absent
/// - [`CsvError::InvalidValue`] if `y` is not a number
/// - [`CsvError::Record`] if a row violates the canonical record invariants
/// - [`CsvError::TooManyRows`] past `config.max_rows`
pub fn from_csv_reader_with_config<R: Read>(
    reader: R,
    config: FromCsvConfig,
) -> Result<ResultTable> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .delimiter(config.delimiter)
        .has_headers(true)
        .trim(if config.trim {
            csv::Trim::All
        } else {
            csv::Trim::None
        })
        .from_reader(reader);

    let headers = csv_reader.headers()?.clone();
    let mut columns = [0usize; 4];
    for (slot, name) in columns.iter_mut().zip(HEADER) {
        *slot = headers
            .iter()
            .position(|h| h.trim() == name)
            .ok_or_else(|| CsvError::MissingColumn(name.to_string()))?;
    }
    let [benchmark, variant, x, y] = columns;

    let mut table = ResultTable::new();
    for (idx, row) in csv_reader.records().enumerate() {
        if idx >= config.max_rows {
            return Err(CsvError::TooManyRows {
                limit: config.max_rows,
            });
        }
        let row = row?;
        // Header is line 1.
        let line = idx + 2;
        let field = |col: usize| row.get(col).unwrap_or_default();

        let raw_y = field(y);
        let value: f64 = raw_y.trim().parse().map_err(|_| CsvError::InvalidValue {
            line,
            column: HEADER[3].to_string(),
            value: raw_y.to_string(),
        })?;

        let record = CanonicalRecord::new(field(benchmark), field(variant), field(x), value)
            .map_err(|source| CsvError::Record { line, source })?;
        table.push(record);
    }

    Ok(table)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_csv_config_default() {
        let config = FromCsvConfig::default();
        assert_eq!(config.delimiter, b',');
        assert!(!config.trim);
        assert_eq!(config.max_rows, DEFAULT_MAX_ROWS);
    }

    #[test]
    fn test_from_csv_basic() {
        let table = from_csv("benchmark,variant,x,y\nseq,uLayFS,4K,1\nseq,ext4,4K,0.5\n").unwrap();
        assert_eq!(table.len(), 2);
        assert_eq!(table.records()[1].key(), ("seq", "ext4", "4K"));
        assert_eq!(table.records()[1].y(), 0.5);
    }

    #[test]
    fn test_from_csv_extra_columns_and_whitespace() {
        let config = FromCsvConfig {
            trim: true,
            ..Default::default()
        };
        let table =
            from_csv_with_config("idx, benchmark ,variant,x,y\n0, tpcc ,NOVA, Mix ,3\n", config)
                .unwrap();
        assert_eq!(table.records()[0].key(), ("tpcc", "NOVA", "Mix"));
    }

    #[test]
    fn test_from_csv_keeps_label_whitespace() {
        let table = from_csv("idx, benchmark ,variant,x,y\n0, tpcc ,NOVA, Mix , 3\n").unwrap();
        assert_eq!(table.records()[0].key(), (" tpcc ", "NOVA", " Mix "));
        assert_eq!(table.records()[0].y(), 3.0);
    }

    #[test]
    fn test_from_csv_whitespace_only_label() {
        let table = from_csv("benchmark,variant,x,y\nseq,A, ,1\n").unwrap();
        assert_eq!(table.records()[0].x(), " ");
    }

    #[test]
    fn test_from_csv_missing_column() {
        let err = from_csv("benchmark,variant,y\nseq,A,1\n").unwrap_err();
        assert!(matches!(err, CsvError::MissingColumn(ref c) if c == "x"));
    }

    #[test]
    fn test_from_csv_invalid_value() {
        let err = from_csv("benchmark,variant,x,y\nseq,A,4K,fast\n").unwrap_err();
        assert!(matches!(err, CsvError::InvalidValue { line: 2, .. }));
    }

    #[test]
    fn test_from_csv_rejects_negative_y() {
        let err = from_csv("benchmark,variant,x,y\nseq,A,4K,1\nseq,B,4K,-1\n").unwrap_err();
        assert!(matches!(err, CsvError::Record { line: 3, .. }));
    }

    #[test]
    fn test_from_csv_rejects_empty_x() {
        let err = from_csv("benchmark,variant,x,y\nseq,A,,1\n").unwrap_err();
        assert!(matches!(err, CsvError::Record { line: 2, .. }));
    }

    #[test]
    fn test_from_csv_row_limit() {
        let config = FromCsvConfig {
            max_rows: 1,
            ..Default::default()
        };
        let err = from_csv_with_config("benchmark,variant,x,y\na,A,1,1\na,A,2,1\n", config)
            .unwrap_err();
        assert!(matches!(err, CsvError::TooManyRows { limit: 1 }));
    }

    #[test]
    fn test_from_csv_header_only() {
        assert!(from_csv("benchmark,variant,x,y\n").unwrap().is_empty());
    }
}
