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

//! Write the flat result table as CSV.

use crate::error::{CsvError, Result};
use perfcmp_core::ResultTable;
use std::io::Write;

/// Column names of the flat row store, in order.
pub const HEADER: [&str; 4] = ["benchmark", "variant", "x", "y"];

/// Configuration for CSV output.
#[derive(Debug, Clone)]
pub struct ToCsvConfig {
    /// Field delimiter (default: ',')
    pub delimiter: u8,
    /// Include header row (default: true)
    pub include_headers: bool,
    /// Quote style for fields (default: necessary)
    pub quote_style: csv::QuoteStyle,
}

impl Default for ToCsvConfig {
    fn default() -> Self {
        Self {
            delimiter: b',',
            include_headers: true,
            quote_style: csv::QuoteStyle::Necessary,
        }
    }
}

/// Convert a result table to a CSV string.
///
/// # Example
/// ```
/// use perfcmp_core::{CanonicalRecord, ResultTable};
/// use perfcmp_csv::to_csv;
///
/// let table = ResultTable::new()
///     .append(CanonicalRecord::new("seq_write", "ext4", "4K", 1.5).unwrap());
/// assert_eq!(to_csv(&table).unwrap(), "benchmark,variant,x,y\nseq_write,ext4,4K,1.5\n");
/// ```
pub fn to_csv(table: &ResultTable) -> Result<String> {
    to_csv_with_config(table, ToCsvConfig::default())
}

/// Convert a result table to a CSV string with custom configuration.
pub fn to_csv_with_config(table: &ResultTable, config: ToCsvConfig) -> Result<String> {
    let mut buffer = Vec::with_capacity(table.len() * 32 + 32);
    to_csv_writer_with_config(table, &mut buffer, config)?;
    String::from_utf8(buffer).map_err(|_| CsvError::InvalidUtf8 {
        context: "CSV output".to_string(),
    })
}

/// Write a result table as CSV.
pub fn to_csv_writer<W: Write>(table: &ResultTable, writer: W) -> Result<()> {
    to_csv_writer_with_config(table, writer, ToCsvConfig::default())
}

/// Write a result table as CSV with custom configuration.
///
/// Rows keep the table's insertion order. `y` uses the shortest decimal form
/// that parses back to the same `f64`.
pub fn to_csv_writer_with_config<W: Write>(
    table: &ResultTable,
    writer: W,
    config: ToCsvConfig,
) -> Result<()> {
    let mut wtr = csv::WriterBuilder::new()
        .delimiter(config.delimiter)
        .quote_style(config.quote_style)
        .from_writer(writer);

    if config.include_headers {
        wtr.write_record(HEADER)
            .map_err(|e| CsvError::Other(format!("Failed to write CSV header: {}", e)))?;
    }

    for record in table {
        let y = record.y().to_string();
        wtr.write_record([record.benchmark(), record.variant(), record.x(), y.as_str()])
            .map_err(|e| {
                CsvError::Other(format!(
                    "Failed to write CSV record for '{}/{}/{}': {}",
                    record.benchmark(),
                    record.variant(),
                    record.x(),
                    e
                ))
            })?;
    }

    wtr.flush()
        .map_err(|e| CsvError::Other(format!("Failed to flush CSV writer: {}", e)))?;

    Ok(())
}
