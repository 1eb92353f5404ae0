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

//! Plain-text rendering of pivot tables.
//!
//! The layout is a fixed-width grid: the benchmark name on its own line, then
//! a header row (`x`, the variant columns, the percentage columns) and one
//! line per x bucket. Missing cells print as `NaN`.

use perfcmp_core::{PivotTable, Pivots};

/// Label of the row-index column.
pub const INDEX_LABEL: &str = "x";

/// Formatting options for text pivots.
#[derive(Debug, Clone)]
pub struct TextConfig {
    /// Decimal places for measured values (default: 4)
    pub precision: usize,
    /// Decimal places for percentage columns (default: 2)
    pub percent_precision: usize,
    /// Placeholder for absent cells (default: `NaN`)
    pub missing: String,
}

impl Default for TextConfig {
    fn default() -> Self {
        Self {
            precision: 4,
            percent_precision: 2,
            missing: "NaN".to_string(),
        }
    }
}

/// Render one pivot with default formatting.
///
/// # Example
/// ```
/// use perfcmp_core::{build_pivots, CanonicalRecord, ResultTable, VariantPriority};
/// use perfcmp_csv::render_pivot;
///
/// let table = ResultTable::new()
///     .append(CanonicalRecord::new("seq", "uLayFS", "4K", 10.0).unwrap())
///     .append(CanonicalRecord::new("seq", "ext4", "4K", 5.0).unwrap());
/// let pivots = build_pivots(&table, &VariantPriority::default(), Some("uLayFS")).unwrap();
/// let text = render_pivot(pivots.get("seq").unwrap());
/// assert!(text.contains("200.00"));
/// ```
pub fn render_pivot(pivot: &PivotTable) -> String {
    render_pivot_with_config(pivot, &TextConfig::default())
}

/// Render one pivot.
pub fn render_pivot_with_config(pivot: &PivotTable, config: &TextConfig) -> String {
    let measured = pivot.variants().len();
    let mut grid: Vec<Vec<String>> = Vec::with_capacity(pivot.rows().len() + 1);

    let mut header = vec![INDEX_LABEL.to_string()];
    header.extend(pivot.column_names());
    grid.push(header);

    for (i, x) in pivot.rows().iter().enumerate() {
        let mut line = vec![x.clone()];
        for (col, cell) in pivot.row_values(i).into_iter().enumerate() {
            let precision = if col < measured {
                config.precision
            } else {
                config.percent_precision
            };
            line.push(match cell {
                Some(v) => format!("{:.*}", precision, v),
                None => config.missing.clone(),
            });
        }
        grid.push(line);
    }

    let columns = grid[0].len();
    let widths: Vec<usize> = (0..columns)
        .map(|c| grid.iter().map(|row| row[c].chars().count()).max().unwrap_or(0))
        .collect();

    let mut out = String::new();
    out.push_str(pivot.benchmark());
    out.push('\n');
    for row in &grid {
        let mut line = String::new();
        for (c, cell) in row.iter().enumerate() {
            if c == 0 {
                line.push_str(&format!("{:<width$}", cell, width = widths[c]));
            } else {
                line.push_str(&format!("  {:>width$}", cell, width = widths[c]));
            }
        }
        out.push_str(line.trim_end());
        out.push('\n');
    }
    out
}

/// Render every pivot, separated by blank lines.
pub fn render_pivots(pivots: &Pivots) -> String {
    let config = TextConfig::default();
    pivots
        .iter()
        .map(|p| render_pivot_with_config(p, &config))
        .collect::<Vec<_>>()
        .join("\n")
}
