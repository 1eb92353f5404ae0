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

//! Per-benchmark pivoting and baseline-relative percentages.
//!
//! Each benchmark group becomes an `x` (rows) by `variant` (columns) table.
//! When the baseline variant is one of the columns, every column `c` also gets
//! a derived `c%` column holding `baseline / c * 100` row by row.

use crate::error::{PerfError, Result};
use crate::order::VariantPriority;
use crate::table::{BenchmarkGroup, ResultTable};
use std::collections::HashMap;
use tracing::debug;

/// Suffix appended to a variant name to label its percentage column.
pub const PERCENT_SUFFIX: &str = "%";

/// Pivoted view of one benchmark.
#[derive(Debug, Clone, PartialEq)]
pub struct PivotTable {
    benchmark: String,
    rows: Vec<String>,
    variants: Vec<String>,
    /// `cells[row][column]`
    cells: Vec<Vec<Option<f64>>>,
    relative: Option<Relative>,
}

/// Percentage columns derived from the baseline.
#[derive(Debug, Clone, PartialEq)]
struct Relative {
    baseline: String,
    cells: Vec<Vec<Option<f64>>>,
}

/// One plottable series: a variant's values along the pivot rows.
#[derive(Debug, Clone, PartialEq)]
pub struct Series<'a> {
    /// Variant name, used as the legend label.
    pub variant: &'a str,
    /// `(x, y)` pairs in row order; `None` where the variant has no value.
    pub points: Vec<(&'a str, Option<f64>)>,
}

impl PivotTable {
    /// Benchmark this table describes.
    pub fn benchmark(&self) -> &str {
        &self.benchmark
    }

    /// Row labels (x buckets) in first-appearance order.
    pub fn rows(&self) -> &[String] {
        &self.rows
    }

    /// Value columns in variant order.
    pub fn variants(&self) -> &[String] {
        &self.variants
    }

    /// Baseline used for percentage columns, if any were produced.
    pub fn baseline(&self) -> Option<&str> {
        self.relative.as_ref().map(|r| r.baseline.as_str())
    }

    /// Returns true if percentage columns were produced.
    pub fn has_relative(&self) -> bool {
        self.relative.is_some()
    }

    /// Cell value for `(x, variant)`.
    pub fn value(&self, x: &str, variant: &str) -> Option<f64> {
        let (row, col) = self.position(x, variant)?;
        self.cells[row][col]
    }

    /// Percentage of `variant` relative to the baseline at `x`.
    pub fn percent(&self, x: &str, variant: &str) -> Option<f64> {
        let (row, col) = self.position(x, variant)?;
        self.relative.as_ref()?.cells[row][col]
    }

    /// All column labels: variants, then `<variant>%` when relative.
    pub fn column_names(&self) -> Vec<String> {
        let mut names = self.variants.clone();
        if self.relative.is_some() {
            names.extend(
                self.variants
                    .iter()
                    .map(|v| format!("{}{}", v, PERCENT_SUFFIX)),
            );
        }
        names
    }

    /// Cells of one row across [`PivotTable::column_names`].
    pub fn row_values(&self, row: usize) -> Vec<Option<f64>> {
        let mut values = self.cells[row].clone();
        if let Some(relative) = &self.relative {
            values.extend_from_slice(&relative.cells[row]);
        }
        values
    }

    /// Per-variant series for plotting, in column order.
    pub fn series(&self) -> Vec<Series<'_>> {
        self.variants
            .iter()
            .enumerate()
            .map(|(col, variant)| Series {
                variant,
                points: self
                    .rows
                    .iter()
                    .zip(&self.cells)
                    .map(|(x, row)| (x.as_str(), row[col]))
                    .collect(),
            })
            .collect()
    }

    /// Largest value cell, used to size chart axes.
    pub fn max_value(&self) -> Option<f64> {
        self.cells
            .iter()
            .flatten()
            .flatten()
            .copied()
            .fold(None, |acc: Option<f64>, v| Some(acc.map_or(v, |a| a.max(v))))
    }

    fn position(&self, x: &str, variant: &str) -> Option<(usize, usize)> {
        let row = self.rows.iter().position(|r| r == x)?;
        let col = self.variants.iter().position(|v| v == variant)?;
        Some((row, col))
    }
}

/// Pivot tables of every benchmark, in discovery order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Pivots {
    tables: Vec<PivotTable>,
}

impl Pivots {
    /// Pivot for one benchmark.
    pub fn get(&self, benchmark: &str) -> Option<&PivotTable> {
        self.tables.iter().find(|t| t.benchmark == benchmark)
    }

    /// Iterate in benchmark discovery order.
    pub fn iter(&self) -> std::slice::Iter<'_, PivotTable> {
        self.tables.iter()
    }

    /// Number of benchmarks.
    pub fn len(&self) -> usize {
        self.tables.len()
    }

    /// Returns true if the table had no records.
    pub fn is_empty(&self) -> bool {
        self.tables.is_empty()
    }
}

impl<'a> IntoIterator for &'a Pivots {
    type Item = &'a PivotTable;
    type IntoIter = std::slice::Iter<'a, PivotTable>;

    fn into_iter(self) -> Self::IntoIter {
        self.tables.iter()
    }
}

/// Pivot every benchmark of `table`.
///
/// Variant columns follow `priority` applied once to the whole table. Percentage
/// columns are only added for groups where `baseline` is a column.
///
/// # Errors
///
/// [`PerfError::DivisionByZero`] if a percentage would divide by a zero cell.
///
/// # Examples
///
/// ```
/// use perfcmp_core::{build_pivots, CanonicalRecord, ResultTable, VariantPriority};
///
/// let table = ResultTable::new()
///     .append(CanonicalRecord::new("seq", "A", "4K", 10.0).unwrap())
///     .append(CanonicalRecord::new("seq", "B", "4K", 5.0).unwrap());
/// let pivots = build_pivots(&table, &VariantPriority::default(), Some("A")).unwrap();
/// let seq = pivots.get("seq").unwrap();
/// assert_eq!(seq.percent("4K", "B"), Some(200.0));
/// ```
pub fn build_pivots(
    table: &ResultTable,
    priority: &VariantPriority,
    baseline: Option<&str>,
) -> Result<Pivots> {
    let order = table.variant_order(priority);
    let tables = table
        .group_by_benchmark()
        .iter()
        .map(|group| build_pivot(group, &order, baseline))
        .collect::<Result<Vec<_>>>()?;
    Ok(Pivots { tables })
}

/// Pivot a single benchmark group with a precomputed variant order.
pub fn build_pivot(
    group: &BenchmarkGroup<'_>,
    order: &[String],
    baseline: Option<&str>,
) -> Result<PivotTable> {
    let mut rows: Vec<String> = Vec::new();
    let mut latest: HashMap<(&str, &str), f64> = HashMap::new();
    for record in &group.records {
        if !rows.iter().any(|r| r == record.x()) {
            rows.push(record.x().to_string());
        }
        // Later records overwrite earlier ones.
        latest.insert((record.x(), record.variant()), record.y());
    }

    let variants: Vec<String> = order
        .iter()
        .filter(|v| group.records.iter().any(|r| r.variant() == v.as_str()))
        .cloned()
        .collect();

    let cells: Vec<Vec<Option<f64>>> = rows
        .iter()
        .map(|x| {
            variants
                .iter()
                .map(|v| latest.get(&(x.as_str(), v.as_str())).copied())
                .collect()
        })
        .collect();

    let relative = match baseline {
        Some(base) => match variants.iter().position(|v| v == base) {
            Some(base_col) => Some(Relative {
                baseline: base.to_string(),
                cells: relative_cells(group.benchmark, &rows, &variants, &cells, base_col)?,
            }),
            None => {
                debug!(
                    benchmark = group.benchmark,
                    baseline = base,
                    "baseline not present, skipping percentage columns"
                );
                None
            }
        },
        None => None,
    };

    Ok(PivotTable {
        benchmark: group.benchmark.to_string(),
        rows,
        variants,
        cells,
        relative,
    })
}

fn relative_cells(
    benchmark: &str,
    rows: &[String],
    variants: &[String],
    cells: &[Vec<Option<f64>>],
    base_col: usize,
) -> Result<Vec<Vec<Option<f64>>>> {
    rows.iter()
        .zip(cells)
        .map(|(x, row)| {
            row.iter()
                .zip(variants)
                .map(|(cell, variant)| match (row[base_col], *cell) {
                    (Some(_), Some(v)) if v == 0.0 => Err(PerfError::division_by_zero(
                        benchmark,
                        format!("{}{} at x={}", variant, PERCENT_SUFFIX, x),
                    )),
                    (Some(base), Some(v)) => Ok(Some(base / v * 100.0)),
                    _ => Ok(None),
                })
                .collect()
        })
        .collect()
}
