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

//! Contracts for the presentation sinks.
//!
//! The pipeline decides what to draw and what to persist; sinks decide how.

use crate::pivot::PivotTable;
use crate::table::ResultTable;
use std::path::Path;

/// How a benchmark's series are drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChartKind {
    /// One line per variant across the x buckets.
    Line,
    /// One bar per variant, grouped by x bucket.
    Bar,
}

/// Labels and chart kind for one pipeline family.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlotSpec {
    /// Chart kind.
    pub kind: ChartKind,
    /// X axis description.
    pub x_label: String,
    /// Y axis description.
    pub y_label: String,
}

impl PlotSpec {
    /// Create a spec.
    pub fn new(kind: ChartKind, x_label: impl Into<String>, y_label: impl Into<String>) -> Self {
        Self {
            kind,
            x_label: x_label.into(),
            y_label: y_label.into(),
        }
    }
}

/// Renders one chart per benchmark.
pub trait PlotSink {
    /// Error raised by the renderer.
    type Error: std::error::Error + Send + Sync + 'static;

    /// Draw `pivot` to `path`, one series per variant column.
    fn plot(&self, spec: &PlotSpec, pivot: &PivotTable, path: &Path) -> Result<(), Self::Error>;
}

/// Persists the flat table and the per-benchmark pivots.
pub trait ExportSink {
    /// Error raised by the exporter.
    type Error: std::error::Error + Send + Sync + 'static;

    /// Write every canonical record, one row each.
    fn export_table(&self, table: &ResultTable, path: &Path) -> Result<(), Self::Error>;

    /// Write one pivoted, baseline-relative table.
    fn export_pivot(&self, pivot: &PivotTable, path: &Path) -> Result<(), Self::Error>;
}
