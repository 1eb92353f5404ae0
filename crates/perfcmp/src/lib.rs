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

//! # perfcmp
//!
//! Normalize benchmark results from several storage systems into one table
//! and compare them against a baseline.
//!
//! Each benchmark campaign ([`Family`]) leaves one directory per system under
//! a result root. perfcmp reads every directory, converts the records into
//! `{benchmark, variant, x, y}` rows, pivots them per benchmark and writes:
//!
//! - `result.csv`: every row
//! - `<benchmark>.txt`: the pivot, with `<variant>%` columns relative to the baseline
//! - `<benchmark>.svg`: a chart
//!
//! ## Quick Start
//!
//! ```no_run
//! use perfcmp::{CompareConfig, Family, Pipeline};
//! use std::path::Path;
//!
//! let pipeline = Pipeline::new(CompareConfig::default()).without_plots();
//! let report = pipeline.run(Family::Ycsb, Path::new("results/ycsb")).unwrap();
//! print!("{}", perfcmp::render_pivots(&report.pivots));
//! ```
//!
//! ## Crates
//!
//! - [`perfcmp_core`]: records, tables, ordering, pivots, sink traits
//! - [`perfcmp_ingest`]: readers and normalizers per input layout
//! - [`perfcmp_csv`]: row store and text pivots
//! - [`perfcmp_plot`]: SVG charts

mod error;
mod pipeline;

pub use error::{PipelineError, Result, SinkError};
pub use pipeline::{load_table, Pipeline, Report, RESULT_CSV};

pub use perfcmp_core::{
    build_pivots, CanonicalRecord, ChartKind, CompareConfig, ExportSink, PerfError, PivotTable,
    Pivots, PlotSink, PlotSpec, ResultTable, UnitConfig, VariantPriority, DEFAULT_BASELINE,
};
pub use perfcmp_csv::{render_pivot, render_pivots, CsvError, CsvExporter};
pub use perfcmp_ingest::{discover_variants, Family};
pub use perfcmp_plot::{PlotError, SvgPlotter};

pub use perfcmp_core as core;
pub use perfcmp_csv as csv;
pub use perfcmp_ingest as ingest;
pub use perfcmp_plot as plot;
