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

//! Core data model for perfcmp.
//!
//! Benchmark results from different storage systems ("variants") are
//! normalized into [`CanonicalRecord`]s, accumulated in a [`ResultTable`] and
//! pivoted per benchmark into [`PivotTable`]s with optional percentages
//! relative to a baseline variant.
//!
//! # Example
//!
//! ```
//! use perfcmp_core::{build_pivots, CanonicalRecord, CompareConfig, ResultTable};
//!
//! let config = CompareConfig::default();
//! let mut table = ResultTable::new();
//! table.push(CanonicalRecord::new("ycsb", "uLayFS", "a", 3.0).unwrap());
//! table.push(CanonicalRecord::new("ycsb", "ext4", "a", 1.5).unwrap());
//!
//! let pivots = build_pivots(&table, &config.variants, config.baseline()).unwrap();
//! assert_eq!(pivots.get("ycsb").unwrap().percent("a", "ext4"), Some(200.0));
//! ```

pub mod config;
pub mod error;
pub mod order;
pub mod pivot;
pub mod record;
pub mod sink;
pub mod table;
pub mod units;

pub use config::{CompareConfig, DEFAULT_BASELINE};
pub use error::{PerfError, Result};
pub use order::{VariantPriority, DEFAULT_FALLBACK_PRIORITY};
pub use pivot::{build_pivot, build_pivots, PivotTable, Pivots, Series, PERCENT_SUFFIX};
pub use record::CanonicalRecord;
pub use sink::{ChartKind, ExportSink, PlotSink, PlotSpec};
pub use table::{BenchmarkGroup, ResultTable};
pub use units::{TimeUnit, UnitConfig};
