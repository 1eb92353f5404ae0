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

//! Raw, format-specific records produced by the readers.

use serde::Deserialize;
use std::path::PathBuf;

/// One raw record, tagged by the layout it was read from.
#[derive(Debug, Clone, PartialEq)]
pub enum RawRecord {
    /// Entry of a structured micro-benchmark report.
    Micro(MicroEntry),
    /// Totals scanned from one throughput log.
    Throughput(ThroughputSample),
    /// Per-transaction figures scanned from a transaction log.
    Transaction(TransactionSample),
}

/// One element of a micro-benchmark report's `benchmarks` array.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct MicroEntry {
    /// Compound name, e.g. `seq_write/4096` or `srmw/threads:4`.
    pub name: String,
    /// Throughput in bytes per second.
    #[serde(default)]
    pub bytes_per_second: Option<f64>,
    /// Throughput in items per second.
    #[serde(default)]
    pub items_per_second: Option<f64>,
    /// CPU time per iteration, in `time_unit`.
    #[serde(default)]
    pub cpu_time: Option<f64>,
    /// Unit of `cpu_time` (`ns` when absent).
    #[serde(default)]
    pub time_unit: Option<String>,
    /// Report the entry came from.
    #[serde(skip)]
    pub source: PathBuf,
}

impl MicroEntry {
    /// Create an entry with only a name; metric fields are set by the caller.
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            bytes_per_second: None,
            items_per_second: None,
            cpu_time: None,
            time_unit: None,
            source: PathBuf::new(),
        }
    }
}

/// Request and time totals of one workload's throughput log.
#[derive(Debug, Clone, PartialEq)]
pub struct ThroughputSample {
    /// Workload identifier (`a`..`f`).
    pub workload: String,
    /// Sum of all finished-request counts.
    pub total_requests: u64,
    /// Sum of all elapsed times, in microseconds.
    pub total_elapsed_us: f64,
    /// Log the totals were scanned from.
    pub source: PathBuf,
}

/// Success count and timing of one transaction type.
#[derive(Debug, Clone, PartialEq)]
pub struct TransactionStat {
    /// Display label, e.g. `New Order`.
    pub label: String,
    /// Successfully committed transactions.
    pub success_count: f64,
    /// Total time spent, in nanoseconds.
    pub timing_ns: f64,
}

/// All transaction types of one transaction log, in fixed type order.
#[derive(Debug, Clone, PartialEq)]
pub struct TransactionSample {
    /// One entry per known transaction type.
    pub stats: Vec<TransactionStat>,
    /// Log the figures were scanned from.
    pub source: PathBuf,
}
