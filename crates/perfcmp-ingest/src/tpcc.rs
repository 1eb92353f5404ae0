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

//! TPC-C-style transaction logs.
//!
//! One combined log per variant holds, for every transaction type, a success
//! count keyed by the type's index and a total timing keyed by its short name.

use crate::extract::{success_count, success_count_field, timing_field, timing_ns};
use crate::raw::{RawRecord, TransactionSample, TransactionStat};
use crate::reader::{read_artifact, variant_name, FormatReader, ReadOutput};
use perfcmp_core::error::checked_div;
use perfcmp_core::{CanonicalRecord, PerfError, Result};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Benchmark name of every transaction record.
pub const BENCHMARK: &str = "tpcc";

/// Label of the synthesized all-types record.
pub const MIX_LABEL: &str = "Mix";

/// Log location relative to the variant directory.
pub const LOG_PATH: [&str; 2] = ["start", "prog.log"];

const NANOS_PER_MILLI: f64 = 1_000_000.0;

/// A transaction type as it appears in the log.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TransactionType {
    /// Index used by the `[<index>] sc:` counters.
    pub index: usize,
    /// Short name used by the `<key>: timing =` lines.
    pub key: &'static str,
    /// Label used as the x bucket.
    pub label: &'static str,
}

/// Known transaction types, in log index order.
pub const TRANSACTION_TYPES: [TransactionType; 5] = [
    TransactionType { index: 0, key: "neword", label: "New Order" },
    TransactionType { index: 1, key: "payment", label: "Payment" },
    TransactionType { index: 2, key: "ordstat", label: "Order Status" },
    TransactionType { index: 3, key: "delivery", label: "Delivery" },
    TransactionType { index: 4, key: "slev", label: "Stock Level" },
];

/// Reader for `<variant>/start/prog.log`.
#[derive(Debug, Clone, Default)]
pub struct TransactionLogReader;

impl FormatReader for TransactionLogReader {
    fn name(&self) -> &'static str {
        "transaction log"
    }

    fn read(&self, location: &Path) -> Result<ReadOutput> {
        let variant = variant_name(location)?;
        let path: PathBuf = LOG_PATH.iter().fold(location.to_path_buf(), |p, c| p.join(c));
        let text = read_artifact(&path)?;
        let sample = parse_log(&text, &path)?;
        debug!(variant = %variant, types = sample.stats.len(), "read transaction log");
        Ok(ReadOutput {
            variant,
            records: vec![RawRecord::Transaction(sample)],
        })
    }
}

/// Extract every transaction type's figures from a log.
///
/// # Errors
///
/// [`PerfError::MissingField`] as soon as one type's counter or timing is
/// absent; a partial read would skew the `Mix` aggregate.
pub fn parse_log(text: &str, source: &Path) -> Result<TransactionSample> {
    let stats = TRANSACTION_TYPES
        .iter()
        .map(|tx| {
            let success = success_count(text, tx.index)
                .ok_or_else(|| PerfError::missing_field(source, success_count_field(tx.index)))?;
            let timing = timing_ns(text, tx.key)
                .ok_or_else(|| PerfError::missing_field(source, timing_field(tx.key)))?;
            Ok(TransactionStat {
                label: tx.label.to_string(),
                success_count: success,
                timing_ns: timing,
            })
        })
        .collect::<Result<Vec<_>>>()?;

    Ok(TransactionSample {
        stats,
        source: source.to_path_buf(),
    })
}

/// Throughput per type in k txns/s, followed by the synthesized `Mix` record.
pub fn normalize(variant: &str, sample: &TransactionSample) -> Result<Vec<CanonicalRecord>> {
    let mut records = Vec::with_capacity(sample.stats.len() + 1);
    let mut total_tx = 0.0;
    let mut total_ms = 0.0;

    for stat in &sample.stats {
        let time_ms = stat.timing_ns / NANOS_PER_MILLI;
        let metric = format!("{} k txns/s", stat.label);
        let y = checked_div(stat.success_count, time_ms, &sample.source, &metric)?;
        records.push(CanonicalRecord::new(BENCHMARK, variant, stat.label.as_str(), y)?);
        total_tx += stat.success_count;
        total_ms += time_ms;
    }

    let mix = checked_div(total_tx, total_ms, &sample.source, "Mix k txns/s")?;
    records.push(CanonicalRecord::new(BENCHMARK, variant, MIX_LABEL, mix)?);
    Ok(records)
}
