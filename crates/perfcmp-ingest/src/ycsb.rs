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

//! YCSB-style throughput logs, one per workload.

use crate::extract::{sum_elapsed_us, sum_finished_requests};
use crate::raw::{RawRecord, ThroughputSample};
use crate::reader::{read_artifact, variant_name, FormatReader, ReadOutput};
use perfcmp_core::error::checked_div;
use perfcmp_core::{CanonicalRecord, PerfError, Result};
use std::path::Path;
use tracing::{debug, warn};

/// Benchmark name of every throughput record.
pub const BENCHMARK: &str = "ycsb";

/// Workloads looked up in each variant directory.
pub const DEFAULT_WORKLOADS: [&str; 6] = ["a", "b", "c", "d", "e", "f"];

/// Log file name of a workload.
pub fn log_file_name(workload: &str) -> String {
    format!("{}-run.log", workload)
}

/// Reader for `<variant>/<workload>-run.log`.
///
/// A missing workload log is skipped with a warning; the variant simply has
/// no row for that workload.
#[derive(Debug, Clone)]
pub struct ThroughputLogReader {
    workloads: Vec<String>,
}

impl Default for ThroughputLogReader {
    fn default() -> Self {
        Self::new(DEFAULT_WORKLOADS)
    }
}

impl ThroughputLogReader {
    /// Reader for a custom workload list.
    pub fn new<I, S>(workloads: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            workloads: workloads.into_iter().map(Into::into).collect(),
        }
    }

    /// Workloads in lookup order.
    pub fn workloads(&self) -> &[String] {
        &self.workloads
    }
}

impl FormatReader for ThroughputLogReader {
    fn name(&self) -> &'static str {
        "throughput log"
    }

    fn read(&self, location: &Path) -> Result<ReadOutput> {
        if !location.is_dir() {
            return Err(PerfError::MissingResult {
                path: location.to_path_buf(),
            });
        }
        let variant = variant_name(location)?;

        let mut records = Vec::new();
        for workload in &self.workloads {
            let path = location.join(log_file_name(workload));
            let text = match read_artifact(&path) {
                Ok(text) => text,
                Err(e) if e.is_recoverable() => {
                    warn!("{}", e);
                    continue;
                }
                Err(e) => return Err(e),
            };
            records.push(RawRecord::Throughput(ThroughputSample {
                workload: workload.clone(),
                total_requests: sum_finished_requests(&text, &path)?,
                total_elapsed_us: sum_elapsed_us(&text, &path)?,
                source: path,
            }));
        }

        debug!(variant = %variant, logs = records.len(), "read throughput logs");
        Ok(ReadOutput { variant, records })
    }
}

/// Throughput in Mops/s: total requests over total elapsed microseconds.
pub fn normalize(variant: &str, sample: &ThroughputSample) -> Result<Vec<CanonicalRecord>> {
    let y = checked_div(
        sample.total_requests as f64,
        sample.total_elapsed_us,
        &sample.source,
        "Mops/s (no 'Time elapsed' found)",
    )?;
    Ok(vec![CanonicalRecord::new(
        BENCHMARK,
        variant,
        sample.workload.as_str(),
        y,
    )?])
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn sample(requests: u64, elapsed: f64) -> ThroughputSample {
        ThroughputSample {
            workload: "a".to_string(),
            total_requests: requests,
            total_elapsed_us: elapsed,
            source: PathBuf::from("NOVA/a-run.log"),
        }
    }

    #[test]
    fn test_normalize() {
        let recs = normalize("NOVA", &sample(3_000_000, 1_500_000.0)).unwrap();
        assert_eq!(recs[0].benchmark(), BENCHMARK);
        assert_eq!(recs[0].x(), "a");
        assert_eq!(recs[0].y(), 2.0);
    }

    #[test]
    fn test_zero_elapsed_is_error() {
        let err = normalize("NOVA", &sample(10, 0.0)).unwrap_err();
        assert!(matches!(err, PerfError::DivisionByZero { .. }));
        assert!(err.to_string().contains("NOVA/a-run.log"));
    }

    #[test]
    fn test_log_file_name() {
        assert_eq!(log_file_name("c"), "c-run.log");
    }

    #[test]
    fn test_custom_workloads() {
        let reader = ThroughputLogReader::new(["load", "a"]);
        assert_eq!(reader.workloads(), &["load", "a"]);
        assert_eq!(ThroughputLogReader::default().workloads().len(), 6);
    }
}
