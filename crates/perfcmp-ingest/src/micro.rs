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

//! Structured micro-benchmark reports.
//!
//! A report is a JSON document whose `benchmarks` array holds entries with a
//! compound `name` and numeric metric fields. Which field is read, and how
//! the name is split into benchmark and x bucket, depends on the profile.

use crate::extract::split_name;
use crate::raw::{MicroEntry, RawRecord};
use crate::reader::{read_artifact, variant_name, FormatReader, ReadOutput};
use perfcmp_core::error::checked_div;
use perfcmp_core::units::format_bytes;
use perfcmp_core::{CanonicalRecord, PerfError, Result, TimeUnit, UnitConfig};
use serde_json::Value;
use std::path::Path;
use tracing::debug;

/// File name of the report inside each variant directory.
pub const REPORT_FILE: &str = "result.json";

/// Key of the entry array in a report.
pub const BENCHMARKS_KEY: &str = "benchmarks";

/// Benchmark whose thread parameter counts one extra thread.
pub const SRMW: &str = "srmw";

/// How micro-benchmark entries map onto canonical records.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MicroProfile {
    /// I/O size sweep: `bytes_per_second` in GiB/s, x = segment 1 as a byte bucket.
    SingleThread,
    /// Thread sweep: `items_per_second` in Mops/s, x = last segment.
    MultiThread,
    /// Transaction-history sweep: `cpu_time` in µs, x = segment 1.
    Metadata,
}

/// Reader for `<variant>/result.json`.
#[derive(Debug, Clone, Default)]
pub struct MicroReader;

impl FormatReader for MicroReader {
    fn name(&self) -> &'static str {
        "micro-benchmark report"
    }

    fn read(&self, location: &Path) -> Result<ReadOutput> {
        let variant = variant_name(location)?;
        let path = location.join(REPORT_FILE);
        let text = read_artifact(&path)?;
        let records = parse_report(&text, &path)?
            .into_iter()
            .map(RawRecord::Micro)
            .collect::<Vec<_>>();
        debug!(variant = %variant, entries = records.len(), "read micro-benchmark report");
        Ok(ReadOutput { variant, records })
    }
}

/// Parse the entries of a report.
///
/// # Errors
///
/// [`PerfError::MalformedInput`] if the text is not JSON, has no
/// `benchmarks` array, or an entry has no string `name`.
pub fn parse_report(text: &str, source: &Path) -> Result<Vec<MicroEntry>> {
    let doc: Value = serde_json::from_str(text)
        .map_err(|e| PerfError::malformed(source, format!("invalid JSON: {}", e)))?;

    let entries = doc
        .get(BENCHMARKS_KEY)
        .and_then(Value::as_array)
        .ok_or_else(|| {
            PerfError::malformed(source, format!("missing '{}' array", BENCHMARKS_KEY))
        })?;

    entries
        .iter()
        .enumerate()
        .map(|(i, entry)| {
            let mut entry: MicroEntry = serde_json::from_value(entry.clone()).map_err(|e| {
                PerfError::malformed(source, format!("{}[{}]: {}", BENCHMARKS_KEY, i, e))
            })?;
            entry.source = source.to_path_buf();
            Ok(entry)
        })
        .collect()
}

/// Normalize one entry under `profile`.
///
/// Returns no record when the entry falls into a dropped bucket (the
/// zero-thread bucket of the multi-thread profile).
pub fn normalize(
    profile: MicroProfile,
    units: &UnitConfig,
    variant: &str,
    entry: &MicroEntry,
) -> Result<Vec<CanonicalRecord>> {
    let segments = split_name(&entry.name);
    let benchmark = segments[0];
    let (x, y) = match profile {
        MicroProfile::SingleThread => {
            let raw = param(&segments, Some(1), entry)?;
            let bytes: u64 = raw.parse().map_err(|_| {
                PerfError::malformed(
                    &entry.source,
                    format!("I/O size '{}' in '{}' is not an integer", raw, entry.name),
                )
            })?;
            let rate = metric(entry, "bytes_per_second", entry.bytes_per_second)?;
            (
                format_bytes(bytes),
                checked_div(rate, units.gib_divisor, &entry.source, "GiB/s")?,
            )
        }
        MicroProfile::MultiThread => {
            let raw = param(&segments, segments.len().checked_sub(1), entry)?;
            let x = if benchmark == SRMW {
                let threads: i64 = raw.parse().map_err(|_| {
                    PerfError::malformed(
                        &entry.source,
                        format!("thread count '{}' in '{}' is not an integer", raw, entry.name),
                    )
                })?;
                (threads - 1).to_string()
            } else {
                raw.to_string()
            };
            if x == "0" {
                debug!(name = %entry.name, variant, "dropping zero-thread bucket");
                return Ok(Vec::new());
            }
            let rate = metric(entry, "items_per_second", entry.items_per_second)?;
            (x, checked_div(rate, units.mops_divisor, &entry.source, "Mops/s")?)
        }
        MicroProfile::Metadata => {
            let x = param(&segments, Some(1), entry)?.to_string();
            let unit = match entry.time_unit.as_deref() {
                None => TimeUnit::default(),
                Some(u) => TimeUnit::parse(u).ok_or_else(|| {
                    PerfError::malformed(
                        &entry.source,
                        format!("unknown time_unit '{}' in '{}'", u, entry.name),
                    )
                })?,
            };
            let cpu_time = metric(entry, "cpu_time", entry.cpu_time)?;
            (x, unit.to_micros(cpu_time))
        }
    };

    Ok(vec![CanonicalRecord::new(benchmark, variant, x, y)?])
}

/// Parameter segment `idx` of a compound name; segment 0 never qualifies.
fn param<'a>(segments: &[&'a str], idx: Option<usize>, entry: &MicroEntry) -> Result<&'a str> {
    idx.filter(|&i| i > 0)
        .and_then(|i| segments.get(i).copied())
        .ok_or_else(|| {
            PerfError::malformed(
                &entry.source,
                format!("benchmark name '{}' has no parameter segment", entry.name),
            )
        })
}

fn metric(entry: &MicroEntry, field: &str, value: Option<f64>) -> Result<f64> {
    value.ok_or_else(|| {
        PerfError::malformed(
            &entry.source,
            format!("entry '{}' has no '{}' field", entry.name, field),
        )
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn entry(name: &str) -> MicroEntry {
        MicroEntry::named(name)
    }

    fn st(bytes_per_second: f64, name: &str) -> Result<Vec<CanonicalRecord>> {
        let mut e = entry(name);
        e.bytes_per_second = Some(bytes_per_second);
        normalize(MicroProfile::SingleThread, &UnitConfig::default(), "uLayFS", &e)
    }

    fn mt(items_per_second: f64, name: &str) -> Result<Vec<CanonicalRecord>> {
        let mut e = entry(name);
        e.items_per_second = Some(items_per_second);
        normalize(MicroProfile::MultiThread, &UnitConfig::default(), "uLayFS", &e)
    }

    #[test]
    fn test_single_thread_gib() {
        let recs = st(1_073_741_824.0, "seq_write/4096").unwrap();
        assert_eq!(recs.len(), 1);
        assert_eq!(recs[0].benchmark(), "seq_write");
        assert_eq!(recs[0].x(), "4K");
        assert_eq!(recs[0].y(), 1.0);
    }

    #[test]
    fn test_single_thread_odd_size_kept_verbatim() {
        let recs = st(0.0, "seq_write/100/real_time").unwrap();
        assert_eq!(recs[0].x(), "100");
    }

    #[test]
    fn test_multi_thread_mops() {
        let recs = mt(2_000_000.0, "append/threads:4").unwrap();
        assert_eq!(recs[0].benchmark(), "append");
        assert_eq!(recs[0].x(), "4");
        assert_eq!(recs[0].y(), 2.0);
    }

    #[test]
    fn test_srmw_decrements_threads() {
        let recs = mt(1_000_000.0, "srmw/threads:3").unwrap();
        assert_eq!(recs[0].x(), "2");
    }

    #[test]
    fn test_srmw_single_thread_dropped() {
        assert!(mt(1_000_000.0, "srmw/threads:1").unwrap().is_empty());
    }

    #[test]
    fn test_srmw_non_integer_threads() {
        let err = mt(1.0, "srmw/threads:many").unwrap_err();
        assert!(matches!(err, PerfError::MalformedInput { .. }));
    }

    #[test]
    fn test_metadata_latency() {
        let mut e = entry("tx_history/64");
        e.cpu_time = Some(2500.0);
        let recs = normalize(MicroProfile::Metadata, &UnitConfig::default(), "ext4", &e).unwrap();
        assert_eq!(recs[0].x(), "64");
        assert_eq!(recs[0].y(), 2.5);

        e.time_unit = Some("ms".to_string());
        let recs = normalize(MicroProfile::Metadata, &UnitConfig::default(), "ext4", &e).unwrap();
        assert_eq!(recs[0].y(), 2_500_000.0);

        e.time_unit = Some("weeks".to_string());
        assert!(normalize(MicroProfile::Metadata, &UnitConfig::default(), "ext4", &e).is_err());
    }

    #[test]
    fn test_missing_metric_is_malformed() {
        let e = entry("seq_write/4096");
        let err =
            normalize(MicroProfile::SingleThread, &UnitConfig::default(), "ext4", &e).unwrap_err();
        assert!(err.to_string().contains("bytes_per_second"));
    }

    #[test]
    fn test_missing_parameter_is_malformed() {
        assert!(st(1.0, "seq_write").is_err());
        assert!(mt(1.0, "append").is_err());
    }

    #[test]
    fn test_zero_divisor() {
        let mut e = entry("seq_write/4096");
        e.bytes_per_second = Some(1.0);
        let units = UnitConfig {
            gib_divisor: 0.0,
            ..UnitConfig::default()
        };
        let err = normalize(MicroProfile::SingleThread, &units, "ext4", &e).unwrap_err();
        assert!(matches!(err, PerfError::DivisionByZero { .. }));
    }

    #[test]
    fn test_parse_report() {
        let json = r#"{
            "context": {"num_cpus": 8},
            "benchmarks": [
                {"name": "seq_write/4096", "bytes_per_second": 1.5e9, "time_unit": "ns"},
                {"name": "seq_write/8192", "bytes_per_second": 2.0e9}
            ]
        }"#;
        let source = PathBuf::from("uLayFS/result.json");
        let entries = parse_report(json, &source).unwrap();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].time_unit.as_deref(), Some("ns"));
        assert_eq!(entries[1].source, source);
    }

    #[test]
    fn test_parse_report_without_array() {
        let err = parse_report(r#"{"context": {}}"#, Path::new("r.json")).unwrap_err();
        assert!(err.to_string().contains("missing 'benchmarks' array"));

        let err = parse_report(r#"{"benchmarks": 3}"#, Path::new("r.json")).unwrap_err();
        assert!(matches!(err, PerfError::MalformedInput { .. }));

        let err = parse_report("not json", Path::new("r.json")).unwrap_err();
        assert!(err.to_string().contains("invalid JSON"));
    }

    #[test]
    fn test_parse_report_entry_without_name() {
        let err = parse_report(r#"{"benchmarks": [{"cpu_time": 1.0}]}"#, Path::new("r.json"))
            .unwrap_err();
        assert!(err.to_string().contains("benchmarks[0]"));
    }
}
