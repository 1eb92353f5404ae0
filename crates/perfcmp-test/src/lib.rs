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

//! Shared fixtures for perfcmp tests.
//!
//! [`ResultTree`] lays out a temporary result root the way benchmark runs
//! leave it on disk: one directory per variant, holding a micro-benchmark
//! report, per-workload throughput logs or a transaction log.
//!
//! ```rust
//! use perfcmp_test::{MicroFixture, ResultTree};
//!
//! let tree = ResultTree::new();
//! tree.micro_report("uLayFS", &[MicroFixture::bytes("seq_write/4096", 1073741824.0)]);
//! tree.ycsb_log("NOVA", "a", &[1000], &[500.0]);
//! assert!(tree.root().join("uLayFS/result.json").exists());
//! ```

use serde_json::{json, Map, Value};
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Transaction keys in log index order.
pub const TPCC_KEYS: [&str; 5] = ["neword", "payment", "ordstat", "delivery", "slev"];

/// One entry of a micro-benchmark report.
#[derive(Debug, Clone)]
pub struct MicroFixture {
    /// Compound benchmark name.
    pub name: String,
    /// Metric field name.
    pub field: &'static str,
    /// Metric value.
    pub value: f64,
}

impl MicroFixture {
    /// Entry with `bytes_per_second`.
    pub fn bytes(name: &str, value: f64) -> Self {
        Self::new(name, "bytes_per_second", value)
    }

    /// Entry with `items_per_second`.
    pub fn items(name: &str, value: f64) -> Self {
        Self::new(name, "items_per_second", value)
    }

    /// Entry with `cpu_time` in nanoseconds.
    pub fn cpu_time(name: &str, value: f64) -> Self {
        Self::new(name, "cpu_time", value)
    }

    fn new(name: &str, field: &'static str, value: f64) -> Self {
        Self {
            name: name.to_string(),
            field,
            value,
        }
    }
}

/// Render a micro-benchmark report.
pub fn micro_json(entries: &[MicroFixture]) -> String {
    let benchmarks: Vec<Value> = entries
        .iter()
        .map(|e| {
            let mut obj = Map::new();
            obj.insert("name".to_string(), json!(e.name));
            obj.insert("run_type".to_string(), json!("iteration"));
            obj.insert("iterations".to_string(), json!(1000));
            obj.insert("time_unit".to_string(), json!("ns"));
            obj.insert(e.field.to_string(), json!(e.value));
            Value::Object(obj)
        })
        .collect();
    json!({
        "context": { "host_name": "bench", "num_cpus": 16 },
        "benchmarks": benchmarks,
    })
    .to_string()
}

/// Render a throughput log: one `Finished` line per request count, one
/// `Time elapsed` line per elapsed value.
pub fn ycsb_log_text(requests: &[u64], elapsed_us: &[f64]) -> String {
    let mut log = String::from("Loading workload...\n");
    for (thread, n) in requests.iter().enumerate() {
        log.push_str(&format!("[thread {}] Finished {} requests\n", thread, n));
    }
    for t in elapsed_us {
        log.push_str(&format!("Time elapsed: {} us\n", t));
    }
    log
}

/// Render a transaction log from `(success_count, timing_ns)` per type.
pub fn tpcc_log_text(stats: &[(u64, f64)]) -> String {
    let mut log = String::from("***************************************\n<Raw Results>\n");
    for (i, (success, _)) in stats.iter().enumerate() {
        log.push_str(&format!("  [{}] sc:{} lt:0  rt:0  fl:0 avg_rt: 0.0 (5)\n", i, success));
    }
    log.push_str("<Raw Results2(sum ver.)>\n");
    for (key, (_, timing)) in TPCC_KEYS.iter().zip(stats) {
        log.push_str(&format!("{}: timing = {:.6} nanoseconds\n", key, timing));
    }
    log
}

/// A temporary result root.
#[derive(Debug)]
pub struct ResultTree {
    dir: TempDir,
}

impl Default for ResultTree {
    fn default() -> Self {
        Self::new()
    }
}

impl ResultTree {
    /// Create an empty result root.
    pub fn new() -> Self {
        Self {
            dir: tempfile::tempdir().expect("Failed to create temp dir"),
        }
    }

    /// Root directory.
    pub fn root(&self) -> &Path {
        self.dir.path()
    }

    /// Create (if needed) and return a variant directory.
    pub fn variant(&self, variant: &str) -> PathBuf {
        let dir = self.root().join(variant);
        fs::create_dir_all(&dir).expect("Failed to create variant dir");
        dir
    }

    /// Write an arbitrary file below a variant directory.
    pub fn file(&self, variant: &str, relative: &str, content: &str) -> PathBuf {
        let path = self.variant(variant).join(relative);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent dir");
        }
        fs::write(&path, content).expect("Failed to write fixture");
        path
    }

    /// Write `<variant>/result.json`.
    pub fn micro_report(&self, variant: &str, entries: &[MicroFixture]) -> PathBuf {
        self.file(variant, "result.json", &micro_json(entries))
    }

    /// Write `<variant>/<workload>-run.log`.
    pub fn ycsb_log(
        &self,
        variant: &str,
        workload: &str,
        requests: &[u64],
        elapsed_us: &[f64],
    ) -> PathBuf {
        self.file(
            variant,
            &format!("{}-run.log", workload),
            &ycsb_log_text(requests, elapsed_us),
        )
    }

    /// Write `<variant>/start/prog.log`.
    pub fn tpcc_log(&self, variant: &str, stats: &[(u64, f64)]) -> PathBuf {
        self.file(variant, "start/prog.log", &tpcc_log_text(stats))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_micro_json_shape() {
        let text = micro_json(&[MicroFixture::items("srmw/threads:2", 5.0)]);
        let doc: Value = serde_json::from_str(&text).unwrap();
        assert_eq!(doc["benchmarks"][0]["name"], "srmw/threads:2");
        assert_eq!(doc["benchmarks"][0]["items_per_second"], 5.0);
    }

    #[test]
    fn test_tpcc_log_text() {
        let log = tpcc_log_text(&[(10, 5e6), (20, 5e6)]);
        assert!(log.contains("[1] sc:20 lt:"));
        assert!(log.contains("payment: timing = 5000000.000000 nanoseconds"));
    }

    #[test]
    fn test_tree_layout() {
        let tree = ResultTree::new();
        let log = tree.tpcc_log("ext4", &[(1, 1.0)]);
        assert!(log.ends_with("start/prog.log"));
        assert!(log.exists());
    }
}
