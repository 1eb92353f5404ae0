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

//! Reading and normalizing on-disk result trees, one family at a time.

use perfcmp_core::{PerfError, UnitConfig, VariantPriority};
use perfcmp_ingest::{discover_variants, Family};
use perfcmp_test::{MicroFixture, ResultTree};

fn normalized(family: Family, tree: &ResultTree, variant: &str) -> Vec<(String, String, f64)> {
    let out = family.reader().read(&tree.root().join(variant)).unwrap();
    family
        .normalizer(UnitConfig::default())
        .normalize_all(&out.variant, &out.records)
        .unwrap()
        .into_iter()
        .map(|r| (r.benchmark().to_string(), r.x().to_string(), r.y()))
        .collect()
}

// =============================================================================
// Micro-benchmark reports
// =============================================================================

#[test]
fn test_single_thread_report() {
    let tree = ResultTree::new();
    tree.micro_report(
        "uLayFS",
        &[
            MicroFixture::bytes("seq_write/4096", 1073741824.0),
            MicroFixture::bytes("seq_write/100", 536870912.0),
        ],
    );

    let recs = normalized(Family::MicroSt, &tree, "uLayFS");
    assert_eq!(recs[0], ("seq_write".to_string(), "4K".to_string(), 1.0));
    assert_eq!(recs[1], ("seq_write".to_string(), "100".to_string(), 0.5));
}

#[test]
fn test_multi_thread_report_drops_zero_bucket() {
    let tree = ResultTree::new();
    tree.micro_report(
        "ext4",
        &[
            MicroFixture::items("srmw/threads:1", 9000000.0),
            MicroFixture::items("srmw/threads:3", 2000000.0),
            MicroFixture::items("append/threads:4", 4000000.0),
        ],
    );

    let recs = normalized(Family::MicroMt, &tree, "ext4");
    assert_eq!(
        recs,
        vec![
            ("srmw".to_string(), "2".to_string(), 2.0),
            ("append".to_string(), "4".to_string(), 4.0),
        ]
    );
}

#[test]
fn test_metadata_report() {
    let tree = ResultTree::new();
    tree.micro_report("NOVA", &[MicroFixture::cpu_time("meta/64", 2500.0)]);

    let recs = normalized(Family::MicroMeta, &tree, "NOVA");
    assert_eq!(recs, vec![("meta".to_string(), "64".to_string(), 2.5)]);
}

#[test]
fn test_missing_report_is_recoverable() {
    let tree = ResultTree::new();
    tree.variant("ext4-DAX");

    let err = Family::MicroSt
        .reader()
        .read(&tree.root().join("ext4-DAX"))
        .unwrap_err();
    assert!(matches!(err, PerfError::MissingResult { .. }));
    assert!(err.is_recoverable());
}

#[test]
fn test_report_without_benchmarks_is_malformed() {
    let tree = ResultTree::new();
    tree.file("uLayFS", "result.json", r#"{"context": {}}"#);

    let err = Family::MicroSt
        .reader()
        .read(&tree.root().join("uLayFS"))
        .unwrap_err();
    assert!(matches!(err, PerfError::MalformedInput { .. }));
    assert!(err.to_string().contains("result.json"));
}

// =============================================================================
// Throughput logs
// =============================================================================

#[test]
fn test_ycsb_sums_all_occurrences() {
    let tree = ResultTree::new();
    tree.ycsb_log("uLayFS", "a", &[500, 1500], &[1000.0, 1000.0]);

    let recs = normalized(Family::Ycsb, &tree, "uLayFS");
    assert_eq!(recs, vec![("ycsb".to_string(), "a".to_string(), 1.0)]);
}

#[test]
fn test_ycsb_missing_workload_is_skipped() {
    let tree = ResultTree::new();
    tree.ycsb_log("NOVA", "a", &[1000], &[500.0]);
    tree.ycsb_log("NOVA", "c", &[3000], &[1000.0]);

    let recs = normalized(Family::Ycsb, &tree, "NOVA");
    let workloads: Vec<_> = recs.iter().map(|(_, x, _)| x.as_str()).collect();
    assert_eq!(workloads, vec!["a", "c"]);
}

#[test]
fn test_ycsb_missing_elapsed_time_divides_by_zero() {
    let tree = ResultTree::new();
    tree.ycsb_log("ext4", "b", &[1000], &[]);

    let out = Family::Ycsb.reader().read(&tree.root().join("ext4")).unwrap();
    let err = Family::Ycsb
        .normalizer(UnitConfig::default())
        .normalize_all(&out.variant, &out.records)
        .unwrap_err();
    assert!(matches!(err, PerfError::DivisionByZero { .. }));
    assert!(err.to_string().contains("b-run.log"));
}

#[test]
fn test_ycsb_request_count_overflow_is_malformed() {
    let tree = ResultTree::new();
    tree.ycsb_log("ext4", "a", &[u64::MAX, 1], &[1000.0]);

    let err = Family::Ycsb
        .reader()
        .read(&tree.root().join("ext4"))
        .unwrap_err();
    assert!(matches!(err, PerfError::MalformedInput { .. }));
    assert!(!err.is_recoverable());
    assert!(err.to_string().contains("a-run.log"));
}

// =============================================================================
// Transaction logs
// =============================================================================

#[test]
fn test_tpcc_types_and_mix() {
    let tree = ResultTree::new();
    tree.tpcc_log(
        "uLayFS",
        &[(10, 5e6), (20, 5e6), (4, 2e6), (6, 3e6), (8, 4e6)],
    );

    let recs = normalized(Family::Tpcc, &tree, "uLayFS");
    let labels: Vec<_> = recs.iter().map(|(_, x, _)| x.as_str()).collect();
    assert_eq!(
        labels,
        vec!["New Order", "Payment", "Order Status", "Delivery", "Stock Level", "Mix"]
    );
    assert_eq!(recs[0].2, 2.0);
    assert_eq!(recs[1].2, 4.0);
    assert_eq!(recs[5].2, 48.0 / 19.0);
}

#[test]
fn test_tpcc_missing_field_names_artifact_and_field() {
    let tree = ResultTree::new();
    tree.tpcc_log("NOVA", &[(10, 5e6), (20, 5e6)]);

    let err = Family::Tpcc
        .reader()
        .read(&tree.root().join("NOVA"))
        .unwrap_err();
    let msg = err.to_string();
    assert!(matches!(err, PerfError::MissingField { .. }));
    assert!(msg.contains("[2] sc:"));
    assert!(msg.contains("prog.log"));
}

// =============================================================================
// Discovery
// =============================================================================

#[test]
fn test_discovery_follows_priority() {
    let tree = ResultTree::new();
    for variant in ["NOVA", "btrfs", "ext4", "uLayFS", "ext4-DAX"] {
        tree.variant(variant);
    }
    tree.file("uLayFS", "notes.txt", "not a variant");

    let found = discover_variants(tree.root(), &VariantPriority::default()).unwrap();
    let names: Vec<_> = found
        .iter()
        .map(|p| p.file_name().unwrap().to_str().unwrap())
        .collect();
    assert_eq!(names, vec!["uLayFS", "ext4", "ext4-DAX", "NOVA", "btrfs"]);
}
