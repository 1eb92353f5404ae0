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

//! End-to-end runs over on-disk result trees.

use perfcmp::{load_table, CompareConfig, Family, PerfError, Pipeline, PipelineError, RESULT_CSV};
use perfcmp_test::{MicroFixture, ResultTree};
use std::fs;

fn no_plots(config: CompareConfig) -> Pipeline {
    Pipeline::new(config).without_plots()
}

#[test]
fn test_single_thread_run_writes_outputs() {
    let tree = ResultTree::new();
    tree.micro_report(
        "uLayFS",
        &[
            MicroFixture::bytes("seq_write/4096", 2147483648.0),
            MicroFixture::bytes("seq_write/8192", 2147483648.0),
        ],
    );
    tree.micro_report(
        "ext4",
        &[
            MicroFixture::bytes("seq_write/4096", 1073741824.0),
            MicroFixture::bytes("seq_write/8192", 536870912.0),
        ],
    );

    let report = Pipeline::new(CompareConfig::default())
        .run(Family::MicroSt, tree.root())
        .unwrap();

    let seq = report.pivots.get("seq_write").unwrap();
    assert_eq!(seq.variants(), ["uLayFS".to_string(), "ext4".to_string()]);
    assert_eq!(seq.value("4K", "uLayFS"), Some(2.0));
    assert_eq!(seq.percent("8K", "ext4"), Some(400.0));

    assert!(tree.root().join(RESULT_CSV).exists());
    let text = fs::read_to_string(tree.root().join("seq_write.txt")).unwrap();
    assert!(text.contains("ext4%"));
    let svg = fs::read_to_string(tree.root().join("seq_write.svg")).unwrap();
    assert!(svg.contains("<svg"));
}

#[test]
fn test_exported_table_reloads() {
    let tree = ResultTree::new();
    tree.ycsb_log("uLayFS", "a", &[2000], &[1000.0]);
    tree.ycsb_log("NOVA", "a", &[1000], &[1000.0]);

    let report = no_plots(CompareConfig::default())
        .run(Family::Ycsb, tree.root())
        .unwrap();
    let reloaded = load_table(&tree.root().join(RESULT_CSV)).unwrap();
    assert_eq!(reloaded, report.table);
}

#[test]
fn test_output_dir_override() {
    let tree = ResultTree::new();
    let out = tempfile::tempdir().unwrap();
    tree.ycsb_log("ext4", "a", &[1000], &[1000.0]);

    no_plots(CompareConfig::default())
        .output_dir(out.path().join("cmp"))
        .run(Family::Ycsb, tree.root())
        .unwrap();

    assert!(out.path().join("cmp").join(RESULT_CSV).exists());
    assert!(out.path().join("cmp").join("ycsb.txt").exists());
    assert!(!tree.root().join(RESULT_CSV).exists());
}

#[test]
fn test_missing_variant_is_skipped() {
    let tree = ResultTree::new();
    tree.tpcc_log(
        "uLayFS",
        &[(10, 5e6), (20, 5e6), (4, 2e6), (6, 3e6), (8, 4e6)],
    );
    tree.variant("NOVA");

    let report = no_plots(CompareConfig::default())
        .run(Family::Tpcc, tree.root())
        .unwrap();
    let tpcc = report.pivots.get("tpcc").unwrap();
    assert_eq!(tpcc.variants(), ["uLayFS".to_string()]);
    assert_eq!(tpcc.rows().last().map(String::as_str), Some("Mix"));
}

#[test]
fn test_missing_baseline_has_no_percentages() {
    let tree = ResultTree::new();
    tree.micro_report("ext4", &[MicroFixture::items("append/threads:2", 1e6)]);
    tree.micro_report("NOVA", &[MicroFixture::items("append/threads:2", 2e6)]);

    let report = no_plots(CompareConfig::default())
        .run(Family::MicroMt, tree.root())
        .unwrap();
    let append = report.pivots.get("append").unwrap();
    assert!(!append.has_relative());
    assert_eq!(append.value("2", "NOVA"), Some(2.0));
}

#[test]
fn test_custom_baseline() {
    let tree = ResultTree::new();
    tree.micro_report("ext4", &[MicroFixture::cpu_time("meta/8", 1000.0)]);
    tree.micro_report("NOVA", &[MicroFixture::cpu_time("meta/8", 4000.0)]);

    let config = CompareConfig::default().with_baseline(Some("NOVA"));
    let report = no_plots(config).run(Family::MicroMeta, tree.root()).unwrap();
    assert_eq!(report.pivots.get("meta").unwrap().percent("8", "ext4"), Some(400.0));
}

#[test]
fn test_fatal_error_writes_nothing() {
    let tree = ResultTree::new();
    tree.micro_report("uLayFS", &[MicroFixture::bytes("seq_write/4096", 1e9)]);
    tree.file("ext4", "result.json", "{ not json");

    let err = no_plots(CompareConfig::default())
        .run(Family::MicroSt, tree.root())
        .unwrap_err();
    assert!(matches!(
        err,
        PipelineError::Perf(PerfError::MalformedInput { .. })
    ));
    assert!(!tree.root().join(RESULT_CSV).exists());
}

#[test]
fn test_empty_root_has_no_results() {
    let tree = ResultTree::new();
    tree.variant("uLayFS");

    let err = no_plots(CompareConfig::default())
        .run(Family::Ycsb, tree.root())
        .unwrap_err();
    assert!(matches!(err, PipelineError::NoResults { .. }));
}
