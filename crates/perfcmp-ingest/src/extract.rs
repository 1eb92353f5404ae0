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

//! Pattern-based field extraction from semi-structured logs.
//!
//! Each rule lives in its own small function so log-format drift shows up as
//! a failing unit test here rather than as a silently wrong chart.

use perfcmp_core::{PerfError, Result};
use regex::Regex;
use std::path::Path;
use std::sync::OnceLock;

/// Floating-point literal as printed by the workload drivers.
const FLOAT: &str = r"[0-9]+(?:\.[0-9]*)?(?:[eE][-+]?[0-9]+)?";

fn finished_requests_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"Finished ([0-9]+) requests").expect("valid regex"))
}

fn time_elapsed_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(&format!(r"Time elapsed: ({}) us", FLOAT)).expect("valid regex")
    })
}

/// Split a compound benchmark name on `/` and `:`.
///
/// # Examples
///
/// ```
/// use perfcmp_ingest::extract::split_name;
///
/// assert_eq!(split_name("srmw/threads:4"), vec!["srmw", "threads", "4"]);
/// ```
pub fn split_name(name: &str) -> Vec<&str> {
    name.split(['/', ':']).collect()
}

/// Sum of every `Finished <n> requests` occurrence.
///
/// # Errors
///
/// [`PerfError::MalformedInput`] if a count does not fit in `u64` or the
/// total overflows.
pub fn sum_finished_requests(text: &str, source: &Path) -> Result<u64> {
    finished_requests_re()
        .captures_iter(text)
        .try_fold(0u64, |total, c| {
            let n: u64 = c[1].parse().map_err(|_| {
                PerfError::malformed(source, format!("request count '{}' is out of range", &c[1]))
            })?;
            total.checked_add(n).ok_or_else(|| {
                PerfError::malformed(source, "total request count overflows u64")
            })
        })
}

/// Sum of every `Time elapsed: <t> us` occurrence.
///
/// # Errors
///
/// [`PerfError::MalformedInput`] if a value or the total is not finite.
pub fn sum_elapsed_us(text: &str, source: &Path) -> Result<f64> {
    let total = time_elapsed_re()
        .captures_iter(text)
        .try_fold(0.0f64, |total, c| {
            let t: f64 = c[1].parse().map_err(|_| {
                PerfError::malformed(source, format!("elapsed time '{}' is not a number", &c[1]))
            })?;
            Ok::<f64, PerfError>(total + t)
        })?;
    if !total.is_finite() {
        return Err(PerfError::malformed(source, "total elapsed time is not finite"));
    }
    Ok(total)
}

/// Literal prefix of the success-count pattern for a transaction index.
pub fn success_count_field(index: usize) -> String {
    format!("[{}] sc:", index)
}

/// Literal prefix of the timing pattern for a transaction key.
pub fn timing_field(key: &str) -> String {
    format!("{}: timing =", key)
}

/// First `[<index>] sc:<n> lt:` success count.
pub fn success_count(text: &str, index: usize) -> Option<f64> {
    let pattern = format!(
        r"{}([0-9]+) lt:",
        regex::escape(&success_count_field(index))
    );
    first_number(text, &pattern)
}

/// First `<key>: timing = <t> nanoseconds` value.
pub fn timing_ns(text: &str, key: &str) -> Option<f64> {
    let pattern = format!(
        r"{} ({}) nanoseconds",
        regex::escape(&timing_field(key)),
        FLOAT
    );
    first_number(text, &pattern)
}

fn first_number(text: &str, pattern: &str) -> Option<f64> {
    let re = Regex::new(pattern).ok()?;
    re.captures(text)?.get(1)?.as_str().parse().ok()
}
