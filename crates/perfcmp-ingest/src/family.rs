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

//! Pipeline families and their reader/normalizer dispatch table.

use crate::micro::{MicroProfile, MicroReader};
use crate::normalize::Normalizer;
use crate::reader::FormatReader;
use crate::tpcc::TransactionLogReader;
use crate::ycsb::ThroughputLogReader;
use perfcmp_core::{ChartKind, PlotSpec, UnitConfig};
use std::fmt;
use std::str::FromStr;

/// One kind of benchmark campaign, tied to one input layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Family {
    /// Single-threaded I/O size sweep (micro-benchmark report).
    MicroSt,
    /// Multi-threaded scalability sweep (micro-benchmark report).
    MicroMt,
    /// Metadata latency sweep (micro-benchmark report).
    MicroMeta,
    /// YCSB workloads (throughput logs).
    Ycsb,
    /// TPC-C transaction mix (transaction log).
    Tpcc,
}

impl Family {
    /// Every family, in CLI order.
    pub const ALL: [Family; 5] = [
        Family::MicroSt,
        Family::MicroMt,
        Family::MicroMeta,
        Family::Ycsb,
        Family::Tpcc,
    ];

    /// Command-line name.
    pub fn name(self) -> &'static str {
        match self {
            Family::MicroSt => "micro-st",
            Family::MicroMt => "micro-mt",
            Family::MicroMeta => "micro-meta",
            Family::Ycsb => "ycsb",
            Family::Tpcc => "tpcc",
        }
    }

    /// Reader for this family's input layout.
    pub fn reader(self) -> Box<dyn FormatReader> {
        match self {
            Family::MicroSt | Family::MicroMt | Family::MicroMeta => Box::new(MicroReader),
            Family::Ycsb => Box::new(ThroughputLogReader::default()),
            Family::Tpcc => Box::new(TransactionLogReader),
        }
    }

    /// Normalizer configured for this family.
    pub fn normalizer(self, units: UnitConfig) -> Normalizer {
        match self.micro_profile() {
            Some(profile) => Normalizer::micro(profile, units),
            None => Normalizer::logs(units),
        }
    }

    /// Micro profile, for families fed by micro-benchmark reports.
    pub fn micro_profile(self) -> Option<MicroProfile> {
        match self {
            Family::MicroSt => Some(MicroProfile::SingleThread),
            Family::MicroMt => Some(MicroProfile::MultiThread),
            Family::MicroMeta => Some(MicroProfile::Metadata),
            Family::Ycsb | Family::Tpcc => None,
        }
    }

    /// Chart kind and axis labels.
    pub fn plot_spec(self) -> PlotSpec {
        match self {
            Family::MicroSt => {
                PlotSpec::new(ChartKind::Line, "I/O Size (Bytes)", "Throughput (GiB/s)")
            }
            Family::MicroMt => {
                PlotSpec::new(ChartKind::Line, "Number of Threads", "Throughput (Mops/s)")
            }
            Family::MicroMeta => {
                PlotSpec::new(ChartKind::Line, "Transaction History Length", "Latency (us)")
            }
            Family::Ycsb => PlotSpec::new(ChartKind::Bar, "Workload", "Throughput (Mops/s)"),
            Family::Tpcc => {
                PlotSpec::new(ChartKind::Bar, "Transaction Type", "Throughput (k txns/s)")
            }
        }
    }
}

impl fmt::Display for Family {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Family {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Family::ALL
            .into_iter()
            .find(|f| f.name() == s)
            .ok_or_else(|| {
                let known: Vec<_> = Family::ALL.iter().map(|f| f.name()).collect();
                format!("unknown family '{}', expected one of: {}", s, known.join(", "))
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_trip_names() {
        for family in Family::ALL {
            assert_eq!(family.name().parse::<Family>().unwrap(), family);
        }
        assert!("bogus".parse::<Family>().unwrap_err().contains("micro-st"));
    }

    #[test]
    fn test_dispatch() {
        assert_eq!(Family::MicroMt.reader().name(), "micro-benchmark report");
        assert_eq!(Family::Ycsb.reader().name(), "throughput log");
        assert_eq!(Family::Tpcc.reader().name(), "transaction log");
        assert_eq!(Family::Tpcc.micro_profile(), None);
        assert_eq!(Family::MicroMeta.micro_profile(), Some(MicroProfile::Metadata));
    }

    #[test]
    fn test_plot_specs() {
        assert_eq!(Family::Ycsb.plot_spec().kind, ChartKind::Bar);
        assert_eq!(Family::MicroSt.plot_spec().kind, ChartKind::Line);
        assert!(Family::Tpcc.plot_spec().y_label.contains("k txns/s"));
    }
}
