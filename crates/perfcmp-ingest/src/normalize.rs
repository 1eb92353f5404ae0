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

//! Raw record to canonical record conversion.

use crate::micro::{self, MicroProfile};
use crate::raw::RawRecord;
use crate::{tpcc, ycsb};
use perfcmp_core::{CanonicalRecord, PerfError, Result, UnitConfig};

/// Applies the per-format extraction and unit rules.
///
/// # Examples
///
/// ```
/// use perfcmp_core::UnitConfig;
/// use perfcmp_ingest::micro::MicroProfile;
/// use perfcmp_ingest::raw::{MicroEntry, RawRecord};
/// use perfcmp_ingest::Normalizer;
///
/// let mut entry = MicroEntry::named("append/threads:2");
/// entry.items_per_second = Some(2_000_000.0);
///
/// let normalizer = Normalizer::micro(MicroProfile::MultiThread, UnitConfig::default());
/// let records = normalizer.normalize("NOVA", &RawRecord::Micro(entry)).unwrap();
/// assert_eq!(records[0].y(), 2.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Normalizer {
    profile: Option<MicroProfile>,
    units: UnitConfig,
}

impl Normalizer {
    /// Normalizer for micro-benchmark reports under `profile`.
    pub fn micro(profile: MicroProfile, units: UnitConfig) -> Self {
        Self {
            profile: Some(profile),
            units,
        }
    }

    /// Normalizer for log-based families, which need no micro profile.
    pub fn logs(units: UnitConfig) -> Self {
        Self {
            profile: None,
            units,
        }
    }

    /// Convert one raw record into zero or more canonical records.
    ///
    /// # Errors
    ///
    /// Propagates the format rule's error; a micro entry fed to a normalizer
    /// without a profile is [`PerfError::MalformedInput`].
    pub fn normalize(&self, variant: &str, raw: &RawRecord) -> Result<Vec<CanonicalRecord>> {
        match raw {
            RawRecord::Micro(entry) => {
                let profile = self.profile.ok_or_else(|| {
                    PerfError::malformed(
                        &entry.source,
                        "micro-benchmark entry in a log-based pipeline",
                    )
                })?;
                micro::normalize(profile, &self.units, variant, entry)
            }
            RawRecord::Throughput(sample) => ycsb::normalize(variant, sample),
            RawRecord::Transaction(sample) => tpcc::normalize(variant, sample),
        }
    }

    /// Normalize a sequence of raw records, concatenating the output.
    pub fn normalize_all<'a>(
        &self,
        variant: &str,
        raws: impl IntoIterator<Item = &'a RawRecord>,
    ) -> Result<Vec<CanonicalRecord>> {
        let mut out = Vec::new();
        for raw in raws {
            out.extend(self.normalize(variant, raw)?);
        }
        Ok(out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::raw::{MicroEntry, ThroughputSample};
    use std::path::PathBuf;

    #[test]
    fn test_dispatch_by_record_kind() {
        let normalizer = Normalizer::logs(UnitConfig::default());
        let raw = RawRecord::Throughput(ThroughputSample {
            workload: "b".to_string(),
            total_requests: 10,
            total_elapsed_us: 5.0,
            source: PathBuf::from("ext4/b-run.log"),
        });
        let recs = normalizer.normalize("ext4", &raw).unwrap();
        assert_eq!(recs[0].benchmark(), "ycsb");
        assert_eq!(recs[0].y(), 2.0);
    }

    #[test]
    fn test_micro_without_profile() {
        let normalizer = Normalizer::logs(UnitConfig::default());
        let raw = RawRecord::Micro(MicroEntry::named("seq/4096"));
        assert!(normalizer.normalize("ext4", &raw).is_err());
    }

    #[test]
    fn test_normalize_all_skips_dropped() {
        let normalizer = Normalizer::micro(MicroProfile::MultiThread, UnitConfig::default());
        let mut one = MicroEntry::named("srmw/threads:1");
        one.items_per_second = Some(1.0);
        let mut two = MicroEntry::named("srmw/threads:2");
        two.items_per_second = Some(1.0);
        let raws = vec![RawRecord::Micro(one), RawRecord::Micro(two)];
        let recs = normalizer.normalize_all("NOVA", &raws).unwrap();
        assert_eq!(recs.len(), 1);
        assert_eq!(recs[0].x(), "1");
    }
}
