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

//! The canonical `(benchmark, variant, x, y)` record every input converges to.

use crate::error::{PerfError, Result};
use serde::Serialize;

/// One normalized measurement.
///
/// Built only through [`CanonicalRecord::new`], which enforces that the
/// labels are non-empty and that `y` is a finite, non-negative metric already
/// expressed in its presentation unit. There are no setters.
///
/// # Examples
///
/// ```
/// use perfcmp_core::CanonicalRecord;
///
/// let rec = CanonicalRecord::new("seq_write", "uLayFS", "4K", 1.5).unwrap();
/// assert_eq!(rec.benchmark(), "seq_write");
/// assert_eq!(rec.y(), 1.5);
///
/// assert!(CanonicalRecord::new("seq_write", "uLayFS", "", 1.5).is_err());
/// assert!(CanonicalRecord::new("seq_write", "uLayFS", "4K", f64::NAN).is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CanonicalRecord {
    benchmark: String,
    variant: String,
    x: String,
    y: f64,
}

impl CanonicalRecord {
    /// Create a record, validating its invariants.
    pub fn new(
        benchmark: impl Into<String>,
        variant: impl Into<String>,
        x: impl Into<String>,
        y: f64,
    ) -> Result<Self> {
        let benchmark = benchmark.into();
        let variant = variant.into();
        let x = x.into();

        for (field, value) in [("benchmark", &benchmark), ("variant", &variant), ("x", &x)] {
            if value.is_empty() {
                return Err(PerfError::InvalidRecord {
                    reason: format!("{} must not be empty", field),
                });
            }
        }
        if !y.is_finite() || y < 0.0 {
            return Err(PerfError::InvalidRecord {
                reason: format!(
                    "y must be finite and non-negative, got {} for {}/{}/{}",
                    y, benchmark, variant, x
                ),
            });
        }

        Ok(Self {
            benchmark,
            variant,
            x,
            y,
        })
    }

    /// Benchmark (workload) name.
    pub fn benchmark(&self) -> &str {
        &self.benchmark
    }

    /// System under test.
    pub fn variant(&self) -> &str {
        &self.variant
    }

    /// Discrete x-axis bucket label.
    pub fn x(&self) -> &str {
        &self.x
    }

    /// Metric value in presentation units.
    pub fn y(&self) -> f64 {
        self.y
    }

    /// Key identifying the pivot cell this record lands in.
    pub fn key(&self) -> (&str, &str, &str) {
        (&self.benchmark, &self.variant, &self.x)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_rejects_empty_labels() {
        assert!(CanonicalRecord::new("", "ext4", "4K", 1.0).is_err());
        assert!(CanonicalRecord::new("seq", "", "4K", 1.0).is_err());
        assert!(CanonicalRecord::new("seq", "ext4", "", 1.0).is_err());
    }

    #[test]
    fn test_rejects_negative_and_infinite() {
        assert!(CanonicalRecord::new("seq", "ext4", "4K", -0.5).is_err());
        assert!(CanonicalRecord::new("seq", "ext4", "4K", f64::INFINITY).is_err());
        let err = CanonicalRecord::new("seq", "ext4", "4K", -1.0).unwrap_err();
        assert!(err.to_string().contains("seq/ext4/4K"));
    }

    #[test]
    fn test_zero_is_allowed() {
        let rec = CanonicalRecord::new("seq", "ext4", "4K", 0.0).unwrap();
        assert_eq!(rec.key(), ("seq", "ext4", "4K"));
    }

    proptest! {
        #[test]
        fn prop_accepted_records_hold_invariants(
            bench in "[a-z_]{0,8}",
            x in "[0-9K]{0,4}",
            y in proptest::num::f64::ANY,
        ) {
            if let Ok(rec) = CanonicalRecord::new(bench, "NOVA", x, y) {
                prop_assert!(!rec.benchmark().is_empty());
                prop_assert!(!rec.x().is_empty());
                prop_assert!(rec.y() >= 0.0);
                prop_assert!(rec.y().is_finite());
            }
        }
    }
}
