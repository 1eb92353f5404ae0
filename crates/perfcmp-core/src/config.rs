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

//! Comparison configuration consumed by the pipeline.

use crate::order::VariantPriority;
use crate::units::UnitConfig;
use serde::{Deserialize, Serialize};

/// Variant used as the reference for percentage columns unless overridden.
pub const DEFAULT_BASELINE: &str = "uLayFS";

/// Settings shared by every pipeline family.
///
/// Every field has a default, so a partial YAML document is enough:
///
/// ```
/// use perfcmp_core::CompareConfig;
///
/// let config = CompareConfig::default().with_baseline(Some("ext4"));
/// assert_eq!(config.baseline.as_deref(), Some("ext4"));
/// assert_eq!(config.variants.priority("uLayFS"), 1);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CompareConfig {
    /// Ordering of variants in legends and columns.
    pub variants: VariantPriority,
    /// Reference variant for relative percentages; `None` disables them.
    pub baseline: Option<String>,
    /// Unit conversion divisors.
    pub units: UnitConfig,
}

impl Default for CompareConfig {
    fn default() -> Self {
        Self {
            variants: VariantPriority::default(),
            baseline: Some(DEFAULT_BASELINE.to_string()),
            units: UnitConfig::default(),
        }
    }
}

impl CompareConfig {
    /// Replace the baseline variant.
    pub fn with_baseline(mut self, baseline: Option<&str>) -> Self {
        self.baseline = baseline.map(str::to_string);
        self
    }

    /// Replace the variant priority mapping.
    pub fn with_variants(mut self, variants: VariantPriority) -> Self {
        self.variants = variants;
        self
    }

    /// Baseline as a borrowed name.
    pub fn baseline(&self) -> Option<&str> {
        self.baseline.as_deref()
    }
}
