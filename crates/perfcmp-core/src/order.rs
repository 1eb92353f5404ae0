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

//! Deterministic ordering of variants.
//!
//! Known variants carry an explicit priority; everything else shares a
//! fallback priority and keeps its discovery position. The sort is stable,
//! so the same discovered set always yields the same legend and column order.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Priority assigned to variants that are not listed explicitly.
pub const DEFAULT_FALLBACK_PRIORITY: u32 = 100;

/// Priority mapping used to order variants.
///
/// # Examples
///
/// ```
/// use perfcmp_core::VariantPriority;
///
/// let priority = VariantPriority::default();
/// let order = priority.order(["NOVA", "zfs", "ext4", "uLayFS"]);
/// assert_eq!(order, vec!["uLayFS", "ext4", "NOVA", "zfs"]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct VariantPriority {
    /// Explicit priorities; lower sorts first.
    pub priorities: BTreeMap<String, u32>,
    /// Priority for variants absent from `priorities`.
    pub fallback: u32,
}

impl Default for VariantPriority {
    fn default() -> Self {
        let priorities = [("uLayFS", 1), ("ext4", 2), ("ext4-DAX", 2), ("NOVA", 3)]
            .into_iter()
            .map(|(name, p)| (name.to_string(), p))
            .collect();
        Self {
            priorities,
            fallback: DEFAULT_FALLBACK_PRIORITY,
        }
    }
}

impl VariantPriority {
    /// Create an empty mapping where every variant gets `fallback`.
    pub fn new(fallback: u32) -> Self {
        Self {
            priorities: BTreeMap::new(),
            fallback,
        }
    }

    /// Set the priority of a variant.
    pub fn with(mut self, variant: impl Into<String>, priority: u32) -> Self {
        self.priorities.insert(variant.into(), priority);
        self
    }

    /// Priority of a variant.
    pub fn priority(&self, variant: &str) -> u32 {
        self.priorities
            .get(variant)
            .copied()
            .unwrap_or(self.fallback)
    }

    /// Order variants by priority, keeping discovery order among equals.
    ///
    /// Duplicates are collapsed to their first occurrence.
    pub fn order<I, S>(&self, discovered: I) -> Vec<String>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut seen: Vec<String> = Vec::new();
        for variant in discovered {
            let variant = variant.as_ref();
            if !seen.iter().any(|v| v == variant) {
                seen.push(variant.to_string());
            }
        }
        seen.sort_by_key(|v| self.priority(v));
        seen
    }

    /// Sort arbitrary items by the priority of their variant name, stably.
    pub fn sort_by_variant<T>(&self, items: &mut [T], name: impl Fn(&T) -> &str) {
        items.sort_by_key(|item| self.priority(name(item)));
    }
}
