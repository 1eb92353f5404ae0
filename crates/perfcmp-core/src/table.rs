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

//! Flat accumulation of canonical records across variants and readers.

use crate::order::VariantPriority;
use crate::record::CanonicalRecord;

/// All canonical records of one pipeline run, in insertion order.
///
/// Nothing is deduplicated here. When several records share a
/// `(benchmark, variant, x)` key, the pivot keeps the one appended last.
///
/// # Examples
///
/// ```
/// use perfcmp_core::{CanonicalRecord, ResultTable};
///
/// let table = ResultTable::new()
///     .append(CanonicalRecord::new("ycsb", "NOVA", "a", 1.0).unwrap())
///     .append(CanonicalRecord::new("ycsb", "uLayFS", "a", 2.0).unwrap());
/// assert_eq!(table.len(), 2);
/// assert_eq!(table.variants(), vec!["NOVA", "uLayFS"]);
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ResultTable {
    records: Vec<CanonicalRecord>,
}

/// Records of a single benchmark, borrowed from a [`ResultTable`].
#[derive(Debug, Clone)]
pub struct BenchmarkGroup<'a> {
    /// Benchmark name shared by every record.
    pub benchmark: &'a str,
    /// Records in table order.
    pub records: Vec<&'a CanonicalRecord>,
}

impl ResultTable {
    /// Create an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a record and return the grown table.
    pub fn append(mut self, record: CanonicalRecord) -> Self {
        self.push(record);
        self
    }

    /// Append a record in place.
    pub fn push(&mut self, record: CanonicalRecord) {
        self.records.push(record);
    }

    /// Number of records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Returns true if no record has been appended.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Records in insertion order.
    pub fn records(&self) -> &[CanonicalRecord] {
        &self.records
    }

    /// Distinct variants in discovery order.
    pub fn variants(&self) -> Vec<&str> {
        distinct(self.records.iter().map(CanonicalRecord::variant))
    }

    /// Distinct benchmarks in discovery order.
    pub fn benchmarks(&self) -> Vec<&str> {
        distinct(self.records.iter().map(CanonicalRecord::benchmark))
    }

    /// Variant order for the whole table, computed once from every record.
    pub fn variant_order(&self, priority: &VariantPriority) -> Vec<String> {
        priority.order(self.variants())
    }

    /// Group records by benchmark, benchmarks in discovery order.
    pub fn group_by_benchmark(&self) -> Vec<BenchmarkGroup<'_>> {
        self.benchmarks()
            .into_iter()
            .map(|benchmark| BenchmarkGroup {
                benchmark,
                records: self
                    .records
                    .iter()
                    .filter(|r| r.benchmark() == benchmark)
                    .collect(),
            })
            .collect()
    }
}

impl Extend<CanonicalRecord> for ResultTable {
    fn extend<T: IntoIterator<Item = CanonicalRecord>>(&mut self, iter: T) {
        self.records.extend(iter);
    }
}

impl FromIterator<CanonicalRecord> for ResultTable {
    fn from_iter<T: IntoIterator<Item = CanonicalRecord>>(iter: T) -> Self {
        Self {
            records: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a ResultTable {
    type Item = &'a CanonicalRecord;
    type IntoIter = std::slice::Iter<'a, CanonicalRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}

fn distinct<'a>(values: impl Iterator<Item = &'a str>) -> Vec<&'a str> {
    let mut out: Vec<&str> = Vec::new();
    for value in values {
        if !out.contains(&value) {
            out.push(value);
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rec(bench: &str, variant: &str, x: &str, y: f64) -> CanonicalRecord {
        CanonicalRecord::new(bench, variant, x, y).unwrap()
    }

    #[test]
    fn test_append_preserves_order() {
        let table = ResultTable::new()
            .append(rec("b", "NOVA", "1", 1.0))
            .append(rec("a", "uLayFS", "1", 2.0))
            .append(rec("b", "uLayFS", "1", 3.0));
        assert_eq!(table.benchmarks(), vec!["b", "a"]);
        assert_eq!(table.variants(), vec!["NOVA", "uLayFS"]);
        assert_eq!(table.records()[2].y(), 3.0);
    }

    #[test]
    fn test_duplicates_are_retained() {
        let mut table = ResultTable::new();
        table.push(rec("b", "NOVA", "1", 1.0));
        table.push(rec("b", "NOVA", "1", 5.0));
        assert_eq!(table.len(), 2);
    }

    #[test]
    fn test_variant_order_uses_whole_table() {
        let table: ResultTable = vec![
            rec("a", "zfs", "1", 1.0),
            rec("a", "NOVA", "1", 1.0),
            rec("b", "uLayFS", "1", 1.0),
        ]
        .into_iter()
        .collect();
        let order = table.variant_order(&VariantPriority::default());
        assert_eq!(order, vec!["uLayFS", "NOVA", "zfs"]);
    }

    #[test]
    fn test_group_by_benchmark() {
        let mut table = ResultTable::new();
        table.extend([
            rec("rand", "ext4", "4K", 1.0),
            rec("seq", "ext4", "4K", 2.0),
            rec("rand", "NOVA", "4K", 3.0),
        ]);
        let groups = table.group_by_benchmark();
        assert_eq!(groups.len(), 2);
        assert_eq!(groups[0].benchmark, "rand");
        assert_eq!(groups[0].records.len(), 2);
        assert_eq!(groups[1].records[0].y(), 2.0);
    }

    #[test]
    fn test_empty_table() {
        let table = ResultTable::new();
        assert!(table.is_empty());
        assert!(table.group_by_benchmark().is_empty());
        assert!((&table).into_iter().next().is_none());
    }
}
