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

//! Readers and normalizers for benchmark result artifacts.
//!
//! Three layouts are supported, each behind the [`FormatReader`] trait:
//!
//! - **Micro-benchmark reports** ([`micro`]): `<variant>/result.json` with a
//!   `benchmarks` array
//! - **Throughput logs** ([`ycsb`]): `<variant>/<workload>-run.log`
//! - **Transaction logs** ([`tpcc`]): `<variant>/start/prog.log`
//!
//! A [`Family`] selects the reader and configures the [`Normalizer`] that
//! turns raw records into canonical ones.

pub mod discovery;
pub mod extract;
pub mod family;
pub mod micro;
pub mod normalize;
pub mod raw;
pub mod reader;
pub mod tpcc;
pub mod ycsb;

pub use discovery::discover_variants;
pub use family::Family;
pub use normalize::Normalizer;
pub use raw::RawRecord;
pub use reader::{FormatReader, ReadOutput};
