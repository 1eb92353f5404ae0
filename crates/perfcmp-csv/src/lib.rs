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

//! CSV row store and text pivot export for perfcmp.
//!
//! The flat table of canonical records is persisted as `result.csv` with the
//! header `benchmark,variant,x,y`; each benchmark's pivot is persisted as a
//! fixed-width text grid. [`from_csv`] reads a row store back so pivots can
//! be rebuilt without re-ingesting the raw artifacts.
//!
//! # Examples
//!
//! ```
//! use perfcmp_core::{CanonicalRecord, ResultTable};
//! use perfcmp_csv::{from_csv, to_csv};
//!
//! let table = ResultTable::new()
//!     .append(CanonicalRecord::new("ycsb", "NOVA", "a", 0.8).unwrap());
//! let csv = to_csv(&table).unwrap();
//! assert_eq!(from_csv(&csv).unwrap(), table);
//! ```

mod error;
mod export;
mod from_csv;
mod text;
mod to_csv;

pub use error::{CsvError, Result};
pub use export::CsvExporter;
pub use from_csv::{
    from_csv, from_csv_reader, from_csv_reader_with_config, from_csv_with_config, FromCsvConfig,
    DEFAULT_MAX_ROWS,
};
pub use text::{render_pivot, render_pivot_with_config, render_pivots, TextConfig, INDEX_LABEL};
pub use to_csv::{
    to_csv, to_csv_with_config, to_csv_writer, to_csv_writer_with_config, ToCsvConfig, HEADER,
};
