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

//! File-backed export sink.

use crate::error::{CsvError, Result};
use crate::text::{render_pivot_with_config, TextConfig};
use crate::to_csv::{to_csv_writer_with_config, ToCsvConfig};
use perfcmp_core::{ExportSink, PivotTable, ResultTable};
use std::fs::{self, File};
use std::io::BufWriter;
use std::path::Path;
use tracing::debug;

/// Writes the flat table as CSV and each pivot as a text grid.
#[derive(Debug, Clone, Default)]
pub struct CsvExporter {
    csv: ToCsvConfig,
    text: TextConfig,
}

impl CsvExporter {
    /// Exporter with default formatting.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the CSV options.
    pub fn with_csv_config(mut self, config: ToCsvConfig) -> Self {
        self.csv = config;
        self
    }

    /// Replace the text pivot options.
    pub fn with_text_config(mut self, config: TextConfig) -> Self {
        self.text = config;
        self
    }

    /// Text pivot options.
    pub fn text_config(&self) -> &TextConfig {
        &self.text
    }
}

impl ExportSink for CsvExporter {
    type Error = CsvError;

    fn export_table(&self, table: &ResultTable, path: &Path) -> Result<()> {
        let file = File::create(path).map_err(|e| CsvError::write(path, e))?;
        to_csv_writer_with_config(table, BufWriter::new(file), self.csv.clone())?;
        debug!(path = %path.display(), rows = table.len(), "wrote result table");
        Ok(())
    }

    fn export_pivot(&self, pivot: &PivotTable, path: &Path) -> Result<()> {
        fs::write(path, render_pivot_with_config(pivot, &self.text))
            .map_err(|e| CsvError::write(path, e))?;
        debug!(path = %path.display(), benchmark = pivot.benchmark(), "wrote pivot");
        Ok(())
    }
}
