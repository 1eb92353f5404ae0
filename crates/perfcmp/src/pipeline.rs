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

//! End-to-end comparison runs.
//!
//! A run is a single forward pass: discover variant directories, read and
//! normalize each one, pivot the accumulated table, then hand the table, the
//! pivots and the charts to the sinks. Nothing is written until every
//! variant has been read and every pivot built.

use crate::error::{PipelineError, Result};
use perfcmp_core::{
    build_pivots, CompareConfig, ExportSink, PerfError, Pivots, PlotSink, ResultTable,
};
use perfcmp_csv::{from_csv_reader, CsvExporter};
use perfcmp_ingest::{discover_variants, Family};
use perfcmp_plot::SvgPlotter;
use std::fs::{self, File};
use std::io::BufReader;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

/// File name of the exported row store.
pub const RESULT_CSV: &str = "result.csv";

/// Outcome of a completed run.
#[derive(Debug, Clone)]
pub struct Report {
    /// Every canonical record, in ingestion order.
    pub table: ResultTable,
    /// One pivot per benchmark.
    pub pivots: Pivots,
    /// Files written, in write order.
    pub written: Vec<PathBuf>,
}

/// Comparison pipeline with pluggable sinks.
#[derive(Debug, Clone)]
pub struct Pipeline<E = CsvExporter, P = SvgPlotter> {
    config: CompareConfig,
    exporter: E,
    plotter: Option<P>,
    output_dir: Option<PathBuf>,
}

impl Pipeline {
    /// Pipeline writing CSV, text pivots and SVG charts.
    pub fn new(config: CompareConfig) -> Self {
        Self::with_sinks(config, CsvExporter::new(), Some(SvgPlotter::new()))
    }
}

impl<E: ExportSink, P: PlotSink> Pipeline<E, P> {
    /// Pipeline with custom sinks; `plotter: None` disables charts.
    pub fn with_sinks(config: CompareConfig, exporter: E, plotter: Option<P>) -> Self {
        Self {
            config,
            exporter,
            plotter,
            output_dir: None,
        }
    }

    /// Write outputs to `dir` instead of the result root.
    pub fn output_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.output_dir = Some(dir.into());
        self
    }

    /// Skip chart rendering.
    pub fn without_plots(mut self) -> Self {
        self.plotter = None;
        self
    }

    /// Active configuration.
    pub fn config(&self) -> &CompareConfig {
        &self.config
    }

    /// Read and normalize every variant under `root`.
    ///
    /// Variants whose artifact is missing are skipped with a warning.
    ///
    /// # Errors
    ///
    /// Any non-recoverable [`perfcmp_core::PerfError`], or
    /// [`PipelineError::NoResults`] when no variant yields a record.
    pub fn collect(&self, family: Family, root: &Path) -> Result<ResultTable> {
        let locations = discover_variants(root, &self.config.variants)?;
        info!(
            family = %family,
            root = %root.display(),
            variants = locations.len(),
            "discovered result directories"
        );

        let reader = family.reader();
        let normalizer = family.normalizer(self.config.units);
        let mut table = ResultTable::new();

        for location in &locations {
            let output = match reader.read(location) {
                Ok(output) => output,
                Err(e) if e.is_recoverable() => {
                    warn!("{}", e);
                    continue;
                }
                Err(e) => return Err(e.into()),
            };
            let records = normalizer.normalize_all(&output.variant, &output.records)?;
            debug!(
                variant = %output.variant,
                reader = reader.name(),
                records = records.len(),
                "normalized variant"
            );
            table.extend(records);
        }

        if table.is_empty() {
            return Err(PipelineError::NoResults {
                root: root.to_path_buf(),
            });
        }
        Ok(table)
    }

    /// Pivot `table` with the configured ordering and baseline.
    pub fn compare(&self, table: &ResultTable) -> Result<Pivots> {
        Ok(build_pivots(
            table,
            &self.config.variants,
            self.config.baseline(),
        )?)
    }

    /// Collect, compare and write every output for `family`.
    pub fn run(&self, family: Family, root: &Path) -> Result<Report> {
        let table = self.collect(family, root)?;
        let pivots = self.compare(&table)?;
        let out_dir = self.output_dir.as_deref().unwrap_or(root);
        let written = self.write(family, &table, &pivots, out_dir)?;
        info!(
            family = %family,
            records = table.len(),
            benchmarks = pivots.len(),
            files = written.len(),
            "comparison complete"
        );
        Ok(Report {
            table,
            pivots,
            written,
        })
    }

    /// Write the row store, one text pivot per benchmark and, unless plots
    /// are disabled, one chart per benchmark.
    pub fn write(
        &self,
        family: Family,
        table: &ResultTable,
        pivots: &Pivots,
        out_dir: &Path,
    ) -> Result<Vec<PathBuf>> {
        fs::create_dir_all(out_dir).map_err(|e| PipelineError::OutputDir {
            path: out_dir.to_path_buf(),
            message: e.to_string(),
        })?;

        let mut written = Vec::with_capacity(1 + pivots.len() * 2);

        let csv_path = out_dir.join(RESULT_CSV);
        self.exporter
            .export_table(table, &csv_path)
            .map_err(|e| PipelineError::Export {
                path: csv_path.clone(),
                source: Box::new(e),
            })?;
        written.push(csv_path);

        let spec = family.plot_spec();
        for pivot in pivots {
            let txt_path = out_dir.join(format!("{}.txt", pivot.benchmark()));
            self.exporter
                .export_pivot(pivot, &txt_path)
                .map_err(|e| PipelineError::Export {
                    path: txt_path.clone(),
                    source: Box::new(e),
                })?;
            written.push(txt_path);

            if let Some(plotter) = &self.plotter {
                let svg_path = out_dir.join(format!("{}.svg", pivot.benchmark()));
                plotter
                    .plot(&spec, pivot, &svg_path)
                    .map_err(|e| PipelineError::Plot {
                        path: svg_path.clone(),
                        source: Box::new(e),
                    })?;
                written.push(svg_path);
            }
        }

        for path in &written {
            info!(path = %path.display(), "wrote");
        }
        Ok(written)
    }
}

/// Read a previously exported row store.
pub fn load_table(path: &Path) -> Result<ResultTable> {
    let file = File::open(path).map_err(|e| PerfError::from_io(path, &e))?;
    Ok(from_csv_reader(BufReader::new(file))?)
}
