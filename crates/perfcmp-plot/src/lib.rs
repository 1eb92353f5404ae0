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

//! SVG chart rendering for perfcmp pivots.
//!
//! [`SvgPlotter`] draws one chart per benchmark: x buckets along the
//! horizontal axis in pivot row order, one series per variant in column
//! order. Micro families use line charts, application benchmarks use grouped
//! bars.

use perfcmp_core::{ChartKind, PivotTable, PlotSink, PlotSpec};
use plotters::prelude::*;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::debug;

const TITLE_FONT_SIZE: u32 = 32;
const AXIS_LABEL_FONT_SIZE: u32 = 22;
const TICK_LABEL_FONT_SIZE: u32 = 18;
const LEGEND_FONT_SIZE: u32 = 18;

const X_LABEL_AREA_SIZE: u32 = 60;
const Y_LABEL_AREA_SIZE: u32 = 80;

/// Share of a bucket's width covered by its bar group.
const GROUP_WIDTH: f64 = 0.8;
const BAR_GAP: f64 = 0.01;

/// Series colors, assigned in variant order.
const COLORS: &[RGBColor] = &[
    RGBColor(31, 119, 180),
    RGBColor(255, 127, 14),
    RGBColor(44, 160, 44),
    RGBColor(214, 39, 40),
    RGBColor(148, 103, 189),
    RGBColor(140, 86, 75),
    RGBColor(227, 119, 194),
    RGBColor(127, 127, 127),
];

/// Chart rendering errors.
#[derive(Debug, Error)]
pub enum PlotError {
    /// The pivot has no rows or no variant columns.
    #[error("Nothing to plot for benchmark '{benchmark}'")]
    Empty {
        /// Benchmark name.
        benchmark: String,
    },

    /// The drawing backend failed.
    #[error("Failed to draw '{path}': {message}")]
    Drawing {
        /// Output file.
        path: PathBuf,
        /// Backend error.
        message: String,
    },
}

/// Result type for plotting.
pub type Result<T> = std::result::Result<T, PlotError>;

fn drawing<E: std::fmt::Display>(path: &Path) -> impl FnOnce(E) -> PlotError + '_ {
    move |e| PlotError::Drawing {
        path: path.to_path_buf(),
        message: e.to_string(),
    }
}

fn series_color(idx: usize) -> RGBColor {
    COLORS[idx % COLORS.len()]
}

/// Label of the bucket nearest to a categorical axis coordinate.
fn row_label(rows: &[String], x: f64) -> String {
    let idx = x.round();
    if idx < 0.0 || (x - idx).abs() > 0.3 {
        return String::new();
    }
    rows.get(idx as usize).cloned().unwrap_or_default()
}

/// Renders pivots as SVG files.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SvgPlotter {
    width: u32,
    height: u32,
}

impl Default for SvgPlotter {
    fn default() -> Self {
        Self {
            width: 1000,
            height: 600,
        }
    }
}

impl SvgPlotter {
    /// Plotter with the default canvas size.
    pub fn new() -> Self {
        Self::default()
    }

    /// Plotter with a custom canvas size in pixels.
    pub fn with_size(width: u32, height: u32) -> Self {
        Self { width, height }
    }
}

impl PlotSink for SvgPlotter {
    type Error = PlotError;

    fn plot(&self, spec: &PlotSpec, pivot: &PivotTable, path: &Path) -> Result<()> {
        let rows = pivot.rows();
        if rows.is_empty() || pivot.variants().is_empty() {
            return Err(PlotError::Empty {
                benchmark: pivot.benchmark().to_string(),
            });
        }

        let root = SVGBackend::new(path, (self.width, self.height)).into_drawing_area();
        root.fill(&WHITE).map_err(drawing(path))?;

        let buckets = rows.len();
        let y_max = match pivot.max_value() {
            Some(max) if max > 0.0 => max * 1.1,
            _ => 1.0,
        };

        let mut chart = ChartBuilder::on(&root)
            .caption(pivot.benchmark(), ("sans-serif", TITLE_FONT_SIZE))
            .margin(20)
            .x_label_area_size(X_LABEL_AREA_SIZE)
            .y_label_area_size(Y_LABEL_AREA_SIZE)
            .build_cartesian_2d(-0.5..(buckets as f64 - 0.5), 0.0..y_max)
            .map_err(drawing(path))?;

        chart
            .configure_mesh()
            .disable_x_mesh()
            .x_labels(buckets)
            .x_label_formatter(&|x| row_label(rows, *x))
            .x_desc(spec.x_label.as_str())
            .y_desc(spec.y_label.as_str())
            .label_style(("sans-serif", TICK_LABEL_FONT_SIZE))
            .axis_desc_style(("sans-serif", AXIS_LABEL_FONT_SIZE))
            .draw()
            .map_err(drawing(path))?;

        let series = pivot.series();
        let count = series.len() as f64;
        let bar_width = GROUP_WIDTH / count;

        for (idx, s) in series.iter().enumerate() {
            let color = series_color(idx);
            let points: Vec<(f64, f64)> = s
                .points
                .iter()
                .enumerate()
                .filter_map(|(i, (_, y))| y.map(|y| (i as f64, y)))
                .collect();

            match spec.kind {
                ChartKind::Line => {
                    chart
                        .draw_series(LineSeries::new(points.clone(), color.stroke_width(3)))
                        .map_err(drawing(path))?
                        .label(s.variant)
                        .legend(move |(x, y)| {
                            PathElement::new(vec![(x, y), (x + 20, y)], color.stroke_width(3))
                        });
                    chart
                        .draw_series(points.iter().map(|&p| Circle::new(p, 4, color.filled())))
                        .map_err(drawing(path))?;
                }
                ChartKind::Bar => {
                    let offset = (idx as f64 - (count - 1.0) / 2.0) * bar_width;
                    chart
                        .draw_series(points.iter().map(|&(x, y)| {
                            let left = x + offset - bar_width / 2.0 + BAR_GAP;
                            let right = x + offset + bar_width / 2.0 - BAR_GAP;
                            Rectangle::new([(left, 0.0), (right, y)], color.filled())
                        }))
                        .map_err(drawing(path))?
                        .label(s.variant)
                        .legend(move |(x, y)| {
                            Rectangle::new([(x, y - 5), (x + 20, y + 5)], color.filled())
                        });
                }
            }
        }

        chart
            .configure_series_labels()
            .position(SeriesLabelPosition::UpperRight)
            .background_style(WHITE.mix(0.8))
            .border_style(BLACK)
            .label_font(("sans-serif", LEGEND_FONT_SIZE))
            .draw()
            .map_err(drawing(path))?;

        root.present().map_err(drawing(path))?;
        debug!(path = %path.display(), benchmark = pivot.benchmark(), "wrote chart");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use perfcmp_core::{build_pivots, CanonicalRecord, Pivots, ResultTable, VariantPriority};
    use std::fs;

    fn pivots() -> Pivots {
        let table = ResultTable::new()
            .append(CanonicalRecord::new("ycsb", "uLayFS", "a", 2.0).unwrap())
            .append(CanonicalRecord::new("ycsb", "ext4", "a", 1.0).unwrap())
            .append(CanonicalRecord::new("ycsb", "uLayFS", "b", 3.0).unwrap())
            .append(CanonicalRecord::new("ycsb", "NOVA", "b", 1.5).unwrap());
        build_pivots(&table, &VariantPriority::default(), Some("uLayFS")).unwrap()
    }

    #[test]
    fn test_row_label() {
        let rows = vec!["4K".to_string(), "8K".to_string()];
        assert_eq!(row_label(&rows, 0.0), "4K");
        assert_eq!(row_label(&rows, 1.1), "8K");
        assert_eq!(row_label(&rows, 0.5), "");
        assert_eq!(row_label(&rows, -0.4), "");
        assert_eq!(row_label(&rows, 2.0), "");
    }

    #[test]
    fn test_series_colors_wrap() {
        assert_eq!(series_color(0), series_color(COLORS.len()));
    }

    #[test]
    fn test_bar_chart() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("ycsb.svg");
        let spec = PlotSpec::new(ChartKind::Bar, "Workload", "Throughput (Mops/s)");
        SvgPlotter::new()
            .plot(&spec, pivots().get("ycsb").unwrap(), &path)
            .unwrap();

        let svg = fs::read_to_string(&path).unwrap();
        assert!(svg.contains("<svg"));
        assert!(svg.contains("uLayFS"));
        assert!(svg.contains("<rect"));
    }

    #[test]
    fn test_line_chart() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("ycsb.svg");
        let spec = PlotSpec::new(ChartKind::Line, "Workload", "Throughput (Mops/s)");
        SvgPlotter::with_size(640, 480)
            .plot(&spec, pivots().get("ycsb").unwrap(), &path)
            .unwrap();

        let svg = fs::read_to_string(&path).unwrap();
        assert!(svg.contains("<svg"));
        assert!(svg.contains("<polyline") || svg.contains("<path"));
    }

    #[test]
    fn test_missing_directory_fails() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("ycsb.svg");
        let spec = PlotSpec::new(ChartKind::Bar, "Workload", "Mops/s");
        let err = SvgPlotter::new()
            .plot(&spec, pivots().get("ycsb").unwrap(), &path)
            .unwrap_err();
        assert!(matches!(err, PlotError::Drawing { .. }));
    }
}
