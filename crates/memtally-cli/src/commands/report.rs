// memtally - Membership report toolkit
//
// Copyright (c) 2026 memtally contributors.
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

//! Report command - build and render the membership report

use clap::ValueEnum;
use memtally_core::parse;
use memtally_report::Report;
use tracing::{debug, warn};

use super::{load_layout, read_input, write_output};
use crate::error::CliError;

/// Output format of the `report` command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum ReportFormat {
    /// Aligned plain-text table
    #[default]
    Text,
    /// Serialized report
    Json,
    /// One record per metric row
    Csv,
}

/// Build the report for an export and write it in the requested format.
///
/// # Errors
///
/// Returns `Err` when the input or layout cannot be read, or the output
/// cannot be serialized or written.
pub fn report(
    file: &str,
    format: ReportFormat,
    output: Option<&str>,
    layout: Option<&str>,
) -> Result<(), CliError> {
    let layout = load_layout(layout)?;
    let table = parse(&read_input(file)?);
    let report = Report::build(&table, &layout);

    if !report.has_data() {
        warn!(
            file,
            rows = table.rows.len(),
            "no membership data found for any report column; check that the export is the site membership export"
        );
    }

    debug!(?format, "rendering report");
    let rendered = match format {
        ReportFormat::Text => render_text(&report),
        ReportFormat::Json => {
            let mut json = serde_json::to_string_pretty(&report)?;
            json.push('\n');
            json
        }
        ReportFormat::Csv => render_csv(&report)?,
    };
    write_output(&rendered, output)
}

/// Render the report as aligned plain-text tables, one per section.
///
/// The last section also carries the grand-total column.
pub fn render_text(report: &Report) -> String {
    let rows = report.metric_rows();
    let last = report.sections.len().saturating_sub(1);

    let mut lines = vec![format!("{} [{}]", report.title, report.week_label)];
    if !report.period.is_empty() {
        lines.push(format!("조회기간: {}", report.period));
    }

    for (idx, section) in report.sections.iter().enumerate() {
        let with_total = idx == last;

        let mut header = vec!["구분".to_string()];
        header.extend(section.columns.iter().map(|c| c.label.clone()));
        header.push(section.subtotal_label.clone());
        if with_total {
            header.push(report.grand_total_label.clone());
        }

        let mut grid = vec![header];
        for row in &rows {
            let Some(group) = row.groups.get(idx) else {
                continue;
            };
            let mut cells = vec![row.label().to_string()];
            cells.extend(group.values.iter().map(|&v| row.metric.format(v)));
            cells.push(row.metric.format(group.subtotal));
            if with_total {
                cells.push(row.metric.format(row.grand_total));
            }
            grid.push(cells);
        }

        lines.push(String::new());
        lines.push(format!("[{}]", section.name));
        lines.extend(align(&grid));
    }

    let mut text = lines.join("\n");
    text.push('\n');
    text
}

/// Left-align the first column, right-align the rest.
fn align(grid: &[Vec<String>]) -> Vec<String> {
    let width = |cell: &str| cell.chars().count();
    let columns = grid.iter().map(Vec::len).max().unwrap_or(0);
    let widths: Vec<usize> = (0..columns)
        .map(|c| {
            grid.iter()
                .filter_map(|row| row.get(c))
                .map(|cell| width(cell))
                .max()
                .unwrap_or(0)
        })
        .collect();

    grid.iter()
        .map(|row| {
            let cells: Vec<String> = row
                .iter()
                .zip(&widths)
                .enumerate()
                .map(|(c, (cell, &w))| {
                    let pad = " ".repeat(w.saturating_sub(width(cell)));
                    if c == 0 {
                        format!("{}{}", cell, pad)
                    } else {
                        format!("{}{}", pad, cell)
                    }
                })
                .collect();
            cells.join("  ").trim_end().to_string()
        })
        .collect()
}

/// Render the report as CSV: a header record, then one record per metric
/// row with formatted cells.
pub fn render_csv(report: &Report) -> Result<String, CliError> {
    let mut header = vec!["구분".to_string()];
    for section in &report.sections {
        header.extend(section.columns.iter().map(|c| c.label.clone()));
        header.push(section.subtotal_label.clone());
    }
    header.push(report.grand_total_label.clone());

    let mut buffer = Vec::new();
    {
        let mut wtr = csv::WriterBuilder::new().from_writer(&mut buffer);
        wtr.write_record(&header)?;
        for row in report.metric_rows() {
            let mut record = vec![row.label().to_string()];
            record.extend(row.formatted_cells());
            wtr.write_record(&record)?;
        }
        wtr.flush()
            .map_err(|e| CliError::Csv(format!("Failed to flush CSV writer: {}", e)))?;
    }

    String::from_utf8(buffer).map_err(|_| CliError::Csv("CSV output is not valid UTF-8".to_string()))
}
