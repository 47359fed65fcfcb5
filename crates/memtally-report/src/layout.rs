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

//! Column layouts: which export rows feed which report columns.

use memtally_core::{ColumnRef, MetricPath, ParsedTable};

use crate::metrics::MemberFigures;

/// Fallback report date used when the export carries no period.
pub const DEFAULT_FALLBACK_DATE: &str = "2026.02";

/// One report column: a display label and the metric path it reads.
///
/// The path's column indices are placeholders; figures are read by
/// substituting each export column in turn.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Column {
    pub label: String,
    pub path: MetricPath,
}

impl Column {
    pub fn new(label: impl Into<String>, path: impl Into<MetricPath>) -> Self {
        Self {
            label: label.into(),
            path: path.into(),
        }
    }

    /// Value of this column for one export column index.
    pub fn value(&self, table: &ParsedTable, column: usize) -> f64 {
        self.path.with_column(column).value(table)
    }

    pub fn figures(&self, table: &ParsedTable) -> MemberFigures {
        MemberFigures::resolve(&self.path, table)
    }
}

/// A named, ordered group of columns reported with a subtotal.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ColumnSet {
    pub name: String,
    /// Header of the subtotal column, e.g. `소계 (A)`.
    pub subtotal_label: String,
    pub columns: Vec<Column>,
}

impl ColumnSet {
    pub fn new(name: impl Into<String>, subtotal_label: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            subtotal_label: subtotal_label.into(),
            columns: Vec::new(),
        }
    }

    /// Append a column and return the set, for chained construction.
    pub fn column(mut self, label: impl Into<String>, path: impl Into<MetricPath>) -> Self {
        self.columns.push(Column::new(label, path));
        self
    }

    /// Sum over every column of the value at one export column index.
    pub fn subtotal(&self, table: &ParsedTable, column: usize) -> f64 {
        self.columns.iter().map(|c| c.value(table, column)).sum()
    }

    pub fn figures(&self, table: &ParsedTable) -> MemberFigures {
        self.columns.iter().map(|c| c.figures(table)).sum()
    }
}

/// Sum of the subtotals of every set at one export column index.
pub fn grand_total(sets: &[ColumnSet], table: &ParsedTable, column: usize) -> f64 {
    sets.iter().map(|set| set.subtotal(table, column)).sum()
}

/// The full report layout.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ReportLayout {
    pub sections: Vec<ColumnSet>,
    /// Header of the grand-total column.
    pub grand_total_label: String,
    /// Report date used when the export has no period.
    pub fallback_date: String,
}

impl ReportLayout {
    /// Every column of every section, in display order.
    pub fn columns(&self) -> impl Iterator<Item = &Column> {
        self.sections.iter().flat_map(|set| set.columns.iter())
    }

    pub fn grand_total(&self, table: &ParsedTable, column: usize) -> f64 {
        grand_total(&self.sections, table, column)
    }
}

impl Default for ReportLayout {
    /// The weekly membership layout: textbook and online services, then
    /// other businesses.
    fn default() -> Self {
        let books_and_textbooks = ColumnSet::new("교재 및 온라인 서비스 / 교과서", "소계 (A)")
            .column("NE Books PC", MetricPath::single("NE Books", 1))
            .column("NE Books MO", MetricPath::single("NE Books(모바일)", 1))
            .column(
                "NE Tutor PC",
                MetricPath::sum([
                    ColumnRef::new("NE Tutor", 1),
                    ColumnRef::new("NE Tutor(클래스카드)", 1),
                ]),
            )
            .column("NE Tutor MO", MetricPath::single("NE Tutor(모바일)", 1))
            .column("NELT", MetricPath::single("NELT", 1))
            .column("NE B&G PC", MetricPath::single("Build&Grow 국문", 1))
            .column("NE B&G MO", MetricPath::single("Build&Grow 국문 (모바일)", 1))
            .column("NE Teacher PC", MetricPath::single("NE Teacher", 1))
            .column("NE Teacher MO", MetricPath::single("NE Teacher(모바일)", 1))
            .column("구 사이트 (NE TextBook)", MetricPath::single("NE TextBook", 1));

        let other_businesses = ColumnSet::new("기타 사업", "소계 (B)")
            .column("NE Times PC", MetricPath::single("NE Times", 1))
            .column("NE Times MO", MetricPath::single("NE Times(모바일)", 1))
            .column("NE클래스 PC", MetricPath::single("TomatoClass", 1))
            .column("NE클래스 MO", MetricPath::single("TomatoClass(모바일)", 1))
            .column("기타", MetricPath::single("기타", 1));

        Self {
            sections: vec![books_and_textbooks, other_businesses],
            grand_total_label: "총계 (A+B)".to_string(),
            fallback_date: DEFAULT_FALLBACK_DATE.to_string(),
        }
    }
}
