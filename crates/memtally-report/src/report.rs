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

//! The assembled report: per-column figures, subtotals and the grand total,
//! plus the nine labelled metric rows a presentation layer renders.

use memtally_core::{format_number, format_percent, MetricPath, ParsedTable};
use tracing::debug;

use crate::layout::{Column, ColumnSet, ReportLayout};
use crate::metrics::{MemberFigures, Rates};
use crate::period::{report_date, report_title, week_label, year_month};

/// Whether a metric row holds member counts or rates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "snake_case")
)]
pub enum MetricKind {
    Count,
    Rate,
}

impl MetricKind {
    /// Counts use [`format_number`], rates use [`format_percent`].
    pub fn format(self, value: f64) -> String {
        match self {
            MetricKind::Count => format_number(value),
            MetricKind::Rate => format_percent(value),
        }
    }
}

/// The nine report rows, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "snake_case")
)]
pub enum Metric {
    TotalMembers,
    ActiveMembers,
    DormancyRate,
    DormantWithdrawals,
    VoluntaryWithdrawals,
    WithdrawalRate,
    NetChurnRate,
    NewSignups,
    NewSignupRate,
}

impl Metric {
    pub const ALL: [Metric; 9] = [
        Metric::TotalMembers,
        Metric::ActiveMembers,
        Metric::DormancyRate,
        Metric::DormantWithdrawals,
        Metric::VoluntaryWithdrawals,
        Metric::WithdrawalRate,
        Metric::NetChurnRate,
        Metric::NewSignups,
        Metric::NewSignupRate,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Metric::TotalMembers => "전체 가입회원수_휴면회원포함 (명)",
            Metric::ActiveMembers => "전체 가입유효회원수_휴면회원제외 (명)",
            Metric::DormancyRate => "휴면 회원률 (%)",
            Metric::DormantWithdrawals => "휴면계정 탈퇴회원수 (명)",
            Metric::VoluntaryWithdrawals => "본인 탈퇴회원수 (명)",
            Metric::WithdrawalRate => "탈퇴율 (%)",
            Metric::NetChurnRate => "순수 이탈률 (%)",
            Metric::NewSignups => "신규 가입회원 수 (명)",
            Metric::NewSignupRate => "신규 가입률 (%)",
        }
    }

    pub fn kind(self) -> MetricKind {
        match self {
            Metric::DormancyRate
            | Metric::WithdrawalRate
            | Metric::NetChurnRate
            | Metric::NewSignupRate => MetricKind::Rate,
            _ => MetricKind::Count,
        }
    }

    /// This metric's value for a set of figures.
    pub fn of(self, figures: &MemberFigures) -> f64 {
        match self {
            Metric::TotalMembers => figures.total_members,
            Metric::ActiveMembers => figures.active_members,
            Metric::DormancyRate => figures.dormancy_rate(),
            Metric::DormantWithdrawals => figures.dormant_withdrawals,
            Metric::VoluntaryWithdrawals => figures.voluntary_withdrawals,
            Metric::WithdrawalRate => figures.withdrawal_rate(),
            Metric::NetChurnRate => figures.net_churn_rate(),
            Metric::NewSignups => figures.new_signups,
            Metric::NewSignupRate => figures.new_signup_rate(),
        }
    }

    pub fn format(self, value: f64) -> String {
        self.kind().format(value)
    }
}

/// Figures for one report column.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ColumnReport {
    pub label: String,
    pub path: MetricPath,
    pub figures: MemberFigures,
    pub rates: Rates,
}

impl ColumnReport {
    fn build(column: &Column, table: &ParsedTable) -> Self {
        let figures = column.figures(table);
        Self {
            label: column.label.clone(),
            path: column.path.clone(),
            rates: figures.rates(),
            figures,
        }
    }
}

/// One section of the report and its subtotal.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SectionReport {
    pub name: String,
    pub subtotal_label: String,
    pub columns: Vec<ColumnReport>,
    pub subtotal: MemberFigures,
    /// Rates of the subtotal figures, not an average of column rates.
    pub subtotal_rates: Rates,
}

impl SectionReport {
    fn build(set: &ColumnSet, table: &ParsedTable) -> Self {
        let columns: Vec<ColumnReport> = set
            .columns
            .iter()
            .map(|column| ColumnReport::build(column, table))
            .collect();
        let subtotal: MemberFigures = columns.iter().map(|c| c.figures).sum();
        Self {
            name: set.name.clone(),
            subtotal_label: set.subtotal_label.clone(),
            columns,
            subtotal_rates: subtotal.rates(),
            subtotal,
        }
    }
}

/// A fully computed membership report.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Report {
    /// `사이트별 회원 현황 _ {year.month}`
    pub title: String,
    /// `{n}주차`, or `실적` for an undated export.
    pub week_label: String,
    /// Period text as found in the export, possibly empty.
    pub period: String,
    /// Start of the period, or the layout fallback.
    pub report_date: String,
    pub sections: Vec<SectionReport>,
    pub grand_total_label: String,
    pub grand_total: MemberFigures,
    pub grand_total_rates: Rates,
}

impl Report {
    pub fn build(table: &ParsedTable, layout: &ReportLayout) -> Self {
        let date = report_date(&table.period, &layout.fallback_date);
        let sections: Vec<SectionReport> = layout
            .sections
            .iter()
            .map(|set| SectionReport::build(set, table))
            .collect();
        let grand_total: MemberFigures = sections.iter().map(|s| s.subtotal).sum();

        debug!(
            date,
            sections = sections.len(),
            total_members = grand_total.total_members,
            "built report"
        );

        Self {
            title: report_title(&year_month(date)),
            week_label: week_label(date),
            period: table.period.clone(),
            report_date: date.to_string(),
            sections,
            grand_total_label: layout.grand_total_label.clone(),
            grand_total_rates: grand_total.rates(),
            grand_total,
        }
    }

    /// False when every column's counts are zero, which usually means the
    /// export did not contain the expected site rows.
    pub fn has_data(&self) -> bool {
        self.sections
            .iter()
            .flat_map(|s| s.columns.iter())
            .any(|c| !c.figures.is_zero())
    }

    /// The nine metric rows in display order.
    pub fn metric_rows(&self) -> Vec<MetricRow> {
        Metric::ALL
            .iter()
            .map(|&metric| MetricRow {
                metric,
                groups: self
                    .sections
                    .iter()
                    .map(|section| RowGroup {
                        values: section.columns.iter().map(|c| metric.of(&c.figures)).collect(),
                        subtotal: metric.of(&section.subtotal),
                    })
                    .collect(),
                grand_total: metric.of(&self.grand_total),
            })
            .collect()
    }
}

/// One metric's values within a section.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RowGroup {
    pub values: Vec<f64>,
    pub subtotal: f64,
}

/// One labelled metric row across every section.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MetricRow {
    pub metric: Metric,
    /// One group per report section, in layout order.
    pub groups: Vec<RowGroup>,
    pub grand_total: f64,
}

impl MetricRow {
    pub fn label(&self) -> &'static str {
        self.metric.label()
    }

    pub fn kind(&self) -> MetricKind {
        self.metric.kind()
    }

    /// Every cell of the row, formatted for display: section values, each
    /// followed by its subtotal, then the grand total.
    pub fn formatted_cells(&self) -> Vec<String> {
        let mut cells = Vec::new();
        for group in &self.groups {
            cells.extend(group.values.iter().map(|&v| self.metric.format(v)));
            cells.push(self.metric.format(group.subtotal));
        }
        cells.push(self.metric.format(self.grand_total));
        cells
    }
}
