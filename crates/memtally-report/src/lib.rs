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

//! Membership metrics and report model.
//!
//! Builds on [`memtally_core`] to turn a parsed export into the numbers a
//! weekly membership report shows: per-site figures, section subtotals, a
//! grand total, and four rates derived the same way at every level.
//!
//! ```
//! use memtally_core::parse;
//! use memtally_report::{Report, ReportLayout};
//!
//! let table = parse("조회기간: 2026.02.08 ~ 2026.02.14\nNE Books\t100\t90\t1\t2\t3\t5\n");
//! let report = Report::build(&table, &ReportLayout::default());
//!
//! assert_eq!(report.week_label, "2주차");
//! assert_eq!(report.sections[0].subtotal.total_members, 100.0);
//! assert_eq!(report.grand_total.new_signups, 5.0);
//! ```

pub mod layout;
pub mod metrics;
pub mod period;
pub mod report;

pub use layout::{grand_total, Column, ColumnSet, ReportLayout};
pub use metrics::{
    dormancy_rate, net_churn_rate, new_signup_rate, withdrawal_rate, MemberFigures, Rates,
};
pub use report::{ColumnReport, Metric, MetricKind, MetricRow, Report, RowGroup, SectionReport};
