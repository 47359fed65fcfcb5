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

//! End-to-end report tests over the canonical membership export.

use memtally_core::{parse, ParsedTable};
use memtally_report::period::{report_date, week_of_month, year_month};
use memtally_report::{Metric, MetricKind, Report, ReportLayout};
use memtally_test::fixtures;
use memtally_test::fixtures::builders::ExportBuilder;
use memtally_test::fixtures::errors;
use proptest::prelude::*;

fn membership_report() -> Report {
    Report::build(&parse(fixtures::membership_export()), &ReportLayout::default())
}

// ==================== Subtotals ====================

#[test]
fn test_section_a_subtotal() {
    let report = membership_report();
    let a = &report.sections[0].subtotal;
    assert_eq!(a.total_members, 256_000.0);
    assert_eq!(a.active_members, 224_300.0);
    assert_eq!(a.dormant_withdrawals, 750.0);
    assert_eq!(a.voluntary_withdrawals, 532.0);
    assert_eq!(a.new_signups, 2_430.0);
}

#[test]
fn test_section_b_subtotal() {
    let report = membership_report();
    let b = &report.sections[1].subtotal;
    assert_eq!(b.total_members, 66_500.0);
    assert_eq!(b.active_members, 52_400.0);
    assert_eq!(b.dormant_withdrawals, 41.0);
    assert_eq!(b.voluntary_withdrawals, 26.0);
    assert_eq!(b.new_signups, 265.0);
}

#[test]
fn test_grand_total_is_sum_of_subtotals() {
    let report = membership_report();
    let g = report.grand_total;
    assert_eq!(g.total_members, 322_500.0);
    assert_eq!(g.active_members, 276_700.0);
    assert_eq!(g.dormant_withdrawals, 791.0);
    assert_eq!(g.voluntary_withdrawals, 558.0);
    assert_eq!(g.new_signups, 2_695.0);
    assert_eq!(g, report.sections[0].subtotal + report.sections[1].subtotal);
}

#[test]
fn test_layout_totals_agree_with_report() {
    let table = parse(fixtures::membership_export());
    let layout = ReportLayout::default();
    let report = Report::build(&table, &layout);
    for column in [1, 2, 3, 4, 6] {
        assert_eq!(layout.grand_total(&table, column), report.grand_total.by_column(column));
    }
}

#[test]
fn test_combined_tutor_column() {
    let report = membership_report();
    let tutor = &report.sections[0].columns[2];
    assert_eq!(tutor.label, "NE Tutor PC");
    assert_eq!(tutor.figures.total_members, 12_000.0);
    assert_eq!(tutor.figures.new_signups, 140.0);
}

// ==================== Labels ====================

#[test]
fn test_period_labels() {
    let report = membership_report();
    assert_eq!(report.period, "2026.02.08 ~ 2026.02.14");
    assert_eq!(report.week_label, "2주차");
    assert_eq!(report.title, "사이트별 회원 현황 _ 2026.02");

    let date = report_date(&report.period, "2026.02");
    assert_eq!(year_month(date), "2026.02");
    assert_eq!(week_of_month(date), Some(2));
}

// ==================== Rendering rows ====================

#[test]
fn test_grand_total_cells() {
    let rows = membership_report().metric_rows();
    let grand: Vec<String> = rows.iter().map(|r| r.metric.format(r.grand_total)).collect();
    assert_eq!(
        grand,
        vec![
            "322,500", "276,700", "14.2%", "791", "558", "0.4%", "0.2%", "2,695", "0.8%",
        ]
    );
}

#[test]
fn test_rate_rows_use_percent() {
    for row in membership_report().metric_rows() {
        let cells = row.formatted_cells();
        match row.kind() {
            MetricKind::Rate => assert!(cells.iter().all(|c| c.ends_with('%')), "{:?}", row.metric),
            MetricKind::Count => assert!(cells.iter().all(|c| !c.contains('%')), "{:?}", row.metric),
        }
    }
}

#[test]
fn test_textbook_site_rates_are_zero_when_nothing_changes() {
    let report = membership_report();
    let textbook = &report.sections[0].columns[9];
    assert_eq!(textbook.rates.dormancy, 0.0);
    assert_eq!(Metric::NewSignupRate.of(&textbook.figures), 0.0);
}

// ==================== Degenerate inputs ====================

#[test]
fn test_degenerate_inputs_build_empty_reports() {
    for (name, text) in errors::degenerate_samples() {
        let report = Report::build(&parse(text), &ReportLayout::default());
        assert!(!report.has_data(), "{}", name);
        assert!(report.grand_total.is_zero(), "{}", name);
        for row in report.metric_rows() {
            assert!(row.grand_total == 0.0, "{} {:?}", name, row.metric);
        }
    }
}

#[test]
fn test_partial_export() {
    let text = ExportBuilder::new()
        .period("2026.03.01 ~ 2026.03.07")
        .headers(["a", "b", "c", "d", "e", "f"])
        .row("NELT", ["100", "80", "1", "2", "3", "4"])
        .build();
    let report = Report::build(&parse(&text), &ReportLayout::default());
    assert!(report.has_data());
    assert_eq!(report.week_label, "1주차");
    assert_eq!(report.sections[0].subtotal.total_members, 100.0);
    assert!(report.sections[1].subtotal.is_zero());
}

#[cfg(feature = "serde")]
#[test]
fn test_report_serializes() {
    let json = serde_json::to_value(membership_report()).unwrap();
    assert_eq!(json["week_label"], "2주차");
    assert_eq!(json["sections"][0]["columns"][2]["path"], "NE Tutor/1+NE Tutor(클래스카드)/1");
    assert_eq!(json["grand_total"]["total_members"], 322_500.0);
}

// ==================== Properties ====================

fn arb_count() -> impl Strategy<Value = f64> {
    prop_oneof![Just(0.0), (-1_000_000i64..10_000_000).prop_map(|n| n as f64)]
}

proptest! {
    #[test]
    fn prop_rates_always_finite(v1 in arb_count(), v2 in arb_count(), v3 in arb_count(), v4 in arb_count(), v6 in arb_count()) {
        let figures = memtally_report::MemberFigures {
            total_members: v1,
            active_members: v2,
            dormant_withdrawals: v3,
            voluntary_withdrawals: v4,
            new_signups: v6,
        };
        let rates = figures.rates();
        prop_assert!(rates.dormancy.is_finite());
        prop_assert!(rates.withdrawal.is_finite());
        prop_assert!(rates.net_churn.is_finite());
        prop_assert!(rates.new_signup.is_finite());
        if v1 == 0.0 {
            prop_assert_eq!(rates.dormancy, 0.0);
            prop_assert_eq!(rates.new_signup, 0.0);
        }
        if v1 + v3 + v4 == 0.0 {
            prop_assert_eq!(rates.withdrawal, 0.0);
            prop_assert_eq!(rates.net_churn, 0.0);
        }
    }

    #[test]
    fn prop_report_never_panics(text in "\\PC{0,400}") {
        let report = Report::build(&parse(&text), &ReportLayout::default());
        prop_assert_eq!(report.metric_rows().len(), 9);
        for row in report.metric_rows() {
            for cell in row.formatted_cells() {
                prop_assert!(!cell.contains("NaN") && !cell.contains("inf"));
            }
        }
    }

    #[test]
    fn prop_grand_total_sums_sections(counts in proptest::collection::vec(0u32..100_000, 15)) {
        let layout = ReportLayout::default();
        let mut table = ParsedTable::new();
        for (column, count) in layout.columns().zip(&counts) {
            for reference in column.path.refs() {
                table.rows.insert(reference.row.clone(), vec![f64::from(*count); 6]);
            }
        }
        let report = Report::build(&table, &layout);
        let sum: f64 = report.sections.iter().map(|s| s.subtotal.total_members).sum();
        prop_assert_eq!(report.grand_total.total_members, sum);
    }
}
