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

//! Report dates and the labels derived from them.

use chrono::{Datelike, NaiveDate};

const DATE_FORMATS: [&str; 3] = ["%Y.%m.%d", "%Y-%m-%d", "%Y/%m/%d"];

/// Label used when the report date does not parse as a date.
pub const UNDATED_LABEL: &str = "실적";

/// Start of the reporting period: the text before the first `~`, trimmed,
/// or `fallback` when that is empty.
///
/// ```
/// use memtally_report::period::report_date;
///
/// assert_eq!(report_date("2026.02.08 ~ 2026.02.14", "2026.02"), "2026.02.08");
/// assert_eq!(report_date("", "2026.02"), "2026.02");
/// ```
pub fn report_date<'a>(period: &'a str, fallback: &'a str) -> &'a str {
    let start = period.split('~').next().unwrap_or_default().trim();
    if start.is_empty() {
        fallback
    } else {
        start
    }
}

/// First seven characters of `date`, with the first `-` replaced by `.`.
pub fn year_month(date: &str) -> String {
    let head: String = date.chars().take(7).collect();
    head.replacen('-', ".", 1)
}

/// Week of the month, `ceil(day / 7)`, when `date` parses.
pub fn week_of_month(date: &str) -> Option<u32> {
    let date = date.trim();
    DATE_FORMATS
        .iter()
        .find_map(|format| NaiveDate::parse_from_str(date, format).ok())
        .map(|parsed| (parsed.day() + 6) / 7)
}

/// `"{n}주차"`, or [`UNDATED_LABEL`] when the date does not parse.
pub fn week_label(date: &str) -> String {
    match week_of_month(date) {
        Some(week) => format!("{}주차", week),
        None => UNDATED_LABEL.to_string(),
    }
}

pub fn report_title(year_month: &str) -> String {
    format!("사이트별 회원 현황 _ {}", year_month)
}
