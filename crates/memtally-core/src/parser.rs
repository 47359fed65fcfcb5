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

//! Parser for pasted tab-separated exports.
//!
//! The input is whatever a user copied out of the reporting tool: an
//! optional metadata line carrying the query period, an optional header line
//! (possibly wrapped over several lines), then one tab-separated line per
//! row. The three stages share a single line cursor, so metadata is only
//! recognised before the header.

use crate::config::ParserConfig;
use crate::table::{ParsedTable, RowMap};
use tracing::{debug, trace};

/// Parse pasted text with the default markers.
///
/// Never fails: any input, including an empty string, yields a table.
///
/// # Examples
///
/// ```
/// use memtally_core::parse;
///
/// let table = parse("구분\t전체\n(명)\nNELT\t1,234\tn/a\n");
/// assert_eq!(table.headers, vec!["전체 (명)"]);
/// assert_eq!(table.row("NELT"), Some(&[1234.0, 0.0][..]));
/// ```
pub fn parse(raw: &str) -> ParsedTable {
    parse_with_config(raw, &ParserConfig::default())
}

/// Parse pasted text with custom markers.
pub fn parse_with_config(raw: &str, config: &ParserConfig) -> ParsedTable {
    let raw = raw.strip_prefix('\u{feff}').unwrap_or(raw);
    let lines: Vec<&str> = raw.lines().collect();

    let mut table = ParsedTable::new();

    let (cursor, period) = scan_metadata(&lines, config);
    if let Some(period) = period {
        debug!(period = %period, "found query period");
        table.period = period;
    }

    let (cursor, headers) = scan_header(&lines, cursor, config);
    table.headers = headers;

    parse_rows(lines.get(cursor..).unwrap_or_default(), config, &mut table.rows);
    debug!(
        headers = table.headers.len(),
        rows = table.rows.len(),
        "parsed pasted table"
    );

    table
}

/// Find the period line, stopping early at the header line.
///
/// Returns the cursor for the header scan: just past the period line, at
/// the header line, or the top of the input when neither was seen.
fn scan_metadata(lines: &[&str], config: &ParserConfig) -> (usize, Option<String>) {
    for (idx, line) in lines.iter().enumerate() {
        let line = line.trim();
        if config.is_period_line(line) {
            let period = line
                .split_once(':')
                .map(|(_, rest)| rest.trim())
                .unwrap_or_default();
            return (idx + 1, Some(period.to_string()));
        }
        if config.is_header_line(line) {
            return (idx, None);
        }
    }
    (0, None)
}

/// Find the header line and fold any wrapped continuation lines into it.
///
/// Returns the cursor of the first data line and the header labels. Without
/// a header line the cursor is left where it was.
fn scan_header(lines: &[&str], start: usize, config: &ParserConfig) -> (usize, Vec<String>) {
    let remaining = lines.get(start..).unwrap_or_default();
    let Some(offset) = remaining
        .iter()
        .position(|line| config.is_header_line(line.trim()))
    else {
        debug!("no header line found");
        return (start, Vec::new());
    };

    let header_idx = start + offset;
    let mut header = lines[header_idx].trim().to_string();
    let mut next = header_idx + 1;
    while let Some(line) = lines.get(next) {
        let line = line.trim();
        if !config.is_header_continuation(line) {
            break;
        }
        trace!(line = next + 1, fragment = line, "folding header continuation");
        header.push(' ');
        header.push_str(line);
        next += 1;
    }
    debug!(line = header_idx + 1, "found header line");

    let headers = header
        .split('\t')
        .skip(1)
        .map(|label| label.trim().to_string())
        .collect();
    (next, headers)
}

fn parse_rows(lines: &[&str], config: &ParserConfig, rows: &mut RowMap) {
    for line in lines {
        let line = line.trim();
        if line.is_empty() || config.is_separator_line(line) {
            continue;
        }

        let Some((name, cells)) = line.split_once('\t') else {
            trace!(line, "skipping line without tabs");
            continue;
        };
        let name = name.trim();
        if name.is_empty() || name == config.row_sentinel {
            continue;
        }

        let values = cells.split('\t').map(parse_cell).collect();
        if rows.insert(name, values).is_some() {
            debug!(row = name, "row repeated, keeping the later values");
        }
    }
}

/// Parse one cell, degrading to `0` when no number can be read.
///
/// Thousands separators are removed first. Like a lenient float reader, the
/// longest numeric prefix is used, so `"12명"` reads as `12`. Non-finite
/// results are rejected.
///
/// # Examples
///
/// ```
/// use memtally_core::parse_cell;
///
/// assert_eq!(parse_cell(" 1,234,567 "), 1234567.0);
/// assert_eq!(parse_cell("-3.5e2"), -350.0);
/// assert_eq!(parse_cell("12명"), 12.0);
/// assert_eq!(parse_cell("abc"), 0.0);
/// assert_eq!(parse_cell(""), 0.0);
/// ```
pub fn parse_cell(cell: &str) -> f64 {
    let cleaned: String = cell.chars().filter(|&c| c != ',').collect();
    match leading_number(cleaned.trim()).parse::<f64>() {
        Ok(value) if value.is_finite() => value,
        _ => 0.0,
    }
}

/// Longest prefix of the form `[+-]? digits [. digits] [e [+-]? digits]`.
fn leading_number(s: &str) -> &str {
    let bytes = s.as_bytes();
    let digits_from = |mut pos: usize| {
        while bytes.get(pos).map_or(false, u8::is_ascii_digit) {
            pos += 1;
        }
        pos
    };

    let mut end = usize::from(matches!(bytes.first(), Some(b'+' | b'-')));
    let int_end = digits_from(end);
    let mut mantissa_digits = int_end - end;
    end = int_end;

    if bytes.get(end) == Some(&b'.') {
        let frac_end = digits_from(end + 1);
        mantissa_digits += frac_end - (end + 1);
        if mantissa_digits > 0 {
            end = frac_end;
        }
    }
    if mantissa_digits == 0 {
        return "";
    }

    if matches!(bytes.get(end), Some(b'e' | b'E')) {
        let sign = usize::from(matches!(bytes.get(end + 1), Some(b'+' | b'-')));
        let exp_start = end + 1 + sign;
        let exp_end = digits_from(exp_start);
        if exp_end > exp_start {
            end = exp_end;
        }
    }

    &s[..end]
}

#[cfg(test)]
mod tests {
    use super::*;

    // ==================== Cell parsing tests ====================

    #[test]
    fn test_parse_cell_plain() {
        assert_eq!(parse_cell("42"), 42.0);
        assert_eq!(parse_cell("3.25"), 3.25);
        assert_eq!(parse_cell("-7"), -7.0);
        assert_eq!(parse_cell("+7"), 7.0);
    }

    #[test]
    fn test_parse_cell_strips_commas_and_whitespace() {
        assert_eq!(parse_cell("1,000"), 1000.0);
        assert_eq!(parse_cell("  12,345.5  "), 12345.5);
        assert_eq!(parse_cell("1,,0"), 10.0);
    }

    #[test]
    fn test_parse_cell_garbage_is_zero() {
        assert_eq!(parse_cell("abc"), 0.0);
        assert_eq!(parse_cell(""), 0.0);
        assert_eq!(parse_cell("-"), 0.0);
        assert_eq!(parse_cell("."), 0.0);
        assert_eq!(parse_cell("NaN"), 0.0);
    }

    #[test]
    fn test_parse_cell_non_finite_is_zero() {
        assert_eq!(parse_cell("Infinity"), 0.0);
        assert_eq!(parse_cell("1e999"), 0.0);
    }

    #[test]
    fn test_parse_cell_numeric_prefix() {
        assert_eq!(parse_cell("12명"), 12.0);
        assert_eq!(parse_cell("5.5%"), 5.5);
        assert_eq!(parse_cell("1 000"), 1.0);
        assert_eq!(parse_cell("2e"), 2.0);
        assert_eq!(parse_cell("2e+"), 2.0);
    }

    #[test]
    fn test_parse_cell_partial_decimals() {
        assert_eq!(parse_cell(".5"), 0.5);
        assert_eq!(parse_cell("5."), 5.0);
        assert_eq!(parse_cell("1.5e3"), 1500.0);
        assert_eq!(parse_cell("1E-2"), 0.01);
    }

    // ==================== Metadata scan tests ====================

    #[test]
    fn test_period_after_first_colon() {
        let table = parse("조회기간: 2024.01.01 ~ 2024.01.07\n");
        assert_eq!(table.period, "2024.01.01 ~ 2024.01.07");
    }

    #[test]
    fn test_period_keeps_later_colons() {
        let table = parse("조회기간: 2024.01.01 00:00 ~ 2024.01.07 23:59\n");
        assert_eq!(table.period, "2024.01.01 00:00 ~ 2024.01.07 23:59");
    }

    #[test]
    fn test_period_line_without_colon() {
        let table = parse("조회기간 2024\nA\t1\n");
        assert_eq!(table.period, "");
        assert_eq!(table.row("A"), Some(&[1.0][..]));
    }

    #[test]
    fn test_period_after_header_is_ignored() {
        let table = parse("구분\tA\nRow\t1\n조회기간:2024\n");
        assert_eq!(table.period, "");
        assert_eq!(table.headers, vec!["A"]);
        assert_eq!(table.row("Row"), Some(&[1.0][..]));
    }

    #[test]
    fn test_lines_before_period_are_not_rows() {
        let table = parse("Early\t1\n조회기간:P\nLate\t2\n");
        assert!(table.row("Early").is_none());
        assert_eq!(table.row("Late"), Some(&[2.0][..]));
    }

    // ==================== Header tests ====================

    #[test]
    fn test_header_fields_trimmed() {
        let table = parse("구분\t A \t B\nRow\t1\t2\n");
        assert_eq!(table.headers, vec!["A", "B"]);
    }

    #[test]
    fn test_header_continuation_folds_multiple_lines() {
        let table = parse("구분\tA\t전체 가입회원수\n휴면회원포함\n(명)\nRow\t1\t2\n");
        assert_eq!(table.headers, vec!["A", "전체 가입회원수 휴면회원포함 (명)"]);
        assert_eq!(table.rows.len(), 1);
    }

    #[test]
    fn test_long_line_ends_continuation() {
        let table = parse("구분\tA\nthis line is definitely too long\nRow\t1\n");
        assert_eq!(table.headers, vec!["A"]);
        assert_eq!(table.row("Row"), Some(&[1.0][..]));
    }

    #[test]
    fn test_blank_line_ends_continuation() {
        let table = parse("구분\tA\n\n(명)\nRow\t1\n");
        assert_eq!(table.headers, vec!["A"]);
        assert_eq!(table.rows.len(), 1);
    }

    #[test]
    fn test_no_header_rows_start_after_metadata() {
        let table = parse("조회기간:P\nA\t1\nB\t2\n");
        assert!(table.headers.is_empty());
        assert_eq!(table.rows.len(), 2);
    }

    #[test]
    fn test_no_metadata_no_header_rows_from_top() {
        let table = parse("A\t1\nB\t2\n");
        assert_eq!(table.period, "");
        assert!(table.headers.is_empty());
        assert_eq!(table.rows.names().collect::<Vec<_>>(), vec!["A", "B"]);
    }

    #[test]
    fn test_header_found_without_metadata_skips_preamble() {
        let table = parse("Preamble\t9\n구분\tA\nRow\t1\n");
        assert!(table.row("Preamble").is_none());
        assert_eq!(table.row("Row"), Some(&[1.0][..]));
    }

    // ==================== Row tests ====================

    #[test]
    fn test_skips_separator_and_tabless_lines() {
        let table = parse("A\t1\n------\nnote without tabs\nB\t2\n");
        assert_eq!(table.rows.names().collect::<Vec<_>>(), vec!["A", "B"]);
    }

    #[test]
    fn test_skips_blank_and_sentinel_row_names() {
        let table = parse("구분\tX\nRow\t1\n\t5\n구분\t6\n");
        assert_eq!(table.headers, vec!["X"]);
        assert_eq!(table.rows.names().collect::<Vec<_>>(), vec!["Row"]);
    }

    #[test]
    fn test_trailing_tabs_are_trimmed() {
        let table = parse("A\t1\t2\t\t\n");
        assert_eq!(table.row("A"), Some(&[1.0, 2.0][..]));
    }

    #[test]
    fn test_inner_empty_cells_become_zero() {
        let table = parse("A\t1\t\t3\n");
        assert_eq!(table.row("A"), Some(&[1.0, 0.0, 3.0][..]));
    }

    #[test]
    fn test_row_names_are_trimmed_and_case_sensitive() {
        let table = parse("  NE Books \t1\nne books\t2\n");
        assert_eq!(table.row("NE Books"), Some(&[1.0][..]));
        assert_eq!(table.row("ne books"), Some(&[2.0][..]));
    }

    #[test]
    fn test_crlf_line_endings() {
        let table = parse("조회기간:P\r\n구분\tA\r\nRow\t1\r\n");
        assert_eq!(table.period, "P");
        assert_eq!(table.headers, vec!["A"]);
        assert_eq!(table.row("Row"), Some(&[1.0][..]));
    }

    #[test]
    fn test_byte_order_mark_is_ignored() {
        let table = parse("\u{feff}구분\tA\nRow\t1\n");
        assert_eq!(table.headers, vec!["A"]);
    }

    #[test]
    fn test_custom_config() {
        let config = ParserConfig::builder()
            .period_marker("Period")
            .row_sentinel("Category")
            .build();
        let table = parse_with_config("Period: Q1\nCategory\tX\nRow\t4\n", &config);
        assert_eq!(table.period, "Q1");
        assert_eq!(table.headers, vec!["X"]);
        assert_eq!(table.row("Row"), Some(&[4.0][..]));
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(parse(""), ParsedTable::new());
        assert_eq!(parse("   \n\t\n  "), ParsedTable::new());
    }
}
