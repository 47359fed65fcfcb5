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

//! Number and percentage formatting for report cells.
//!
//! Numbers use `,` thousands grouping and at most three fraction digits,
//! the way the export's users read them. Non-finite values never reach the
//! output as `NaN` or `inf`.

/// Format a number with thousands grouping.
///
/// At most three fraction digits are kept, exact ties rounding away from
/// zero, and trailing zeros are dropped. Non-finite values format as `"0"`.
///
/// # Examples
///
/// ```
/// use memtally_core::format_number;
///
/// assert_eq!(format_number(1234567.0), "1,234,567");
/// assert_eq!(format_number(-1234.5), "-1,234.5");
/// assert_eq!(format_number(0.12345), "0.123");
/// assert_eq!(format_number(f64::NAN), "0");
/// ```
pub fn format_number(value: f64) -> String {
    if !value.is_finite() {
        return "0".to_string();
    }
    let rounded = format!("{:.3}", round_half_away(value, 3));
    let trimmed = rounded.trim_end_matches('0').trim_end_matches('.');
    let grouped = add_thousands_separator(trimmed);
    if grouped == "-0" {
        "0".to_string()
    } else {
        grouped
    }
}

/// Format a ratio as a percentage with one decimal place.
///
/// Non-finite values format as `"0.0%"`.
///
/// # Examples
///
/// ```
/// use memtally_core::format_percent;
///
/// assert_eq!(format_percent(0.1234), "12.3%");
/// assert_eq!(format_percent(1.0), "100.0%");
/// assert_eq!(format_percent(f64::INFINITY), "0.0%");
/// ```
pub fn format_percent(value: f64) -> String {
    let percent = value * 100.0;
    if !percent.is_finite() {
        return "0.0%".to_string();
    }
    format!("{:.1}%", round_half_away(percent, 1))
}

/// Round to `digits` decimals with ties away from zero. `{:.N}` alone
/// rounds exact ties to even.
fn round_half_away(value: f64, digits: i32) -> f64 {
    let scale = 10f64.powi(digits);
    let rounded = (value * scale).round() / scale;
    if rounded.is_finite() {
        rounded
    } else {
        value
    }
}

/// Insert `,` every three digits of the integer part.
fn add_thousands_separator(s: &str) -> String {
    let (integer_part, fraction) = match s.split_once('.') {
        Some((int, frac)) => (int, Some(frac)),
        None => (s, None),
    };
    let (sign, digits) = match integer_part.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", integer_part),
    };

    let mut result = String::with_capacity(s.len() + digits.len() / 3 + 1);
    result.push_str(sign);
    let len = digits.len();
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            result.push(',');
        }
        result.push(c);
    }
    if let Some(fraction) = fraction {
        result.push('.');
        result.push_str(fraction);
    }
    result
}
