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

//! Degenerate inputs for robustness testing.
//!
//! None of these is an error for the parser; each must still produce a
//! table without panicking.

/// Degenerate pasted text samples as (name, text) pairs.
pub fn degenerate_samples() -> Vec<(&'static str, &'static str)> {
    vec![
        ("empty", ""),
        ("whitespace_only", "   \t\n  \r\n"),
        ("no_tabs", "just some text\nmore text"),
        ("only_header", "구분\tA\tB"),
        ("only_metadata", "조회기간: 2024.01.01"),
        ("metadata_without_colon", "조회기간 2024.01.01"),
        ("separators_only", "---\n-----\n---\t1"),
        ("control_chars", "\u{0}\u{1}\t\u{fffd}\n\u{7f}\t\u{0}"),
        ("lone_carriage_returns", "A\t1\rB\t2\r"),
        ("colons_and_tabs", ":::\t:::\n\t\t\t"),
        ("sentinel_rows_only", "구분\t1\n구분\t2"),
        ("huge_numbers", "A\t1e400\t-1e400\t179769313486231570000000000000000000000000"),
    ]
}

/// Malformed metric paths as (name, path) pairs.
///
/// Strict parsing rejects every one of these; lenient resolution still
/// yields a number for each.
pub fn malformed_paths() -> Vec<(&'static str, &'static str)> {
    vec![
        ("empty", ""),
        ("blank", "   "),
        ("no_separator", "NE Books"),
        ("blank_row", "/1"),
        ("non_numeric_column", "NE Books/x"),
        ("zero_column", "NE Books/0"),
        ("negative_column", "NE Books/-1"),
        ("trailing_plus", "NE Books/1+"),
        ("double_plus", "NE Books/1++NELT/1"),
    ]
}
