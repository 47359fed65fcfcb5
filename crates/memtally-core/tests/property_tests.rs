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

//! Property-based tests for the parser and resolver.
//!
//! These verify the degrade-never-fail guarantees over generated inputs.

use memtally_core::{format_number, format_percent, parse, parse_cell, resolve, ParsedTable};
use proptest::prelude::*;

/// Text built from the characters that matter to the parser.
fn arb_pasted_text() -> impl Strategy<Value = String> {
    prop::collection::vec(
        prop_oneof![
            Just("\t".to_string()),
            Just("\n".to_string()),
            Just("\r\n".to_string()),
            Just("구분".to_string()),
            Just("조회기간:".to_string()),
            Just("(명)".to_string()),
            Just("---".to_string()),
            Just(",".to_string()),
            "[0-9]{1,6}",
            "[A-Za-z ]{1,8}",
        ],
        0..60,
    )
    .prop_map(|parts| parts.concat())
}

fn arb_path() -> impl Strategy<Value = String> {
    prop::collection::vec(("[A-C ]{0,2}", "[0-9x/ ]{0,3}"), 1..4).prop_map(|refs| {
        refs.into_iter()
            .map(|(row, column)| format!("{}/{}", row, column))
            .collect::<Vec<_>>()
            .join("+")
    })
}

fn all_finite(table: &ParsedTable) -> bool {
    table
        .rows
        .iter()
        .all(|(_, values)| values.iter().all(|v| v.is_finite()))
}

proptest! {
    /// Property: parsing arbitrary strings never panics and yields finite values
    #[test]
    fn prop_parse_any_string(text in any::<String>()) {
        let table = parse(&text);
        prop_assert!(all_finite(&table));
    }

    /// Property: parsing structured noise yields finite values
    #[test]
    fn prop_parse_structured_noise(text in arb_pasted_text()) {
        let table = parse(&text);
        prop_assert!(all_finite(&table));
    }

    /// Property: parsing is idempotent
    #[test]
    fn prop_parse_idempotent(text in arb_pasted_text()) {
        prop_assert_eq!(parse(&text), parse(&text));
    }

    /// Property: row names are trimmed, non-blank, and never the sentinel
    #[test]
    fn prop_row_names_clean(text in arb_pasted_text()) {
        let table = parse(&text);
        for name in table.rows.names() {
            prop_assert!(!name.is_empty());
            prop_assert_eq!(name, name.trim());
            prop_assert_ne!(name, "구분");
        }
    }

    /// Property: cell parsing always returns a finite number
    #[test]
    fn prop_parse_cell_finite(cell in any::<String>()) {
        prop_assert!(parse_cell(&cell).is_finite());
    }

    /// Property: comma-grouped integers parse to their value
    #[test]
    fn prop_grouped_integers(n in 0u64..1_000_000_000_000) {
        let grouped = format_number(n as f64);
        prop_assert_eq!(parse_cell(&grouped), n as f64);
    }

    /// Property: resolving any path against any table never fails
    #[test]
    fn prop_resolve_any_path(text in arb_pasted_text(), path in arb_path()) {
        let table = parse(&text);
        let resolved = resolve(&table, &path);
        prop_assert!(resolved.value.is_finite());
        prop_assert!(!resolved.detail.is_empty());
    }

    /// Property: formatting never leaks NaN or inf
    #[test]
    fn prop_formatting_total(value in any::<f64>()) {
        let number = format_number(value);
        let percent = format_percent(value);
        prop_assert!(!number.contains("NaN") && !number.contains("inf"));
        prop_assert!(!percent.contains("NaN") && !percent.contains("inf"));
        prop_assert!(percent.ends_with('%'));
    }
}
