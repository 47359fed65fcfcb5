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

//! Shared test fixtures for memtally crates.
//!
//! Fixtures are pasted text blocks shaped like the exports users copy from
//! the membership reporting tool, plus a builder for writing new ones.
//!
//! # Quick Start
//!
//! ```rust
//! use memtally_test::fixtures;
//! use memtally_test::fixtures::builders::ExportBuilder;
//!
//! let text = fixtures::membership_export();
//! let table = memtally_core::parse(text);
//! assert_eq!(table.value("NE Books", 1), 120_000.0);
//!
//! let custom = ExportBuilder::new()
//!     .period("2024.01.01~2024.01.07")
//!     .headers(["A", "B"])
//!     .row("Row1", ["1,000", "2,000"])
//!     .build();
//! assert!(custom.starts_with("조회기간:"));
//! ```

use memtally_core::ParsedTable;

/// Type alias for a list of fixture functions (name, text).
pub type FixtureList = Vec<(&'static str, fn() -> &'static str)>;

/// Returns every fixture parsed, as (name, table) pairs.
pub fn fixtures_parsed() -> Vec<(&'static str, ParsedTable)> {
    fixtures::all()
        .into_iter()
        .map(|(name, fixture_fn)| (name, memtally_core::parse(fixture_fn())))
        .collect()
}

/// Canonical pasted-export fixtures.
pub mod fixtures;

pub use fixtures::*;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_fixtures_parse() {
        for (name, table) in fixtures_parsed() {
            assert!(!table.rows.is_empty(), "fixture {} should have rows", name);
        }
    }

    #[test]
    fn test_membership_export_shape() {
        let table = memtally_core::parse(fixtures::membership_export());
        assert_eq!(table.period, "2026.02.08 ~ 2026.02.14");
        assert_eq!(table.headers.len(), 6);
        assert_eq!(table.rows.len(), 16);
        assert_eq!(table.width(), 6);
    }

    #[test]
    fn test_well_formed_shape() {
        let table = memtally_core::parse(fixtures::well_formed());
        assert_eq!(table.headers, vec!["A", "B"]);
        assert_eq!(table.rows.len(), 2);
    }
}
