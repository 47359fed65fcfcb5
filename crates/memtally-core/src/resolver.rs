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

//! Metric path resolution.

use crate::format::format_number;
use crate::path::{ColumnRef, MetricPath};
use crate::table::ParsedTable;

/// A resolved metric: the number and how it was obtained.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Resolved {
    pub value: f64,
    /// `name: value` for a single reference, or
    /// `name1: v1 + name2: v2 = total` for a sum.
    pub detail: String,
}

/// Resolve a path expression against a table.
///
/// The path is parsed leniently, so this never fails: unknown rows,
/// malformed references and out-of-range columns contribute `0`.
///
/// # Examples
///
/// ```
/// use memtally_core::{parse, resolve};
///
/// let table = parse("A\t1,500\t20\n");
/// let resolved = resolve(&table, "A/1");
/// assert_eq!(resolved.value, 1500.0);
/// assert_eq!(resolved.detail, "A: 1,500");
///
/// assert_eq!(resolve(&table, "A/99").value, 0.0);
/// ```
pub fn resolve(table: &ParsedTable, path: &str) -> Resolved {
    MetricPath::parse_lenient(path).evaluate(table)
}

/// Resolve a path expression to its value only.
pub fn resolve_value(table: &ParsedTable, path: &str) -> f64 {
    MetricPath::parse_lenient(path).value(table)
}

impl ColumnRef {
    /// Value of this reference, `0` when it does not resolve.
    pub fn value(&self, table: &ParsedTable) -> f64 {
        self.index()
            .map_or(0.0, |index| table.rows.value_at(&self.row, index))
    }
}

impl MetricPath {
    /// Evaluate the path, keeping a human-readable breakdown.
    pub fn evaluate(&self, table: &ParsedTable) -> Resolved {
        match self {
            Self::Single(r) => {
                let value = r.value(table);
                Resolved {
                    value,
                    detail: format!("{}: {}", r.row, format_number(value)),
                }
            }
            Self::Sum(refs) => {
                let mut total = 0.0;
                let mut terms = Vec::with_capacity(refs.len());
                for r in refs {
                    let value = r.value(table);
                    total += value;
                    terms.push(format!("{}: {}", r.row, format_number(value)));
                }
                Resolved {
                    value: total,
                    detail: format!("{} = {}", terms.join(" + "), format_number(total)),
                }
            }
        }
    }

    /// Evaluate the path to its value only.
    pub fn value(&self, table: &ParsedTable) -> f64 {
        self.refs()
            .iter()
            .fold(0.0, |total, r| total + r.value(table))
    }
}
