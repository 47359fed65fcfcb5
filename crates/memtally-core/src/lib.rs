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

//! Pasted-table parser and metric path resolver.
//!
//! This crate turns a block of tab-separated text copied out of a reporting
//! tool into a [`ParsedTable`], then answers `row/column` queries against it.
//!
//! # Parsing
//!
//! [`parse`] never fails. Missing metadata or header lines leave the
//! corresponding fields empty, unparsable cells become `0`, and a repeated
//! row name keeps the values of its last occurrence.
//!
//! ```
//! use memtally_core::parse;
//!
//! let text = "조회기간:2024.01.01~2024.01.07\n구분\tA\tB\nRow1\t1,000\t2,000\n";
//! let table = parse(text);
//!
//! assert_eq!(table.period, "2024.01.01~2024.01.07");
//! assert_eq!(table.headers, vec!["A", "B"]);
//! assert_eq!(table.row("Row1"), Some(&[1000.0, 2000.0][..]));
//! ```
//!
//! # Metric paths
//!
//! A metric path names a row and a 1-based column (`NE Books/1`), or sums
//! several such references (`NE Tutor/1+NE Tutor(클래스카드)/1`). Unknown rows
//! and out-of-range columns resolve to `0`.
//!
//! ```
//! use memtally_core::{parse, resolve, MetricPath};
//!
//! let table = parse("A\t10\t20\nB\t5\t0\n");
//!
//! let resolved = resolve(&table, "A/1+B/1");
//! assert_eq!(resolved.value, 15.0);
//! assert_eq!(resolved.detail, "A: 10 + B: 5 = 15");
//!
//! // Parse once, evaluate many times.
//! let path: MetricPath = "A/2".parse().unwrap();
//! assert_eq!(path.value(&table), 20.0);
//! ```

mod config;
mod error;
pub mod format;
mod parser;
mod path;
mod resolver;
mod table;

pub use config::{ParserConfig, ParserConfigBuilder};
pub use error::{PathError, PathErrorKind, PathResult};
pub use format::{format_number, format_percent};
pub use parser::{parse, parse_cell, parse_with_config};
pub use path::{ColumnRef, MetricPath};
pub use resolver::{resolve, resolve_value, Resolved};
pub use table::{ParsedTable, RowMap};
