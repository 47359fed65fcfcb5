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

//! Metric path expressions.
//!
//! Grammar:
//!
//! ```text
//! path := ref ('+' ref)*
//! ref  := rowName '/' positiveInteger
//! ```
//!
//! Paths are parsed once into a [`MetricPath`] and evaluated against any
//! number of tables. Two parsers are provided. [`MetricPath::parse_lenient`]
//! accepts anything and lets malformed references resolve to `0`, which is
//! what report rendering wants. [`FromStr`] is strict and reports what is
//! wrong with the expression.

use crate::error::{PathError, PathResult};
use std::fmt;
use std::str::FromStr;

/// A single `rowName/column` reference with a 1-based column.
///
/// Column `0` never resolves to a value; lenient parsing uses it for
/// missing or malformed indices.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ColumnRef {
    /// Trimmed row name.
    pub row: String,
    /// 1-based column index.
    pub column: usize,
}

impl ColumnRef {
    pub fn new(row: impl Into<String>, column: usize) -> Self {
        Self {
            row: row.into(),
            column,
        }
    }

    /// Zero-based index into the row's values.
    pub fn index(&self) -> Option<usize> {
        self.column.checked_sub(1)
    }

    /// The same row at another column.
    pub fn with_column(&self, column: usize) -> Self {
        Self::new(self.row.clone(), column)
    }

    fn parse_lenient(text: &str) -> Self {
        let (row, column) = text.split_once('/').unwrap_or((text, ""));
        Self::new(row.trim(), leading_index(column))
    }

    fn parse_strict(text: &str) -> PathResult<Self> {
        let text = text.trim();
        if text.is_empty() {
            return Err(PathError::empty(text));
        }
        let (row, column) = text
            .split_once('/')
            .ok_or_else(|| PathError::missing_separator(text))?;

        let row = row.trim();
        if row.is_empty() {
            return Err(PathError::empty_row_name(text));
        }

        let column_text = column.trim();
        let column: usize = column_text
            .parse()
            .map_err(|_| PathError::invalid_column(column_text, text))?;
        if column == 0 {
            return Err(PathError::zero_column(text));
        }

        Ok(Self::new(row, column))
    }
}

impl fmt::Display for ColumnRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.row, self.column)
    }
}

/// Leading unsigned integer, `0` when there is none.
fn leading_index(text: &str) -> usize {
    let text = text.trim_start();
    let text = text.strip_prefix('+').unwrap_or(text);
    let end = text.bytes().take_while(u8::is_ascii_digit).count();
    text[..end].parse().unwrap_or(0)
}

/// A parsed metric path: one reference, or a sum of references.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum MetricPath {
    /// `rowName/column`
    Single(ColumnRef),
    /// `rowName/column+rowName/column+...`
    Sum(Vec<ColumnRef>),
}

impl MetricPath {
    /// Reference to one row and column.
    pub fn single(row: impl Into<String>, column: usize) -> Self {
        Self::Single(ColumnRef::new(row, column))
    }

    /// Sum of several references.
    pub fn sum(refs: impl IntoIterator<Item = ColumnRef>) -> Self {
        Self::Sum(refs.into_iter().collect())
    }

    /// Parse without validation. Never fails.
    ///
    /// A path containing `+` becomes a [`MetricPath::Sum`] of its trimmed
    /// parts. Each reference is split at its first `/`; the column is the
    /// leading integer after it, or `0` if there is none.
    ///
    /// # Examples
    ///
    /// ```
    /// use memtally_core::{ColumnRef, MetricPath};
    ///
    /// let path = MetricPath::parse_lenient("NE Tutor/1 + NE Tutor(클래스카드)/1");
    /// assert_eq!(path.refs()[1], ColumnRef::new("NE Tutor(클래스카드)", 1));
    ///
    /// let broken = MetricPath::parse_lenient("NE Books");
    /// assert_eq!(broken, MetricPath::single("NE Books", 0));
    /// ```
    pub fn parse_lenient(text: &str) -> Self {
        if text.contains('+') {
            Self::Sum(
                text.split('+')
                    .map(|part| ColumnRef::parse_lenient(part.trim()))
                    .collect(),
            )
        } else {
            Self::Single(ColumnRef::parse_lenient(text))
        }
    }

    /// The references this path adds up.
    pub fn refs(&self) -> &[ColumnRef] {
        match self {
            Self::Single(r) => std::slice::from_ref(r),
            Self::Sum(refs) => refs,
        }
    }

    pub fn is_sum(&self) -> bool {
        matches!(self, Self::Sum(_))
    }

    /// The same path with every reference pointed at `column`.
    ///
    /// # Examples
    ///
    /// ```
    /// use memtally_core::MetricPath;
    ///
    /// let path = MetricPath::parse_lenient("A/1+B/1");
    /// assert_eq!(path.with_column(6).to_string(), "A/6+B/6");
    /// ```
    pub fn with_column(&self, column: usize) -> Self {
        match self {
            Self::Single(r) => Self::Single(r.with_column(column)),
            Self::Sum(refs) => Self::Sum(refs.iter().map(|r| r.with_column(column)).collect()),
        }
    }
}

impl From<ColumnRef> for MetricPath {
    fn from(r: ColumnRef) -> Self {
        Self::Single(r)
    }
}

impl FromStr for MetricPath {
    type Err = PathError;

    /// Strict parsing: every reference needs a non-blank row name, a `/` and
    /// a positive integer column.
    fn from_str(s: &str) -> PathResult<Self> {
        let text = s.trim();
        if text.is_empty() {
            return Err(PathError::empty(s));
        }
        if text.contains('+') {
            let refs = text
                .split('+')
                .map(ColumnRef::parse_strict)
                .collect::<PathResult<Vec<_>>>()?;
            Ok(Self::Sum(refs))
        } else {
            ColumnRef::parse_strict(text).map(Self::Single)
        }
    }
}

impl fmt::Display for MetricPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, r) in self.refs().iter().enumerate() {
            if i > 0 {
                f.write_str("+")?;
            }
            write!(f, "{}", r)?;
        }
        Ok(())
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for MetricPath {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for MetricPath {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let text = String::deserialize(deserializer)?;
        text.parse().map_err(serde::de::Error::custom)
    }
}
