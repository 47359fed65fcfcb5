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

//! Error types for strict metric path parsing.
//!
//! Parsing a table never fails, and neither does resolving a path leniently.
//! These errors only surface when a caller asks for strict path validation
//! through [`MetricPath::from_str`](crate::MetricPath).

use std::fmt;
use thiserror::Error;

/// The kind of problem found in a metric path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PathErrorKind {
    /// The path, or one `+`-separated part of it, is blank.
    Empty,
    /// A reference has no `/` between row name and column index.
    MissingSeparator,
    /// A reference has a blank row name.
    EmptyRowName,
    /// The column index is not a whole number.
    InvalidColumn,
    /// The column index is zero (indices are 1-based).
    ZeroColumn,
}

impl fmt::Display for PathErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "EmptyPath"),
            Self::MissingSeparator => write!(f, "MissingSeparator"),
            Self::EmptyRowName => write!(f, "EmptyRowName"),
            Self::InvalidColumn => write!(f, "InvalidColumn"),
            Self::ZeroColumn => write!(f, "ZeroColumn"),
        }
    }
}

/// An error found while strictly parsing a metric path.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{kind} in '{reference}': {message}")]
pub struct PathError {
    /// The kind of error.
    pub kind: PathErrorKind,
    /// Human-readable error message.
    pub message: String,
    /// The offending reference text.
    pub reference: String,
}

impl PathError {
    /// Create a new error.
    pub fn new(
        kind: PathErrorKind,
        message: impl Into<String>,
        reference: impl Into<String>,
    ) -> Self {
        Self {
            kind,
            message: message.into(),
            reference: reference.into(),
        }
    }

    pub fn empty(reference: impl Into<String>) -> Self {
        Self::new(PathErrorKind::Empty, "reference is blank", reference)
    }

    pub fn missing_separator(reference: impl Into<String>) -> Self {
        Self::new(
            PathErrorKind::MissingSeparator,
            "expected 'row/column'",
            reference,
        )
    }

    pub fn empty_row_name(reference: impl Into<String>) -> Self {
        Self::new(PathErrorKind::EmptyRowName, "row name is blank", reference)
    }

    pub fn invalid_column(column: &str, reference: impl Into<String>) -> Self {
        Self::new(
            PathErrorKind::InvalidColumn,
            format!("column index '{}' is not a whole number", column),
            reference,
        )
    }

    pub fn zero_column(reference: impl Into<String>) -> Self {
        Self::new(
            PathErrorKind::ZeroColumn,
            "column indices start at 1",
            reference,
        )
    }

    /// The kind of error.
    pub fn kind(&self) -> PathErrorKind {
        self.kind
    }
}

/// Result type for strict path parsing.
pub type PathResult<T> = Result<T, PathError>;

#[cfg(test)]
mod tests {
    use super::*;

    // ==================== PathErrorKind Display tests ====================

    #[test]
    fn test_error_kind_display() {
        assert_eq!(PathErrorKind::Empty.to_string(), "EmptyPath");
        assert_eq!(PathErrorKind::MissingSeparator.to_string(), "MissingSeparator");
        assert_eq!(PathErrorKind::EmptyRowName.to_string(), "EmptyRowName");
        assert_eq!(PathErrorKind::InvalidColumn.to_string(), "InvalidColumn");
        assert_eq!(PathErrorKind::ZeroColumn.to_string(), "ZeroColumn");
    }

    // ==================== PathError tests ====================

    #[test]
    fn test_error_display() {
        let err = PathError::missing_separator("NE Books");
        let msg = err.to_string();
        assert!(msg.contains("MissingSeparator"));
        assert!(msg.contains("'NE Books'"));
        assert!(msg.contains("row/column"));
    }

    #[test]
    fn test_invalid_column_mentions_column() {
        let err = PathError::invalid_column("x1", "A/x1");
        assert_eq!(err.kind(), PathErrorKind::InvalidColumn);
        assert!(err.message.contains("'x1'"));
        assert_eq!(err.reference, "A/x1");
    }

    #[test]
    fn test_convenience_constructors() {
        assert_eq!(PathError::empty("").kind, PathErrorKind::Empty);
        assert_eq!(PathError::empty_row_name("/1").kind, PathErrorKind::EmptyRowName);
        assert_eq!(PathError::zero_column("A/0").kind, PathErrorKind::ZeroColumn);
    }

    #[test]
    fn test_error_is_std_error() {
        fn accepts_error<E: std::error::Error>(_: E) {}
        accepts_error(PathError::empty(""));
    }

    #[test]
    fn test_error_with_unicode_reference() {
        let err = PathError::zero_column("기타/0");
        assert!(err.to_string().contains("기타/0"));
    }
}
