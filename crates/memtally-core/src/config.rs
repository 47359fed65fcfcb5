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

//! Parser configuration.

/// Default marker identifying the metadata line that carries the period.
pub const DEFAULT_PERIOD_MARKER: &str = "조회기간";

/// Default first-column text of the header line.
pub const DEFAULT_ROW_SENTINEL: &str = "구분";

/// Default prefix of separator lines skipped between data rows.
pub const DEFAULT_SEPARATOR_PREFIX: &str = "---";

/// Lines shorter than this (in characters) may continue a wrapped header.
pub const DEFAULT_CONTINUATION_MAX_CHARS: usize = 20;

/// Markers the parser uses to recognise the structure of a pasted export.
///
/// The defaults match the Korean membership export the tool was built for.
/// An empty marker disables the step that relies on it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParserConfig {
    /// Substring that identifies the metadata line (default: `조회기간`).
    pub period_marker: String,
    /// Leading text of the header line, also rejected as a row name (default: `구분`).
    pub row_sentinel: String,
    /// Lines starting with this prefix are skipped (default: `---`).
    pub separator_prefix: String,
    /// Tab-free lines shorter than this are folded into the header (default: 20).
    pub continuation_max_chars: usize,
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self {
            period_marker: DEFAULT_PERIOD_MARKER.to_string(),
            row_sentinel: DEFAULT_ROW_SENTINEL.to_string(),
            separator_prefix: DEFAULT_SEPARATOR_PREFIX.to_string(),
            continuation_max_chars: DEFAULT_CONTINUATION_MAX_CHARS,
        }
    }
}

impl ParserConfig {
    /// Create a new builder for ParserConfig.
    ///
    /// # Examples
    ///
    /// ```
    /// use memtally_core::ParserConfig;
    ///
    /// let config = ParserConfig::builder()
    ///     .period_marker("Period")
    ///     .row_sentinel("Category")
    ///     .build();
    /// assert_eq!(config.row_sentinel, "Category");
    /// assert_eq!(config.continuation_max_chars, 20);
    /// ```
    pub fn builder() -> ParserConfigBuilder {
        ParserConfigBuilder::new()
    }

    pub(crate) fn is_header_line(&self, trimmed: &str) -> bool {
        !self.row_sentinel.is_empty() && trimmed.starts_with(self.row_sentinel.as_str())
    }

    pub(crate) fn is_period_line(&self, trimmed: &str) -> bool {
        !self.period_marker.is_empty() && trimmed.contains(self.period_marker.as_str())
    }

    pub(crate) fn is_separator_line(&self, trimmed: &str) -> bool {
        !self.separator_prefix.is_empty() && trimmed.starts_with(self.separator_prefix.as_str())
    }

    /// A wrapped header fragment: non-empty, tab-free, and either
    /// parenthesised or short.
    pub(crate) fn is_header_continuation(&self, trimmed: &str) -> bool {
        !trimmed.is_empty()
            && !trimmed.contains('\t')
            && (trimmed.starts_with('(')
                || trimmed.chars().count() < self.continuation_max_chars)
    }
}

/// Builder for ergonomic construction of ParserConfig.
#[derive(Debug, Clone, Default)]
pub struct ParserConfigBuilder {
    config: ParserConfig,
}

impl ParserConfigBuilder {
    /// Create a new builder with default markers.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the metadata line marker.
    pub fn period_marker(mut self, marker: impl Into<String>) -> Self {
        self.config.period_marker = marker.into();
        self
    }

    /// Set the header line sentinel.
    pub fn row_sentinel(mut self, sentinel: impl Into<String>) -> Self {
        self.config.row_sentinel = sentinel.into();
        self
    }

    /// Set the separator line prefix.
    pub fn separator_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.config.separator_prefix = prefix.into();
        self
    }

    /// Set the header continuation length threshold.
    pub fn continuation_max_chars(mut self, chars: usize) -> Self {
        self.config.continuation_max_chars = chars;
        self
    }

    /// Build the ParserConfig.
    pub fn build(self) -> ParserConfig {
        self.config
    }
}
