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

//! Builder for custom pasted exports.

/// Builds pasted-export text line by line.
///
/// # Examples
///
/// ```
/// use memtally_test::fixtures::builders::ExportBuilder;
///
/// let text = ExportBuilder::new()
///     .preamble("사이트별 회원 현황")
///     .period("2024.01.01~2024.01.07")
///     .headers(["A", "B"])
///     .header_continuation("(명)")
///     .row("Row1", ["1,000", "2,000"])
///     .separator()
///     .row("Row2", ["500", "0"])
///     .build();
///
/// let table = memtally_core::parse(&text);
/// assert_eq!(table.period, "2024.01.01~2024.01.07");
/// assert_eq!(table.headers, vec!["A", "B (명)"]);
/// assert_eq!(table.value("Row2", 1), 500.0);
/// ```
#[derive(Debug, Clone)]
pub struct ExportBuilder {
    lines: Vec<String>,
    line_ending: &'static str,
}

impl Default for ExportBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl ExportBuilder {
    pub fn new() -> Self {
        Self {
            lines: Vec::new(),
            line_ending: "\n",
        }
    }

    /// Free text line without tabs.
    pub fn preamble(mut self, text: impl Into<String>) -> Self {
        self.lines.push(text.into());
        self
    }

    /// `조회기간:<period>` metadata line.
    pub fn period(mut self, period: &str) -> Self {
        self.lines.push(format!("조회기간:{}", period));
        self
    }

    /// `구분` header line with the given labels.
    pub fn headers<I, S>(mut self, labels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut line = String::from("구분");
        for label in labels {
            line.push('\t');
            line.push_str(label.as_ref());
        }
        self.lines.push(line);
        self
    }

    /// Wrapped header fragment on its own line.
    pub fn header_continuation(mut self, fragment: impl Into<String>) -> Self {
        self.lines.push(fragment.into());
        self
    }

    /// Data row with raw cell text.
    pub fn row<I, S>(mut self, name: &str, cells: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut line = name.to_string();
        for cell in cells {
            line.push('\t');
            line.push_str(cell.as_ref());
        }
        self.lines.push(line);
        self
    }

    /// `---` separator line.
    pub fn separator(mut self) -> Self {
        self.lines.push("---".to_string());
        self
    }

    /// Blank line.
    pub fn blank(mut self) -> Self {
        self.lines.push(String::new());
        self
    }

    /// Use `\r\n` line endings.
    pub fn crlf(mut self) -> Self {
        self.line_ending = "\r\n";
        self
    }

    pub fn build(self) -> String {
        let mut text = String::new();
        for line in &self.lines {
            text.push_str(line);
            text.push_str(self.line_ending);
        }
        text
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_builder() {
        assert_eq!(ExportBuilder::new().build(), "");
    }

    #[test]
    fn test_crlf() {
        let text = ExportBuilder::new().row("A", ["1"]).crlf().build();
        assert_eq!(text, "A\t1\r\n");
    }

    #[test]
    fn test_headers_line() {
        let text = ExportBuilder::new().headers(["x", "y"]).build();
        assert_eq!(text, "구분\tx\ty\n");
    }
}
