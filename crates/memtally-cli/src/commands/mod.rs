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

//! CLI command implementations

mod inspect;
mod report;
mod resolve;

pub use inspect::inspect;
pub use report::{render_csv, render_text, report, ReportFormat};
pub use resolve::resolve;

use std::fs;
use std::io::{self, Read, Write};

use memtally_report::ReportLayout;
use tracing::debug;

use crate::error::CliError;

/// Default maximum input size (100 MB).
/// Can be overridden via the `MEMTALLY_MAX_FILE_SIZE` environment variable.
pub const DEFAULT_MAX_FILE_SIZE: u64 = 100 * 1024 * 1024;

/// Input path that selects standard input.
pub const STDIN_PATH: &str = "-";

fn max_file_size() -> u64 {
    std::env::var("MEMTALLY_MAX_FILE_SIZE")
        .ok()
        .and_then(|s| s.parse::<u64>().ok())
        .unwrap_or(DEFAULT_MAX_FILE_SIZE)
}

/// Read pasted export text from a file, or from stdin when `path` is `-`.
///
/// Files are size-checked against `MEMTALLY_MAX_FILE_SIZE` before reading;
/// stdin is read up to the same limit.
///
/// # Errors
///
/// Returns `Err` when the input cannot be read, exceeds the size limit, or
/// is not valid UTF-8.
pub fn read_input(path: &str) -> Result<String, CliError> {
    let max = max_file_size();

    if path == STDIN_PATH {
        let mut buffer = Vec::new();
        io::stdin()
            .take(max.saturating_add(1))
            .read_to_end(&mut buffer)
            .map_err(|e| CliError::io_error("<stdin>", e))?;
        let actual = buffer.len() as u64;
        if actual > max {
            return Err(CliError::file_too_large("<stdin>", actual, max));
        }
        return String::from_utf8(buffer)
            .map_err(|_| CliError::invalid_input("standard input is not valid UTF-8"));
    }

    let metadata = fs::metadata(path).map_err(|e| CliError::io_error(path, e))?;
    if metadata.len() > max {
        return Err(CliError::file_too_large(path, metadata.len(), max));
    }
    debug!(path, bytes = metadata.len(), "reading export");
    fs::read_to_string(path).map_err(|e| CliError::io_error(path, e))
}

/// Write content to a file, or to stdout when `path` is `None`.
pub fn write_output(content: &str, path: Option<&str>) -> Result<(), CliError> {
    match path {
        Some(p) => fs::write(p, content).map_err(|e| CliError::io_error(p, e)),
        None => io::stdout()
            .write_all(content.as_bytes())
            .map_err(|e| CliError::io_error("<stdout>", e)),
    }
}

/// Load a report layout from a JSON file, or the built-in membership
/// layout when no file is given.
pub fn load_layout(path: Option<&str>) -> Result<ReportLayout, CliError> {
    let Some(path) = path else {
        return Ok(ReportLayout::default());
    };
    let layout: ReportLayout = serde_json::from_str(&read_input(path)?)?;
    if layout.sections.is_empty() {
        return Err(CliError::invalid_input(format!(
            "layout '{}' has no sections",
            path
        )));
    }
    Ok(layout)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write as _;

    #[test]
    fn test_read_missing_file() {
        let err = read_input("/nonexistent/memtally/export.txt").unwrap_err();
        assert!(matches!(err, CliError::Io { .. }));
    }

    #[test]
    fn test_read_and_write_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.txt");
        let path = path.to_str().unwrap();
        write_output("구분\tA\nNELT\t1\n", Some(path)).unwrap();
        assert_eq!(read_input(path).unwrap(), "구분\tA\nNELT\t1\n");
    }

    #[test]
    fn test_default_layout_without_file() {
        assert_eq!(load_layout(None).unwrap(), ReportLayout::default());
    }

    #[test]
    fn test_layout_from_json() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{"sections":[{{"name":"All","subtotal_label":"Sum","columns":[{{"label":"Books","path":"NE Books/1"}}]}}],"grand_total_label":"Total","fallback_date":"2026.01"}}"#
        )
        .unwrap();
        let layout = load_layout(file.path().to_str()).unwrap();
        assert_eq!(layout.sections[0].columns[0].path.to_string(), "NE Books/1");
        assert_eq!(layout.fallback_date, "2026.01");
    }

    #[test]
    fn test_layout_without_sections_is_rejected() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{"sections":[],"grand_total_label":"Total","fallback_date":"2026.01"}}"#
        )
        .unwrap();
        let err = load_layout(file.path().to_str()).unwrap_err();
        assert!(matches!(err, CliError::InvalidInput(_)));
    }
}
