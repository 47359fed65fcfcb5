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

//! Structured error types for the memtally CLI.
//!
//! All commands return `Result<T, CliError>`; `main` prints the error and
//! exits with a failure status.

use std::io;
use std::path::PathBuf;

use memtally_core::PathError;
use thiserror::Error;

/// The error type for memtally CLI operations.
///
/// # Examples
///
/// ```rust,no_run
/// use memtally_cli::error::CliError;
///
/// fn read(path: &str) -> Result<String, CliError> {
///     std::fs::read_to_string(path).map_err(|e| CliError::io_error(path, e))
/// }
/// ```
#[derive(Error, Debug, Clone)]
pub enum CliError {
    /// File read, write, or metadata access failed.
    #[error("I/O error for '{path}': {message}")]
    Io { path: PathBuf, message: String },

    /// Input exceeds the configured size limit.
    #[error("File '{path}' is too large ({actual} bytes). Maximum allowed: {max} bytes ({max_mb} MB)")]
    FileTooLarge {
        path: PathBuf,
        actual: u64,
        max: u64,
        max_mb: u64,
    },

    /// A metric path given on the command line is malformed.
    #[error("Invalid metric path: {0}")]
    InvalidPath(#[from] PathError),

    /// JSON serialization or layout deserialization failed.
    #[error("JSON error: {message}")]
    Json { message: String },

    /// CSV output failed.
    #[error("CSV error: {0}")]
    Csv(String),

    /// Invalid input provided by the user.
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

impl CliError {
    /// Create an I/O error with file path context.
    pub fn io_error(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Io {
            path: path.into(),
            message: source.to_string(),
        }
    }

    /// Create a file-too-large error.
    ///
    /// ```rust
    /// use memtally_cli::error::CliError;
    ///
    /// let err = CliError::file_too_large("export.txt", 200_000_000, 100 * 1024 * 1024);
    /// assert!(err.to_string().contains("100 MB"));
    /// ```
    pub fn file_too_large(path: impl Into<PathBuf>, actual: u64, max: u64) -> Self {
        Self::FileTooLarge {
            path: path.into(),
            actual,
            max,
            max_mb: max / (1024 * 1024),
        }
    }

    pub fn invalid_path(error: PathError) -> Self {
        Self::InvalidPath(error)
    }

    pub fn invalid_input(msg: impl Into<String>) -> Self {
        Self::InvalidInput(msg.into())
    }
}

impl From<serde_json::Error> for CliError {
    fn from(source: serde_json::Error) -> Self {
        Self::Json {
            message: source.to_string(),
        }
    }
}

impl From<csv::Error> for CliError {
    fn from(source: csv::Error) -> Self {
        Self::Csv(source.to_string())
    }
}
