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

//! The report command.

use clap::Subcommand;

use crate::commands::{self, ReportFormat};
use crate::error::CliError;

#[derive(Subcommand)]
pub enum ReportingCommands {
    /// Build the weekly membership report
    ///
    /// Reads a pasted membership export and prints per-site figures, section
    /// subtotals, the grand total and the derived rates.
    Report {
        /// Input file path, or `-` for stdin
        #[arg(value_name = "FILE")]
        file: String,

        /// Output format
        #[arg(short, long, value_enum, default_value_t = ReportFormat::Text)]
        format: ReportFormat,

        /// Output file path (defaults to stdout)
        #[arg(short, long)]
        output: Option<String>,

        /// JSON layout file replacing the built-in membership layout
        #[arg(short, long, value_name = "LAYOUT")]
        layout: Option<String>,
    },
}

impl ReportingCommands {
    pub fn execute(self) -> Result<(), CliError> {
        match self {
            ReportingCommands::Report {
                file,
                format,
                output,
                layout,
            } => commands::report(&file, format, output.as_deref(), layout.as_deref()),
        }
    }
}
