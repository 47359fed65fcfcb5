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

//! Commands for looking at an export without building a report.

use clap::Subcommand;

use crate::commands;
use crate::error::CliError;

#[derive(Subcommand)]
pub enum AnalysisCommands {
    /// Show the period, headers and rows recovered from an export
    Inspect {
        /// Input file path, or `-` for stdin
        #[arg(value_name = "FILE")]
        file: String,

        /// Print the parsed table as JSON
        #[arg(long)]
        json: bool,
    },

    /// Evaluate metric paths such as `NE Books/1` or `A/1+B/1`
    ///
    /// Prints one `path<TAB>value<TAB>detail` line per path.
    Resolve {
        /// Input file path, or `-` for stdin
        #[arg(value_name = "FILE")]
        file: String,

        /// Metric paths to evaluate
        #[arg(value_name = "PATH", required = true)]
        paths: Vec<String>,

        /// Fail on malformed paths instead of resolving them to 0
        #[arg(short, long)]
        strict: bool,
    },
}

impl AnalysisCommands {
    pub fn execute(self) -> Result<(), CliError> {
        match self {
            AnalysisCommands::Inspect { file, json } => commands::inspect(&file, json),
            AnalysisCommands::Resolve {
                file,
                paths,
                strict,
            } => commands::resolve(&file, &paths, strict),
        }
    }
}
