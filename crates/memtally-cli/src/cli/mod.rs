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

//! CLI command definitions and argument parsing.
//!
//! Commands are grouped by concern and flattened to the top level:
//!
//! - [`reporting`]: `report`
//! - [`analysis`]: `inspect`, `resolve`

mod analysis;
mod reporting;

use clap::Subcommand;

pub use self::analysis::AnalysisCommands;
pub use self::reporting::ReportingCommands;
use crate::error::CliError;

/// Top-level CLI commands.
///
/// ```no_run
/// use clap::Parser;
/// use memtally_cli::cli::Commands;
///
/// #[derive(Parser)]
/// struct Cli {
///     #[command(subcommand)]
///     command: Commands,
/// }
/// ```
#[derive(Subcommand)]
pub enum Commands {
    #[command(flatten)]
    Reporting(ReportingCommands),

    #[command(flatten)]
    Analysis(AnalysisCommands),
}

impl Commands {
    /// Execute the selected command.
    ///
    /// # Errors
    ///
    /// Returns `Err` if reading input, resolving strict paths, or writing
    /// output fails.
    pub fn execute(self) -> Result<(), CliError> {
        match self {
            Commands::Reporting(cmd) => cmd.execute(),
            Commands::Analysis(cmd) => cmd.execute(),
        }
    }
}
