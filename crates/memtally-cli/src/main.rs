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

//! memtally Command Line Interface

use clap::Parser;
use memtally_cli::cli::Commands;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

/// Default log directive when `RUST_LOG` is unset.
const DEFAULT_LOG_DIRECTIVE: &str = "memtally=warn";

/// memtally - Membership report toolkit
///
/// Turns a membership statistics export pasted from an admin console into
/// the weekly per-site membership report.
///
/// # Examples
///
/// ```bash
/// # Build the report from a saved export
/// memtally report export.txt
///
/// # Pipe a pasted export and write CSV
/// pbpaste | memtally report - --format csv -o report.csv
///
/// # Check a single figure
/// memtally resolve export.txt "NE Tutor/1+NE Tutor(클래스카드)/1"
/// ```
#[derive(Parser)]
#[command(name = "memtally")]
#[command(author, version, about = "memtally - Membership report toolkit", long_about = None)]
struct Cli {
    /// Log debug details to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

fn init_tracing(verbose: bool) {
    let mut filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_DIRECTIVE));
    if verbose {
        if let Ok(directive) = "memtally=debug".parse() {
            filter = filter.add_directive(directive);
        }
    }

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command.execute() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}
