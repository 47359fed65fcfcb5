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

//! Inspect command - show what the parser recovered from an export

use colored::Colorize;
use memtally_core::{format_number, parse, ParsedTable};

use super::{read_input, write_output};
use crate::error::CliError;

/// Print the period, headers and rows recovered from an export.
///
/// With `json`, the parsed table is written as JSON instead.
///
/// # Examples
///
/// ```no_run
/// use memtally_cli::commands::inspect;
///
/// # fn main() -> Result<(), memtally_cli::error::CliError> {
/// inspect("export.txt", false)?;
/// inspect("-", true)?;
/// # Ok(())
/// # }
/// ```
pub fn inspect(file: &str, json: bool) -> Result<(), CliError> {
    let table = parse(&read_input(file)?);

    if json {
        let mut out = serde_json::to_string_pretty(&table)?;
        out.push('\n');
        return write_output(&out, None);
    }

    print_table(&table);
    Ok(())
}

fn print_table(table: &ParsedTable) {
    println!("{}", "Pasted Export".bold().underline());
    println!();

    let period = if table.period.is_empty() {
        "(none)".dimmed().to_string()
    } else {
        table.period.clone()
    };
    println!("{}  {}", "Period:".cyan(), period);

    println!();
    println!("{}", "Headers:".cyan());
    if table.headers.is_empty() {
        println!("  {}", "(none)".dimmed());
    }
    for (idx, label) in table.headers.iter().enumerate() {
        println!("  {}: {}", (idx + 1).to_string().yellow(), label);
    }

    println!();
    println!("{} ({} rows)", "Rows:".cyan(), table.rows.len());
    for (name, values) in &table.rows {
        let cells: Vec<String> = values.iter().map(|&v| format_number(v)).collect();
        println!("  {}: {}", name.green(), cells.join(" | "));
    }
}
