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

//! Resolve command - evaluate metric paths against an export

use memtally_core::{format_number, parse, resolve as resolve_lenient, MetricPath, Resolved};

use super::{read_input, write_output};
use crate::error::CliError;

/// Resolve each path and print one line per path:
/// `path<TAB>value<TAB>detail`.
///
/// Lenient by default: malformed paths resolve to `0`. With `strict`, the
/// first malformed path fails the command before anything is printed.
pub fn resolve(file: &str, paths: &[String], strict: bool) -> Result<(), CliError> {
    let table = parse(&read_input(file)?);

    let resolved: Vec<Resolved> = if strict {
        let parsed = paths
            .iter()
            .map(|p| p.parse::<MetricPath>())
            .collect::<Result<Vec<_>, _>>()
            .map_err(CliError::invalid_path)?;
        parsed.iter().map(|p| p.evaluate(&table)).collect()
    } else {
        paths.iter().map(|p| resolve_lenient(&table, p)).collect()
    };

    let mut out = String::new();
    for (path, Resolved { value, detail }) in paths.iter().zip(&resolved) {
        out.push_str(&format!("{}\t{}\t{}\n", path, format_number(*value), detail));
    }
    write_output(&out, None)
}
