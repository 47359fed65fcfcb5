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

//! Canonical pasted-export fixtures.
//!
//! - **exports**: realistic and minimal exports
//! - **errors**: garbage and degenerate inputs for robustness testing
//! - **builders**: fluent construction of custom exports

pub mod builders;
pub mod errors;
mod exports;

pub use exports::*;

use crate::FixtureList;

/// Returns all well-formed fixture functions for iteration.
pub fn all() -> FixtureList {
    vec![
        ("well_formed", well_formed),
        ("wrapped_header", wrapped_header),
        ("duplicate_rows", duplicate_rows),
        ("no_metadata", no_metadata),
        ("ragged", ragged),
        ("membership_export", membership_export),
    ]
}
