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

//! memtally CLI library.
//!
//! Command definitions and implementations behind the `memtally` binary:
//!
//! - **report**: build the weekly membership report as text, JSON or CSV
//! - **inspect**: show what the parser recovered from a pasted export
//! - **resolve**: evaluate metric paths against an export
//!
//! Every command accepts `-` as the input path to read from stdin. Input
//! size is bounded by `MEMTALLY_MAX_FILE_SIZE` (bytes, default 100 MB).

pub mod cli;
pub mod commands;
pub mod error;
