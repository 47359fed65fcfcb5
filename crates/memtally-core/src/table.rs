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

//! Parsed table data model.

use std::collections::HashMap;

/// Row name to values, iterated in first-insertion order.
///
/// Inserting a name that is already present replaces its values in place,
/// so the last write wins while the row keeps its original position.
#[derive(Debug, Clone, Default)]
pub struct RowMap {
    entries: Vec<(String, Vec<f64>)>,
    /// name -> position in `entries`
    index: HashMap<String, usize>,
}

impl RowMap {
    /// Create an empty map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a row, returning the values it replaced, if any.
    pub fn insert(&mut self, name: impl Into<String>, values: Vec<f64>) -> Option<Vec<f64>> {
        let name = name.into();
        if let Some(&pos) = self.index.get(&name) {
            if let Some((_, slot)) = self.entries.get_mut(pos) {
                return Some(std::mem::replace(slot, values));
            }
        }
        self.index.insert(name.clone(), self.entries.len());
        self.entries.push((name, values));
        None
    }

    /// Values of the named row.
    pub fn get(&self, name: &str) -> Option<&[f64]> {
        self.index
            .get(name)
            .and_then(|&pos| self.entries.get(pos))
            .map(|(_, values)| values.as_slice())
    }

    /// Value at a zero-based index, `0` when the row or index is missing.
    pub fn value_at(&self, name: &str, index: usize) -> f64 {
        self.get(name)
            .and_then(|values| values.get(index))
            .copied()
            .unwrap_or(0.0)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate rows in first-insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[f64])> {
        self.entries
            .iter()
            .map(|(name, values)| (name.as_str(), values.as_slice()))
    }

    /// Row names in first-insertion order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(name, _)| name.as_str())
    }
}

impl PartialEq for RowMap {
    fn eq(&self, other: &Self) -> bool {
        self.entries == other.entries
    }
}

impl FromIterator<(String, Vec<f64>)> for RowMap {
    fn from_iter<I: IntoIterator<Item = (String, Vec<f64>)>>(iter: I) -> Self {
        let mut rows = RowMap::new();
        for (name, values) in iter {
            rows.insert(name, values);
        }
        rows
    }
}

impl<'a> IntoIterator for &'a RowMap {
    type Item = (&'a str, &'a [f64]);
    type IntoIter = Box<dyn Iterator<Item = (&'a str, &'a [f64])> + 'a>;

    fn into_iter(self) -> Self::IntoIter {
        Box::new(self.iter())
    }
}

#[cfg(feature = "serde")]
mod serde_impl {
    use super::RowMap;
    use serde::de::{MapAccess, Visitor};
    use serde::ser::SerializeMap;
    use serde::{Deserialize, Deserializer, Serialize, Serializer};
    use std::fmt;

    impl Serialize for RowMap {
        fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
            let mut map = serializer.serialize_map(Some(self.len()))?;
            for (name, values) in self.iter() {
                map.serialize_entry(name, values)?;
            }
            map.end()
        }
    }

    struct RowMapVisitor;

    impl<'de> Visitor<'de> for RowMapVisitor {
        type Value = RowMap;

        fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            f.write_str("a map of row names to numeric arrays")
        }

        fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<RowMap, A::Error> {
            let mut rows = RowMap::new();
            while let Some((name, values)) = access.next_entry::<String, Vec<f64>>()? {
                rows.insert(name, values);
            }
            Ok(rows)
        }
    }

    impl<'de> Deserialize<'de> for RowMap {
        fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<RowMap, D::Error> {
            deserializer.deserialize_map(RowMapVisitor)
        }
    }
}

/// A table recovered from pasted text.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ParsedTable {
    /// Free-text date range from the metadata line, empty if absent.
    pub period: String,
    /// Column labels after the row-name column, empty if no header was found.
    pub headers: Vec<String>,
    /// Data rows keyed by trimmed row name.
    pub rows: RowMap,
}

impl ParsedTable {
    /// Create an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// True when nothing was recovered at all.
    pub fn is_empty(&self) -> bool {
        self.period.is_empty() && self.headers.is_empty() && self.rows.is_empty()
    }

    /// Values of the named row.
    pub fn row(&self, name: &str) -> Option<&[f64]> {
        self.rows.get(name)
    }

    /// Value at a 1-based column, `0` for unknown rows and out-of-range columns.
    pub fn value(&self, name: &str, column: usize) -> f64 {
        match column.checked_sub(1) {
            Some(index) => self.rows.value_at(name, index),
            None => 0.0,
        }
    }

    /// Length of the longest row.
    pub fn width(&self) -> usize {
        self.rows
            .iter()
            .map(|(_, values)| values.len())
            .max()
            .unwrap_or(0)
    }
}
