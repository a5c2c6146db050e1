// Copyright 2025 Sushanth (https://github.com/sushanthpy)
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Property records.

use serde::{Deserialize, Serialize};

/// A registered property: the names it answers to and the definitions
/// that identify it across vocabularies.
///
/// Records are created by registration only and never change afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PropertyRecord {
    /// Accepted names. The first one is the canonical name.
    pub names: Vec<String>,
    /// Definition strings, unique within the owning vocabulary.
    pub defs: Vec<String>,
}

impl PropertyRecord {
    pub(crate) fn new(names: Vec<String>, defs: Vec<String>) -> Self {
        debug_assert!(!names.is_empty() && !defs.is_empty());
        Self { names, defs }
    }

    /// The name used as the output key when this record is a conversion
    /// target.
    pub fn canonical_name(&self) -> &str {
        self.names.first().map(String::as_str).unwrap_or_default()
    }
}
