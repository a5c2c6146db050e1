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

//! Vocabulary error types

use thiserror::Error;

/// Result type for vocabulary operations
pub type VocabResult<T> = Result<T, VocabError>;

/// Errors raised by registration, conversion and configuration
#[derive(Debug, Error)]
pub enum VocabError {
    // Registration errors
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Property name {name} already used")]
    NameConflict { name: String },

    #[error("Property def of {name} already used by {owner}")]
    DefinitionConflict { name: String, owner: String },

    // Conversion errors
    #[error("Unable to convert type {0}")]
    UnsupportedType(String),

    // Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),
}

impl VocabError {
    /// Returns true for errors caused by how properties were declared.
    ///
    /// These are schema-authoring mistakes, as opposed to data that could
    /// not be converted.
    pub fn is_registration_error(&self) -> bool {
        matches!(
            self,
            VocabError::InvalidArgument(_)
                | VocabError::NameConflict { .. }
                | VocabError::DefinitionConflict { .. }
        )
    }
}

impl From<serde_json::Error> for VocabError {
    fn from(e: serde_json::Error) -> Self {
        VocabError::Config(e.to_string())
    }
}

impl From<toml::de::Error> for VocabError {
    fn from(e: toml::de::Error) -> Self {
        VocabError::Config(e.to_string())
    }
}
