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

//! Vocabulary configuration and registration options.

use crate::auto::AutoRegister;
use crate::error::{VocabError, VocabResult};
use crate::names::DEFAULT_SUFFIX_SEPARATOR;
use serde::{Deserialize, Serialize};

/// Configuration for a new vocabulary.
///
/// # Example TOML Configuration
///
/// ```toml
/// auto_register = true
/// suffix_separator = "_"
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VocabularyConfig {
    /// Register unmatched properties when data is converted into this
    /// vocabulary.
    #[serde(default)]
    pub auto_register: bool,

    /// Separator between a base name and the numeric suffix of generated
    /// names.
    #[serde(default = "default_suffix_separator")]
    pub suffix_separator: String,
}

fn default_suffix_separator() -> String {
    DEFAULT_SUFFIX_SEPARATOR.to_string()
}

impl Default for VocabularyConfig {
    fn default() -> Self {
        Self {
            auto_register: false,
            suffix_separator: default_suffix_separator(),
        }
    }
}

impl VocabularyConfig {
    /// Parse a configuration from a JSON string.
    pub fn from_json(json: &str) -> VocabResult<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Parse a configuration from a TOML string.
    pub fn from_toml(toml_str: &str) -> VocabResult<Self> {
        let config: Self = toml::from_str(toml_str)?;
        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration.
    pub fn validate(&self) -> VocabResult<()> {
        if self.suffix_separator.is_empty() {
            return Err(VocabError::Config(
                "suffix_separator must not be empty".to_string(),
            ));
        }
        if self.suffix_separator.chars().any(char::is_whitespace) {
            return Err(VocabError::Config(format!(
                "suffix_separator {:?} must not contain whitespace",
                self.suffix_separator
            )));
        }
        Ok(())
    }

    pub(crate) fn auto_register_mode(&self) -> AutoRegister {
        AutoRegister::from(self.auto_register)
    }
}

/// Options for a single registration.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DefineOptions {
    /// Replace a taken name with a generated one instead of failing.
    #[serde(default)]
    pub rename_if_conflict: bool,
}

impl DefineOptions {
    /// Options that resolve name conflicts by renaming.
    pub fn renaming() -> Self {
        Self {
            rename_if_conflict: true,
        }
    }
}
