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

//! Name and definition list input.

use serde::{Deserialize, Serialize};

/// An ordered list of names or definitions passed to registration.
///
/// A single string always converts into exactly one term, whitespace
/// included. Use [`Terms::split_whitespace`] for the space-separated
/// name-list form (`"age2 age"`).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Terms(Vec<String>);

impl Terms {
    /// Split a space-separated list into one term per word.
    pub fn split_whitespace(list: &str) -> Self {
        Self(list.split_whitespace().map(str::to_string).collect())
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, String> {
        self.0.iter()
    }

    pub fn into_vec(self) -> Vec<String> {
        self.0
    }
}

impl From<&str> for Terms {
    fn from(term: &str) -> Self {
        Self(vec![term.to_string()])
    }
}

impl From<String> for Terms {
    fn from(term: String) -> Self {
        Self(vec![term])
    }
}

impl From<Vec<String>> for Terms {
    fn from(terms: Vec<String>) -> Self {
        Self(terms)
    }
}

impl From<Vec<&str>> for Terms {
    fn from(terms: Vec<&str>) -> Self {
        Self(terms.into_iter().map(str::to_string).collect())
    }
}

impl From<&[&str]> for Terms {
    fn from(terms: &[&str]) -> Self {
        Self(terms.iter().map(|t| t.to_string()).collect())
    }
}

impl From<&[String]> for Terms {
    fn from(terms: &[String]) -> Self {
        Self(terms.to_vec())
    }
}

impl<const N: usize> From<[&str; N]> for Terms {
    fn from(terms: [&str; N]) -> Self {
        Self(terms.iter().map(|t| t.to_string()).collect())
    }
}

impl<'a> IntoIterator for &'a Terms {
    type Item = &'a String;
    type IntoIter = std::slice::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_string_is_one_term() {
        let terms = Terms::from("the number of years since a thing was created");
        assert_eq!(terms.len(), 1);
    }

    #[test]
    fn test_split_whitespace() {
        let terms = Terms::split_whitespace("age2  age");
        assert_eq!(terms.into_vec(), vec!["age2", "age"]);
        assert!(Terms::split_whitespace("   ").is_empty());
    }

    #[test]
    fn test_conversions_preserve_order() {
        let from_array = Terms::from(["b", "a"]);
        let from_vec = Terms::from(vec!["b".to_string(), "a".to_string()]);
        assert_eq!(from_array, from_vec);
        assert_eq!(from_array.iter().next().map(String::as_str), Some("b"));
    }
}
