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

//! Vocabspec Core
//!
//! A vocabulary registry and cross-vocabulary data converter. Properties
//! are declared with one or more names and one or more human-readable
//! definitions. Data is translated between two independently defined
//! vocabularies by matching properties that share an identical definition
//! rather than an identical name.
//!
//! # Features
//!
//! - **Registration**: name and definition uniqueness per vocabulary, with
//!   optional renaming of conflicting names (`age` -> `age_2`)
//! - **Matching**: exact, case-sensitive definition equality
//! - **Auto-registration**: unmatched properties can be adopted by the
//!   target vocabulary, optionally with a notification handler
//! - **Conversion**: recursive over arrays and objects, never mutating its
//!   input
//!
//! # Example
//!
//! ```
//! use vocabspec_core::{AutoRegister, Vocabulary};
//! use serde_json::json;
//!
//! let v0 = Vocabulary::new();
//! v0.define_property("age", "some other def of age").unwrap();
//! let v1 = Vocabulary::new();
//! v1.define_property("age", "years since creation").unwrap();
//!
//! let vx = Vocabulary::new();
//! vx.set_auto_register(AutoRegister::Silent);
//! assert_eq!(v0.convert_json(&json!({"age": 20}), &vx).unwrap(), json!({"age": 20}));
//! assert_eq!(v1.convert_json(&json!({"age": 21}), &vx).unwrap(), json!({"age_2": 21}));
//! ```

pub mod auto;
pub mod config;
pub mod error;
pub mod names;
pub mod record;
pub mod terms;
pub mod value;
pub mod vocabulary;

pub use auto::{AutoRegister, AutoRegisterHandler};
pub use config::{DefineOptions, VocabularyConfig};
pub use error::{VocabError, VocabResult};
pub use names::NameAllocator;
pub use record::PropertyRecord;
pub use terms::Terms;
pub use value::{Object, Value};
pub use vocabulary::Vocabulary;
