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

//! The vocabulary: property registry, matcher and converter.
//!
//! A [`Vocabulary`] owns its records, the name and definition indexes and
//! the name allocation ledger. Vocabularies only talk to each other through
//! [`Vocabulary::convert`], which looks keys up in the source and asks the
//! target for a record with a shared definition.
//!
//! # Concurrency Model
//!
//! State sits behind a `parking_lot::RwLock`. Every call holds the lock for
//! one registration or one lookup and never while recursing into another
//! vocabulary or running an auto-registration handler, so converting a
//! vocabulary into itself is fine and handlers may inspect the vocabulary
//! that notified them.

use crate::auto::AutoRegister;
use crate::config::{DefineOptions, VocabularyConfig};
use crate::error::{VocabError, VocabResult};
use crate::names::NameAllocator;
use crate::record::PropertyRecord;
use crate::terms::Terms;
use crate::value::{Object, Value};
use parking_lot::{RwLock, RwLockUpgradableReadGuard};
use serde_json::Value as JsonValue;
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;
use tracing::{debug, trace};

/// Registry state guarded by the vocabulary lock.
struct RegistryInner {
    /// Records in registration order.
    records: Vec<Arc<PropertyRecord>>,
    /// Name -> index of the record that first registered it.
    by_name: HashMap<String, usize>,
    /// Definition -> index of the owning record.
    by_def: HashMap<String, usize>,
    names: NameAllocator,
    auto: AutoRegister,
}

impl RegistryInner {
    fn new(names: NameAllocator, auto: AutoRegister) -> Self {
        Self {
            records: Vec::new(),
            by_name: HashMap::new(),
            by_def: HashMap::new(),
            names,
            auto,
        }
    }

    fn define(
        &mut self,
        mut names: Vec<String>,
        defs: Vec<String>,
        options: DefineOptions,
    ) -> VocabResult<Arc<PropertyRecord>> {
        if names.is_empty() {
            return Err(VocabError::InvalidArgument(
                "names must be a string or a non-empty list".to_string(),
            ));
        }
        if defs.is_empty() {
            return Err(VocabError::InvalidArgument(
                "defs must be a string or a non-empty list".to_string(),
            ));
        }

        // Names are checked against existing records only, never against
        // names earlier in the same call.
        let pending = {
            let mut claims = self.names.stage();
            for name in names.iter_mut() {
                if self.by_name.contains_key(name.as_str()) {
                    if !options.rename_if_conflict {
                        return Err(VocabError::NameConflict { name: name.clone() });
                    }
                    let renamed = claims.allocate_unique(name);
                    debug!(requested = %name, renamed = %renamed, "renaming conflicting property name");
                    *name = renamed;
                }
                claims.claim(name);
            }
            claims.into_pending()
        };

        let owner = defs
            .iter()
            .filter_map(|def| self.by_def.get(def))
            .min()
            .copied();
        if let Some(owner) = owner {
            return Err(VocabError::DefinitionConflict {
                name: names[0].clone(),
                owner: self.records[owner].canonical_name().to_string(),
            });
        }

        self.names.commit(pending);
        let index = self.records.len();
        for name in &names {
            self.by_name.entry(name.clone()).or_insert(index);
        }
        for def in &defs {
            self.by_def.entry(def.clone()).or_insert(index);
        }
        let record = Arc::new(PropertyRecord::new(names, defs));
        debug!(names = ?record.names, index, "defined property");
        self.records.push(Arc::clone(&record));
        Ok(record)
    }

    /// Earliest registered record sharing a definition with `incoming`.
    fn find_shared(&self, incoming: &PropertyRecord) -> Option<Arc<PropertyRecord>> {
        incoming
            .defs
            .iter()
            .filter_map(|def| self.by_def.get(def))
            .min()
            .map(|&index| Arc::clone(&self.records[index]))
    }
}

/// An independent registry of named, defined properties.
///
/// # Example
///
/// ```
/// use vocabspec_core::{Value, Vocabulary};
///
/// let years = "the number of years since a thing was created";
/// let v1 = Vocabulary::new();
/// v1.define_property("age", years).unwrap();
/// let v2 = Vocabulary::new();
/// v2.define_property("yearsOld", years).unwrap();
///
/// let out = v1.convert(&Value::object([("age", 20)]), &v2).unwrap();
/// assert_eq!(out, Value::object([("yearsOld", 20)]));
/// ```
pub struct Vocabulary {
    inner: RwLock<RegistryInner>,
}

impl Default for Vocabulary {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Vocabulary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let inner = self.inner.read();
        f.debug_struct("Vocabulary")
            .field("records", &inner.records.len())
            .field("auto", &inner.auto)
            .finish()
    }
}

impl Vocabulary {
    /// Create an empty vocabulary with auto-registration disabled.
    pub fn new() -> Self {
        Self {
            inner: RwLock::new(RegistryInner::new(
                NameAllocator::new(),
                AutoRegister::Disabled,
            )),
        }
    }

    /// Create an empty vocabulary from a validated configuration.
    pub fn with_config(config: VocabularyConfig) -> VocabResult<Self> {
        config.validate()?;
        let names = NameAllocator::with_separator(config.suffix_separator.as_str());
        Ok(Self {
            inner: RwLock::new(RegistryInner::new(names, config.auto_register_mode())),
        })
    }

    /// Register a property, failing on any name conflict.
    pub fn define_property(
        &self,
        names: impl Into<Terms>,
        defs: impl Into<Terms>,
    ) -> VocabResult<Arc<PropertyRecord>> {
        self.define_property_with(names, defs, DefineOptions::default())
    }

    /// Register a property.
    ///
    /// With [`DefineOptions::rename_if_conflict`] a name already used in
    /// this vocabulary is replaced by a generated `name_N`. Definitions are
    /// never renamed: a definition owned by another record fails with
    /// [`VocabError::DefinitionConflict`], reported under the resolved
    /// first name.
    ///
    /// Registration is all-or-nothing. On error neither the records nor
    /// the name ledger change.
    pub fn define_property_with(
        &self,
        names: impl Into<Terms>,
        defs: impl Into<Terms>,
        options: DefineOptions,
    ) -> VocabResult<Arc<PropertyRecord>> {
        let names = names.into().into_vec();
        let defs = defs.into().into_vec();
        self.inner.write().define(names, defs, options)
    }

    /// Find the record in this vocabulary that shares a definition with
    /// `incoming`, auto-registering it when enabled.
    ///
    /// This is the entry point a source vocabulary uses while converting
    /// into this one.
    pub(crate) fn match_record(
        &self,
        incoming: &PropertyRecord,
    ) -> VocabResult<Option<Arc<PropertyRecord>>> {
        let (record, handler) = {
            let inner = self.inner.upgradable_read();
            if let Some(found) = inner.find_shared(incoming) {
                return Ok(Some(found));
            }
            if !inner.auto.is_enabled() {
                return Ok(None);
            }

            let mut inner = RwLockUpgradableReadGuard::upgrade(inner);
            debug!(names = ?incoming.names, defs = ?incoming.defs, "auto defining property");
            let handler = inner.auto.handler().cloned();
            let record = inner.define(
                incoming.names.clone(),
                incoming.defs.clone(),
                DefineOptions::renaming(),
            )?;
            (record, handler)
        };

        if let Some(handler) = handler {
            handler(&record);
        }
        Ok(Some(record))
    }

    /// Convert `value` from this vocabulary's names into `target`'s.
    ///
    /// Object keys are looked up here and matched into `target` by
    /// definition; the output key is the matched record's canonical name.
    /// Keys unknown here or unmatched in `target` are dropped. Arrays are
    /// converted element by element and primitives pass through unchanged.
    ///
    /// The input is never modified, but `target` gains records when its
    /// auto-registration is enabled.
    pub fn convert(&self, value: &Value, target: &Vocabulary) -> VocabResult<Value> {
        match value {
            Value::Undefined
            | Value::Null
            | Value::Bool(_)
            | Value::Number(_)
            | Value::String(_) => Ok(value.clone()),
            Value::Array(items) => items
                .iter()
                .map(|item| self.convert(item, target))
                .collect::<VocabResult<Vec<_>>>()
                .map(Value::Array),
            Value::Object(map) => {
                let mut out = Object::with_capacity(map.len());
                for (from_name, from_value) in map {
                    let Some(record) = self.record_by_name(from_name) else {
                        trace!(property = %from_name, "skipping unregistered property");
                        continue;
                    };
                    match target.match_record(&record)? {
                        Some(to) => {
                            trace!(from = %from_name, to = %to.canonical_name(), "converting property");
                            let converted = self.convert(from_value, target)?;
                            out.insert(to.canonical_name().to_string(), converted);
                        }
                        None => {
                            debug!(property = %from_name, "no matching property in target vocabulary");
                        }
                    }
                }
                Ok(Value::Object(out))
            }
            Value::Unsupported(type_name) => Err(VocabError::UnsupportedType(type_name.clone())),
        }
    }

    /// [`Vocabulary::convert`] for `serde_json` values.
    pub fn convert_json(&self, value: &JsonValue, target: &Vocabulary) -> VocabResult<JsonValue> {
        let converted = self.convert(&Value::from(value), target)?;
        JsonValue::try_from(converted)
    }

    /// The record that has `name` among its names.
    pub fn record_by_name(&self, name: &str) -> Option<Arc<PropertyRecord>> {
        let inner = self.inner.read();
        inner
            .by_name
            .get(name)
            .map(|&index| Arc::clone(&inner.records[index]))
    }

    /// All records in registration order.
    pub fn records(&self) -> Vec<Arc<PropertyRecord>> {
        self.inner.read().records.clone()
    }

    /// Number of registered records.
    pub fn len(&self) -> usize {
        self.inner.read().records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.read().records.is_empty()
    }

    /// Current auto-registration setting.
    pub fn auto_register(&self) -> AutoRegister {
        self.inner.read().auto.clone()
    }

    /// Replace the auto-registration setting.
    pub fn set_auto_register(&self, auto: impl Into<AutoRegister>) {
        self.inner.write().auto = auto.into();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[test]
    fn test_define_returns_record() {
        let vocab = Vocabulary::new();
        let rec = vocab.define_property("age", "years since creation").unwrap();
        assert_eq!(rec.names, vec!["age"]);
        assert_eq!(rec.defs, vec!["years since creation"]);
        assert_eq!(vocab.len(), 1);
    }

    #[test]
    fn test_empty_terms_rejected() {
        let vocab = Vocabulary::new();
        let err = vocab
            .define_property(Vec::<String>::new(), "def")
            .unwrap_err();
        assert!(matches!(err, VocabError::InvalidArgument(_)));

        let err = vocab.define_property("age", Vec::<&str>::new()).unwrap_err();
        assert!(matches!(err, VocabError::InvalidArgument(ref m) if m.starts_with("defs")));
        assert!(vocab.is_empty());
    }

    #[test]
    fn test_alias_names_resolve_to_record() {
        let vocab = Vocabulary::new();
        vocab
            .define_property(Terms::split_whitespace("age2 age"), ["newer def", "older def"])
            .unwrap();
        let rec = vocab.record_by_name("age").unwrap();
        assert_eq!(rec.canonical_name(), "age2");
        assert!(vocab.record_by_name("ages").is_none());
    }

    #[test]
    fn test_rename_if_conflict() {
        let vocab = Vocabulary::new();
        vocab.define_property("age", "def 1").unwrap();
        let rec = vocab
            .define_property_with("age", "def 2", DefineOptions::renaming())
            .unwrap();
        assert_eq!(rec.names, vec!["age_2"]);
        assert!(vocab.record_by_name("age_2").is_some());
    }

    #[test]
    fn test_definition_conflict_reports_renamed_name() {
        let vocab = Vocabulary::new();
        vocab.define_property("age", "def").unwrap();
        let err = vocab
            .define_property_with("age", "def", DefineOptions::renaming())
            .unwrap_err();
        assert_eq!(err.to_string(), "Property def of age_2 already used by age");
    }

    #[test]
    fn test_failed_definition_does_not_advance_ledger() {
        let vocab = Vocabulary::new();
        vocab.define_property("age", "def").unwrap();
        assert!(vocab
            .define_property_with(["age", "height"], "def", DefineOptions::renaming())
            .is_err());

        // neither age_2 nor height was claimed by the failed call
        let rec = vocab
            .define_property_with(["age", "height"], "other def", DefineOptions::renaming())
            .unwrap();
        assert_eq!(rec.names, vec!["age_2", "height"]);
    }

    #[test]
    fn test_match_prefers_earliest_record() {
        let vocab = Vocabulary::new();
        vocab.define_property("first", "d1").unwrap();
        vocab.define_property("second", "d2").unwrap();

        let incoming = PropertyRecord::new(vec!["x".into()], vec!["d2".into(), "d1".into()]);
        let found = vocab.match_record(&incoming).unwrap().unwrap();
        assert_eq!(found.canonical_name(), "first");
    }

    #[test]
    fn test_match_is_exact_and_case_sensitive() {
        let vocab = Vocabulary::new();
        vocab
            .define_property("age", ["older def", "Years since creation"])
            .unwrap();

        let shared = PropertyRecord::new(
            vec!["b".into()],
            vec!["some other def".into(), "Years since creation".into()],
        );
        let found = vocab.match_record(&shared).unwrap().unwrap();
        assert_eq!(found.canonical_name(), "age");

        let differs_in_case =
            PropertyRecord::new(vec!["c".into()], vec!["years since creation".into()]);
        assert!(vocab.match_record(&differs_in_case).unwrap().is_none());

        let trailing_space =
            PropertyRecord::new(vec!["d".into()], vec!["older def ".into()]);
        assert!(vocab.match_record(&trailing_space).unwrap().is_none());
    }

    #[test]
    fn test_match_without_auto_returns_none() {
        let vocab = Vocabulary::new();
        let incoming = PropertyRecord::new(vec!["x".into()], vec!["d".into()]);
        assert!(vocab.match_record(&incoming).unwrap().is_none());
        assert!(vocab.is_empty());
    }

    #[test]
    fn test_notify_handler_sees_new_record() {
        let source = Vocabulary::new();
        source.define_property("age", "years").unwrap();

        let target = Arc::new(Vocabulary::new());
        let calls = Arc::new(AtomicUsize::new(0));
        let seen = Arc::clone(&calls);
        let observed = Arc::clone(&target);
        target.set_auto_register(AutoRegister::notify(move |rec| {
            assert_eq!(rec.names, vec!["age"]);
            // the lock is released while the handler runs
            assert_eq!(observed.len(), 1);
            seen.fetch_add(1, Ordering::SeqCst);
        }));

        let out = source.convert(&Value::object([("age", 20)]), &target).unwrap();
        assert_eq!(out, Value::object([("age", 20)]));
        // the second conversion matches the auto-registered record
        source.convert(&Value::object([("age", 21)]), &target).unwrap();
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_convert_into_self() {
        let vocab = Vocabulary::new();
        vocab.define_property(["age", "years"], "years").unwrap();
        let out = vocab
            .convert(&Value::object([("years", 3)]), &vocab)
            .unwrap();
        assert_eq!(out, Value::object([("age", 3)]));
    }

    #[test]
    fn test_with_config() {
        let config = VocabularyConfig {
            auto_register: true,
            suffix_separator: "-".to_string(),
        };
        let vocab = Vocabulary::with_config(config).unwrap();
        assert!(vocab.auto_register().is_enabled());
        vocab.define_property("age", "d1").unwrap();
        let rec = vocab
            .define_property_with("age", "d2", DefineOptions::renaming())
            .unwrap();
        assert_eq!(rec.canonical_name(), "age-2");

        let bad = VocabularyConfig {
            suffix_separator: String::new(),
            ..Default::default()
        };
        assert!(Vocabulary::with_config(bad).is_err());
    }
}
