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

//! Name allocation ledger.
//!
//! Tracks every name claimed in a vocabulary and hands out fresh
//! `base_N` names when a requested name is already taken. The ledger maps
//! each claimed name to the highest suffix count produced for it, so
//! repeated allocations for the same base keep advancing instead of
//! rescanning from one.
//!
//! Registration goes through [`NameAllocator::stage`]: claims and
//! allocations are buffered in a [`NameClaims`] overlay and only land in
//! the ledger when [`NameAllocator::commit`] runs together with appending
//! the new record. A registration that fails half-way leaves the ledger
//! exactly as it was.

use std::collections::HashMap;
use tracing::{debug, trace};

/// Default separator between a base name and its numeric suffix.
pub const DEFAULT_SUFFIX_SEPARATOR: &str = "_";

/// Per-vocabulary ledger of claimed names and suffix counters.
#[derive(Debug, Clone)]
pub struct NameAllocator {
    counts: HashMap<String, u64>,
    separator: String,
}

impl Default for NameAllocator {
    fn default() -> Self {
        Self::new()
    }
}

impl NameAllocator {
    /// Create an empty ledger using `_` as suffix separator.
    pub fn new() -> Self {
        Self::with_separator(DEFAULT_SUFFIX_SEPARATOR)
    }

    /// Create an empty ledger with a custom suffix separator.
    pub fn with_separator(separator: impl Into<String>) -> Self {
        Self {
            counts: HashMap::new(),
            separator: separator.into(),
        }
    }

    /// Whether `name` was claimed or used as an allocation base.
    pub fn is_claimed(&self, name: &str) -> bool {
        self.counts.contains_key(name)
    }

    /// Highest suffix count recorded for `name`, if it is in the ledger.
    pub fn count(&self, name: &str) -> Option<u64> {
        self.counts.get(name).copied()
    }

    /// Mark `name` as taken without creating a record.
    pub fn claim(&mut self, name: &str) {
        let mut claims = self.stage();
        claims.claim(name);
        let pending = claims.into_pending();
        self.commit(pending);
    }

    /// Produce a name derived from `base` that is not in the ledger.
    ///
    /// The returned name itself is not claimed; only the counter for
    /// `base` advances.
    pub fn allocate_unique(&mut self, base: &str) -> String {
        let mut claims = self.stage();
        let name = claims.allocate_unique(base);
        let pending = claims.into_pending();
        self.commit(pending);
        name
    }

    /// Start a staged set of claims reading through to this ledger.
    pub fn stage(&self) -> NameClaims<'_> {
        NameClaims {
            ledger: self,
            pending: HashMap::new(),
        }
    }

    /// Apply staged claims and counter advances.
    pub fn commit(&mut self, pending: PendingClaims) {
        for (name, count) in pending.0 {
            self.counts.insert(name, count);
        }
    }
}

/// Buffered claims that have not reached the ledger yet.
pub struct NameClaims<'a> {
    ledger: &'a NameAllocator,
    pending: HashMap<String, u64>,
}

impl NameClaims<'_> {
    fn lookup(&self, name: &str) -> Option<u64> {
        self.pending
            .get(name)
            .copied()
            .or_else(|| self.ledger.count(name))
    }

    /// Whether `name` is taken in the ledger or by an earlier staged claim.
    pub fn is_claimed(&self, name: &str) -> bool {
        self.lookup(name).is_some()
    }

    /// Stage a claim for `name` with count 1.
    ///
    /// A name that already carries a counter keeps it.
    pub fn claim(&mut self, name: &str) {
        if self.lookup(name).is_none() {
            debug!(name, "claiming name");
            self.pending.insert(name.to_string(), 1);
        }
    }

    /// Stage the next free `base<sep>N` name and advance the counter for
    /// `base`.
    pub fn allocate_unique(&mut self, base: &str) -> String {
        let separator = self.ledger.separator.as_str();
        let mut count = self.lookup(base).unwrap_or(0);
        let candidate = loop {
            count += 1;
            let candidate = format!("{base}{separator}{count}");
            match self.lookup(&candidate) {
                None => break candidate,
                Some(stored) => trace!(candidate = %candidate, stored, "candidate already claimed"),
            }
        };
        debug!(base, name = %candidate, count, "allocated unique name");
        self.pending.insert(base.to_string(), count);
        candidate
    }

    /// Finish staging; hand the result to [`NameAllocator::commit`].
    pub fn into_pending(self) -> PendingClaims {
        PendingClaims(self.pending)
    }
}

/// Claims produced by a [`NameClaims`] session, ready to commit.
#[derive(Debug, Default)]
pub struct PendingClaims(HashMap<String, u64>);
