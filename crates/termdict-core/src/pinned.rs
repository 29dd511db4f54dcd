//! Pinned terms — caller-designated (entry, term) pairs that a search puts
//! ahead of ordinary ranking.
//!
//! A [`PinnedRef`] names an entry and optionally one of its term strings.
//! [`PinnedTermsCache::load`] resolves refs against the store's entries ahead
//! of a query and keeps a snapshot of each resolved entry; refs that do not
//! resolve are skipped.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::types::{Entry, Term};

/// Reference to a pinned term: the entry's first term when `str` is absent,
/// otherwise the term with exactly that string.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PinnedRef {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub str: Option<String>,
}

impl PinnedRef {
    pub fn entry(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            str: None,
        }
    }

    pub fn term(id: impl Into<String>, s: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            str: Some(s.into()),
        }
    }
}

/// A resolved pinned ref: a snapshot of the entry plus the pinned term's
/// position in it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PinnedTerm {
    entry: Entry,
    term_index: usize,
}

impl PinnedTerm {
    pub fn entry(&self) -> &Entry {
        &self.entry
    }

    pub fn term(&self) -> &Term {
        &self.entry.terms[self.term_index]
    }

    pub fn term_index(&self) -> usize {
        self.term_index
    }

    /// Resolve `r` against `entry`, which must have `r.id` as its id.
    fn resolve(entry: &Entry, r: &PinnedRef) -> Option<Self> {
        let term_index = match &r.str {
            None => (!entry.terms.is_empty()).then_some(0)?,
            Some(s) => entry.term_position(s)?,
        };
        Some(Self {
            entry: entry.clone(),
            term_index,
        })
    }
}

/// Resolved pinned terms, keyed by the ref that produced them.
#[derive(Debug, Clone, Default)]
pub struct PinnedTermsCache {
    terms: HashMap<PinnedRef, PinnedTerm>,
}

impl PinnedTermsCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Resolve `refs` against `entries` and cache every ref that resolves,
    /// replacing any earlier resolution of the same ref. Returns how many refs
    /// were cached.
    pub fn load<'a>(
        &mut self,
        refs: impl IntoIterator<Item = &'a PinnedRef>,
        entries: &[Entry],
    ) -> usize {
        let mut added = 0;
        for r in refs {
            let Some(entry) = entries.iter().find(|e| e.id == r.id) else {
                continue;
            };
            if let Some(pinned) = PinnedTerm::resolve(entry, r) {
                self.terms.insert(r.clone(), pinned);
                added += 1;
            }
        }
        added
    }

    pub fn get(&self, r: &PinnedRef) -> Option<&PinnedTerm> {
        self.terms.get(r)
    }

    pub fn remove(&mut self, r: &PinnedRef) -> Option<PinnedTerm> {
        self.terms.remove(r)
    }

    pub fn len(&self) -> usize {
        self.terms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    pub fn clear(&mut self) {
        self.terms.clear();
    }
}
