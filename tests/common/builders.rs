//! Test builders — expected match records and ad-hoc stores.
//!
//! These builders are designed for readability in test assertions, not for
//! production use. They panic on invalid input rather than returning `Result`.

use termdict::{
    DictInfo, DictStore, Entry, Match, MatchType, PageLimits, PinnedRef, SearchOptions,
};

// ---------------------------------------------------------------------------
// Expected matches
// ---------------------------------------------------------------------------

/// The match a search yields for term `pos` of `entry`, with its payload kept.
pub fn m_full(entry: &Entry, pos: usize, kind: MatchType) -> Match {
    Match::from_entry_term(entry, &entry.terms[pos], kind)
}

/// The match a search yields for term `pos` of `entry` under the default
/// payload handling, which drops `z`.
pub fn m(entry: &Entry, pos: usize, kind: MatchType) -> Match {
    Match {
        z: None,
        ..m_full(entry, pos, kind)
    }
}

/// Compact `(id, str, type)` view of a result list, for readable diffs.
pub fn rows(items: &[Match]) -> Vec<(String, String, MatchType)> {
    items
        .iter()
        .map(|m| (m.id.clone(), m.str.clone(), m.kind))
        .collect()
}

pub fn row(id: &str, s: &str, kind: MatchType) -> (String, String, MatchType) {
    (id.to_string(), s.to_string(), kind)
}

// ---------------------------------------------------------------------------
// StoreBuilder
// ---------------------------------------------------------------------------

/// Fluent builder for small stores that do not need the shared fixture.
///
/// # Example
///
/// ```rust
/// let store = StoreBuilder::new()
///     .dict("Z")
///     .entry(Entry::new("Z:01", "Z").with_term("5"))
///     .ref_term("5")
///     .pin(PinnedRef::entry("Z:01"))
///     .build();
/// ```
pub struct StoreBuilder {
    store: DictStore,
    dicts: Vec<DictInfo>,
    entries: Vec<Entry>,
    ref_terms: Vec<String>,
    pins: Vec<PinnedRef>,
}

impl Default for StoreBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl StoreBuilder {
    pub fn new() -> Self {
        Self::from_store(DictStore::new())
    }

    /// Start from a preconfigured (still empty) store.
    pub fn from_store(store: DictStore) -> Self {
        Self {
            store,
            dicts: Vec::new(),
            entries: Vec::new(),
            ref_terms: Vec::new(),
            pins: Vec::new(),
        }
    }

    pub fn limits(mut self, per_page_default: usize, per_page_max: usize) -> Self {
        self.store = self
            .store
            .with_limits(PageLimits::new(per_page_default, per_page_max));
        self
    }

    pub fn dict(mut self, id: &str) -> Self {
        self.dicts.push(DictInfo::new(id));
        self
    }

    pub fn entry(mut self, entry: Entry) -> Self {
        self.entries.push(entry);
        self
    }

    pub fn ref_term(mut self, s: &str) -> Self {
        self.ref_terms.push(s.to_string());
        self
    }

    pub fn pin(mut self, r: PinnedRef) -> Self {
        self.pins.push(r);
        self
    }

    pub fn build(self) -> DictStore {
        let mut store = self.store;
        for r in store.add_dict_infos(self.dicts) {
            r.expect("builder dictInfo must be valid");
        }
        for r in store.add_entries(self.entries) {
            r.expect("builder entry must be valid");
        }
        for r in store.add_ref_terms(self.ref_terms) {
            r.expect("builder refTerm must be valid");
        }
        store.load_pinned_terms(&self.pins);
        store
    }
}

// ---------------------------------------------------------------------------
// Search option shorthands
// ---------------------------------------------------------------------------

pub fn opts() -> SearchOptions {
    SearchOptions::default()
}

/// The refs pinned by the shared pinned-term scenario: entry `B:02`, term
/// "Iz" of `B:00`, and two ids that do not exist.
pub fn fixture_pins() -> Vec<PinnedRef> {
    vec![
        PinnedRef::entry("B:02"),
        PinnedRef::term("B:00", "Iz"),
        PinnedRef::entry("xx"),
        PinnedRef::entry("yy"),
    ]
}
