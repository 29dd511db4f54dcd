//! Store — the authoritative in-memory collections of dictInfos, entries and
//! reference terms, with their CRUD operations, listings and search.
//!
//! Invariants kept between calls:
//!
//! - dictInfos have unique, non-empty ids and are sorted by id;
//! - entries have globally unique ids, an existing dictID and at least one
//!   term with a non-empty string, and are sorted by (dictID, id);
//! - reference terms are non-empty, deduplicated and sorted.
//!
//! Batch operations report one `Result` per input item, in input order; a
//! failing item leaves the store untouched and does not stop the batch.

use std::sync::Arc;

use tracing::{debug, trace, warn};

use crate::collate::cmp_ci;
use crate::config::Config;
use crate::error::DictError;
use crate::extra::{ExtraMatcher, NumberMatcher};
use crate::options::{EntrySort, ListDictInfos, ListEntries, ListRefTerms, SearchOptions};
use crate::pinned::{PinnedRef, PinnedTermsCache};
use crate::prune::prune;
use crate::query::{query, PageLimits};
use crate::search;
use crate::types::{
    non_empty, DictInfo, DictionaryData, Entry, EntryUpdate, Match, PayloadDeletion,
};

/// In-memory dictionary store.
#[derive(Debug, Clone)]
pub struct DictStore {
    dict_infos: Vec<DictInfo>,
    entries: Vec<Entry>,
    ref_terms: Vec<String>,
    pinned: PinnedTermsCache,
    extras: Vec<Arc<dyn ExtraMatcher>>,
    limits: PageLimits,
}

impl Default for DictStore {
    fn default() -> Self {
        Self::new()
    }
}

impl DictStore {
    /// An empty store with the built-in configuration.
    pub fn new() -> Self {
        Self::from_config(&Config::defaults())
    }

    /// An empty store using the page limits and number matching of `cfg`.
    pub fn from_config(cfg: &Config) -> Self {
        let extras: Vec<Arc<dyn ExtraMatcher>> = NumberMatcher::from_config(&cfg.number_match)
            .into_iter()
            .map(|m| Arc::new(m) as Arc<dyn ExtraMatcher>)
            .collect();
        Self {
            dict_infos: Vec::new(),
            entries: Vec::new(),
            ref_terms: Vec::new(),
            pinned: PinnedTermsCache::new(),
            extras,
            limits: cfg.paging.limits(),
        }
    }

    pub fn with_limits(mut self, limits: PageLimits) -> Self {
        self.limits = limits;
        self
    }

    /// Register another extra matcher after the existing ones.
    pub fn with_extra_matcher(mut self, matcher: impl ExtraMatcher + 'static) -> Self {
        self.extras.push(Arc::new(matcher));
        self
    }

    /// Drop every registered extra matcher, the number matcher included.
    pub fn without_extra_matchers(mut self) -> Self {
        self.extras.clear();
        self
    }

    /// Bulk-load `data` into the store; fails with every collected error.
    pub fn with_data(mut self, data: DictionaryData) -> Result<Self, DictError> {
        self.add_dictionary_data(data)?;
        Ok(self)
    }

    // -----------------------------------------------------------------------
    // Accessors
    // -----------------------------------------------------------------------

    pub fn dict_infos(&self) -> &[DictInfo] {
        &self.dict_infos
    }

    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    pub fn ref_terms(&self) -> &[String] {
        &self.ref_terms
    }

    pub fn pinned_terms(&self) -> &PinnedTermsCache {
        &self.pinned
    }

    pub fn extra_matchers(&self) -> &[Arc<dyn ExtraMatcher>] {
        &self.extras
    }

    pub fn limits(&self) -> PageLimits {
        self.limits
    }

    // -----------------------------------------------------------------------
    // DictInfos
    // -----------------------------------------------------------------------

    pub fn add_dict_infos(
        &mut self,
        infos: impl IntoIterator<Item = DictInfo>,
    ) -> Vec<Result<(), DictError>> {
        let out: Vec<_> = infos.into_iter().map(|di| self.add_dict_info(di)).collect();
        self.sort_dict_infos();
        log_batch("add_dict_infos", &out);
        out
    }

    /// Replace `abbrev` and `name` of existing dictInfos where the update
    /// carries a non-empty value; returns the updated dictInfos.
    pub fn update_dict_infos(
        &mut self,
        infos: impl IntoIterator<Item = DictInfo>,
    ) -> Vec<Result<DictInfo, DictError>> {
        let out: Vec<_> = infos.into_iter().map(|di| self.update_dict_info(di)).collect();
        self.sort_dict_infos();
        log_batch("update_dict_infos", &out);
        out
    }

    pub fn delete_dict_infos<S: AsRef<str>>(
        &mut self,
        ids: impl IntoIterator<Item = S>,
    ) -> Vec<Result<(), DictError>> {
        let out: Vec<_> = ids
            .into_iter()
            .map(|id| self.delete_dict_info(id.as_ref()))
            .collect();
        log_batch("delete_dict_infos", &out);
        out
    }

    fn add_dict_info(&mut self, di: DictInfo) -> Result<(), DictError> {
        if di.id.is_empty() {
            return Err(DictError::MissingDictInfoId);
        }
        if self.dict_info_index(&di.id).is_some() {
            return Err(DictError::DictInfoExists(di.id));
        }
        self.dict_infos.push(DictInfo {
            id: di.id,
            abbrev: non_empty(di.abbrev),
            name: non_empty(di.name),
        });
        Ok(())
    }

    fn update_dict_info(&mut self, di: DictInfo) -> Result<DictInfo, DictError> {
        let index = self
            .dict_info_index(&di.id)
            .ok_or_else(|| DictError::AbsentDictInfo(di.id.clone()))?;
        let stored = &mut self.dict_infos[index];
        if let Some(abbrev) = non_empty(di.abbrev) {
            stored.abbrev = Some(abbrev);
        }
        if let Some(name) = non_empty(di.name) {
            stored.name = Some(name);
        }
        Ok(stored.clone())
    }

    fn delete_dict_info(&mut self, id: &str) -> Result<(), DictError> {
        let index = self
            .dict_info_index(id)
            .ok_or_else(|| DictError::AbsentDictInfo(id.to_string()))?;
        if self.entries.iter().any(|e| e.dict_id == id) {
            return Err(DictError::DictInfoInUse(id.to_string()));
        }
        self.dict_infos.remove(index);
        Ok(())
    }

    fn dict_info_index(&self, id: &str) -> Option<usize> {
        self.dict_infos.iter().position(|di| di.id == id)
    }

    fn sort_dict_infos(&mut self) {
        self.dict_infos.sort_by(|a, b| cmp_ci(&a.id, &b.id));
    }

    // -----------------------------------------------------------------------
    // Entries
    // -----------------------------------------------------------------------

    pub fn add_entries(
        &mut self,
        entries: impl IntoIterator<Item = Entry>,
    ) -> Vec<Result<(), DictError>> {
        let out: Vec<_> = entries.into_iter().map(|e| self.add_entry(e)).collect();
        self.sort_entries();
        log_batch("add_entries", &out);
        out
    }

    /// Merge each update into its stored entry; returns the updated entries.
    pub fn update_entries(
        &mut self,
        updates: impl IntoIterator<Item = EntryUpdate>,
    ) -> Vec<Result<Entry, DictError>> {
        let out: Vec<_> = updates.into_iter().map(|u| self.update_entry(u)).collect();
        self.sort_entries();
        log_batch("update_entries", &out);
        out
    }

    pub fn delete_entries<S: AsRef<str>>(
        &mut self,
        ids: impl IntoIterator<Item = S>,
    ) -> Vec<Result<(), DictError>> {
        let out: Vec<_> = ids
            .into_iter()
            .map(|id| self.delete_entry(id.as_ref()))
            .collect();
        log_batch("delete_entries", &out);
        out
    }

    fn add_entry(&mut self, mut entry: Entry) -> Result<(), DictError> {
        if entry.id.is_empty() || entry.dict_id.is_empty() || entry.terms.is_empty() {
            return Err(DictError::MissingEntryField);
        }
        if self.dict_info_index(&entry.dict_id).is_none() {
            return Err(DictError::NoSuchDictId(entry.dict_id));
        }
        if self.entry_index(&entry.id).is_some() {
            return Err(DictError::EntryExists(entry.id));
        }
        if entry.terms.iter().any(|t| t.str.is_empty()) {
            return Err(DictError::InvalidTerm);
        }
        entry.descr = non_empty(entry.descr);
        self.entries.push(entry);
        Ok(())
    }

    fn update_entry(&mut self, u: EntryUpdate) -> Result<Entry, DictError> {
        let index = self
            .entry_index(&u.id)
            .ok_or_else(|| DictError::AbsentEntry(u.id.clone()))?;
        let dict_id = non_empty(u.dict_id);
        if let Some(dict_id) = &dict_id {
            if self.dict_info_index(dict_id).is_none() {
                return Err(DictError::NoSuchDictId(dict_id.clone()));
            }
        }
        if u.terms.iter().any(|t| t.str.is_empty()) {
            return Err(DictError::InvalidTerm);
        }

        let mut entry = self.entries[index].clone();
        if let Some(dict_id) = dict_id {
            entry.dict_id = dict_id;
        }
        if let Some(descr) = non_empty(u.descr) {
            entry.descr = Some(descr);
        }

        entry.terms.retain(|t| !u.terms_del.contains(&t.str));

        match u.z_del {
            Some(PayloadDeletion::All) => entry.z = None,
            Some(PayloadDeletion::Keys(keys)) => {
                if let Some(z) = entry.z.as_mut() {
                    for key in &keys {
                        z.remove(key);
                    }
                }
            }
            None => {}
        }

        for term in u.terms {
            match entry.term_position(&term.str) {
                Some(j) => entry.terms[j] = term,
                None => entry.terms.push(term),
            }
        }
        if entry.terms.is_empty() {
            return Err(DictError::NoTermsLeft);
        }

        if let Some(z) = u.z {
            entry.z.get_or_insert_with(Default::default).extend(z);
        }

        self.entries[index] = entry.clone();
        Ok(entry)
    }

    fn delete_entry(&mut self, id: &str) -> Result<(), DictError> {
        let index = self
            .entry_index(id)
            .ok_or_else(|| DictError::AbsentEntry(id.to_string()))?;
        self.entries.remove(index);
        Ok(())
    }

    fn entry_index(&self, id: &str) -> Option<usize> {
        self.entries.iter().position(|e| e.id == id)
    }

    fn sort_entries(&mut self) {
        self.entries.sort_by(|a, b| {
            cmp_ci(&a.dict_id, &b.dict_id).then_with(|| cmp_ci(&a.id, &b.id))
        });
    }

    // -----------------------------------------------------------------------
    // Reference terms
    // -----------------------------------------------------------------------

    pub fn add_ref_terms<S: Into<String>>(
        &mut self,
        strs: impl IntoIterator<Item = S>,
    ) -> Vec<Result<(), DictError>> {
        let out: Vec<_> = strs.into_iter().map(|s| self.add_ref_term(s.into())).collect();
        log_batch("add_ref_terms", &out);
        out
    }

    pub fn delete_ref_terms<S: AsRef<str>>(
        &mut self,
        strs: impl IntoIterator<Item = S>,
    ) -> Vec<Result<(), DictError>> {
        let out: Vec<_> = strs
            .into_iter()
            .map(|s| self.delete_ref_term(s.as_ref()))
            .collect();
        log_batch("delete_ref_terms", &out);
        out
    }

    fn add_ref_term(&mut self, s: String) -> Result<(), DictError> {
        if s.is_empty() {
            return Err(DictError::EmptyRefTerm);
        }
        if let Err(i) = self.ref_terms.binary_search(&s) {
            self.ref_terms.insert(i, s);
        }
        Ok(())
    }

    fn delete_ref_term(&mut self, s: &str) -> Result<(), DictError> {
        let index = self
            .ref_terms
            .iter()
            .position(|r| r == s)
            .ok_or_else(|| DictError::AbsentRefTerm(s.to_string()))?;
        self.ref_terms.remove(index);
        Ok(())
    }

    // -----------------------------------------------------------------------
    // Bulk loading
    // -----------------------------------------------------------------------

    /// Add dictInfos with their entries, then reference terms.
    ///
    /// A dictInfo that already exists is updated instead. Entries without a
    /// dictID inherit the enclosing one; an entry naming a different dictID
    /// is rejected. An entry whose id already exists is merged into the
    /// stored one. Every item is attempted; the errors are returned together.
    pub fn add_dictionary_data(&mut self, data: DictionaryData) -> Result<(), DictError> {
        let mut errs = Vec::new();

        for dict in data.dict_data {
            let dict_id = dict.info.id.clone();
            match self.add_dict_info(dict.info.clone()) {
                Ok(()) => {}
                Err(DictError::DictInfoExists(_)) => {
                    if let Err(e) = self.update_dict_info(dict.info) {
                        errs.push(e);
                    }
                }
                Err(e) => errs.push(e),
            }

            for mut entry in dict.entries {
                if entry.dict_id.is_empty() {
                    entry.dict_id = dict_id.clone();
                } else if entry.dict_id != dict_id {
                    errs.push(DictError::DictIdOverride(dict_id.clone()));
                    continue;
                }
                let result = match self.add_entry(entry.clone()) {
                    Err(DictError::EntryExists(_)) => {
                        self.update_entry(EntryUpdate::from(entry)).map(|_| ())
                    }
                    other => other,
                };
                if let Err(e) = result {
                    errs.push(e);
                }
            }
        }
        self.sort_dict_infos();
        self.sort_entries();

        for s in data.ref_terms {
            if let Err(e) = self.add_ref_term(s) {
                errs.push(e);
            }
        }

        debug!(
            dict_infos = self.dict_infos.len(),
            entries = self.entries.len(),
            ref_terms = self.ref_terms.len(),
            "dictionary data loaded"
        );
        if errs.is_empty() {
            Ok(())
        } else {
            warn!(errors = errs.len(), "dictionary data loaded with errors");
            Err(DictError::Data(errs))
        }
    }

    // -----------------------------------------------------------------------
    // Listings
    // -----------------------------------------------------------------------

    pub fn list_dict_infos(&self, o: &ListDictInfos) -> Vec<DictInfo> {
        query(
            self.dict_infos.iter(),
            |di| o.ids.as_ref().map_or(true, |ids| ids.contains(&di.id)),
            |a, b| cmp_ci(&a.id, &b.id),
            o.page,
            o.per_page,
            self.limits,
        )
        .into_iter()
        .cloned()
        .collect()
    }

    pub fn list_entries(&self, o: &ListEntries) -> Vec<Entry> {
        let by_dict_id = |a: &&Entry, b: &&Entry| {
            cmp_ci(&a.dict_id, &b.dict_id).then_with(|| cmp_ci(&a.id, &b.id))
        };
        let items = query(
            self.entries.iter(),
            |e| {
                o.ids.as_ref().map_or(true, |ids| ids.contains(&e.id))
                    && o.dict_ids.as_ref().map_or(true, |ids| ids.contains(&e.dict_id))
            },
            |a, b| match o.sort {
                EntrySort::DictId => by_dict_id(a, b),
                EntrySort::Id => cmp_ci(&a.id, &b.id),
                EntrySort::Str => {
                    cmp_ci(first_term(a), first_term(b)).then_with(|| by_dict_id(a, b))
                }
            },
            o.page,
            o.per_page,
            self.limits,
        );
        prune(items.into_iter().cloned().collect(), &o.z)
    }

    pub fn list_ref_terms(&self, o: &ListRefTerms) -> Vec<String> {
        query(
            self.ref_terms.iter(),
            |s| o.strs.as_ref().map_or(true, |strs| strs.contains(s)),
            |a, b| cmp_ci(a, b),
            o.page,
            o.per_page,
            self.limits,
        )
        .into_iter()
        .cloned()
        .collect()
    }

    // -----------------------------------------------------------------------
    // Pinned terms
    // -----------------------------------------------------------------------

    /// Resolve `refs` against the current entries and cache them for later
    /// searches. Unresolvable refs are skipped; returns how many were cached.
    pub fn load_pinned_terms(&mut self, refs: &[PinnedRef]) -> usize {
        let added = self.pinned.load(refs, &self.entries);
        trace!(requested = refs.len(), added, "load_pinned_terms");
        added
    }

    pub fn clear_pinned_terms(&mut self) {
        self.pinned.clear();
    }

    // -----------------------------------------------------------------------
    // Search
    // -----------------------------------------------------------------------

    /// Ranked matches for `query`: extra, reference and pinned matches lead
    /// page 1, followed by one page of ordinary term matches.
    pub fn search(&self, query: &str, opts: &SearchOptions) -> Vec<Match> {
        search::search(self, query, opts)
    }

    /// One page of ordinary term matches only.
    pub fn entry_matches(&self, query: &str, opts: &SearchOptions) -> Vec<Match> {
        search::entry_matches(self, query, opts)
    }
}

fn first_term(e: &Entry) -> &str {
    e.terms.first().map_or("", |t| t.str.as_str())
}

fn log_batch<T>(op: &str, out: &[Result<T, DictError>]) {
    let failed = out.iter().filter(|r| r.is_err()).count();
    trace!(op, count = out.len(), failed, "batch done");
}
