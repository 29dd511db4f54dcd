//! termdict-async — deferred-result access to a dictionary.
//!
//! [`Dictionary`] is the capability set a dictionary offers to callers:
//! search, listings, CRUD and pinned-term loading, each returning a future.
//! [`LocalDictionary`] implements it over an in-memory
//! [`DictStore`](termdict_core::DictStore).
//!
//! `LocalDictionary` does its work synchronously when an operation is called,
//! so later calls observe earlier mutations even before their futures are
//! awaited. The returned future always resumes on a later scheduling turn and
//! then waits for the configured delay, which simulates a remote dictionary.

mod delay;

use std::future::Future;
use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use termdict_core::{
    Config, Delay, DictError, DictInfo, DictStore, DictionaryData, Entry, EntryUpdate, ItemList,
    ListDictInfos, ListEntries, ListRefTerms, Match, PinnedRef, SearchOptions,
};

use delay::deliver;

/// Result of a batch operation: one outcome per input item.
pub type BatchResult<T> = Vec<Result<T, DictError>>;

/// A dictionary whose operations complete asynchronously.
///
/// The outer `Result` of every operation reports failures of the dictionary
/// itself; batch operations report per-item failures inside it.
pub trait Dictionary {
    fn search(
        &self,
        query: &str,
        opts: &SearchOptions,
    ) -> impl Future<Output = Result<ItemList<Match>, DictError>> + Send;

    fn entry_matches(
        &self,
        query: &str,
        opts: &SearchOptions,
    ) -> impl Future<Output = Result<ItemList<Match>, DictError>> + Send;

    fn list_dict_infos(
        &self,
        opts: &ListDictInfos,
    ) -> impl Future<Output = Result<ItemList<DictInfo>, DictError>> + Send;

    fn list_entries(
        &self,
        opts: &ListEntries,
    ) -> impl Future<Output = Result<ItemList<Entry>, DictError>> + Send;

    fn list_ref_terms(
        &self,
        opts: &ListRefTerms,
    ) -> impl Future<Output = Result<ItemList<String>, DictError>> + Send;

    fn add_dict_infos(
        &self,
        infos: Vec<DictInfo>,
    ) -> impl Future<Output = Result<BatchResult<()>, DictError>> + Send;

    fn update_dict_infos(
        &self,
        infos: Vec<DictInfo>,
    ) -> impl Future<Output = Result<BatchResult<DictInfo>, DictError>> + Send;

    fn delete_dict_infos(
        &self,
        ids: Vec<String>,
    ) -> impl Future<Output = Result<BatchResult<()>, DictError>> + Send;

    fn add_entries(
        &self,
        entries: Vec<Entry>,
    ) -> impl Future<Output = Result<BatchResult<()>, DictError>> + Send;

    fn update_entries(
        &self,
        updates: Vec<EntryUpdate>,
    ) -> impl Future<Output = Result<BatchResult<Entry>, DictError>> + Send;

    fn delete_entries(
        &self,
        ids: Vec<String>,
    ) -> impl Future<Output = Result<BatchResult<()>, DictError>> + Send;

    fn add_ref_terms(
        &self,
        strs: Vec<String>,
    ) -> impl Future<Output = Result<BatchResult<()>, DictError>> + Send;

    fn delete_ref_terms(
        &self,
        strs: Vec<String>,
    ) -> impl Future<Output = Result<BatchResult<()>, DictError>> + Send;

    /// Resolve and cache pinned terms; resolves to how many were cached.
    fn load_pinned_terms(
        &self,
        refs: &[PinnedRef],
    ) -> impl Future<Output = Result<usize, DictError>> + Send;
}

// ---------------------------------------------------------------------------
// LocalDictionary
// ---------------------------------------------------------------------------

/// A [`Dictionary`] backed by an in-memory [`DictStore`].
#[derive(Debug)]
pub struct LocalDictionary {
    store: RwLock<DictStore>,
    delay: RwLock<Delay>,
}

impl Default for LocalDictionary {
    fn default() -> Self {
        Self::new(DictStore::new())
    }
}

impl LocalDictionary {
    /// Wrap `store` with no artificial delay.
    pub fn new(store: DictStore) -> Self {
        Self {
            store: RwLock::new(store),
            delay: RwLock::new(Delay::none()),
        }
    }

    /// An empty dictionary with the page limits, number matching and delay of
    /// `cfg`.
    pub fn from_config(cfg: &Config) -> Self {
        Self::new(DictStore::from_config(cfg)).with_delay(cfg.latency.delay_ms)
    }

    pub fn with_delay(self, delay: impl Into<Delay>) -> Self {
        self.set_delay(delay);
        self
    }

    /// Replace the delay used by every later call.
    pub fn set_delay(&self, delay: impl Into<Delay>) {
        *self.delay.write().unwrap_or_else(PoisonError::into_inner) = delay.into();
    }

    pub fn delay(&self) -> Delay {
        *self.delay.read().unwrap_or_else(PoisonError::into_inner)
    }

    /// Synchronous bulk load; see
    /// [`DictStore::add_dictionary_data`](termdict_core::DictStore::add_dictionary_data).
    pub fn add_dictionary_data(&self, data: DictionaryData) -> Result<(), DictError> {
        self.write().add_dictionary_data(data)
    }

    pub fn clear_pinned_terms(&self) {
        self.write().clear_pinned_terms();
    }

    /// Run `f` against the current store contents.
    pub fn with_store<R>(&self, f: impl FnOnce(&DictStore) -> R) -> R {
        f(&self.read())
    }

    pub fn into_store(self) -> DictStore {
        self.store.into_inner().unwrap_or_else(PoisonError::into_inner)
    }

    fn read(&self) -> RwLockReadGuard<'_, DictStore> {
        self.store.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, DictStore> {
        self.store.write().unwrap_or_else(PoisonError::into_inner)
    }

    /// Future that yields `value` after the current delay.
    fn respond<T: Send>(&self, value: T) -> impl Future<Output = Result<T, DictError>> + Send {
        let delay = self.delay();
        async move { Ok(deliver(value, delay).await) }
    }
}

impl From<DictStore> for LocalDictionary {
    fn from(store: DictStore) -> Self {
        Self::new(store)
    }
}

impl Dictionary for LocalDictionary {
    fn search(
        &self,
        query: &str,
        opts: &SearchOptions,
    ) -> impl Future<Output = Result<ItemList<Match>, DictError>> + Send {
        let items = self.read().search(query, opts);
        self.respond(ItemList::new(items))
    }

    fn entry_matches(
        &self,
        query: &str,
        opts: &SearchOptions,
    ) -> impl Future<Output = Result<ItemList<Match>, DictError>> + Send {
        let items = self.read().entry_matches(query, opts);
        self.respond(ItemList::new(items))
    }

    fn list_dict_infos(
        &self,
        opts: &ListDictInfos,
    ) -> impl Future<Output = Result<ItemList<DictInfo>, DictError>> + Send {
        let items = self.read().list_dict_infos(opts);
        self.respond(ItemList::new(items))
    }

    fn list_entries(
        &self,
        opts: &ListEntries,
    ) -> impl Future<Output = Result<ItemList<Entry>, DictError>> + Send {
        let items = self.read().list_entries(opts);
        self.respond(ItemList::new(items))
    }

    fn list_ref_terms(
        &self,
        opts: &ListRefTerms,
    ) -> impl Future<Output = Result<ItemList<String>, DictError>> + Send {
        let items = self.read().list_ref_terms(opts);
        self.respond(ItemList::new(items))
    }

    fn add_dict_infos(
        &self,
        infos: Vec<DictInfo>,
    ) -> impl Future<Output = Result<BatchResult<()>, DictError>> + Send {
        let out = self.write().add_dict_infos(infos);
        self.respond(out)
    }

    fn update_dict_infos(
        &self,
        infos: Vec<DictInfo>,
    ) -> impl Future<Output = Result<BatchResult<DictInfo>, DictError>> + Send {
        let out = self.write().update_dict_infos(infos);
        self.respond(out)
    }

    fn delete_dict_infos(
        &self,
        ids: Vec<String>,
    ) -> impl Future<Output = Result<BatchResult<()>, DictError>> + Send {
        let out = self.write().delete_dict_infos(ids);
        self.respond(out)
    }

    fn add_entries(
        &self,
        entries: Vec<Entry>,
    ) -> impl Future<Output = Result<BatchResult<()>, DictError>> + Send {
        let out = self.write().add_entries(entries);
        self.respond(out)
    }

    fn update_entries(
        &self,
        updates: Vec<EntryUpdate>,
    ) -> impl Future<Output = Result<BatchResult<Entry>, DictError>> + Send {
        let out = self.write().update_entries(updates);
        self.respond(out)
    }

    fn delete_entries(
        &self,
        ids: Vec<String>,
    ) -> impl Future<Output = Result<BatchResult<()>, DictError>> + Send {
        let out = self.write().delete_entries(ids);
        self.respond(out)
    }

    fn add_ref_terms(
        &self,
        strs: Vec<String>,
    ) -> impl Future<Output = Result<BatchResult<()>, DictError>> + Send {
        let out = self.write().add_ref_terms(strs);
        self.respond(out)
    }

    fn delete_ref_terms(
        &self,
        strs: Vec<String>,
    ) -> impl Future<Output = Result<BatchResult<()>, DictError>> + Send {
        let out = self.write().delete_ref_terms(strs);
        self.respond(out)
    }

    fn load_pinned_terms(
        &self,
        refs: &[PinnedRef],
    ) -> impl Future<Output = Result<usize, DictError>> + Send {
        let added = self.write().load_pinned_terms(refs);
        self.respond(added)
    }
}
