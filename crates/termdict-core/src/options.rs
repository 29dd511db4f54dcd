//! Request options for the listing and search operations.
//!
//! All fields are optional in spirit: `Default` gives "first page, default
//! page size, no filter, no preference, no payload".

use crate::pinned::PinnedRef;
use crate::prune::ZSpec;

/// Options of [`DictStore::list_dict_infos`](crate::DictStore::list_dict_infos).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListDictInfos {
    /// Keep only these ids; `None` keeps all.
    pub ids: Option<Vec<String>>,
    pub page: Option<i64>,
    pub per_page: Option<i64>,
}

impl ListDictInfos {
    pub fn ids<I, S>(mut self, ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.ids = Some(ids.into_iter().map(Into::into).collect());
        self
    }

    pub fn page(mut self, page: i64) -> Self {
        self.page = Some(page);
        self
    }

    pub fn per_page(mut self, per_page: i64) -> Self {
        self.per_page = Some(per_page);
        self
    }
}

/// Sort order of [`DictStore::list_entries`](crate::DictStore::list_entries).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum EntrySort {
    /// By dictID, then id.
    #[default]
    DictId,
    /// By id.
    Id,
    /// By first term string, then dictID, then id.
    Str,
}

/// Options of [`DictStore::list_entries`](crate::DictStore::list_entries).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListEntries {
    pub ids: Option<Vec<String>>,
    pub dict_ids: Option<Vec<String>>,
    pub sort: EntrySort,
    pub page: Option<i64>,
    pub per_page: Option<i64>,
    pub z: ZSpec,
}

impl ListEntries {
    pub fn ids<I, S>(mut self, ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.ids = Some(ids.into_iter().map(Into::into).collect());
        self
    }

    pub fn dict_ids<I, S>(mut self, dict_ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.dict_ids = Some(dict_ids.into_iter().map(Into::into).collect());
        self
    }

    pub fn sort(mut self, sort: EntrySort) -> Self {
        self.sort = sort;
        self
    }

    pub fn page(mut self, page: i64) -> Self {
        self.page = Some(page);
        self
    }

    pub fn per_page(mut self, per_page: i64) -> Self {
        self.per_page = Some(per_page);
        self
    }

    pub fn z(mut self, z: ZSpec) -> Self {
        self.z = z;
        self
    }
}

/// Options of [`DictStore::list_ref_terms`](crate::DictStore::list_ref_terms).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListRefTerms {
    pub strs: Option<Vec<String>>,
    pub page: Option<i64>,
    pub per_page: Option<i64>,
}

impl ListRefTerms {
    pub fn strs<I, S>(mut self, strs: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.strs = Some(strs.into_iter().map(Into::into).collect());
        self
    }

    pub fn page(mut self, page: i64) -> Self {
        self.page = Some(page);
        self
    }

    pub fn per_page(mut self, per_page: i64) -> Self {
        self.per_page = Some(per_page);
        self
    }
}

/// Options of a string search.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchOptions {
    pub page: Option<i64>,
    pub per_page: Option<i64>,
    /// dictID allow-list for the normal tier; `None` allows every dictID.
    pub filter_dict_ids: Option<Vec<String>>,
    /// Preferred dictIDs: their matches rank ahead of all others.
    pub sort_dict_ids: Vec<String>,
    /// Pinned terms to surface first; each must be loaded into the store's
    /// pinned-terms cache beforehand.
    pub pinned_refs: Vec<PinnedRef>,
    pub z: ZSpec,
}

impl SearchOptions {
    pub fn page(mut self, page: i64) -> Self {
        self.page = Some(page);
        self
    }

    pub fn per_page(mut self, per_page: i64) -> Self {
        self.per_page = Some(per_page);
        self
    }

    pub fn filter_dict_ids<I, S>(mut self, dict_ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.filter_dict_ids = Some(dict_ids.into_iter().map(Into::into).collect());
        self
    }

    pub fn sort_dict_ids<I, S>(mut self, dict_ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.sort_dict_ids = dict_ids.into_iter().map(Into::into).collect();
        self
    }

    pub fn pin(mut self, r: PinnedRef) -> Self {
        self.pinned_refs.push(r);
        self
    }

    pub fn pinned_refs(mut self, refs: impl IntoIterator<Item = PinnedRef>) -> Self {
        self.pinned_refs.extend(refs);
        self
    }

    pub fn z(mut self, z: ZSpec) -> Self {
        self.z = z;
        self
    }

    pub(crate) fn allows_dict_id(&self, dict_id: &str) -> bool {
        self.filter_dict_ids
            .as_ref()
            .map_or(true, |ids| ids.iter().any(|id| id == dict_id))
    }

    pub(crate) fn prefers_dict_id(&self, dict_id: &str) -> bool {
        self.sort_dict_ids.iter().any(|id| id == dict_id)
    }
}
