//! Core types for termdict-core.
//!
//! This module defines the data model shared by the store, the match engine
//! and the async adapter: sub-dictionary descriptors ([`DictInfo`]), concept
//! [`Entry`] values with their synonymous [`Term`]s, the [`EntryUpdate`] used
//! to merge changes into a stored entry, and the ephemeral [`Match`] record a
//! search produces.
//!
//! Field names serialize in the wire shape callers expect (`dictID`, `str`,
//! `type`, `termsDel`, `zDel`), so data files and match output round-trip
//! through `serde_json` without adapters.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Opaque, caller-defined payload attached to an entry (the `z` field).
pub type Payload = Map<String, Value>;

// ---------------------------------------------------------------------------
// DictInfo
// ---------------------------------------------------------------------------

/// Descriptor of one named sub-dictionary.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct DictInfo {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub abbrev: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

impl DictInfo {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            ..Self::default()
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn with_abbrev(mut self, abbrev: impl Into<String>) -> Self {
        self.abbrev = Some(abbrev.into());
        self
    }
}

// ---------------------------------------------------------------------------
// Term
// ---------------------------------------------------------------------------

/// A single searchable string of an entry. Owned by its entry; it has no
/// identity of its own.
///
/// Deserializes from either a bare string or an object with `str`, `style`
/// and `descr`.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(from = "RawTerm")]
pub struct Term {
    pub str: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub style: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub descr: Option<String>,
}

impl Term {
    pub fn new(s: impl Into<String>) -> Self {
        Self {
            str: s.into(),
            ..Self::default()
        }
    }

    pub fn with_style(mut self, style: impl Into<String>) -> Self {
        self.style = Some(style.into());
        self
    }

    pub fn with_descr(mut self, descr: impl Into<String>) -> Self {
        self.descr = Some(descr.into());
        self
    }
}

impl From<&str> for Term {
    fn from(s: &str) -> Self {
        Term::new(s)
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawTerm {
    Bare(String),
    Full {
        str: String,
        #[serde(default)]
        style: Option<String>,
        #[serde(default)]
        descr: Option<String>,
    },
}

impl From<RawTerm> for Term {
    fn from(raw: RawTerm) -> Self {
        match raw {
            RawTerm::Bare(str) => Term::new(str),
            RawTerm::Full { str, style, descr } => Term {
                str,
                style: non_empty(style),
                descr: non_empty(descr),
            },
        }
    }
}

// ---------------------------------------------------------------------------
// Entry
// ---------------------------------------------------------------------------

/// A concept record with one or more synonymous terms.
///
/// The order of `terms` is significant: an entry's first-listed term wins
/// tie-breaks against its later synonyms.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Entry {
    pub id: String,
    /// May be left empty in data files; the bulk loader fills it in from the
    /// enclosing [`DictData`].
    #[serde(rename = "dictID", default)]
    pub dict_id: String,
    #[serde(default)]
    pub terms: Vec<Term>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub descr: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub z: Option<Payload>,
}

impl Entry {
    pub fn new(id: impl Into<String>, dict_id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            dict_id: dict_id.into(),
            ..Self::default()
        }
    }

    pub fn with_term(mut self, term: impl Into<Term>) -> Self {
        self.terms.push(term.into());
        self
    }

    pub fn with_descr(mut self, descr: impl Into<String>) -> Self {
        self.descr = Some(descr.into());
        self
    }

    pub fn with_z(mut self, z: Payload) -> Self {
        self.z = Some(z);
        self
    }

    /// Position of the term whose string equals `s` exactly.
    pub fn term_position(&self, s: &str) -> Option<usize> {
        self.terms.iter().position(|t| t.str == s)
    }
}

// ---------------------------------------------------------------------------
// EntryUpdate
// ---------------------------------------------------------------------------

/// Which payload keys an [`EntryUpdate`] removes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PayloadDeletion {
    /// Remove the whole payload.
    All,
    /// Remove only these keys.
    Keys(Vec<String>),
}

/// Changes to merge into a stored entry.
///
/// Applied in order: `dict_id`, `descr`, `terms_del`, `z_del`, `terms`
/// (replace by string, or append), `z` (key-wise merge).
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct EntryUpdate {
    pub id: String,
    pub dict_id: Option<String>,
    pub descr: Option<String>,
    pub terms: Vec<Term>,
    pub terms_del: Vec<String>,
    pub z: Option<Payload>,
    pub z_del: Option<PayloadDeletion>,
}

impl EntryUpdate {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            ..Self::default()
        }
    }

    pub fn dict_id(mut self, dict_id: impl Into<String>) -> Self {
        self.dict_id = Some(dict_id.into());
        self
    }

    pub fn descr(mut self, descr: impl Into<String>) -> Self {
        self.descr = Some(descr.into());
        self
    }

    pub fn term(mut self, term: impl Into<Term>) -> Self {
        self.terms.push(term.into());
        self
    }

    pub fn delete_term(mut self, s: impl Into<String>) -> Self {
        self.terms_del.push(s.into());
        self
    }

    pub fn z(mut self, z: Payload) -> Self {
        self.z = Some(z);
        self
    }

    pub fn delete_z(mut self, deletion: PayloadDeletion) -> Self {
        self.z_del = Some(deletion);
        self
    }
}

/// A full entry given where an update is expected merges its data in: its
/// terms are replaced-or-appended and its payload keys merged.
impl From<Entry> for EntryUpdate {
    fn from(e: Entry) -> Self {
        Self {
            id: e.id,
            dict_id: non_empty(Some(e.dict_id)),
            descr: e.descr,
            terms: e.terms,
            terms_del: Vec::new(),
            z: e.z,
            z_del: None,
        }
    }
}

// ---------------------------------------------------------------------------
// Bulk data
// ---------------------------------------------------------------------------

/// A dictInfo together with the entries that belong to it, as found in data
/// files and accepted by the bulk loader.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct DictData {
    #[serde(flatten)]
    pub info: DictInfo,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub entries: Vec<Entry>,
}

impl DictData {
    pub fn new(info: DictInfo) -> Self {
        Self {
            info,
            entries: Vec::new(),
        }
    }

    pub fn with_entry(mut self, entry: Entry) -> Self {
        self.entries.push(entry);
        self
    }
}

/// Top-level shape of a dictionary data file.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct DictionaryData {
    #[serde(rename = "dictData", default)]
    pub dict_data: Vec<DictData>,
    #[serde(rename = "refTerms", default)]
    pub ref_terms: Vec<String>,
}

// ---------------------------------------------------------------------------
// Match
// ---------------------------------------------------------------------------

/// Classification tag of a match record.
///
/// The derived ordering is the global tier order applied to merged results:
/// extra (`N`) before reference (`R`) before pinned prefix/infix (`F`, `G`)
/// before normal prefix/infix (`S`, `T`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum MatchType {
    /// Injected by an extra matcher, e.g. a recognised number string.
    N,
    /// Exact match of a reference term.
    R,
    /// Pinned term, prefix match.
    F,
    /// Pinned term, infix match.
    G,
    /// Ordinary term, prefix match.
    S,
    /// Ordinary term, infix match.
    T,
}

impl std::fmt::Display for MatchType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let tag = match self {
            MatchType::N => "N",
            MatchType::R => "R",
            MatchType::F => "F",
            MatchType::G => "G",
            MatchType::S => "S",
            MatchType::T => "T",
        };
        f.write_str(tag)
    }
}

/// Description carried by every reference-term match.
pub const REF_TERM_DESCR: &str = "referring term";

/// The typed output unit of a search. Constructed per query; owns copies of
/// everything it carries, so callers may mutate it freely.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Match {
    pub id: String,
    #[serde(rename = "dictID")]
    pub dict_id: String,
    pub str: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub style: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub descr: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub z: Option<Payload>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub terms: Option<Vec<Term>>,
    #[serde(rename = "type")]
    pub kind: MatchType,
}

impl Match {
    /// A match for one term of an entry: the entry's id, dictID, terms and
    /// payload, overlaid with the term's own string, style and description.
    pub fn from_entry_term(entry: &Entry, term: &Term, kind: MatchType) -> Self {
        Self {
            id: entry.id.clone(),
            dict_id: entry.dict_id.clone(),
            str: term.str.clone(),
            style: term.style.clone(),
            descr: term.descr.clone().or_else(|| entry.descr.clone()),
            z: entry.z.clone(),
            terms: Some(entry.terms.clone()),
            kind,
        }
    }

    /// A match for a reference term. It belongs to no entry or dictionary.
    pub fn reference(s: &str) -> Self {
        Self {
            id: String::new(),
            dict_id: String::new(),
            str: s.to_string(),
            style: None,
            descr: Some(REF_TERM_DESCR.to_string()),
            z: None,
            terms: None,
            kind: MatchType::R,
        }
    }
}

// ---------------------------------------------------------------------------
// Response envelope
// ---------------------------------------------------------------------------

/// Envelope of every listing and search response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemList<T> {
    pub items: Vec<T>,
}

impl<T> ItemList<T> {
    pub fn new(items: Vec<T>) -> Self {
        Self { items }
    }
}

pub(crate) fn non_empty(s: Option<String>) -> Option<String> {
    s.filter(|s| !s.is_empty())
}
