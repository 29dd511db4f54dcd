//! termdict-core — in-memory term dictionary and match engine.
//!
//! This crate holds the synchronous half of termdict: the data model, the
//! store with its CRUD operations, and the search that ranks matches for a
//! partially typed string.
//!
//! # Architecture
//!
//! ```text
//! DictStore ──► query (filter, sort, page) ──► listings
//!     │
//!     └──► search: extra + reference + pinned + candidates ──► prune
//! ```
//!
//! Nothing here blocks or spawns; the async adapter in `termdict-async` wraps
//! a [`DictStore`] and defers delivery of its results.

pub mod collate;
pub mod config;
pub mod error;
pub mod extra;
pub mod options;
pub mod pinned;
pub mod prune;
pub mod query;
mod search;
pub mod store;
pub mod types;

pub use config::{Config, Delay};
pub use error::DictError;
pub use extra::{ExtraMatcher, NumberMatcher};
pub use options::{EntrySort, ListDictInfos, ListEntries, ListRefTerms, SearchOptions};
pub use pinned::{PinnedRef, PinnedTermsCache};
pub use prune::ZSpec;
pub use query::{PageLimits, Pagination};
pub use store::DictStore;
pub use types::{
    DictData, DictInfo, DictionaryData, Entry, EntryUpdate, ItemList, Match, MatchType, Payload,
    PayloadDeletion, Term,
};
