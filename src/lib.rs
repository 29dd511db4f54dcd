//! termdict — in-memory term dictionary with tiered, paginated matching.
//!
//! This crate re-exports the two layers so that integration tests, benches
//! and the demo binary can import them from one place.
//!
//! # Architecture
//!
//! ```text
//! DictionaryData ──► DictStore ──► search / listings
//!                        │
//!                        └──► LocalDictionary (deferred results, delay)
//! ```
//!
//! The store is synchronous and owns all data. `LocalDictionary` wraps it
//! behind the async [`Dictionary`] trait.

pub use termdict_async::{BatchResult, Dictionary, LocalDictionary};
pub use termdict_core::*;
