//! Search layer — tiered match composition over the store.
//!
//! A search merges four sources into one ranked list:
//!
//! ```text
//! extra (N) ──┐
//! reference (R) ──┼──► head (page 1 only, not counted in per_page)
//! pinned (F/G) ──┘           │
//!                            ▼
//! entries ──► candidates (S/T) ──► dedup vs pinned ──► sort ──► page ──► prune
//! ```
//!
//! The head is computed in full and prepended to page 1 only. The normal tier
//! drops every (entry id, term string) pair already surfaced as a pinned
//! match before it is paginated, so pages never repeat or skip records.

mod candidate;
mod tiers;

use std::collections::HashSet;

use tracing::debug;

use crate::options::SearchOptions;
use crate::prune::prune;
use crate::query::{query_window, Pagination};
use crate::store::DictStore;
use crate::types::Match;

use candidate::{compare, expand};

pub(crate) fn search(store: &DictStore, query: &str, opts: &SearchOptions) -> Vec<Match> {
    let query = query.trim();
    let query_lower = query.to_lowercase();
    let paging = Pagination::resolve(opts.page, opts.per_page, store.limits());
    let _span = tracing::debug_span!("search", query, page = paging.page).entered();

    let pinned = tiers::pinned_tier(store.pinned_terms(), &opts.pinned_refs, &query_lower);
    let taken: HashSet<(&str, &str)> = pinned
        .iter()
        .map(|m| (m.id.as_str(), m.str.as_str()))
        .collect();
    let normal = normal_tier(store, &query_lower, opts, &taken, paging);

    let mut items = if paging.is_first() {
        let extra = tiers::extra_tier(store.extra_matchers(), query);
        let reference = tiers::reference_tier(store.ref_terms(), query);
        debug!(
            extra = extra.len(),
            reference = reference.len(),
            pinned = pinned.len(),
            normal = normal.len(),
            "search tiers"
        );
        tiers::merge_head(extra, reference, pinned)
    } else {
        debug!(normal = normal.len(), "search tiers");
        Vec::new()
    };
    items.extend(normal);
    prune(items, &opts.z)
}

/// Only the ordinary-term tier: no extra, reference or pinned matches.
pub(crate) fn entry_matches(store: &DictStore, query: &str, opts: &SearchOptions) -> Vec<Match> {
    let query_lower = query.trim().to_lowercase();
    let paging = Pagination::resolve(opts.page, opts.per_page, store.limits());
    let items = normal_tier(store, &query_lower, opts, &HashSet::new(), paging);
    prune(items, &opts.z)
}

fn normal_tier(
    store: &DictStore,
    query_lower: &str,
    opts: &SearchOptions,
    taken: &HashSet<(&str, &str)>,
    paging: Pagination,
) -> Vec<Match> {
    let candidates = expand(store.entries(), query_lower, |dict_id| opts.prefers_dict_id(dict_id));
    query_window(
        candidates,
        |c| opts.allows_dict_id(&c.entry.dict_id) && !taken.contains(&c.key()),
        compare,
        paging,
    )
    .into_iter()
    .map(|c| c.into_match())
    .collect()
}
