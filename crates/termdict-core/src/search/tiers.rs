//! Head tiers: extra, reference and pinned matches. They are computed in full
//! and only ever prepended to the first page.

use std::sync::Arc;

use crate::collate::cmp_ci;
use crate::extra::ExtraMatcher;
use crate::pinned::{PinnedRef, PinnedTermsCache};
use crate::types::{Match, MatchType};

use super::candidate::classify;

/// Every reference term equal to `query` (case-sensitive). An empty query has
/// no reference match.
pub(crate) fn reference_tier(ref_terms: &[String], query: &str) -> Vec<Match> {
    if query.is_empty() {
        return Vec::new();
    }
    ref_terms
        .iter()
        .filter(|s| s.as_str() == query)
        .map(|s| Match::reference(s))
        .collect()
}

/// Matches for the requested pinned refs that are in `cache` and whose term
/// contains `query_lower`; `F` for a prefix, `G` for an infix. An empty query
/// matches every pinned term.
///
/// Sorted by type then term string. Two refs resolving to the same term yield
/// one match.
pub(crate) fn pinned_tier(
    cache: &PinnedTermsCache,
    refs: &[PinnedRef],
    query_lower: &str,
) -> Vec<Match> {
    let mut out: Vec<Match> = Vec::new();
    for pinned in refs.iter().filter_map(|r| cache.get(r)) {
        let Some(kind) = classify(&pinned.term().str, query_lower) else {
            continue;
        };
        let kind = match kind {
            MatchType::S => MatchType::F,
            _ => MatchType::G,
        };
        let m = Match::from_entry_term(pinned.entry(), pinned.term(), kind);
        if !out.iter().any(|o| o.id == m.id && o.str == m.str) {
            out.push(m);
        }
    }
    out.sort_by(|a, b| a.kind.cmp(&b.kind).then_with(|| cmp_ci(&a.str, &b.str)));
    out
}

/// Everything the registered extra matchers produce for `query`.
pub(crate) fn extra_tier(extras: &[Arc<dyn ExtraMatcher>], query: &str) -> Vec<Match> {
    extras.iter().flat_map(|m| m.matches(query)).collect()
}

/// Concatenate the head tiers and order them by match type. The sort is
/// stable, so each tier keeps its internal order.
pub(crate) fn merge_head(extra: Vec<Match>, reference: Vec<Match>, pinned: Vec<Match>) -> Vec<Match> {
    let mut head: Vec<Match> = extra.into_iter().chain(reference).chain(pinned).collect();
    head.sort_by_key(|m| m.kind);
    head
}
