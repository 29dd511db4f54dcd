//! Candidate expansion — one record per (entry, term) pair whose term string
//! contains the query, and the tie-break chain that ranks them.

use std::cmp::Ordering;

use crate::collate::{cmp_ci, locate, Position};
use crate::types::{Entry, Match, MatchType, Term};

/// An ordinary term that matched the query, before it becomes a [`Match`].
#[derive(Debug, Clone, Copy)]
pub(crate) struct Candidate<'a> {
    pub entry: &'a Entry,
    /// Position of the term in `entry.terms`.
    pub pos: usize,
    pub kind: MatchType,
    /// Whether the entry's dictID is among the caller's preferred ones.
    pub preferred: bool,
}

impl<'a> Candidate<'a> {
    pub fn term(&self) -> &'a Term {
        &self.entry.terms[self.pos]
    }

    pub fn key(&self) -> (&'a str, &'a str) {
        (self.entry.id.as_str(), self.term().str.as_str())
    }

    pub fn into_match(self) -> Match {
        Match::from_entry_term(self.entry, self.term(), self.kind)
    }
}

/// `S` for a prefix match, `T` for an infix match.
pub(crate) fn classify(term: &str, query_lower: &str) -> Option<MatchType> {
    locate(term, query_lower).map(|pos| match pos {
        Position::Prefix => MatchType::S,
        Position::Infix => MatchType::T,
    })
}

/// Expand `entries` into candidates for `query_lower`. An empty query matches
/// no ordinary term.
pub(crate) fn expand<'a>(
    entries: &'a [Entry],
    query_lower: &'a str,
    prefers: impl Fn(&str) -> bool + 'a,
) -> impl Iterator<Item = Candidate<'a>> + 'a {
    entries
        .iter()
        .filter(move |_| !query_lower.is_empty())
        .flat_map(|entry| entry.terms.iter().enumerate().map(move |(pos, t)| (entry, pos, t)))
        .filter_map(move |(entry, pos, t)| {
            let kind = classify(&t.str, query_lower)?;
            Some(Candidate {
                entry,
                pos,
                kind,
                preferred: prefers(&entry.dict_id),
            })
        })
}

/// Preferred dictIDs first, then `S` before `T`, then term string, dictID,
/// term position and entry id (strings compared case-insensitively).
pub(crate) fn compare(a: &Candidate<'_>, b: &Candidate<'_>) -> Ordering {
    b.preferred
        .cmp(&a.preferred)
        .then(a.kind.cmp(&b.kind))
        .then_with(|| cmp_ci(&a.term().str, &b.term().str))
        .then_with(|| cmp_ci(&a.entry.dict_id, &b.entry.dict_id))
        .then(a.pos.cmp(&b.pos))
        .then_with(|| cmp_ci(&a.entry.id, &b.entry.id))
}
