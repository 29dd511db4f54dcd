//! Case-insensitive string ordering shared by every sort in the crate.

use std::cmp::Ordering;

/// Compare two strings by their lowercase forms, without allocating.
pub fn cmp_ci(a: &str, b: &str) -> Ordering {
    a.chars()
        .flat_map(char::to_lowercase)
        .cmp(b.chars().flat_map(char::to_lowercase))
}

/// How a term string relates to a lowercased query.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Position {
    Prefix,
    Infix,
}

/// Classify `term` against `query_lower` case-insensitively: a prefix match
/// wins over an infix match; `None` when the query does not occur at all.
///
/// An empty query is a prefix of every term; callers decide whether that
/// counts.
pub fn locate(term: &str, query_lower: &str) -> Option<Position> {
    let term = term.to_lowercase();
    if term.starts_with(query_lower) {
        Some(Position::Prefix)
    } else if term.contains(query_lower) {
        Some(Position::Infix)
    } else {
        None
    }
}
