//! Domain-specific assertion macros for termdict harnesses.
//!
//! These wrap `pretty_assertions` and add context-rich failure messages that
//! make it clear *which* ordering or de-duplication invariant was violated.

// ---------------------------------------------------------------------------
// Result-list assertions
// ---------------------------------------------------------------------------

/// Assert the `(id, str, type)` sequence of a result list.
///
/// ```rust
/// assert_rows!(items, [("A:01", "in", S), ("B:00", "in", S)]);
/// ```
#[macro_export]
macro_rules! assert_rows {
    ($items:expr, [$(($id:expr, $s:expr, $kind:expr)),* $(,)?]) => {{
        let items: &[termdict::Match] = &$items;
        let actual = $crate::common::rows(items);
        let expected: Vec<(String, String, termdict::MatchType)> =
            vec![$(($id.to_string(), $s.to_string(), $kind)),*];
        pretty_assertions::assert_eq!(actual, expected, "assert_rows! failed");
    }};
}

/// Assert that match types never decrease along a result list, i.e. the
/// global tier order `N, R, F, G, S, T` holds.
#[macro_export]
macro_rules! assert_tier_order {
    ($items:expr) => {{
        let items: &[termdict::Match] = &$items;
        for pair in items.windows(2) {
            if pair[0].kind > pair[1].kind {
                panic!(
                    "assert_tier_order! failed: {} ({:?} {:?}) precedes {} ({:?} {:?})",
                    pair[0].kind, pair[0].id, pair[0].str, pair[1].kind, pair[1].id, pair[1].str
                );
            }
        }
    }};
}

/// Assert that no `(id, str)` pair of an entry term appears twice.
/// Reference and extra matches (which carry no entry terms) are ignored.
#[macro_export]
macro_rules! assert_no_duplicate_terms {
    ($items:expr) => {{
        let items: &[termdict::Match] = &$items;
        let mut seen = std::collections::HashSet::new();
        for m in items.iter().filter(|m| m.terms.is_some()) {
            if !seen.insert((m.id.clone(), m.str.clone())) {
                panic!(
                    "assert_no_duplicate_terms! failed: ({:?}, {:?}) appears twice in {:?}",
                    m.id,
                    m.str,
                    $crate::common::rows(items)
                );
            }
        }
    }};
}

// ---------------------------------------------------------------------------
// Batch-result assertions
// ---------------------------------------------------------------------------

/// Assert the outcome of every item of a batch operation: `None` for
/// success, `Some(message)` for the expected error message.
///
/// ```rust
/// assert_batch!(out, [None, Some("entry for 'A:01' already exists")]);
/// ```
#[macro_export]
macro_rules! assert_batch {
    ($out:expr, [$($want:expr),* $(,)?]) => {{
        let actual: Vec<Option<String>> = $out
            .iter()
            .map(|r| r.as_ref().err().map(|e| e.to_string()))
            .collect();
        let expected: Vec<Option<String>> =
            vec![$(Option::<&str>::map($want, str::to_string)),*];
        pretty_assertions::assert_eq!(actual, expected, "assert_batch! failed");
    }};
}
