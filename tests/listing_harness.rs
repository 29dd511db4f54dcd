//! Listing integration harness.
//!
//! # What this covers
//!
//! - **dictInfos**: id filter, sort by id, pagination.
//! - **Entries**: id and dictID filters (combined with AND), the three sort
//!   orders, pagination, payload pruning.
//! - **Reference terms**: string filter, case-insensitive order.
//! - **Page limits**: a store's default and maximum page size.
//!
//! # What this does NOT cover
//!
//! - Pagination of search results (see `search_harness`)
//!
//! # Running
//!
//! ```sh
//! cargo test --test listing_harness
//! ```

mod common;
use common::*;

use pretty_assertions::assert_eq;
use rstest::rstest;
use serde_json::json;
use termdict::{
    DictInfo, DictStore, Entry, EntrySort, ListDictInfos, ListEntries, ListRefTerms, PageLimits,
    ZSpec,
};

fn ids(entries: &[Entry]) -> Vec<&str> {
    entries.iter().map(|e| e.id.as_str()).collect()
}

fn info_ids(infos: &[DictInfo]) -> Vec<&str> {
    infos.iter().map(|d| d.id.as_str()).collect()
}

/// `e12` as listings return it by default, without its payload.
fn e12_bare() -> Entry {
    Entry { z: None, ..e12() }
}

// ---------------------------------------------------------------------------
// dictInfos
// ---------------------------------------------------------------------------

#[test]
fn lists_all_dict_infos_by_id() {
    let infos = fixture_store().list_dict_infos(&ListDictInfos::default());
    assert_eq!(infos, vec![di1(), di2(), di3(), di5(), di4()]);
}

#[rstest]
#[case::one(&["B"], &["B"])]
#[case::unknown_left_out(&["D", "B", "xx"], &["B", "D"])]
#[case::none_known(&["xx"], &[])]
fn filters_dict_infos_by_id(#[case] filter: &[&str], #[case] want: &[&str]) {
    let infos = fixture_store().list_dict_infos(&ListDictInfos::default().ids(filter.iter().copied()));
    assert_eq!(info_ids(&infos), want);
}

#[rstest]
#[case::first_of_one(Some(1), Some(1), &["A"])]
#[case::second_of_three(Some(2), Some(3), &["C2", "D"])]
#[case::zero_per_page(None, Some(0), &["A", "B", "C", "C2", "D"])]
fn paginates_dict_infos(
    #[case] page: Option<i64>,
    #[case] per_page: Option<i64>,
    #[case] want: &[&str],
) {
    let o = ListDictInfos {
        page,
        per_page,
        ..ListDictInfos::default()
    };
    assert_eq!(info_ids(&fixture_store().list_dict_infos(&o)), want);
}

/// A non-positive page is the first page, after filtering.
#[test]
fn filter_then_paginate_dict_infos() {
    let o = ListDictInfos::default()
        .ids(["D", "C", "C2"])
        .page(-2)
        .per_page(2);
    assert_eq!(fixture_store().list_dict_infos(&o), vec![di3(), di5()]);
}

// ---------------------------------------------------------------------------
// Entries
// ---------------------------------------------------------------------------

#[test]
fn lists_entries_by_dict_id_then_id() {
    let entries = fixture_store().list_entries(&ListEntries::default());
    assert_eq!(entries, vec![e1(), e2(), e3(), e4(), e12_bare()]);
}

/// `Str` sorts by first term string; equal strings fall back to dictID.
#[rstest]
#[case::dict_id(EntrySort::DictId, &["A:01", "A:02", "B:01", "B:02", "B:00"])]
#[case::id(EntrySort::Id, &["A:01", "A:02", "B:00", "B:01", "B:02"])]
#[case::str(EntrySort::Str, &["B:01", "A:01", "B:00", "A:02", "B:02"])]
fn sorts_entries(#[case] sort: EntrySort, #[case] want: &[&str]) {
    let entries = fixture_store().list_entries(&ListEntries::default().sort(sort));
    assert_eq!(ids(&entries), want);
}

#[rstest]
#[case::one_id(ListEntries::default().ids(["B:01"]), &["B:01"])]
#[case::ids_sorted_by_dict_id(ListEntries::default().ids(["B:00", "B:01", "XX"]), &["B:01", "B:00"])]
#[case::no_known_ids(ListEntries::default().ids(["XX", "YY"]), &[])]
#[case::id_and_dict_id(ListEntries::default().dict_ids(["C"]).ids(["B:00"]), &["B:00"])]
#[case::id_outside_dict_id(ListEntries::default().dict_ids(["A"]).ids(["B:00"]), &[])]
#[case::dict_ids(ListEntries::default().dict_ids(["C", "A"]), &["A:01", "A:02", "B:00"])]
#[case::paginated(ListEntries::default().page(2).per_page(2), &["B:01", "B:02"])]
fn filters_entries(#[case] o: ListEntries, #[case] want: &[&str]) {
    assert_eq!(ids(&fixture_store().list_entries(&o)), want);
}

#[rstest]
#[case::unspecified(ZSpec::default(), None)]
#[case::keep_all(ZSpec::KeepAll, Some(json!({"a": 1, "b": 2, "c": 3})))]
#[case::no_keys(ZSpec::Keep(vec![]), None)]
#[case::absent_key(ZSpec::keep(["x"]), None)]
#[case::one_key(ZSpec::keep(["b"]), Some(json!({"b": 2})))]
#[case::some_keys(ZSpec::keep(["c", "a", "x"]), Some(json!({"a": 1, "c": 3})))]
fn prunes_entry_payloads(#[case] z: ZSpec, #[case] want: Option<serde_json::Value>) {
    let store = fixture_store();
    let entries = store.list_entries(&ListEntries::default().ids(["B:00"]).z(z));
    assert_eq!(entries[0].z, want.map(payload));
    // The stored entry keeps its payload.
    assert_eq!(store.entries()[4], e12());
}

/// `z` is left out of the JSON entirely when pruned away.
#[test]
fn pruned_payload_is_absent_from_json() {
    let entries = fixture_store().list_entries(&ListEntries::default().ids(["B:00"]).z(ZSpec::keep(["x"])));
    assert_eq!(
        serde_json::to_value(&entries[0]).unwrap(),
        json!({"id": "B:00", "dictID": "C", "terms": [{"str": "in"}, {"str": "Iz"}, {"str": "hi"}]})
    );
}

// ---------------------------------------------------------------------------
// Reference terms
// ---------------------------------------------------------------------------

#[test]
fn lists_ref_terms() {
    let store = fixture_store();
    assert_eq!(store.list_ref_terms(&ListRefTerms::default()), REF_TERMS);
    assert_eq!(
        store.list_ref_terms(&ListRefTerms::default().strs(["that", "xx"])),
        vec!["that"]
    );
    assert_eq!(
        store.list_ref_terms(&ListRefTerms::default().page(2).per_page(2)),
        vec!["this"]
    );
}

/// Storage order is plain byte order; listings sort case-insensitively.
#[test]
fn ref_term_listing_ignores_case() {
    let mut store = fixture_store();
    store.add_ref_terms(["Tz", "B"]);
    assert_eq!(store.ref_terms(), &["B", "Tz", "it", "that", "this"]);
    assert_eq!(
        store.list_ref_terms(&ListRefTerms::default()),
        vec!["B", "it", "that", "this", "Tz"]
    );
}

// ---------------------------------------------------------------------------
// Page limits
// ---------------------------------------------------------------------------

fn small_store(limits: PageLimits) -> DictStore {
    let mut store = DictStore::new().with_limits(limits);
    store.add_dict_infos([di1(), di2()]);
    store.add_entries([e1(), e2(), e3(), e4()]);
    store
}

#[test]
fn uses_the_store_default_page_size() {
    let store = small_store(PageLimits::new(3, 0));
    assert_eq!(
        store.list_entries(&ListEntries::default()),
        vec![e1(), e2(), e3()]
    );
}

#[test]
fn caps_the_page_size_at_the_store_maximum() {
    let store = small_store(PageLimits::new(0, 2));
    assert_eq!(
        store.list_entries(&ListEntries::default().per_page(20)),
        vec![e1(), e2()]
    );
    // The default is capped too.
    assert_eq!(store.list_entries(&ListEntries::default()).len(), 2);
}

#[test]
fn limits_come_from_config() {
    let mut cfg = termdict::Config::defaults();
    cfg.paging.per_page_default = 1;
    let store = DictStore::from_config(&cfg).with_data(fixture_data()).unwrap();
    assert_eq!(store.limits(), PageLimits::new(1, 100));
    assert_eq!(store.list_dict_infos(&ListDictInfos::default()), vec![di1()]);
}
