//! The reference dictionary used across harnesses.
//!
//! Five dictInfos (`A`, `B`, `C`, `D`, `C2`), five entries and three
//! reference terms. Entry `B:00` is the tricky one: it lives in dictionary
//! `C` despite its `B`-like id, has three terms and carries a payload.

use serde_json::json;
use termdict::{DictData, DictInfo, DictStore, DictionaryData, Entry, Payload, Term};

pub fn di1() -> DictInfo {
    DictInfo::new("A").with_name("Name 1")
}

pub fn di2() -> DictInfo {
    DictInfo::new("B").with_name("Name 2")
}

pub fn di3() -> DictInfo {
    DictInfo::new("C").with_name("Name 3").with_abbrev("CN3")
}

pub fn di4() -> DictInfo {
    DictInfo::new("D").with_name("Name 4")
}

pub fn di5() -> DictInfo {
    DictInfo::new("C2").with_name("Name 0")
}

/// `A:01` in `A`: "in".
pub fn e1() -> Entry {
    Entry::new("A:01", "A").with_term("in")
}

/// `A:02` in `A`: "inn" (style `i`).
pub fn e2() -> Entry {
    Entry::new("A:02", "A").with_term(Term::new("inn").with_style("i"))
}

/// `B:01` in `B`: "Ca2+".
pub fn e3() -> Entry {
    Entry::new("B:01", "B").with_term(Term::new("Ca2+").with_style("u2-3"))
}

/// `B:02` in `B`: "Na+Cl-".
pub fn e4() -> Entry {
    Entry::new("B:02", "B").with_term(Term::new("Na+Cl-").with_style("u2u5"))
}

/// `B:00` in `C`: "in", "Iz", "hi", with payload `{a: 1, b: 2, c: 3}`.
pub fn e12() -> Entry {
    Entry::new("B:00", "C")
        .with_term("in")
        .with_term("Iz")
        .with_term("hi")
        .with_z(payload(json!({"a": 1, "b": 2, "c": 3})))
}

pub const REF_TERMS: &[&str] = &["it", "that", "this"];

pub fn payload(v: serde_json::Value) -> Payload {
    v.as_object().cloned().expect("payload fixture must be a JSON object")
}

/// All fixture data in the bulk-load shape.
pub fn fixture_data() -> DictionaryData {
    DictionaryData {
        dict_data: vec![
            DictData::new(di1()).with_entry(e1()).with_entry(e2()),
            DictData::new(di2()).with_entry(e3()).with_entry(e4()),
            DictData::new(di3()).with_entry(e12()),
            DictData::new(di4()),
            DictData::new(di5()),
        ],
        ref_terms: REF_TERMS.iter().map(|s| s.to_string()).collect(),
    }
}

/// A store holding [`fixture_data`] with the built-in configuration.
pub fn fixture_store() -> DictStore {
    DictStore::new()
        .with_data(fixture_data())
        .expect("fixture data must load cleanly")
}

/// The fixture data as a JSON data file, as the demo binary reads it.
pub const FIXTURE_JSON: &str = r#"{
  "dictData": [
    {"id": "A", "name": "Name 1", "entries": [
      {"id": "A:01", "terms": ["in"]},
      {"id": "A:02", "terms": [{"str": "inn", "style": "i"}]}
    ]},
    {"id": "B", "name": "Name 2", "entries": [
      {"id": "B:01", "terms": [{"str": "Ca2+", "style": "u2-3"}]},
      {"id": "B:02", "terms": [{"str": "Na+Cl-", "style": "u2u5"}]}
    ]},
    {"id": "C", "name": "Name 3", "abbrev": "CN3", "entries": [
      {"id": "B:00", "terms": ["in", "Iz", "hi"], "z": {"a": 1, "b": 2, "c": 3}}
    ]},
    {"id": "D", "name": "Name 4"},
    {"id": "C2", "name": "Name 0"}
  ],
  "refTerms": ["it", "that", "this"]
}"#;
