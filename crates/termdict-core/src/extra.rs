//! Extra matchers: plug-ins that inject matches for a query independently of
//! the stored entries.
//!
//! The store calls every registered [`ExtraMatcher`] with the trimmed query
//! (original case) when building the first page of a search. The only
//! built-in matcher is [`NumberMatcher`], which recognises number strings.

use std::fmt::Debug;
use std::sync::OnceLock;

use regex::Regex;

use crate::config::NumberMatchConfig;
use crate::types::{Match, MatchType};

/// Description carried by every number match.
pub const NUMBER_DESCR: &str = "number";

/// A producer of additional matches, registered on a store at construction.
///
/// Returned records keep whatever [`MatchType`] the matcher gives them and are
/// ordered among the other tiers by that type.
pub trait ExtraMatcher: Send + Sync + Debug {
    fn matches(&self, query: &str) -> Vec<Match>;
}

// ---------------------------------------------------------------------------
// NumberMatcher
// ---------------------------------------------------------------------------

/// Recognises decimal number strings and turns them into one `N` match whose
/// id is the number's exponential notation under a concept-id prefix.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NumberMatcher {
    pub dict_id: String,
    pub concept_id_prefix: String,
}

impl NumberMatcher {
    pub fn new(dict_id: impl Into<String>, concept_id_prefix: impl Into<String>) -> Self {
        Self {
            dict_id: dict_id.into(),
            concept_id_prefix: concept_id_prefix.into(),
        }
    }

    /// Build from config; `None` when number matching is disabled.
    pub fn from_config(cfg: &NumberMatchConfig) -> Option<Self> {
        cfg.enabled
            .then(|| Self::new(cfg.dict_id.clone(), cfg.concept_id_prefix.clone()))
    }
}

impl Default for NumberMatcher {
    fn default() -> Self {
        Self::new("00", "00:")
    }
}

impl ExtraMatcher for NumberMatcher {
    fn matches(&self, query: &str) -> Vec<Match> {
        let Some(value) = parse_number(query) else {
            return Vec::new();
        };
        vec![Match {
            id: format!("{}{}", self.concept_id_prefix, to_exponential(value)),
            dict_id: self.dict_id.clone(),
            str: query.to_string(),
            style: None,
            descr: Some(NUMBER_DESCR.to_string()),
            z: None,
            terms: None,
            kind: MatchType::N,
        }]
    }
}

fn number_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"^[+-]?(?:\d+\.?\d*|\.\d+)(?:[eE][+-]?\d+)?$")
            .expect("number pattern is valid")
    })
}

/// Parse `s` as a finite decimal number. Hex, `inf`, `NaN` and padded strings
/// are not numbers here.
pub fn parse_number(s: &str) -> Option<f64> {
    if !number_re().is_match(s) {
        return None;
    }
    s.parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Shortest round-tripping exponential notation with an explicitly signed
/// exponent: `5` → `5e+0`, `1000` → `1e+3`, `0.25` → `2.5e-1`.
pub fn to_exponential(value: f64) -> String {
    // -0 prints as 0.
    let value = if value == 0.0 { 0.0 } else { value };
    let s = format!("{value:e}");
    match s.split_once('e') {
        Some((mantissa, exp)) if !exp.starts_with('-') => format!("{mantissa}e+{exp}"),
        _ => s,
    }
}
