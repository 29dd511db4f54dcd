//! Configuration types for termdict.
//!
//! [`Config::load`] reads `~/.config/termdict/config.toml` when it exists,
//! layered on top of the embedded defaults. [`Config::load_from`] does the
//! same for an explicit path, and [`Config::defaults`] returns the defaults
//! without touching the filesystem (useful in tests).

use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::error::DictError;
use crate::query::PageLimits;

// ---------------------------------------------------------------------------
// Embedded defaults
// ---------------------------------------------------------------------------

const DEFAULT_CONFIG: &str = r#"
[paging]
per_page_default = 20
per_page_max     = 100

[latency]
delay_ms = 0

[number_match]
enabled           = true
dict_id           = "00"
concept_id_prefix = "00:"
"#;

// ---------------------------------------------------------------------------
// Public config types
// ---------------------------------------------------------------------------

/// Top-level configuration of a dictionary store.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub paging: PagingConfig,
    #[serde(default)]
    pub latency: LatencyConfig,
    #[serde(default)]
    pub number_match: NumberMatchConfig,
}

/// `[paging]` section.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct PagingConfig {
    #[serde(default = "default_per_page_default")]
    pub per_page_default: usize,
    #[serde(default = "default_per_page_max")]
    pub per_page_max: usize,
}

fn default_per_page_default() -> usize { crate::query::PER_PAGE_DEFAULT }
fn default_per_page_max() -> usize { crate::query::PER_PAGE_MAX }

impl Default for PagingConfig {
    fn default() -> Self {
        Self {
            per_page_default: default_per_page_default(),
            per_page_max: default_per_page_max(),
        }
    }
}

impl PagingConfig {
    pub fn limits(&self) -> PageLimits {
        PageLimits::new(self.per_page_default, self.per_page_max)
    }
}

/// `[latency]` section: the artificial delay applied before every result is
/// delivered by the async adapter.
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
pub struct LatencyConfig {
    #[serde(default)]
    pub delay_ms: Delay,
}

/// An artificial response delay in milliseconds: either a fixed value or a
/// `[min, max]` range to draw from uniformly.
///
/// In TOML: `delay_ms = 100` or `delay_ms = [300, 500]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum Delay {
    Fixed(u64),
    Range([u64; 2]),
}

impl Default for Delay {
    fn default() -> Self {
        Delay::Fixed(0)
    }
}

impl Delay {
    pub fn none() -> Self {
        Delay::Fixed(0)
    }

    /// Inclusive `(min, max)` bounds; a range whose max is below its min
    /// collapses onto the min.
    pub fn bounds(&self) -> (u64, u64) {
        match *self {
            Delay::Fixed(ms) => (ms, ms),
            Delay::Range([min, max]) => (min, max.max(min)),
        }
    }

    pub fn is_zero(&self) -> bool {
        self.bounds() == (0, 0)
    }
}

impl From<u64> for Delay {
    fn from(ms: u64) -> Self {
        Delay::Fixed(ms)
    }
}

/// `[number_match]` section: recognition of number strings as extra matches.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct NumberMatchConfig {
    #[serde(default = "default_number_match_enabled")]
    pub enabled: bool,
    #[serde(default = "default_number_dict_id")]
    pub dict_id: String,
    #[serde(default = "default_number_concept_id_prefix")]
    pub concept_id_prefix: String,
}

fn default_number_match_enabled() -> bool { true }
fn default_number_dict_id() -> String { "00".to_string() }
fn default_number_concept_id_prefix() -> String { "00:".to_string() }

impl Default for NumberMatchConfig {
    fn default() -> Self {
        Self {
            enabled: default_number_match_enabled(),
            dict_id: default_number_dict_id(),
            concept_id_prefix: default_number_concept_id_prefix(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::defaults()
    }
}

impl Config {
    /// Load from `~/.config/termdict/config.toml` (honouring
    /// `XDG_CONFIG_HOME`), layered on top of the built-in defaults. A missing
    /// file is not an error.
    pub fn load() -> Result<Self, DictError> {
        Self::load_from(&config_path())
    }

    /// Load from `path`, layered on top of the built-in defaults. A missing
    /// file is not an error.
    pub fn load_from(path: &Path) -> Result<Self, DictError> {
        config::Config::builder()
            .add_source(config::File::from_str(DEFAULT_CONFIG, config::FileFormat::Toml))
            .add_source(config::File::from(path).required(false))
            .build()?
            .try_deserialize()
            .map_err(Into::into)
    }

    /// Return the built-in defaults without touching the filesystem.
    pub fn defaults() -> Self {
        config::Config::builder()
            .add_source(config::File::from_str(DEFAULT_CONFIG, config::FileFormat::Toml))
            .build()
            .expect("built-in default config must be valid TOML")
            .try_deserialize()
            .expect("built-in default config must deserialize correctly")
    }
}

// ---------------------------------------------------------------------------
// Path helpers
// ---------------------------------------------------------------------------

fn config_path() -> PathBuf {
    std::env::var("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|_| {
            PathBuf::from(std::env::var("HOME").unwrap_or_else(|_| ".".to_string()))
                .join(".config")
        })
        .join("termdict")
        .join("config.toml")
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
