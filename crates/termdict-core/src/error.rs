//! Error taxonomy for the store's data-integrity checks.
//!
//! Only the CRUD layer fails: the match engine and the listing operations
//! have no failure modes of their own. Display strings are part of the
//! contract, callers match on them when reporting batch results.

/// Errors reported by add/update/delete operations and by config loading.
#[derive(Debug, thiserror::Error)]
pub enum DictError {
    #[error("dictInfo misses a required property: id")]
    MissingDictInfoId,

    #[error("dictInfo for '{0}' already exists")]
    DictInfoExists(String),

    #[error("dictInfo for '{0}' does not exist")]
    AbsentDictInfo(String),

    #[error("dictInfo for '{0}' still has associated entries")]
    DictInfoInUse(String),

    #[error("entry misses a required property: id, dictID, or terms")]
    MissingEntryField,

    #[error("entry is linked to non-existent dictID '{0}'")]
    NoSuchDictId(String),

    #[error("entry for '{0}' already exists")]
    EntryExists(String),

    #[error("entry for '{0}' does not exist")]
    AbsentEntry(String),

    #[error("invalid term")]
    InvalidTerm,

    #[error("entry would have no terms left")]
    NoTermsLeft,

    #[error("empty refTerm")]
    EmptyRefTerm,

    #[error("refTerm '{0}' does not exist")]
    AbsentRefTerm(String),

    #[error("an entry tries to override dictID '{0}'")]
    DictIdOverride(String),

    /// All errors collected while bulk-loading dictionary data.
    #[error("{} error(s) while loading dictionary data: {}", .0.len(), join_errors(.0))]
    Data(Vec<DictError>),

    #[error("config error: {0}")]
    Config(#[from] config::ConfigError),
}

impl DictError {
    /// The individual errors behind a [`DictError::Data`], or `self` alone.
    pub fn flatten(&self) -> Vec<&DictError> {
        match self {
            DictError::Data(errs) => errs.iter().collect(),
            other => vec![other],
        }
    }
}

fn join_errors(errs: &[DictError]) -> String {
    errs.iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}
