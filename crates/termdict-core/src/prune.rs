//! Payload pruning — keep only the requested sub-fields of each `z` payload.

use crate::types::{Entry, Match, Payload};

/// Which payload fields a response keeps.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ZSpec {
    /// Remove the payload entirely. This is what an unspecified request gets.
    #[default]
    Drop,
    /// Keep the payload unchanged.
    KeepAll,
    /// Keep only these keys; the payload disappears when none of them exist.
    Keep(Vec<String>),
}

impl ZSpec {
    pub fn keep<I, S>(keys: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        ZSpec::Keep(keys.into_iter().map(Into::into).collect())
    }
}

impl From<bool> for ZSpec {
    fn from(keep: bool) -> Self {
        if keep {
            ZSpec::KeepAll
        } else {
            ZSpec::Drop
        }
    }
}

/// Anything that carries an optional payload.
pub trait HasPayload {
    fn payload_mut(&mut self) -> &mut Option<Payload>;
}

impl HasPayload for Entry {
    fn payload_mut(&mut self) -> &mut Option<Payload> {
        &mut self.z
    }
}

impl HasPayload for Match {
    fn payload_mut(&mut self) -> &mut Option<Payload> {
        &mut self.z
    }
}

/// Apply `spec` to the payload of every item.
pub fn prune<T: HasPayload>(mut items: Vec<T>, spec: &ZSpec) -> Vec<T> {
    for item in &mut items {
        prune_one(item.payload_mut(), spec);
    }
    items
}

fn prune_one(z: &mut Option<Payload>, spec: &ZSpec) {
    match spec {
        ZSpec::KeepAll => {}
        ZSpec::Drop => *z = None,
        ZSpec::Keep(keys) => {
            if let Some(map) = z.as_mut() {
                map.retain(|k, _| keys.iter().any(|want| want == k));
                if map.is_empty() {
                    *z = None;
                }
            }
        }
    }
}
