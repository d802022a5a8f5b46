use common::types::Outcome;
use serde::{Deserialize, Serialize};

use crate::storage::RecordKind;

const SUCCESS: &str = "success";
const FAILED: &str = "failed";

/// Body of `POST /add_anchor`. Absent fields stay `None` and are stored as `null`.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
pub struct AnchorInput {
    #[serde(rename = "anchorID", default)]
    pub anchor_id: Option<String>,
    #[serde(default)]
    pub creator: Option<String>,
}

/// Persisted anchor slot, also returned verbatim by the anchor endpoints.
/// `ctime` is milliseconds since the Unix epoch as a decimal string.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct AnchorRecord {
    pub result: String,
    pub id: Option<String>,
    pub creator: Option<String>,
    pub ctime: String,
}

impl AnchorRecord {
    pub fn new(input: AnchorInput, ctime_millis: i64) -> Self {
        Self {
            result: SUCCESS.into(),
            id: input.anchor_id,
            creator: input.creator,
            ctime: ctime_millis.to_string(),
        }
    }

    #[cfg(test)]
    pub fn ctime_millis(&self) -> Option<i64> {
        self.ctime.parse().ok()
    }
}

/// Body of `POST /add_host`. `op == "delete"` clears the slot.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
pub struct HostInput {
    #[serde(default)]
    pub op: Option<String>,
    #[serde(default)]
    pub hostname: Option<String>,
}

impl HostInput {
    pub fn is_delete(&self) -> bool {
        self.op.as_deref() == Some("delete")
    }
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct HostRecord {
    pub result: String,
    pub hostname: Option<String>,
}

impl HostRecord {
    pub fn new(hostname: Option<String>) -> Self {
        Self { result: SUCCESS.into(), hostname }
    }
}

/// Structured "nothing stored" payload; returned with HTTP 200.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct NotFound {
    pub result: String,
    pub reason: String,
    pub reason_string: String,
}

impl NotFound {
    pub fn for_kind(kind: RecordKind) -> Self {
        Self {
            result: FAILED.into(),
            reason: kind.missing_reason().into(),
            reason_string: kind.missing_reason_string().into(),
        }
    }
}

#[derive(Clone, Debug, Serialize, PartialEq)]
#[serde(untagged)]
pub enum Lookup<T> {
    Found(T),
    Missing(NotFound),
}

impl<T> Lookup<T> {
    #[cfg(test)]
    pub fn found(self) -> Option<T> {
        match self {
            Lookup::Found(v) => Some(v),
            Lookup::Missing(_) => None,
        }
    }
}

#[derive(Clone, Debug, Serialize, PartialEq)]
#[serde(untagged)]
pub enum HostOutcome {
    Stored(HostRecord),
    Deleted(Outcome),
}
