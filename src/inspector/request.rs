//! Operation inputs and the full-check report.
//!
//! Inputs stay loosely typed: they usually come from JSON, and their shape is what
//! input validation reports on.

use crate::error_code::Message;
use crate::snapshot::{Categories, Entries, Snapshot};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Parameters of a quick or full check.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CheckRequest {
    #[serde(default)]
    pub endpoint: Option<Value>,
    /// Fetch deadline in milliseconds.
    #[serde(default)]
    pub timeout: Option<Value>,
}

impl CheckRequest {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: Some(Value::String(endpoint.into())),
            timeout: None,
        }
    }

    pub fn with_timeout(mut self, millis: u64) -> Self {
        self.timeout = Some(Value::from(millis));
        self
    }

    pub(crate) fn endpoint_str(&self) -> Option<&str> {
        self.endpoint.as_ref().and_then(Value::as_str)
    }
}

/// Parameters of a comparison: two snapshots in JSON form.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CompareRequest {
    #[serde(default)]
    pub before: Option<Value>,
    #[serde(default)]
    pub after: Option<Value>,
}

impl CompareRequest {
    pub fn new(before: Value, after: Value) -> Self {
        Self {
            before: Some(before),
            after: Some(after),
        }
    }
}

/// Result of a full check. `categories` and `entries` are present on every path.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FullCheckReport {
    pub status: bool,
    pub messages: Vec<Message>,
    pub categories: Categories,
    pub entries: Entries,
}

impl FullCheckReport {
    pub fn new(messages: Vec<Message>, snapshot: Snapshot) -> Self {
        Self {
            status: messages.is_empty(),
            messages,
            categories: snapshot.categories,
            entries: snapshot.entries,
        }
    }

    /// The snapshot part of the report, ready to be stored for a later comparison.
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            categories: self.categories,
            entries: self.entries.clone(),
        }
    }
}
