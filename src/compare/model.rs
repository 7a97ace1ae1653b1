//! Comparison result types.

use crate::error_code::Message;
use serde::Serialize;
use indexmap::IndexMap;
use serde_json::Value;

/// Value of one field on each side of a comparison.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FieldChange {
    pub before: Value,
    pub after: Value,
}

impl FieldChange {
    pub fn new(before: Value, after: Value) -> Self {
        Self { before, after }
    }
}

/// Field-by-field diff, keyed by snapshot field name in the order the fields were compared.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct FieldDiff {
    pub changed: IndexMap<String, FieldChange>,
}

impl FieldDiff {
    pub fn is_empty(&self) -> bool {
        self.changed.is_empty()
    }

    pub fn get(&self, field: &str) -> Option<&FieldChange> {
        self.changed.get(field)
    }
}

/// A skill present on both sides whose name changed.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SkillModification {
    pub id: Value,
    /// Always `"name"`: only the skill name is tracked.
    pub field: String,
    pub before: Value,
    pub after: Value,
}

/// Skill diff by id.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct SkillsDiff {
    pub added: Vec<Value>,
    pub removed: Vec<Value>,
    pub modified: Vec<SkillModification>,
}

impl SkillsDiff {
    pub fn is_empty(&self) -> bool {
        self.added.is_empty() && self.removed.is_empty() && self.modified.is_empty()
    }
}

/// Membership diff of two sequences.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SetDiff<T> {
    pub added: Vec<T>,
    pub removed: Vec<T>,
}

impl<T> Default for SetDiff<T> {
    fn default() -> Self {
        Self {
            added: Vec::new(),
            removed: Vec::new(),
        }
    }
}

impl<T> SetDiff<T> {
    pub fn is_empty(&self) -> bool {
        self.added.is_empty() && self.removed.is_empty()
    }
}

/// The six facets of a snapshot comparison.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct SnapshotDiff {
    pub identity: FieldDiff,
    pub capabilities: FieldDiff,
    pub skills: SkillsDiff,
    /// Protocol bindings.
    pub interfaces: SetDiff<Value>,
    /// Security scheme names.
    pub security: SetDiff<String>,
    pub categories: FieldDiff,
}

impl SnapshotDiff {
    pub fn has_changes(&self) -> bool {
        !(self.identity.is_empty()
            && self.capabilities.is_empty()
            && self.skills.is_empty()
            && self.interfaces.is_empty()
            && self.security.is_empty()
            && self.categories.is_empty())
    }
}

/// Outcome of comparing two snapshots.
///
/// `status` is always `true`: integrity problems are reported as warnings in
/// `messages` next to a complete diff.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Comparison {
    pub status: bool,
    pub messages: Vec<Message>,
    pub has_changes: bool,
    pub diff: SnapshotDiff,
}

impl Comparison {
    pub fn new(messages: Vec<Message>, diff: SnapshotDiff) -> Self {
        Self {
            status: true,
            messages,
            has_changes: diff.has_changes(),
            diff,
        }
    }
}
