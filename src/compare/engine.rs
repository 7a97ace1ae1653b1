//! Facet diffs and integrity checks.
//!
//! Every function here is pure and reads snapshots in their JSON form, so snapshots
//! loaded from disk or produced by an older release compare the same way as fresh
//! ones. Absent keys read as `null`.

use super::model::{Comparison, FieldChange, FieldDiff, SetDiff, SkillModification, SkillsDiff, SnapshotDiff};
use crate::error_code::{Message, MessageCode};
use chrono::DateTime;
use serde_json::Value;
use std::cmp::Ordering;

/// Entry fields tracked by the identity facet.
pub const IDENTITY_FIELDS: [&str; 3] = ["agentName", "agentVersion", "agentDescription"];

/// Category flags tracked by the capabilities facet.
pub const CAPABILITY_FIELDS: [&str; 3] = [
    "supportsStreaming",
    "supportsPushNotifications",
    "supportsExtendedCard",
];

fn entries(snapshot: &Value) -> &Value {
    &snapshot["entries"]
}

fn categories(snapshot: &Value) -> &Value {
    &snapshot["categories"]
}

/// Elements of a JSON array; anything else reads as empty.
fn sequence(value: &Value) -> &[Value] {
    value.as_array().map(Vec::as_slice).unwrap_or(&[])
}

/// Keys of a JSON object; anything else reads as empty.
fn object_keys(value: &Value) -> Vec<&String> {
    value.as_object().map(|obj| obj.keys().collect()).unwrap_or_default()
}

/// Elements of `from` that do not occur in `other`, in order.
fn missing_from<'a, T: PartialEq>(from: &'a [T], other: &[T]) -> Vec<&'a T> {
    from.iter().filter(|item| !other.contains(item)).collect()
}

fn field_diff<'a>(
    before: &Value,
    after: &Value,
    fields: impl IntoIterator<Item = &'a str>,
) -> FieldDiff {
    let changed = fields
        .into_iter()
        .filter(|field| before[*field] != after[*field])
        .map(|field| {
            let change = FieldChange::new(before[field].clone(), after[field].clone());
            (field.to_string(), change)
        })
        .collect();
    FieldDiff { changed }
}

/// Name, version and description of the agent.
pub fn diff_identity(before: &Value, after: &Value) -> FieldDiff {
    field_diff(entries(before), entries(after), IDENTITY_FIELDS)
}

/// Streaming, push notification and extended card support.
pub fn diff_capabilities(before: &Value, after: &Value) -> FieldDiff {
    field_diff(categories(before), categories(after), CAPABILITY_FIELDS)
}

/// Skills matched by id. Only the name of a skill present on both sides is compared.
pub fn diff_skills(before: &Value, after: &Value) -> SkillsDiff {
    let before_skills = sequence(&entries(before)["skills"]);
    let after_skills = sequence(&entries(after)["skills"]);
    let before_ids: Vec<&Value> = before_skills.iter().map(|s| &s["id"]).collect();
    let after_ids: Vec<&Value> = after_skills.iter().map(|s| &s["id"]).collect();

    let added = missing_from(&after_ids, &before_ids).into_iter().map(|id| (*id).clone()).collect();
    let removed = missing_from(&before_ids, &after_ids).into_iter().map(|id| (*id).clone()).collect();

    let modified = after_ids
        .iter()
        .filter(|id| before_ids.contains(*id))
        .filter_map(|id| {
            let old = before_skills.iter().find(|s| &s["id"] == *id)?;
            let new = after_skills.iter().find(|s| &s["id"] == *id)?;
            (old["name"] != new["name"]).then(|| SkillModification {
                id: (*id).clone(),
                field: "name".to_string(),
                before: old["name"].clone(),
                after: new["name"].clone(),
            })
        })
        .collect();

    SkillsDiff {
        added,
        removed,
        modified,
    }
}

/// Protocol bindings, compared by membership rather than position.
pub fn diff_interfaces(before: &Value, after: &Value) -> SetDiff<Value> {
    let before = sequence(&entries(before)["protocolBindings"]);
    let after = sequence(&entries(after)["protocolBindings"]);
    SetDiff {
        added: missing_from(after, before).into_iter().cloned().collect(),
        removed: missing_from(before, after).into_iter().cloned().collect(),
    }
}

/// Names of the declared security schemes.
pub fn diff_security(before: &Value, after: &Value) -> SetDiff<String> {
    let before = object_keys(&entries(before)["securitySchemes"]);
    let after = object_keys(&entries(after)["securitySchemes"]);
    SetDiff {
        added: missing_from(&after, &before).into_iter().map(|k| (*k).clone()).collect(),
        removed: missing_from(&before, &after).into_iter().map(|k| (*k).clone()).collect(),
    }
}

/// Every flag of the `before` categories against the same key in `after`.
pub fn diff_categories(before: &Value, after: &Value) -> FieldDiff {
    let keys = object_keys(categories(before));
    field_diff(categories(before), categories(after), keys.into_iter().map(String::as_str))
}

fn is_falsy(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Bool(b) => !b,
        Value::String(s) => s.is_empty(),
        Value::Number(n) => n.as_f64().map_or(true, |f| f == 0.0),
        Value::Array(_) | Value::Object(_) => false,
    }
}

/// Order two timestamps: temporally when both are RFC 3339, lexically otherwise.
fn compare_timestamps(before: &Value, after: &Value) -> Option<Ordering> {
    match (before, after) {
        (Value::String(b), Value::String(a)) => {
            match (DateTime::parse_from_rfc3339(b), DateTime::parse_from_rfc3339(a)) {
                (Ok(b), Ok(a)) => Some(a.cmp(&b)),
                _ => Some(a.as_str().cmp(b.as_str())),
            }
        }
        (Value::Number(b), Value::Number(a)) => a.as_f64()?.partial_cmp(&b.as_f64()?),
        _ => None,
    }
}

/// Warnings about a pair of snapshots that can still be compared.
pub fn check_integrity(before: &Value, after: &Value) -> Vec<Message> {
    let mut messages = Vec::new();
    let (before, after) = (entries(before), entries(after));

    if before["url"] != after["url"] {
        messages.push(Message::of(MessageCode::DifferentAgents));
    }

    let before_ts = &before["timestamp"];
    let after_ts = &after["timestamp"];
    if is_falsy(before_ts) {
        messages.push(Message::of(MessageCode::MissingBeforeTimestamp));
    } else if !is_falsy(after_ts) && compare_timestamps(before_ts, after_ts) == Some(Ordering::Less) {
        messages.push(Message::of(MessageCode::AfterOlderThanBefore));
    }

    messages
}

/// Compare two snapshots that already passed shape validation.
pub fn compare(before: &Value, after: &Value) -> Comparison {
    let messages = check_integrity(before, after);
    let diff = SnapshotDiff {
        identity: diff_identity(before, after),
        capabilities: diff_capabilities(before, after),
        skills: diff_skills(before, after),
        interfaces: diff_interfaces(before, after),
        security: diff_security(before, after),
        categories: diff_categories(before, after),
    };
    Comparison::new(messages, diff)
}
