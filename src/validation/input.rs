//! 调用参数校验：端点、超时和快照结构。
//!
//! Caller-input validation.
//!
//! These checks run before any network work. They never fail themselves; they collect
//! every violated rule so the caller sees the whole list at once.

use super::ValidationResult;
use crate::error_code::{Message, MessageCode};
use serde_json::Value;
use url::Url;

/// Treat JSON `null` like an absent parameter.
fn supplied(value: Option<&Value>) -> Option<&Value> {
    value.filter(|v| !v.is_null())
}

fn check_endpoint(endpoint: Option<&Value>) -> Option<Message> {
    let Some(endpoint) = supplied(endpoint) else {
        return Some(Message::of(MessageCode::MissingEndpoint));
    };
    let Some(endpoint) = endpoint.as_str() else {
        return Some(Message::of(MessageCode::InvalidEndpointType));
    };
    if endpoint.trim().is_empty() {
        return Some(Message::of(MessageCode::EmptyEndpoint));
    }
    if Url::parse(endpoint).is_err() {
        return Some(Message::of(MessageCode::InvalidEndpointUrl));
    }
    None
}

fn check_timeout(timeout: Option<&Value>) -> Option<Message> {
    let timeout = supplied(timeout)?;
    match timeout.as_f64() {
        None => Some(Message::of(MessageCode::InvalidTimeoutType)),
        Some(millis) if millis <= 0.0 => Some(Message::of(MessageCode::NonPositiveTimeout)),
        Some(_) => None,
    }
}

fn check_snapshot(snapshot: Option<&Value>, required_key: &str, code: MessageCode) -> Option<Message> {
    let well_formed = supplied(snapshot)
        .and_then(Value::as_object)
        .and_then(|obj| obj.get(required_key))
        .is_some_and(|v| !v.is_null());
    (!well_formed).then(|| Message::of(code))
}

/// Validate the parameters of a quick check.
pub fn validate_for_quick_check(endpoint: Option<&Value>) -> ValidationResult {
    ValidationResult::from_messages(check_endpoint(endpoint).into_iter().collect())
}

/// Validate an optional timeout in milliseconds. Absence is valid.
pub fn validate_timeout(timeout: Option<&Value>) -> ValidationResult {
    ValidationResult::from_messages(check_timeout(timeout).into_iter().collect())
}

/// Validate the parameters of a full check: endpoint rules plus, when supplied,
/// the timeout rules.
pub fn validate_for_full_check(endpoint: Option<&Value>, timeout: Option<&Value>) -> ValidationResult {
    validate_for_quick_check(endpoint).merge(validate_timeout(timeout))
}

/// Validate the shape of two snapshots before they are compared.
///
/// `before` must carry `categories` and `after` must carry `entries`. The facet
/// diff tolerates the other key being absent.
pub fn validate_for_comparison(before: Option<&Value>, after: Option<&Value>) -> ValidationResult {
    let messages = [
        check_snapshot(before, "categories", MessageCode::InvalidBeforeSnapshot),
        check_snapshot(after, "entries", MessageCode::InvalidAfterSnapshot),
    ];
    ValidationResult::from_messages(messages.into_iter().flatten().collect())
}
