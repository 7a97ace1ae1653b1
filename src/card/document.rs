//! Agent card document model.
//!
//! The card comes from an uncontrolled remote party, so nothing about its shape is
//! assumed. Every field is a [`Field`] that distinguishes "absent" from "present but
//! of the wrong type", which is exactly what the structure rules need.

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::{Map, Value};

/// Presence of one field in a loosely-typed JSON document.
#[derive(Debug, Clone, PartialEq)]
pub enum Field<T> {
    /// Absent, or JSON `null`.
    Missing,
    /// Present, but not a `T`.
    Malformed(Value),
    Present(T),
}

impl<T> Default for Field<T> {
    fn default() -> Self {
        Field::Missing
    }
}

impl<T: DeserializeOwned> Field<T> {
    /// Read a field from an optional JSON value.
    pub fn from_json(value: Option<&Value>) -> Self {
        match value {
            None | Some(Value::Null) => Field::Missing,
            Some(v) => match serde_json::from_value::<T>(v.clone()) {
                Ok(parsed) => Field::Present(parsed),
                Err(_) => Field::Malformed(v.clone()),
            },
        }
    }
}

impl<T> Field<T> {
    pub fn is_missing(&self) -> bool {
        matches!(self, Field::Missing)
    }

    pub fn is_present(&self) -> bool {
        matches!(self, Field::Present(_))
    }

    /// The typed value, if the field is present and well-typed.
    pub fn present(&self) -> Option<&T> {
        match self {
            Field::Present(v) => Some(v),
            _ => None,
        }
    }
}

impl<T: Serialize> Field<T> {
    /// The value as it appeared in the document, whatever its type.
    pub fn raw(&self) -> Option<Value> {
        match self {
            Field::Missing => None,
            Field::Malformed(v) => Some(v.clone()),
            Field::Present(v) => serde_json::to_value(v).ok(),
        }
    }
}

/// Look up `camel` first, then its snake_case spelling.
fn lookup<'a>(obj: Option<&'a Map<String, Value>>, camel: &str, snake: &str) -> Option<&'a Value> {
    let obj = obj?;
    match obj.get(camel) {
        Some(v) if !v.is_null() => Some(v),
        _ => obj.get(snake),
    }
}

/// One entry of `supportedInterfaces`.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct AgentInterface {
    pub url: Field<String>,
    pub protocol_binding: Field<String>,
    pub protocol_version: Field<String>,
}

impl From<Value> for AgentInterface {
    fn from(value: Value) -> Self {
        let obj = value.as_object();
        Self {
            url: Field::from_json(lookup(obj, "url", "url")),
            protocol_binding: Field::from_json(lookup(obj, "protocolBinding", "protocol_binding")),
            protocol_version: Field::from_json(lookup(obj, "protocolVersion", "protocol_version")),
        }
    }
}

/// One entry of `skills`.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct AgentSkill {
    pub id: Field<String>,
    pub name: Field<String>,
    pub description: Field<String>,
    pub tags: Field<Vec<Value>>,
}

impl From<Value> for AgentSkill {
    fn from(value: Value) -> Self {
        let obj = value.as_object();
        Self {
            id: Field::from_json(lookup(obj, "id", "id")),
            name: Field::from_json(lookup(obj, "name", "name")),
            description: Field::from_json(lookup(obj, "description", "description")),
            tags: Field::from_json(lookup(obj, "tags", "tags")),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct AgentProvider {
    pub url: Field<String>,
    pub organization: Field<String>,
}

impl From<Value> for AgentProvider {
    fn from(value: Value) -> Self {
        let obj = value.as_object();
        Self {
            url: Field::from_json(lookup(obj, "url", "url")),
            organization: Field::from_json(lookup(obj, "organization", "organization")),
        }
    }
}

/// Declared protocol capabilities. Only a JSON `true` counts as support.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct AgentCapabilities {
    pub streaming: Field<bool>,
    pub push_notifications: Field<bool>,
    pub extended_agent_card: Field<bool>,
}

impl From<Value> for AgentCapabilities {
    fn from(value: Value) -> Self {
        let obj = value.as_object();
        Self {
            streaming: Field::from_json(lookup(obj, "streaming", "streaming")),
            push_notifications: Field::from_json(lookup(obj, "pushNotifications", "push_notifications")),
            extended_agent_card: Field::from_json(lookup(
                obj,
                "extendedAgentCard",
                "extended_agent_card",
            )),
        }
    }
}

/// Build a nested record from any present value, even a non-object one.
fn nested<T: From<Value>>(value: Option<&Value>) -> Field<T> {
    match value {
        None | Some(Value::Null) => Field::Missing,
        Some(v) => Field::Present(T::from(v.clone())),
    }
}

/// Build a sequence of nested records; a non-array value is malformed.
fn nested_list<T: From<Value>>(value: Option<&Value>) -> Field<Vec<T>> {
    match value {
        None | Some(Value::Null) => Field::Missing,
        Some(Value::Array(items)) => Field::Present(items.iter().cloned().map(T::from).collect()),
        Some(other) => Field::Malformed(other.clone()),
    }
}

/// The agent card as fetched from `/.well-known/agent-card.json`.
///
/// Built infallibly from any JSON value; A2A camelCase names are read first and the
/// older snake_case names are accepted as fallbacks.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct AgentDocument {
    pub name: Field<String>,
    pub description: Field<String>,
    pub version: Field<String>,
    pub documentation_url: Field<String>,
    pub provider: Field<AgentProvider>,
    pub supported_interfaces: Field<Vec<AgentInterface>>,
    pub capabilities: Field<AgentCapabilities>,
    pub security_schemes: Field<Map<String, Value>>,
    pub default_input_modes: Field<Vec<String>>,
    pub default_output_modes: Field<Vec<String>>,
    pub skills: Field<Vec<AgentSkill>>,
}

impl From<Value> for AgentDocument {
    fn from(value: Value) -> Self {
        Self::from(&value)
    }
}

impl From<&Value> for AgentDocument {
    fn from(value: &Value) -> Self {
        let obj = value.as_object();
        Self {
            name: Field::from_json(lookup(obj, "name", "name")),
            description: Field::from_json(lookup(obj, "description", "description")),
            version: Field::from_json(lookup(obj, "version", "version")),
            documentation_url: Field::from_json(lookup(obj, "documentationUrl", "documentation_url")),
            provider: nested(lookup(obj, "provider", "provider")),
            supported_interfaces: nested_list(lookup(
                obj,
                "supportedInterfaces",
                "supported_interfaces",
            )),
            capabilities: nested(lookup(obj, "capabilities", "capabilities")),
            security_schemes: Field::from_json(lookup(obj, "securitySchemes", "security_schemes")),
            default_input_modes: Field::from_json(lookup(
                obj,
                "defaultInputModes",
                "default_input_modes",
            )),
            default_output_modes: Field::from_json(lookup(
                obj,
                "defaultOutputModes",
                "default_output_modes",
            )),
            skills: nested_list(lookup(obj, "skills", "skills")),
        }
    }
}

impl AgentDocument {
    /// Interfaces, or an empty slice when the field is missing or malformed.
    pub fn interfaces(&self) -> &[AgentInterface] {
        self.supported_interfaces
            .present()
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// String `protocolBinding`s, in document order. Interfaces without one are skipped.
    pub fn protocol_bindings(&self) -> Vec<String> {
        self.interfaces()
            .iter()
            .filter_map(|iface| iface.protocol_binding.present().cloned())
            .collect()
    }

    /// One raw `protocolBinding` per interface, `null` where it is absent.
    pub fn raw_protocol_bindings(&self) -> Vec<Value> {
        self.interfaces()
            .iter()
            .map(|iface| iface.protocol_binding.raw().unwrap_or(Value::Null))
            .collect()
    }
}
