//! Snapshot records.
//!
//! Both records have a fixed key set in a fixed order on every path, success or not.
//! Absent values serialize as `null`, never as a missing key.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// The twelve capability flags of a snapshot.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Categories {
    pub is_reachable: bool,
    pub has_agent_card: bool,
    pub has_valid_structure: bool,
    pub has_skills: bool,
    pub has_security_schemes: bool,
    pub has_provider: bool,
    pub supports_streaming: bool,
    pub supports_push_notifications: bool,
    pub supports_json_rpc: bool,
    pub supports_grpc: bool,
    pub supports_extended_card: bool,
    pub has_documentation: bool,
}

impl Categories {
    /// Serialized key names, in order.
    pub const KEYS: [&'static str; 12] = [
        "isReachable",
        "hasAgentCard",
        "hasValidStructure",
        "hasSkills",
        "hasSecuritySchemes",
        "hasProvider",
        "supportsStreaming",
        "supportsPushNotifications",
        "supportsJsonRpc",
        "supportsGrpc",
        "supportsExtendedCard",
        "hasDocumentation",
    ];

    /// Every flag set to `value`.
    pub fn all(value: bool) -> Self {
        Self {
            is_reachable: value,
            has_agent_card: value,
            has_valid_structure: value,
            has_skills: value,
            has_security_schemes: value,
            has_provider: value,
            supports_streaming: value,
            supports_push_notifications: value,
            supports_json_rpc: value,
            supports_grpc: value,
            supports_extended_card: value,
            has_documentation: value,
        }
    }

    /// Flags of an agent whose card could not be fetched.
    pub fn unreachable() -> Self {
        Self::all(false)
    }
}

/// Skill identity kept in a snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkillSummary {
    pub id: Option<Value>,
    pub name: Option<Value>,
}

/// The thirteen projected card fields of a snapshot.
///
/// Card-derived fields hold the card's values as found, so a value of an unexpected
/// type still shows up in a comparison.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Entries {
    pub url: String,
    pub agent_name: Option<Value>,
    pub agent_description: Option<Value>,
    pub agent_version: Option<Value>,
    pub provider_organization: Option<Value>,
    pub provider_url: Option<Value>,
    pub skill_count: Option<usize>,
    pub skills: Option<Vec<SkillSummary>>,
    pub protocol_bindings: Option<Vec<Value>>,
    pub protocol_version: Option<Value>,
    pub default_input_modes: Option<Value>,
    pub default_output_modes: Option<Value>,
    /// RFC 3339 instant at which the check ran.
    pub timestamp: String,
}

impl Entries {
    /// Serialized key names, in order.
    pub const KEYS: [&'static str; 13] = [
        "url",
        "agentName",
        "agentDescription",
        "agentVersion",
        "providerOrganization",
        "providerUrl",
        "skillCount",
        "skills",
        "protocolBindings",
        "protocolVersion",
        "defaultInputModes",
        "defaultOutputModes",
        "timestamp",
    ];

    /// Entries with every card-derived field null.
    pub fn empty(url: impl Into<String>, timestamp: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            agent_name: None,
            agent_description: None,
            agent_version: None,
            provider_organization: None,
            provider_url: None,
            skill_count: None,
            skills: None,
            protocol_bindings: None,
            protocol_version: None,
            default_input_modes: None,
            default_output_modes: None,
            timestamp: timestamp.into(),
        }
    }
}

/// One check's normalized view of an agent: the unit of comparison.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    pub categories: Categories,
    pub entries: Entries,
}

impl Snapshot {
    /// JSON form, as accepted by the comparison operation.
    pub fn to_value(&self) -> Value {
        serde_json::json!({
            "categories": self.categories,
            "entries": self.entries,
        })
    }
}
