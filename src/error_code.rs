//! 消息码：定义输入校验、连接、结构校验和比较阶段的稳定消息码。
//!
//! Stable message codes.
//!
//! Every message the inspector reports, whether it is raised as an error or returned
//! as data, carries one of these codes. Callers match on the code; the trailing text
//! is for humans and may change between releases.
//!
//! ## Code Prefixes
//!
//! | Prefix | Category   | Description                                  |
//! |--------|------------|----------------------------------------------|
//! | VAL    | input      | Caller-supplied parameters and snapshots     |
//! | CON    | connection | Fetching the agent card                      |
//! | CSV    | structure  | Required fields and shapes of the agent card |
//! | CMP    | compare    | Non-fatal integrity warnings of a comparison |
//!
//! ## Example
//!
//! ```rust
//! use agent_card_inspector::error_code::{Message, MessageCode};
//!
//! let code = MessageCode::from_code("CSV-020").unwrap();
//! assert_eq!(code, MessageCode::MissingName);
//! assert_eq!(code.category(), "structure");
//!
//! let message = Message::of(code);
//! assert_eq!(message.to_string(), r#"CSV-020: Missing required field "name""#);
//! ```

use serde::{Serialize, Serializer};
use std::fmt;

/// Closed set of message codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MessageCode {
    /// VAL-001: endpoint was not supplied
    MissingEndpoint,
    /// VAL-002: endpoint is not a string
    InvalidEndpointType,
    /// VAL-003: endpoint is blank after trimming
    EmptyEndpoint,
    /// VAL-004: endpoint does not parse as a URL
    InvalidEndpointUrl,
    /// VAL-005: timeout is not a number
    InvalidTimeoutType,
    /// VAL-006: timeout is zero or negative
    NonPositiveTimeout,
    /// VAL-007: `before` is not a snapshot object with `categories`
    InvalidBeforeSnapshot,
    /// VAL-008: `after` is not a snapshot object with `entries`
    InvalidAfterSnapshot,

    /// CON-010: connection failed
    ServerUnreachable,
    /// CON-011: the card URL answered 404
    CardNotFound,
    /// CON-012: the card URL answered another non-success status
    HttpError,
    /// CON-013: the body is not JSON
    InvalidJson,
    /// CON-014: the request did not finish before the deadline
    TimeoutExceeded,

    /// CSV-020
    MissingName,
    /// CSV-021
    MissingDescription,
    /// CSV-022
    MissingVersion,
    /// CSV-023
    MissingSupportedInterfaces,
    /// CSV-024: `supportedInterfaces` is not a non-empty array
    EmptySupportedInterfaces,
    /// CSV-025
    MissingCapabilities,
    /// CSV-026
    MissingDefaultInputModes,
    /// CSV-027
    MissingDefaultOutputModes,
    /// CSV-028
    MissingSkills,
    /// CSV-029: `skills` is present but not an array
    SkillsNotSequence,
    /// CSV-030
    InterfaceUrlMissing,
    /// CSV-031: interface URL is not an `https` URL
    InterfaceUrlNotHttps,
    /// CSV-032
    InterfaceBindingMissing,
    /// CSV-033
    InterfaceVersionMissing,
    /// CSV-034
    SkillIdMissing,
    /// CSV-035
    SkillNameMissing,
    /// CSV-036
    SkillDescriptionMissing,
    /// CSV-037
    SkillTagsMissing,
    /// CSV-038: tags is present but not a non-empty array
    SkillTagsEmpty,
    /// CSV-040
    ProviderUrlMissing,
    /// CSV-041
    ProviderOrganizationMissing,

    /// CMP-001: snapshots were taken from different endpoints
    DifferentAgents,
    /// CMP-002: the `before` snapshot carries no timestamp
    MissingBeforeTimestamp,
    /// CMP-003: the `after` snapshot predates the `before` snapshot
    AfterOlderThanBefore,
}

impl MessageCode {
    /// Every code, in catalogue order.
    pub const ALL: [MessageCode; 37] = [
        Self::MissingEndpoint,
        Self::InvalidEndpointType,
        Self::EmptyEndpoint,
        Self::InvalidEndpointUrl,
        Self::InvalidTimeoutType,
        Self::NonPositiveTimeout,
        Self::InvalidBeforeSnapshot,
        Self::InvalidAfterSnapshot,
        Self::ServerUnreachable,
        Self::CardNotFound,
        Self::HttpError,
        Self::InvalidJson,
        Self::TimeoutExceeded,
        Self::MissingName,
        Self::MissingDescription,
        Self::MissingVersion,
        Self::MissingSupportedInterfaces,
        Self::EmptySupportedInterfaces,
        Self::MissingCapabilities,
        Self::MissingDefaultInputModes,
        Self::MissingDefaultOutputModes,
        Self::MissingSkills,
        Self::SkillsNotSequence,
        Self::InterfaceUrlMissing,
        Self::InterfaceUrlNotHttps,
        Self::InterfaceBindingMissing,
        Self::InterfaceVersionMissing,
        Self::SkillIdMissing,
        Self::SkillNameMissing,
        Self::SkillDescriptionMissing,
        Self::SkillTagsMissing,
        Self::SkillTagsEmpty,
        Self::ProviderUrlMissing,
        Self::ProviderOrganizationMissing,
        Self::DifferentAgents,
        Self::MissingBeforeTimestamp,
        Self::AfterOlderThanBefore,
    ];

    /// Returns the canonical code string (e.g., `"CSV-020"`).
    #[inline]
    pub fn code(&self) -> &'static str {
        match self {
            Self::MissingEndpoint => "VAL-001",
            Self::InvalidEndpointType => "VAL-002",
            Self::EmptyEndpoint => "VAL-003",
            Self::InvalidEndpointUrl => "VAL-004",
            Self::InvalidTimeoutType => "VAL-005",
            Self::NonPositiveTimeout => "VAL-006",
            Self::InvalidBeforeSnapshot => "VAL-007",
            Self::InvalidAfterSnapshot => "VAL-008",
            Self::ServerUnreachable => "CON-010",
            Self::CardNotFound => "CON-011",
            Self::HttpError => "CON-012",
            Self::InvalidJson => "CON-013",
            Self::TimeoutExceeded => "CON-014",
            Self::MissingName => "CSV-020",
            Self::MissingDescription => "CSV-021",
            Self::MissingVersion => "CSV-022",
            Self::MissingSupportedInterfaces => "CSV-023",
            Self::EmptySupportedInterfaces => "CSV-024",
            Self::MissingCapabilities => "CSV-025",
            Self::MissingDefaultInputModes => "CSV-026",
            Self::MissingDefaultOutputModes => "CSV-027",
            Self::MissingSkills => "CSV-028",
            Self::SkillsNotSequence => "CSV-029",
            Self::InterfaceUrlMissing => "CSV-030",
            Self::InterfaceUrlNotHttps => "CSV-031",
            Self::InterfaceBindingMissing => "CSV-032",
            Self::InterfaceVersionMissing => "CSV-033",
            Self::SkillIdMissing => "CSV-034",
            Self::SkillNameMissing => "CSV-035",
            Self::SkillDescriptionMissing => "CSV-036",
            Self::SkillTagsMissing => "CSV-037",
            Self::SkillTagsEmpty => "CSV-038",
            Self::ProviderUrlMissing => "CSV-040",
            Self::ProviderOrganizationMissing => "CSV-041",
            Self::DifferentAgents => "CMP-001",
            Self::MissingBeforeTimestamp => "CMP-002",
            Self::AfterOlderThanBefore => "CMP-003",
        }
    }

    /// Returns the code prefix: `"VAL"`, `"CON"`, `"CSV"` or `"CMP"`.
    #[inline]
    pub fn prefix(&self) -> &'static str {
        &self.code()[..3]
    }

    /// Returns the category: `"input"`, `"connection"`, `"structure"` or `"compare"`.
    #[inline]
    pub fn category(&self) -> &'static str {
        match self.prefix() {
            "VAL" => "input",
            "CON" => "connection",
            "CSV" => "structure",
            _ => "compare",
        }
    }

    /// Default human text used by [`Message::of`].
    ///
    /// Codes that are reported per field or per status (indexed interface and skill
    /// checks, `CON-012`) get a generic text here; their producers build a precise one.
    pub fn summary(&self) -> &'static str {
        match self {
            Self::MissingEndpoint => "endpoint: Missing value",
            Self::InvalidEndpointType => "endpoint: Must be a string",
            Self::EmptyEndpoint => "endpoint: Must not be empty",
            Self::InvalidEndpointUrl => "endpoint: Must be a valid URL",
            Self::InvalidTimeoutType => "timeout: Must be a number",
            Self::NonPositiveTimeout => "timeout: Must be greater than 0",
            Self::InvalidBeforeSnapshot => r#"before: Must be an object with "categories""#,
            Self::InvalidAfterSnapshot => r#"after: Must be an object with "entries""#,
            Self::ServerUnreachable => "Server not reachable",
            Self::CardNotFound => "Agent Card not found (HTTP 404)",
            Self::HttpError => "HTTP error",
            Self::InvalidJson => "Response is not valid JSON",
            Self::TimeoutExceeded => "Request timeout exceeded",
            Self::MissingName => r#"Missing required field "name""#,
            Self::MissingDescription => r#"Missing required field "description""#,
            Self::MissingVersion => r#"Missing required field "version""#,
            Self::MissingSupportedInterfaces => r#"Missing required field "supportedInterfaces""#,
            Self::EmptySupportedInterfaces => "supportedInterfaces must not be empty",
            Self::MissingCapabilities => r#"Missing required field "capabilities""#,
            Self::MissingDefaultInputModes => r#"Missing required field "defaultInputModes""#,
            Self::MissingDefaultOutputModes => r#"Missing required field "defaultOutputModes""#,
            Self::MissingSkills => r#"Missing required field "skills""#,
            Self::SkillsNotSequence => "skills must be an array",
            Self::InterfaceUrlMissing
            | Self::InterfaceBindingMissing
            | Self::InterfaceVersionMissing
            | Self::SkillIdMissing
            | Self::SkillNameMissing
            | Self::SkillDescriptionMissing
            | Self::SkillTagsMissing
            | Self::ProviderUrlMissing
            | Self::ProviderOrganizationMissing => "Missing value",
            Self::InterfaceUrlNotHttps => "Must be a valid HTTPS URL",
            Self::SkillTagsEmpty => "Must be a non-empty array",
            Self::DifferentAgents => "compare: Snapshots are from different agents",
            Self::MissingBeforeTimestamp => "compare: Before snapshot has no timestamp",
            Self::AfterOlderThanBefore => "compare: After snapshot is older than before",
        }
    }

    /// Maps a code string (e.g., `"CON-014"`) back to its variant.
    ///
    /// A full rendered message is accepted as well; only the leading code is read.
    pub fn from_code(code: &str) -> Option<Self> {
        let head = code.trim_start().get(..7)?;
        Self::ALL.iter().copied().find(|c| c.code() == head)
    }
}

impl fmt::Display for MessageCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// A coded message, rendered as `<CODE>: <text>`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Message {
    code: MessageCode,
    text: String,
}

impl Message {
    pub fn new(code: MessageCode, text: impl Into<String>) -> Self {
        Self {
            code,
            text: text.into(),
        }
    }

    /// Message with the code's default text.
    pub fn of(code: MessageCode) -> Self {
        Self::new(code, code.summary())
    }

    /// Message scoped to a field path, e.g. `skills[2].tags: Missing value`.
    pub fn at(code: MessageCode, path: impl fmt::Display) -> Self {
        Self::new(code, format!("{}: {}", path, code.summary()))
    }

    pub fn code(&self) -> MessageCode {
        self.code
    }

    pub fn text(&self) -> &str {
        &self.text
    }
}

impl fmt::Display for Message {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.code, self.text)
    }
}

impl Serialize for Message {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}
