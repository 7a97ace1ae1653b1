//! Capability classification.

use super::document::{AgentCapabilities, AgentDocument, Field};
use crate::snapshot::Categories;

/// Protocol binding name of JSON-RPC interfaces.
pub const BINDING_JSONRPC: &str = "JSONRPC";
/// Protocol binding name of gRPC interfaces.
pub const BINDING_GRPC: &str = "GRPC";

fn is_true(flag: &Field<bool>) -> bool {
    matches!(flag, Field::Present(true))
}

/// Project a fetched card onto the fixed category flags.
///
/// The first three flags record that the pipeline got this far: a card was fetched
/// and parsed. They are set even when structure validation reported defects.
pub fn classify(card: &AgentDocument) -> Categories {
    let bindings = card.protocol_bindings();
    let caps = card.capabilities.present().cloned().unwrap_or_default();
    let AgentCapabilities {
        streaming,
        push_notifications,
        extended_agent_card,
    } = caps;

    Categories {
        is_reachable: true,
        has_agent_card: true,
        has_valid_structure: true,
        has_skills: card.skills.present().is_some_and(|s| !s.is_empty()),
        has_security_schemes: card.security_schemes.present().is_some_and(|s| !s.is_empty()),
        has_provider: !card.provider.is_missing(),
        supports_streaming: is_true(&streaming),
        supports_push_notifications: is_true(&push_notifications),
        supports_json_rpc: bindings.iter().any(|b| b == BINDING_JSONRPC),
        supports_grpc: bindings.iter().any(|b| b == BINDING_GRPC),
        supports_extended_card: is_true(&extended_agent_card),
        has_documentation: card.documentation_url.present().is_some_and(|u| !u.is_empty()),
    }
}
