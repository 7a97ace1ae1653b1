//! Agent cards and snapshots used across tests

use serde_json::{json, Value};

pub const TEST_ENDPOINT: &str = "https://agent.example.com";

pub const CATEGORY_KEYS: [&str; 12] = [
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

pub const ENTRY_KEYS: [&str; 13] = [
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

/// Card with every optional section filled in.
pub fn valid_agent_card() -> Value {
    json!({
        "name": "Recipe Agent",
        "description": "Agent that helps users with recipes and cooking.",
        "version": "1.0.0",
        "documentationUrl": "https://docs.example.com/recipe-agent",
        "provider": { "url": "https://example.com", "organization": "Example Corp" },
        "supportedInterfaces": [
            { "url": "https://agent.example.com/a2a/v1", "protocolBinding": "JSONRPC", "protocolVersion": "0.3" },
            { "url": "https://grpc.example.com/a2a", "protocolBinding": "GRPC", "protocolVersion": "0.3" }
        ],
        "capabilities": { "streaming": true, "pushNotifications": false, "extendedAgentCard": true, "extensions": [] },
        "securitySchemes": {
            "oauth2": {
                "type": "oauth2",
                "flows": {
                    "authorizationCode": {
                        "authorizationUrl": "https://auth.example.com/authorize",
                        "tokenUrl": "https://auth.example.com/token",
                        "scopes": { "read": "Read access", "write": "Write access" }
                    }
                }
            }
        },
        "defaultInputModes": ["text/plain", "application/json"],
        "defaultOutputModes": ["text/plain", "application/json"],
        "skills": [
            {
                "id": "find-recipe",
                "name": "Find Recipe",
                "description": "Finds recipes based on ingredients or cuisine type.",
                "tags": ["cooking", "recipes", "food"],
                "examples": ["Find me a pasta recipe", "What can I cook with chicken?"]
            },
            {
                "id": "nutrition-info",
                "name": "Nutrition Info",
                "description": "Provides nutritional information for recipes.",
                "tags": ["nutrition", "health"]
            }
        ]
    })
}

/// Card with the required fields only, spelled in snake_case.
pub fn minimal_agent_card() -> Value {
    json!({
        "name": "Minimal Agent",
        "description": "A minimal agent.",
        "version": "0.1.0",
        "supported_interfaces": [
            { "url": "https://agent.example.com/a2a/v1", "protocol_binding": "JSONRPC", "protocol_version": "0.3" }
        ],
        "capabilities": {},
        "default_input_modes": ["text/plain"],
        "default_output_modes": ["text/plain"],
        "skills": [
            { "id": "echo", "name": "Echo", "description": "Echoes back the input.", "tags": ["utility"] }
        ]
    })
}

pub fn full_categories() -> Value {
    let flags: serde_json::Map<String, Value> = CATEGORY_KEYS
        .iter()
        .map(|key| (key.to_string(), Value::Bool(true)))
        .collect();
    Value::Object(flags)
}

/// Snapshot of the recipe agent as stored by an earlier release, with security schemes.
pub fn recipe_snapshot(timestamp: &str) -> Value {
    json!({
        "categories": full_categories(),
        "entries": {
            "url": TEST_ENDPOINT,
            "agentName": "Recipe Agent",
            "agentDescription": "Agent that helps users with recipes.",
            "agentVersion": "1.0.0",
            "providerOrganization": "Example Corp",
            "providerUrl": "https://example.com",
            "skillCount": 2,
            "skills": [
                { "id": "find-recipe", "name": "Find Recipe" },
                { "id": "nutrition-info", "name": "Nutrition Info" }
            ],
            "protocolBindings": ["JSONRPC", "GRPC"],
            "protocolVersion": "0.3",
            "defaultInputModes": ["text/plain"],
            "defaultOutputModes": ["text/plain"],
            "securitySchemes": { "oauth2": { "type": "oauth2" } },
            "timestamp": timestamp
        }
    })
}

pub fn snapshot_a() -> Value {
    recipe_snapshot("2025-01-01T00:00:00.000Z")
}

pub fn snapshot_b() -> Value {
    recipe_snapshot("2025-01-02T00:00:00.000Z")
}

pub fn keys(value: &Value) -> Vec<String> {
    value
        .as_object()
        .map(|obj| obj.keys().cloned().collect())
        .unwrap_or_default()
}
