//! Snapshot building.

use super::model::{Categories, Entries, SkillSummary, Snapshot};
use crate::card::AgentDocument;
use chrono::{DateTime, SecondsFormat, Utc};

/// RFC 3339 UTC with millisecond precision, e.g. `2025-01-01T00:00:00.000Z`.
pub fn format_timestamp(at: DateTime<Utc>) -> String {
    at.to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// Project a fetched card and its categories into a snapshot stamped now.
pub fn build(endpoint: &str, card: &AgentDocument, categories: Categories) -> Snapshot {
    build_at(endpoint, card, categories, Utc::now())
}

/// Like [`build`], stamped with `at`.
///
/// `protocolVersion` comes from the first interface only. Card values are copied as
/// found, even when their type is wrong; `skills` and `supportedInterfaces` that are
/// missing or not arrays project to `null`.
pub fn build_at(
    endpoint: &str,
    card: &AgentDocument,
    categories: Categories,
    at: DateTime<Utc>,
) -> Snapshot {
    let provider = card.provider.present();
    let skills: Option<Vec<SkillSummary>> = card.skills.present().map(|skills| {
        skills
            .iter()
            .map(|skill| SkillSummary {
                id: skill.id.raw(),
                name: skill.name.raw(),
            })
            .collect()
    });
    let interfaces_present = card.supported_interfaces.is_present();

    let entries = Entries {
        url: endpoint.to_string(),
        agent_name: card.name.raw(),
        agent_description: card.description.raw(),
        agent_version: card.version.raw(),
        provider_organization: provider.and_then(|p| p.organization.raw()),
        provider_url: provider.and_then(|p| p.url.raw()),
        skill_count: skills.as_ref().map(Vec::len),
        skills,
        protocol_bindings: interfaces_present.then(|| card.raw_protocol_bindings()),
        protocol_version: card
            .interfaces()
            .first()
            .and_then(|iface| iface.protocol_version.raw()),
        default_input_modes: card.default_input_modes.raw(),
        default_output_modes: card.default_output_modes.raw(),
        timestamp: format_timestamp(at),
    };

    Snapshot {
        categories,
        entries,
    }
}

/// Snapshot of an agent whose card could not be fetched.
pub fn build_empty(endpoint: &str) -> Snapshot {
    build_empty_at(endpoint, Utc::now())
}

/// Like [`build_empty`], stamped with `at`.
pub fn build_empty_at(endpoint: &str, at: DateTime<Utc>) -> Snapshot {
    Snapshot {
        categories: Categories::unreachable(),
        entries: Entries::empty(endpoint, format_timestamp(at)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::card::classify;
    use chrono::TimeZone;
    use serde_json::json;

    const ENDPOINT: &str = "https://agent.example.com";

    fn card() -> AgentDocument {
        AgentDocument::from(json!({
            "name": "Recipe Agent",
            "description": "Agent that helps users with recipes.",
            "version": "1.0.0",
            "provider": { "url": "https://example.com", "organization": "Example Corp" },
            "supportedInterfaces": [
                { "url": "https://agent.example.com/a2a/v1", "protocolBinding": "JSONRPC", "protocolVersion": "0.3" },
                { "url": "https://grpc.example.com/a2a", "protocolBinding": "GRPC", "protocolVersion": "1.0" }
            ],
            "capabilities": { "streaming": true },
            "defaultInputModes": ["text/plain", "application/json"],
            "defaultOutputModes": ["text/plain"],
            "skills": [
                { "id": "find-recipe", "name": "Find Recipe", "description": "Finds.", "tags": ["cooking"], "examples": ["pasta"] },
                { "id": "nutrition-info", "name": "Nutrition Info", "description": "Facts.", "tags": ["health"] }
            ]
        }))
    }

    fn fixed_instant() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 1, 2, 3, 4, 5).unwrap()
    }

    #[test]
    fn test_build_projects_card_fields() {
        let card = card();
        let categories = classify(&card);
        let snapshot = build_at(ENDPOINT, &card, categories, fixed_instant());
        let entries = &snapshot.entries;

        assert_eq!(snapshot.categories, categories);
        assert_eq!(entries.url, ENDPOINT);
        assert_eq!(entries.agent_name, Some(json!("Recipe Agent")));
        assert_eq!(entries.agent_version, Some(json!("1.0.0")));
        assert_eq!(entries.provider_organization, Some(json!("Example Corp")));
        assert_eq!(entries.provider_url, Some(json!("https://example.com")));
        assert_eq!(entries.skill_count, Some(2));
        assert_eq!(entries.protocol_bindings, Some(vec![json!("JSONRPC"), json!("GRPC")]));
        assert_eq!(entries.default_input_modes, Some(json!(["text/plain", "application/json"])));
        assert_eq!(entries.timestamp, "2025-01-02T03:04:05.000Z");
    }

    #[test]
    fn test_protocol_version_from_first_interface() {
        let snapshot = build_at(ENDPOINT, &card(), Categories::default(), fixed_instant());
        assert_eq!(snapshot.entries.protocol_version, Some(json!("0.3")));
    }

    #[test]
    fn test_wrongly_typed_values_are_kept() {
        let raw = json!({
            "name": "Numbers",
            "version": 2,
            "supportedInterfaces": [
                { "url": "https://agent.example.com/a2a", "protocolVersion": 0.3 },
                { "url": "https://grpc.example.com/a2a", "protocolBinding": "GRPC" }
            ],
            "defaultInputModes": ["text/plain", 7],
            "skills": [{ "id": 7, "name": "S" }]
        });
        let snapshot = build_at(ENDPOINT, &AgentDocument::from(raw), Categories::default(), fixed_instant());
        let entries = serde_json::to_value(&snapshot.entries).unwrap();

        assert_eq!(entries["agentVersion"], json!(2));
        assert_eq!(entries["protocolVersion"], json!(0.3));
        assert_eq!(entries["skills"], json!([{ "id": 7, "name": "S" }]));
        assert_eq!(entries["protocolBindings"], json!([null, "GRPC"]));
        assert_eq!(entries["defaultInputModes"], json!(["text/plain", 7]));
    }

    #[test]
    fn test_skill_summary_keeps_id_and_name_only() {
        let snapshot = build_at(ENDPOINT, &card(), Categories::default(), fixed_instant());
        let value = serde_json::to_value(&snapshot.entries).unwrap();
        assert_eq!(
            value["skills"],
            json!([
                { "id": "find-recipe", "name": "Find Recipe" },
                { "id": "nutrition-info", "name": "Nutrition Info" }
            ])
        );
    }

    #[test]
    fn test_no_provider_projects_nulls() {
        let mut raw = json!({ "name": "x", "supportedInterfaces": [], "skills": [] });
        raw["provider"] = serde_json::Value::Null;
        let snapshot = build_at(ENDPOINT, &AgentDocument::from(raw), Categories::default(), fixed_instant());
        assert_eq!(snapshot.entries.provider_organization, None);
        assert_eq!(snapshot.entries.provider_url, None);
        assert_eq!(snapshot.entries.skill_count, Some(0));
        assert_eq!(snapshot.entries.protocol_bindings, Some(Vec::new()));
        assert_eq!(snapshot.entries.protocol_version, None);
    }

    #[test]
    fn test_broken_card_projects_nulls() {
        let raw = json!({ "name": "Half an agent", "skills": "oops" });
        let snapshot = build_at(ENDPOINT, &AgentDocument::from(raw), Categories::default(), fixed_instant());
        assert_eq!(snapshot.entries.agent_name, Some(json!("Half an agent")));
        assert_eq!(snapshot.entries.skills, None);
        assert_eq!(snapshot.entries.skill_count, None);
        assert_eq!(snapshot.entries.protocol_bindings, None);
    }

    #[test]
    fn test_build_empty() {
        let snapshot = build_empty_at(ENDPOINT, fixed_instant());
        assert_eq!(snapshot.categories, Categories::all(false));
        assert_eq!(
            snapshot.entries,
            Entries::empty(ENDPOINT, "2025-01-02T03:04:05.000Z")
        );
    }

    #[test]
    fn test_build_empty_stamps_now() {
        let before = format_timestamp(Utc::now());
        let snapshot = build_empty(ENDPOINT);
        assert!(snapshot.entries.timestamp >= before);
        assert!(snapshot.entries.timestamp.ends_with('Z'));
    }
}
