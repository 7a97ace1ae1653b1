//! Full check against a mock agent

mod integration;

use agent_card_inspector::{Categories, CheckRequest, MessageCode};
use integration::fixtures::{keys, valid_agent_card, CATEGORY_KEYS, ENTRY_KEYS};
use integration::mock_server::{MockServerFixture, UNREACHABLE_ENDPOINT};
use regex::Regex;
use serde_json::{json, Value};

fn timestamp_pattern() -> Regex {
    Regex::new(r"^\d{4}-\d{2}-\d{2}T\d{2}:\d{2}:\d{2}\.\d{3}Z$").unwrap()
}

#[tokio::test]
async fn test_valid_card_snapshot() {
    let fixture = MockServerFixture::new().await;
    let _mock = fixture.mock_card(&valid_agent_card()).await;

    let report = fixture
        .inspector()
        .full_check(&CheckRequest::new(&fixture.base_url).with_timeout(5000))
        .await
        .unwrap();

    assert!(report.status);
    assert!(report.messages.is_empty());
    assert_eq!(
        report.categories,
        Categories {
            supports_push_notifications: false,
            ..Categories::all(true)
        }
    );

    let entries = serde_json::to_value(&report.entries).unwrap();
    assert_eq!(entries["url"], json!(fixture.base_url));
    assert_eq!(entries["agentName"], "Recipe Agent");
    assert_eq!(entries["providerOrganization"], "Example Corp");
    assert_eq!(entries["skillCount"], 2);
    assert_eq!(
        entries["skills"],
        json!([
            { "id": "find-recipe", "name": "Find Recipe" },
            { "id": "nutrition-info", "name": "Nutrition Info" }
        ])
    );
    assert_eq!(entries["protocolBindings"], json!(["JSONRPC", "GRPC"]));
    assert_eq!(entries["protocolVersion"], "0.3");
    assert_eq!(entries["defaultOutputModes"], json!(["text/plain", "application/json"]));
    assert!(timestamp_pattern().is_match(entries["timestamp"].as_str().unwrap()));
}

#[tokio::test]
async fn test_keys_in_order_on_every_path() {
    let fixture = MockServerFixture::new().await;
    let _mock = fixture.mock_card(&valid_agent_card()).await;
    let inspector = fixture.inspector();

    let reached = inspector
        .full_check(&CheckRequest::new(&fixture.base_url))
        .await
        .unwrap();
    let unreachable = inspector
        .full_check(&CheckRequest::new(UNREACHABLE_ENDPOINT))
        .await
        .unwrap();

    for report in [reached, unreachable] {
        let value = serde_json::to_value(&report).unwrap();
        assert_eq!(keys(&value), vec!["status", "messages", "categories", "entries"]);
        assert_eq!(keys(&value["categories"]), CATEGORY_KEYS.to_vec());
        assert_eq!(keys(&value["entries"]), ENTRY_KEYS.to_vec());
    }
}

#[tokio::test]
async fn test_unreachable_returns_empty_snapshot() {
    let inspector = MockServerFixture::new().await.inspector();
    let report = inspector
        .full_check(&CheckRequest::new(UNREACHABLE_ENDPOINT))
        .await
        .unwrap();

    assert!(!report.status);
    assert_eq!(report.messages.len(), 1);
    assert_eq!(report.messages[0].code(), MessageCode::ServerUnreachable);
    assert_eq!(report.categories, Categories::all(false));

    let entries = serde_json::to_value(&report.entries).unwrap();
    for key in ENTRY_KEYS {
        match key {
            "url" => assert_eq!(entries[key], UNREACHABLE_ENDPOINT),
            "timestamp" => assert!(timestamp_pattern().is_match(entries[key].as_str().unwrap())),
            _ => assert_eq!(entries[key], Value::Null, "{key}"),
        }
    }
}

#[tokio::test]
async fn test_http_error_returns_empty_snapshot() {
    let fixture = MockServerFixture::new().await;
    let _mock = fixture.mock_response(503, "").await;

    let report = fixture
        .inspector()
        .full_check(&CheckRequest::new(&fixture.base_url))
        .await
        .unwrap();

    assert!(!report.status);
    assert_eq!(report.messages[0].to_string(), "CON-012: HTTP error (503)");
    assert!(!report.categories.is_reachable);
}

#[tokio::test]
async fn test_broken_card_still_snapshotted() {
    let mut card = valid_agent_card();
    card["supportedInterfaces"][1]["url"] = json!("http://grpc.example.com/a2a");
    card["skills"][0].as_object_mut().unwrap().remove("description");

    let fixture = MockServerFixture::new().await;
    let _mock = fixture.mock_card(&card).await;

    let report = fixture
        .inspector()
        .full_check(&CheckRequest::new(&fixture.base_url))
        .await
        .unwrap();

    assert!(!report.status);
    let rendered: Vec<String> = report.messages.iter().map(ToString::to_string).collect();
    assert_eq!(
        rendered,
        vec![
            "CSV-031: supportedInterfaces[1].url: Must be a valid HTTPS URL",
            "CSV-036: skills[0].description: Missing value",
        ]
    );
    assert!(report.categories.is_reachable);
    assert!(report.categories.has_agent_card);
    assert!(report.categories.has_valid_structure);
    assert!(report.categories.supports_grpc);
    assert_eq!(report.entries.skill_count, Some(2));
}

#[tokio::test]
async fn test_non_string_values_kept_in_entries() {
    let mut card = valid_agent_card();
    card["version"] = json!(2);
    card["supportedInterfaces"][0]["protocolVersion"] = json!(0.3);
    card["skills"][0]["id"] = json!(7);

    let fixture = MockServerFixture::new().await;
    let _mock = fixture.mock_card(&card).await;

    let report = fixture
        .inspector()
        .full_check(&CheckRequest::new(&fixture.base_url))
        .await
        .unwrap();

    assert!(report.status);
    let entries = serde_json::to_value(&report.entries).unwrap();
    assert_eq!(entries["agentVersion"], json!(2));
    assert_eq!(entries["protocolVersion"], json!(0.3));
    assert_eq!(entries["skills"][0], json!({ "id": 7, "name": "Find Recipe" }));
}

#[tokio::test]
async fn test_protocol_bindings_keep_a_slot_per_interface() {
    let mut card = valid_agent_card();
    card["supportedInterfaces"][0]
        .as_object_mut()
        .unwrap()
        .remove("protocolBinding");

    let fixture = MockServerFixture::new().await;
    let _mock = fixture.mock_card(&card).await;

    let report = fixture
        .inspector()
        .full_check(&CheckRequest::new(&fixture.base_url))
        .await
        .unwrap();

    assert!(!report.status);
    assert_eq!(report.messages[0].code(), MessageCode::InterfaceBindingMissing);
    let entries = serde_json::to_value(&report.entries).unwrap();
    assert_eq!(entries["protocolBindings"], json!([null, "GRPC"]));
    assert!(!report.categories.supports_json_rpc);
    assert!(report.categories.supports_grpc);
}

#[tokio::test]
async fn test_invalid_timeout_is_raised() {
    let inspector = MockServerFixture::new().await.inspector();

    let request = CheckRequest {
        endpoint: Some(json!("https://agent.example.com")),
        timeout: Some(json!("fast")),
    };
    let err = inspector.full_check(&request).await.unwrap_err();
    assert_eq!(err.to_string(), "VAL-005: timeout: Must be a number");

    let request = CheckRequest::new("https://agent.example.com").with_timeout(0);
    let err = inspector.full_check(&request).await.unwrap_err();
    assert_eq!(err.to_string(), "VAL-006: timeout: Must be greater than 0");
}
