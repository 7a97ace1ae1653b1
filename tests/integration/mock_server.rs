//! Mock HTTP server setup for integration tests

use agent_card_inspector::{Inspector, InspectorBuilder};
use mockito::{Mock, Server, ServerGuard};
use serde_json::Value;
use std::sync::Arc;
use std::time::Duration;
use tokio::net::TcpListener;
use tokio::sync::Mutex;

pub const CARD_PATH: &str = "/.well-known/agent-card.json";

/// An endpoint nothing listens on.
pub const UNREACHABLE_ENDPOINT: &str = "http://127.0.0.1:1";

/// Test fixture that manages a mock agent
pub struct MockServerFixture {
    pub server: Arc<Mutex<ServerGuard>>,
    pub base_url: String,
}

impl MockServerFixture {
    pub async fn new() -> Self {
        let server = Server::new_async().await;
        let base_url = server.url();
        Self {
            server: Arc::new(Mutex::new(server)),
            base_url,
        }
    }

    /// Inspector using the real HTTP fetcher
    pub fn inspector(&self) -> Inspector {
        InspectorBuilder::new()
            .default_timeout(Duration::from_secs(5))
            .build()
            .expect("inspector should build with defaults")
    }

    /// Serve `card` as the agent card
    pub async fn mock_card(&self, card: &Value) -> Mock {
        self.mock_response(200, &card.to_string()).await
    }

    /// Serve an arbitrary status and body at the card path
    pub async fn mock_response(&self, status: usize, body: &str) -> Mock {
        let mut server = self.server.lock().await;
        server
            .mock("GET", CARD_PATH)
            .match_header("accept", "application/json")
            .with_status(status)
            .with_header("content-type", "application/json")
            .with_body(body)
            .create_async()
            .await
    }
}

/// A server that accepts connections and never answers.
///
/// Returns its base URL; the listener lives until the test's runtime shuts down.
pub async fn silent_server() -> String {
    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind local listener");
    let addr = listener.local_addr().expect("listener address");
    tokio::spawn(async move {
        let mut held = Vec::new();
        while let Ok((socket, _)) = listener.accept().await {
            held.push(socket);
        }
    });
    format!("http://{addr}")
}
