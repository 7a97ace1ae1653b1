use super::{CardFetcher, FetchError, TransportError};
use crate::config::InspectorConfig;
use crate::Result;
use async_trait::async_trait;
use reqwest::header::ACCEPT;
use reqwest::{Proxy, StatusCode};
use serde_json::Value;
use std::time::Duration;
use tracing::debug;

/// Fetches `<endpoint><well-known path>` over HTTP(S).
pub struct HttpCardFetcher {
    client: reqwest::Client,
    well_known_path: String,
}

impl HttpCardFetcher {
    pub fn new(config: &InspectorConfig) -> Result<Self> {
        let mut builder = reqwest::Client::builder()
            .user_agent(config.user_agent.clone())
            .pool_idle_timeout(Some(Duration::from_secs(90)));

        if let Some(proxy_url) = &config.proxy_url {
            let proxy = Proxy::all(proxy_url).map_err(TransportError::Http)?;
            builder = builder.proxy(proxy);
        }

        let client = builder.build().map_err(TransportError::Http)?;

        Ok(Self {
            client,
            well_known_path: config.well_known_path.clone(),
        })
    }

    /// URL of the card published by `endpoint`. Trailing slashes are dropped first.
    pub fn card_url(&self, endpoint: &str) -> String {
        format!("{}{}", endpoint.trim_end_matches('/'), self.well_known_path)
    }

    async fn get_json(&self, url: &str, timeout: Duration) -> std::result::Result<Value, FetchError> {
        let response = self
            .client
            .get(url)
            .header(ACCEPT, "application/json")
            .timeout(timeout)
            .send()
            .await
            .map_err(|e| classify_error(e, timeout))?;

        let status = response.status();
        if status == StatusCode::NOT_FOUND {
            return Err(FetchError::NotFound);
        }
        if !status.is_success() {
            return Err(FetchError::Http {
                status: status.as_u16(),
            });
        }

        let body = response
            .text()
            .await
            .map_err(|e| classify_error(e, timeout))?;
        serde_json::from_str(&body).map_err(|e| FetchError::InvalidJson(e.to_string()))
    }
}

fn classify_error(err: reqwest::Error, timeout: Duration) -> FetchError {
    if err.is_timeout() {
        FetchError::Timeout(timeout)
    } else {
        FetchError::Unreachable(err.to_string())
    }
}

#[async_trait]
impl CardFetcher for HttpCardFetcher {
    async fn fetch(&self, endpoint: &str, timeout: Duration) -> std::result::Result<Value, FetchError> {
        let url = self.card_url(endpoint);
        debug!(url = %url, timeout_ms = timeout.as_millis() as u64, "fetching agent card");

        // The request deadline covers connect and headers; this one also covers the body.
        match tokio::time::timeout(timeout, self.get_json(&url, timeout)).await {
            Ok(result) => result,
            Err(_) => Err(FetchError::Timeout(timeout)),
        }
    }
}
