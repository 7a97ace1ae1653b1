//! 运行配置：默认超时、卡片路径、User-Agent 与代理。
//!
//! Runtime configuration.
//!
//! Defaults can be overridden from the environment:
//! - `AGENT_CARD_TIMEOUT_MS` (default 10000)
//! - `AGENT_CARD_WELL_KNOWN_PATH` (default `/.well-known/agent-card.json`)
//! - `AGENT_CARD_USER_AGENT` (default `agent-card-inspector/<version>`)
//! - `AGENT_CARD_PROXY_URL` (unset by default)

use crate::error::{Error, ErrorContext};
use crate::Result;
use std::env;
use std::time::Duration;

pub const DEFAULT_TIMEOUT_MS: u64 = 10_000;
pub const DEFAULT_WELL_KNOWN_PATH: &str = "/.well-known/agent-card.json";

pub fn default_user_agent() -> String {
    format!("agent-card-inspector/{}", env!("CARGO_PKG_VERSION"))
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InspectorConfig {
    /// Fetch deadline used when a check does not carry its own timeout.
    pub default_timeout: Duration,
    /// Path of the agent card, appended to the endpoint.
    pub well_known_path: String,
    pub user_agent: String,
    pub proxy_url: Option<String>,
}

impl Default for InspectorConfig {
    fn default() -> Self {
        Self {
            default_timeout: Duration::from_millis(DEFAULT_TIMEOUT_MS),
            well_known_path: DEFAULT_WELL_KNOWN_PATH.to_string(),
            user_agent: default_user_agent(),
            proxy_url: None,
        }
    }
}

impl InspectorConfig {
    /// Defaults with environment overrides applied. Unparseable values are ignored.
    pub fn from_env() -> Self {
        let mut config = Self::default();
        if let Some(ms) = env::var("AGENT_CARD_TIMEOUT_MS")
            .ok()
            .and_then(|s| s.trim().parse::<u64>().ok())
        {
            config.default_timeout = Duration::from_millis(ms);
        }
        if let Ok(path) = env::var("AGENT_CARD_WELL_KNOWN_PATH") {
            config.well_known_path = path;
        }
        if let Ok(agent) = env::var("AGENT_CARD_USER_AGENT") {
            config.user_agent = agent;
        }
        config.proxy_url = env::var("AGENT_CARD_PROXY_URL")
            .ok()
            .filter(|s| !s.trim().is_empty());
        config
    }

    /// Reject settings no check could run with.
    pub fn validate(&self) -> Result<()> {
        if self.default_timeout.is_zero() {
            return Err(Error::configuration_with_context(
                "default timeout must be greater than 0",
                ErrorContext::new()
                    .with_field_path("config.default_timeout")
                    .with_source("inspector_builder"),
            ));
        }
        if !self.well_known_path.starts_with('/') {
            return Err(Error::configuration_with_context(
                "well-known path must start with '/'",
                ErrorContext::new()
                    .with_field_path("config.well_known_path")
                    .with_details(self.well_known_path.clone())
                    .with_source("inspector_builder"),
            ));
        }
        if let Some(proxy) = &self.proxy_url {
            if url::Url::parse(proxy).is_err() {
                return Err(Error::configuration_with_context(
                    "proxy URL is not a valid URL",
                    ErrorContext::new()
                        .with_field_path("config.proxy_url")
                        .with_details(proxy.clone())
                        .with_source("inspector_builder"),
                ));
            }
        }
        Ok(())
    }
}
