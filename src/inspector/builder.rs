use super::core::Inspector;
use crate::config::InspectorConfig;
use crate::transport::{CardFetcher, HttpCardFetcher};
use crate::Result;
use std::sync::Arc;
use std::time::Duration;

/// Builder for [`Inspector`].
pub struct InspectorBuilder {
    config: InspectorConfig,
    fetcher: Option<Arc<dyn CardFetcher>>,
}

impl InspectorBuilder {
    pub fn new() -> Self {
        Self {
            config: InspectorConfig::default(),
            fetcher: None,
        }
    }

    /// Start from [`InspectorConfig::from_env`].
    pub fn from_env() -> Self {
        Self {
            config: InspectorConfig::from_env(),
            fetcher: None,
        }
    }

    /// Replace the whole configuration.
    pub fn config(mut self, config: InspectorConfig) -> Self {
        self.config = config;
        self
    }

    /// Fetch deadline for checks that do not carry their own timeout.
    pub fn default_timeout(mut self, timeout: Duration) -> Self {
        self.config.default_timeout = timeout;
        self
    }

    pub fn well_known_path(mut self, path: impl Into<String>) -> Self {
        self.config.well_known_path = path.into();
        self
    }

    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.config.user_agent = user_agent.into();
        self
    }

    pub fn proxy_url(mut self, proxy_url: impl Into<String>) -> Self {
        self.config.proxy_url = Some(proxy_url.into());
        self
    }

    /// Inject a card source. Default is [`HttpCardFetcher`] built from the configuration.
    pub fn fetcher(mut self, fetcher: Arc<dyn CardFetcher>) -> Self {
        self.fetcher = Some(fetcher);
        self
    }

    pub fn build(self) -> Result<Inspector> {
        self.config.validate()?;
        let fetcher: Arc<dyn CardFetcher> = match self.fetcher {
            Some(fetcher) => fetcher,
            None => Arc::new(HttpCardFetcher::new(&self.config)?),
        };
        Ok(Inspector::from_parts(self.config, fetcher))
    }
}

impl Default for InspectorBuilder {
    fn default() -> Self {
        Self::new()
    }
}
