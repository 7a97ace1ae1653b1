use super::builder::InspectorBuilder;
use super::request::{CheckRequest, CompareRequest, FullCheckReport};
use crate::card::{classify, validate_structure, AgentDocument};
use crate::compare::{self, Comparison};
use crate::config::InspectorConfig;
use crate::error::validation_error;
use crate::error_code::{Message, MessageCode};
use crate::snapshot::{self, Snapshot};
use crate::transport::CardFetcher;
use crate::validation::{
    validate_for_comparison, validate_for_full_check, validate_for_quick_check, validate_timeout,
    ValidationResult,
};
use crate::Result;
use serde_json::Value;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tracing::{debug, info, warn};

/// Entry point for checks and comparisons.
///
/// Holds no per-check state, so one inspector can serve concurrent checks.
pub struct Inspector {
    config: InspectorConfig,
    fetcher: Arc<dyn CardFetcher>,
}

impl Inspector {
    /// Inspector with the default configuration and the HTTP fetcher.
    pub fn new() -> Result<Self> {
        InspectorBuilder::new().build()
    }

    pub fn builder() -> InspectorBuilder {
        InspectorBuilder::new()
    }

    pub(crate) fn from_parts(config: InspectorConfig, fetcher: Arc<dyn CardFetcher>) -> Self {
        Self { config, fetcher }
    }

    pub fn config(&self) -> &InspectorConfig {
        &self.config
    }

    fn resolve_timeout(&self, timeout: Option<&Value>) -> Duration {
        timeout
            .and_then(Value::as_f64)
            .and_then(|millis| Duration::try_from_secs_f64(millis / 1000.0).ok())
            .unwrap_or(self.config.default_timeout)
    }

    async fn fetch_card(&self, endpoint: &str, timeout: Duration) -> std::result::Result<Value, Message> {
        let started = Instant::now();
        match self.fetcher.fetch(endpoint, timeout).await {
            Ok(card) => {
                debug!(
                    endpoint,
                    duration_ms = started.elapsed().as_millis() as u64,
                    "agent card fetched"
                );
                Ok(card)
            }
            Err(err) => {
                let message = err.to_message();
                warn!(
                    endpoint,
                    code = message.code().code(),
                    error = %err,
                    "agent card fetch failed"
                );
                Err(message)
            }
        }
    }

    /// Fetch the card and validate its structure. Returns only status and messages.
    ///
    /// Invalid parameters are raised as [`crate::Error::InvalidInput`]; everything
    /// that goes wrong with the remote agent is reported in the result.
    pub async fn quick_check(&self, request: &CheckRequest) -> Result<ValidationResult> {
        validate_for_quick_check(request.endpoint.as_ref())
            .merge(validate_timeout(request.timeout.as_ref()))
            .into_result()?;
        let endpoint = checked_endpoint(request)?;
        let timeout = self.resolve_timeout(request.timeout.as_ref());

        let card = match self.fetch_card(endpoint, timeout).await {
            Ok(card) => card,
            Err(message) => return Ok(ValidationResult::from_messages(vec![message])),
        };

        let result = validate_structure(&AgentDocument::from(&card));
        if !result.status() {
            warn!(endpoint, defects = result.messages().len(), "agent card has structural defects");
        }
        info!(
            endpoint,
            status = result.status(),
            messages = result.messages().len(),
            "quick check finished"
        );
        Ok(result)
    }

    /// Fetch, validate, classify and snapshot the card.
    ///
    /// A snapshot is produced on every path: an unreachable agent gets an empty one,
    /// and a structurally broken card is still classified so it can be compared later.
    pub async fn full_check(&self, request: &CheckRequest) -> Result<FullCheckReport> {
        validate_for_full_check(request.endpoint.as_ref(), request.timeout.as_ref()).into_result()?;
        let endpoint = checked_endpoint(request)?;
        let timeout = self.resolve_timeout(request.timeout.as_ref());

        let card = match self.fetch_card(endpoint, timeout).await {
            Ok(card) => card,
            Err(message) => {
                info!(endpoint, status = false, messages = 1, "full check finished");
                return Ok(FullCheckReport::new(vec![message], snapshot::build_empty(endpoint)));
            }
        };

        let card = AgentDocument::from(card);
        let structure = validate_structure(&card);
        if !structure.status() {
            warn!(
                endpoint,
                defects = structure.messages().len(),
                "agent card has structural defects"
            );
        }
        let categories = classify(&card);
        debug!(endpoint, ?categories, "agent card classified");
        let report = FullCheckReport::new(
            structure.into_messages(),
            snapshot::build(endpoint, &card, categories),
        );

        info!(
            endpoint,
            status = report.status,
            messages = report.messages.len(),
            "full check finished"
        );
        Ok(report)
    }

    /// Compare two snapshots in JSON form.
    ///
    /// Malformed snapshots are raised as [`crate::Error::InvalidInput`]. Once both pass,
    /// the comparison cannot fail; integrity problems come back as warnings.
    pub fn compare(&self, request: &CompareRequest) -> Result<Comparison> {
        let before = request.before.as_ref();
        let after = request.after.as_ref();
        let validation = validate_for_comparison(before, after);
        let (true, Some(before), Some(after)) = (validation.status(), before, after) else {
            return Err(validation_error(validation.into_messages()));
        };

        let comparison = compare::compare(before, after);
        for message in &comparison.messages {
            warn!(code = message.code().code(), "{}", message.text());
        }
        info!(has_changes = comparison.has_changes, "snapshots compared");
        Ok(comparison)
    }

    /// Compare two typed snapshots.
    pub fn compare_snapshots(&self, before: &Snapshot, after: &Snapshot) -> Comparison {
        compare::compare(&before.to_value(), &after.to_value())
    }
}

fn checked_endpoint(request: &CheckRequest) -> Result<&str> {
    request
        .endpoint_str()
        .ok_or_else(|| validation_error(vec![Message::of(MessageCode::InvalidEndpointType)]))
}
