//! 卡片获取：抓取远端智能体卡片的外部协作者。
//!
//! Agent card fetching.
//!
//! Checks depend only on [`CardFetcher`]; [`http::HttpCardFetcher`] is the default
//! implementation. A fetch makes at most one attempt and yields either a parsed
//! document or a coded failure, never both.

pub mod http;

pub use http::HttpCardFetcher;

use crate::error_code::{Message, MessageCode};
use async_trait::async_trait;
use serde_json::Value;
use std::time::Duration;

/// Why a card could not be fetched.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FetchError {
    #[error("server not reachable: {0}")]
    Unreachable(String),

    #[error("agent card not found")]
    NotFound,

    #[error("HTTP status {status}")]
    Http { status: u16 },

    #[error("response is not valid JSON: {0}")]
    InvalidJson(String),

    #[error("request timed out after {} ms", .0.as_millis())]
    Timeout(Duration),
}

impl FetchError {
    pub fn code(&self) -> MessageCode {
        match self {
            FetchError::Unreachable(_) => MessageCode::ServerUnreachable,
            FetchError::NotFound => MessageCode::CardNotFound,
            FetchError::Http { .. } => MessageCode::HttpError,
            FetchError::InvalidJson(_) => MessageCode::InvalidJson,
            FetchError::Timeout(_) => MessageCode::TimeoutExceeded,
        }
    }

    /// The coded message reported by a check.
    pub fn to_message(&self) -> Message {
        match self {
            FetchError::Http { status } => Message::new(self.code(), format!("HTTP error ({status})")),
            _ => Message::of(self.code()),
        }
    }
}

/// Source of agent cards.
#[async_trait]
pub trait CardFetcher: Send + Sync {
    /// Fetch and parse the card published by `endpoint`, giving up after `timeout`.
    async fn fetch(&self, endpoint: &str, timeout: Duration) -> Result<Value, FetchError>;
}

/// Failure to set up the HTTP client.
#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),
}
