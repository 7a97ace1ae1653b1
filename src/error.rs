use crate::error_code::Message;
use crate::transport::TransportError;
use thiserror::Error;

/// Structured error context for configuration problems.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ErrorContext {
    /// Setting that caused the error (e.g., "config.well_known_path")
    pub field_path: Option<String>,
    /// Additional context about the error (e.g., the rejected value)
    pub details: Option<String>,
    /// Source of the error (e.g., "inspector_builder", "env")
    pub source: Option<String>,
}

impl ErrorContext {
    pub fn new() -> Self {
        Self {
            field_path: None,
            details: None,
            source: None,
        }
    }

    pub fn with_field_path(mut self, path: impl Into<String>) -> Self {
        self.field_path = Some(path.into());
        self
    }

    pub fn with_details(mut self, details: impl Into<String>) -> Self {
        self.details = Some(details.into());
        self
    }

    pub fn with_source(mut self, source: impl Into<String>) -> Self {
        self.source = Some(source.into());
        self
    }
}

impl Default for ErrorContext {
    fn default() -> Self {
        Self::new()
    }
}

/// Unified error type.
///
/// Only caller contract violations and setup failures are errors. An unreachable
/// agent or a malformed card is an expected outcome and is returned as data.
#[derive(Debug, Error)]
pub enum Error {
    /// Invalid parameters or snapshot shapes; every violated rule is listed.
    #[error("{}", join_messages(.messages))]
    InvalidInput { messages: Vec<Message> },

    #[error("Configuration error: {message}{}", format_context(.context))]
    Configuration {
        message: String,
        context: ErrorContext,
    },

    #[error("Network transport error: {0}")]
    Transport(#[from] TransportError),
}

fn join_messages(messages: &[Message]) -> String {
    messages
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

// Helper function to format error context for display
fn format_context(ctx: &ErrorContext) -> String {
    let mut parts = Vec::new();
    if let Some(ref field) = ctx.field_path {
        parts.push(format!("field: {}", field));
    }
    if let Some(ref details) = ctx.details {
        parts.push(format!("details: {}", details));
    }
    if let Some(ref source) = ctx.source {
        parts.push(format!("source: {}", source));
    }
    if parts.is_empty() {
        String::new()
    } else {
        format!(" ({})", parts.join(", "))
    }
}

impl Error {
    /// Create a new configuration error with structured context
    pub fn configuration_with_context(msg: impl Into<String>, context: ErrorContext) -> Self {
        Error::Configuration {
            message: msg.into(),
            context,
        }
    }

    /// Extract error context if available
    pub fn context(&self) -> Option<&ErrorContext> {
        match self {
            Error::Configuration { context, .. } => Some(context),
            _ => None,
        }
    }

    /// Messages carried by an [`Error::InvalidInput`]; empty for every other variant.
    pub fn messages(&self) -> &[Message] {
        match self {
            Error::InvalidInput { messages } => messages,
            _ => &[],
        }
    }
}

/// Turns a set of input violations into the single error reported to the caller.
///
/// This is the only way invalid input leaves the crate: all messages are kept and
/// rendered as one comma-separated summary.
pub fn validation_error(messages: Vec<Message>) -> Error {
    Error::InvalidInput { messages }
}
