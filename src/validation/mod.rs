//! 校验结果与调用参数校验。
//!
//! Validation results and caller-input validation.

mod input;

pub use input::{
    validate_for_comparison, validate_for_full_check, validate_for_quick_check, validate_timeout,
};

use crate::error::validation_error;
use crate::error_code::{Message, MessageCode};
use crate::Result;
use serde::Serialize;

/// Outcome of a validating operation.
///
/// `status` is true exactly when `messages` is empty; the fields are private so the
/// two can never disagree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationResult {
    status: bool,
    messages: Vec<Message>,
}

impl ValidationResult {
    /// A passing result with no messages.
    pub fn passed() -> Self {
        Self {
            status: true,
            messages: Vec::new(),
        }
    }

    pub fn from_messages(messages: Vec<Message>) -> Self {
        Self {
            status: messages.is_empty(),
            messages,
        }
    }

    pub fn status(&self) -> bool {
        self.status
    }

    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    pub fn into_messages(self) -> Vec<Message> {
        self.messages
    }

    /// Check whether any message carries `code`.
    pub fn has_code(&self, code: MessageCode) -> bool {
        self.messages.iter().any(|m| m.code() == code)
    }

    /// Append the messages of another result.
    pub fn merge(mut self, other: ValidationResult) -> Self {
        self.messages.extend(other.messages);
        self.status = self.messages.is_empty();
        self
    }

    /// Raise the collected input violations, if any, as [`crate::Error::InvalidInput`].
    pub fn into_result(self) -> Result<()> {
        if self.status {
            Ok(())
        } else {
            Err(validation_error(self.messages))
        }
    }
}

impl Default for ValidationResult {
    fn default() -> Self {
        Self::passed()
    }
}
