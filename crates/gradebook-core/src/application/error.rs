//! Application layer errors.
//!
//! These errors represent failures in orchestration (prompting, rendering),
//! not business logic. Business logic errors are `DomainError` from
//! `crate::domain`.

use thiserror::Error;

use crate::error::ErrorCategory;

/// Errors that occur while driving a use case.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ApplicationError {
    /// The user kept entering invalid values.
    #[error("Gave up reading {what} after {attempts} invalid attempts")]
    AttemptsExhausted { what: &'static str, attempts: u32 },

    /// The input stream ended (EOF) while a value was expected.
    #[error("Input closed while reading {what}")]
    InputClosed { what: &'static str },

    /// The prompter could not read or write.
    #[error("Prompt failed: {reason}")]
    PromptFailed { reason: String },

    /// A report could not be rendered.
    #[error("Report rendering failed: {reason}")]
    RenderingFailed { reason: String },
}

impl ApplicationError {
    /// Get user-actionable suggestions.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::AttemptsExhausted { attempts, .. } => vec![
                format!("{} invalid entries in a row; nothing was saved", attempts),
                "Raise input.max_attempts in the config to allow more retries".into(),
            ],
            Self::InputClosed { .. } => vec!["Standard input was closed".into()],
            Self::PromptFailed { .. } => vec!["Check that the terminal is readable".into()],
            Self::RenderingFailed { .. } => vec!["Try --output-format plain".into()],
        }
    }

    /// Get error category.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::AttemptsExhausted { .. } => ErrorCategory::Validation,
            Self::InputClosed { .. } | Self::PromptFailed { .. } => ErrorCategory::Input,
            Self::RenderingFailed { .. } => ErrorCategory::Internal,
        }
    }
}
