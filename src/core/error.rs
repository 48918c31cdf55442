// src/core/error.rs
//! Failure kinds surfaced at the action boundary

use thiserror::Error;

/// Backend messages that carry no information for the user
const GENERIC_MESSAGES: [&str; 3] = ["error", "unknown error", "internal server error"];

#[derive(Debug, Clone, Error)]
pub enum ActionError {
    /// Input rejected before any request was made
    #[error("{0}")]
    Validation(String),

    /// Backend answered with a non-success status
    #[error("backend returned status {status}: {}", .message.as_deref().unwrap_or("<no message>"))]
    Application { status: u16, message: Option<String> },

    /// The call itself failed, or its body could not be decoded
    #[error("backend request failed: {0}")]
    Transport(String),

    #[error("no analysis data to export")]
    MissingAnalysis,
}

pub const MISSING_ANALYSIS_MESSAGE: &str =
    "No analysis data available to export. Please analyze a job posting first.";

impl ActionError {
    pub fn validation(message: impl Into<String>) -> Self {
        ActionError::Validation(message.into())
    }

    pub fn transport(err: impl std::fmt::Display) -> Self {
        ActionError::Transport(err.to_string())
    }

    /// Text shown in the panel. Backend messages win unless blank or generic.
    pub fn user_message(&self, fallback: &str) -> String {
        match self {
            ActionError::Validation(message) => message.clone(),
            ActionError::Application {
                message: Some(message),
                ..
            } if is_informative(message) => message.trim().to_string(),
            ActionError::Application { .. } | ActionError::Transport(_) => fallback.to_string(),
            ActionError::MissingAnalysis => MISSING_ANALYSIS_MESSAGE.to_string(),
        }
    }
}

fn is_informative(message: &str) -> bool {
    let trimmed = message.trim();
    !trimmed.is_empty()
        && !GENERIC_MESSAGES
            .iter()
            .any(|generic| trimmed.eq_ignore_ascii_case(generic))
}
