//! Domain errors. Used by ports and use cases.
//!
//! Adapters map infrastructure errors into these.

use thiserror::Error;

/// Client-side rejection. Never reaches the network; `Display` is the user-facing text.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Class name cannot be empty.")]
    EmptyClassName,

    #[error("Please select a class.")]
    NoClassSelected,

    #[error("Please select at least one image to upload.")]
    NoImagesSelected,

    #[error("Please select an image to classify.")]
    NoImageToClassify,
}

/// Failure of a single Transport call.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TransportError {
    /// Error status carrying the backend's own `detail` text.
    #[error("backend error {status}: {detail}")]
    Backend { status: u16, detail: String },

    /// Error status without a usable `detail` field.
    #[error("HTTP error {status}")]
    Status { status: u16 },

    #[error("network error: {0}")]
    Network(String),

    /// Body could not be parsed or lacked the expected field.
    #[error("malformed response: {0}")]
    Decode(String),
}

impl TransportError {
    /// Backend detail message, if the server supplied one.
    pub fn detail(&self) -> Option<&str> {
        match self {
            Self::Backend { detail, .. } => Some(detail),
            _ => None,
        }
    }

    /// Detail text verbatim, otherwise the operation's fallback.
    pub fn user_message(&self, fallback: &str) -> String {
        self.detail().unwrap_or(fallback).to_string()
    }
}

/// Shell-level errors (startup, terminal, local files).
#[derive(Error, Debug)]
pub enum DomainError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Terminal UI error: {0}")]
    Ui(String),

    #[error("Image selection failed: {0}")]
    Picker(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_messages_are_user_text() {
        assert_eq!(
            ValidationError::EmptyClassName.to_string(),
            "Class name cannot be empty."
        );
        assert_eq!(
            ValidationError::NoClassSelected.to_string(),
            "Please select a class."
        );
        assert_eq!(
            ValidationError::NoImagesSelected.to_string(),
            "Please select at least one image to upload."
        );
        assert_eq!(
            ValidationError::NoImageToClassify.to_string(),
            "Please select an image to classify."
        );
    }

    #[test]
    fn user_message_prefers_backend_detail() {
        let err = TransportError::Backend {
            status: 400,
            detail: "Class 'cats' already exists.".into(),
        };
        assert_eq!(err.user_message("fallback"), "Class 'cats' already exists.");
    }

    #[test]
    fn user_message_falls_back_without_detail() {
        for err in [
            TransportError::Status { status: 500 },
            TransportError::Network("connection refused".into()),
            TransportError::Decode("missing field `message`".into()),
        ] {
            assert_eq!(err.detail(), None);
            assert_eq!(err.user_message("fallback"), "fallback");
        }
    }
}
