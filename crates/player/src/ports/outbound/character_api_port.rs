//! Character API Port - Object-safe boundary to the remote character store
//!
//! The application layer only talks to this trait, so the HTTP adapter can be
//! swapped for a mock in tests and the form never depends on reqwest.

use serde_json::Value;

use charsheet_shared::CharacterDocument;

/// Errors raised at the HTTP boundary.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ApiError {
    /// Request could not be sent or the connection dropped
    #[error("Request failed: {0}")]
    RequestFailed(String),

    /// No response within the configured timeout
    #[error("Request timed out")]
    Timeout,

    /// Server answered with a non-success status
    #[error("HTTP {status}: {message}")]
    Status { status: u16, message: String },

    /// Body was not the JSON we expected
    #[error("Invalid response: {0}")]
    InvalidResponse(String),
}

impl ApiError {
    pub fn status(status: u16, message: impl Into<String>) -> Self {
        Self::Status {
            status,
            message: message.into(),
        }
    }

    pub fn invalid_response(message: impl ToString) -> Self {
        Self::InvalidResponse(message.to_string())
    }
}

#[cfg_attr(any(test, feature = "testing"), mockall::automock)]
#[async_trait::async_trait]
pub trait CharacterApiPort: Send + Sync {
    /// `GET` the stored character, unwrapped from its `{ "body": ... }` envelope.
    async fn fetch_character(&self) -> Result<CharacterDocument, ApiError>;

    /// `POST` the full character document. Returns the decoded response body.
    async fn save_character(&self, document: &CharacterDocument) -> Result<Value, ApiError>;
}
