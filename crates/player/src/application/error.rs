//! Service layer error types
//!
//! Wraps domain validation failures and transport errors so the form can show
//! a single message for either.

use charsheet_domain::DomainError;

use crate::ports::outbound::ApiError;

/// Errors that can occur in service operations
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ServiceError {
    /// The sheet is not in a savable state
    #[error("{0}")]
    Validation(#[from] DomainError),

    /// The character API could not be reached or answered badly
    #[error("Character API error: {0}")]
    Api(#[from] ApiError),
}

impl ServiceError {
    /// Check if this is a validation error (no request was sent)
    pub fn is_validation(&self) -> bool {
        matches!(self, ServiceError::Validation(_))
    }

    /// User-facing text for the form's status banner
    pub fn user_message(&self) -> String {
        match self {
            ServiceError::Validation(DomainError::Validation(message)) => message.clone(),
            ServiceError::Validation(other) => other.to_string(),
            ServiceError::Api(ApiError::Timeout) => {
                "The character server did not respond in time".to_string()
            }
            ServiceError::Api(other) => format!("Could not reach the character server: {other}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_message_is_shown_verbatim() {
        let err = ServiceError::from(DomainError::validation("Please enter a character name"));
        assert!(err.is_validation());
        assert_eq!(err.user_message(), "Please enter a character name");
    }

    #[test]
    fn api_errors_mention_the_server() {
        let err = ServiceError::from(ApiError::status(503, "maintenance"));
        assert!(!err.is_validation());
        assert_eq!(
            err.user_message(),
            "Could not reach the character server: HTTP 503: maintenance"
        );
        assert_eq!(err.to_string(), "Character API error: HTTP 503: maintenance");
    }

    #[test]
    fn timeouts_get_their_own_message() {
        let err = ServiceError::from(ApiError::Timeout);
        assert_eq!(err.user_message(), "The character server did not respond in time");
    }
}
