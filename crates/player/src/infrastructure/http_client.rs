//! reqwest client for the character endpoint

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, Response};
use serde_json::Value;

use charsheet_shared::{CharacterDocument, CharacterEnvelope};

use crate::config::PlayerConfig;
use crate::ports::outbound::{ApiError, CharacterApiPort};

/// HTTP adapter for [`CharacterApiPort`].
///
/// Load and save share one endpoint; `GET` reads, `POST` writes.
#[derive(Clone)]
pub struct CharacterApiClient {
    client: Client,
    endpoint: String,
}

impl CharacterApiClient {
    pub fn new(endpoint: &str, timeout: Duration) -> Self {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .unwrap_or_else(|_| Client::new());

        Self {
            client,
            endpoint: endpoint.trim_end_matches('/').to_string(),
        }
    }

    pub fn from_config(config: &PlayerConfig) -> Self {
        Self::new(&config.api_url, config.request_timeout)
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    async fn ensure_success(response: Response) -> Result<Response, ApiError> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }
        let error_text = response.text().await.map_err(map_send_error)?;
        Err(ApiError::status(status.as_u16(), error_text))
    }
}

fn map_send_error(e: reqwest::Error) -> ApiError {
    if e.is_timeout() {
        ApiError::Timeout
    } else {
        ApiError::RequestFailed(e.to_string())
    }
}

fn map_decode_error(e: reqwest::Error) -> ApiError {
    if e.is_timeout() {
        ApiError::Timeout
    } else {
        ApiError::invalid_response(e)
    }
}

#[async_trait]
impl CharacterApiPort for CharacterApiClient {
    async fn fetch_character(&self) -> Result<CharacterDocument, ApiError> {
        tracing::debug!(endpoint = %self.endpoint, "GET character");

        let response = self
            .client
            .get(&self.endpoint)
            .send()
            .await
            .map_err(map_send_error)?;
        let response = Self::ensure_success(response).await?;

        let envelope: CharacterEnvelope = response.json().await.map_err(map_decode_error)?;
        Ok(envelope.body)
    }

    async fn save_character(&self, document: &CharacterDocument) -> Result<Value, ApiError> {
        tracing::debug!(endpoint = %self.endpoint, name = %document.name, "POST character");

        let response = self
            .client
            .post(&self.endpoint)
            .json(document)
            .send()
            .await
            .map_err(map_send_error)?;
        let response = Self::ensure_success(response).await?;

        response.json().await.map_err(map_decode_error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trailing_slash_is_trimmed() {
        let client = CharacterApiClient::new("http://localhost:3000/api/character/", Duration::from_secs(1));
        assert_eq!(client.endpoint(), "http://localhost:3000/api/character");
    }

    #[test]
    fn from_config_uses_configured_url() {
        let config = PlayerConfig {
            api_url: "http://example.test/sheet".to_string(),
            ..PlayerConfig::default()
        };
        assert_eq!(
            CharacterApiClient::from_config(&config).endpoint(),
            "http://example.test/sheet"
        );
    }

    #[tokio::test]
    async fn unreachable_server_is_a_request_failure() {
        // Port 9 (discard) on localhost is closed in test environments.
        let client = CharacterApiClient::new("http://127.0.0.1:9/character", Duration::from_secs(2));
        let err = client.fetch_character().await.expect_err("no server");
        assert!(matches!(err, ApiError::RequestFailed(_) | ApiError::Timeout));
    }
}
