//! HTTP client for the Gemini `generateContent` API.

use std::sync::Arc;
use std::time::Duration;

use secrecy::{ExposeSecret, SecretString};
use tracing::instrument;

use crate::config::GeminiConfig;

use super::error::GeminiError;
use super::types::{GenerateContentRequest, GenerateContentResponse};

/// Bounded connect timeout for the outbound call.
const CONNECT_TIMEOUT: Duration = Duration::from_secs(5);
/// Bounded total request timeout. Timeouts surface as a retryable-by-caller
/// failure; no retry happens here.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Gemini API client.
///
/// Cheaply cloneable; the underlying `reqwest::Client` and configuration
/// are shared behind an `Arc`.
#[derive(Clone)]
pub struct GeminiClient {
    inner: Arc<GeminiClientInner>,
}

struct GeminiClientInner {
    client: reqwest::Client,
    endpoint: String,
    model: String,
    api_key: Option<SecretString>,
}

impl GeminiClient {
    /// Create a new Gemini client.
    ///
    /// A missing API key is not an error here; it only fails the first
    /// [`GeminiClient::generate_reply`] call.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client fails to build.
    pub fn new(config: &GeminiConfig) -> Result<Self, GeminiError> {
        let client = reqwest::Client::builder()
            .connect_timeout(CONNECT_TIMEOUT)
            .timeout(REQUEST_TIMEOUT)
            .build()?;

        Ok(Self {
            inner: Arc::new(GeminiClientInner {
                client,
                endpoint: config.endpoint.trim_end_matches('/').to_string(),
                model: config.model.clone(),
                api_key: config.api_key.clone(),
            }),
        })
    }

    /// Generate a reply for the given prompt.
    ///
    /// # Errors
    ///
    /// - [`GeminiError::MissingApiKey`] when no key is configured
    /// - [`GeminiError::Http`] on transport failures and timeouts
    /// - [`GeminiError::Api`] on non-success responses
    /// - [`GeminiError::Parse`] / [`GeminiError::EmptyReply`] when the
    ///   response carries no usable text
    #[instrument(skip(self, prompt), fields(model = %self.inner.model))]
    pub async fn generate_reply(&self, prompt: &str) -> Result<String, GeminiError> {
        let api_key = self
            .inner
            .api_key
            .as_ref()
            .ok_or(GeminiError::MissingApiKey)?;

        let url = format!(
            "{}/v1beta/models/{}:generateContent",
            self.inner.endpoint, self.inner.model
        );
        let request = GenerateContentRequest::from_prompt(prompt);

        let response = self
            .inner
            .client
            .post(&url)
            .query(&[("key", api_key.expose_secret())])
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(GeminiError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let body = response.text().await?;
        let parsed: GenerateContentResponse = serde_json::from_str(&body)
            .map_err(|e| GeminiError::Parse(format!("Failed to parse response: {e}")))?;

        parsed.first_text().ok_or(GeminiError::EmptyReply)
    }
}

#[cfg(test)]
mod tests {
    use crate::config::GeminiConfig;

    use super::*;

    fn config_with_key(endpoint: &str) -> GeminiConfig {
        GeminiConfig {
            api_key: Some(SecretString::from("test-key")),
            model: "gemini-1.5-flash".to_string(),
            endpoint: endpoint.to_string(),
        }
    }

    #[tokio::test]
    async fn test_missing_api_key_fails_at_call_time() {
        let client = GeminiClient::new(&GeminiConfig::unconfigured()).expect("client");
        let err = client.generate_reply("hi").await.expect_err("must fail");
        assert!(matches!(err, GeminiError::MissingApiKey));
    }

    #[tokio::test]
    async fn test_generate_reply_returns_first_text() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("POST", "/v1beta/models/gemini-1.5-flash:generateContent")
            .match_query(mockito::Matcher::UrlEncoded(
                "key".into(),
                "test-key".into(),
            ))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(
                r#"{"candidates":[{"content":{"parts":[{"text":"Here are two picks."}]}}]}"#,
            )
            .create_async()
            .await;

        let client = GeminiClient::new(&config_with_key(&server.url())).expect("client");
        let reply = client.generate_reply("recommend books").await.expect("reply");
        assert_eq!(reply, "Here are two picks.");
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_api_error_carries_status_and_body() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("POST", "/v1beta/models/gemini-1.5-flash:generateContent")
            .match_query(mockito::Matcher::Any)
            .with_status(429)
            .with_body("quota exhausted")
            .create_async()
            .await;

        let client = GeminiClient::new(&config_with_key(&server.url())).expect("client");
        let err = client.generate_reply("hi").await.expect_err("must fail");
        match err {
            GeminiError::Api { status, message } => {
                assert_eq!(status, 429);
                assert_eq!(message, "quota exhausted");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_blank_candidates_are_an_empty_reply() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("POST", "/v1beta/models/gemini-1.5-flash:generateContent")
            .match_query(mockito::Matcher::Any)
            .with_status(200)
            .with_body(r#"{"candidates":[]}"#)
            .create_async()
            .await;

        let client = GeminiClient::new(&config_with_key(&server.url())).expect("client");
        let err = client.generate_reply("hi").await.expect_err("must fail");
        assert!(matches!(err, GeminiError::EmptyReply));
    }

    #[test]
    fn test_gemini_client_is_clone() {
        fn assert_clone<T: Clone>() {}
        assert_clone::<GeminiClient>();
    }

    #[test]
    fn test_gemini_client_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<GeminiClient>();
    }
}
