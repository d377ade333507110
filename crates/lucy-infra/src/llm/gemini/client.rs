//! GeminiProvider -- concrete [`CompletionProvider`] implementation for
//! Google Gemini.
//!
//! Sends requests to the `generateContent` endpoint with the API key passed
//! as a query parameter (that API's authentication scheme). Single attempt
//! per call, no retries; the HTTP client carries a bounded timeout so a
//! stalled upstream becomes a provider failure rather than a hung request.
//!
//! The API key is wrapped in [`secrecy::SecretString`] and is never logged
//! or included in `Debug` output.

use std::time::Duration;

use secrecy::{ExposeSecret, SecretString};

use lucy_core::completion::provider::CompletionProvider;
use lucy_types::completion::CompletionError;

use super::types::{GeminiRequest, GeminiResponse};

/// Google Gemini completion provider.
///
/// Implements [`CompletionProvider`] for the Gemini generateContent API.
///
/// # API Key Security
///
/// The API key is stored as a [`SecretString`] and is only exposed when
/// attaching the `key` query parameter to an outgoing request. It never
/// appears in Debug output, Display output, or tracing logs.
pub struct GeminiProvider {
    client: reqwest::Client,
    api_key: SecretString,
    base_url: String,
    model: String,
}

impl GeminiProvider {
    /// The model the widget converses with.
    const DEFAULT_MODEL: &'static str = "gemini-1.5-flash";

    /// Persona instruction wrapped around every outgoing message.
    const PERSONA_PREAMBLE: &'static str =
        "You are Lucy, a helpful AI assistant. Please respond to this message in a friendly and helpful way: ";

    /// Create a new Gemini provider.
    ///
    /// # Arguments
    ///
    /// * `api_key` - Gemini API key wrapped in SecretString
    pub fn new(api_key: SecretString) -> Self {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .expect("failed to create reqwest client");

        Self {
            client,
            api_key,
            base_url: "https://generativelanguage.googleapis.com".to_string(),
            model: Self::DEFAULT_MODEL.to_string(),
        }
    }

    /// The model this provider sends requests to.
    pub fn model(&self) -> &str {
        &self.model
    }

    /// Override the base URL (useful for testing or proxies).
    #[allow(dead_code)]
    pub fn with_base_url(mut self, base_url: String) -> Self {
        self.base_url = base_url;
        self
    }

    /// Build the full generateContent URL for the configured model.
    fn url(&self) -> String {
        format!(
            "{}/v1beta/models/{}:generateContent",
            self.base_url, self.model
        )
    }

    /// Frame the raw user message in the persona instruction.
    fn frame_prompt(message: &str) -> String {
        format!("{}{}", Self::PERSONA_PREAMBLE, message)
    }
}

// GeminiProvider intentionally does NOT derive Debug so the SecretString
// field can never be printed through the provider.

impl CompletionProvider for GeminiProvider {
    fn name(&self) -> &str {
        "gemini"
    }

    async fn complete(&self, message: &str) -> Result<String, CompletionError> {
        let body = GeminiRequest::single_text(Self::frame_prompt(message));

        let response = self
            .client
            .post(self.url())
            .query(&[("key", self.api_key.expose_secret())])
            .header("content-type", "application/json")
            .json(&body)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    CompletionError::Timeout
                } else {
                    CompletionError::Http(format!("HTTP request failed: {e}"))
                }
            })?;

        let status = response.status();
        if !status.is_success() {
            let error_body = response.text().await.unwrap_or_default();
            return Err(CompletionError::Http(format!("HTTP {status}: {error_body}")));
        }

        let gemini_resp: GeminiResponse = response.json().await.map_err(|e| {
            CompletionError::MalformedResponse(format!("failed to parse response: {e}"))
        })?;

        gemini_resp.into_first_text().ok_or_else(|| {
            CompletionError::MalformedResponse("no candidate text in response".to_string())
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_provider() -> GeminiProvider {
        GeminiProvider::new(SecretString::from("test-key-not-real"))
    }

    #[test]
    fn test_provider_name() {
        let provider = make_provider();
        assert_eq!(provider.name(), "gemini");
    }

    #[test]
    fn test_default_model_and_url() {
        let provider = make_provider();
        assert_eq!(provider.model(), "gemini-1.5-flash");
        assert_eq!(
            provider.url(),
            "https://generativelanguage.googleapis.com/v1beta/models/gemini-1.5-flash:generateContent"
        );
    }

    #[test]
    fn test_base_url_override() {
        let provider = make_provider().with_base_url("http://localhost:8080".to_string());
        assert_eq!(
            provider.url(),
            "http://localhost:8080/v1beta/models/gemini-1.5-flash:generateContent"
        );
    }

    #[test]
    fn test_frame_prompt_wraps_persona() {
        let framed = GeminiProvider::frame_prompt("What are your business hours?");
        assert!(framed.starts_with("You are Lucy, a helpful AI assistant."));
        assert!(framed.ends_with("What are your business hours?"));
    }

    #[test]
    fn test_url_never_contains_key() {
        let provider = make_provider();
        assert!(!provider.url().contains("test-key-not-real"));
    }
}
