//! Gemini generateContent API types.
//!
//! These are Gemini-specific request/response structures used for HTTP
//! communication with the `generateContent` endpoint. The response side is
//! deliberately lenient: every level is optional or defaulted so that a
//! surprising payload becomes a `None` extraction rather than a parse error.

use serde::{Deserialize, Serialize};

/// Request body for the Gemini generateContent API.
#[derive(Debug, Clone, Serialize)]
pub struct GeminiRequest {
    pub contents: Vec<GeminiRequestContent>,
}

/// A content block in a Gemini request.
#[derive(Debug, Clone, Serialize)]
pub struct GeminiRequestContent {
    pub parts: Vec<GeminiRequestPart>,
}

/// A text part in a Gemini request.
#[derive(Debug, Clone, Serialize)]
pub struct GeminiRequestPart {
    pub text: String,
}

impl GeminiRequest {
    /// Build the single-text request shape the widget uses.
    pub fn single_text(text: String) -> Self {
        Self {
            contents: vec![GeminiRequestContent {
                parts: vec![GeminiRequestPart { text }],
            }],
        }
    }
}

/// Response body for the Gemini generateContent API.
#[derive(Debug, Clone, Deserialize)]
pub struct GeminiResponse {
    #[serde(default)]
    pub candidates: Vec<GeminiCandidate>,
}

/// A candidate completion in a Gemini response.
#[derive(Debug, Clone, Deserialize)]
pub struct GeminiCandidate {
    pub content: Option<GeminiResponseContent>,
}

/// The content object inside a candidate.
#[derive(Debug, Clone, Deserialize)]
pub struct GeminiResponseContent {
    #[serde(default)]
    pub parts: Vec<GeminiResponsePart>,
}

/// A part inside a candidate's content.
#[derive(Debug, Clone, Deserialize)]
pub struct GeminiResponsePart {
    pub text: Option<String>,
}

impl GeminiResponse {
    /// Text of the first part of the first candidate, if every level is
    /// present (`candidates[0].content.parts[0].text`).
    pub fn into_first_text(self) -> Option<String> {
        self.candidates
            .into_iter()
            .next()?
            .content?
            .parts
            .into_iter()
            .next()?
            .text
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_serializes_contents_parts_text() {
        let request = GeminiRequest::single_text("Hello".to_string());
        let json = serde_json::to_string(&request).unwrap();
        assert_eq!(json, r#"{"contents":[{"parts":[{"text":"Hello"}]}]}"#);
    }

    #[test]
    fn test_response_first_text_extraction() {
        let json = r#"{
            "candidates": [
                {"content": {"parts": [{"text": "Hi there!"}, {"text": "ignored"}]}}
            ]
        }"#;
        let response: GeminiResponse = serde_json::from_str(json).unwrap();
        assert_eq!(response.into_first_text().as_deref(), Some("Hi there!"));
    }

    #[test]
    fn test_response_without_candidates() {
        let response: GeminiResponse = serde_json::from_str("{}").unwrap();
        assert!(response.into_first_text().is_none());
    }

    #[test]
    fn test_response_candidate_without_content() {
        let json = r#"{"candidates": [{"finishReason": "SAFETY"}]}"#;
        let response: GeminiResponse = serde_json::from_str(json).unwrap();
        assert!(response.into_first_text().is_none());
    }

    #[test]
    fn test_response_part_without_text() {
        let json = r#"{"candidates": [{"content": {"parts": [{"inlineData": {}}]}}]}"#;
        let response: GeminiResponse = serde_json::from_str(json).unwrap();
        assert!(response.into_first_text().is_none());
    }
}
