//! Transcript endpoints.
//!
//! - `GET /messages` lists the full transcript in chronological order.
//! - `POST /messages` submits a turn (or stores the greeting when the
//!   client flags `isGreeting`).
//! - `DELETE /messages` resets the conversation.

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::Json;
use serde::Deserialize;
use serde_json::{json, Value};

use lucy_types::message::Message;

use crate::http::error::AppError;
use crate::state::AppState;

/// Request body for `POST /messages`.
#[derive(Debug, Deserialize)]
pub struct SubmitMessageRequest {
    pub content: String,
    #[serde(default, rename = "isGreeting")]
    pub is_greeting: bool,
}

/// GET /messages - return every stored message, oldest first.
pub async fn list_messages(
    State(state): State<AppState>,
) -> Result<Json<Vec<Message>>, AppError> {
    let messages = state.conversation.transcript().await?;
    Ok(Json(messages))
}

/// POST /messages - run one conversational turn.
///
/// A missing or malformed body is the caller's fault, so the rejection
/// becomes a 400 instead of axum's default 422.
pub async fn submit_message(
    State(state): State<AppState>,
    body: Result<Json<SubmitMessageRequest>, JsonRejection>,
) -> Result<Json<Value>, AppError> {
    let Json(request) = body
        .map_err(|_| AppError::Validation("Message content is required".to_string()))?;

    if request.is_greeting {
        let bot_message = state.conversation.submit_greeting(&request.content).await?;
        return Ok(Json(json!({ "botMessage": bot_message })));
    }

    let turn = state.conversation.submit_turn(&request.content).await?;
    Ok(Json(json!({
        "userMessage": turn.user,
        "botMessage": turn.assistant,
    })))
}

/// DELETE /messages - clear the transcript.
pub async fn clear_messages(State(state): State<AppState>) -> Result<Json<Value>, AppError> {
    state.conversation.reset().await?;
    Ok(Json(json!({ "message": "cleared" })))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_submit_request_parses_camel_case_flag() {
        let request: SubmitMessageRequest =
            serde_json::from_str(r#"{"content": "Hi there", "isGreeting": true}"#).unwrap();
        assert_eq!(request.content, "Hi there");
        assert!(request.is_greeting);
    }

    #[test]
    fn test_submit_request_greeting_flag_defaults_false() {
        let request: SubmitMessageRequest =
            serde_json::from_str(r#"{"content": "Hi there"}"#).unwrap();
        assert!(!request.is_greeting);
    }

    #[test]
    fn test_submit_request_requires_content() {
        let result = serde_json::from_str::<SubmitMessageRequest>(r#"{"isGreeting": false}"#);
        assert!(result.is_err());
    }
}
