//! HTTP error mapping.
//!
//! [`AppError`] is the single error type handlers return. Its
//! `IntoResponse` impl decides which failures are the caller's fault
//! (400 with a descriptive message) and which are ours (500 with a
//! generic message; the detail goes to the log, not the wire).

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;

use lucy_types::error::{ConversationError, StoreError};

/// Application-level error for the HTTP surface.
#[derive(Debug)]
pub enum AppError {
    /// The request body failed validation before reaching the service.
    Validation(String),
    /// The conversation service rejected or failed the operation.
    Conversation(ConversationError),
    /// The transcript store failed outside the conversation service.
    Storage(StoreError),
}

impl From<ConversationError> for AppError {
    fn from(err: ConversationError) -> Self {
        Self::Conversation(err)
    }
}

impl From<StoreError> for AppError {
    fn from(err: StoreError) -> Self {
        Self::Storage(err)
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            AppError::Validation(msg) => (StatusCode::BAD_REQUEST, msg),
            AppError::Conversation(ConversationError::EmptyTurn) => (
                StatusCode::BAD_REQUEST,
                "Message content is required".to_string(),
            ),
            AppError::Conversation(ConversationError::LimitReached) => {
                (StatusCode::BAD_REQUEST, "limit reached".to_string())
            }
            AppError::Conversation(ConversationError::Store(e)) | AppError::Storage(e) => {
                tracing::error!(error = %e, "transcript store failure");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error".to_string(),
                )
            }
        };

        (status, Json(json!({ "error": message }))).into_response()
    }
}
