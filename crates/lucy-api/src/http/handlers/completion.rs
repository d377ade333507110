//! Stateless completion endpoint.
//!
//! `POST /completion` sends one message straight to the provider without
//! touching the transcript. Provider failures are absorbed into the
//! fallback reply, so this handler only fails on a bad request body.

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::Json;
use serde::Deserialize;
use serde_json::{json, Value};

use crate::http::error::AppError;
use crate::state::AppState;

/// Request body for `POST /completion`.
#[derive(Debug, Deserialize)]
pub struct CompletionRequestBody {
    pub message: String,
}

/// POST /completion - one-shot completion, no persistence.
pub async fn direct_completion(
    State(state): State<AppState>,
    body: Result<Json<CompletionRequestBody>, JsonRejection>,
) -> Result<Json<Value>, AppError> {
    let Json(request) =
        body.map_err(|_| AppError::Validation("Message is required".to_string()))?;

    let response = state.conversation.direct_completion(&request.message).await;
    Ok(Json(json!({ "response": response })))
}
