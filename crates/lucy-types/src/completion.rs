//! Completion provider error taxonomy.
//!
//! The provider reports failures through these variants; the
//! conversation controller converts any of them into the canonical fallback
//! reply, so they reach operators (logs) but never end users.

use thiserror::Error;

/// Errors from a completion provider backend.
#[derive(Debug, Error)]
pub enum CompletionError {
    #[error("completion request failed: {0}")]
    Http(String),

    #[error("completion request timed out")]
    Timeout,

    #[error("malformed provider response: {0}")]
    MalformedResponse(String),
}
