//! CompletionProvider trait definition.
//!
//! This is the abstraction the conversation controller talks to for
//! generating assistant replies. Uses native async fn in traits (RPITIT,
//! Rust 2024 edition).

use lucy_types::completion::CompletionError;

/// Trait for text-completion backends (Gemini, test doubles, etc.).
///
/// A provider takes one user message and produces one reply. Failures are
/// reported as [`CompletionError`] values; the caller decides how to
/// degrade. Implementations live in lucy-infra (e.g., `GeminiProvider`).
pub trait CompletionProvider: Send + Sync {
    /// Human-readable provider name (e.g., "gemini").
    fn name(&self) -> &str;

    /// Send a single message and receive the completion text.
    fn complete(
        &self,
        message: &str,
    ) -> impl std::future::Future<Output = Result<String, CompletionError>> + Send;
}
