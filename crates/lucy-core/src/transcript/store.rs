//! TranscriptStore trait definition.
//!
//! The transcript is a single global, append-only sequence of messages.
//! Records are never edited; the only mutations are append and clear-all.

use lucy_types::error::StoreError;
use lucy_types::message::{Message, Sender};

/// Store trait for conversation transcript persistence.
///
/// Implementations live in lucy-infra (e.g., `SqliteTranscriptStore`).
/// Uses native async fn in traits (RPITIT, Rust 2024 edition).
pub trait TranscriptStore: Send + Sync {
    /// All messages in conversation order: ascending `created_at`, with
    /// insertion order breaking ties. An empty transcript yields an empty
    /// Vec, never an error.
    fn list_all(&self) -> impl std::future::Future<Output = Result<Vec<Message>, StoreError>> + Send;

    /// Persist a new message, assigning its id and creation timestamp.
    /// Returns the record exactly as persisted.
    fn append(
        &self,
        content: &str,
        sender: Sender,
    ) -> impl std::future::Future<Output = Result<Message, StoreError>> + Send;

    /// Remove every message. Succeeds (as a no-op) on an empty transcript.
    fn clear(&self) -> impl std::future::Future<Output = Result<(), StoreError>> + Send;

    /// Number of stored messages, reflecting every previously completed
    /// append and clear.
    fn count(&self) -> impl std::future::Future<Output = Result<u64, StoreError>> + Send;
}
