//! SQLite transcript store implementation.
//!
//! Implements `TranscriptStore` from `lucy-core` using sqlx with split
//! read/write pools: raw queries, a private Row struct, reads on the reader
//! pool and writes on the writer pool.

use chrono::{DateTime, Utc};
use lucy_core::transcript::store::TranscriptStore;
use lucy_types::error::StoreError;
use lucy_types::message::{Message, Sender};
use sqlx::Row;
use uuid::Uuid;

use super::pool::DatabasePool;

/// SQLite-backed implementation of `TranscriptStore`.
pub struct SqliteTranscriptStore {
    pool: DatabasePool,
}

impl SqliteTranscriptStore {
    /// Create a new store backed by the given database pool.
    pub fn new(pool: DatabasePool) -> Self {
        Self { pool }
    }
}

// ---------------------------------------------------------------------------
// Private Row type for SQLite-to-domain mapping
// ---------------------------------------------------------------------------

struct MessageRow {
    id: String,
    content: String,
    sender: String,
    created_at: String,
}

impl MessageRow {
    fn from_row(row: &sqlx::sqlite::SqliteRow) -> Result<Self, sqlx::Error> {
        Ok(Self {
            id: row.try_get("id")?,
            content: row.try_get("content")?,
            sender: row.try_get("sender")?,
            created_at: row.try_get("created_at")?,
        })
    }

    fn into_message(self) -> Result<Message, StoreError> {
        let id = Uuid::parse_str(&self.id)
            .map_err(|e| StoreError::Query(format!("invalid message id: {e}")))?;
        let sender: Sender = self
            .sender
            .parse()
            .map_err(|e: String| StoreError::Query(e))?;
        let created_at = parse_datetime(&self.created_at)?;

        Ok(Message {
            id,
            content: self.content,
            sender,
            created_at,
        })
    }
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn parse_datetime(s: &str) -> Result<DateTime<Utc>, StoreError> {
    DateTime::parse_from_rfc3339(s)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|e| StoreError::Query(format!("invalid datetime: {e}")))
}

fn format_datetime(dt: &DateTime<Utc>) -> String {
    dt.to_rfc3339()
}

// ---------------------------------------------------------------------------
// TranscriptStore implementation
// ---------------------------------------------------------------------------

impl TranscriptStore for SqliteTranscriptStore {
    async fn list_all(&self) -> Result<Vec<Message>, StoreError> {
        // rowid breaks created_at ties in insertion order
        let rows = sqlx::query(
            "SELECT id, content, sender, created_at FROM messages ORDER BY created_at ASC, rowid ASC",
        )
        .fetch_all(&self.pool.reader)
        .await
        .map_err(|e| StoreError::Query(e.to_string()))?;

        let mut messages = Vec::with_capacity(rows.len());
        for row in &rows {
            let message_row =
                MessageRow::from_row(row).map_err(|e| StoreError::Query(e.to_string()))?;
            messages.push(message_row.into_message()?);
        }

        Ok(messages)
    }

    async fn append(&self, content: &str, sender: Sender) -> Result<Message, StoreError> {
        let message = Message {
            id: Uuid::now_v7(),
            content: content.to_string(),
            sender,
            created_at: Utc::now(),
        };

        sqlx::query("INSERT INTO messages (id, content, sender, created_at) VALUES (?, ?, ?, ?)")
            .bind(message.id.to_string())
            .bind(&message.content)
            .bind(message.sender.to_string())
            .bind(format_datetime(&message.created_at))
            .execute(&self.pool.writer)
            .await
            .map_err(|e| StoreError::Query(e.to_string()))?;

        Ok(message)
    }

    async fn clear(&self) -> Result<(), StoreError> {
        sqlx::query("DELETE FROM messages")
            .execute(&self.pool.writer)
            .await
            .map_err(|e| StoreError::Query(e.to_string()))?;

        Ok(())
    }

    async fn count(&self) -> Result<u64, StoreError> {
        let row = sqlx::query("SELECT COUNT(*) as cnt FROM messages")
            .fetch_one(&self.pool.reader)
            .await
            .map_err(|e| StoreError::Query(e.to_string()))?;

        let count: i64 = row
            .try_get("cnt")
            .map_err(|e| StoreError::Query(e.to_string()))?;

        Ok(count as u64)
    }
}
