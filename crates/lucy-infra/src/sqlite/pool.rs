//! Split reader/writer SQLite pools for the transcript database.
//!
//! SQLite serializes writers, so the writer pool holds exactly one
//! connection while the reader pool fans out for concurrent SELECTs.
//! Both run in WAL journal mode with foreign keys on and a bounded busy
//! timeout. Migrations run on the writer before the reader opens.

use std::str::FromStr;
use std::time::Duration;

use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePool, SqlitePoolOptions};

/// Paired SQLite pools: `reader` for queries, `writer` for mutations.
#[derive(Clone)]
pub struct DatabasePool {
    pub reader: SqlitePool,
    pub writer: SqlitePool,
}

impl DatabasePool {
    const READER_CONNECTIONS: u32 = 8;
    const BUSY_TIMEOUT: Duration = Duration::from_secs(5);

    /// Open both pools against `database_url`, creating the database file
    /// if needed, and run pending migrations.
    pub async fn new(database_url: &str) -> Result<Self, sqlx::Error> {
        let options = SqliteConnectOptions::from_str(database_url)?
            .journal_mode(SqliteJournalMode::Wal)
            .foreign_keys(true)
            .busy_timeout(Self::BUSY_TIMEOUT)
            .create_if_missing(true);

        let writer = SqlitePoolOptions::new()
            .max_connections(1)
            .connect_with(options.clone())
            .await?;

        // Migrations must land before any reader connects
        sqlx::migrate!("../../migrations").run(&writer).await?;

        let reader = SqlitePoolOptions::new()
            .max_connections(Self::READER_CONNECTIONS)
            .connect_with(options.read_only(true))
            .await?;

        Ok(Self { reader, writer })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn open_pool(name: &str) -> DatabasePool {
        let dir = tempfile::tempdir().unwrap();
        let url = format!("sqlite://{}?mode=rwc", dir.path().join(name).display());
        std::mem::forget(dir);
        DatabasePool::new(&url).await.unwrap()
    }

    #[tokio::test]
    async fn test_migrations_create_messages_table() {
        let pool = open_pool("migrate.db").await;

        let (count,): (i64,) = sqlx::query_as(
            "SELECT COUNT(*) FROM sqlite_master WHERE type = 'table' AND name = 'messages'",
        )
        .fetch_one(&pool.reader)
        .await
        .unwrap();

        assert_eq!(count, 1, "messages table missing");
    }

    #[tokio::test]
    async fn test_journal_mode_is_wal() {
        let pool = open_pool("wal.db").await;

        let (mode,): (String,) = sqlx::query_as("PRAGMA journal_mode")
            .fetch_one(&pool.writer)
            .await
            .unwrap();

        assert_eq!(mode.to_lowercase(), "wal");
    }

    #[tokio::test]
    async fn test_sender_check_constraint_rejects_unknown() {
        let pool = open_pool("check.db").await;

        let result = sqlx::query(
            "INSERT INTO messages (id, content, sender, created_at) \
             VALUES ('x', 'hi', 'bot', '2026-01-01T00:00:00+00:00')",
        )
        .execute(&pool.writer)
        .await;

        assert!(result.is_err(), "unknown sender should violate CHECK");
    }

    #[tokio::test]
    async fn test_reader_pool_is_read_only() {
        let pool = open_pool("ro.db").await;

        let result = sqlx::query("DELETE FROM messages")
            .execute(&pool.reader)
            .await;

        assert!(result.is_err(), "reader pool should refuse writes");
    }
}
