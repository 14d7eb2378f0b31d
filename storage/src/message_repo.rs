//! Message repository: persistence and queries for messages.
//!
//! Uses SqlitePoolManager and the MessageRecord model. External: SQLite via
//! sqlx; callers use create/get_message_by_id/mark_read/get_messages_to etc.
//! Ids are assigned by AUTOINCREMENT and therefore monotonic.

use crate::error::StorageError;
use crate::models::MessageRecord;
use crate::sqlite_pool::SqlitePoolManager;
use chrono::{DateTime, Utc};
use tracing::info;

#[derive(Clone)]
pub struct MessageRepository {
    pool_manager: SqlitePoolManager,
}

impl MessageRepository {
    pub async fn new(pool_manager: SqlitePoolManager) -> Result<Self, sqlx::Error> {
        let repo = Self { pool_manager };
        repo.init().await?;
        Ok(repo)
    }

    async fn init(&self) -> Result<(), sqlx::Error> {
        info!("Creating messages table if not exists");

        let pool = self.pool_manager.pool();

        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS messages (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                from_username TEXT NOT NULL REFERENCES users(username),
                to_username TEXT NOT NULL REFERENCES users(username),
                body TEXT NOT NULL,
                sent_at TEXT NOT NULL,
                read_at TEXT
            )
            "#,
        )
        .execute(pool)
        .await?;

        sqlx::query(
            r#"
            CREATE INDEX IF NOT EXISTS idx_messages_from_username ON messages(from_username);
            CREATE INDEX IF NOT EXISTS idx_messages_to_username ON messages(to_username);
            "#,
        )
        .execute(pool)
        .await?;

        Ok(())
    }

    /// Inserts a message and returns the stored row with its assigned id.
    ///
    /// A correspondent that does not reference an existing user trips the
    /// foreign key and yields [`StorageError::InvalidReference`].
    pub async fn create(
        &self,
        from_username: &str,
        to_username: &str,
        body: &str,
        sent_at: DateTime<Utc>,
    ) -> Result<MessageRecord, StorageError> {
        let pool = self.pool_manager.pool();

        let result = sqlx::query(
            r#"
            INSERT INTO messages (from_username, to_username, body, sent_at, read_at)
            VALUES (?, ?, ?, ?, NULL)
            "#,
        )
        .bind(from_username)
        .bind(to_username)
        .bind(body)
        .bind(sent_at)
        .execute(pool)
        .await
        .map_err(|e| {
            StorageError::from_sqlx(e, &format!("message {} -> {}", from_username, to_username))
        })?;

        let id = result.last_insert_rowid();
        info!("Saved message: id={}, from={}, to={}", id, from_username, to_username);

        Ok(MessageRecord {
            id,
            from_username: from_username.to_string(),
            to_username: to_username.to_string(),
            body: body.to_string(),
            sent_at,
            read_at: None,
        })
    }

    pub async fn get_message_by_id(
        &self,
        id: i64,
    ) -> Result<Option<MessageRecord>, StorageError> {
        let pool = self.pool_manager.pool();

        let message = sqlx::query_as::<_, MessageRecord>("SELECT * FROM messages WHERE id = ?")
            .bind(id)
            .fetch_optional(pool)
            .await
            .map_err(|e| StorageError::from_sqlx(e, &format!("message {}", id)))?;

        Ok(message)
    }

    /// Sets read_at if it is still NULL, then returns the row.
    ///
    /// The `read_at IS NULL` guard makes the transition one-shot: marking an
    /// already-read message leaves the original timestamp in place, and
    /// concurrent markers race harmlessly (first writer wins). `None` when
    /// no message has that id.
    pub async fn mark_read(
        &self,
        id: i64,
        at: DateTime<Utc>,
    ) -> Result<Option<MessageRecord>, StorageError> {
        let pool = self.pool_manager.pool();

        let result = sqlx::query("UPDATE messages SET read_at = ? WHERE id = ? AND read_at IS NULL")
            .bind(at)
            .bind(id)
            .execute(pool)
            .await
            .map_err(|e| StorageError::from_sqlx(e, &format!("message {}", id)))?;

        if result.rows_affected() > 0 {
            info!("Marked message read: id={}", id);
        }

        self.get_message_by_id(id).await
    }

    /// All messages addressed to the given user, most recent first.
    pub async fn get_messages_to(
        &self,
        username: &str,
    ) -> Result<Vec<MessageRecord>, StorageError> {
        let pool = self.pool_manager.pool();

        let messages = sqlx::query_as::<_, MessageRecord>(
            "SELECT * FROM messages WHERE to_username = ? ORDER BY sent_at DESC",
        )
        .bind(username)
        .fetch_all(pool)
        .await
        .map_err(|e| StorageError::from_sqlx(e, username))?;

        info!("Retrieved {} messages to {}", messages.len(), username);
        Ok(messages)
    }

    /// All messages sent by the given user, most recent first.
    pub async fn get_messages_from(
        &self,
        username: &str,
    ) -> Result<Vec<MessageRecord>, StorageError> {
        let pool = self.pool_manager.pool();

        let messages = sqlx::query_as::<_, MessageRecord>(
            "SELECT * FROM messages WHERE from_username = ? ORDER BY sent_at DESC",
        )
        .bind(username)
        .fetch_all(pool)
        .await
        .map_err(|e| StorageError::from_sqlx(e, username))?;

        info!("Retrieved {} messages from {}", messages.len(), username);
        Ok(messages)
    }
}
