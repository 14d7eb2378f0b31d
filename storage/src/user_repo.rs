//! User repository: persistence and queries for user accounts.
//!
//! Uses SqlitePoolManager and the UserRecord model. External: SQLite via
//! sqlx; callers use save/get_user_by_username/get_all_users etc.

use crate::error::StorageError;
use crate::models::UserRecord;
use crate::sqlite_pool::SqlitePoolManager;
use chrono::{DateTime, Utc};
use tracing::info;

#[derive(Clone)]
pub struct UserRepository {
    pool_manager: SqlitePoolManager,
}

impl UserRepository {
    /// Creates the repository and its table. Construct this before
    /// [`crate::MessageRepository`]: the `messages` table references `users`.
    pub async fn new(pool_manager: SqlitePoolManager) -> Result<Self, sqlx::Error> {
        let repo = Self { pool_manager };
        repo.init().await?;
        Ok(repo)
    }

    async fn init(&self) -> Result<(), sqlx::Error> {
        info!("Creating users table if not exists");

        let pool = self.pool_manager.pool();

        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS users (
                username TEXT PRIMARY KEY,
                password_hash TEXT NOT NULL,
                first_name TEXT NOT NULL,
                last_name TEXT NOT NULL,
                phone TEXT NOT NULL,
                join_at TEXT NOT NULL,
                last_login_at TEXT NOT NULL
            )
            "#,
        )
        .execute(pool)
        .await?;

        Ok(())
    }

    /// Inserts a new user row; a taken username yields
    /// [`StorageError::AlreadyExists`].
    pub async fn save(&self, user: &UserRecord) -> Result<(), StorageError> {
        let pool = self.pool_manager.pool();

        sqlx::query(
            r#"
            INSERT INTO users (username, password_hash, first_name, last_name, phone, join_at, last_login_at)
            VALUES (?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(&user.username)
        .bind(&user.password_hash)
        .bind(&user.first_name)
        .bind(&user.last_name)
        .bind(&user.phone)
        .bind(user.join_at)
        .bind(user.last_login_at)
        .execute(pool)
        .await
        .map_err(|e| StorageError::from_sqlx(e, &format!("user {}", user.username)))?;

        info!("Saved user: username={}", user.username);
        Ok(())
    }

    pub async fn get_user_by_username(
        &self,
        username: &str,
    ) -> Result<Option<UserRecord>, StorageError> {
        let pool = self.pool_manager.pool();

        let user = sqlx::query_as::<_, UserRecord>("SELECT * FROM users WHERE username = ?")
            .bind(username)
            .fetch_optional(pool)
            .await
            .map_err(|e| StorageError::from_sqlx(e, username))?;

        Ok(user)
    }

    pub async fn get_all_users(&self) -> Result<Vec<UserRecord>, StorageError> {
        let pool = self.pool_manager.pool();

        let users = sqlx::query_as::<_, UserRecord>("SELECT * FROM users ORDER BY username")
            .fetch_all(pool)
            .await
            .map_err(|e| StorageError::from_sqlx(e, "users"))?;

        info!("Retrieved {} users", users.len());
        Ok(users)
    }

    /// Updates last_login_at; [`StorageError::NotFound`] when no such user.
    pub async fn touch_last_login(
        &self,
        username: &str,
        at: DateTime<Utc>,
    ) -> Result<(), StorageError> {
        let pool = self.pool_manager.pool();

        let result = sqlx::query("UPDATE users SET last_login_at = ? WHERE username = ?")
            .bind(at)
            .bind(username)
            .execute(pool)
            .await
            .map_err(|e| StorageError::from_sqlx(e, username))?;

        if result.rows_affected() == 0 {
            return Err(StorageError::NotFound(format!("user {}", username)));
        }

        info!("Touched last login: username={}", username);
        Ok(())
    }
}
