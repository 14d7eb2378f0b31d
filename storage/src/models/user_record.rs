//! User record model for persistence.
//!
//! Maps to the `users` table and is used by UserRepository. Carries the
//! password hash; callers that expose users publicly must project it away.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct UserRecord {
    pub username: String,
    pub password_hash: String,
    pub first_name: String,
    pub last_name: String,
    pub phone: String,
    pub join_at: DateTime<Utc>,
    pub last_login_at: DateTime<Utc>,
}

impl UserRecord {
    /// Creates a new record with join and last-login timestamps set to now.
    pub fn new(
        username: String,
        password_hash: String,
        first_name: String,
        last_name: String,
        phone: String,
    ) -> Self {
        let now = Utc::now();
        Self {
            username,
            password_hash,
            first_name,
            last_name,
            phone,
            join_at: now,
            last_login_at: now,
        }
    }
}
