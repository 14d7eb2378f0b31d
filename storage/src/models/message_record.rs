//! Message record model for persistence.
//!
//! Maps to the `messages` table and is used by MessageRepository. The id is
//! assigned by the database (monotonic AUTOINCREMENT); `read_at` starts NULL
//! and is set at most once by mark_read.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct MessageRecord {
    pub id: i64,
    pub from_username: String,
    pub to_username: String,
    pub body: String,
    pub sent_at: DateTime<Utc>,
    pub read_at: Option<DateTime<Utc>>,
}
