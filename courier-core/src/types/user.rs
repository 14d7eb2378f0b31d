//! User projections exposed by the directory.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use storage::UserRecord;

/// Public profile fields: what other users may see. No credential, no
/// account timestamps.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    pub username: String,
    pub first_name: String,
    pub last_name: String,
    pub phone: String,
}

/// Full user view: profile plus account timestamps. Only the owner gets this.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserDetail {
    pub username: String,
    pub first_name: String,
    pub last_name: String,
    pub phone: String,
    pub join_at: DateTime<Utc>,
    pub last_login_at: DateTime<Utc>,
}

/// Registration input. The raw password is consumed by the directory and
/// never stored.
#[derive(Debug, Clone)]
pub struct NewUser {
    pub username: String,
    pub password: String,
    pub first_name: String,
    pub last_name: String,
    pub phone: String,
}

impl From<UserRecord> for Profile {
    fn from(record: UserRecord) -> Self {
        Self {
            username: record.username,
            first_name: record.first_name,
            last_name: record.last_name,
            phone: record.phone,
        }
    }
}

impl From<UserRecord> for UserDetail {
    fn from(record: UserRecord) -> Self {
        Self {
            username: record.username,
            first_name: record.first_name,
            last_name: record.last_name,
            phone: record.phone,
            join_at: record.join_at,
            last_login_at: record.last_login_at,
        }
    }
}
