//! Message records and their enriched projections.
//!
//! A message moves through exactly one transition: created with `read_at`
//! unset, then marked read once. The list/detail projections replace the
//! counterparty username with an embedded [`Profile`].

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use storage::MessageRecord;

use super::user::Profile;

/// Bare message as created: usernames, not profiles.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Message {
    pub id: i64,
    pub from_username: String,
    pub to_username: String,
    pub body: String,
    pub sent_at: DateTime<Utc>,
    pub read_at: Option<DateTime<Utc>>,
}

/// Message with both correspondent profiles embedded (get-by-id view).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageDetail {
    pub id: i64,
    pub body: String,
    pub sent_at: DateTime<Utc>,
    pub read_at: Option<DateTime<Utc>>,
    pub from_user: Profile,
    pub to_user: Profile,
}

/// Inbound list entry: sender profile attached.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReceivedMessage {
    pub id: i64,
    pub body: String,
    pub sent_at: DateTime<Utc>,
    pub read_at: Option<DateTime<Utc>>,
    pub from_user: Profile,
}

/// Outbound list entry: recipient profile attached.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SentMessage {
    pub id: i64,
    pub body: String,
    pub sent_at: DateTime<Utc>,
    pub read_at: Option<DateTime<Utc>>,
    pub to_user: Profile,
}

/// Result of marking a message read: just the id and the set timestamp.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReadReceipt {
    pub id: i64,
    pub read_at: DateTime<Utc>,
}

/// Read access to a message's two correspondents.
///
/// The policy functions are generic over this so they apply to bare and
/// enriched message views alike.
pub trait Correspondents {
    fn sender(&self) -> &str;
    fn recipient(&self) -> &str;
}

impl Correspondents for Message {
    fn sender(&self) -> &str {
        &self.from_username
    }
    fn recipient(&self) -> &str {
        &self.to_username
    }
}

impl Correspondents for MessageDetail {
    fn sender(&self) -> &str {
        &self.from_user.username
    }
    fn recipient(&self) -> &str {
        &self.to_user.username
    }
}

impl Correspondents for MessageRecord {
    fn sender(&self) -> &str {
        &self.from_username
    }
    fn recipient(&self) -> &str {
        &self.to_username
    }
}

impl From<MessageRecord> for Message {
    fn from(record: MessageRecord) -> Self {
        Self {
            id: record.id,
            from_username: record.from_username,
            to_username: record.to_username,
            body: record.body,
            sent_at: record.sent_at,
            read_at: record.read_at,
        }
    }
}
