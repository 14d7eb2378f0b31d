//! Message service: orchestrates the message and user repositories.
//!
//! Operations here take no actor and perform no policy checks; the facade in
//! [`crate::api`] runs the policy functions first and only then calls in.

use std::collections::HashMap;

use chrono::Utc;
use storage::{MessageRepository, UserRepository};
use tracing::info;

use crate::error::{CourierError, Result};
use crate::types::{Message, MessageDetail, Profile, ReadReceipt, ReceivedMessage, SentMessage};

/// Message operations over injected repositories.
#[derive(Clone)]
pub struct MessageService {
    messages: MessageRepository,
    users: UserRepository,
}

impl MessageService {
    pub fn new(messages: MessageRepository, users: UserRepository) -> Self {
        Self { messages, users }
    }

    async fn profile_of(&self, username: &str) -> Result<Profile> {
        self.users
            .get_user_by_username(username)
            .await?
            .map(Profile::from)
            .ok_or_else(|| CourierError::NotFound(format!("user {}", username)))
    }

    /// Message with both correspondent profiles; NotFound if no such id.
    pub async fn get_message(&self, id: i64) -> Result<MessageDetail> {
        let record = self
            .messages
            .get_message_by_id(id)
            .await?
            .ok_or_else(|| CourierError::NotFound(format!("message {}", id)))?;

        let from_user = self.profile_of(&record.from_username).await?;
        let to_user = self.profile_of(&record.to_username).await?;

        Ok(MessageDetail {
            id: record.id,
            body: record.body,
            sent_at: record.sent_at,
            read_at: record.read_at,
            from_user,
            to_user,
        })
    }

    /// Stores a new message with the next id, sent_at = now, read_at unset.
    ///
    /// A recipient that does not resolve to an existing user is rejected by
    /// the storage layer (foreign key) and surfaces as
    /// [`CourierError::InvalidReference`]; there is no pre-validation read.
    pub async fn create_message(
        &self,
        from_username: &str,
        to_username: &str,
        body: &str,
    ) -> Result<Message> {
        let record = self
            .messages
            .create(from_username, to_username, body, Utc::now())
            .await?;

        info!(id = record.id, from_username, to_username, "Created message");
        Ok(Message::from(record))
    }

    /// Sets read_at once and returns the receipt. Marking an already-read
    /// message is a no-op that returns the original timestamp; NotFound if
    /// no such id.
    pub async fn mark_read(&self, id: i64) -> Result<ReadReceipt> {
        let record = self
            .messages
            .mark_read(id, Utc::now())
            .await?
            .ok_or_else(|| CourierError::NotFound(format!("message {}", id)))?;

        let read_at = record.read_at.ok_or_else(|| {
            CourierError::Database(format!("message {} unread after mark_read", id))
        })?;

        Ok(ReadReceipt {
            id: record.id,
            read_at,
        })
    }

    /// All messages addressed to the user, sender profile attached, most
    /// recent first.
    pub async fn list_to(&self, username: &str) -> Result<Vec<ReceivedMessage>> {
        let records = self.messages.get_messages_to(username).await?;

        let mut profiles: HashMap<String, Profile> = HashMap::new();
        let mut result = Vec::with_capacity(records.len());
        for record in records {
            let from_user = match profiles.get(&record.from_username) {
                Some(profile) => profile.clone(),
                None => {
                    let profile = self.profile_of(&record.from_username).await?;
                    profiles.insert(record.from_username.clone(), profile.clone());
                    profile
                }
            };
            result.push(ReceivedMessage {
                id: record.id,
                body: record.body,
                sent_at: record.sent_at,
                read_at: record.read_at,
                from_user,
            });
        }

        Ok(result)
    }

    /// All messages sent by the user, recipient profile attached, most
    /// recent first.
    pub async fn list_from(&self, username: &str) -> Result<Vec<SentMessage>> {
        let records = self.messages.get_messages_from(username).await?;

        let mut profiles: HashMap<String, Profile> = HashMap::new();
        let mut result = Vec::with_capacity(records.len());
        for record in records {
            let to_user = match profiles.get(&record.to_username) {
                Some(profile) => profile.clone(),
                None => {
                    let profile = self.profile_of(&record.to_username).await?;
                    profiles.insert(record.to_username.clone(), profile.clone());
                    profile
                }
            };
            result.push(SentMessage {
                id: record.id,
                body: record.body,
                sent_at: record.sent_at,
                read_at: record.read_at,
                to_user,
            });
        }

        Ok(result)
    }
}
