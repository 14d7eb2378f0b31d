//! Actor-facing operations: an explicit policy check before each service call.
//!
//! This is the surface the routing layer consumes. Every operation takes the
//! verified actor username (yielded by [`crate::TokenManager::verify`]) and
//! returns typed records or a typed failure; denials are
//! [`CourierError::Unauthorized`], never a silent skip.

use tracing::{info, warn};

use crate::directory::UserDirectory;
use crate::error::{CourierError, Result};
use crate::policy;
use crate::service::MessageService;
use crate::types::{
    Message, MessageDetail, Profile, ReadReceipt, ReceivedMessage, SentMessage, UserDetail,
};

#[derive(Clone)]
pub struct CourierApi {
    service: MessageService,
    directory: UserDirectory,
}

impl CourierApi {
    pub fn new(service: MessageService, directory: UserDirectory) -> Self {
        Self { service, directory }
    }

    /// Message detail, participants only. A missing message is NotFound even
    /// for strangers; existence is only revealed after the lookup.
    pub async fn get_message(&self, actor: &str, id: i64) -> Result<MessageDetail> {
        let message = self.service.get_message(id).await?;

        if !policy::can_view_message(actor, &message) {
            warn!(actor, id, "Denied message view");
            return Err(CourierError::Unauthorized(format!(
                "cannot read message {}",
                id
            )));
        }

        Ok(message)
    }

    /// Sends a message from the actor to the given recipient.
    pub async fn post_message(&self, actor: &str, to_username: &str, body: &str) -> Result<Message> {
        self.service.create_message(actor, to_username, body).await
    }

    /// Marks a message read, recipients only.
    pub async fn mark_read(&self, actor: &str, id: i64) -> Result<ReadReceipt> {
        let message = self.service.get_message(id).await?;

        if !policy::can_mark_read(actor, &message) {
            warn!(actor, id, "Denied mark-read");
            return Err(CourierError::Unauthorized(format!(
                "cannot mark message {} read",
                id
            )));
        }

        self.service.mark_read(id).await
    }

    /// Public profiles of all users; any authenticated actor.
    pub async fn list_users(&self, actor: &str) -> Result<Vec<Profile>> {
        info!(actor, "Listing users");
        self.directory.all().await
    }

    /// Full profile, owners only. The ownership check runs before the
    /// lookup, so probing another user's (or a missing) profile reads as a
    /// denial, not an absence.
    pub async fn get_user(&self, actor: &str, username: &str) -> Result<UserDetail> {
        if !policy::can_view_profile(actor, username) {
            warn!(actor, username, "Denied profile view");
            return Err(CourierError::Unauthorized(format!(
                "cannot view profile {}",
                username
            )));
        }

        self.directory.get(username).await
    }

    /// Messages addressed to the user, owners only.
    pub async fn messages_to(&self, actor: &str, username: &str) -> Result<Vec<ReceivedMessage>> {
        if !policy::can_view_profile(actor, username) {
            warn!(actor, username, "Denied inbox view");
            return Err(CourierError::Unauthorized(format!(
                "cannot list messages to {}",
                username
            )));
        }

        self.service.list_to(username).await
    }

    /// Messages sent by the user, owners only.
    pub async fn messages_from(&self, actor: &str, username: &str) -> Result<Vec<SentMessage>> {
        if !policy::can_view_profile(actor, username) {
            warn!(actor, username, "Denied outbox view");
            return Err(CourierError::Unauthorized(format!(
                "cannot list messages from {}",
                username
            )));
        }

        self.service.list_from(username).await
    }
}
