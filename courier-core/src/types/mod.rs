//! Core types: user projections and message records.
//!
//! Types are split into one file per main type for easier navigation and
//! alignment with project conventions.

mod message;
mod user;

pub use message::{
    Correspondents, Message, MessageDetail, ReadReceipt, ReceivedMessage, SentMessage,
};
pub use user::{NewUser, Profile, UserDetail};
