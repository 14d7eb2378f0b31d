//! # Courier core
//!
//! The courier messaging service: typed records, authorization policy, the
//! user directory and message service, token auth, config, and logging init.
//! Persistence comes from the `storage` crate and is injected into the
//! services; transport is left to the consuming binary.

pub mod api;
pub mod auth;
pub mod components;
pub mod config;
pub mod directory;
pub mod error;
pub mod logger;
pub mod policy;
pub mod service;
pub mod types;

pub use api::CourierApi;
pub use auth::{hash_password, verify_password, Claims, TokenManager};
pub use components::{build_components, CourierComponents};
pub use config::AppConfig;
pub use directory::UserDirectory;
pub use error::{CourierError, Result};
pub use logger::init_tracing;
pub use service::MessageService;
pub use types::{
    Correspondents, Message, MessageDetail, NewUser, Profile, ReadReceipt, ReceivedMessage,
    SentMessage, UserDetail,
};
