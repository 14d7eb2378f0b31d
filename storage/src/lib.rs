//! Storage crate: user and message persistence for the courier service.
//!
//! ## Modules
//!
//! - [`error`] – Storage error types
//! - [`models`] – UserRecord, MessageRecord
//! - [`user_repo`] – UserRepository (SQLite)
//! - [`message_repo`] – MessageRepository (SQLite)
//! - [`sqlite_pool`] – SqlitePoolManager

mod error;
mod message_repo;
mod models;
mod sqlite_pool;
mod user_repo;

pub use error::StorageError;
pub use message_repo::MessageRepository;
pub use models::{MessageRecord, UserRecord};
pub use sqlite_pool::SqlitePoolManager;
pub use user_repo::UserRepository;
