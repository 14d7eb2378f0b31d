//! User directory: registration, authentication, and lookup.

use chrono::Utc;
use storage::{UserRecord, UserRepository};
use tracing::{info, warn};

use crate::auth;
use crate::error::{CourierError, Result};
use crate::types::{NewUser, Profile, UserDetail};

/// Account operations over an injected [`UserRepository`].
#[derive(Clone)]
pub struct UserDirectory {
    users: UserRepository,
}

impl UserDirectory {
    pub fn new(users: UserRepository) -> Self {
        Self { users }
    }

    /// Registers a new account. The raw password is hashed before it is
    /// stored; a taken username yields [`CourierError::Conflict`].
    pub async fn register(&self, new_user: NewUser) -> Result<UserDetail> {
        let password_hash = auth::hash_password(&new_user.password)?;
        let record = UserRecord::new(
            new_user.username,
            password_hash,
            new_user.first_name,
            new_user.last_name,
            new_user.phone,
        );

        self.users.save(&record).await?;
        info!(username = %record.username, "Registered user");

        Ok(UserDetail::from(record))
    }

    /// Verifies credentials, failing closed: an unknown user and a wrong
    /// password both yield `Ok(false)`. On success last_login_at is updated.
    pub async fn authenticate(&self, username: &str, password: &str) -> Result<bool> {
        let Some(user) = self.users.get_user_by_username(username).await? else {
            warn!(username, "Authentication failed: unknown user");
            return Ok(false);
        };

        if !auth::verify_password(&user.password_hash, password) {
            warn!(username, "Authentication failed: wrong password");
            return Ok(false);
        }

        self.users.touch_last_login(username, Utc::now()).await?;
        info!(username, "Authenticated user");
        Ok(true)
    }

    /// Full user view; [`CourierError::NotFound`] if absent.
    pub async fn get(&self, username: &str) -> Result<UserDetail> {
        self.users
            .get_user_by_username(username)
            .await?
            .map(UserDetail::from)
            .ok_or_else(|| CourierError::NotFound(format!("user {}", username)))
    }

    /// Public profiles of every user.
    pub async fn all(&self) -> Result<Vec<Profile>> {
        let users = self.users.get_all_users().await?;
        Ok(users.into_iter().map(Profile::from).collect())
    }
}
