//! Service config: database, token auth, logging. Loaded from env.

use anyhow::Result;
use std::env;

/// Runtime configuration for the courier service.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// SECRET_KEY — HS256 signing secret for identity tokens
    pub secret_key: String,
    /// DATABASE_URL — SQLite database path
    pub database_url: String,
    /// TOKEN_TTL_HOURS — identity token lifetime
    pub token_ttl_hours: i64,
    /// LOG_FILE — log file path
    pub log_file: String,
}

impl AppConfig {
    /// Load from environment variables. `secret` overrides SECRET_KEY if
    /// provided. Call validate() after load to check config before init.
    pub fn load(secret: Option<String>) -> Result<Self> {
        let secret_key =
            secret.unwrap_or_else(|| env::var("SECRET_KEY").expect("SECRET_KEY not set"));
        let database_url =
            env::var("DATABASE_URL").unwrap_or_else(|_| "courier.db".to_string());
        let log_file = env::var("LOG_FILE").unwrap_or_else(|_| "logs/courier.log".to_string());
        let token_ttl_hours = env::var("TOKEN_TTL_HOURS")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(24);

        Ok(Self {
            secret_key,
            database_url,
            token_ttl_hours,
            log_file,
        })
    }

    /// Validate config. Call after load() to fail fast before init.
    pub fn validate(&self) -> Result<()> {
        if self.secret_key.trim().is_empty() {
            anyhow::bail!("SECRET_KEY is set but empty");
        }
        if self.token_ttl_hours <= 0 {
            anyhow::bail!(
                "TOKEN_TTL_HOURS must be positive, got {}",
                self.token_ttl_hours
            );
        }
        Ok(())
    }
}
