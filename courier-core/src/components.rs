//! Component factory: builds CourierComponents from config. Isolates
//! assembly logic from the binary.

use anyhow::Result;
use storage::{MessageRepository, SqlitePoolManager, UserRepository};
use tracing::{error, info};

use crate::api::CourierApi;
use crate::auth::TokenManager;
use crate::config::AppConfig;
use crate::directory::UserDirectory;
use crate::service::MessageService;

/// Core dependencies for the routing layer; produced by the component factory.
pub struct CourierComponents {
    pub api: CourierApi,
    pub directory: UserDirectory,
    pub tokens: TokenManager,
}

/// Connects the database and assembles the service graph.
pub async fn build_components(config: &AppConfig) -> Result<CourierComponents> {
    let pool_manager = SqlitePoolManager::new(&config.database_url)
        .await
        .map_err(|e| {
            error!(error = %e, database_url = %config.database_url, "Failed to open database");
            anyhow::anyhow!("Failed to open database: {}", e)
        })?;

    // users before messages: the messages table references users(username)
    let users = UserRepository::new(pool_manager.clone()).await?;
    let messages = MessageRepository::new(pool_manager).await?;

    let directory = UserDirectory::new(users.clone());
    let service = MessageService::new(messages, users);
    let tokens = TokenManager::new(&config.secret_key, config.token_ttl_hours);

    info!("Courier components ready");

    Ok(CourierComponents {
        api: CourierApi::new(service, directory.clone()),
        directory,
        tokens,
    })
}
