//! Application state - shared across all handlers.

use std::sync::Arc;

use devlink_core::ports::{GithubClient, PostRepository, ProfileRepository, UserRepository};
use devlink_infra::HttpGithubClient;
use devlink_infra::database::{
    PostgresPostRepository, PostgresProfileRepository, PostgresUserRepository, connect,
};

use crate::config::AppConfig;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub users: Arc<dyn UserRepository>,
    pub posts: Arc<dyn PostRepository>,
    pub profiles: Arc<dyn ProfileRepository>,
    pub github: Arc<dyn GithubClient>,
}

impl AppState {
    /// Connect to the database and build the repository set.
    pub async fn init(config: &AppConfig) -> anyhow::Result<Self> {
        let db = connect(&config.database).await?;

        let state = Self {
            users: Arc::new(PostgresUserRepository::new(db.clone())),
            posts: Arc::new(PostgresPostRepository::new(db.clone())),
            profiles: Arc::new(PostgresProfileRepository::new(db)),
            github: Arc::new(HttpGithubClient::new(config.github.clone())),
        };

        tracing::info!("Application state initialized");
        Ok(state)
    }
}
