//! GitHub read-only proxy port.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// The subset of GitHub repository fields the API exposes.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GithubRepo {
    pub name: String,
    pub html_url: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub stargazers_count: u64,
    #[serde(default)]
    pub forks_count: u64,
    #[serde(default)]
    pub language: Option<String>,
}

/// Client for the external repository-hosting API.
#[async_trait]
pub trait GithubClient: Send + Sync {
    /// List a user's most recently created public repositories.
    async fn user_repos(&self, username: &str) -> Result<Vec<GithubRepo>, GithubError>;
}

#[derive(Debug, thiserror::Error)]
pub enum GithubError {
    /// The upstream API answered, but not with a repo list (404 or any
    /// other non-success status).
    #[error("No Github profile found")]
    NoProfile,

    #[error("Github request failed: {0}")]
    Transport(String),
}
