//! reqwest-based GitHub client.

use async_trait::async_trait;
use reqwest::header::USER_AGENT;

use devlink_core::ports::{GithubClient, GithubError, GithubRepo};

const GITHUB_API: &str = "https://api.github.com";
const PER_PAGE: u32 = 5;

/// Optional OAuth application credentials for a higher rate limit.
#[derive(Debug, Clone, Default)]
pub struct GithubConfig {
    pub client_id: Option<String>,
    pub client_secret: Option<String>,
}

impl GithubConfig {
    pub fn from_env() -> Self {
        Self {
            client_id: std::env::var("GITHUB_CLIENT_ID").ok(),
            client_secret: std::env::var("GITHUB_CLIENT_SECRET").ok(),
        }
    }
}

/// GitHub client proxying the public repos listing.
pub struct HttpGithubClient {
    client: reqwest::Client,
    config: GithubConfig,
    base_url: String,
}

impl HttpGithubClient {
    pub fn new(config: GithubConfig) -> Self {
        Self {
            client: reqwest::Client::new(),
            config,
            base_url: GITHUB_API.to_string(),
        }
    }

    #[cfg(test)]
    fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    fn repos_url(&self, username: &str) -> String {
        format!("{}/users/{}/repos", self.base_url, username)
    }
}

#[async_trait]
impl GithubClient for HttpGithubClient {
    async fn user_repos(&self, username: &str) -> Result<Vec<GithubRepo>, GithubError> {
        let mut query: Vec<(&str, String)> = vec![
            ("per_page", PER_PAGE.to_string()),
            ("sort", "created:asc".to_string()),
        ];
        if let (Some(id), Some(secret)) = (&self.config.client_id, &self.config.client_secret) {
            query.push(("client_id", id.clone()));
            query.push(("client_secret", secret.clone()));
        }

        let response = self
            .client
            .get(self.repos_url(username))
            .header(USER_AGENT, "devlink-api")
            .query(&query)
            .send()
            .await
            .map_err(|e| GithubError::Transport(e.to_string()))?;

        // Any upstream answer that is not a repo list counts as "no profile",
        // including plain 404s for unknown usernames.
        if !response.status().is_success() {
            tracing::debug!(username, status = %response.status(), "Github lookup missed");
            return Err(GithubError::NoProfile);
        }

        response
            .json::<Vec<GithubRepo>>()
            .await
            .map_err(|e| GithubError::Transport(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn repos_url_targets_the_users_listing() {
        let client =
            HttpGithubClient::new(GithubConfig::default()).with_base_url("http://localhost:9999");

        assert_eq!(
            client.repos_url("octocat"),
            "http://localhost:9999/users/octocat/repos"
        );
    }
}
