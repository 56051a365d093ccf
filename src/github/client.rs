use crate::error::Result;
use crate::github::fetch::JsonFetcher;
use octocrab::service::middleware::retry::RetryConfig;
use octocrab::Octocrab;
use serde_json::Value;

pub const DEFAULT_API_URL: &str = "https://api.github.com";

/// Unauthenticated HTTP client for the GitHub REST API.
pub struct GithubClient {
    octocrab: Octocrab,
    api_url: String,
}

impl GithubClient {
    pub fn new(api_url: &str) -> Result<Self> {
        // One request per fetch; octocrab retries 5xx responses by default.
        let octocrab = Octocrab::builder()
            .base_uri(api_url)?
            .add_retry_config(RetryConfig::None)
            .build()?;
        Ok(Self {
            octocrab,
            api_url: api_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn api_url(&self) -> &str {
        &self.api_url
    }
}

impl JsonFetcher for GithubClient {
    async fn get_json(&self, url: &str) -> Result<Value> {
        tracing::debug!(url, "GET");
        let response = self.octocrab._get(url).await?;
        let status = response.status();
        let body = self.octocrab.body_to_string(response).await?;
        tracing::debug!(url, %status, bytes = body.len(), "response received");
        Ok(serde_json::from_str(&body)?)
    }
}
