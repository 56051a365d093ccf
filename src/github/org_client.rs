use crate::error::{Error, Result};
use crate::github::client::{GithubClient, DEFAULT_API_URL};
use crate::github::fetch::JsonFetcher;
use crate::github::models::{OrgPayload, RepoPayload};
use crate::memoize::Memoized;

/// Client for a single GitHub organization.
///
/// The org payload and the repository list are each fetched at most once
/// per client; later calls reuse the stored payloads.
pub struct GithubOrgClient<F = GithubClient> {
    org_name: String,
    api_url: String,
    fetcher: F,
    org: Memoized<OrgPayload>,
    repos_payload: Memoized<Vec<RepoPayload>>,
}

impl GithubOrgClient<GithubClient> {
    pub fn new(org_name: impl Into<String>) -> Result<Self> {
        Self::with_api_url(org_name, DEFAULT_API_URL)
    }

    /// Same as [`new`](Self::new), against a different API root.
    pub fn with_api_url(org_name: impl Into<String>, api_url: &str) -> Result<Self> {
        let fetcher = GithubClient::new(api_url)?;
        Ok(Self::with_fetcher(org_name, api_url, fetcher))
    }

    /// Whether `repo`'s `license.key` equals `license_key`. A repository
    /// without a license never matches.
    pub fn has_license(repo: &RepoPayload, license_key: &str) -> bool {
        repo.has_license(license_key)
    }
}

impl<F: JsonFetcher> GithubOrgClient<F> {
    pub fn with_fetcher(
        org_name: impl Into<String>,
        api_url: impl Into<String>,
        fetcher: F,
    ) -> Self {
        let api_url: String = api_url.into();
        Self {
            org_name: org_name.into(),
            api_url: api_url.trim_end_matches('/').to_string(),
            fetcher,
            org: Memoized::new(),
            repos_payload: Memoized::new(),
        }
    }

    pub fn org_name(&self) -> &str {
        &self.org_name
    }

    pub fn org_url(&self) -> String {
        format!("{}/orgs/{}", self.api_url, self.org_name)
    }

    pub async fn org(&self) -> Result<&OrgPayload> {
        self.org
            .get_or_try_init(|| async move {
                let payload = self.fetcher.get_json(&self.org_url()).await?;
                Ok::<_, Error>(serde_json::from_value(payload)?)
            })
            .await
    }

    /// The org's `repos_url`, exactly as the API reported it.
    pub async fn public_repos_url(&self) -> Result<&str> {
        self.org()
            .await?
            .repos_url
            .as_deref()
            .ok_or_else(|| Error::MissingKey("repos_url".to_string()))
    }

    pub async fn repos_payload(&self) -> Result<&[RepoPayload]> {
        let repos = self
            .repos_payload
            .get_or_try_init(|| async move {
                let url = self.public_repos_url().await?;
                let payload = self.fetcher.get_json(url).await?;
                Ok::<_, Error>(serde_json::from_value(payload)?)
            })
            .await?;
        Ok(repos.as_slice())
    }

    /// Repositories in payload order, restricted to `license` when given.
    pub async fn public_repo_payloads(
        &self,
        license: Option<&str>,
    ) -> Result<Vec<&RepoPayload>> {
        let repos = self.repos_payload().await?;
        Ok(repos
            .iter()
            .filter(|repo| license.map_or(true, |key| repo.has_license(key)))
            .collect())
    }

    pub async fn public_repos(&self, license: Option<&str>) -> Result<Vec<String>> {
        let repos = self.public_repo_payloads(license).await?;
        Ok(repos.into_iter().map(|repo| repo.name.clone()).collect())
    }
}
