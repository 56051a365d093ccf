mod client;
mod fetch;
mod models;
mod org_client;

pub use client::{GithubClient, DEFAULT_API_URL};
pub use fetch::{get_json, JsonFetcher};
pub use models::{License, OrgPayload, RepoPayload};
pub use org_client::GithubOrgClient;
