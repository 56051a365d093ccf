use crate::error::Result;
use crate::github::client::{GithubClient, DEFAULT_API_URL};
use serde_json::Value;
use std::future::Future;

/// Something that can GET a URL and hand back its JSON body.
///
/// Implementations issue exactly one request per call, with the URL as
/// given, and return the parsed body without checking its shape.
pub trait JsonFetcher {
    fn get_json(&self, url: &str) -> impl Future<Output = Result<Value>>;
}

/// Fetches `url` once with a default client and returns the parsed body.
pub async fn get_json(url: &str) -> Result<Value> {
    GithubClient::new(DEFAULT_API_URL)?.get_json(url).await
}
