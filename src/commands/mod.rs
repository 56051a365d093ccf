pub mod config;
pub mod get;
pub mod org;
pub mod repos;

use orgrepos::config::Config;

/// The `--api-url` flag wins over the configured API root.
pub fn resolve_api_url(api_flag: &Option<String>, config: &Config) -> String {
    api_flag
        .clone()
        .unwrap_or_else(|| config.api_url().to_string())
}
