use crate::commands::resolve_api_url;
use crate::display;
use orgrepos::config::load_config;
use orgrepos::utils::{access_nested_map, parse_key_path};
use orgrepos::{GithubClient, JsonFetcher, Result};

pub async fn run(url: &str, path: &Option<String>, api_url: &Option<String>) -> Result<()> {
    let config = load_config()?;
    let client = GithubClient::new(&resolve_api_url(api_url, &config))?;

    let body = client.get_json(url).await?;
    let keys = path.as_deref().map(parse_key_path).unwrap_or_default();
    let value = access_nested_map(&body, &keys)?;

    display::print_json(value);

    Ok(())
}
