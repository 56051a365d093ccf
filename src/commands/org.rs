use crate::commands::resolve_api_url;
use crate::display;
use orgrepos::config::load_config;
use orgrepos::github::OrgPayload;
use orgrepos::{GithubOrgClient, Result};
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct OrgSummary {
    pub login: String,
    pub description: String,
    pub repos_url: String,
    pub url: String,
}

impl OrgSummary {
    pub fn from_payload(org_name: &str, payload: &OrgPayload) -> Self {
        let login = payload.login.clone().unwrap_or_else(|| org_name.to_string());
        let url = payload
            .html_url
            .clone()
            .unwrap_or_else(|| format!("https://github.com/{login}"));
        Self {
            description: payload.description.clone().unwrap_or_default(),
            repos_url: payload.repos_url.clone().unwrap_or_else(|| "-".to_string()),
            url,
            login,
        }
    }
}

pub async fn run(org: &Option<String>, api_url: &Option<String>, json: bool) -> Result<()> {
    let config = load_config()?;
    let org_name = config.resolve_org(org.as_deref())?;
    let client = GithubOrgClient::with_api_url(&org_name, &resolve_api_url(api_url, &config))?;

    let payload = client.org().await?;
    let summary = OrgSummary::from_payload(&org_name, payload);

    display::output(json, &summary, render_org_table);

    Ok(())
}

fn render_org_table(org: &OrgSummary) {
    display::section_header("Organization");

    let mut table = display::new_table(&["Field", "Value"]);
    table.add_row(vec!["Login", org.login.as_str()]);
    table.add_row(vec!["Description", org.description.as_str()]);
    table.add_row(vec!["Repos URL", org.repos_url.as_str()]);
    table.add_row(vec!["URL", org.url.as_str()]);

    println!("{table}");
}
