use crate::commands::resolve_api_url;
use crate::display;
use orgrepos::config::load_config;
use orgrepos::github::RepoPayload;
use orgrepos::{GithubOrgClient, Result};
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct RepoSummary {
    pub name: String,
    pub license: String,
    pub fork: bool,
    pub description: String,
}

impl RepoSummary {
    pub fn from_repo(repo: &RepoPayload) -> Self {
        Self {
            name: repo.name.clone(),
            license: repo.license_key().unwrap_or("-").to_string(),
            fork: repo.fork,
            description: repo.description.clone().unwrap_or_default(),
        }
    }
}

pub async fn run(
    org: &Option<String>,
    license: &Option<String>,
    api_url: &Option<String>,
    json: bool,
) -> Result<()> {
    let config = load_config()?;
    let org_name = config.resolve_org(org.as_deref())?;
    let client = GithubOrgClient::with_api_url(&org_name, &resolve_api_url(api_url, &config))?;

    let repos = client.public_repo_payloads(license.as_deref()).await?;
    let summaries: Vec<RepoSummary> = repos.into_iter().map(RepoSummary::from_repo).collect();

    display::output(json, &summaries, |data| {
        render_repos_table(&org_name, data);
    });

    Ok(())
}

fn render_repos_table(org_name: &str, repos: &[RepoSummary]) {
    if repos.is_empty() {
        display::warn(&format!("No public repositories found for {org_name}."));
        return;
    }

    display::section_header(&format!("Public repositories of {org_name}"));

    let mut table = display::new_table(&["Name", "License", "Fork", "Description"]);

    for r in repos {
        let fork = if r.fork { "yes" } else { "" };
        table.add_row(vec![r.name.as_str(), r.license.as_str(), fork, r.description.as_str()]);
    }

    println!("{table}");
    println!("\n{} repository(ies) found.", repos.len());
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn summary_from_licensed_repo() {
        let repo: RepoPayload = serde_json::from_value(json!({
            "name": "dagger",
            "description": "A fast dependency injector",
            "license": {"key": "apache-2.0"},
            "fork": true,
        }))
        .unwrap();
        let summary = RepoSummary::from_repo(&repo);
        assert_eq!(summary.name, "dagger");
        assert_eq!(summary.license, "apache-2.0");
        assert!(summary.fork);
        assert_eq!(summary.description, "A fast dependency injector");
    }

    #[test]
    fn summary_from_unlicensed_repo() {
        let repo: RepoPayload =
            serde_json::from_value(json!({"name": "kratu", "license": null})).unwrap();
        let summary = RepoSummary::from_repo(&repo);
        assert_eq!(summary.license, "-");
        assert!(!summary.fork);
        assert_eq!(summary.description, "");
    }
}
