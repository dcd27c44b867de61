//! GitHub profile stats for the widget card.

use anyhow::{Context, Result};
use serde::Deserialize;

/// The slice of the GitHub users endpoint we care about.
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct GithubStats {
    pub public_repos: u64,
}

pub async fn fetch(client: &reqwest::Client, user: &str) -> Result<GithubStats> {
    let url = format!("https://api.github.com/users/{user}");
    let body = client
        .get(&url)
        .header(reqwest::header::USER_AGENT, "corvid-home")
        .send()
        .await
        .with_context(|| format!("GitHub request to {url} failed"))?
        .error_for_status()
        .context("GitHub returned an error status")?
        .text()
        .await
        .context("Failed to read GitHub response body")?;
    parse(&body)
}

pub fn parse(body: &str) -> Result<GithubStats> {
    serde_json::from_str(body).context("Unexpected GitHub response shape")
}

pub fn format_count(stats: &GithubStats) -> String {
    stats.public_repos.to_string()
}
