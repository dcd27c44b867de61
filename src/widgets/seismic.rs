//! Earthquake count for the last 24 hours, from the USGS FDSN event service.

use anyhow::{Context, Result};
use serde::Deserialize;

#[derive(Debug, Clone, Copy)]
pub struct SeismicSummary {
    pub count: u64,
}

#[derive(Debug, Deserialize)]
struct SeismicResponse {
    metadata: SeismicMetadata,
}

#[derive(Debug, Deserialize)]
struct SeismicMetadata {
    count: u64,
}

pub async fn fetch(client: &reqwest::Client) -> Result<SeismicSummary> {
    // Count-only query; the feature list stays empty at this magnitude floor.
    let url = "https://earthquake.usgs.gov/fdsnws/event/1/query?format=geojson&minmagnitude=4.5&limit=1";
    let body = client
        .get(url)
        .send()
        .await
        .context("USGS request failed")?
        .error_for_status()
        .context("USGS returned an error status")?
        .text()
        .await
        .context("Failed to read USGS response body")?;
    parse(&body)
}

pub fn parse(body: &str) -> Result<SeismicSummary> {
    let response: SeismicResponse =
        serde_json::from_str(body).context("Unexpected USGS response shape")?;
    Ok(SeismicSummary {
        count: response.metadata.count,
    })
}

pub fn format_count(summary: &SeismicSummary) -> String {
    summary.count.to_string()
}
