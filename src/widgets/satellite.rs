//! ISS position telemetry from the Where The ISS At API.

use anyhow::{Context, Result};
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct SatelliteFix {
    pub latitude: f64,
    pub longitude: f64,
    pub altitude: f64,
    pub velocity: f64,
    // Not present in older payloads.
    #[serde(default)]
    pub visibility: Option<String>,
}

pub async fn fetch(client: &reqwest::Client) -> Result<SatelliteFix> {
    let url = "https://api.wheretheiss.at/v1/satellites/25544";
    let body = client
        .get(url)
        .send()
        .await
        .context("Satellite telemetry request failed")?
        .error_for_status()
        .context("Satellite API returned an error status")?
        .text()
        .await
        .context("Failed to read satellite response body")?;
    parse(&body)
}

pub fn parse(body: &str) -> Result<SatelliteFix> {
    serde_json::from_str(body).context("Unexpected satellite response shape")
}

/// `45.0°N 73.0°W`-style ground position.
pub fn format_position(fix: &SatelliteFix) -> String {
    let ns = if fix.latitude >= 0.0 { 'N' } else { 'S' };
    let ew = if fix.longitude >= 0.0 { 'E' } else { 'W' };
    format!(
        "{:.1}°{ns} {:.1}°{ew}",
        fix.latitude.abs(),
        fix.longitude.abs()
    )
}

/// Altitude and ground speed, rounded to whole units.
pub fn format_motion(fix: &SatelliteFix) -> String {
    format!(
        "{} km · {} km/h",
        fix.altitude.round() as i64,
        fix.velocity.round() as i64
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn parses_full_fix_with_visibility() {
        let body = json!({
            "visibility": "daylight",
            "latitude": 45.0,
            "longitude": -73.0,
            "altitude": 408.2,
            "velocity": 27600.4
        });
        let fix = parse(&body.to_string()).expect("full fix");
        assert_eq!(fix.visibility.as_deref(), Some("daylight"));
        assert_eq!(format_position(&fix), "45.0°N 73.0°W");
        assert_eq!(format_motion(&fix), "408 km · 27600 km/h");
    }

    #[test]
    fn visibility_is_optional() {
        let body = json!({
            "latitude": -12.5,
            "longitude": 130.9,
            "altitude": 417.0,
            "velocity": 27544.0
        });
        let fix = parse(&body.to_string()).expect("fix without visibility");
        assert!(fix.visibility.is_none());
        assert_eq!(format_position(&fix), "12.5°S 130.9°E");
    }

    #[test]
    fn rejects_incomplete_fixes() {
        assert!(parse(r#"{ "latitude": 45.0 }"#).is_err());
    }
}
