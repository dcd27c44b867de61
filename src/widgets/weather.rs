//! Current temperature from Open-Meteo.
//!
//! The API has shipped two response shapes over time: the legacy
//! `current_weather.temperature` and the newer `current.temperature_2m`.
//! Which one is authoritative going forward is unclear, so both are accepted
//! and normalized into one reading here; the rest of the app never sees the
//! difference.

use anyhow::{Context, Result};
use serde::Deserialize;

/// Normalized weather reading.
#[derive(Debug, Clone, Copy)]
pub struct WeatherReading {
    pub temperature_c: f64,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum WeatherResponse {
    Legacy { current_weather: LegacyCurrent },
    Modern { current: ModernCurrent },
}

#[derive(Debug, Deserialize)]
struct LegacyCurrent {
    temperature: f64,
}

#[derive(Debug, Deserialize)]
struct ModernCurrent {
    temperature_2m: f64,
}

pub async fn fetch(client: &reqwest::Client, latitude: f64, longitude: f64) -> Result<WeatherReading> {
    let url = format!(
        "https://api.open-meteo.com/v1/forecast?latitude={latitude}&longitude={longitude}&current_weather=true"
    );
    let body = client
        .get(&url)
        .send()
        .await
        .context("Open-Meteo request failed")?
        .error_for_status()
        .context("Open-Meteo returned an error status")?
        .text()
        .await
        .context("Failed to read Open-Meteo response body")?;
    parse(&body)
}

pub fn parse(body: &str) -> Result<WeatherReading> {
    let response: WeatherResponse =
        serde_json::from_str(body).context("Unexpected Open-Meteo response shape")?;
    let temperature_c = match response {
        WeatherResponse::Legacy { current_weather } => current_weather.temperature,
        WeatherResponse::Modern { current } => current.temperature_2m,
    };
    Ok(WeatherReading { temperature_c })
}

pub fn format_temperature(reading: &WeatherReading) -> String {
    format!("{}°", reading.temperature_c.round() as i64)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn parses_legacy_current_weather_shape() {
        let body = json!({ "current_weather": { "temperature": 22.0, "windspeed": 11.2 } });
        let reading = parse(&body.to_string()).expect("legacy shape");
        assert_eq!(reading.temperature_c, 22.0);
    }

    #[test]
    fn parses_modern_current_shape() {
        let body = json!({ "current": { "temperature_2m": -3.4, "relative_humidity_2m": 80 } });
        let reading = parse(&body.to_string()).expect("modern shape");
        assert_eq!(reading.temperature_c, -3.4);
    }

    #[test]
    fn rejects_bodies_with_neither_shape() {
        assert!(parse(r#"{ "hourly": {} }"#).is_err());
    }

    #[test]
    fn temperature_formats_rounded_with_degree_sign() {
        assert_eq!(format_temperature(&WeatherReading { temperature_c: 21.6 }), "22°");
        assert_eq!(format_temperature(&WeatherReading { temperature_c: -3.4 }), "-3°");
    }
}
