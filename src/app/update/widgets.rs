use super::super::state::App;
use crate::widgets::github::GithubStats;
use crate::widgets::satellite::SatelliteFix;
use crate::widgets::seismic::SeismicSummary;
use crate::widgets::weather::WeatherReading;
use tracing::{debug, warn};

// Fetch completions. Failures stay local to their slot: the placeholder (or
// the previous value) keeps rendering and no other widget is affected.
impl App {
    pub(super) fn handle_github_loaded(
        &mut self,
        stats: Option<GithubStats>,
        error: Option<String>,
    ) {
        if let Some(err) = error {
            warn!("GitHub stats fetch failed: {err}");
            return;
        }
        if let Some(stats) = stats {
            debug!(public_repos = stats.public_repos, "GitHub stats updated");
            self.widgets.github = Some(stats);
        }
    }

    pub(super) fn handle_weather_loaded(
        &mut self,
        reading: Option<WeatherReading>,
        error: Option<String>,
    ) {
        if let Some(err) = error {
            warn!("Weather fetch failed: {err}");
            return;
        }
        if let Some(reading) = reading {
            debug!(temperature_c = reading.temperature_c, "Weather updated");
            self.widgets.weather = Some(reading);
        }
    }

    pub(super) fn handle_seismic_loaded(
        &mut self,
        summary: Option<SeismicSummary>,
        error: Option<String>,
    ) {
        if let Some(err) = error {
            warn!("Seismic fetch failed: {err}");
            return;
        }
        if let Some(summary) = summary {
            debug!(count = summary.count, "Seismic count updated");
            self.widgets.seismic = Some(summary);
        }
    }

    pub(super) fn handle_satellite_loaded(
        &mut self,
        fix: Option<SatelliteFix>,
        error: Option<String>,
    ) {
        if let Some(err) = error {
            warn!("Satellite telemetry fetch failed: {err}");
            return;
        }
        if let Some(fix) = fix {
            debug!(
                latitude = fix.latitude,
                longitude = fix.longitude,
                "Satellite fix updated"
            );
            self.widgets.satellite = Some(fix);
        }
    }
}
