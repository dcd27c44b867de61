use crate::widgets::github::GithubStats;
use crate::widgets::satellite::SatelliteFix;
use crate::widgets::seismic::SeismicSummary;
use crate::widgets::weather::WeatherReading;

/// Latest value per widget slot. `None` renders as the `--` placeholder;
/// slots fill in independently as their fetches resolve.
#[derive(Default)]
pub struct WidgetState {
    pub(in crate::app) github: Option<GithubStats>,
    pub(in crate::app) weather: Option<WeatherReading>,
    pub(in crate::app) seismic: Option<SeismicSummary>,
    pub(in crate::app) satellite: Option<SatelliteFix>,
}
