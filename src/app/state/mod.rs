mod constants;
mod nav;
mod widgets;

use crate::config::AppConfig;
use crate::gesture::DragRecognizer;
use chrono::{DateTime, Local};
use iced::Task;
use tracing::warn;

use super::messages::Message;
use super::update::Effect;

pub(crate) use constants::*;
pub(in crate::app) use nav::NavState;
pub(in crate::app) use widgets::WidgetState;

/// Core application state composed of sub-models.
pub struct App {
    pub(super) config: AppConfig,
    pub(super) nav: NavState,
    pub(super) drag: DragRecognizer,
    /// Last known pointer x over the viewport; drags start from here because
    /// press events carry no position of their own.
    pub(super) cursor_x: f32,
    pub(super) widgets: WidgetState,
    pub(super) now: DateTime<Local>,
    pub(super) http: reqwest::Client,
}

impl App {
    /// Build the initial state and kick off the first round of widget
    /// fetches. Nothing here blocks; slots show placeholders until the
    /// fetches resolve.
    pub fn bootstrap(config: AppConfig) -> (App, Task<Message>) {
        let http = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(config.fetch_timeout_secs))
            .build()
            .unwrap_or_else(|err| {
                warn!("Falling back to default HTTP client: {err}");
                reqwest::Client::new()
            });

        let mut app = App {
            config,
            nav: NavState::new(),
            drag: DragRecognizer::default(),
            cursor_x: 0.0,
            widgets: WidgetState::default(),
            now: Local::now(),
            http,
        };

        let initial_fetches = [
            Effect::FetchGithub,
            Effect::FetchWeather,
            Effect::FetchSeismic,
            Effect::FetchSatellite,
        ];
        let task = Task::batch(initial_fetches.into_iter().map(|effect| app.run_effect(effect)));
        (app, task)
    }
}
