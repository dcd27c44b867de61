use super::super::super::messages::Message;
use super::super::super::state::{App, TRACK_SCROLL_ID};
use super::super::Effect;
use crate::widgets::{github, satellite, seismic, weather};
use iced::Event;
use iced::Task;
use iced::event;
use iced::keyboard;
use iced::widget::scrollable::AbsoluteOffset;
use iced::window;
use tracing::{info, warn};

impl App {
    pub(in crate::app) fn run_effect(&mut self, effect: Effect) -> Task<Message> {
        match effect {
            Effect::ScrollTrack(x) => iced::widget::scrollable::scroll_to(
                TRACK_SCROLL_ID.clone(),
                AbsoluteOffset { x, y: 0.0 },
            ),
            Effect::FetchGithub => {
                let client = self.http.clone();
                let user = self.config.github_user.clone();
                Task::perform(
                    async move {
                        match github::fetch(&client, &user).await {
                            Ok(stats) => Message::GithubLoaded {
                                stats: Some(stats),
                                error: None,
                            },
                            Err(err) => Message::GithubLoaded {
                                stats: None,
                                error: Some(err.to_string()),
                            },
                        }
                    },
                    |message| message,
                )
            }
            Effect::FetchWeather => {
                let client = self.http.clone();
                let latitude = self.config.weather_latitude;
                let longitude = self.config.weather_longitude;
                Task::perform(
                    async move {
                        match weather::fetch(&client, latitude, longitude).await {
                            Ok(reading) => Message::WeatherLoaded {
                                reading: Some(reading),
                                error: None,
                            },
                            Err(err) => Message::WeatherLoaded {
                                reading: None,
                                error: Some(err.to_string()),
                            },
                        }
                    },
                    |message| message,
                )
            }
            Effect::FetchSeismic => {
                let client = self.http.clone();
                Task::perform(
                    async move {
                        match seismic::fetch(&client).await {
                            Ok(summary) => Message::SeismicLoaded {
                                summary: Some(summary),
                                error: None,
                            },
                            Err(err) => Message::SeismicLoaded {
                                summary: None,
                                error: Some(err.to_string()),
                            },
                        }
                    },
                    |message| message,
                )
            }
            Effect::FetchSatellite => {
                let client = self.http.clone();
                Task::perform(
                    async move {
                        match satellite::fetch(&client).await {
                            Ok(fix) => Message::SatelliteLoaded {
                                fix: Some(fix),
                                error: None,
                            },
                            Err(err) => Message::SatelliteLoaded {
                                fix: None,
                                error: Some(err.to_string()),
                            },
                        }
                    },
                    |message| message,
                )
            }
            Effect::OpenLink(url) => {
                open_link(url);
                Task::none()
            }
            Effect::Quit => iced::exit(),
        }
    }
}

fn open_link(url: &str) {
    #[cfg(target_os = "macos")]
    let launcher = "open";
    #[cfg(target_os = "windows")]
    let launcher = "explorer";
    #[cfg(not(any(target_os = "macos", target_os = "windows")))]
    let launcher = "xdg-open";

    info!(url, "Opening link in browser");
    if let Err(err) = std::process::Command::new(launcher).arg(url).spawn() {
        warn!(url, "Failed to open link: {err}");
    }
}

pub(super) fn runtime_event_to_message(
    event: Event,
    status: event::Status,
    _window_id: window::Id,
) -> Option<Message> {
    if status == event::Status::Captured {
        return None;
    }
    match event {
        Event::Keyboard(keyboard::Event::KeyPressed { key, modifiers, .. }) => {
            Some(Message::KeyPressed { key, modifiers })
        }
        _ => None,
    }
}
