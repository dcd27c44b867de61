mod messages;
mod state;
mod update;
mod view;

pub use state::App;

use crate::config::AppConfig;
use iced::{Size, Theme, window};

/// Helper to launch the home screen with the provided configuration.
pub fn run_app(config: AppConfig) -> iced::Result {
    let window_settings = window::Settings {
        size: Size::new(config.window_width, config.window_height),
        resizable: false,
        ..window::Settings::default()
    };

    iced::application(state::WINDOW_TITLE, App::update, App::view)
        .window(window_settings)
        .subscription(App::subscription)
        .theme(|_app: &App| Theme::Dark)
        .run_with(move || App::bootstrap(config))
}
