use super::super::super::messages::Message;
use super::super::super::state::App;
use super::super::Effect;
use chrono::Local;
use iced::keyboard::key::Named;
use iced::keyboard::{Key, Modifiers};

impl App {
    pub(super) fn reduce(&mut self, message: Message) -> Vec<Effect> {
        let mut effects = Vec::new();

        match message {
            Message::DotPressed(index) => self.handle_dot_pressed(index, &mut effects),
            Message::NextPage => self.handle_next_page(&mut effects),
            Message::PreviousPage => self.handle_previous_page(&mut effects),
            Message::ViewportPressed => self.handle_viewport_pressed(),
            Message::ViewportMoved(point) => self.handle_viewport_moved(point),
            Message::ViewportReleased => self.handle_viewport_released(&mut effects),
            Message::ViewportExited => self.handle_viewport_exited(),
            Message::KeyPressed { key, modifiers } => {
                if let Some(shortcut) = shortcut_message_for_key(&key, modifiers) {
                    effects.extend(self.reduce(shortcut));
                }
            }
            Message::AnimationTick(now) => self.handle_animation_tick(now, &mut effects),
            Message::ClockTick => self.now = Local::now(),
            Message::RefreshWidgets => effects.extend([
                Effect::FetchGithub,
                Effect::FetchWeather,
                Effect::FetchSeismic,
            ]),
            Message::RefreshSatellite => effects.push(Effect::FetchSatellite),
            Message::GithubLoaded { stats, error } => self.handle_github_loaded(stats, error),
            Message::WeatherLoaded { reading, error } => self.handle_weather_loaded(reading, error),
            Message::SeismicLoaded { summary, error } => self.handle_seismic_loaded(summary, error),
            Message::SatelliteLoaded { fix, error } => self.handle_satellite_loaded(fix, error),
            Message::OpenLink(url) => effects.push(Effect::OpenLink(url)),
            Message::Quit => effects.push(Effect::Quit),
        }

        effects
    }
}

fn shortcut_message_for_key(key: &Key, modifiers: Modifiers) -> Option<Message> {
    if modifiers.command() || modifiers.alt() {
        return None;
    }
    match key {
        Key::Named(Named::ArrowRight) => Some(Message::NextPage),
        Key::Named(Named::ArrowLeft) => Some(Message::PreviousPage),
        Key::Named(Named::Escape) => Some(Message::Quit),
        Key::Character(c) if c.as_str() == "q" => Some(Message::Quit),
        _ => None,
    }
}
