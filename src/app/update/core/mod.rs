mod reducer;
mod runtime;

use super::super::messages::Message;
use super::super::state::{ANIMATION_TICK, App};
use iced::event;
use iced::time;
use iced::{Subscription, Task};
use std::time::Duration;

impl App {
    pub fn subscription(app: &App) -> Subscription<Message> {
        let mut subscriptions: Vec<Subscription<Message>> = vec![
            event::listen_with(runtime::runtime_event_to_message),
            time::every(Duration::from_secs(1)).map(|_| Message::ClockTick),
            time::every(Duration::from_secs(app.config.widget_refresh_secs))
                .map(|_| Message::RefreshWidgets),
            time::every(Duration::from_secs(app.config.satellite_refresh_secs))
                .map(|_| Message::RefreshSatellite),
        ];

        // Frame ticks only while the track is animating.
        if app.nav.in_transition() {
            subscriptions.push(time::every(ANIMATION_TICK).map(Message::AnimationTick));
        }

        Subscription::batch(subscriptions)
    }

    pub fn update(&mut self, message: Message) -> Task<Message> {
        let effects = self.reduce(message);
        if effects.is_empty() {
            Task::none()
        } else {
            Task::batch(effects.into_iter().map(|effect| self.run_effect(effect)))
        }
    }
}
