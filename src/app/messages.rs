use crate::widgets::github::GithubStats;
use crate::widgets::satellite::SatelliteFix;
use crate::widgets::seismic::SeismicSummary;
use crate::widgets::weather::WeatherReading;
use iced::Point;
use iced::keyboard::{Key, Modifiers};
use std::time::Instant;

/// Messages emitted by the UI and by completing async work.
#[derive(Debug, Clone)]
pub enum Message {
    // Navigation input
    DotPressed(usize),
    NextPage,
    PreviousPage,
    ViewportPressed,
    ViewportMoved(Point),
    ViewportReleased,
    ViewportExited,
    KeyPressed {
        key: Key,
        modifiers: Modifiers,
    },
    // Animation and clocks
    AnimationTick(Instant),
    ClockTick,
    // Widget lifecycle
    RefreshWidgets,
    RefreshSatellite,
    GithubLoaded {
        stats: Option<GithubStats>,
        error: Option<String>,
    },
    WeatherLoaded {
        reading: Option<WeatherReading>,
        error: Option<String>,
    },
    SeismicLoaded {
        summary: Option<SeismicSummary>,
        error: Option<String>,
    },
    SatelliteLoaded {
        fix: Option<SatelliteFix>,
        error: Option<String>,
    },
    // Static content
    OpenLink(&'static str),
    Quit,
}
