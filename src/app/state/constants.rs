use iced::widget::scrollable::Id as ScrollId;
use once_cell::sync::Lazy;
use std::time::Duration;

/// Window title; the published page is titled "apps".
pub(crate) const WINDOW_TITLE: &str = "apps · corvid-agent";

/// Heading rendered above the phone mockup.
pub(crate) const HEADER_TITLE: &str = "corvid-agent";

/// Cadence of the transition animation while one is in flight.
pub(crate) const ANIMATION_TICK: Duration = Duration::from_millis(16);

/// Visible height of the page track inside the screen.
pub(crate) const TRACK_HEIGHT: f32 = 430.0;

/// Scroll target for programmatic track movement.
pub(crate) static TRACK_SCROLL_ID: Lazy<ScrollId> = Lazy::new(|| ScrollId::new("track"));
