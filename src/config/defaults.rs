use crate::config::LogLevel;

pub(crate) fn default_window_width() -> f32 {
    420.0
}

pub(crate) fn default_window_height() -> f32 {
    860.0
}

pub(crate) fn default_github_user() -> String {
    "corvid-agent".to_string()
}

// Montreal; the reference deployment pins the weather card here.
pub(crate) fn default_weather_latitude() -> f64 {
    45.5
}

pub(crate) fn default_weather_longitude() -> f64 {
    -73.6
}

pub(crate) fn default_drag_threshold_fraction() -> f32 {
    0.2
}

pub(crate) fn default_transition_ms() -> u64 {
    300
}

pub(crate) fn default_fetch_timeout_secs() -> u64 {
    10
}

pub(crate) fn default_widget_refresh_secs() -> u64 {
    600
}

pub(crate) fn default_satellite_refresh_secs() -> u64 {
    30
}

pub(crate) fn default_log_level() -> LogLevel {
    LogLevel::Info
}
