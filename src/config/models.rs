use serde::Deserialize;

/// High-level app configuration; deserializable from TOML.
#[derive(Debug, Clone, Deserialize, serde::Serialize)]
pub struct AppConfig {
    #[serde(default = "crate::config::defaults::default_window_width")]
    pub window_width: f32,
    #[serde(default = "crate::config::defaults::default_window_height")]
    pub window_height: f32,
    #[serde(default = "crate::config::defaults::default_github_user")]
    pub github_user: String,
    #[serde(default = "crate::config::defaults::default_weather_latitude")]
    pub weather_latitude: f64,
    #[serde(default = "crate::config::defaults::default_weather_longitude")]
    pub weather_longitude: f64,
    #[serde(default = "crate::config::defaults::default_drag_threshold_fraction")]
    pub drag_threshold_fraction: f32,
    #[serde(default = "crate::config::defaults::default_transition_ms")]
    pub transition_ms: u64,
    #[serde(default = "crate::config::defaults::default_fetch_timeout_secs")]
    pub fetch_timeout_secs: u64,
    #[serde(default = "crate::config::defaults::default_widget_refresh_secs")]
    pub widget_refresh_secs: u64,
    #[serde(default = "crate::config::defaults::default_satellite_refresh_secs")]
    pub satellite_refresh_secs: u64,
    #[serde(default = "crate::config::defaults::default_log_level")]
    pub log_level: LogLevel,
}

impl Default for AppConfig {
    fn default() -> Self {
        AppConfig {
            window_width: crate::config::defaults::default_window_width(),
            window_height: crate::config::defaults::default_window_height(),
            github_user: crate::config::defaults::default_github_user(),
            weather_latitude: crate::config::defaults::default_weather_latitude(),
            weather_longitude: crate::config::defaults::default_weather_longitude(),
            drag_threshold_fraction: crate::config::defaults::default_drag_threshold_fraction(),
            transition_ms: crate::config::defaults::default_transition_ms(),
            fetch_timeout_secs: crate::config::defaults::default_fetch_timeout_secs(),
            widget_refresh_secs: crate::config::defaults::default_widget_refresh_secs(),
            satellite_refresh_secs: crate::config::defaults::default_satellite_refresh_secs(),
            log_level: crate::config::defaults::default_log_level(),
        }
    }
}

/// Supported logging verbosity levels.
#[derive(Debug, Clone, Copy, Deserialize, serde::Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Trace,
    Debug,
    Info,
    Warn,
    Error,
}

impl Default for LogLevel {
    fn default() -> Self {
        LogLevel::Info
    }
}

impl std::fmt::Display for LogLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_filter_str())
    }
}

impl LogLevel {
    pub fn as_filter_str(self) -> &'static str {
        match self {
            LogLevel::Trace => "trace",
            LogLevel::Debug => "debug",
            LogLevel::Info => "info",
            LogLevel::Warn => "warn",
            LogLevel::Error => "error",
        }
    }
}
