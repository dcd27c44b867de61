use super::AppConfig;
use std::path::Path;
use tracing::{debug, warn};

/// Load configuration from the given TOML file, falling back to defaults on
/// any read or parse failure so the UI can still launch.
pub fn load_config(path: &Path) -> AppConfig {
    match std::fs::read_to_string(path) {
        Ok(raw) => parse_config(&raw),
        Err(err) => {
            debug!(path = %path.display(), "No config file, using defaults: {err}");
            AppConfig::default()
        }
    }
}

/// Parse configuration from a TOML string; invalid documents fall back to
/// defaults, missing keys fall back per-field.
pub fn parse_config(raw: &str) -> AppConfig {
    match toml::from_str::<AppConfig>(raw) {
        Ok(config) => config,
        Err(err) => {
            warn!("Invalid config file, using defaults: {err}");
            AppConfig::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::LogLevel;

    #[test]
    fn empty_document_yields_defaults() {
        let config = parse_config("");
        assert_eq!(config.github_user, "corvid-agent");
        assert_eq!(config.transition_ms, 300);
        assert_eq!(config.log_level, LogLevel::Info);
    }

    #[test]
    fn partial_document_overrides_only_named_fields() {
        let config = parse_config(
            r#"
            github_user = "someone-else"
            drag_threshold_fraction = 0.35
            log_level = "debug"
            "#,
        );
        assert_eq!(config.github_user, "someone-else");
        assert!((config.drag_threshold_fraction - 0.35).abs() < f32::EPSILON);
        assert_eq!(config.log_level, LogLevel::Debug);
        // Untouched fields keep their defaults.
        assert_eq!(config.widget_refresh_secs, 600);
        assert_eq!(config.satellite_refresh_secs, 30);
    }

    #[test]
    fn invalid_document_falls_back_to_defaults() {
        let config = parse_config("this is not toml = = =");
        assert_eq!(config.github_user, "corvid-agent");
    }

    #[test]
    fn missing_file_yields_defaults() {
        let config = load_config(std::path::Path::new("/nonexistent/corvid-home.toml"));
        assert_eq!(config.fetch_timeout_secs, 10);
    }
}
