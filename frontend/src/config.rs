use log::LevelFilter;

/// Build-time setting for the browser log level.
const LOG_LEVEL_VAR: Option<&str> = option_env!("RESOURCE_FORM_LOG_LEVEL");

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AppConfig {
    pub log_level: LevelFilter,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            log_level: LevelFilter::Info,
        }
    }
}

impl AppConfig {
    /// Configuration baked in when the WASM bundle was compiled.
    pub fn from_build_env() -> Self {
        Self::from_values(LOG_LEVEL_VAR)
    }

    /// Unset or unrecognized values fall back to the defaults.
    pub fn from_values(log_level: Option<&str>) -> Self {
        let defaults = Self::default();
        Self {
            log_level: log_level
                .and_then(|level| level.trim().parse().ok())
                .unwrap_or(defaults.log_level),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_defaults() {
        let config = AppConfig::from_values(None);
        assert_eq!(config.log_level, LevelFilter::Info);
        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn test_config_log_level() {
        assert_eq!(AppConfig::from_values(Some("debug")).log_level, LevelFilter::Debug);
        assert_eq!(AppConfig::from_values(Some("WARN")).log_level, LevelFilter::Warn);
        assert_eq!(AppConfig::from_values(Some(" off ")).log_level, LevelFilter::Off);
    }

    #[test]
    fn test_config_invalid_log_level_falls_back() {
        assert_eq!(AppConfig::from_values(Some("loud")).log_level, LevelFilter::Info);
        assert_eq!(AppConfig::from_values(Some("")).log_level, LevelFilter::Info);
    }
}
