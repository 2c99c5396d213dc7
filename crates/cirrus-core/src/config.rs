//! Configuration for the Cirrus wrapper layer

use crate::error::{CoreError, Result};
use serde::{Deserialize, Serialize};
use std::sync::OnceLock;

/// Top-level configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CirrusConfig {
    /// Logging configuration
    pub logging: LoggingConfig,
    /// Main-window defaults
    pub window: WindowDefaults,
    /// Mail submission defaults
    pub mail: MailDefaults,
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Default level directive ("trace" .. "error")
    pub level: String,
}

/// Main-window defaults applied when the host does not override them
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WindowDefaults {
    pub title: String,
    pub width: f32,
    pub height: f32,
    pub resizable: bool,
}

/// Mail submission defaults
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MailDefaults {
    /// Per-host submission timeout in seconds
    pub timeout_secs: u64,
}

impl Default for CirrusConfig {
    fn default() -> Self {
        Self {
            logging: LoggingConfig {
                level: "info".to_string(),
            },
            window: WindowDefaults {
                title: "Cirrus Application".to_string(),
                width: 800.0,
                height: 600.0,
                resizable: true,
            },
            mail: MailDefaults { timeout_secs: 30 },
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        CirrusConfig::default().logging
    }
}

impl Default for WindowDefaults {
    fn default() -> Self {
        CirrusConfig::default().window
    }
}

impl Default for MailDefaults {
    fn default() -> Self {
        CirrusConfig::default().mail
    }
}

impl CirrusConfig {
    /// Parse a configuration from JSON text
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json)
            .map_err(|e| CoreError::configuration(format!("invalid config JSON: {e}")))
    }
}

static CONFIG: OnceLock<CirrusConfig> = OnceLock::new();

/// Install the process-wide configuration.
///
/// Returns false when a configuration was already installed (the first
/// one wins).
pub fn set_config(config: CirrusConfig) -> bool {
    CONFIG.set(config).is_ok()
}

/// The process-wide configuration, falling back to defaults.
pub fn config() -> &'static CirrusConfig {
    CONFIG.get_or_init(CirrusConfig::default)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn defaults_are_sensible() {
        let config = CirrusConfig::default();
        assert_eq!(config.logging.level, "info");
        assert_eq!(config.window.width, 800.0);
        assert!(config.window.resizable);
        assert_eq!(config.mail.timeout_secs, 30);
    }

    #[test]
    fn json_round_trip() {
        let config = CirrusConfig::default();
        let json = serde_json::to_string(&config).unwrap();
        let parsed = CirrusConfig::from_json(&json).unwrap();
        assert_eq!(parsed.window.title, config.window.title);
    }

    #[test]
    fn invalid_json_is_a_configuration_error() {
        let err = CirrusConfig::from_json("{ not json").unwrap_err();
        assert!(matches!(err, CoreError::Configuration(_)));
    }
}
