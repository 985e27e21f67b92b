use serde::{Deserialize, Serialize};
use std::path::Path;

use super::errors::ConfigError;
use super::logging::LoggingConfig;
use super::messages::MessageCatalog;
use super::resolver::ResolverConfig;

/// Top-level configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Config {
    /// Locale used for catalog message lookups (default: "en")
    #[serde(default = "default_locale")]
    pub locale: String,

    #[serde(default)]
    pub resolver: ResolverConfig,

    #[serde(default)]
    pub logging: LoggingConfig,

    #[serde(default)]
    pub messages: MessageCatalog,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            locale: default_locale(),
            resolver: ResolverConfig::default(),
            logging: LoggingConfig::default(),
            messages: MessageCatalog::default(),
        }
    }
}

fn default_locale() -> String {
    "en".to_string()
}

impl Config {
    /// Loads configuration from a TOML file. `None` yields defaults.
    pub fn load(path: Option<&str>) -> Result<Self, ConfigError> {
        match path {
            Some(path) => Self::from_file(path),
            None => Ok(Self::default()),
        }
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::FileRead {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_toml(&content)
    }

    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.locale.trim().is_empty() {
            return Err(ConfigError::Validation("locale cannot be empty".to_string()));
        }

        if self.resolver.timeout_ms == Some(0) {
            return Err(ConfigError::Validation(
                "resolver.timeout_ms must be greater than zero".to_string(),
            ));
        }

        if self.resolver.attempts == Some(0) {
            return Err(ConfigError::Validation(
                "resolver.attempts must be greater than zero".to_string(),
            ));
        }

        if !self.logging.is_known_level() {
            return Err(ConfigError::Validation(format!(
                "unknown log level: {}",
                self.logging.level
            )));
        }

        if let Some((locale, key)) = self.messages.unknown_keys().first() {
            return Err(ConfigError::Validation(format!(
                "unknown message key {key} in locale {locale}"
            )));
        }

        Ok(())
    }
}
