use std::path::Path;

use tracing::warn;

use crate::error::ConfigError;
use crate::game::{Player, SessionConfig};
use crate::history::SaveConfig;

/// Top-level application configuration, loadable from TOML.
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub session: SessionConfig,
    pub saves: SaveConfig,
}

impl AppConfig {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;
        let config: AppConfig = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file, falling back to defaults if the file
    /// does not exist.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::load(path)
        } else {
            warn!(path = %path.display(), "config file not found, using defaults");
            Ok(Self::default())
        }
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if Player::from_id(self.session.human_player).is_none() {
            return Err(ConfigError::Validation(
                "session.human_player must be 1 or 2".into(),
            ));
        }
        if self.saves.base_name.trim().is_empty() {
            return Err(ConfigError::Validation(
                "saves.base_name must not be empty".into(),
            ));
        }
        if self.saves.base_name.contains(['/', '\\']) {
            return Err(ConfigError::Validation(
                "saves.base_name must not contain path separators".into(),
            ));
        }
        Ok(())
    }

    /// Generate a TOML string with all default values (useful for creating
    /// example config files).
    pub fn default_toml() -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(&AppConfig::default())
    }
}
