//! Configuration module for facetnav
//!
//! Settings come from an optional TOML file in the user's config directory,
//! overridden by `FACETNAV_*` environment variables. Nested keys use a double
//! underscore, e.g. `FACETNAV_DISCLOSURE__MAX_ITEMS=12`.

use crate::category::DisclosurePolicy;
use crate::range::DEFAULT_DEBOUNCE;
use config::{Config, ConfigError, Environment, File, FileFormat};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Page size used when a snapshot does not carry `maxItemsPerPage`
pub const DEFAULT_MAX_ITEMS_PER_PAGE: usize = 10;

/// Application configuration structure
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct NavConfig {
    /// Quiet period before a slider value is committed
    pub debounce_ms: u64,

    /// Fallback page size
    pub max_items_per_page: usize,

    /// Collapsing of long child lists
    pub disclosure: DisclosurePolicy,
}

impl Default for NavConfig {
    fn default() -> Self {
        Self {
            debounce_ms: u64::try_from(DEFAULT_DEBOUNCE.as_millis()).unwrap_or(500),
            max_items_per_page: DEFAULT_MAX_ITEMS_PER_PAGE,
            disclosure: DisclosurePolicy::default(),
        }
    }
}

impl NavConfig {
    /// Get the path to the config file
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the system config directory cannot be determined.
    pub fn config_path() -> Result<PathBuf, ConfigError> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| ConfigError::Message("Could not determine config directory".to_string()))?;

        Ok(config_dir.join("facetnav").join("config.toml"))
    }

    /// Load configuration from the default location
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the config directory cannot be determined or
    /// the file or environment cannot be parsed.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(Self::config_path()?)
    }

    /// Load configuration from `path`, falling back to defaults if it doesn't exist
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the file or environment cannot be parsed.
    pub fn load_from(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let settings = Config::builder()
            .add_source(
                File::from(path.as_ref())
                    .format(FileFormat::Toml)
                    .required(false),
            )
            .add_source(
                Environment::with_prefix("FACETNAV")
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        let config: Self = settings.try_deserialize()?;
        config.validate()?;
        Ok(config)
    }

    /// Save configuration to `path`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the parent directory cannot be created, the configuration
    /// cannot be serialized to TOML, or the file cannot be written.
    pub fn save_to(&self, path: impl AsRef<Path>) -> Result<(), ConfigError> {
        let path = path.as_ref();

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .map_err(|e| ConfigError::Message(format!("Failed to create config directory: {e}")))?;
        }

        let toml_string = toml::to_string_pretty(self)
            .map_err(|e| ConfigError::Message(format!("Failed to serialize config: {e}")))?;

        fs::write(path, toml_string)
            .map_err(|e| ConfigError::Message(format!("Failed to write config file: {e}")))?;

        Ok(())
    }

    /// Debounce period as a `Duration`
    #[must_use]
    pub const fn debounce(&self) -> Duration {
        Duration::from_millis(self.debounce_ms)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.max_items_per_page == 0 {
            return Err(ConfigError::Message(
                "max_items_per_page must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}
