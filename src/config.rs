//! Configuration loading.
//!
//! Settings come from a TOML file, looked up in this order:
//! 1. An explicit path (the `--config` flag)
//! 2. `$JAZZNODE_SEARCH_CONFIG`
//! 3. `<config dir>/jazznode-search/config.toml`, if it exists
//!
//! Missing optional files fall back to defaults. Command-line flags are applied
//! on top by the caller.

use crate::error::ConfigError;
use crate::search::DisplayLimits;
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Environment variable naming a config file.
pub const CONFIG_ENV: &str = "JAZZNODE_SEARCH_CONFIG";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// JSON file holding the four record arrays.
    pub data_path: Option<PathBuf>,
    /// Locale used for headings and result routes.
    pub locale: String,
    pub limits: DisplayLimits,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_path: None,
            locale: "en".to_string(),
            limits: DisplayLimits::default(),
        }
    }
}

impl Config {
    /// Parse configuration from TOML text.
    pub fn from_toml(text: &str, path: &Path) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(text).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Read and parse a config file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_toml(&text, path)?;
        tracing::debug!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Resolve and load configuration using the lookup order above.
    pub fn discover(explicit: Option<&Path>) -> Result<Self, ConfigError> {
        if let Some(path) = explicit {
            return Self::load(path);
        }
        if let Some(path) = std::env::var_os(CONFIG_ENV) {
            return Self::load(Path::new(&path));
        }
        match default_path() {
            Some(path) if path.is_file() => Self::load(&path),
            _ => {
                tracing::debug!("No config file found, using defaults");
                Ok(Self::default())
            }
        }
    }

    /// Apply command-line display limits on top of the file settings.
    ///
    /// The result is validated the same way as limits read from a file.
    pub fn override_limits(
        &mut self,
        per_group: Option<usize>,
        flat: Option<usize>,
    ) -> Result<(), ConfigError> {
        if let Some(per_group) = per_group {
            self.limits.per_group = per_group;
        }
        if let Some(flat) = flat {
            self.limits.flat = flat;
        }
        self.validate()
    }

    fn validate(&self) -> Result<(), ConfigError> {
        let DisplayLimits { per_group, flat } = self.limits;
        if per_group == 0 || flat == 0 {
            return Err(ConfigError::InvalidLimits { per_group, flat });
        }
        Ok(())
    }
}

/// Default per-user config location.
pub fn default_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("jazznode-search").join("config.toml"))
}
