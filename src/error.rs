//! Error handling types and utilities.

use std::path::PathBuf;

/// Error returned when loading the search dataset fails.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    /// Dataset file not found at the expected path.
    #[error("Search data not found at {}", path.display())]
    NotFound { path: PathBuf },
    /// Failed to read or parse the dataset file.
    #[error("Failed to load search data from {}: {error}", path.display())]
    Parse { path: PathBuf, error: String },
}

/// Error returned when a configuration file cannot be used.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file {}: {source}", path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Invalid config file {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },
    #[error("Display limits must be positive (per_group = {per_group}, flat = {flat})")]
    InvalidLimits { per_group: usize, flat: usize },
}
