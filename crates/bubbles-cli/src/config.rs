//! Configuration file loading for the CLI
//!
//! This module handles finding and loading TOML configuration files
//! from various locations (explicit path, local directory, system directory).

use std::{
    fs,
    path::{Path, PathBuf},
};

use directories::ProjectDirs;
use log::{debug, info};
use thiserror::Error;

use bubbles::{BubblesError, config::AppConfig};

/// Configuration-related errors for CLI
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to parse TOML configuration {path}: {message}")]
    Parse { path: PathBuf, message: String },

    #[error("Missing configuration file: {0}")]
    MissingFile(PathBuf),
}

impl From<ConfigError> for BubblesError {
    fn from(err: ConfigError) -> Self {
        BubblesError::Config(err.to_string())
    }
}

/// Find and load configuration from various locations
///
/// Search order:
/// 1. Explicit path if provided
/// 2. Local project directory (bubbles/config.toml)
/// 3. Platform-specific config directory
/// 4. Default config if none found
///
/// # Errors
///
/// Returns error if:
/// - Explicit path is provided but file doesn't exist
/// - Config file exists but cannot be parsed
pub fn load_config(explicit_path: Option<impl AsRef<Path>>) -> Result<AppConfig, BubblesError> {
    // 1. Try the explicitly provided path first if available
    if let Some(path) = explicit_path {
        let path = path.as_ref();
        info!(path = path.display().to_string(); "Loading configuration from explicit path");
        return load_config_file(path);
    }

    // 2. Try the local project directory
    let local_config = Path::new("bubbles/config.toml");
    if local_config.exists() {
        info!(path = local_config.display().to_string(); "Loading configuration from local path");
        return load_config_file(local_config);
    }

    // 3. Try the platform-specific config directory
    if let Some(proj_dirs) = ProjectDirs::from("com", "bubbles", "bubbles") {
        let system_config = proj_dirs.config_dir().join("config.toml");

        if system_config.exists() {
            info!(path = system_config.display().to_string(); "Loading configuration from system path");
            return load_config_file(system_config);
        }

        debug!(path = system_config.display().to_string(); "System configuration file not found");
    } else {
        debug!("Could not determine platform-specific config directory");
    }

    // 4. If no config is found, return default config
    debug!("No configuration file found, using default configuration");
    Ok(AppConfig::default())
}

/// Load configuration from a TOML file
fn load_config_file(path: impl AsRef<Path>) -> Result<AppConfig, BubblesError> {
    let path = path.as_ref();

    if !path.exists() {
        return Err(ConfigError::MissingFile(path.to_path_buf()).into());
    }

    let content = fs::read_to_string(path)?;

    let config: AppConfig = toml::from_str(&content).map_err(|err| ConfigError::Parse {
        path: path.to_path_buf(),
        message: err.to_string(),
    })?;

    Ok(config)
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::tempdir;

    use bubbles::layout::{ItemOrder, RetryPolicy};

    use super::*;

    #[test]
    fn test_load_explicit_config() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(
            &path,
            r#"
            [layout]
            width = 300.0
            height = 300
            x_offset = 0.0
            radius = 40.0
            margin = 0.0
            separation = "sum_of_radii"
            retry = { bounded = 500 }
            order = "reverse"

            [style]
            palette = ["red", "blue"]
            animate = false
            "#,
        )
        .unwrap();

        let config = load_config(Some(&path)).unwrap();
        let layout = config.layout();

        assert_eq!(layout.region().width(), 300.0);
        assert_eq!(layout.region().height(), 300.0);
        assert_eq!(layout.geometry().padding(), 20.0);
        assert_eq!(layout.geometry().min_distance(), 100.0);
        assert_eq!(layout.retry(), RetryPolicy::Bounded(500));
        assert_eq!(layout.order(), ItemOrder::Reverse);
        assert_eq!(config.style().palette().unwrap().len(), 2);
        assert!(!config.style().animate());
    }

    #[test]
    fn test_unbounded_retry() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "[layout]\nretry = \"unbounded\"\n").unwrap();

        let config = load_config(Some(&path)).unwrap();
        assert_eq!(config.layout().retry(), RetryPolicy::Unbounded);
    }

    #[test]
    fn test_empty_config_uses_defaults() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "").unwrap();

        let config = load_config(Some(&path)).unwrap();
        assert_eq!(config.layout().region().x_offset(), 600.0);
        assert!(config.style().animate());
    }

    #[test]
    fn test_missing_explicit_config() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("missing.toml");

        let err = load_config(Some(&path)).unwrap_err();
        assert!(matches!(err, BubblesError::Config(message) if message.contains("missing.toml")));
    }

    #[test]
    fn test_invalid_config() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "[layout]\nretry = \"sometimes\"\n").unwrap();

        let err = load_config(Some(&path)).unwrap_err();
        assert!(matches!(err, BubblesError::Config(_)));
    }
}
