//! Configuration management for the application.
//!
//! This module handles loading, validating, and saving application configuration
//! in TOML format with platform-specific directory resolution.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

use crate::constants::DEFAULT_OUTPUT_FILE;

/// Environment variable that overrides the config directory.
pub const CONFIG_DIR_ENV: &str = "PRK_KEYMAP_CONFIG_DIR";

/// Output file configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Where the generated script is written (relative paths resolve against
    /// the working directory)
    #[serde(default = "default_output_path")]
    pub path: PathBuf,
}

fn default_output_path() -> PathBuf {
    PathBuf::from(DEFAULT_OUTPUT_FILE)
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            path: default_output_path(),
        }
    }
}

/// Logging configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Default tracing filter when `RUST_LOG` is unset (e.g. "warn", "debug")
    #[serde(default = "default_log_level")]
    pub level: String,
}

fn default_log_level() -> String {
    "warn".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

/// Application configuration.
///
/// # File Location
///
/// - Linux: `~/.config/PrkKeymapGenerator/config.toml`
/// - macOS: `~/Library/Application Support/PrkKeymapGenerator/config.toml`
/// - Windows: `%APPDATA%\PrkKeymapGenerator\config.toml`
///
/// The directory can be overridden with `PRK_KEYMAP_CONFIG_DIR`.
///
/// # Validation
///
/// - `output.path` must not be empty
/// - `logging.level` must be a valid tracing filter directive
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Generated script location
    #[serde(default)]
    pub output: OutputConfig,
    /// Log settings
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Config {
    /// Creates a new Config with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Gets the config directory path.
    ///
    /// Uses `PRK_KEYMAP_CONFIG_DIR` when set, otherwise the platform config
    /// directory joined with `PrkKeymapGenerator`.
    pub fn config_dir() -> Result<PathBuf> {
        if let Some(dir) = std::env::var_os(CONFIG_DIR_ENV) {
            return Ok(PathBuf::from(dir));
        }

        let config_dir = dirs::config_dir()
            .context("Failed to determine config directory")?
            .join("PrkKeymapGenerator");

        Ok(config_dir)
    }

    /// Gets the full path to the config file.
    pub fn config_file_path() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join("config.toml"))
    }

    /// Loads configuration from the config file.
    ///
    /// If the file doesn't exist, returns default configuration.
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_file_path()?)
    }

    /// Loads configuration from an explicit path.
    pub fn load_from(config_path: &std::path::Path) -> Result<Self> {
        if !config_path.exists() {
            return Ok(Self::new());
        }

        let content = fs::read_to_string(config_path).context(format!(
            "Failed to read config file: {}",
            config_path.display()
        ))?;

        let config: Self = toml::from_str(&content).context(format!(
            "Failed to parse config file: {}",
            config_path.display()
        ))?;

        config.validate()?;
        Ok(config)
    }

    /// Saves configuration to `config_path` using atomic write (temp file + rename).
    #[allow(dead_code)]
    pub fn save_to(&self, config_path: &std::path::Path) -> Result<()> {
        self.validate()?;

        if let Some(config_dir) = config_path.parent() {
            fs::create_dir_all(config_dir).context(format!(
                "Failed to create config directory: {}",
                config_dir.display()
            ))?;
        }

        let content = toml::to_string_pretty(self).context("Failed to serialize configuration")?;
        let temp_path = config_path.with_extension("toml.tmp");

        fs::write(&temp_path, content).context(format!(
            "Failed to write temp config file: {}",
            temp_path.display()
        ))?;

        fs::rename(&temp_path, config_path).context(format!(
            "Failed to rename temp config file to: {}",
            config_path.display()
        ))?;

        Ok(())
    }

    /// Validates configuration values.
    pub fn validate(&self) -> Result<()> {
        if self.output.path.as_os_str().is_empty() {
            anyhow::bail!("output.path must not be empty");
        }

        EnvFilter::try_new(&self.logging.level)
            .with_context(|| format!("Invalid logging.level: '{}'", self.logging.level))?;

        Ok(())
    }
}
