//! Configuration management for the application.
//!
//! This module handles loading, validating, and saving application configuration
//! in TOML format with platform-specific directory resolution.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::constants::{CONFIG_DIR_NAME, MAX_WIDTH};
use crate::models::{StreetSection, DEFAULT_WIDTH_LIMIT};

/// Theme display mode preference.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default, clap::ValueEnum,
)]
pub enum ThemeMode {
    /// Automatically detect OS theme (dark/light)
    #[default]
    Auto,
    /// Always use dark theme
    Dark,
    /// Always use light theme
    Light,
}

/// Settings for the section a session starts with.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StreetConfig {
    /// Total street width in meters
    #[serde(default = "default_width_limit")]
    pub width_limit: f64,
    /// Start with no elements instead of the starter street
    #[serde(default)]
    pub start_empty: bool,
}

fn default_width_limit() -> f64 {
    DEFAULT_WIDTH_LIMIT
}

impl Default for StreetConfig {
    fn default() -> Self {
        Self {
            width_limit: default_width_limit(),
            start_empty: false,
        }
    }
}

/// UI preferences configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UiConfig {
    /// Display help on startup
    #[serde(default = "default_true")]
    pub show_help_on_startup: bool,
    /// Theme mode preference (Auto, Dark, Light)
    #[serde(default)]
    pub theme_mode: ThemeMode,
    /// Event poll timeout, also the animation frame interval
    #[serde(default = "default_tick_rate_ms")]
    pub tick_rate_ms: u64,
}

fn default_true() -> bool {
    true
}

/// Default tick rate (10 frames per second)
fn default_tick_rate_ms() -> u64 {
    100
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            show_help_on_startup: true,
            theme_mode: ThemeMode::default(),
            tick_rate_ms: default_tick_rate_ms(),
        }
    }
}

/// Application configuration.
///
/// # File Location
///
/// - Linux: `~/.config/StreetSection/config.toml`
/// - macOS: `~/Library/Application Support/StreetSection/config.toml`
/// - Windows: `%APPDATA%\StreetSection\config.toml`
///
/// # Validation
///
/// - `street.width_limit` must be a finite number in `0..=MAX_WIDTH`
/// - `ui.tick_rate_ms` must be greater than zero
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Config {
    /// Starting section settings
    #[serde(default)]
    pub street: StreetConfig,
    /// UI preferences
    #[serde(default)]
    pub ui: UiConfig,
}

impl Config {
    /// Creates a new Config with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Gets the platform-specific config directory path.
    pub fn config_dir() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .context("Failed to determine config directory")?
            .join(CONFIG_DIR_NAME);

        Ok(config_dir)
    }

    /// Gets the full path to the config file.
    pub fn config_file_path() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join("config.toml"))
    }

    /// Loads configuration from the platform config file.
    ///
    /// If the file doesn't exist, returns default configuration.
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_file_path()?)
    }

    /// Loads configuration from a specific file, defaulting if it is missing.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::new());
        }

        let content = fs::read_to_string(path)
            .context(format!("Failed to read config file: {}", path.display()))?;

        let config: Self = toml::from_str(&content)
            .context(format!("Failed to parse config file: {}", path.display()))?;

        config.validate()?;
        Ok(config)
    }

    /// Saves configuration to the platform config file and returns its path.
    pub fn save(&self) -> Result<PathBuf> {
        let config_path = Self::config_file_path()?;
        self.save_to(&config_path)?;
        Ok(config_path)
    }

    /// Saves configuration to `path` using atomic write.
    ///
    /// Uses temp file + rename pattern for atomic writes.
    pub fn save_to(&self, path: &Path) -> Result<()> {
        self.validate()?;

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).context(format!(
                "Failed to create config directory: {}",
                parent.display()
            ))?;
        }

        let content = toml::to_string_pretty(self).context("Failed to serialize configuration")?;
        let temp_path = path.with_extension("toml.tmp");

        fs::write(&temp_path, content).context(format!(
            "Failed to write temp config file: {}",
            temp_path.display()
        ))?;

        fs::rename(&temp_path, path).context(format!(
            "Failed to rename temp config file to: {}",
            path.display()
        ))?;

        Ok(())
    }

    /// Validates configuration values.
    pub fn validate(&self) -> Result<()> {
        let limit = self.street.width_limit;
        if !limit.is_finite() || !(0.0..=MAX_WIDTH).contains(&limit) {
            anyhow::bail!("street.width_limit must be between 0 and {MAX_WIDTH}, got {limit}");
        }

        if self.ui.tick_rate_ms == 0 {
            anyhow::bail!("ui.tick_rate_ms must be greater than zero");
        }

        Ok(())
    }

    /// Event poll timeout for the TUI loop.
    #[must_use]
    pub const fn tick_rate(&self) -> Duration {
        Duration::from_millis(self.ui.tick_rate_ms)
    }

    /// Builds the section a new session starts with.
    #[must_use]
    pub fn initial_section(&self) -> StreetSection {
        if self.street.start_empty {
            StreetSection::new(self.street.width_limit)
        } else {
            StreetSection::starter(self.street.width_limit)
        }
    }
}
