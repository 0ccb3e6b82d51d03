//! Configuration file loading with precedence handling.

use crate::model::{Height, PanelMetrics};
use serde::Deserialize;
use std::path::PathBuf;
use thiserror::Error;
use tracing::warn;

/// Environment variable naming an explicit config file.
pub const ENV_CONFIG: &str = "COMPOSER_BAR_CONFIG";
/// Environment override for the simulated keyboard height.
pub const ENV_KEYBOARD_HEIGHT: &str = "COMPOSER_BAR_KEYBOARD_HEIGHT";
/// Environment override for the safe-area inset.
pub const ENV_SAFE_AREA_INSET: &str = "COMPOSER_BAR_SAFE_AREA_INSET";

/// Default height reported by the simulated system keyboard.
pub const DEFAULT_KEYBOARD_HEIGHT: f64 = 291.0;

/// Errors that can occur during config loading.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ConfigError {
    /// Failed to read config file (file may not exist or have permission issues).
    #[error("Failed to read config file at {path}: {reason}")]
    ReadError {
        /// Path that failed to read.
        path: PathBuf,
        /// Reason for failure.
        reason: String,
    },

    /// Config file contains invalid TOML syntax or unknown keys.
    #[error("Invalid TOML in {path}: {reason}")]
    ParseError {
        /// Path with invalid TOML.
        path: PathBuf,
        /// Parse error details.
        reason: String,
    },

    /// A height setting is negative or not finite.
    #[error("Invalid value for {field}: {value}")]
    InvalidValue {
        /// Config key.
        field: &'static str,
        /// Rejected value.
        value: f64,
    },
}

/// TOML configuration file structure.
///
/// All fields are optional - if not specified, hardcoded defaults are used.
/// Corresponds to `~/.config/composer-bar/config.toml`.
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct ConfigFile {
    /// Bottom safe-area inset in points.
    #[serde(default)]
    pub safe_area_inset: Option<f64>,

    /// Emoji panel height in points.
    #[serde(default)]
    pub emoji_panel_height: Option<f64>,

    /// Plus (attachment) panel height in points.
    #[serde(default)]
    pub plus_panel_height: Option<f64>,

    /// Height reported by the simulated keyboard in the terminal demo.
    #[serde(default)]
    pub keyboard_height: Option<f64>,

    /// Path to log file for tracing output.
    #[serde(default)]
    pub log_file_path: Option<PathBuf>,
}

/// Resolved configuration after applying precedence rules.
///
/// Created by merging defaults, config file, env vars, and CLI args.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedConfig {
    /// Inset while idle, in device-independent units.
    pub safe_area_inset: Height,
    /// Height of the emoji panel.
    pub emoji_panel_height: Height,
    /// Height of the plus panel.
    pub plus_panel_height: Height,
    /// Height the simulated keyboard reports when it shows.
    pub keyboard_height: Height,
    /// Path to log file for tracing output.
    pub log_file_path: PathBuf,
}

impl Default for ResolvedConfig {
    fn default() -> Self {
        let metrics = PanelMetrics::default();
        Self {
            safe_area_inset: metrics.safe_area_inset,
            emoji_panel_height: metrics.emoji_height,
            plus_panel_height: metrics.plus_height,
            keyboard_height: Height::new(DEFAULT_KEYBOARD_HEIGHT).unwrap_or(Height::ZERO),
            log_file_path: default_log_path(),
        }
    }
}

impl ResolvedConfig {
    /// Panel sizes for the controller.
    pub fn metrics(&self) -> PanelMetrics {
        PanelMetrics {
            safe_area_inset: self.safe_area_inset,
            emoji_height: self.emoji_panel_height,
            plus_height: self.plus_panel_height,
        }
    }
}

/// Resolve default log file path.
///
/// Returns `~/.local/state/composer-bar/composer-bar.log` on Unix-like systems,
/// or appropriate platform path on other systems.
///
/// If state directory cannot be determined, falls back to current directory.
pub fn default_log_path() -> PathBuf {
    if let Some(state_dir) = dirs::state_dir() {
        state_dir.join("composer-bar").join("composer-bar.log")
    } else {
        PathBuf::from("composer-bar.log")
    }
}

/// Resolve default config file path.
///
/// Returns `~/.config/composer-bar/config.toml` on Unix, appropriate path on other platforms.
/// Returns `None` if home directory cannot be determined.
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("composer-bar").join("config.toml"))
}

/// Load configuration file from a specific path.
///
/// Returns `Ok(None)` if file doesn't exist (not an error - use defaults).
///
/// # Errors
///
/// Returns error if file exists but has read or parse errors.
pub fn load_config_file(path: impl Into<PathBuf>) -> Result<Option<ConfigFile>, ConfigError> {
    let path = path.into();

    // Missing file is not an error - use defaults
    if !path.exists() {
        return Ok(None);
    }

    let contents = std::fs::read_to_string(&path).map_err(|e| ConfigError::ReadError {
        path: path.clone(),
        reason: e.to_string(),
    })?;

    let config: ConfigFile = toml::from_str(&contents).map_err(|e| ConfigError::ParseError {
        path: path.clone(),
        reason: e.to_string(),
    })?;

    Ok(Some(config))
}

/// Load configuration with precedence handling.
///
/// Precedence (highest to lowest):
/// 1. Explicit `config_path` argument (CLI `--config`)
/// 2. `COMPOSER_BAR_CONFIG` environment variable
/// 3. Default path `~/.config/composer-bar/config.toml`
///
/// # Errors
///
/// Returns error only if a config file exists but cannot be read or parsed.
pub fn load_config_with_precedence(
    config_path: Option<PathBuf>,
) -> Result<Option<ConfigFile>, ConfigError> {
    if let Some(path) = config_path {
        return load_config_file(path);
    }

    if let Ok(env_path) = std::env::var(ENV_CONFIG) {
        return load_config_file(PathBuf::from(env_path));
    }

    if let Some(default_path) = default_config_path() {
        return load_config_file(default_path);
    }

    Ok(None)
}

fn height_field(
    field: &'static str,
    value: Option<f64>,
    default: Height,
) -> Result<Height, ConfigError> {
    match value {
        None => Ok(default),
        Some(raw) => Height::new(raw).map_err(|_| ConfigError::InvalidValue { field, value: raw }),
    }
}

/// Merge config file into defaults to create resolved config.
///
/// # Errors
///
/// Returns `ConfigError::InvalidValue` for a negative or non-finite height.
pub fn merge_config(config_file: Option<ConfigFile>) -> Result<ResolvedConfig, ConfigError> {
    let defaults = ResolvedConfig::default();

    let Some(config) = config_file else {
        return Ok(defaults);
    };

    Ok(ResolvedConfig {
        safe_area_inset: height_field(
            "safe_area_inset",
            config.safe_area_inset,
            defaults.safe_area_inset,
        )?,
        emoji_panel_height: height_field(
            "emoji_panel_height",
            config.emoji_panel_height,
            defaults.emoji_panel_height,
        )?,
        plus_panel_height: height_field(
            "plus_panel_height",
            config.plus_panel_height,
            defaults.plus_panel_height,
        )?,
        keyboard_height: height_field(
            "keyboard_height",
            config.keyboard_height,
            defaults.keyboard_height,
        )?,
        log_file_path: config.log_file_path.unwrap_or(defaults.log_file_path),
    })
}

fn env_height(name: &str) -> Option<Height> {
    let raw = std::env::var(name).ok()?;
    match raw.trim().parse::<f64>().ok().and_then(|v| Height::new(v).ok()) {
        Some(height) => Some(height),
        None => {
            warn!(var = name, value = %raw, "ignoring invalid height in environment");
            None
        }
    }
}

/// Apply environment variable overrides to resolved config.
///
/// Checks for:
/// - `COMPOSER_BAR_KEYBOARD_HEIGHT`
/// - `COMPOSER_BAR_SAFE_AREA_INSET`
///
/// Unparseable or negative values are logged and ignored.
pub fn apply_env_overrides(mut config: ResolvedConfig) -> ResolvedConfig {
    if let Some(height) = env_height(ENV_KEYBOARD_HEIGHT) {
        config.keyboard_height = height;
    }

    if let Some(inset) = env_height(ENV_SAFE_AREA_INSET) {
        config.safe_area_inset = inset;
    }

    config
}

/// Apply CLI argument overrides to resolved config.
///
/// CLI args have the highest precedence and override all other sources.
/// Only applies overrides for flags that were explicitly set by the user.
///
/// Precedence chain: Defaults → Config File → Env Vars → CLI Args (highest)
pub fn apply_cli_overrides(
    mut config: ResolvedConfig,
    keyboard_height: Option<Height>,
    safe_area_inset: Option<Height>,
) -> ResolvedConfig {
    if let Some(height) = keyboard_height {
        config.keyboard_height = height;
    }

    if let Some(inset) = safe_area_inset {
        config.safe_area_inset = inset;
    }

    config
}

#[cfg(test)]
#[path = "loader_tests.rs"]
mod tests;
