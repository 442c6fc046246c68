//! Configuration file loading with precedence handling.

use crate::model::ModuleVariant;
use serde::Deserialize;
use std::path::PathBuf;
use thiserror::Error;

/// Environment variable naming an explicit config file.
pub const CONFIG_PATH_ENV: &str = "MODULE_DETAIL_CONFIG";

/// Environment variable overriding the initial module.
pub const MODULE_ENV: &str = "MODULE_DETAIL_MODULE";

/// Environment variable overriding settings affordance visibility.
pub const SHOW_SETTINGS_ENV: &str = "MODULE_DETAIL_SHOW_SETTINGS";

/// Errors that can occur during config loading.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Failed to read config file (file may not exist or have permission issues).
    #[error("Failed to read config file at {path}: {reason}")]
    ReadError {
        /// Path that failed to read.
        path: PathBuf,
        /// Reason for failure.
        reason: String,
    },

    /// Config file contains invalid TOML syntax or an unknown module.
    #[error("Invalid TOML in {path}: {reason}")]
    ParseError {
        /// Path with invalid TOML.
        path: PathBuf,
        /// Parse error details.
        reason: String,
    },

    /// A field parsed but holds an unusable value.
    #[error("Invalid value for `{field}` in {path}: {reason}")]
    InvalidValue {
        /// Path of the offending file.
        path: PathBuf,
        /// Field name as written in the file.
        field: &'static str,
        /// Why the value was rejected.
        reason: String,
    },

    /// An environment override holds a value that cannot be used.
    #[error("Invalid value {value:?} in ${var}: {reason}")]
    InvalidEnvValue {
        /// Name of the environment variable.
        var: &'static str,
        /// Value as found in the environment.
        value: String,
        /// Why the value was rejected.
        reason: String,
    },
}

/// TOML configuration file structure.
///
/// All fields are optional - if not specified, hardcoded defaults are used.
/// Corresponds to `~/.config/module-detail/config.toml`.
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct ConfigFile {
    /// Module shown on startup (`"globe"`, `"orbit"` or `"solar"`).
    #[serde(default)]
    pub module: Option<ModuleVariant>,

    /// Whether the settings affordance is shown.
    #[serde(default)]
    pub show_settings: Option<bool>,

    /// Layout points represented by one terminal column in the preview.
    #[serde(default)]
    pub points_per_column: Option<f64>,

    /// Layout points represented by one terminal row in the preview.
    #[serde(default)]
    pub points_per_row: Option<f64>,

    /// Path to log file for tracing output.
    #[serde(default)]
    pub log_file_path: Option<PathBuf>,
}

/// Resolved configuration after applying precedence rules.
///
/// Created by merging defaults, config file, env vars, and CLI args.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedConfig {
    /// Module shown on startup.
    pub module: ModuleVariant,
    /// Settings affordance visibility.
    pub show_settings: bool,
    /// Horizontal preview scale.
    pub points_per_column: f64,
    /// Vertical preview scale.
    pub points_per_row: f64,
    /// Path to log file for tracing output.
    pub log_file_path: PathBuf,
}

impl Default for ResolvedConfig {
    fn default() -> Self {
        Self {
            module: ModuleVariant::Globe,
            show_settings: false,
            points_per_column: 10.0,
            points_per_row: 20.0,
            log_file_path: default_log_path(),
        }
    }
}

/// Resolve default log file path.
///
/// Returns `~/.local/state/module-detail/module-detail.log` on Unix-like
/// systems, or the platform equivalent.
///
/// If state directory cannot be determined, falls back to current directory.
pub fn default_log_path() -> PathBuf {
    if let Some(state_dir) = dirs::state_dir() {
        state_dir.join("module-detail").join("module-detail.log")
    } else {
        PathBuf::from("module-detail.log")
    }
}

/// Load configuration file from a specific path.
///
/// Returns `Ok(None)` if file doesn't exist (not an error - use defaults).
/// Returns `Err` if file exists but cannot be read, parsed, or validated.
///
/// # Errors
///
/// Returns error if file exists but has read, parse or value errors.
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

    validate_scale(&path, "points_per_column", config.points_per_column)?;
    validate_scale(&path, "points_per_row", config.points_per_row)?;

    Ok(Some(config))
}

fn validate_scale(
    path: &std::path::Path,
    field: &'static str,
    value: Option<f64>,
) -> Result<(), ConfigError> {
    match value {
        Some(v) if !v.is_finite() || v <= 0.0 => Err(ConfigError::InvalidValue {
            path: path.to_path_buf(),
            field,
            reason: format!("must be a positive number, got {v}"),
        }),
        _ => Ok(()),
    }
}

/// Resolve default config file path.
///
/// Returns `~/.config/module-detail/config.toml` on Unix, appropriate path
/// on other platforms. Returns `None` if home directory cannot be determined.
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("module-detail").join("config.toml"))
}

/// Load configuration with precedence handling.
///
/// Precedence (highest to lowest):
/// 1. Explicit `config_path` argument (CLI `--config`)
/// 2. `MODULE_DETAIL_CONFIG` environment variable
/// 3. Default path `~/.config/module-detail/config.toml`
///
/// Missing config files are NOT errors - defaults are used.
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

    if let Ok(env_path) = std::env::var(CONFIG_PATH_ENV) {
        return load_config_file(PathBuf::from(env_path));
    }

    if let Some(default_path) = default_config_path() {
        return load_config_file(default_path);
    }

    Ok(None)
}

/// Apply environment variable overrides to resolved config.
///
/// Checks for:
/// - `MODULE_DETAIL_MODULE`: Override the startup module
/// - `MODULE_DETAIL_SHOW_SETTINGS`: `1`/`true`/`yes`/`on` or `0`/`false`/`no`/`off`
///
/// # Errors
///
/// Returns [`ConfigError::InvalidEnvValue`] if either variable is set to a
/// value that does not parse, matching how a bad `module` in the config
/// file or on the command line is rejected.
pub fn apply_env_overrides(mut config: ResolvedConfig) -> Result<ResolvedConfig, ConfigError> {
    if let Ok(value) = std::env::var(MODULE_ENV) {
        config.module = value
            .parse::<ModuleVariant>()
            .map_err(|err| ConfigError::InvalidEnvValue {
                var: MODULE_ENV,
                value: value.clone(),
                reason: err.to_string(),
            })?;
    }

    if let Ok(value) = std::env::var(SHOW_SETTINGS_ENV) {
        config.show_settings =
            parse_flag(&value).ok_or_else(|| ConfigError::InvalidEnvValue {
                var: SHOW_SETTINGS_ENV,
                value: value.clone(),
                reason: "expected one of 1/true/yes/on or 0/false/no/off".to_string(),
            })?;
    }

    Ok(config)
}

fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

/// Merge config file into defaults to create resolved config.
///
/// For each field in `ConfigFile`, if `Some(value)`, use it; otherwise use default.
pub fn merge_config(config_file: Option<ConfigFile>) -> ResolvedConfig {
    let defaults = ResolvedConfig::default();

    let Some(config) = config_file else {
        return defaults;
    };

    ResolvedConfig {
        module: config.module.unwrap_or(defaults.module),
        show_settings: config.show_settings.unwrap_or(defaults.show_settings),
        points_per_column: config
            .points_per_column
            .unwrap_or(defaults.points_per_column),
        points_per_row: config.points_per_row.unwrap_or(defaults.points_per_row),
        log_file_path: config.log_file_path.unwrap_or(defaults.log_file_path),
    }
}

/// Apply CLI argument overrides to resolved config.
///
/// CLI args have the highest precedence and override all other sources.
/// Only applies overrides for flags that were explicitly set by the user.
///
/// Precedence chain: Defaults → Config File → Env Vars → CLI Args (highest)
pub fn apply_cli_overrides(
    mut config: ResolvedConfig,
    module_override: Option<ModuleVariant>,
    settings_override: Option<bool>,
) -> ResolvedConfig {
    if let Some(module) = module_override {
        config.module = module;
    }

    if let Some(show) = settings_override {
        config.show_settings = show;
    }

    config
}

#[cfg(test)]
#[path = "loader_tests.rs"]
mod tests;
