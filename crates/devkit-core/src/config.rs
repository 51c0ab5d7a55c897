//! Configuration management for devkit
//!
//! Supports tool-specific configuration sections:
//! - [diff] - Line comparator rendering settings
//! - [password] - Password generator defaults
//! - [uuid] - UUID v5 namespace and name defaults
//! - [form] - Form builder output settings
//! - [qr] - QR code size and error correction
//! - [log] - Logging level and destination

use crate::error::{ConfigError, ConfigResult};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Current configuration version
pub const CURRENT_CONFIG_VERSION: &str = "1";

/// Supported configuration versions
pub const SUPPORTED_CONFIG_VERSIONS: &[&str] = &["1"];

/// Repo-local config file name, looked up in the working directory
pub const REPO_CONFIG_FILE: &str = ".devkit.toml";

/// Root configuration structure supporting multiple tools
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Configuration version for tracking schema changes
    #[serde(default = "default_config_version")]
    pub version: String,

    #[serde(default)]
    pub diff: Option<DiffConfig>,

    #[serde(default)]
    pub password: Option<PasswordConfig>,

    #[serde(default)]
    pub uuid: Option<UuidConfig>,

    #[serde(default)]
    pub form: Option<FormConfig>,

    #[serde(default)]
    pub log: Option<LogConfig>,

    #[serde(default)]
    pub qr: Option<QrConfig>,

    /// Implicit layers that failed to load, kept until logging is up
    #[serde(skip)]
    pub skipped_layers: Vec<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            version: default_config_version(),
            diff: None,
            password: None,
            uuid: None,
            form: None,
            log: None,
            qr: None,
            skipped_layers: Vec::new(),
        }
    }
}

/// Rendering settings for the line comparator
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiffConfig {
    /// Column width of the old side in side-by-side output
    #[serde(default = "default_diff_width")]
    pub width: usize,

    /// Only print rows that differ
    #[serde(default)]
    pub only_changes: bool,

    /// Print `-`/`+` pairs instead of two columns
    #[serde(default)]
    pub unified: bool,
}

impl Default for DiffConfig {
    fn default() -> Self {
        Self {
            width: default_diff_width(),
            only_changes: false,
            unified: false,
        }
    }
}

/// Default character classes and length for generated passwords
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PasswordConfig {
    #[serde(default = "default_password_length")]
    pub length: usize,

    #[serde(default = "default_true")]
    pub uppercase: bool,

    #[serde(default = "default_true")]
    pub lowercase: bool,

    #[serde(default = "default_true")]
    pub numbers: bool,

    #[serde(default = "default_true")]
    pub symbols: bool,
}

impl Default for PasswordConfig {
    fn default() -> Self {
        Self {
            length: default_password_length(),
            uppercase: true,
            lowercase: true,
            numbers: true,
            symbols: true,
        }
    }
}

/// Defaults for name-based (v5) UUIDs
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UuidConfig {
    /// One of `dns`, `url`, `oid`, `x500`
    #[serde(default = "default_uuid_namespace")]
    pub namespace: String,

    #[serde(default = "default_uuid_name")]
    pub name: String,
}

impl Default for UuidConfig {
    fn default() -> Self {
        Self {
            namespace: default_uuid_namespace(),
            name: default_uuid_name(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormConfig {
    /// Append the stylesheet block after the form markup
    #[serde(default = "default_true")]
    pub include_style: bool,

    #[serde(default = "default_form_title")]
    pub title: String,
}

impl Default for FormConfig {
    fn default() -> Self {
        Self {
            include_style: true,
            title: default_form_title(),
        }
    }
}

/// QR code output defaults
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QrConfig {
    /// Edge length in pixels for SVG output, 128-512
    #[serde(default = "default_qr_size")]
    pub size: u32,

    /// Error correction level: L, M, Q or H
    #[serde(default = "default_qr_level")]
    pub error_correction: String,
}

impl Default for QrConfig {
    fn default() -> Self {
        Self {
            size: default_qr_size(),
            error_correction: default_qr_level(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogConfig {
    /// Filter directive used when RUST_LOG is not set
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Write logs to this file instead of stderr
    #[serde(default)]
    pub file: Option<String>,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            file: None,
        }
    }
}

fn default_config_version() -> String {
    CURRENT_CONFIG_VERSION.to_string()
}

fn default_true() -> bool {
    true
}

fn default_diff_width() -> usize {
    40
}

fn default_password_length() -> usize {
    12
}

fn default_uuid_namespace() -> String {
    "dns".to_string()
}

fn default_uuid_name() -> String {
    "example.com".to_string()
}

fn default_form_title() -> String {
    "Generated Form".to_string()
}

fn default_qr_size() -> u32 {
    256
}

fn default_qr_level() -> String {
    "L".to_string()
}

fn default_log_level() -> String {
    "warn".to_string()
}

/// Get the config home directory, respecting XDG_CONFIG_HOME
pub fn get_config_home() -> Option<PathBuf> {
    match std::env::var_os("XDG_CONFIG_HOME") {
        Some(dir) if !dir.is_empty() => Some(PathBuf::from(dir)),
        _ => dirs::home_dir().map(|h| h.join(".config")),
    }
}

/// Expand a leading tilde to the home directory
pub fn expand_path(path: &str) -> String {
    if let Some(rest) = path.strip_prefix("~/") {
        if let Some(home) = dirs::home_dir() {
            return home.join(rest).to_string_lossy().to_string();
        }
    } else if path == "~" {
        if let Some(home) = dirs::home_dir() {
            return home.to_string_lossy().to_string();
        }
    }
    path.to_string()
}

impl Config {
    /// Check if the configuration version is supported
    pub fn is_version_supported(&self) -> bool {
        SUPPORTED_CONFIG_VERSIONS.contains(&self.version.as_str())
    }

    /// Get a warning message for unsupported versions
    pub fn version_warning(&self) -> Option<String> {
        if !self.is_version_supported() {
            Some(format!(
                "Configuration version '{}' is not supported. Supported versions: {}. Using defaults where needed.",
                self.version,
                SUPPORTED_CONFIG_VERSIONS.join(", ")
            ))
        } else {
            None
        }
    }

    /// Load configuration from file
    pub fn load_from_file(path: &Path) -> ConfigResult<Self> {
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let mut config: Config = toml::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;

        if config.version.is_empty() {
            config.version = CURRENT_CONFIG_VERSION.to_string();
        }

        debug!(path = %path.display(), "loaded config");
        Ok(config)
    }

    /// Get the default config directory path
    pub fn get_config_dir() -> Option<PathBuf> {
        get_config_home().map(|h| h.join("devkit"))
    }

    /// Load configuration with priority:
    /// 1. Defaults
    /// 2. Global config ($XDG_CONFIG_HOME/devkit/config.toml)
    /// 3. Repo config (.devkit.toml)
    /// 4. Explicit config path
    pub fn load(explicit: Option<&str>) -> ConfigResult<Self> {
        let mut implicit = Vec::new();
        if let Some(config_dir) = Self::get_config_dir() {
            implicit.push(config_dir.join("config.toml"));
        }
        implicit.push(PathBuf::from(REPO_CONFIG_FILE));

        let explicit = explicit.map(|p| PathBuf::from(expand_path(p)));
        Self::load_layers(&implicit, explicit.as_deref())
    }

    /// Merge the given layers over the defaults.
    ///
    /// Missing implicit layers are ignored and broken ones are recorded in
    /// `skipped_layers`; the explicit layer must load.
    pub fn load_layers(implicit: &[PathBuf], explicit: Option<&Path>) -> ConfigResult<Self> {
        let mut config = Self::default();

        for path in implicit {
            if !path.exists() {
                continue;
            }
            match Self::load_from_file(path) {
                Ok(loaded) => config = config.merge(loaded),
                Err(e) => {
                    debug!(path = %path.display(), "skipping broken config layer");
                    config.skipped_layers.push(format!("Skipping config: {}", e));
                }
            }
        }

        if let Some(path) = explicit {
            config = config.merge(Self::load_from_file(path)?);
        }

        Ok(config)
    }

    /// Merge another config into this one (other takes precedence)
    pub fn merge(mut self, other: Config) -> Self {
        if !other.version.is_empty() {
            self.version = other.version;
        }

        if other.diff.is_some() {
            self.diff = other.diff;
        }
        if other.password.is_some() {
            self.password = other.password;
        }
        if other.uuid.is_some() {
            self.uuid = other.uuid;
        }
        if other.form.is_some() {
            self.form = other.form;
        }
        if other.log.is_some() {
            self.log = other.log;
        }
        if other.qr.is_some() {
            self.qr = other.qr;
        }
        self.skipped_layers.extend(other.skipped_layers);
        self
    }

    /// Everything worth telling the user about this config: skipped layers,
    /// then the version check. Loading runs before logging is set up, so the
    /// caller emits these.
    pub fn warnings(&self) -> Vec<String> {
        let mut warnings = self.skipped_layers.clone();
        warnings.extend(self.version_warning());
        warnings
    }

    pub fn diff_settings(&self) -> DiffConfig {
        self.diff.clone().unwrap_or_default()
    }

    pub fn password_settings(&self) -> PasswordConfig {
        self.password.clone().unwrap_or_default()
    }

    pub fn uuid_settings(&self) -> UuidConfig {
        self.uuid.clone().unwrap_or_default()
    }

    pub fn form_settings(&self) -> FormConfig {
        self.form.clone().unwrap_or_default()
    }

    pub fn log_settings(&self) -> LogConfig {
        self.log.clone().unwrap_or_default()
    }

    pub fn qr_settings(&self) -> QrConfig {
        self.qr.clone().unwrap_or_default()
    }
}
