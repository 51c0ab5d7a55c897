//! # devkit-core
//!
//! Shared configuration and logging for the devkit tools.
//!
//! ## Modules
//!
//! - `config`: Layered TOML configuration for all tools
//! - `logging`: Tracing subscriber setup

pub mod config;
pub mod error;
pub mod logging;

pub use config::{
    expand_path, get_config_home, Config, DiffConfig, FormConfig, LogConfig, PasswordConfig,
    QrConfig, UuidConfig, CURRENT_CONFIG_VERSION, SUPPORTED_CONFIG_VERSIONS,
};
pub use error::{ConfigError, ConfigResult};
