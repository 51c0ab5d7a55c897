//! Tracing subscriber setup shared by the devkit binaries

use crate::config::{expand_path, LogConfig};
use crate::error::{ConfigError, ConfigResult};
use std::path::Path;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

/// Build the filter: RUST_LOG wins, otherwise the configured level.
pub fn build_filter(level: &str) -> EnvFilter {
    EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(level))
        .unwrap_or_else(|_| EnvFilter::new("warn"))
}

/// Install the global subscriber.
///
/// Logs go to stderr unless `file` is set. The returned guard must be held
/// for the lifetime of the program when logging to a file, or buffered lines
/// are lost. Calling this twice is harmless; the second call keeps the first
/// subscriber.
pub fn init(config: &LogConfig) -> ConfigResult<Option<WorkerGuard>> {
    let filter = build_filter(&config.level);

    let Some(file) = config.file.as_deref() else {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .with_target(false)
            .compact()
            .try_init();
        return Ok(None);
    };

    let path = expand_path(file);
    let path = Path::new(&path);
    let dir = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };
    let file_name = path
        .file_name()
        .ok_or_else(|| ConfigError::Logging(format!("Invalid log file path: {}", file)))?;

    std::fs::create_dir_all(dir).map_err(|e| {
        ConfigError::Logging(format!(
            "Failed to create log directory {}: {}",
            dir.display(),
            e
        ))
    })?;

    let appender = tracing_appender::rolling::never(dir, file_name);
    let (writer, guard) = tracing_appender::non_blocking(appender);

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(writer)
        .with_ansi(false)
        .try_init();

    Ok(Some(guard))
}
