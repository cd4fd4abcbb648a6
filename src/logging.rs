//! File-based tracing setup.
//!
//! The terminal belongs to the UI, so log output goes to a file.

use std::fs::{self, OpenOptions};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use tracing_subscriber::fmt::time::UtcTime;
use tracing_subscriber::EnvFilter;

use crate::error::AppError;

/// `<data_local_dir>/counter-tui/counter-tui.log`, or the current directory
/// when the platform has no data directory.
pub fn default_log_path() -> PathBuf {
    let data_dir = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
    data_dir.join("counter-tui").join("counter-tui.log")
}

/// `RUST_LOG` wins; otherwise `level` is used as the filter directive.
pub fn build_filter(level: &str) -> Result<EnvFilter, AppError> {
    let from_env = std::env::var(EnvFilter::DEFAULT_ENV).ok();
    filter_from(from_env.as_deref(), level)
}

/// A valid `from_env` directive wins; an unset or unparsable one falls back
/// to `level`.
fn filter_from(from_env: Option<&str>, level: &str) -> Result<EnvFilter, AppError> {
    if let Some(filter) = from_env.and_then(|directive| EnvFilter::try_new(directive).ok()) {
        return Ok(filter);
    }
    EnvFilter::try_new(level).map_err(|e| AppError::Logging {
        message: format!("invalid log filter '{level}': {e}"),
    })
}

pub fn init_tracing(level: &str, path: &Path) -> Result<(), AppError> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    let file = OpenOptions::new().create(true).append(true).open(path)?;
    let filter = build_filter(level)?;

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_level(true)
        .with_ansi(false)
        .with_timer(UtcTime::rfc_3339())
        .with_writer(Mutex::new(file))
        .try_init()
        .map_err(|e| AppError::Logging {
            message: e.to_string(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_level_is_a_logging_error() {
        let err = filter_from(None, "counter_tui=loud").unwrap_err();
        assert!(matches!(err, AppError::Logging { .. }));
        assert!(err.to_string().contains("counter_tui=loud"));
    }

    #[test]
    fn env_directive_overrides_level() {
        let filter = filter_from(Some("debug"), "info").unwrap();
        assert_eq!(filter.to_string(), "debug");
    }

    #[test]
    fn unparsable_env_directive_falls_back_to_level() {
        let filter = filter_from(Some("counter_tui=loud"), "warn").unwrap();
        assert_eq!(filter.to_string(), "warn");
    }

    #[test]
    fn default_log_path_names_the_app() {
        let path = default_log_path();
        assert!(path.ends_with("counter-tui/counter-tui.log"));
    }
}
