use thiserror::Error;

use crate::config::ConfigError;

/// Top-level failures surfaced to the binary.
///
/// Counter operations themselves never fail; everything here comes from
/// startup (config, logging) or the terminal.
#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to initialize logging: {message}")]
    Logging { message: String },
}
