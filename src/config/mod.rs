//! Configuration: TOML file, defaults, validation.

mod loader;
mod types;

pub use loader::ConfigError;
pub use types::{ButtonsConfig, Config, LoggingConfig, UiConfig};
