use serde::{Deserialize, Serialize};

/// Root configuration container.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub buttons: ButtonsConfig,
    #[serde(default)]
    pub ui: UiConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Labels and action tags for the two counter buttons.
///
/// Tags other than `increase`/`decrease` are accepted and produce a button
/// whose activation does nothing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ButtonsConfig {
    #[serde(default = "default_increase_label")]
    pub increase_label: String,
    #[serde(default = "default_increase_action")]
    pub increase_action: String,
    #[serde(default = "default_decrease_label")]
    pub decrease_label: String,
    #[serde(default = "default_decrease_action")]
    pub decrease_action: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UiConfig {
    /// Shown in the header (default: "Counter").
    #[serde(default = "default_title")]
    pub title: String,
    /// How long the UI waits for a terminal event before re-checking
    /// whether it should quit, in milliseconds (default: 250).
    #[serde(default = "default_tick_rate_ms")]
    pub tick_rate_ms: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Filter used when `RUST_LOG` is unset (default: "info").
    #[serde(default = "default_log_level")]
    pub level: String,
    /// Log file path. Defaults to the platform data directory.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file: Option<std::path::PathBuf>,
}

fn default_increase_label() -> String {
    "Increase".to_string()
}

fn default_increase_action() -> String {
    "increase".to_string()
}

fn default_decrease_label() -> String {
    "Decrease".to_string()
}

fn default_decrease_action() -> String {
    "decrease".to_string()
}

fn default_title() -> String {
    "Counter".to_string()
}

fn default_tick_rate_ms() -> u64 {
    250
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for ButtonsConfig {
    fn default() -> Self {
        Self {
            increase_label: default_increase_label(),
            increase_action: default_increase_action(),
            decrease_label: default_decrease_label(),
            decrease_action: default_decrease_action(),
        }
    }
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            title: default_title(),
            tick_rate_ms: default_tick_rate_ms(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            file: None,
        }
    }
}
