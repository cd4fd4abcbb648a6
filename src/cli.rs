use std::path::PathBuf;

use clap::Parser;

use crate::config::Config;

/// Terminal counter widget.
#[derive(Debug, Parser)]
#[command(name = "counter-tui", version, about)]
pub struct Cli {
    /// Config file (default: <config_dir>/counter-tui/config.toml).
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Log file, overrides `logging.file`.
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    /// Log filter, overrides `logging.level` (RUST_LOG still wins).
    #[arg(long, value_name = "LEVEL")]
    pub log_level: Option<String>,

    /// Print the default configuration as TOML and exit.
    #[arg(long)]
    pub print_default_config: bool,
}

impl Cli {
    pub fn config_path(&self) -> PathBuf {
        self.config.clone().unwrap_or_else(Config::config_path)
    }

    /// Apply command-line overrides on top of the loaded config.
    pub fn apply(&self, config: &mut Config) {
        if let Some(path) = &self.log_file {
            config.logging.file = Some(path.clone());
        }
        if let Some(level) = &self.log_level {
            config.logging.level = level.clone();
        }
    }
}
