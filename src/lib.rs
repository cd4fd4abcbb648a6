pub mod cli;
pub mod config;
pub mod error;
pub mod logging;
pub mod ui;

use std::io::Write;

use crate::cli::Cli;
use crate::config::Config;
use crate::error::AppError;
use crate::logging::{default_log_path, init_tracing};

/// Entry point shared by the binary: load config, set up logging, run the UI.
pub fn run(cli: Cli) -> Result<(), AppError> {
    if cli.print_default_config {
        let rendered = Config::default().to_toml()?;
        std::io::stdout().write_all(rendered.as_bytes())?;
        return Ok(());
    }

    let path = cli.config_path();
    let mut config = Config::load_from(&path)?;
    cli.apply(&mut config);

    let log_path = config
        .logging
        .file
        .clone()
        .unwrap_or_else(default_log_path);
    init_tracing(&config.logging.level, &log_path)?;
    tracing::info!(config = %path.display(), log = %log_path.display(), "starting counter-tui");

    ui::runtime::run(&config)?;
    Ok(())
}
