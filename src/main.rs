use anyhow::Context;
use clap::Parser;
use counter_tui::cli::Cli;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    counter_tui::run(cli).context("counter-tui failed")
}
