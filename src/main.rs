use clap::Parser;

mod cli;
mod commands;
mod domain;
mod services;

use cli::Cli;
use commands::handle_commands;
use services::config::load_config;
use services::logging::setup_tracing;

fn main() -> anyhow::Result<()> {
    setup_tracing();
    let cli = Cli::parse();
    let config = load_config()?;
    tracing::debug!(?cli, max_steps = config.max_steps, "starting");

    handle_commands(&cli, &config)
}
