mod cli;
mod commands;
mod io;

use anyhow::Result;
use clap::Parser;
use cli::Cli;
use devkit_core::{logging, Config};
use tracing::{debug, warn};

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    if let Err(e) = run(cli).await {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<()> {
    let config = Config::load(cli.config.as_deref())?;

    let mut log_config = config.log_settings();
    if let Some(level) = &cli.log_level {
        log_config.level = level.clone();
    }
    let _guard = logging::init(&log_config)?;

    // Config loads before the subscriber exists, so its warnings wait until now.
    for warning in config.warnings() {
        warn!("{}", warning);
    }
    debug!(command = ?cli.command, "starting");

    commands::execute(cli, &config).await
}
