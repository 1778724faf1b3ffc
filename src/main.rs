mod cli;
mod client;
mod command_handlers;
mod config;
mod error;
mod ini;
mod platform;
mod prompt;

use anyhow::Result;
use clap::Parser;
use std::process::ExitCode;
use std::time::Duration;

use crate::cli::Cli;
use crate::config::ConfigStore;
use crate::prompt::TerminalPrompter;

fn main() -> Result<ExitCode> {
    env_logger::init();

    let cli = Cli::parse();
    let store = match cli.config_dir {
        Some(dir) => ConfigStore::new(dir),
        None => ConfigStore::default_location(),
    };
    log::debug!("config root {}", store.root().display());
    let timeout = Duration::from_secs(cli.timeout);
    let mut stdout = std::io::stdout().lock();
    let code = command_handlers::dispatch::dispatch(
        cli.command,
        &store,
        timeout,
        &TerminalPrompter,
        &mut stdout,
    )?;
    Ok(ExitCode::from(code))
}
