//! rTimeRecorder library root.
//! Exposes the CLI parser, the session store and the high-level run() function.

pub mod cli;
pub mod config;
pub mod core;
pub mod errors;
pub mod export;
pub mod models;
pub mod ui;
pub mod utils;

use clap::Parser;
use crate::cli::parser::{Cli, Commands};
use crate::config::Config;
use crate::core::journal::Journal;
use crate::errors::AppResult;

/// Central command dispatcher
pub fn dispatch(cli: &Cli, cfg: &Config, journal: &Journal) -> AppResult<()> {
    match &cli.command {
        Commands::Init => cli::commands::init::handle(cli, cfg, journal),
        Commands::Config { .. } => cli::commands::config::handle(&cli.command, cfg),
        Commands::Run { .. } => cli::commands::run::handle(&cli.command, cfg, journal),
        Commands::List { .. } => cli::commands::list::handle(&cli.command, cfg),
        Commands::Summary { .. } => cli::commands::summary::handle(&cli.command, cfg),
        Commands::Export { .. } => cli::commands::export::handle(&cli.command, cfg, journal),
        Commands::Log { .. } => cli::commands::log::handle(&cli.command, journal),
    }
}

/// Entry point used by main.rs
pub fn run() -> AppResult<()> {
    let cli = Cli::parse();

    // test mode never reads or writes the user's config directory
    let (mut cfg, journal) = if cli.test {
        (Config::default(), Journal::disabled())
    } else {
        (Config::load()?, Journal::at(Config::journal_file()))
    };

    if let Some(dir) = &cli.dir {
        cfg.sessions_dir = dir.clone();
    }

    dispatch(&cli, &cfg, &journal)
}
