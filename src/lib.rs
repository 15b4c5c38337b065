//! rSmokelog library root.
//! Exposes the CLI parser, the high-level run() function, the tracking core
//! and its SQLite-backed store.

pub mod cli;
pub mod config;
pub mod core;
pub mod db;
pub mod errors;
pub mod models;
pub mod ui;
pub mod utils;

use clap::Parser;
use cli::parser::{Cli, Commands};
use config::Config;
use errors::AppResult;

/// Central command dispatcher
pub fn dispatch(cli: &Cli, cfg: &Config) -> AppResult<()> {
    match &cli.command {
        Commands::Init => cli::commands::init::handle(cli),
        Commands::Config { .. } => cli::commands::config::handle(&cli.command, cfg),
        Commands::Log { .. } => cli::commands::log::handle(&cli.command, cfg),
        Commands::Light => cli::commands::light::handle(cfg),
        Commands::Status => cli::commands::status::handle(cfg),
        Commands::History { limit } => cli::commands::history::handle(cfg, *limit),
        Commands::Clear { yes } => cli::commands::clear::handle(cfg, *yes),
        Commands::Reset { yes } => cli::commands::reset::handle(cfg, *yes),
        Commands::Quit { .. } => cli::commands::quit::handle(&cli.command, cfg),
        Commands::Ui { .. } => cli::commands::ui::handle(&cli.command, cfg),
        Commands::Watch { ticks } => cli::commands::watch::handle(cfg, *ticks),
    }
}

/// Entry point used by main.rs
pub fn run() -> AppResult<()> {
    let cli = Cli::parse();

    // load config once, then apply the --db override
    let mut cfg = Config::load();
    if let Some(custom_db) = &cli.db {
        cfg.database = custom_db.clone();
    }

    dispatch(&cli, &cfg)
}
