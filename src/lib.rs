//! workhours library root.
//! Exposes the CLI parser, the high-level run() function and the internal modules.

pub mod auth;
pub mod cli;
pub mod config;
pub mod core;
pub mod db;
pub mod errors;
pub mod export;
pub mod models;
pub mod storage;
pub mod store;
pub mod ui;
pub mod utils;

use clap::Parser;
use cli::commands;
use cli::parser::{Cli, Commands};
use config::Config;
use errors::AppResult;
use std::path::Path;

/// Central command dispatcher
pub fn dispatch(cli: &Cli, cfg: &Config) -> AppResult<()> {
    match &cli.command {
        Commands::Init => commands::init::handle(cli),
        Commands::Config { .. } => commands::config::handle(&cli.command, cfg),
        Commands::Log { .. } => commands::log::handle(&cli.command, cfg),
        Commands::Signup { .. } | Commands::Login { .. } | Commands::Logout | Commands::Whoami => {
            commands::auth::handle(&cli.command, cfg)
        }
        Commands::Start | Commands::Stop | Commands::Status { .. } => {
            commands::timer::handle(&cli.command, cfg)
        }
        Commands::Manual { .. } | Commands::Mark { .. } => {
            commands::entry::handle(&cli.command, cfg)
        }
        Commands::List | Commands::Chart { .. } => commands::list::handle(&cli.command, cfg),
        Commands::Export { .. } | Commands::Share { .. } => {
            commands::export::handle(&cli.command, cfg)
        }
        Commands::Reset { .. } => commands::reset::handle(&cli.command, cfg),
        Commands::Settings { .. } => commands::settings::handle(&cli.command, cfg),
    }
}

/// Entry point used by main.rs
pub fn run() -> AppResult<()> {
    let cli = Cli::parse();

    let mut cfg = Config::load()?;

    if let Some(custom_db) = &cli.db {
        cfg.database = custom_db.clone();
    }
    if let Some(state) = &cli.state {
        cfg.state_file = state.clone();
    }

    let result = dispatch(&cli, &cfg);

    // failed operations end up in the audit log when there is a database to write to
    if let Err(e) = &result
        && Path::new(&cfg.database).exists()
        && let Ok(pool) = db::pool::DbPool::new(&cfg.database)
    {
        db::log::ttlog_quiet(&pool.conn, "error", command_name(&cli.command), &e.to_string());
    }

    result
}

fn command_name(cmd: &Commands) -> &'static str {
    match cmd {
        Commands::Init => "init",
        Commands::Config { .. } => "config",
        Commands::Log { .. } => "log",
        Commands::Signup { .. } => "signup",
        Commands::Login { .. } => "login",
        Commands::Logout => "logout",
        Commands::Whoami => "whoami",
        Commands::Start => "start",
        Commands::Stop => "stop",
        Commands::Status { .. } => "status",
        Commands::Manual { .. } => "manual",
        Commands::Mark { .. } => "mark",
        Commands::List => "list",
        Commands::Chart { .. } => "chart",
        Commands::Export { .. } => "export",
        Commands::Share { .. } => "share",
        Commands::Reset { .. } => "reset",
        Commands::Settings { .. } => "settings",
    }
}
