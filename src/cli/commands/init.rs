use crate::cli::context::Context;
use crate::cli::parser::Cli;
use crate::config::Config;
use crate::errors::AppResult;
use crate::ui::messages::{info, success};

/// Handle the `init` command
///
/// This initializes:
///  - the application directory (if missing)
///  - the configuration file (skipped in test mode)
///  - the SQLite database and all pending migrations
pub fn handle(cli: &Cli) -> AppResult<()> {
    let mut cfg = Config::init_all(cli.db.as_deref(), cli.test)?;
    if let Some(state) = &cli.state {
        cfg.state_file = state.clone();
    }

    info("Initializing workhours…");
    println!("📄 Config file : {}", Config::config_file().display());
    println!("🗄️  Database   : {}", cfg.database);
    println!("💾 State file  : {}", cfg.state_file);

    let ctx = Context::open(&cfg)?;
    ctx.log(
        "init",
        "Database initialized",
        &format!("Database initialized at {}", cfg.database),
    );

    success(format!("Database initialized at {}", cfg.database));
    Ok(())
}
