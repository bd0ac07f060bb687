use crate::cli::context::Context;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::log::load_log;
use crate::errors::AppResult;
use crate::ui::log_view::render_log;
use crate::ui::messages::{colors_enabled, header};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if matches!(cmd, Commands::Log { print: true }) {
        let ctx = Context::open(cfg)?;
        let entries = load_log(&ctx.pool.conn)?;

        header("Internal log");
        print!("{}", render_log(&entries, colors_enabled()));
    }

    Ok(())
}
