use crate::cli::context::Context;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::recorder::EntryRecorder;
use crate::errors::AppResult;
use crate::ui::messages::{info, success, warning};
use crate::ui::prompt::confirm;
use std::io;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Reset { yes } = cmd {
        let ctx = Context::open(cfg)?;
        let user = ctx.require_user()?;
        let store = ctx.store();
        let recorder = EntryRecorder::new(&store, user.id, None);

        if !*yes {
            warning(format!("This deletes ALL work records of {}.", user.email));
            if !confirm("Continue? [y/N]: ", &mut io::stdin().lock())? {
                info("Reset cancelled");
                return Ok(());
            }
        }

        let deleted = recorder.reset()?;
        let remaining = recorder.records()?.len();

        ctx.log(
            "reset",
            &user.email,
            &format!("{} records deleted", deleted),
        );
        success(format!(
            "Deleted {} records ({} remaining)",
            deleted, remaining
        ));
    }

    Ok(())
}
