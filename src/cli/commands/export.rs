use crate::cli::context::Context;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::recorder::EntryRecorder;
use crate::core::share;
use crate::errors::AppResult;
use crate::export::export_records;
use crate::ui::messages::success;
use std::path::Path;

/// Handle `export` and `share`
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    match cmd {
        Commands::Export { file, lang, force } => {
            let ctx = Context::open(cfg)?;
            let user = ctx.require_user()?;
            let store = ctx.store();

            let records = EntryRecorder::new(&store, user.id, None).records()?;
            let language = lang.unwrap_or(cfg.export_language);

            let path = export_records(&records, file.as_deref().map(Path::new), language, *force)?;

            ctx.log(
                "export",
                &path.display().to_string(),
                &format!("{} records exported", records.len()),
            );
        }

        Commands::Share { target, print } => {
            if *print {
                println!("{}", target.uri());
            } else {
                let uri = share::launch(*target)?;
                success(format!("Opened {} composer: {}", target.label(), uri));
            }
        }

        _ => {}
    }

    Ok(())
}
