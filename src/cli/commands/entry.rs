use crate::cli::context::Context;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::clock::{Clock, SystemClock};
use crate::core::recorder::{EntryRecorder, Recorded};
use crate::core::report::Report;
use crate::errors::{AppError, AppResult};
use crate::models::Category;
use crate::ui::messages::success;
use crate::ui::report_view::render_report;
use crate::utils::time::parse_date;

/// Handle `manual` and `mark`
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    let ctx = Context::open(cfg)?;
    let user = ctx.require_user()?;
    let store = ctx.store();
    let now = SystemClock.now();

    match cmd {
        Commands::Manual { start, end, date } => {
            let date = match date {
                Some(d) => parse_date(d).ok_or_else(|| AppError::InvalidDate(d.clone()))?,
                None => now.date_naive(),
            };

            let settings = ctx.settings_or_warn(&store, user.id);
            let recorder = EntryRecorder::new(&store, user.id, settings.as_ref());
            let out = recorder.record_manual(date, start.as_deref(), end.as_deref())?;

            let r = &out.record;
            let msg = format!(
                "{} {} → {}: {} h",
                r.date_str(),
                r.start_str(),
                r.end_str(),
                r.hours_str()
            );
            ctx.log("manual", &r.date_str(), &msg);
            success(format!("Manual entry saved: {}", msg));
            print_table(out);
        }

        Commands::Mark { kind } => {
            let category = Category::day_mark_from_str(kind).ok_or_else(|| {
                AppError::Other(format!("Unknown day type '{}' (use vacation or sick)", kind))
            })?;

            let recorder = EntryRecorder::new(&store, user.id, None);
            let out = recorder.mark_day(category, now)?;

            let r = &out.record;
            ctx.log(
                "mark",
                &r.date_str(),
                &format!("{} day at {}", r.category, r.start_str()),
            );
            success(format!("{} marked as {} day", r.date_str(), r.category));
            print_table(out);
        }

        _ => {}
    }

    Ok(())
}

fn print_table(out: Recorded) {
    if let Some(records) = out.records {
        print!("{}", render_report(&Report::build(&records)));
    }
}
