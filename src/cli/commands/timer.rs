use crate::cli::context::Context;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::clock::{Clock, SystemClock, from_millis};
use crate::core::recorder::EntryRecorder;
use crate::core::report::Report;
use crate::core::session::{SessionClock, run_live};
use crate::errors::AppResult;
use crate::ui::messages::{info, success, warning};
use crate::ui::report_view::render_report;
use std::io;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    let ctx = Context::open(cfg)?;
    let user = ctx.require_user()?;
    let clock = SystemClock;
    let mut session = SessionClock::restore(&ctx.storage)?;

    match cmd {
        Commands::Start => {
            let started = session.start(clock.now_millis())?;
            success(format!("Timer started at {}", time_of(started)));
        }

        Commands::Stop => {
            let store = ctx.store();
            let settings = ctx.settings_or_warn(&store, user.id);
            let recorder =
                EntryRecorder::new(&store, user.id, settings.as_ref()).with_clock(&clock);

            let out = recorder.stop(&mut session, clock.now_millis())?;

            let r = &out.recorded.record;
            let msg = format!(
                "{} {} → {}: {} h (goal {:.2})",
                r.date_str(),
                r.start_str(),
                r.end_str(),
                r.hours_str(),
                r.goal
            );
            ctx.log("record", &r.date_str(), &msg);
            success(format!("Work day saved: {}", msg));

            if let Some(e) = out.clear_error {
                warning(format!(
                    "The timer could not be reset ({}). Run `workhours status` before stopping again.",
                    e
                ));
            }

            if let Some(records) = out.recorded.records {
                print!("{}", render_report(&Report::build(&records)));
            }
        }

        Commands::Status { watch, ticks } => match session.started_at() {
            None => {
                info("Timer is not running");
                println!("⏱️  {}", session.elapsed(clock.now_millis()));
            }
            Some(start) => {
                info(format!("Timer running since {}", time_of(start)));
                if *watch {
                    run_live(&session, &clock, &mut io::stdout(), *ticks, std::thread::sleep)?;
                } else {
                    println!("⏱️  {}", session.elapsed(clock.now_millis()));
                }
            }
        },

        _ => {}
    }

    Ok(())
}

fn time_of(ms: i64) -> String {
    from_millis(ms)
        .map(|dt| dt.format("%Y-%m-%d %H:%M:%S").to_string())
        .unwrap_or_else(|| ms.to_string())
}
