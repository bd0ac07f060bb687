use crate::cli::context::Context;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::recorder::EntryRecorder;
use crate::core::report::Report;
use crate::errors::AppResult;
use crate::ui::chart::render_chart;
use crate::ui::messages::{colors_enabled, header, info};
use crate::ui::report_view::{EMPTY_TABLE, render_report};
use crate::utils::time::format_hours;

/// Handle `list` and `chart`
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    let ctx = Context::open(cfg)?;
    let user = ctx.require_user()?;
    let store = ctx.store();

    let records = EntryRecorder::new(&store, user.id, None).records()?;
    let report = Report::build(&records);

    match cmd {
        Commands::List => {
            header(format!("Work hours of {}", user.email));
            print!("{}", render_report(&report));
            if !report.is_empty() {
                println!("Balance: {} h", format_hours(report.balance()));
            }
        }

        Commands::Chart { width } => {
            if report.is_empty() {
                info(EMPTY_TABLE);
                return Ok(());
            }
            let width = width.unwrap_or(cfg.chart_width).max(1);
            header("Actual vs. goal hours");
            print!("{}", render_chart(&report.chart, width, colors_enabled()));
        }

        _ => {}
    }

    Ok(())
}
