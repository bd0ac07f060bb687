use crate::cli::context::Context;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::settings::SettingsAccessor;
use crate::errors::AppResult;
use crate::models::WeeklySettings;
use crate::models::settings::{WEEK, day_key};
use crate::ui::messages::{header, success};
use crate::utils::table::{Column, Table};
use crate::utils::time::format_hours;
use chrono::Weekday;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Settings {
        sun,
        mon,
        tue,
        wed,
        thu,
        fri,
        sat,
    } = cmd
    {
        let ctx = Context::open(cfg)?;
        let user = ctx.require_user()?;
        let store = ctx.store();
        let accessor = SettingsAccessor::new(&store);

        let mut settings = accessor.load(user.id)?;

        let changes = [
            (Weekday::Sun, *sun),
            (Weekday::Mon, *mon),
            (Weekday::Tue, *tue),
            (Weekday::Wed, *wed),
            (Weekday::Thu, *thu),
            (Weekday::Fri, *fri),
            (Weekday::Sat, *sat),
        ];

        let mut changed = Vec::new();
        for (day, value) in changes {
            if let Some(hours) = value {
                settings.set_goal(day, hours);
                changed.push(format!("{}={}", day_key(day), hours));
            }
        }

        if !changed.is_empty() {
            accessor.save(&settings)?;
            ctx.log("settings", &user.email, &changed.join(", "));
            success("Settings saved");
        }

        header("Weekly target hours");
        print!("{}", render_week(&settings));
    }

    Ok(())
}

fn render_week(settings: &WeeklySettings) -> String {
    let mut table = Table::new(vec![Column::left("Day"), Column::right("Hours")]);
    for day in WEEK {
        table.add_row(vec![day.to_string(), format_hours(settings.goal_for(day))]);
    }
    table.set_footer(vec!["Total".into(), format_hours(settings.weekly_total())]);
    table.render()
}
