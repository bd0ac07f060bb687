//! Terminal table for a [`Report`].

use crate::core::report::Report;
use crate::utils::table::{Column, Table};
use crate::utils::time::format_hours;

pub const EMPTY_TABLE: &str = "No data to display";

pub fn render_report(report: &Report) -> String {
    if report.is_empty() {
        return format!("{}\n", EMPTY_TABLE);
    }

    let mut table = Table::new(vec![
        Column::left("Date"),
        Column::left("Start"),
        Column::left("End"),
        Column::right("Goal"),
        Column::right("Hours"),
        Column::right("Running"),
        Column::left("Type"),
    ]);

    for row in &report.rows {
        table.add_row(vec![
            row.date.format("%Y-%m-%d").to_string(),
            row.start.format("%H:%M").to_string(),
            row.end.format("%H:%M").to_string(),
            format_hours(row.goal),
            format_hours(row.actual),
            format_hours(row.cumulative),
            row.category.to_string(),
        ]);
    }

    table.set_footer(vec![
        "Total".to_string(),
        String::new(),
        String::new(),
        format_hours(report.total_goal),
        format_hours(report.total_actual),
        String::new(),
        String::new(),
    ]);

    table.render()
}
