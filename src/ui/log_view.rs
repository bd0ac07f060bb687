//! Rendering of the internal `log` table.

use crate::db::log::LogEntry;
use ansi_term::Colour;
use regex::Regex;
use std::sync::OnceLock;

const OP_MAX: usize = 60;

fn ansi_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\x1B\[[0-9;]*[mK]").expect("static regex"))
}

fn strip_ansi(s: &str) -> String {
    ansi_re().replace_all(s, "").into_owned()
}

/// Colour for an audit operation.
fn color_for_operation(op: &str) -> Colour {
    match op {
        "record" | "manual" => Colour::Green,
        "reset" => Colour::Red,
        "mark" => Colour::Cyan,
        "settings" => Colour::Yellow,
        "migration_applied" => Colour::Purple,
        "signup" | "login" | "logout" => Colour::Blue,
        "init" => Colour::RGB(255, 153, 51),
        "error" => Colour::Red,
        _ => Colour::White,
    }
}

/// One line per entry: `id: date | op (target) => message`, op column capped
/// at 60 visible characters.
pub fn render_log(entries: &[LogEntry], color: bool) -> String {
    if entries.is_empty() {
        return "No log entries.\n".to_string();
    }

    let rows: Vec<(String, String, String)> = entries
        .iter()
        .map(|e| {
            let date = chrono::DateTime::parse_from_rfc3339(&e.date)
                .map(|dt| dt.format("%FT%T%:z").to_string())
                .unwrap_or_else(|_| e.date.clone());

            let op_target = if e.target.is_empty() {
                e.operation.clone()
            } else {
                format!("{} ({})", e.operation, e.target)
            };
            let op_target = if op_target.chars().count() > OP_MAX {
                let mut s: String = op_target.chars().take(OP_MAX - 3).collect();
                s.push_str("...");
                s
            } else {
                op_target
            };

            (date, op_target, e.message.clone())
        })
        .collect();

    let id_w = entries.iter().map(|e| e.id.to_string().len()).max().unwrap_or(1);
    let date_w = rows.iter().map(|(d, _, _)| d.len()).max().unwrap_or(10);
    let op_w = rows.iter().map(|(_, o, _)| o.chars().count()).max().unwrap_or(10);

    let mut out = String::new();
    for (e, (date, op_target, message)) in entries.iter().zip(rows) {
        let painted = if color {
            match op_target.split_once(' ') {
                Some((op, rest)) => {
                    format!("{} {}", color_for_operation(&e.operation).paint(op), rest)
                }
                None => color_for_operation(&e.operation)
                    .paint(op_target.as_str())
                    .to_string(),
            }
        } else {
            op_target
        };

        let padding = " ".repeat(op_w.saturating_sub(strip_ansi(&painted).chars().count()));

        out.push_str(&format!(
            "{:>id_w$}: {:<date_w$} | {}{} => {}\n",
            e.id,
            date,
            painted,
            padding,
            message,
            id_w = id_w,
            date_w = date_w
        ));
    }
    out
}
