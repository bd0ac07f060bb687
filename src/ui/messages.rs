//! User-visible message channel.
//!
//! Every outcome (success, validation failure, store error) is reported here,
//! once per invocation. `NO_COLOR` disables styling.

use ansi_term::{Colour, Style};
use std::fmt;

const ICON_INFO: &str = "ℹ️";
const ICON_OK: &str = "✅";
const ICON_WARN: &str = "⚠️";
const ICON_ERR: &str = "❌";

pub(crate) fn colors_enabled() -> bool {
    std::env::var_os("NO_COLOR").is_none()
}

fn styled(style: Style, icon: &str) -> String {
    if colors_enabled() {
        style.paint(icon).to_string()
    } else {
        icon.to_string()
    }
}

pub fn info<T: fmt::Display>(msg: T) {
    println!("{} {}", styled(Colour::Blue.bold(), ICON_INFO), msg);
}

pub fn success<T: fmt::Display>(msg: T) {
    println!("{} {}", styled(Colour::Green.bold(), ICON_OK), msg);
}

pub fn warning<T: fmt::Display>(msg: T) {
    println!("{} {}", styled(Colour::Yellow.bold(), ICON_WARN), msg);
}

pub fn error<T: fmt::Display>(msg: T) {
    eprintln!("{} {}", styled(Colour::Red.bold(), ICON_ERR), msg);
}

/// Section header
pub fn header<T: fmt::Display>(msg: T) {
    let line = format!("====================== {}", msg);
    if colors_enabled() {
        println!("{}\n", Colour::Blue.bold().paint(line));
    } else {
        println!("{}\n", line);
    }
}
