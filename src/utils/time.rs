//! Time utilities: parsing HH:MM, minute truncation, hour formatting.

use chrono::{NaiveDate, NaiveTime, Timelike};

pub fn parse_time(t: &str) -> Option<NaiveTime> {
    NaiveTime::parse_from_str(t.trim(), "%H:%M").ok()
}

pub fn parse_date(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d").ok()
}

/// Drop seconds and sub-seconds: records store HH:MM only.
pub fn truncate_to_minute(t: NaiveTime) -> NaiveTime {
    NaiveTime::from_hms_opt(t.hour(), t.minute(), 0).unwrap_or(t)
}

/// Two-decimal hours, as shown in tables and exports.
pub fn format_hours(h: f64) -> String {
    format!("{:.2}", h)
}
