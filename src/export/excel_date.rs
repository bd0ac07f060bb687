// src/export/excel_date.rs

use chrono::{NaiveDate, NaiveTime, Timelike};

pub(crate) const DATE_FORMAT: &str = "yyyy-mm-dd";
pub(crate) const TIME_FORMAT: &str = "hh:mm";
/// Hours are numeric cells shown with two decimals.
pub(crate) const HOURS_FORMAT: &str = "0.00";

/// Excel serial of a calendar date (1900 date system).
pub(crate) fn date_to_excel_serial(d: NaiveDate) -> f64 {
    // 1899-12-30 absorbs Excel's fictitious 1900-02-29
    let epoch = NaiveDate::from_ymd_opt(1899, 12, 30).unwrap_or(NaiveDate::MIN);
    (d - epoch).num_days() as f64
}

/// Fraction of a day, as Excel stores times.
pub(crate) fn time_to_excel_serial(t: NaiveTime) -> f64 {
    t.num_seconds_from_midnight() as f64 / 86400.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_serials() {
        let d = NaiveDate::from_ymd_opt(2025, 1, 1).unwrap();
        assert_eq!(date_to_excel_serial(d), 45658.0);
        let noon = NaiveTime::from_hms_opt(12, 0, 0).unwrap();
        assert_eq!(time_to_excel_serial(noon), 0.5);
    }
}
