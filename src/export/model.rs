// src/export/model.rs

use super::ExportLanguage;
use crate::models::WorkRecord;
use chrono::{NaiveDate, NaiveTime};

/// One spreadsheet row: date, start, end, hours, category label.
#[derive(Clone, Debug, PartialEq)]
pub struct ExportRow {
    pub date: NaiveDate,
    pub start: NaiveTime,
    pub end: NaiveTime,
    /// Already rounded to two decimals.
    pub hours: f64,
    pub category: String,
}

pub fn records_to_rows(records: &[WorkRecord], language: ExportLanguage) -> Vec<ExportRow> {
    records
        .iter()
        .map(|r| ExportRow {
            date: r.date,
            start: r.start_time,
            end: r.end_time,
            hours: crate::core::recorder::round2(r.actual),
            category: match language {
                ExportLanguage::En => r.category.to_db_str().to_string(),
                ExportLanguage::He => r.category.hebrew_label().to_string(),
            },
        })
        .collect()
}

/// Text form of a row, used for column width estimation.
pub(crate) fn row_to_strings(r: &ExportRow) -> [String; 5] {
    [
        r.date.format("%Y-%m-%d").to_string(),
        r.start.format("%H:%M").to_string(),
        r.end.format("%H:%M").to_string(),
        format!("{:.2}", r.hours),
        r.category.clone(),
    ]
}
