// src/export/mod.rs

mod excel_date;
mod fs_utils;
mod model;
mod xlsx;

pub use model::{ExportRow, records_to_rows};

use crate::errors::{AppError, AppResult};
use crate::models::WorkRecord;
use crate::ui::messages::success;
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Language of the spreadsheet header row, sheet name and category labels.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ExportLanguage {
    #[default]
    En,
    He,
}

impl ExportLanguage {
    pub fn headers(&self) -> [&'static str; 5] {
        match self {
            ExportLanguage::En => ["Date", "Start", "End", "Hours", "Type"],
            ExportLanguage::He => ["תאריך", "התחלה", "סיום", "שעות", "סוג"],
        }
    }

    pub fn sheet_name(&self) -> &'static str {
        match self {
            ExportLanguage::En => "Work hours",
            ExportLanguage::He => "שעות עבודה",
        }
    }

    /// Fixed file name used when no `--file` is given.
    pub fn default_file_name(&self) -> &'static str {
        match self {
            ExportLanguage::En => "work_hours.xlsx",
            ExportLanguage::He => "שעות_עבודה.xlsx",
        }
    }

    pub fn is_rtl(&self) -> bool {
        matches!(self, ExportLanguage::He)
    }
}

/// Shared completion message for exports.
pub(crate) fn notify_export_success(label: &str, path: &Path) {
    success(format!("{label} export completed: {}", path.display()));
}

/// Write `records` to a single-sheet XLSX file.
///
/// Fails with [`AppError::NoData`] before touching the filesystem when there
/// is nothing to export.
pub fn export_records(
    records: &[WorkRecord],
    file: Option<&Path>,
    language: ExportLanguage,
    force: bool,
) -> AppResult<PathBuf> {
    if records.is_empty() {
        return Err(AppError::NoData);
    }

    let path = match file {
        Some(p) => p.to_path_buf(),
        None => PathBuf::from(language.default_file_name()),
    };

    fs_utils::ensure_writable(&path, force)?;

    let rows = records_to_rows(records, language);
    xlsx::export_xlsx(&rows, &path, language)?;

    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_export_writes_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.xlsx");

        let err = export_records(&[], Some(&path), ExportLanguage::En, true).unwrap_err();
        assert!(matches!(err, AppError::NoData));
        assert!(!path.exists());
    }

    #[test]
    fn default_file_names_follow_the_language() {
        assert_eq!(ExportLanguage::En.default_file_name(), "work_hours.xlsx");
        assert_eq!(ExportLanguage::He.headers()[0], "תאריך");
    }
}
