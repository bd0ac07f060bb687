// src/export/xlsx.rs

use super::ExportLanguage;
use crate::errors::{AppError, AppResult};
use crate::export::excel_date::{
    DATE_FORMAT, HOURS_FORMAT, TIME_FORMAT, date_to_excel_serial, time_to_excel_serial,
};
use crate::export::model::{ExportRow, row_to_strings};
use crate::export::notify_export_success;
use crate::ui::messages::info;
use rust_xlsxwriter::{Color, Format, FormatAlign, FormatBorder, FormatPattern, Workbook, Worksheet};
use std::path::Path;
use unicode_width::UnicodeWidthStr;

/// XLSX export with header styling, row banding and auto column widths.
pub(crate) fn export_xlsx(rows: &[ExportRow], path: &Path, language: ExportLanguage) -> AppResult<()> {
    info(format!("Exporting to XLSX: {}", path.display()));

    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();
    worksheet
        .set_name(language.sheet_name())
        .map_err(to_export_error)?;

    if language.is_rtl() {
        worksheet.set_right_to_left(true);
    }

    // ---------------------------
    // Header
    // ---------------------------
    let headers = language.headers();

    let header_format = Format::new()
        .set_bold()
        .set_font_color(Color::RGB(0xFFFFFF))
        .set_background_color(Color::RGB(0x2F75B5))
        .set_pattern(FormatPattern::Solid)
        .set_border(FormatBorder::Thin);

    for (col, header) in headers.iter().enumerate() {
        worksheet
            .write_with_format(0, col as u16, *header, &header_format)
            .map_err(to_export_error)?;
    }

    worksheet.set_freeze_panes(1, 0).ok();

    let mut col_widths: Vec<usize> = headers.iter().map(|h| UnicodeWidthStr::width(*h)).collect();

    let band1 = Color::RGB(0xEAF3FB);
    let band2 = Color::RGB(0xFFFFFF);

    // ---------------------------
    // Rows
    // ---------------------------
    for (row_index, r) in rows.iter().enumerate() {
        let row = (row_index + 1) as u32;
        let band = if row_index % 2 == 0 { band1 } else { band2 };

        write_row(worksheet, row, r, band)?;

        for (col, text) in row_to_strings(r).iter().enumerate() {
            col_widths[col] = col_widths[col].max(UnicodeWidthStr::width(text.as_str()));
        }
    }

    for (c, w) in col_widths.iter().enumerate() {
        worksheet
            .set_column_width(c as u16, *w as f64 + 2.0)
            .map_err(to_export_error)?;
    }

    workbook.save(path).map_err(to_export_error)?;

    notify_export_success("XLSX", path);
    Ok(())
}

fn cell_format(bg: Color) -> Format {
    Format::new()
        .set_background_color(bg)
        .set_pattern(FormatPattern::Solid)
        .set_border(FormatBorder::Thin)
}

/// Date and times as Excel serials, hours as a two-decimal number, category as text.
fn write_row(ws: &mut Worksheet, row: u32, r: &ExportRow, bg: Color) -> AppResult<()> {
    let date_fmt = cell_format(bg).set_num_format(DATE_FORMAT);
    let time_fmt = cell_format(bg).set_num_format(TIME_FORMAT);
    let hours_fmt = cell_format(bg)
        .set_num_format(HOURS_FORMAT)
        .set_align(FormatAlign::Right);
    let text_fmt = cell_format(bg);

    ws.write_with_format(row, 0, date_to_excel_serial(r.date), &date_fmt)
        .map_err(to_export_error)?;
    ws.write_with_format(row, 1, time_to_excel_serial(r.start), &time_fmt)
        .map_err(to_export_error)?;
    ws.write_with_format(row, 2, time_to_excel_serial(r.end), &time_fmt)
        .map_err(to_export_error)?;
    ws.write_with_format(row, 3, r.hours, &hours_fmt)
        .map_err(to_export_error)?;
    ws.write_with_format(row, 4, r.category.as_str(), &text_fmt)
        .map_err(to_export_error)?;

    Ok(())
}

fn to_export_error<E: std::fmt::Display>(e: E) -> AppError {
    AppError::Export(e.to_string())
}
