// src/export/xlsx.rs

use crate::errors::{AppError, AppResult};
use crate::export::model::{Cell, Report};
use crate::export::notify_export_success;
use crate::ui::messages::info;
use rust_xlsxwriter::{Color, Format, FormatAlign, FormatBorder, FormatPattern, Workbook, Worksheet};
use std::path::Path;
use unicode_width::UnicodeWidthStr;

pub const SEQUENCE_HEADER: &str = "No";
pub const WIDE_COLUMN_WIDTH: f64 = 50.0;
const MIN_COLUMN_WIDTH: usize = 10;
const MAX_COLUMN_WIDTH: usize = 40;

/// Sheet contents before they hit the workbook.
#[derive(Debug, Clone)]
pub struct SheetLayout {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<Cell>>,
    pub widths: Vec<f64>,
}

/// `["No", ...headers]`, one row per record with a 1-based sequence number.
/// Absent or null values become empty strings; ids are written as-is.
pub fn sheet_layout(report: &Report) -> SheetLayout {
    let columns = report.columns();

    let mut headers = Vec::with_capacity(columns.len() + 1);
    headers.push(SEQUENCE_HEADER.to_string());
    headers.extend(columns.iter().map(|c| c.header.clone()));

    let rows: Vec<Vec<Cell>> = report
        .rows
        .iter()
        .enumerate()
        .map(|(i, row)| {
            let mut cells = Vec::with_capacity(columns.len() + 1);
            cells.push(Cell::Number((i + 1) as f64));
            for col in &columns {
                let cell = match row.get(&col.key) {
                    None | Some(Cell::Null) => Cell::Text(String::new()),
                    Some(c) => c.clone(),
                };
                cells.push(cell);
            }
            cells
        })
        .collect();

    let widths = headers
        .iter()
        .enumerate()
        .map(|(c, h)| {
            let longest = rows
                .iter()
                .map(|r| UnicodeWidthStr::width(r[c].display().as_str()))
                .max()
                .unwrap_or(0);
            column_width(h, longest)
        })
        .collect();

    SheetLayout {
        headers,
        rows,
        widths,
    }
}

/// Description-like columns get a fixed wide width, the rest fit their content.
pub fn column_width(header: &str, longest_cell: usize) -> f64 {
    let lower = header.to_lowercase();
    if lower.contains("description") || lower.contains("detail") {
        return WIDE_COLUMN_WIDTH;
    }
    let w = UnicodeWidthStr::width(header).max(longest_cell) + 2;
    w.clamp(MIN_COLUMN_WIDTH, MAX_COLUMN_WIDTH) as f64
}

/// Export XLSX: banded rows, bold header, frozen first row.
pub(crate) fn export_xlsx(report: &Report, path: &Path) -> AppResult<()> {
    info(format!("Exporting to XLSX: {}", path.display()));

    let layout = sheet_layout(report);

    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();
    worksheet
        .set_name(sheet_name(&report.title))
        .map_err(to_export_error)?;

    let header_format = Format::new()
        .set_bold()
        .set_font_color(Color::RGB(0xFFFFFF))
        .set_background_color(Color::RGB(0x2F75B5))
        .set_pattern(FormatPattern::Solid)
        .set_border(FormatBorder::Thin);

    for (col, header) in layout.headers.iter().enumerate() {
        worksheet
            .write_with_format(0, col as u16, header.as_str(), &header_format)
            .map_err(to_export_error)?;
    }

    worksheet.set_freeze_panes(1, 0).map_err(to_export_error)?;

    let band1 = Color::RGB(0xEAF3FB);
    let band2 = Color::RGB(0xFFFFFF);

    for (row_index, cells) in layout.rows.iter().enumerate() {
        let row = (row_index + 1) as u32;
        let band = if row_index % 2 == 0 { band1 } else { band2 };

        for (col, cell) in cells.iter().enumerate() {
            write_xlsx_cell(worksheet, row, col as u16, cell, band)?;
        }
    }

    for (c, w) in layout.widths.iter().enumerate() {
        worksheet
            .set_column_width(c as u16, *w)
            .map_err(to_export_error)?;
    }

    workbook.save(path).map_err(to_export_error)?;

    tracing::info!(rows = layout.rows.len(), path = %path.display(), "xlsx written");
    notify_export_success("XLSX", path);
    Ok(())
}

fn write_xlsx_cell(
    worksheet: &mut Worksheet,
    row: u32,
    col: u16,
    cell: &Cell,
    bg: Color,
) -> AppResult<()> {
    let base = Format::new()
        .set_background_color(bg)
        .set_pattern(FormatPattern::Solid)
        .set_border(FormatBorder::Thin);

    match cell {
        Cell::Number(n) => {
            let fmt = base.set_align(FormatAlign::Right);
            worksheet.write_with_format(row, col, *n, &fmt)
        }
        Cell::Bool(b) => worksheet.write_with_format(row, col, *b, &base),
        Cell::Text(s) => worksheet.write_with_format(row, col, s.as_str(), &base),
        Cell::Null => worksheet.write_with_format(row, col, "", &base),
    }
    .map_err(to_export_error)?;

    Ok(())
}

/// Worksheet names are capped at 31 chars and may not contain `[]:*?/\`.
fn sheet_name(title: &str) -> String {
    let cleaned: String = title
        .chars()
        .map(|c| if "[]:*?/\\".contains(c) { '_' } else { c })
        .take(31)
        .collect();
    if cleaned.trim().is_empty() {
        "Report".to_string()
    } else {
        cleaned
    }
}

fn to_export_error<E: std::fmt::Display>(e: E) -> AppError {
    AppError::Export(format!("XLSX: {e}"))
}
