// src/export/pdf_export.rs

use crate::errors::{AppError, AppResult};
use crate::export::model::Report;
use crate::export::notify_export_success;
use crate::export::pdf::TableWriter;
use crate::ui::messages::info;
use std::path::Path;

/// Header row and body of the PDF table.
///
/// Only registered layouts are accepted. Columns reading the `id` key print
/// the 1-based row position instead of the identifier.
pub fn pdf_table(report: &Report) -> AppResult<(Vec<String>, Vec<Vec<String>>)> {
    let columns = report
        .registered_columns()
        .ok_or_else(|| AppError::MissingColumnSpec(report.title.clone()))?;

    let headers = columns.iter().map(|c| c.header.clone()).collect();

    let rows = report
        .rows
        .iter()
        .enumerate()
        .map(|(i, row)| {
            columns
                .iter()
                .map(|c| {
                    if c.key == "id" {
                        (i + 1).to_string()
                    } else {
                        row.text(&c.key)
                    }
                })
                .collect()
        })
        .collect();

    Ok((headers, rows))
}

pub fn render_pdf(report: &Report) -> AppResult<Vec<u8>> {
    let (headers, rows) = pdf_table(report)?;
    let mut pdf = TableWriter::new();
    pdf.write_table(&report.header_line(), &headers, &rows);
    tracing::debug!(title = %report.title, pages = pdf.page_count(), "pdf laid out");
    Ok(pdf.finish())
}

pub(crate) fn export_pdf(report: &Report, path: &Path) -> AppResult<()> {
    info(format!("Exporting to PDF: {}", path.display()));

    let bytes = render_pdf(report)?;
    std::fs::write(path, bytes)
        .map_err(|e| AppError::Export(format!("PDF write error: {e}")))?;

    tracing::info!(rows = report.rows.len(), path = %path.display(), "pdf written");
    notify_export_success("PDF", path);
    Ok(())
}
