// src/export/logic.rs

use crate::errors::{AppError, AppResult};
use crate::export::ExportFormat;
use crate::export::fs_utils::{ensure_writable, resolve_output};
use crate::export::json_csv::{export_csv, export_json};
use crate::export::model::Report;
use crate::export::pdf_export::export_pdf;
use crate::export::xlsx::export_xlsx;
use crate::ui::messages::warning;
use std::path::PathBuf;

/// Where the artifact goes and whether an existing file may be replaced.
#[derive(Debug, Clone, Default)]
pub struct ExportTarget {
    pub output_dir: String,
    pub out: Option<String>,
    pub force: bool,
}

pub struct ExportLogic;

impl ExportLogic {
    /// Write `report` in `format`.
    ///
    /// Returns `Ok(None)` without touching the filesystem when there are no
    /// rows; a warning is shown instead.
    pub fn export(
        report: &Report,
        format: ExportFormat,
        target: &ExportTarget,
    ) -> AppResult<Option<PathBuf>> {
        if report.rows.is_empty() {
            warning(AppError::EmptyDataset(report.title.clone()));
            tracing::warn!(title = %report.title, "export skipped: empty dataset");
            return Ok(None);
        }

        // fail before prompting for overwrite
        if format == ExportFormat::Pdf && report.registered_columns().is_none() {
            return Err(AppError::MissingColumnSpec(report.title.clone()));
        }

        let file_name = default_file_name(report, format);
        let path = resolve_output(&target.output_dir, target.out.as_deref(), &file_name);

        ensure_writable(&path, target.force)?;

        match format {
            ExportFormat::Csv => export_csv(report, &path)?,
            ExportFormat::Json => export_json(report, &path)?,
            ExportFormat::Xlsx => export_xlsx(report, &path)?,
            ExportFormat::Pdf => export_pdf(report, &path)?,
        }

        Ok(Some(path))
    }
}

/// `<title>.<ext>`; the delimited-text export of a known report is
/// `<kind>_report.csv`.
pub fn default_file_name(report: &Report, format: ExportFormat) -> String {
    match (format, report.kind) {
        (ExportFormat::Csv, Some(kind)) => format!("{}_report.csv", kind.file_stem()),
        _ => format!("{}.{}", sanitize_file_stem(&report.title), format.as_str()),
    }
}

fn sanitize_file_stem(title: &str) -> String {
    let cleaned: String = title
        .chars()
        .map(|c| match c {
            '/' | '\\' | ':' | '*' | '?' | '"' | '<' | '>' | '|' => '_',
            c if c.is_control() => '_',
            c => c,
        })
        .collect();
    let trimmed = cleaned.trim();
    if trimmed.is_empty() {
        "report".to_string()
    } else {
        trimmed.to_string()
    }
}
