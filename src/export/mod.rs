// src/export/mod.rs

mod fs_utils;
mod json_csv;
pub mod logic;
pub mod model;
mod pdf;
mod pdf_export;
mod xlsx;

pub use json_csv::{render_csv, render_json};
pub use logic::{ExportLogic, ExportTarget, default_file_name};
pub use model::{Cell, Column, ReportFilters, ReportKind, ReportRecord, Report, Row};
pub use pdf_export::{pdf_table, render_pdf};
pub use xlsx::{SEQUENCE_HEADER, SheetLayout, WIDE_COLUMN_WIDTH, column_width, sheet_layout};

use crate::ui::messages::success;
use clap::ValueEnum;
use std::path::Path;

/// Shared completion message for every export path.
pub(crate) fn notify_export_success(label: &str, path: &Path) {
    success(format!("{label} export completed: {}", path.display()));
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum ExportFormat {
    Csv,
    Json,
    Xlsx,
    Pdf,
}

impl ExportFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            ExportFormat::Csv => "csv",
            ExportFormat::Json => "json",
            ExportFormat::Xlsx => "xlsx",
            ExportFormat::Pdf => "pdf",
        }
    }
}
