// src/export/json_csv.rs

use crate::errors::{AppError, AppResult};
use crate::export::model::Report;
use crate::export::notify_export_success;
use crate::export::xlsx::SEQUENCE_HEADER;
use crate::ui::messages::info;
use csv::{QuoteStyle, Terminator, WriterBuilder};
use serde_json::{Map, Value};
use std::fs::File;
use std::io::Write;
use std::path::Path;

/// Semicolon-delimited text: every field quoted, quotes doubled, `\n` rows.
pub fn render_csv(report: &Report) -> AppResult<Vec<u8>> {
    let columns = report.columns();

    let mut wtr = WriterBuilder::new()
        .delimiter(b';')
        .quote_style(QuoteStyle::Always)
        .terminator(Terminator::Any(b'\n'))
        .from_writer(Vec::new());

    let mut header = vec![SEQUENCE_HEADER.to_string()];
    header.extend(columns.iter().map(|c| c.header.clone()));
    wtr.write_record(&header).map_err(csv_error)?;

    for (i, row) in report.rows.iter().enumerate() {
        let mut record = vec![(i + 1).to_string()];
        record.extend(columns.iter().map(|c| row.text(&c.key)));
        wtr.write_record(&record).map_err(csv_error)?;
    }

    wtr.into_inner()
        .map_err(|e| AppError::Export(format!("CSV flush error: {e}")))
}

pub(crate) fn export_csv(report: &Report, path: &Path) -> AppResult<()> {
    info(format!("Exporting to CSV: {}", path.display()));

    let bytes = render_csv(report)?;
    let mut file = File::create(path)?;
    file.write_all(&bytes)?;

    tracing::info!(rows = report.rows.len(), path = %path.display(), "csv written");
    notify_export_success("CSV", path);
    Ok(())
}

/// JSON array of `{"No": n, <header>: value, ...}` objects.
pub fn render_json(report: &Report) -> AppResult<String> {
    let columns = report.columns();

    let items: Vec<Value> = report
        .rows
        .iter()
        .enumerate()
        .map(|(i, row)| {
            let mut obj = Map::new();
            obj.insert(SEQUENCE_HEADER.to_string(), Value::from(i + 1));
            for c in &columns {
                let v = row.get(&c.key).map(|cell| cell.to_json()).unwrap_or(Value::Null);
                obj.insert(c.header.clone(), v);
            }
            Value::Object(obj)
        })
        .collect();

    Ok(serde_json::to_string_pretty(&items)?)
}

pub(crate) fn export_json(report: &Report, path: &Path) -> AppResult<()> {
    info(format!("Exporting to JSON: {}", path.display()));

    let json = render_json(report)?;
    let mut file = File::create(path)?;
    file.write_all(json.as_bytes())?;

    tracing::info!(rows = report.rows.len(), path = %path.display(), "json written");
    notify_export_success("JSON", path);
    Ok(())
}

fn csv_error(e: csv::Error) -> AppError {
    AppError::Export(format!("CSV write error: {e}"))
}
