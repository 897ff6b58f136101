use crate::api::{self, ApiClient};
use crate::errors::{AppError, AppResult};
use crate::export::{ReportKind, ReportRecord, Row};
use crate::models::EmployeeStatus;
use crate::session::Session;
use std::fs;
use std::path::Path;

/// Loads report rows, either from the backend or from a JSON file.
pub struct ReportLogic;

impl ReportLogic {
    /// Fetch the rows for `kind`. Employee documents belong to one
    /// employee, so that kind needs `employee`.
    pub fn fetch(
        api: &ApiClient,
        session: &Session,
        kind: ReportKind,
        employee: Option<&str>,
    ) -> AppResult<Vec<Row>> {
        let rows = match kind {
            ReportKind::Employees => to_rows(&api::employees::list(api, session)?),
            ReportKind::PreEmployment => {
                let employees = api::employees::list(api, session)?;
                let candidates: Vec<_> = employees
                    .into_iter()
                    .filter(|e| {
                        matches!(
                            e.status,
                            EmployeeStatus::Pending
                                | EmployeeStatus::Approved
                                | EmployeeStatus::Rejected
                        )
                    })
                    .collect();
                to_rows(&candidates)
            }
            ReportKind::Occurrences => to_rows(&api::occurrences::list(api, session)?),
            ReportKind::OccurrenceCategories => to_rows(&api::categories::list(api, session)?),
            ReportKind::Roles => to_rows(&api::roles::list(api, session)?),
            ReportKind::Sites => to_rows(&api::sites::list(api, session)?),
            ReportKind::SopDocuments => to_rows(&api::documents::list_sop(api, session)?),
            ReportKind::EmployeeDocuments => {
                let id = employee.ok_or_else(|| {
                    AppError::Other("--employee is required for employee document reports".into())
                })?;
                to_rows(&api::employees::documents(api, session, id)?)
            }
        };

        tracing::info!(kind = ?kind, rows = rows.len(), "report rows fetched");
        Ok(rows)
    }

    /// Rows from a JSON file holding an array of flat objects.
    pub fn load_file(path: &Path) -> AppResult<Vec<Row>> {
        let content = fs::read_to_string(path)?;
        let value: serde_json::Value = serde_json::from_str(&content)
            .map_err(|e| AppError::Export(format!("{}: {e}", path.display())))?;

        let items = value.as_array().ok_or_else(|| {
            AppError::Export(format!("{}: expected a JSON array of rows", path.display()))
        })?;

        items
            .iter()
            .enumerate()
            .map(|(i, item)| {
                Row::from_json(item).ok_or_else(|| {
                    AppError::Export(format!("{}: row {} is not an object", path.display(), i + 1))
                })
            })
            .collect()
    }
}

pub fn to_rows<T: ReportRecord>(items: &[T]) -> Vec<Row> {
    items.iter().map(ReportRecord::to_row).collect()
}
