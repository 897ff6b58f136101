// src/export/model.rs

use clap::ValueEnum;
use serde_json::Value;
use std::fmt;

/// One scalar value of a report row.
#[derive(Clone, Debug, PartialEq)]
pub enum Cell {
    Text(String),
    Number(f64),
    Bool(bool),
    Null,
}

impl Cell {
    /// Text shown in tables, PDF and CSV. Null renders as an empty string.
    pub fn display(&self) -> String {
        match self {
            Cell::Text(s) => s.clone(),
            Cell::Number(n) => format_number(*n),
            Cell::Bool(b) => b.to_string(),
            Cell::Null => String::new(),
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Cell::Null)
    }

    fn from_json(v: &Value) -> Cell {
        match v {
            Value::Null => Cell::Null,
            Value::Bool(b) => Cell::Bool(*b),
            Value::Number(n) => n.as_f64().map(Cell::Number).unwrap_or(Cell::Null),
            Value::String(s) => Cell::Text(s.clone()),
            other => Cell::Text(other.to_string()),
        }
    }

    pub fn to_json(&self) -> Value {
        match self {
            Cell::Text(s) => Value::String(s.clone()),
            Cell::Number(n) => serde_json::Number::from_f64(*n)
                .map(Value::Number)
                .unwrap_or(Value::Null),
            Cell::Bool(b) => Value::Bool(*b),
            Cell::Null => Value::Null,
        }
    }
}

/// Integral values print without a trailing ".0".
fn format_number(n: f64) -> String {
    if n.fract() == 0.0 && n.abs() < 1e15 {
        format!("{}", n as i64)
    } else {
        n.to_string()
    }
}

impl From<&str> for Cell {
    fn from(s: &str) -> Self {
        Cell::Text(s.to_string())
    }
}

impl From<String> for Cell {
    fn from(s: String) -> Self {
        Cell::Text(s)
    }
}

impl From<Option<String>> for Cell {
    fn from(s: Option<String>) -> Self {
        s.map(Cell::Text).unwrap_or(Cell::Null)
    }
}

impl From<bool> for Cell {
    fn from(b: bool) -> Self {
        Cell::Bool(b)
    }
}

impl From<i64> for Cell {
    fn from(n: i64) -> Self {
        Cell::Number(n as f64)
    }
}

impl From<f64> for Cell {
    fn from(n: f64) -> Self {
        Cell::Number(n)
    }
}

/// One flat record of a report. Keys keep their insertion order.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Row {
    fields: Vec<(String, Cell)>,
}

impl Row {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert; a repeated key replaces the earlier value.
    pub fn with(mut self, key: &str, value: impl Into<Cell>) -> Self {
        self.set(key, value);
        self
    }

    pub fn set(&mut self, key: &str, value: impl Into<Cell>) {
        let value = value.into();
        match self.fields.iter_mut().find(|(k, _)| k == key) {
            Some(slot) => slot.1 = value,
            None => self.fields.push((key.to_string(), value)),
        }
    }

    pub fn get(&self, key: &str) -> Option<&Cell> {
        self.fields.iter().find(|(k, _)| k == key).map(|(_, v)| v)
    }

    /// Cell text at `key`, empty when absent or null.
    pub fn text(&self, key: &str) -> String {
        self.get(key).map(Cell::display).unwrap_or_default()
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(|(k, _)| k.as_str())
    }

    /// Build a row from a flat JSON object. Nested values become compact JSON text.
    pub fn from_json(value: &Value) -> Option<Row> {
        let obj = value.as_object()?;
        let mut row = Row::new();
        for (k, v) in obj {
            row.set(k, Cell::from_json(v));
        }
        Some(row)
    }
}

/// Anything that can be flattened into a report row.
pub trait ReportRecord {
    fn to_row(&self) -> Row;
}

/// Maps a display header to the row key it reads from.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Column {
    pub header: String,
    pub key: String,
}

impl Column {
    pub fn new(header: &str, key: &str) -> Self {
        Self {
            header: header.to_string(),
            key: key.to_string(),
        }
    }
}

fn columns_of(pairs: &[(&str, &str)]) -> Vec<Column> {
    pairs.iter().map(|(h, k)| Column::new(h, k)).collect()
}

/// Every report the console knows how to lay out.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, ValueEnum)]
pub enum ReportKind {
    Employees,
    PreEmployment,
    Occurrences,
    OccurrenceCategories,
    Roles,
    Sites,
    SopDocuments,
    EmployeeDocuments,
}

impl ReportKind {
    pub const ALL: [ReportKind; 8] = [
        ReportKind::Employees,
        ReportKind::PreEmployment,
        ReportKind::Occurrences,
        ReportKind::OccurrenceCategories,
        ReportKind::Roles,
        ReportKind::Sites,
        ReportKind::SopDocuments,
        ReportKind::EmployeeDocuments,
    ];

    pub fn title(&self) -> &'static str {
        match self {
            ReportKind::Employees => "Employee Report",
            ReportKind::PreEmployment => "Pre-Employment Report",
            ReportKind::Occurrences => "Occurrence Report",
            ReportKind::OccurrenceCategories => "Occurrence Category Report",
            ReportKind::Roles => "Role Report",
            ReportKind::Sites => "Site Report",
            ReportKind::SopDocuments => "SOP Document Report",
            ReportKind::EmployeeDocuments => "Employee Document Report",
        }
    }

    /// Stem used for the delimited-text file (`<stem>_report.csv`).
    pub fn file_stem(&self) -> &'static str {
        match self {
            ReportKind::Employees => "employees",
            ReportKind::PreEmployment => "pre_employment",
            ReportKind::Occurrences => "occurrences",
            ReportKind::OccurrenceCategories => "occurrence_categories",
            ReportKind::Roles => "roles",
            ReportKind::Sites => "sites",
            ReportKind::SopDocuments => "sop_documents",
            ReportKind::EmployeeDocuments => "employee_documents",
        }
    }

    pub fn columns(&self) -> Vec<Column> {
        match self {
            ReportKind::Employees => columns_of(&[
                ("ID", "id"),
                ("Name", "name"),
                ("Email", "email"),
                ("Phone", "phone"),
                ("Role", "role"),
                ("Site", "site"),
                ("Status", "status"),
            ]),
            ReportKind::PreEmployment => columns_of(&[
                ("ID", "id"),
                ("Name", "name"),
                ("Email", "email"),
                ("Site", "site"),
                ("Status", "status"),
                ("Submitted", "created_at"),
            ]),
            ReportKind::Occurrences => columns_of(&[
                ("ID", "id"),
                ("Category", "category"),
                ("Site", "site"),
                ("User", "user"),
                ("Date", "date"),
                ("Time", "time"),
                ("Status", "status"),
                ("Description", "description"),
            ]),
            ReportKind::OccurrenceCategories => {
                columns_of(&[("ID", "id"), ("Name", "name"), ("Status", "status")])
            }
            ReportKind::Roles => columns_of(&[
                ("ID", "id"),
                ("Name", "name"),
                ("Permissions", "permissions"),
            ]),
            ReportKind::Sites => columns_of(&[
                ("ID", "id"),
                ("Name", "name"),
                ("Address", "address"),
                ("Details", "details"),
            ]),
            ReportKind::SopDocuments => columns_of(&[
                ("ID", "id"),
                ("Title", "title"),
                ("File", "file_name"),
                ("Uploaded", "created_at"),
            ]),
            ReportKind::EmployeeDocuments => columns_of(&[
                ("ID", "id"),
                ("Employee", "employee"),
                ("Title", "title"),
                ("File", "file_name"),
                ("Uploaded", "created_at"),
            ]),
        }
    }
}

impl fmt::Display for ReportKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.title())
    }
}

/// Optional labels shown in the PDF page header and used to narrow rows.
#[derive(Clone, Debug, Default)]
pub struct ReportFilters {
    pub category: Option<String>,
    pub user: Option<String>,
    pub status: Option<String>,
    pub date: Option<String>,
    pub time: Option<String>,
}

impl ReportFilters {
    fn pairs(&self) -> [(&'static str, Option<&str>); 5] {
        [
            ("category", self.category.as_deref()),
            ("user", self.user.as_deref()),
            ("status", self.status.as_deref()),
            ("date", self.date.as_deref()),
            ("time", self.time.as_deref()),
        ]
    }

    /// Non-empty filter values in display order.
    pub fn labels(&self) -> Vec<&str> {
        self.pairs()
            .into_iter()
            .filter_map(|(_, v)| v.map(str::trim).filter(|v| !v.is_empty()))
            .collect()
    }

    /// A row passes when every set filter matches the field of the same
    /// name. Rows lacking that field are not filtered on it.
    pub fn matches(&self, row: &Row) -> bool {
        self.pairs().into_iter().all(|(field, wanted)| {
            let Some(wanted) = wanted.map(str::trim).filter(|w| !w.is_empty()) else {
                return true;
            };
            match row.get(field) {
                Some(cell) => cell.display().trim().eq_ignore_ascii_case(wanted),
                None => true,
            }
        })
    }
}

/// A titled set of rows ready for export.
#[derive(Clone, Debug)]
pub struct Report {
    pub title: String,
    pub kind: Option<ReportKind>,
    pub rows: Vec<Row>,
    pub filters: ReportFilters,
}

impl Report {
    pub fn for_kind(kind: ReportKind, rows: Vec<Row>) -> Self {
        Self {
            title: kind.title().to_string(),
            kind: Some(kind),
            rows,
            filters: ReportFilters::default(),
        }
    }

    pub fn ad_hoc(title: &str, rows: Vec<Row>) -> Self {
        Self {
            title: title.to_string(),
            kind: None,
            rows,
            filters: ReportFilters::default(),
        }
    }

    pub fn with_filters(mut self, filters: ReportFilters) -> Self {
        self.filters = filters;
        self
    }

    /// Drop rows that do not pass the filters.
    pub fn apply_filters(mut self) -> Self {
        let filters = self.filters.clone();
        self.rows.retain(|r| filters.matches(r));
        self
    }

    /// Layout for tabular exports: the registered columns, or the keys of
    /// the first row when the report has no kind.
    pub fn columns(&self) -> Vec<Column> {
        match self.kind {
            Some(kind) => kind.columns(),
            None => self
                .rows
                .first()
                .map(|r| r.keys().map(|k| Column::new(k, k)).collect())
                .unwrap_or_default(),
        }
    }

    /// The PDF layout only accepts a registered column specification.
    pub fn registered_columns(&self) -> Option<Vec<Column>> {
        self.kind.map(|k| k.columns())
    }

    /// PDF page header: title plus the active filter labels.
    pub fn header_line(&self) -> String {
        let mut parts = vec![self.title.as_str()];
        parts.extend(self.filters.labels());
        parts.join(" — ")
    }
}
