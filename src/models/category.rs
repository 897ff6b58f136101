use super::{de_flag, de_id};
use crate::export::{ReportRecord, Row};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OccurrenceCategory {
    #[serde(deserialize_with = "de_id")]
    pub id: String,
    pub name: String,
    #[serde(default, deserialize_with = "de_flag", alias = "is_active")]
    pub status: bool,
}

impl OccurrenceCategory {
    pub fn status_label(&self) -> &'static str {
        status_label(self.status)
    }
}

pub fn status_label(active: bool) -> &'static str {
    if active { "Active" } else { "Inactive" }
}

impl ReportRecord for OccurrenceCategory {
    fn to_row(&self) -> Row {
        Row::new()
            .with("id", self.id.as_str())
            .with("name", self.name.as_str())
            .with("status", self.status_label())
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct NewCategory {
    pub name: String,
    pub status: bool,
}

/// Name and status can be changed independently.
#[derive(Debug, Clone, Default, Serialize)]
pub struct CategoryUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<bool>,
}
