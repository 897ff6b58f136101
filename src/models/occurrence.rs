use super::{NameRef, de_id, name_of};
use crate::export::{ReportRecord, Row};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Occurrence {
    #[serde(deserialize_with = "de_id")]
    pub id: String,
    #[serde(default)]
    pub category: Option<NameRef>,
    #[serde(default)]
    pub site: Option<NameRef>,
    #[serde(default, alias = "reported_by", alias = "employee")]
    pub user: Option<NameRef>,
    #[serde(default)]
    pub date: Option<String>,
    #[serde(default)]
    pub time: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
}

impl ReportRecord for Occurrence {
    fn to_row(&self) -> Row {
        Row::new()
            .with("id", self.id.as_str())
            .with("category", name_of(&self.category))
            .with("site", name_of(&self.site))
            .with("user", name_of(&self.user))
            .with("date", self.date.clone())
            .with("time", self.time.clone())
            .with("status", self.status.clone())
            .with("description", self.description.clone())
    }
}

/// Body of create and update calls; unset fields are left out.
#[derive(Debug, Clone, Default, Serialize)]
pub struct OccurrencePayload {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub site_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
}

impl OccurrencePayload {
    pub fn is_empty(&self) -> bool {
        self.category_id.is_none()
            && self.site_id.is_none()
            && self.description.is_none()
            && self.date.is_none()
            && self.time.is_none()
            && self.status.is_none()
    }
}
