use super::de_id;
use crate::export::{ReportRecord, Row};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Site {
    #[serde(deserialize_with = "de_id")]
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default, alias = "description")]
    pub details: Option<String>,
}

impl ReportRecord for Site {
    fn to_row(&self) -> Row {
        Row::new()
            .with("id", self.id.as_str())
            .with("name", self.name.as_str())
            .with("address", self.address.clone())
            .with("details", self.details.clone())
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct NewSite {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}
