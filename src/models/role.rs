use super::{NameRef, de_id};
use crate::export::{ReportRecord, Row};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Role {
    #[serde(deserialize_with = "de_id")]
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub permissions: Vec<NameRef>,
}

impl Role {
    pub fn permission_list(&self) -> String {
        self.permissions
            .iter()
            .map(NameRef::as_str)
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl ReportRecord for Role {
    fn to_row(&self) -> Row {
        Row::new()
            .with("id", self.id.as_str())
            .with("name", self.name.as_str())
            .with("permissions", self.permission_list())
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct RolePayload {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub permissions: Vec<String>,
}
