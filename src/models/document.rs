use super::{NameRef, de_id, name_of};
use crate::export::{ReportRecord, Row};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// An uploaded file: SOP document or employee document.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Document {
    #[serde(deserialize_with = "de_id")]
    pub id: String,
    #[serde(default, alias = "name")]
    pub title: Option<String>,
    #[serde(default, alias = "filename", alias = "file")]
    pub file_name: Option<String>,
    #[serde(default)]
    pub employee: Option<NameRef>,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
}

impl ReportRecord for Document {
    fn to_row(&self) -> Row {
        Row::new()
            .with("id", self.id.as_str())
            .with("employee", name_of(&self.employee))
            .with("title", self.title.clone())
            .with("file_name", self.file_name.clone())
            .with("created_at", self.created_at.clone())
    }
}

/// A local file to send as multipart form data.
#[derive(Debug, Clone)]
pub struct DocumentUpload {
    pub title: String,
    pub file: PathBuf,
}
