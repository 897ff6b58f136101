//! SOP documents, plus the multipart form shared with employee uploads.

use super::ApiClient;
use crate::errors::{AppError, AppResult};
use crate::models::{Document, DocumentUpload};
use crate::session::Session;
use reqwest::blocking::multipart::Form;

const PATH: &str = "sop-documents";

pub fn list_sop(api: &ApiClient, session: &Session) -> AppResult<Vec<Document>> {
    api.get(session, PATH)
}

pub fn upload_sop(
    api: &ApiClient,
    session: &Session,
    upload: &DocumentUpload,
) -> AppResult<Document> {
    let form = upload_form(upload)?;
    api.post_multipart(session, PATH, form)
}

pub(crate) fn upload_form(upload: &DocumentUpload) -> AppResult<Form> {
    if !upload.file.is_file() {
        return Err(AppError::Other(format!(
            "File not found: {}",
            upload.file.display()
        )));
    }
    let form = Form::new()
        .text("title", upload.title.clone())
        .file("file", &upload.file)?;
    Ok(form)
}
