use super::ApiClient;
use crate::errors::AppResult;
use crate::models::{Document, DocumentUpload, Employee, EmployeeStatus, NewEmployee, StatusUpdate};
use crate::session::Session;
use reqwest::Method;

pub fn list(api: &ApiClient, session: &Session) -> AppResult<Vec<Employee>> {
    api.get(session, "employees")
}

/// Full profile of a single employee.
pub fn profile(api: &ApiClient, session: &Session, id: &str) -> AppResult<Employee> {
    api.get(session, &format!("employees/{id}"))
}

pub fn create(api: &ApiClient, session: &Session, employee: &NewEmployee) -> AppResult<Employee> {
    api.post(Some(session), "employees", employee)
}

/// The backend exposes deletion as a POST.
pub fn delete(api: &ApiClient, session: &Session, id: &str) -> AppResult<()> {
    api.execute(session, Method::POST, &format!("employees/delete/{id}"))
}

/// Pre-employment decision (approve / reject) or any other status change.
pub fn set_status(
    api: &ApiClient,
    session: &Session,
    id: &str,
    status: EmployeeStatus,
    remarks: Option<String>,
) -> AppResult<Employee> {
    api.put(
        session,
        &format!("employees/{id}/status"),
        &StatusUpdate { status, remarks },
    )
}

pub fn documents(api: &ApiClient, session: &Session, id: &str) -> AppResult<Vec<Document>> {
    api.get(session, &format!("employees/{id}/documents"))
}

pub fn upload_document(
    api: &ApiClient,
    session: &Session,
    id: &str,
    upload: &DocumentUpload,
) -> AppResult<Document> {
    let form = super::documents::upload_form(upload)?;
    api.post_multipart(session, &format!("employees/{id}/documents"), form)
}
