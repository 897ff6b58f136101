use super::ApiClient;
use crate::errors::AppResult;
use crate::models::{Role, RolePayload};
use crate::session::Session;

pub fn list(api: &ApiClient, session: &Session) -> AppResult<Vec<Role>> {
    api.get(session, "roles")
}

pub fn create(api: &ApiClient, session: &Session, role: &RolePayload) -> AppResult<Role> {
    api.post(Some(session), "roles", role)
}

pub fn update(api: &ApiClient, session: &Session, id: &str, role: &RolePayload) -> AppResult<Role> {
    api.put(session, &format!("roles/{id}"), role)
}
