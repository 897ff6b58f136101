use super::ApiClient;
use crate::errors::AppResult;
use crate::models::{CategoryUpdate, NewCategory, OccurrenceCategory};
use crate::session::Session;
use reqwest::Method;

const PATH: &str = "master-settings/occurrence-categories";

pub fn list(api: &ApiClient, session: &Session) -> AppResult<Vec<OccurrenceCategory>> {
    api.get(session, PATH)
}

pub fn create(api: &ApiClient, session: &Session, name: &str) -> AppResult<OccurrenceCategory> {
    let body = NewCategory {
        name: name.to_string(),
        status: true,
    };
    api.post(Some(session), PATH, &body)
}

pub fn update(
    api: &ApiClient,
    session: &Session,
    id: &str,
    update: &CategoryUpdate,
) -> AppResult<OccurrenceCategory> {
    api.put(session, &format!("{PATH}/{id}"), update)
}

pub fn rename(
    api: &ApiClient,
    session: &Session,
    id: &str,
    name: &str,
) -> AppResult<OccurrenceCategory> {
    let body = CategoryUpdate {
        name: Some(name.to_string()),
        status: None,
    };
    update(api, session, id, &body)
}

pub fn set_status(
    api: &ApiClient,
    session: &Session,
    id: &str,
    active: bool,
) -> AppResult<OccurrenceCategory> {
    let body = CategoryUpdate {
        name: None,
        status: Some(active),
    };
    update(api, session, id, &body)
}

pub fn delete(api: &ApiClient, session: &Session, id: &str) -> AppResult<()> {
    api.execute(session, Method::DELETE, &format!("{PATH}/{id}"))
}
