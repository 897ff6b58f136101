use super::ApiClient;
use crate::errors::AppResult;
use crate::models::{Occurrence, OccurrencePayload};
use crate::session::Session;
use reqwest::Method;

// the backend route really is spelled with three c's
const PATH: &str = "occcurrences";

pub fn list(api: &ApiClient, session: &Session) -> AppResult<Vec<Occurrence>> {
    api.get(session, PATH)
}

pub fn create(
    api: &ApiClient,
    session: &Session,
    payload: &OccurrencePayload,
) -> AppResult<Occurrence> {
    api.post(Some(session), PATH, payload)
}

pub fn update(
    api: &ApiClient,
    session: &Session,
    id: &str,
    payload: &OccurrencePayload,
) -> AppResult<Occurrence> {
    api.put(session, &format!("{PATH}/{id}"), payload)
}

pub fn delete(api: &ApiClient, session: &Session, id: &str) -> AppResult<()> {
    api.execute(session, Method::DELETE, &format!("{PATH}/{id}"))
}
