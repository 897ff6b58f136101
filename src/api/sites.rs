use super::ApiClient;
use crate::errors::AppResult;
use crate::models::{NewSite, Site};
use crate::session::Session;

pub fn list(api: &ApiClient, session: &Session) -> AppResult<Vec<Site>> {
    api.get(session, "sites")
}

pub fn create(api: &ApiClient, session: &Session, site: &NewSite) -> AppResult<Site> {
    api.post(Some(session), "sites", site)
}
