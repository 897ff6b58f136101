use super::ApiClient;
use crate::errors::AppResult;
use crate::models::{LoginRequest, LoginResponse};
use crate::session::Session;

/// Exchange credentials for a bearer token.
pub fn login(api: &ApiClient, email: &str, password: &str) -> AppResult<Session> {
    let resp: LoginResponse = api.post(None, "login", &LoginRequest { email, password })?;
    Ok(Session {
        token: resp.token,
        user: resp.user,
    })
}
