//! HTTP access to the site-operations backend.
//!
//! One module per resource. Every call takes the explicit [`Session`],
//! sends the bearer token, and maps failures onto [`AppError`].

pub mod auth;
pub mod categories;
pub mod documents;
pub mod employees;
pub mod occurrences;
pub mod roles;
pub mod sites;

use crate::config::Config;
use crate::errors::{AppError, AppResult, NETWORK_ERROR};
use crate::session::Session;
use reqwest::Method;
use reqwest::StatusCode;
use reqwest::blocking::{Client, RequestBuilder, Response, multipart};
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use std::collections::BTreeMap;
use std::time::Duration;

/// Payloads come bare or wrapped in `{"data": ...}`.
#[derive(Deserialize)]
#[serde(untagged)]
enum Envelope<T> {
    Wrapped { data: T },
    Bare(T),
}

impl<T> Envelope<T> {
    fn into_inner(self) -> T {
        match self {
            Envelope::Wrapped { data } => data,
            Envelope::Bare(t) => t,
        }
    }
}

/// Error body shape used by the backend.
#[derive(Debug, Default, Deserialize)]
pub struct ApiErrorBody {
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub errors: BTreeMap<String, FieldMessages>,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum FieldMessages {
    Many(Vec<String>),
    One(String),
}

impl FieldMessages {
    fn into_vec(self) -> Vec<String> {
        match self {
            FieldMessages::Many(v) => v,
            FieldMessages::One(s) => vec![s],
        }
    }
}

/// Map a non-2xx status of an authenticated request onto the error taxonomy.
pub fn error_from_status(status: StatusCode, body: &str) -> AppError {
    error_for_request(status, body, true)
}

/// Like [`error_from_status`]. Without a bearer token a 401 means the
/// credentials were refused, which leaves the stored session alone.
pub fn error_for_request(status: StatusCode, body: &str, authenticated: bool) -> AppError {
    let parsed: ApiErrorBody = serde_json::from_str(body).unwrap_or_default();
    let message = parsed
        .message
        .filter(|m| !m.trim().is_empty())
        .unwrap_or_else(|| NETWORK_ERROR.to_string());

    match status {
        StatusCode::UNAUTHORIZED if authenticated => AppError::SessionExpired,
        StatusCode::UNPROCESSABLE_ENTITY => AppError::Validation {
            message,
            fields: parsed
                .errors
                .into_iter()
                .map(|(k, v)| (k, v.into_vec()))
                .collect(),
        },
        other => AppError::Api {
            status: other.as_u16(),
            message,
        },
    }
}

#[derive(Clone)]
pub struct ApiClient {
    client: Client,
    base_url: String,
}

impl ApiClient {
    pub fn new(base_url: &str, timeout_secs: u64) -> AppResult<Self> {
        let mut builder = Client::builder();
        if timeout_secs > 0 {
            builder = builder.timeout(Duration::from_secs(timeout_secs));
        }
        let client = builder.build()?;
        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn from_config(cfg: &Config) -> AppResult<Self> {
        Self::new(&cfg.api_base_url, cfg.request_timeout_secs)
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    fn request(&self, method: Method, path: &str, session: Option<&Session>) -> RequestBuilder {
        let mut rb = self
            .client
            .request(method, self.url(path))
            .header("Accept", "application/json");
        if let Some(s) = session {
            rb = rb.header("Authorization", s.bearer());
        }
        rb
    }

    fn send(&self, rb: RequestBuilder, what: &str, authenticated: bool) -> AppResult<Response> {
        let response = rb.send().map_err(|e| {
            tracing::error!(request = what, error = %e, "request failed");
            AppError::Network(e.to_string())
        })?;

        let status = response.status();
        tracing::debug!(request = what, %status, "response");

        if status.is_success() {
            return Ok(response);
        }

        let body = response.text().unwrap_or_default();
        let err = error_for_request(status, &body, authenticated);
        tracing::warn!(request = what, %status, error = %err, "backend rejected request");
        Err(err)
    }

    fn decode<T: DeserializeOwned>(response: Response, what: &str) -> AppResult<T> {
        let body = response
            .text()
            .map_err(|e| AppError::Network(e.to_string()))?;
        serde_json::from_str::<Envelope<T>>(&body)
            .map(Envelope::into_inner)
            .map_err(|e| {
                tracing::error!(request = what, error = %e, "undecodable body");
                AppError::Decode(what.to_string())
            })
    }

    pub fn get<T: DeserializeOwned>(&self, session: &Session, path: &str) -> AppResult<T> {
        let what = format!("GET {path}");
        let resp = self.send(self.request(Method::GET, path, Some(session)), &what, true)?;
        Self::decode(resp, &what)
    }

    pub fn post<B: Serialize, T: DeserializeOwned>(
        &self,
        session: Option<&Session>,
        path: &str,
        body: &B,
    ) -> AppResult<T> {
        let what = format!("POST {path}");
        let rb = self.request(Method::POST, path, session).json(body);
        let resp = self.send(rb, &what, session.is_some())?;
        Self::decode(resp, &what)
    }

    pub fn put<B: Serialize, T: DeserializeOwned>(
        &self,
        session: &Session,
        path: &str,
        body: &B,
    ) -> AppResult<T> {
        let what = format!("PUT {path}");
        let rb = self.request(Method::PUT, path, Some(session)).json(body);
        let resp = self.send(rb, &what, true)?;
        Self::decode(resp, &what)
    }

    /// POST/DELETE calls whose response body is ignored.
    pub fn execute(&self, session: &Session, method: Method, path: &str) -> AppResult<()> {
        let what = format!("{method} {path}");
        self.send(self.request(method, path, Some(session)), &what, true)?;
        Ok(())
    }

    pub fn post_multipart<T: DeserializeOwned>(
        &self,
        session: &Session,
        path: &str,
        form: multipart::Form,
    ) -> AppResult<T> {
        let what = format!("POST {path} (multipart)");
        let rb = self.request(Method::POST, path, Some(session)).multipart(form);
        let resp = self.send(rb, &what, true)?;
        Self::decode(resp, &what)
    }
}
