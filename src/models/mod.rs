pub mod category;
pub mod document;
pub mod employee;
pub mod occurrence;
pub mod role;
pub mod site;
pub mod user;

pub use category::{CategoryUpdate, NewCategory, OccurrenceCategory};
pub use document::{Document, DocumentUpload};
pub use employee::{Employee, EmployeeStatus, NewEmployee, StatusUpdate};
pub use occurrence::{Occurrence, OccurrencePayload};
pub use role::{Role, RolePayload};
pub use site::{NewSite, Site};
pub use user::{LoginRequest, LoginResponse, SessionUser};

use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

/// A related record the backend sends either as a bare name or as an
/// object carrying a `name`/`title`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum NameRef {
    Name(String),
    Object {
        #[serde(alias = "title")]
        name: String,
    },
}

impl NameRef {
    pub fn as_str(&self) -> &str {
        match self {
            NameRef::Name(n) => n,
            NameRef::Object { name } => name,
        }
    }
}

impl fmt::Display for NameRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

pub(crate) fn name_of(r: &Option<NameRef>) -> Option<String> {
    r.as_ref().map(|n| n.as_str().to_string())
}

/// Name of a related record, empty when absent.
pub fn name_of_ref(r: &Option<NameRef>) -> String {
    name_of(r).unwrap_or_default()
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawId {
    Text(String),
    Int(i64),
    Float(f64),
}

/// Ids arrive as numbers or strings; they are kept as strings.
pub(crate) fn de_id<'de, D>(d: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match RawId::deserialize(d)? {
        RawId::Text(s) => s,
        RawId::Int(n) => n.to_string(),
        RawId::Float(f) => f.to_string(),
    })
}

/// `null` is read like a missing key.
pub(crate) fn de_or_default<'de, D, T>(d: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(d)?.unwrap_or_default())
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawFlag {
    Bool(bool),
    Int(i64),
    Text(String),
}

/// Active flags come as `true`, `1` or `"active"`.
pub(crate) fn de_flag<'de, D>(d: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<RawFlag>::deserialize(d)? {
        None => false,
        Some(RawFlag::Bool(b)) => b,
        Some(RawFlag::Int(n)) => n != 0,
        Some(RawFlag::Text(s)) => matches!(
            s.trim().to_ascii_lowercase().as_str(),
            "1" | "true" | "active" | "enabled" | "yes"
        ),
    })
}
