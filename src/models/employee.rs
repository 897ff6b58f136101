use super::{NameRef, de_id, de_or_default, name_of};
use crate::export::{ReportRecord, Row};
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Lifecycle of an employee record. New hires start `Pending` until the
/// pre-employment review approves or rejects them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum EmployeeStatus {
    #[default]
    Pending,
    Approved,
    Rejected,
    Active,
    Inactive,
    #[serde(other)]
    #[value(skip)]
    Unknown,
}

impl EmployeeStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            EmployeeStatus::Pending => "pending",
            EmployeeStatus::Approved => "approved",
            EmployeeStatus::Rejected => "rejected",
            EmployeeStatus::Active => "active",
            EmployeeStatus::Inactive => "inactive",
            EmployeeStatus::Unknown => "unknown",
        }
    }
}

impl fmt::Display for EmployeeStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Employee {
    #[serde(deserialize_with = "de_id")]
    pub id: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub first_name: Option<String>,
    #[serde(default)]
    pub last_name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub role: Option<NameRef>,
    #[serde(default)]
    pub site: Option<NameRef>,
    #[serde(default, deserialize_with = "de_or_default")]
    pub status: EmployeeStatus,
    #[serde(default)]
    pub position: Option<String>,
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub date_of_birth: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
}

impl Employee {
    pub fn display_name(&self) -> String {
        if let Some(n) = self.name.as_deref().filter(|n| !n.trim().is_empty()) {
            return n.to_string();
        }
        let parts: Vec<&str> = [self.first_name.as_deref(), self.last_name.as_deref()]
            .into_iter()
            .flatten()
            .filter(|p| !p.trim().is_empty())
            .collect();
        parts.join(" ")
    }
}

impl ReportRecord for Employee {
    fn to_row(&self) -> Row {
        Row::new()
            .with("id", self.id.as_str())
            .with("name", self.display_name())
            .with("email", self.email.clone())
            .with("phone", self.phone.clone())
            .with("role", name_of(&self.role))
            .with("site", name_of(&self.site))
            .with("status", self.status.as_str())
            .with("created_at", self.created_at.clone())
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct NewEmployee {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub site_id: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct StatusUpdate {
    pub status: EmployeeStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub remarks: Option<String>,
}
