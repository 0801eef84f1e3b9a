use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use std::str::FromStr;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Department {
    pub id: i64,
    pub name: String,
    pub description: Option<String>,
    pub status: String,
    pub created_by: i64,
    pub deleted_at: Option<DateTime<Utc>>,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DepartmentStatus {
    Active,
    Inactive,
}

impl DepartmentStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            DepartmentStatus::Active => "active",
            DepartmentStatus::Inactive => "inactive",
        }
    }
}

impl FromStr for DepartmentStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "active" => Ok(DepartmentStatus::Active),
            "inactive" => Ok(DepartmentStatus::Inactive),
            other => Err(format!("unknown department status: {}", other)),
        }
    }
}

impl Department {
    pub fn status(&self) -> Option<DepartmentStatus> {
        self.status.parse().ok()
    }
}
