use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Lookup {
    pub id: i64,
    pub name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct JobPosting {
    pub id: i64,
    pub title: String,
    pub description: Option<String>,
    pub department_id: Option<i64>,
    pub category_id: Option<i64>,
    pub type_id: Option<i64>,
    pub status_id: Option<i64>,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Application {
    pub id: i64,
    pub candidate_id: i64,
    pub job_posting_id: i64,
    pub status_id: Option<i64>,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct MonthlyAnalytics {
    pub id: i64,
    pub month: NaiveDate,
    pub total_applications: i32,
    pub total_hires: i32,
    pub top_department_id: Option<i64>,
    pub top_category_id: Option<i64>,
    pub created_at: Option<DateTime<Utc>>,
}
