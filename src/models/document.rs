use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct ApplicationDocument {
    pub id: i64,
    pub application_id: i64,
    pub document_type: String,
    pub url: String,
    pub filename: String,
    pub created_at: Option<DateTime<Utc>>,
}
