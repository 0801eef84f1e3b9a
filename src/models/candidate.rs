use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Candidate {
    pub id: i64,
    pub uuid: String,
    pub email: String,
    pub full_name: String,
    pub phone: Option<String>,
    pub whatsapp_number: Option<String>,
    pub city: Option<String>,
    pub linkedin_url: Option<String>,
    pub resume_url: Option<String>,
    pub deleted_at: Option<DateTime<Utc>>,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
}
