use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use std::str::FromStr;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct EmailNotification {
    pub id: i64,
    pub recipient_email: String,
    pub subject: String,
    pub body: String,
    pub related_type: Option<String>,
    pub related_id: Option<i64>,
    pub status: String,
    pub sent_at: Option<DateTime<Utc>>,
    pub failed_reason: Option<String>,
    pub attempts: i32,
    pub created_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NotificationStatus {
    Pending,
    Sent,
    Failed,
    Bounced,
}

impl NotificationStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            NotificationStatus::Pending => "pending",
            NotificationStatus::Sent => "sent",
            NotificationStatus::Failed => "failed",
            NotificationStatus::Bounced => "bounced",
        }
    }
}

impl FromStr for NotificationStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pending" => Ok(NotificationStatus::Pending),
            "sent" => Ok(NotificationStatus::Sent),
            "failed" => Ok(NotificationStatus::Failed),
            "bounced" => Ok(NotificationStatus::Bounced),
            other => Err(format!("unknown notification status: {}", other)),
        }
    }
}

/// Typed view over the polymorphic `related_type`/`related_id` column pair.
/// The raw columns stay at storage level; this union covers the referent
/// kinds the application links notifications to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "related_type", content = "related_id", rename_all = "snake_case")]
pub enum NotificationRelated {
    Candidate(i64),
    Application(i64),
    JobPosting(i64),
}

impl NotificationRelated {
    pub fn from_columns(related_type: Option<&str>, related_id: Option<i64>) -> Option<Self> {
        match (related_type, related_id) {
            (Some("candidate"), Some(id)) => Some(NotificationRelated::Candidate(id)),
            (Some("application"), Some(id)) => Some(NotificationRelated::Application(id)),
            (Some("job_posting"), Some(id)) => Some(NotificationRelated::JobPosting(id)),
            _ => None,
        }
    }

    pub fn to_columns(&self) -> (&'static str, i64) {
        match *self {
            NotificationRelated::Candidate(id) => ("candidate", id),
            NotificationRelated::Application(id) => ("application", id),
            NotificationRelated::JobPosting(id) => ("job_posting", id),
        }
    }
}

impl EmailNotification {
    pub fn status(&self) -> Option<NotificationStatus> {
        self.status.parse().ok()
    }

    pub fn related(&self) -> Option<NotificationRelated> {
        NotificationRelated::from_columns(self.related_type.as_deref(), self.related_id)
    }
}
