// src/application/dto/activity.rs
use crate::domain::activity::ActivityLogEntry;
use chrono::{DateTime, Utc};
use serde::Serialize;

/// Where a request came from, for the audit trail. Empty strings when the
/// headers are absent.
#[derive(Debug, Clone, Default)]
pub struct RequestOrigin {
    pub ip: String,
    pub user_agent: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct ActivityLogDto {
    pub id: i64,
    pub admin_id: i64,
    pub action: String,
    pub target_type: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target_id: Option<i64>,
    pub details: String,
    pub ip: String,
    pub user_agent: String,
    pub created_at: DateTime<Utc>,
}

impl From<ActivityLogEntry> for ActivityLogDto {
    fn from(entry: ActivityLogEntry) -> Self {
        Self {
            id: entry.id,
            admin_id: entry.admin_id.into(),
            action: entry.action,
            target_type: entry.target_type,
            target_id: entry.target_id,
            details: entry.details,
            ip: entry.ip,
            user_agent: entry.user_agent,
            created_at: entry.created_at,
        }
    }
}
