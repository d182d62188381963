// src/domain/activity/entity.rs
use crate::domain::user::UserId;
use chrono::{DateTime, Utc};
use serde::Serialize;

/// What an admin did. Stored as the tag string (`DELETE_JOB`, ...), matching
/// what operators grep for in the log table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ActivityAction {
    #[serde(rename = "CREATE_JOB")]
    CreateJob,
    #[serde(rename = "UPDATE_JOB")]
    UpdateJob,
    #[serde(rename = "DELETE_JOB")]
    DeleteJob,
    #[serde(rename = "CLONE_JOB")]
    CloneJob,
    #[serde(rename = "TOGGLE_FEATURED")]
    ToggleFeatured,
    #[serde(rename = "UPDATE_APPLICATION_STATUS")]
    UpdateApplicationStatus,
    #[serde(rename = "BULK_UPDATE_STATUS")]
    BulkUpdateStatus,
    #[serde(rename = "DELETE_APPLICATION")]
    DeleteApplication,
    #[serde(rename = "EXPORT_DATA")]
    ExportData,
}

impl ActivityAction {
    pub fn as_str(&self) -> &'static str {
        match self {
            ActivityAction::CreateJob => "CREATE_JOB",
            ActivityAction::UpdateJob => "UPDATE_JOB",
            ActivityAction::DeleteJob => "DELETE_JOB",
            ActivityAction::CloneJob => "CLONE_JOB",
            ActivityAction::ToggleFeatured => "TOGGLE_FEATURED",
            ActivityAction::UpdateApplicationStatus => "UPDATE_APPLICATION_STATUS",
            ActivityAction::BulkUpdateStatus => "BULK_UPDATE_STATUS",
            ActivityAction::DeleteApplication => "DELETE_APPLICATION",
            ActivityAction::ExportData => "EXPORT_DATA",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum TargetType {
    Job,
    Application,
    User,
    System,
}

impl TargetType {
    pub fn as_str(&self) -> &'static str {
        match self {
            TargetType::Job => "JOB",
            TargetType::Application => "APPLICATION",
            TargetType::User => "USER",
            TargetType::System => "SYSTEM",
        }
    }
}

/// Immutable once written; never updated or deleted by normal operation.
#[derive(Debug, Clone)]
pub struct ActivityLogEntry {
    pub id: i64,
    pub admin_id: UserId,
    pub action: String,
    pub target_type: String,
    pub target_id: Option<i64>,
    pub details: String,
    pub ip: String,
    pub user_agent: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct NewActivityLogEntry {
    pub admin_id: UserId,
    pub action: ActivityAction,
    pub target_type: TargetType,
    pub target_id: Option<i64>,
    pub details: String,
    pub ip: String,
    pub user_agent: String,
}
