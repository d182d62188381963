// src/domain/job_application/entity.rs
use crate::domain::job::value_objects::{JobCategory, JobId};
use crate::domain::job_application::value_objects::{ApplicationId, ApplicationStatus};
use crate::domain::user::UserId;
use chrono::{DateTime, Utc};

#[derive(Debug, Clone)]
pub struct JobApplication {
    pub id: ApplicationId,
    pub applicant_id: UserId,
    pub job_id: JobId,
    pub status: ApplicationStatus,
    pub full_name: String,
    pub email: String,
    pub phone: String,
    pub resume: String,
    pub experience: String,
    pub skills: String,
    pub cover_letter: String,
    pub notes: String,
    pub applied_at: DateTime<Utc>,
}

/// Projection of the applicant the admin views need.
#[derive(Debug, Clone)]
pub struct ApplicantInfo {
    pub id: UserId,
    pub name: String,
    pub email: String,
    pub username: String,
}

/// Projection of the parent posting. An application has no owner field of
/// its own; `owner` here is the job's `created_by` and is what every
/// ownership decision about the application resolves to.
#[derive(Debug, Clone)]
pub struct JobSummary {
    pub id: JobId,
    pub title: String,
    pub company: String,
    pub job_type: String,
    pub category: JobCategory,
    pub owner: UserId,
}

/// An application joined with its applicant and parent job.
#[derive(Debug, Clone)]
pub struct JobApplicationRecord {
    pub application: JobApplication,
    pub applicant: ApplicantInfo,
    pub job: JobSummary,
}
