// src/application/dto/applications.rs
use crate::domain::job::JobCategory;
use crate::domain::job_application::{ApplicationStatus, JobApplicationRecord};
use chrono::{DateTime, Utc};
use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct ApplicantDto {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub username: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct JobRefDto {
    pub id: i64,
    pub title: String,
    pub company: String,
    pub job_type: String,
    pub category: JobCategory,
}

#[derive(Debug, Clone, Serialize)]
pub struct JobApplicationDto {
    pub id: i64,
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
    pub applicant: ApplicantDto,
    pub job: JobRefDto,
}

impl From<JobApplicationRecord> for JobApplicationDto {
    fn from(record: JobApplicationRecord) -> Self {
        let JobApplicationRecord {
            application,
            applicant,
            job,
        } = record;
        Self {
            id: application.id.into(),
            status: application.status,
            full_name: application.full_name,
            email: application.email,
            phone: application.phone,
            resume: application.resume,
            experience: application.experience,
            skills: application.skills,
            cover_letter: application.cover_letter,
            notes: application.notes,
            applied_at: application.applied_at,
            applicant: ApplicantDto {
                id: applicant.id.into(),
                name: applicant.name,
                email: applicant.email,
                username: applicant.username,
            },
            job: JobRefDto {
                id: job.id.into(),
                title: job.title,
                company: job.company,
                job_type: job.job_type,
                category: job.category,
            },
        }
    }
}

/// Per-status counts for one posting's applications. Unlike the dashboard
/// breakdown, this view keeps all five statuses.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct StatusTallyDto {
    pub total: u64,
    pub pending: u64,
    pub under_review: u64,
    pub shortlisted: u64,
    pub rejected: u64,
    pub hired: u64,
}

impl StatusTallyDto {
    pub fn tally<'a>(statuses: impl Iterator<Item = &'a ApplicationStatus>) -> Self {
        let mut out = Self::default();
        for status in statuses {
            out.total += 1;
            match status {
                ApplicationStatus::Pending => out.pending += 1,
                ApplicationStatus::UnderReview => out.under_review += 1,
                ApplicationStatus::Shortlisted => out.shortlisted += 1,
                ApplicationStatus::Rejected => out.rejected += 1,
                ApplicationStatus::Hired => out.hired += 1,
            }
        }
        out
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct JobApplicationsDto {
    pub applications: Vec<JobApplicationDto>,
    pub stats: StatusTallyDto,
}
