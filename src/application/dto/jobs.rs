// src/application/dto/jobs.rs
use crate::domain::job::{Job, JobCategory};
use chrono::{DateTime, Utc};
use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct JobDto {
    pub id: i64,
    pub title: String,
    pub company: String,
    pub location: String,
    pub description: String,
    pub category: JobCategory,
    pub salary: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deadline: Option<DateTime<Utc>>,
    pub job_type: String,
    pub featured: bool,
    pub created_by: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Job> for JobDto {
    fn from(job: Job) -> Self {
        Self {
            id: job.id.into(),
            title: job.title,
            company: job.company,
            location: job.location,
            description: job.description,
            category: job.category,
            salary: job.salary,
            deadline: job.deadline,
            job_type: job.job_type,
            featured: job.featured,
            created_by: job.created_by.into(),
            created_at: job.created_at,
            updated_at: job.updated_at,
        }
    }
}
