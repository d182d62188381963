// src/domain/job/entity.rs
use crate::domain::job::value_objects::{JobCategory, JobId};
use crate::domain::user::UserId;
use chrono::{DateTime, Utc};

#[derive(Debug, Clone)]
pub struct Job {
    pub id: JobId,
    pub title: String,
    pub company: String,
    pub location: String,
    pub description: String,
    pub category: JobCategory,
    pub salary: String,
    pub deadline: Option<DateTime<Utc>>,
    pub job_type: String,
    pub featured: bool,
    pub created_by: UserId,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Job {
    /// A posting stays active while it has no deadline or the deadline has
    /// not passed.
    pub fn is_active(&self, now: DateTime<Utc>) -> bool {
        self.deadline.is_none_or(|deadline| deadline >= now)
    }

    /// Template for a clone of this posting, owned by `new_owner`. The copy
    /// keeps every recruiter-entered field and marks the title.
    pub fn clone_template(&self, new_owner: UserId) -> NewJob {
        NewJob {
            title: format!("{} (Copy)", self.title),
            company: self.company.clone(),
            location: self.location.clone(),
            description: self.description.clone(),
            category: self.category,
            salary: self.salary.clone(),
            deadline: self.deadline,
            job_type: self.job_type.clone(),
            featured: self.featured,
            created_by: new_owner,
        }
    }
}

#[derive(Debug, Clone)]
pub struct NewJob {
    pub title: String,
    pub company: String,
    pub location: String,
    pub description: String,
    pub category: JobCategory,
    pub salary: String,
    pub deadline: Option<DateTime<Utc>>,
    pub job_type: String,
    pub featured: bool,
    pub created_by: UserId,
}

/// Partial update; `created_by` is immutable after creation and therefore
/// not representable here.
#[derive(Debug, Clone)]
pub struct JobUpdate {
    pub id: JobId,
    pub title: Option<String>,
    pub company: Option<String>,
    pub location: Option<String>,
    pub description: Option<String>,
    pub category: Option<JobCategory>,
    pub salary: Option<String>,
    pub deadline: Option<Option<DateTime<Utc>>>,
    pub job_type: Option<String>,
}

impl JobUpdate {
    pub fn new(id: JobId) -> Self {
        Self {
            id,
            title: None,
            company: None,
            location: None,
            description: None,
            category: None,
            salary: None,
            deadline: None,
            job_type: None,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.company.is_none()
            && self.location.is_none()
            && self.description.is_none()
            && self.category.is_none()
            && self.salary.is_none()
            && self.deadline.is_none()
            && self.job_type.is_none()
    }
}
