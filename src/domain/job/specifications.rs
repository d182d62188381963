// src/domain/job/specifications.rs
use crate::domain::job::entity::Job;
use crate::domain::user::UserId;

/// Ownership rule for postings: only the admin that created a job may read
/// it through owner-scoped paths or mutate it.
pub struct JobOwnedSpec<'a> {
    job: &'a Job,
    actor: UserId,
}

impl<'a> JobOwnedSpec<'a> {
    pub fn new(job: &'a Job, actor: UserId) -> Self {
        Self { job, actor }
    }

    pub fn is_satisfied(&self) -> bool {
        self.job.created_by == self.actor
    }
}
