// src/domain/job_application/specifications.rs
use crate::domain::job_application::entity::JobApplicationRecord;
use crate::domain::user::UserId;

/// Ownership rule for applications: the effective owner is the creator of
/// the referenced job, never a field on the application itself.
pub struct ApplicationOwnedSpec<'a> {
    record: &'a JobApplicationRecord,
    actor: UserId,
}

impl<'a> ApplicationOwnedSpec<'a> {
    pub fn new(record: &'a JobApplicationRecord, actor: UserId) -> Self {
        Self { record, actor }
    }

    pub fn is_satisfied(&self) -> bool {
        self.record.job.owner == self.actor
    }
}
