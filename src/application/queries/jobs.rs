// src/application/queries/jobs.rs
use std::sync::Arc;

use crate::application::dto::{AuthenticatedUser, JobDto};
use crate::application::error::ApplicationResult;
use crate::domain::job::JobRepository;

pub struct JobQueryService {
    jobs: Arc<dyn JobRepository>,
}

impl JobQueryService {
    pub fn new(jobs: Arc<dyn JobRepository>) -> Self {
        Self { jobs }
    }

    /// The caller's own postings, newest first. Other admins' postings are
    /// never visible through this path.
    pub async fn list_owned_jobs(
        &self,
        actor: &AuthenticatedUser,
    ) -> ApplicationResult<Vec<JobDto>> {
        actor.require_admin()?;
        let jobs = self.jobs.list_by_owner(actor.id).await?;
        Ok(jobs.into_iter().map(Into::into).collect())
    }
}
