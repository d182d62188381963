// src/application/commands/jobs/service.rs
use std::sync::Arc;

use crate::application::activity::ActivityRecorder;
use crate::application::error::{ApplicationError, ApplicationResult};
use crate::domain::job::{Job, JobId, JobOwnedSpec, JobRepository};
use crate::domain::user::UserId;

pub struct JobCommandService {
    pub(super) jobs: Arc<dyn JobRepository>,
    pub(super) recorder: ActivityRecorder,
}

impl JobCommandService {
    pub fn new(jobs: Arc<dyn JobRepository>, recorder: ActivityRecorder) -> Self {
        Self { jobs, recorder }
    }

    /// Fetch a posting and fail with NOT_FOUND before FORBIDDEN, so a
    /// missing id is never reported as an ownership violation.
    pub(super) async fn owned_job(&self, id: i64, actor: UserId) -> ApplicationResult<Job> {
        let job = self.any_job(id).await?;
        if !JobOwnedSpec::new(&job, actor).is_satisfied() {
            return Err(ApplicationError::forbidden(
                "you are not authorized to manage this job",
            ));
        }
        Ok(job)
    }

    pub(super) async fn any_job(&self, id: i64) -> ApplicationResult<Job> {
        let id = JobId::new(id)?;
        self.jobs
            .find_by_id(id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("job not found"))
    }
}
