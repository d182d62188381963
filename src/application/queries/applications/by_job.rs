// src/application/queries/applications/by_job.rs
use super::ApplicationQueryService;
use crate::application::dto::{AuthenticatedUser, JobApplicationsDto, StatusTallyDto};
use crate::application::error::{ApplicationError, ApplicationResult};
use crate::domain::job::{JobId, JobOwnedSpec};

impl ApplicationQueryService {
    /// One posting's applications, newest first, with an inline per-status
    /// tally (all five statuses here, unlike the dashboard breakdown).
    pub async fn list_for_job(
        &self,
        actor: &AuthenticatedUser,
        job_id: i64,
    ) -> ApplicationResult<JobApplicationsDto> {
        actor.require_admin()?;

        let id = JobId::new(job_id)?;
        let job = self
            .jobs
            .find_by_id(id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("job not found"))?;
        if !JobOwnedSpec::new(&job, actor.id).is_satisfied() {
            return Err(ApplicationError::forbidden(
                "you are not authorized to view applications for this job",
            ));
        }

        let records = self.applications.list_for_job(id).await?;
        let stats = StatusTallyDto::tally(records.iter().map(|r| &r.application.status));

        Ok(JobApplicationsDto {
            applications: records.into_iter().map(Into::into).collect(),
            stats,
        })
    }
}
