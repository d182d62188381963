// src/application/commands/jobs/delete.rs
use super::JobCommandService;
use crate::application::dto::{AuthenticatedUser, RequestOrigin};
use crate::application::error::ApplicationResult;
use crate::domain::activity::{ActivityAction, TargetType};

impl JobCommandService {
    pub async fn delete_job(
        &self,
        actor: &AuthenticatedUser,
        id: i64,
        origin: &RequestOrigin,
    ) -> ApplicationResult<()> {
        actor.require_admin()?;

        let job = self.owned_job(id, actor.id).await?;
        self.jobs.delete(job.id).await?;

        self.recorder.record(
            actor,
            ActivityAction::DeleteJob,
            TargetType::Job,
            Some(job.id.into()),
            format!("Deleted job {} at {}", job.title, job.company),
            origin,
        );

        Ok(())
    }
}
