// src/application/commands/jobs/feature.rs
use super::JobCommandService;
use crate::application::dto::{AuthenticatedUser, JobDto, RequestOrigin};
use crate::application::error::ApplicationResult;
use crate::domain::activity::{ActivityAction, TargetType};

impl JobCommandService {
    pub async fn toggle_featured(
        &self,
        actor: &AuthenticatedUser,
        id: i64,
        origin: &RequestOrigin,
    ) -> ApplicationResult<JobDto> {
        actor.require_admin()?;

        let job = self.owned_job(id, actor.id).await?;
        let updated = self.jobs.set_featured(job.id, !job.featured).await?;

        let details = if updated.featured {
            format!("Job {} marked as featured", updated.title)
        } else {
            format!("Job {} removed from featured", updated.title)
        };
        self.recorder.record(
            actor,
            ActivityAction::ToggleFeatured,
            TargetType::Job,
            Some(updated.id.into()),
            details,
            origin,
        );

        Ok(updated.into())
    }
}
