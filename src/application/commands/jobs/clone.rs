// src/application/commands/jobs/clone.rs
use super::JobCommandService;
use crate::application::dto::{AuthenticatedUser, JobDto, RequestOrigin};
use crate::application::error::ApplicationResult;
use crate::domain::activity::{ActivityAction, TargetType};

impl JobCommandService {
    /// Duplicate a posting under the caller's ownership. Any posting can be
    /// cloned by id; the copy always belongs to the cloner, so cloning never
    /// grants access to the original.
    pub async fn clone_job(
        &self,
        actor: &AuthenticatedUser,
        id: i64,
        origin: &RequestOrigin,
    ) -> ApplicationResult<JobDto> {
        actor.require_admin()?;

        let original = self.any_job(id).await?;
        let cloned = self.jobs.insert(original.clone_template(actor.id)).await?;

        self.recorder.record(
            actor,
            ActivityAction::CloneJob,
            TargetType::Job,
            Some(original.id.into()),
            format!("Cloned job {} as {}", original.title, cloned.title),
            origin,
        );

        Ok(cloned.into())
    }
}
