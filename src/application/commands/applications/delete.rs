// src/application/commands/applications/delete.rs
use super::ApplicationCommandService;
use crate::application::dto::{AuthenticatedUser, RequestOrigin};
use crate::application::error::ApplicationResult;
use crate::domain::activity::{ActivityAction, TargetType};

impl ApplicationCommandService {
    pub async fn delete_application(
        &self,
        actor: &AuthenticatedUser,
        id: i64,
        origin: &RequestOrigin,
    ) -> ApplicationResult<()> {
        actor.require_admin()?;

        let record = self.owned_application(id, actor.id).await?;
        self.applications.delete(record.application.id).await?;

        self.recorder.record(
            actor,
            ActivityAction::DeleteApplication,
            TargetType::Application,
            Some(record.application.id.into()),
            format!("Deleted application for job {}", record.job.title),
            origin,
        );

        Ok(())
    }
}
