// src/application/commands/applications/update_status.rs
use super::ApplicationCommandService;
use crate::application::dto::{AuthenticatedUser, JobApplicationDto, RequestOrigin};
use crate::application::error::ApplicationResult;
use crate::domain::activity::{ActivityAction, TargetType};
use crate::domain::job_application::ApplicationStatus;

pub struct UpdateStatusCommand {
    pub id: i64,
    pub status: ApplicationStatus,
    pub notes: Option<String>,
}

impl ApplicationCommandService {
    pub async fn update_status(
        &self,
        actor: &AuthenticatedUser,
        command: UpdateStatusCommand,
        origin: &RequestOrigin,
    ) -> ApplicationResult<JobApplicationDto> {
        actor.require_admin()?;

        let record = self.owned_application(command.id, actor.id).await?;
        let notes = command.notes.unwrap_or_default();
        let updated = self
            .applications
            .update_status(record.application.id, command.status, &notes)
            .await?;

        let applicant_name = if updated.application.full_name.is_empty() {
            updated.applicant.name.clone()
        } else {
            updated.application.full_name.clone()
        };
        self.recorder.record(
            actor,
            ActivityAction::UpdateApplicationStatus,
            TargetType::Application,
            Some(updated.application.id.into()),
            format!(
                "Updated application status for {} to {}",
                applicant_name,
                command.status.as_str()
            ),
            origin,
        );

        Ok(updated.into())
    }
}
