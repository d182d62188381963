// src/application/commands/applications/bulk_update.rs
use super::ApplicationCommandService;
use crate::application::dto::{AuthenticatedUser, RequestOrigin};
use crate::application::error::{ApplicationError, ApplicationResult};
use crate::domain::activity::{ActivityAction, TargetType};
use crate::domain::job_application::{ApplicationId, ApplicationOwnedSpec, ApplicationStatus};

pub struct BulkUpdateStatusCommand {
    pub application_ids: Vec<i64>,
    pub status: ApplicationStatus,
}

impl ApplicationCommandService {
    /// All-or-nothing: ownership is verified for every referenced
    /// application before a single row is written. One unowned id rejects
    /// the whole batch.
    pub async fn bulk_update_status(
        &self,
        actor: &AuthenticatedUser,
        command: BulkUpdateStatusCommand,
        origin: &RequestOrigin,
    ) -> ApplicationResult<u64> {
        actor.require_admin()?;

        if command.application_ids.is_empty() {
            return Err(ApplicationError::validation("no applications selected"));
        }

        let mut ids = command
            .application_ids
            .iter()
            .map(|id| ApplicationId::new(*id))
            .collect::<Result<Vec<_>, _>>()?;
        ids.sort_unstable_by_key(|id| i64::from(*id));
        ids.dedup();

        let records = self.applications.find_many_by_ids(&ids).await?;
        if records.len() != ids.len() {
            return Err(ApplicationError::not_found(
                "one or more applications not found",
            ));
        }
        let all_owned = records
            .iter()
            .all(|record| ApplicationOwnedSpec::new(record, actor.id).is_satisfied());
        if !all_owned {
            return Err(ApplicationError::forbidden(
                "you are not authorized to update one or more of these applications",
            ));
        }

        let updated = self
            .applications
            .update_status_many(&ids, command.status)
            .await?;

        self.recorder.record(
            actor,
            ActivityAction::BulkUpdateStatus,
            TargetType::Application,
            None,
            format!(
                "Updated status to {} for {} applications",
                command.status.as_str(),
                ids.len()
            ),
            origin,
        );

        Ok(updated)
    }
}
