// src/application/commands/applications/service.rs
use std::sync::Arc;

use crate::application::activity::ActivityRecorder;
use crate::application::error::{ApplicationError, ApplicationResult};
use crate::domain::job_application::{
    ApplicationId, ApplicationOwnedSpec, JobApplicationRecord, JobApplicationRepository,
};
use crate::domain::user::UserId;

pub struct ApplicationCommandService {
    pub(super) applications: Arc<dyn JobApplicationRepository>,
    pub(super) recorder: ActivityRecorder,
}

impl ApplicationCommandService {
    pub fn new(
        applications: Arc<dyn JobApplicationRepository>,
        recorder: ActivityRecorder,
    ) -> Self {
        Self {
            applications,
            recorder,
        }
    }

    /// Resolve an application and enforce that the caller owns its parent
    /// job. NOT_FOUND wins over FORBIDDEN for missing ids.
    pub(super) async fn owned_application(
        &self,
        id: i64,
        actor: UserId,
    ) -> ApplicationResult<JobApplicationRecord> {
        let id = ApplicationId::new(id)?;
        let record = self
            .applications
            .find_by_id(id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("application not found"))?;

        if !ApplicationOwnedSpec::new(&record, actor).is_satisfied() {
            return Err(ApplicationError::forbidden(
                "you are not authorized to manage this application",
            ));
        }
        Ok(record)
    }
}
