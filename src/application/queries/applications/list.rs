// src/application/queries/applications/list.rs
use super::ApplicationQueryService;
use crate::application::dto::{AuthenticatedUser, JobApplicationDto};
use crate::application::error::ApplicationResult;

impl ApplicationQueryService {
    /// Every application against the caller's postings, newest first.
    pub async fn list_applications(
        &self,
        actor: &AuthenticatedUser,
    ) -> ApplicationResult<Vec<JobApplicationDto>> {
        actor.require_admin()?;
        let records = self.applications.list_for_owner(actor.id).await?;
        Ok(records.into_iter().map(Into::into).collect())
    }
}
