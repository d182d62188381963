// src/application/queries/stats/dashboard.rs
use super::service::aggregation_failed;
use super::StatsQueryService;
use crate::application::dto::{AuthenticatedUser, DashboardStatsDto};
use crate::application::error::ApplicationResult;
use crate::domain::errors::DomainResult;
use crate::domain::user::UserId;

impl StatsQueryService {
    /// Headline dashboard numbers. The user count is platform-wide (seekers
    /// have no owning admin); jobs and applications are scoped to the
    /// caller's postings.
    pub async fn dashboard_stats(
        &self,
        actor: &AuthenticatedUser,
    ) -> ApplicationResult<DashboardStatsDto> {
        actor.require_admin()?;
        self.collect_dashboard(actor.id)
            .await
            .map_err(aggregation_failed)
    }

    async fn collect_dashboard(&self, owner: UserId) -> DomainResult<DashboardStatsDto> {
        let now = self.clock.now();
        Ok(DashboardStatsDto {
            total_users: self.users.count_seekers().await?,
            total_jobs: self.jobs.count_by_owner(owner).await?,
            active_jobs: self.jobs.count_active_by_owner(owner, now).await?,
            total_applications: self.applications.count_for_owner(owner).await?,
        })
    }
}
