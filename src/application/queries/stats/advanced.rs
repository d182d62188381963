// src/application/queries/stats/advanced.rs
use super::service::aggregation_failed;
use super::StatsQueryService;
use crate::application::dto::{
    AdvancedStatsDto, AuthenticatedUser, BasicStatsDto, RecentStatsDto, StatusBreakdownDto,
};
use crate::application::error::ApplicationResult;
use crate::domain::errors::DomainResult;
use crate::domain::job_application::ApplicationStatus;
use crate::domain::user::UserId;
use chrono::Duration;

const TOP_JOBS_LIMIT: u32 = 5;

impl StatsQueryService {
    /// Full analytics payload for the admin dashboard. Owner-scoped except
    /// for user counts and user trends, which are platform-wide by design.
    pub async fn advanced_stats(
        &self,
        actor: &AuthenticatedUser,
    ) -> ApplicationResult<AdvancedStatsDto> {
        actor.require_admin()?;
        self.collect_advanced(actor.id)
            .await
            .map_err(aggregation_failed)
    }

    async fn collect_advanced(&self, owner: UserId) -> DomainResult<AdvancedStatsDto> {
        let now = self.clock.now();
        let seven_days_ago = now - Duration::days(7);
        let thirty_days_ago = now - Duration::days(30);

        let basic = BasicStatsDto {
            total_users: self.users.count_seekers().await?,
            total_jobs: self.jobs.count_by_owner(owner).await?,
            active_jobs: self.jobs.count_active_by_owner(owner, now).await?,
            total_applications: self.applications.count_for_owner(owner).await?,
        };

        // Four display buckets; "Under Review" stays out of the breakdown
        // even though it counts toward the totals.
        let application_status = StatusBreakdownDto {
            pending: self
                .applications
                .count_by_status(owner, ApplicationStatus::Pending)
                .await?,
            shortlisted: self
                .applications
                .count_by_status(owner, ApplicationStatus::Shortlisted)
                .await?,
            rejected: self
                .applications
                .count_by_status(owner, ApplicationStatus::Rejected)
                .await?,
            hired: self
                .applications
                .count_by_status(owner, ApplicationStatus::Hired)
                .await?,
        };

        let recent = RecentStatsDto {
            new_users: self.users.count_seekers_since(seven_days_ago).await?,
            new_jobs: self.jobs.count_by_owner_since(owner, seven_days_ago).await?,
            new_applications: self
                .applications
                .count_for_owner_since(owner, seven_days_ago)
                .await?,
        };

        let trends = self
            .applications
            .application_trend(owner, thirty_days_ago)
            .await?;
        let user_trends = self.users.registration_trend(thirty_days_ago).await?;
        let top_jobs = self.applications.top_jobs(owner, TOP_JOBS_LIMIT).await?;

        Ok(AdvancedStatsDto {
            basic,
            application_status,
            recent,
            trends,
            user_trends,
            top_jobs,
        })
    }
}
