// src/domain/user/repository.rs
use crate::domain::errors::DomainResult;
use crate::domain::stats::TrendPoint;
use crate::domain::user::entity::User;
use async_trait::async_trait;
use chrono::{DateTime, Utc};

/// Read access to the platform's user pool. Seeker counts are deliberately
/// global: users have no ownership relation to any particular admin.
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Number of registered job seekers (every user whose role is not admin).
    async fn count_seekers(&self) -> DomainResult<u64>;

    /// Seekers registered at or after `cutoff`.
    async fn count_seekers_since(&self, cutoff: DateTime<Utc>) -> DomainResult<u64>;

    /// Seeker registrations bucketed by UTC calendar day, ascending,
    /// omitting days without registrations.
    async fn registration_trend(&self, since: DateTime<Utc>) -> DomainResult<Vec<TrendPoint>>;

    /// All seekers, newest first.
    async fn list_seekers(&self) -> DomainResult<Vec<User>>;
}
