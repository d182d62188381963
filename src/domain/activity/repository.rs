// src/domain/activity/repository.rs
use crate::domain::activity::entity::{ActivityLogEntry, NewActivityLogEntry};
use crate::domain::errors::DomainResult;
use crate::domain::user::UserId;
use async_trait::async_trait;

/// Append-only store of admin actions.
#[async_trait]
pub trait ActivityLogRepository: Send + Sync {
    async fn insert(&self, entry: NewActivityLogEntry) -> DomainResult<()>;

    /// Entries authored by `admin`, newest first, capped at `limit`.
    async fn list_by_admin(
        &self,
        admin: UserId,
        limit: u32,
    ) -> DomainResult<Vec<ActivityLogEntry>>;
}
