// src/domain/job/repository.rs
use crate::domain::errors::DomainResult;
use crate::domain::job::entity::{Job, JobUpdate, NewJob};
use crate::domain::job::value_objects::JobId;
use crate::domain::user::UserId;
use async_trait::async_trait;
use chrono::{DateTime, Utc};

#[async_trait]
pub trait JobRepository: Send + Sync {
    async fn insert(&self, job: NewJob) -> DomainResult<Job>;

    async fn find_by_id(&self, id: JobId) -> DomainResult<Option<Job>>;

    async fn update(&self, update: JobUpdate) -> DomainResult<Job>;

    async fn set_featured(&self, id: JobId, featured: bool) -> DomainResult<Job>;

    async fn delete(&self, id: JobId) -> DomainResult<()>;

    /// Postings owned by `owner`, newest first.
    async fn list_by_owner(&self, owner: UserId) -> DomainResult<Vec<Job>>;

    async fn count_by_owner(&self, owner: UserId) -> DomainResult<u64>;

    /// Owned postings whose deadline is absent or has not passed.
    async fn count_active_by_owner(&self, owner: UserId, now: DateTime<Utc>) -> DomainResult<u64>;

    async fn count_by_owner_since(
        &self,
        owner: UserId,
        cutoff: DateTime<Utc>,
    ) -> DomainResult<u64>;
}
