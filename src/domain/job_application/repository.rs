// src/domain/job_application/repository.rs
use crate::domain::errors::DomainResult;
use crate::domain::job::value_objects::JobId;
use crate::domain::job_application::entity::JobApplicationRecord;
use crate::domain::job_application::value_objects::{ApplicationId, ApplicationStatus};
use crate::domain::stats::{TopJobStat, TrendPoint};
use crate::domain::user::UserId;
use async_trait::async_trait;
use chrono::{DateTime, Utc};

/// Storage-level narrowing for application searches. Free-text search and
/// job-type matching are deliberately absent: they are applied in memory
/// after these predicates, preserving which records a future limit would
/// see.
#[derive(Debug, Clone, Default)]
pub struct ApplicationSearch {
    pub job_id: Option<JobId>,
    pub statuses: Vec<ApplicationStatus>,
    /// Inclusive lower bound on `applied_at`.
    pub applied_from: Option<DateTime<Utc>>,
    /// Inclusive upper bound on `applied_at`.
    pub applied_until: Option<DateTime<Utc>>,
}

#[async_trait]
pub trait JobApplicationRepository: Send + Sync {
    async fn find_by_id(&self, id: ApplicationId) -> DomainResult<Option<JobApplicationRecord>>;

    /// Applications against `owner`'s postings, newest first.
    async fn list_for_owner(&self, owner: UserId) -> DomainResult<Vec<JobApplicationRecord>>;

    /// Owner-scoped search with the given storage-level narrowing, newest
    /// first. `search.job_id` is assumed to already be ownership-checked by
    /// the caller.
    async fn search_for_owner(
        &self,
        owner: UserId,
        search: &ApplicationSearch,
    ) -> DomainResult<Vec<JobApplicationRecord>>;

    /// Applications for one posting, newest first.
    async fn list_for_job(&self, job_id: JobId) -> DomainResult<Vec<JobApplicationRecord>>;

    /// Fetch the given ids in no particular order; missing ids are simply
    /// absent from the result.
    async fn find_many_by_ids(
        &self,
        ids: &[ApplicationId],
    ) -> DomainResult<Vec<JobApplicationRecord>>;

    async fn update_status(
        &self,
        id: ApplicationId,
        status: ApplicationStatus,
        notes: &str,
    ) -> DomainResult<JobApplicationRecord>;

    /// Single batched status write; returns the number of rows touched.
    async fn update_status_many(
        &self,
        ids: &[ApplicationId],
        status: ApplicationStatus,
    ) -> DomainResult<u64>;

    async fn delete(&self, id: ApplicationId) -> DomainResult<()>;

    async fn count_for_owner(&self, owner: UserId) -> DomainResult<u64>;

    async fn count_for_owner_since(
        &self,
        owner: UserId,
        cutoff: DateTime<Utc>,
    ) -> DomainResult<u64>;

    async fn count_by_status(
        &self,
        owner: UserId,
        status: ApplicationStatus,
    ) -> DomainResult<u64>;

    /// Owned applications bucketed by UTC calendar day of `applied_at`,
    /// ascending, sparse.
    async fn application_trend(
        &self,
        owner: UserId,
        since: DateTime<Utc>,
    ) -> DomainResult<Vec<TrendPoint>>;

    /// Owned postings ranked by application count, descending, ties broken
    /// by job id.
    async fn top_jobs(&self, owner: UserId, limit: u32) -> DomainResult<Vec<TopJobStat>>;
}
