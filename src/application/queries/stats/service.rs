// src/application/queries/stats/service.rs
use std::sync::Arc;

use crate::application::error::ApplicationError;
use crate::application::ports::time::Clock;
use crate::domain::errors::DomainError;
use crate::domain::job::JobRepository;
use crate::domain::job_application::JobApplicationRepository;
use crate::domain::user::UserRepository;

pub struct StatsQueryService {
    pub(super) users: Arc<dyn UserRepository>,
    pub(super) jobs: Arc<dyn JobRepository>,
    pub(super) applications: Arc<dyn JobApplicationRepository>,
    pub(super) clock: Arc<dyn Clock>,
}

impl StatsQueryService {
    pub fn new(
        users: Arc<dyn UserRepository>,
        jobs: Arc<dyn JobRepository>,
        applications: Arc<dyn JobApplicationRepository>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            users,
            jobs,
            applications,
            clock,
        }
    }
}

/// A failed aggregation yields one opaque error for the whole call; callers
/// never see a partial payload. The underlying cause goes to diagnostics.
pub(super) fn aggregation_failed(err: DomainError) -> ApplicationError {
    tracing::error!(error = %err, "statistics aggregation failed");
    ApplicationError::infrastructure("failed to compute statistics")
}
