// src/application/queries/applications/service.rs
use std::sync::Arc;

use crate::domain::job::JobRepository;
use crate::domain::job_application::JobApplicationRepository;

pub struct ApplicationQueryService {
    pub(super) applications: Arc<dyn JobApplicationRepository>,
    pub(super) jobs: Arc<dyn JobRepository>,
}

impl ApplicationQueryService {
    pub fn new(
        applications: Arc<dyn JobApplicationRepository>,
        jobs: Arc<dyn JobRepository>,
    ) -> Self {
        Self { applications, jobs }
    }
}
