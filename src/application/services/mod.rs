// src/application/services/mod.rs
use std::sync::Arc;

use crate::{
    application::{
        activity::ActivityRecorder,
        commands::{applications::ApplicationCommandService, jobs::JobCommandService},
        ports::{security::TokenAuthenticator, time::Clock},
        queries::{
            activity::ActivityQueryService, applications::ApplicationQueryService,
            export::ExportService, jobs::JobQueryService, stats::StatsQueryService,
        },
    },
    domain::{
        activity::ActivityLogRepository, job::JobRepository,
        job_application::JobApplicationRepository, user::UserRepository,
    },
};

/// Wiring root: constructs every service once over the injected
/// repositories. Nothing in this crate reaches for a global connection;
/// the storage client arrives here and nowhere else.
pub struct ApplicationServices {
    pub job_commands: Arc<JobCommandService>,
    pub application_commands: Arc<ApplicationCommandService>,
    pub job_queries: Arc<JobQueryService>,
    pub application_queries: Arc<ApplicationQueryService>,
    pub stats_queries: Arc<StatsQueryService>,
    pub activity_queries: Arc<ActivityQueryService>,
    pub exports: Arc<ExportService>,
    authenticator: Arc<dyn TokenAuthenticator>,
}

impl ApplicationServices {
    pub fn new(
        user_repo: Arc<dyn UserRepository>,
        job_repo: Arc<dyn JobRepository>,
        application_repo: Arc<dyn JobApplicationRepository>,
        activity_repo: Arc<dyn ActivityLogRepository>,
        authenticator: Arc<dyn TokenAuthenticator>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        let recorder = ActivityRecorder::new(Arc::clone(&activity_repo));

        let job_commands = Arc::new(JobCommandService::new(
            Arc::clone(&job_repo),
            recorder.clone(),
        ));
        let application_commands = Arc::new(ApplicationCommandService::new(
            Arc::clone(&application_repo),
            recorder.clone(),
        ));
        let job_queries = Arc::new(JobQueryService::new(Arc::clone(&job_repo)));
        let application_queries = Arc::new(ApplicationQueryService::new(
            Arc::clone(&application_repo),
            Arc::clone(&job_repo),
        ));
        let stats_queries = Arc::new(StatsQueryService::new(
            Arc::clone(&user_repo),
            Arc::clone(&job_repo),
            Arc::clone(&application_repo),
            Arc::clone(&clock),
        ));
        let activity_queries = Arc::new(ActivityQueryService::new(Arc::clone(&activity_repo)));
        let exports = Arc::new(ExportService::new(
            Arc::clone(&user_repo),
            Arc::clone(&job_repo),
            Arc::clone(&application_repo),
            recorder,
            Arc::clone(&clock),
        ));

        Self {
            job_commands,
            application_commands,
            job_queries,
            application_queries,
            stats_queries,
            activity_queries,
            exports,
            authenticator,
        }
    }

    pub fn authenticator(&self) -> Arc<dyn TokenAuthenticator> {
        Arc::clone(&self.authenticator)
    }
}
