// tests/support/helpers.rs
use std::sync::Arc;
use std::time::Duration;

use chrono::{DateTime, Utc};

use hireboard::application::dto::{AuthenticatedUser, RequestOrigin};
use hireboard::application::services::ApplicationServices;
use hireboard::domain::activity::{ActivityLogEntry, ActivityLogRepository};
use hireboard::domain::user::{Role, UserId};

use super::builders::BASE_TIME;
use super::mocks::{
    FixedClock, InMemoryApplicationRepo, InMemoryJobRepo, InMemoryUserRepo,
    RecordingActivityRepo, StaticAuthenticator,
};

pub fn admin(id: i64) -> AuthenticatedUser {
    AuthenticatedUser::new(UserId::new(id).unwrap(), Role::Admin)
}

pub fn non_admin(id: i64) -> AuthenticatedUser {
    AuthenticatedUser::new(UserId::new(id).unwrap(), Role::User)
}

pub fn origin() -> RequestOrigin {
    RequestOrigin {
        ip: "203.0.113.7".to_string(),
        user_agent: "integration-tests".to_string(),
    }
}

/// Every repository plus the assembled services, so tests can seed state
/// and inspect what the operations wrote.
pub struct Harness {
    pub users: Arc<InMemoryUserRepo>,
    pub jobs: Arc<InMemoryJobRepo>,
    pub applications: Arc<InMemoryApplicationRepo>,
    pub activity: Arc<RecordingActivityRepo>,
    pub services: ApplicationServices,
}

pub fn harness() -> Harness {
    harness_at(*BASE_TIME)
}

pub fn harness_at(now: DateTime<Utc>) -> Harness {
    let users = Arc::new(InMemoryUserRepo::default());
    let jobs = Arc::new(InMemoryJobRepo::default());
    let applications = Arc::new(InMemoryApplicationRepo::default());
    let activity = Arc::new(RecordingActivityRepo::default());

    let services = ApplicationServices::new(
        users.clone(),
        jobs.clone(),
        applications.clone(),
        activity.clone(),
        Arc::new(StaticAuthenticator(admin(1))),
        Arc::new(FixedClock(now)),
    );

    Harness {
        users,
        jobs,
        applications,
        activity,
        services,
    }
}

/// Build the services over a custom activity repository (e.g. the failing
/// one) while keeping the in-memory stores.
pub fn harness_with_activity(activity: Arc<dyn ActivityLogRepository>) -> Harness {
    let users = Arc::new(InMemoryUserRepo::default());
    let jobs = Arc::new(InMemoryJobRepo::default());
    let applications = Arc::new(InMemoryApplicationRepo::default());
    let recording = Arc::new(RecordingActivityRepo::default());

    let services = ApplicationServices::new(
        users.clone(),
        jobs.clone(),
        applications.clone(),
        activity,
        Arc::new(StaticAuthenticator(admin(1))),
        Arc::new(FixedClock(*BASE_TIME)),
    );

    Harness {
        users,
        jobs,
        applications,
        activity: recording,
        services,
    }
}

/// Audit writes are fire-and-forget on a spawned task; poll until the
/// expected number of entries lands instead of racing it.
pub async fn wait_for_entries(repo: &RecordingActivityRepo, expected: usize) -> Vec<ActivityLogEntry> {
    for _ in 0..200 {
        let entries = repo.entries();
        if entries.len() >= expected {
            return entries;
        }
        tokio::time::sleep(Duration::from_millis(5)).await;
    }
    panic!(
        "expected {expected} activity entries, found {}",
        repo.entries().len()
    );
}
