// src/application/activity.rs
use crate::application::dto::{AuthenticatedUser, RequestOrigin};
use crate::domain::activity::{
    ActivityAction, ActivityLogRepository, NewActivityLogEntry, TargetType,
};
use std::sync::Arc;
use tracing::warn;

/// Fire-and-forget writer for the admin activity trail.
///
/// Recording must never block or fail the operation that triggered it: the
/// insert runs on a spawned task and an insert failure is only surfaced to
/// operator diagnostics.
#[derive(Clone)]
pub struct ActivityRecorder {
    repo: Arc<dyn ActivityLogRepository>,
}

impl ActivityRecorder {
    pub fn new(repo: Arc<dyn ActivityLogRepository>) -> Self {
        Self { repo }
    }

    pub fn record(
        &self,
        actor: &AuthenticatedUser,
        action: ActivityAction,
        target_type: TargetType,
        target_id: Option<i64>,
        details: impl Into<String>,
        origin: &RequestOrigin,
    ) {
        let entry = NewActivityLogEntry {
            admin_id: actor.id,
            action,
            target_type,
            target_id,
            details: details.into(),
            ip: origin.ip.clone(),
            user_agent: origin.user_agent.clone(),
        };

        let repo = Arc::clone(&self.repo);
        tokio::spawn(async move {
            if let Err(err) = repo.insert(entry).await {
                warn!(error = %err, "failed to record admin activity");
            }
        });
    }
}
