// src/application/queries/activity.rs
use std::sync::Arc;

use crate::application::dto::{ActivityLogDto, AuthenticatedUser};
use crate::application::error::ApplicationResult;
use crate::domain::activity::ActivityLogRepository;

const ACTIVITY_PAGE_LIMIT: u32 = 100;

pub struct ActivityQueryService {
    activity: Arc<dyn ActivityLogRepository>,
}

impl ActivityQueryService {
    pub fn new(activity: Arc<dyn ActivityLogRepository>) -> Self {
        Self { activity }
    }

    /// An admin's own trail, newest first, capped at 100 entries. The trail
    /// is self-scoped: no admin ever sees another admin's entries.
    pub async fn list_for_actor(
        &self,
        actor: &AuthenticatedUser,
    ) -> ApplicationResult<Vec<ActivityLogDto>> {
        actor.require_admin()?;
        let entries = self
            .activity
            .list_by_admin(actor.id, ACTIVITY_PAGE_LIMIT)
            .await?;
        Ok(entries.into_iter().map(Into::into).collect())
    }
}
