// src/application/commands/jobs/update.rs
use super::JobCommandService;
use crate::application::dto::{AuthenticatedUser, JobDto, RequestOrigin};
use crate::application::error::{ApplicationError, ApplicationResult};
use crate::domain::activity::{ActivityAction, TargetType};
use crate::domain::job::{JobCategory, JobUpdate};
use chrono::{DateTime, Utc};

pub struct UpdateJobCommand {
    pub id: i64,
    pub title: Option<String>,
    pub company: Option<String>,
    pub location: Option<String>,
    pub description: Option<String>,
    pub category: Option<JobCategory>,
    pub salary: Option<String>,
    /// `Some(None)` clears the deadline.
    pub deadline: Option<Option<DateTime<Utc>>>,
    pub job_type: Option<String>,
}

impl JobCommandService {
    pub async fn update_job(
        &self,
        actor: &AuthenticatedUser,
        command: UpdateJobCommand,
        origin: &RequestOrigin,
    ) -> ApplicationResult<JobDto> {
        actor.require_admin()?;

        let job = self.owned_job(command.id, actor.id).await?;

        if let Some(title) = &command.title {
            if title.trim().is_empty() {
                return Err(ApplicationError::validation("title must not be empty"));
            }
        }
        if let Some(company) = &command.company {
            if company.trim().is_empty() {
                return Err(ApplicationError::validation("company must not be empty"));
            }
        }

        let update = JobUpdate {
            id: job.id,
            title: command.title,
            company: command.company,
            location: command.location,
            description: command.description,
            category: command.category,
            salary: command.salary,
            deadline: command.deadline,
            job_type: command.job_type,
        };

        if update.is_empty() {
            return Err(ApplicationError::validation("no fields to update"));
        }

        let updated = self.jobs.update(update).await?;

        self.recorder.record(
            actor,
            ActivityAction::UpdateJob,
            TargetType::Job,
            Some(updated.id.into()),
            format!("Updated job {}", updated.title),
            origin,
        );

        Ok(updated.into())
    }
}
