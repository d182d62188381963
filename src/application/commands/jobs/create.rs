// src/application/commands/jobs/create.rs
use super::JobCommandService;
use crate::application::dto::{AuthenticatedUser, JobDto, RequestOrigin};
use crate::application::error::{ApplicationError, ApplicationResult};
use crate::domain::activity::{ActivityAction, TargetType};
use crate::domain::job::{JobCategory, NewJob};
use chrono::{DateTime, Utc};

pub struct CreateJobCommand {
    pub title: String,
    pub company: String,
    pub location: String,
    pub description: String,
    pub category: JobCategory,
    pub salary: String,
    pub deadline: Option<DateTime<Utc>>,
    pub job_type: String,
    pub featured: bool,
}

impl JobCommandService {
    pub async fn create_job(
        &self,
        actor: &AuthenticatedUser,
        command: CreateJobCommand,
        origin: &RequestOrigin,
    ) -> ApplicationResult<JobDto> {
        actor.require_admin()?;

        if command.title.trim().is_empty() {
            return Err(ApplicationError::validation("title is required"));
        }
        if command.company.trim().is_empty() {
            return Err(ApplicationError::validation("company is required"));
        }

        let job = self
            .jobs
            .insert(NewJob {
                title: command.title,
                company: command.company,
                location: command.location,
                description: command.description,
                category: command.category,
                salary: command.salary,
                deadline: command.deadline,
                job_type: command.job_type,
                featured: command.featured,
                created_by: actor.id,
            })
            .await?;

        self.recorder.record(
            actor,
            ActivityAction::CreateJob,
            TargetType::Job,
            Some(job.id.into()),
            format!("Created job {} at {}", job.title, job.company),
            origin,
        );

        Ok(job.into())
    }
}
