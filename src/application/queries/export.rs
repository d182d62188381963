// src/application/queries/export.rs
use std::str::FromStr;
use std::sync::Arc;

use crate::application::activity::ActivityRecorder;
use crate::application::dto::{AuthenticatedUser, RequestOrigin};
use crate::application::error::{ApplicationError, ApplicationResult};
use crate::application::export::{to_csv, CsvRecord};
use crate::application::ports::time::Clock;
use crate::domain::activity::{ActivityAction, TargetType};
use crate::domain::job::JobRepository;
use crate::domain::job_application::{JobApplicationRecord, JobApplicationRepository};
use crate::domain::user::{User, UserRepository};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportKind {
    Applications,
    Jobs,
    Users,
}

impl ExportKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ExportKind::Applications => "applications",
            ExportKind::Jobs => "jobs",
            ExportKind::Users => "users",
        }
    }
}

impl FromStr for ExportKind {
    type Err = ApplicationError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "applications" => Ok(ExportKind::Applications),
            "jobs" => Ok(ExportKind::Jobs),
            "users" => Ok(ExportKind::Users),
            _ => Err(ApplicationError::validation("invalid export type")),
        }
    }
}

#[derive(Debug)]
pub struct ExportFile {
    pub filename: String,
    pub content: String,
}

pub struct ExportService {
    users: Arc<dyn UserRepository>,
    jobs: Arc<dyn JobRepository>,
    applications: Arc<dyn JobApplicationRepository>,
    recorder: ActivityRecorder,
    clock: Arc<dyn Clock>,
}

impl ExportService {
    pub fn new(
        users: Arc<dyn UserRepository>,
        jobs: Arc<dyn JobRepository>,
        applications: Arc<dyn JobApplicationRepository>,
        recorder: ActivityRecorder,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            users,
            jobs,
            applications,
            recorder,
            clock,
        }
    }

    /// Render one of the caller's data sets as CSV. Applications and jobs
    /// are owner-scoped; the users export covers the (unowned) seeker pool.
    pub async fn export(
        &self,
        actor: &AuthenticatedUser,
        kind: ExportKind,
        origin: &RequestOrigin,
    ) -> ApplicationResult<ExportFile> {
        actor.require_admin()?;

        let records = match kind {
            ExportKind::Applications => {
                let apps = self.applications.list_for_owner(actor.id).await?;
                apps.iter().map(application_row).collect::<Vec<_>>()
            }
            ExportKind::Jobs => {
                let jobs = self.jobs.list_by_owner(actor.id).await?;
                jobs.iter()
                    .map(|job| {
                        vec![
                            column("Title", &job.title),
                            column("Company", &job.company),
                            column("Location", &job.location),
                            column("Type", &job.job_type),
                            column("Featured", &job.featured.to_string()),
                            column("CreatedAt", &job.created_at.to_rfc3339()),
                        ]
                    })
                    .collect()
            }
            ExportKind::Users => {
                let users = self.users.list_seekers().await?;
                users.iter().map(user_row).collect()
            }
        };

        let filename = format!(
            "export_{}_{}.csv",
            kind.as_str(),
            self.clock.now().timestamp_millis()
        );

        self.recorder.record(
            actor,
            ActivityAction::ExportData,
            TargetType::System,
            None,
            format!("Exported {} data", kind.as_str()),
            origin,
        );

        Ok(ExportFile {
            filename,
            content: to_csv(&records),
        })
    }
}

fn column(name: &str, value: &str) -> (String, Option<String>) {
    (name.to_string(), Some(value.to_string()))
}

fn or_fallback<'a>(primary: &'a str, fallback: &'a str) -> &'a str {
    let value = if primary.is_empty() { fallback } else { primary };
    if value.is_empty() {
        "N/A"
    } else {
        value
    }
}

fn application_row(record: &JobApplicationRecord) -> CsvRecord {
    let app = &record.application;
    vec![
        column("Applicant", or_fallback(&app.full_name, &record.applicant.name)),
        column("Email", or_fallback(&app.email, &record.applicant.email)),
        column("Phone", or_fallback(&app.phone, "")),
        column("Job", &record.job.title),
        column("Company", &record.job.company),
        column("Status", app.status.as_str()),
        column("AppliedAt", &app.applied_at.to_rfc3339()),
    ]
}

fn user_row(user: &User) -> CsvRecord {
    vec![
        column("Name", &user.name),
        column("Email", &user.email),
        column("JoinedAt", &user.created_at.to_rfc3339()),
    ]
}
