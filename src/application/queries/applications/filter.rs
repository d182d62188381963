// src/application/queries/applications/filter.rs
use super::ApplicationQueryService;
use crate::application::dto::{AuthenticatedUser, JobApplicationDto};
use crate::application::error::{ApplicationError, ApplicationResult};
use crate::domain::job::{JobId, JobOwnedSpec};
use crate::domain::job_application::{ApplicationSearch, ApplicationStatus, JobApplicationRecord};
use chrono::{DateTime, Utc};

pub struct FilterApplicationsQuery {
    pub job_id: Option<i64>,
    pub statuses: Vec<ApplicationStatus>,
    pub applied_from: Option<DateTime<Utc>>,
    pub applied_until: Option<DateTime<Utc>>,
    pub job_type: Option<String>,
    pub search_term: Option<String>,
}

impl ApplicationQueryService {
    /// Owner-scoped filtered view. Status and date narrowing run against
    /// storage; the job-type match and the free-text search run in memory
    /// over the already-authorized result, in that order.
    pub async fn filter_applications(
        &self,
        actor: &AuthenticatedUser,
        query: FilterApplicationsQuery,
    ) -> ApplicationResult<Vec<JobApplicationDto>> {
        actor.require_admin()?;

        let job_id = match query.job_id {
            Some(raw) => Some(self.authorized_job_filter(raw, actor).await?),
            None => None,
        };

        let search = ApplicationSearch {
            job_id,
            statuses: query.statuses,
            applied_from: query.applied_from,
            applied_until: query.applied_until,
        };
        let mut records = self.applications.search_for_owner(actor.id, &search).await?;

        if let Some(job_type) = normalized(query.job_type.as_deref()) {
            records.retain(|record| matches_job_type(record, &job_type));
        }
        if let Some(term) = normalized(query.search_term.as_deref()) {
            records.retain(|record| matches_search_term(record, &term));
        }

        Ok(records.into_iter().map(Into::into).collect())
    }

    /// A job filter must reference a posting the caller owns; anything else
    /// is an explicit FORBIDDEN, never a silent empty result.
    async fn authorized_job_filter(
        &self,
        raw: i64,
        actor: &AuthenticatedUser,
    ) -> ApplicationResult<JobId> {
        let id = JobId::new(raw)?;
        let owned = match self.jobs.find_by_id(id).await? {
            Some(job) => JobOwnedSpec::new(&job, actor.id).is_satisfied(),
            None => false,
        };
        if owned {
            Ok(id)
        } else {
            Err(ApplicationError::forbidden(
                "you are not authorized to filter applications for this job",
            ))
        }
    }
}

fn normalized(value: Option<&str>) -> Option<String> {
    let trimmed = value?.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_lowercase())
    }
}

fn matches_job_type(record: &JobApplicationRecord, job_type: &str) -> bool {
    record.job.job_type.eq_ignore_ascii_case(job_type)
        || record.job.category.as_str().eq_ignore_ascii_case(job_type)
}

fn matches_search_term(record: &JobApplicationRecord, term: &str) -> bool {
    let haystacks = [
        &record.applicant.name,
        &record.applicant.email,
        &record.applicant.username,
        &record.job.title,
        &record.job.company,
    ];
    haystacks
        .iter()
        .any(|value| value.to_lowercase().contains(term))
}
