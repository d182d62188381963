// src/infrastructure/repositories/postgres_application.rs
use super::map_sqlx;
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::job::{JobCategory, JobId};
use crate::domain::job_application::{
    ApplicantInfo, ApplicationId, ApplicationSearch, ApplicationStatus, JobApplication,
    JobApplicationRecord, JobApplicationRepository, JobSummary,
};
use crate::domain::stats::{TopJobStat, TrendPoint};
use crate::domain::user::UserId;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool, Postgres, QueryBuilder};

/// Every read joins the applicant and the parent job: the ownership rule
/// lives on the job's `created_by`, so a bare applications row is never
/// enough to authorize anything.
const RECORD_SELECT: &str = "SELECT a.id, a.applicant_id, a.job_id, a.status, a.full_name, \
     a.email, a.phone, a.resume, a.experience, a.skills, a.cover_letter, a.notes, a.applied_at, \
     u.name AS applicant_name, u.email AS applicant_email, u.username AS applicant_username, \
     j.title AS job_title, j.company AS job_company, j.job_type AS job_job_type, \
     j.category AS job_category, j.created_by AS job_owner \
     FROM applications a \
     JOIN users u ON u.id = a.applicant_id \
     JOIN jobs j ON j.id = a.job_id";

#[derive(Clone)]
pub struct PostgresJobApplicationRepository {
    pool: PgPool,
}

impl PostgresJobApplicationRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct RecordRow {
    id: i64,
    applicant_id: i64,
    job_id: i64,
    status: String,
    full_name: String,
    email: String,
    phone: String,
    resume: String,
    experience: String,
    skills: String,
    cover_letter: String,
    notes: String,
    applied_at: DateTime<Utc>,
    applicant_name: String,
    applicant_email: String,
    applicant_username: String,
    job_title: String,
    job_company: String,
    job_job_type: String,
    job_category: String,
    job_owner: i64,
}

impl TryFrom<RecordRow> for JobApplicationRecord {
    type Error = DomainError;

    fn try_from(row: RecordRow) -> Result<Self, Self::Error> {
        let applicant_id = UserId::new(row.applicant_id)?;
        let job_id = JobId::new(row.job_id)?;
        Ok(JobApplicationRecord {
            application: JobApplication {
                id: ApplicationId::new(row.id)?,
                applicant_id,
                job_id,
                status: row.status.parse::<ApplicationStatus>()?,
                full_name: row.full_name,
                email: row.email,
                phone: row.phone,
                resume: row.resume,
                experience: row.experience,
                skills: row.skills,
                cover_letter: row.cover_letter,
                notes: row.notes,
                applied_at: row.applied_at,
            },
            applicant: ApplicantInfo {
                id: applicant_id,
                name: row.applicant_name,
                email: row.applicant_email,
                username: row.applicant_username,
            },
            job: JobSummary {
                id: job_id,
                title: row.job_title,
                company: row.job_company,
                job_type: row.job_job_type,
                category: row.job_category.parse::<JobCategory>()?,
                owner: UserId::new(row.job_owner)?,
            },
        })
    }
}

#[derive(Debug, FromRow)]
struct TrendRow {
    day: String,
    count: i64,
}

#[derive(Debug, FromRow)]
struct TopJobRow {
    title: String,
    company: String,
    count: i64,
}

fn into_records(rows: Vec<RecordRow>) -> DomainResult<Vec<JobApplicationRecord>> {
    rows.into_iter().map(JobApplicationRecord::try_from).collect()
}

#[async_trait]
impl JobApplicationRepository for PostgresJobApplicationRepository {
    async fn find_by_id(&self, id: ApplicationId) -> DomainResult<Option<JobApplicationRecord>> {
        let row = sqlx::query_as::<_, RecordRow>(&format!("{RECORD_SELECT} WHERE a.id = $1"))
            .bind(i64::from(id))
            .fetch_optional(&self.pool)
            .await
            .map_err(map_sqlx)?;

        row.map(JobApplicationRecord::try_from).transpose()
    }

    async fn list_for_owner(&self, owner: UserId) -> DomainResult<Vec<JobApplicationRecord>> {
        let rows = sqlx::query_as::<_, RecordRow>(&format!(
            "{RECORD_SELECT} WHERE j.created_by = $1 ORDER BY a.applied_at DESC"
        ))
        .bind(i64::from(owner))
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx)?;

        into_records(rows)
    }

    async fn search_for_owner(
        &self,
        owner: UserId,
        search: &ApplicationSearch,
    ) -> DomainResult<Vec<JobApplicationRecord>> {
        let mut builder: QueryBuilder<Postgres> = QueryBuilder::new(RECORD_SELECT);
        builder.push(" WHERE j.created_by = ");
        builder.push_bind(i64::from(owner));

        if let Some(job_id) = search.job_id {
            builder.push(" AND a.job_id = ");
            builder.push_bind(i64::from(job_id));
        }
        if !search.statuses.is_empty() {
            let statuses: Vec<String> = search
                .statuses
                .iter()
                .map(|status| status.as_str().to_string())
                .collect();
            builder.push(" AND a.status = ANY(");
            builder.push_bind(statuses);
            builder.push(")");
        }
        if let Some(from) = search.applied_from {
            builder.push(" AND a.applied_at >= ");
            builder.push_bind(from);
        }
        if let Some(until) = search.applied_until {
            builder.push(" AND a.applied_at <= ");
            builder.push_bind(until);
        }
        builder.push(" ORDER BY a.applied_at DESC");

        let rows = builder
            .build_query_as::<RecordRow>()
            .fetch_all(&self.pool)
            .await
            .map_err(map_sqlx)?;

        into_records(rows)
    }

    async fn list_for_job(&self, job_id: JobId) -> DomainResult<Vec<JobApplicationRecord>> {
        let rows = sqlx::query_as::<_, RecordRow>(&format!(
            "{RECORD_SELECT} WHERE a.job_id = $1 ORDER BY a.applied_at DESC"
        ))
        .bind(i64::from(job_id))
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx)?;

        into_records(rows)
    }

    async fn find_many_by_ids(
        &self,
        ids: &[ApplicationId],
    ) -> DomainResult<Vec<JobApplicationRecord>> {
        let raw_ids: Vec<i64> = ids.iter().copied().map(i64::from).collect();
        let rows = sqlx::query_as::<_, RecordRow>(&format!(
            "{RECORD_SELECT} WHERE a.id = ANY($1)"
        ))
        .bind(raw_ids)
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx)?;

        into_records(rows)
    }

    async fn update_status(
        &self,
        id: ApplicationId,
        status: ApplicationStatus,
        notes: &str,
    ) -> DomainResult<JobApplicationRecord> {
        let result = sqlx::query("UPDATE applications SET status = $2, notes = $3 WHERE id = $1")
            .bind(i64::from(id))
            .bind(status.as_str())
            .bind(notes)
            .execute(&self.pool)
            .await
            .map_err(map_sqlx)?;

        if result.rows_affected() == 0 {
            return Err(DomainError::NotFound("application not found".into()));
        }

        self.find_by_id(id)
            .await?
            .ok_or_else(|| DomainError::NotFound("application not found".into()))
    }

    async fn update_status_many(
        &self,
        ids: &[ApplicationId],
        status: ApplicationStatus,
    ) -> DomainResult<u64> {
        let raw_ids: Vec<i64> = ids.iter().copied().map(i64::from).collect();
        let result = sqlx::query("UPDATE applications SET status = $2 WHERE id = ANY($1)")
            .bind(raw_ids)
            .bind(status.as_str())
            .execute(&self.pool)
            .await
            .map_err(map_sqlx)?;

        Ok(result.rows_affected())
    }

    async fn delete(&self, id: ApplicationId) -> DomainResult<()> {
        let result = sqlx::query("DELETE FROM applications WHERE id = $1")
            .bind(i64::from(id))
            .execute(&self.pool)
            .await
            .map_err(map_sqlx)?;

        if result.rows_affected() == 0 {
            return Err(DomainError::NotFound("application not found".into()));
        }
        Ok(())
    }

    async fn count_for_owner(&self, owner: UserId) -> DomainResult<u64> {
        let count: i64 = sqlx::query_scalar(
            "SELECT COUNT(*) FROM applications a JOIN jobs j ON j.id = a.job_id
             WHERE j.created_by = $1",
        )
        .bind(i64::from(owner))
        .fetch_one(&self.pool)
        .await
        .map_err(map_sqlx)?;
        Ok(count as u64)
    }

    async fn count_for_owner_since(
        &self,
        owner: UserId,
        cutoff: DateTime<Utc>,
    ) -> DomainResult<u64> {
        let count: i64 = sqlx::query_scalar(
            "SELECT COUNT(*) FROM applications a JOIN jobs j ON j.id = a.job_id
             WHERE j.created_by = $1 AND a.applied_at >= $2",
        )
        .bind(i64::from(owner))
        .bind(cutoff)
        .fetch_one(&self.pool)
        .await
        .map_err(map_sqlx)?;
        Ok(count as u64)
    }

    async fn count_by_status(
        &self,
        owner: UserId,
        status: ApplicationStatus,
    ) -> DomainResult<u64> {
        let count: i64 = sqlx::query_scalar(
            "SELECT COUNT(*) FROM applications a JOIN jobs j ON j.id = a.job_id
             WHERE j.created_by = $1 AND a.status = $2",
        )
        .bind(i64::from(owner))
        .bind(status.as_str())
        .fetch_one(&self.pool)
        .await
        .map_err(map_sqlx)?;
        Ok(count as u64)
    }

    async fn application_trend(
        &self,
        owner: UserId,
        since: DateTime<Utc>,
    ) -> DomainResult<Vec<TrendPoint>> {
        let rows = sqlx::query_as::<_, TrendRow>(
            "SELECT to_char(a.applied_at AT TIME ZONE 'UTC', 'YYYY-MM-DD') AS day, COUNT(*) AS count
             FROM applications a JOIN jobs j ON j.id = a.job_id
             WHERE j.created_by = $1 AND a.applied_at >= $2
             GROUP BY 1
             ORDER BY 1",
        )
        .bind(i64::from(owner))
        .bind(since)
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx)?;

        Ok(rows
            .into_iter()
            .map(|row| TrendPoint {
                day: row.day,
                count: row.count,
            })
            .collect())
    }

    async fn top_jobs(&self, owner: UserId, limit: u32) -> DomainResult<Vec<TopJobStat>> {
        let rows = sqlx::query_as::<_, TopJobRow>(
            "SELECT j.title, j.company, COUNT(*) AS count
             FROM applications a JOIN jobs j ON j.id = a.job_id
             WHERE j.created_by = $1
             GROUP BY j.id, j.title, j.company
             ORDER BY count DESC, j.id ASC
             LIMIT $2",
        )
        .bind(i64::from(owner))
        .bind(i64::from(limit))
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx)?;

        Ok(rows
            .into_iter()
            .map(|row| TopJobStat {
                title: row.title,
                company: row.company,
                count: row.count,
            })
            .collect())
    }
}
