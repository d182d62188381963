// src/infrastructure/repositories/postgres_job.rs
use super::map_sqlx;
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::job::{Job, JobCategory, JobId, JobRepository, JobUpdate, NewJob};
use crate::domain::user::UserId;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool, Postgres, QueryBuilder};

const JOB_COLUMNS: &str = "id, title, company, location, description, category, salary, deadline, \
                           job_type, featured, created_by, created_at, updated_at";

#[derive(Clone)]
pub struct PostgresJobRepository {
    pool: PgPool,
}

impl PostgresJobRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct JobRow {
    id: i64,
    title: String,
    company: String,
    location: String,
    description: String,
    category: String,
    salary: String,
    deadline: Option<DateTime<Utc>>,
    job_type: String,
    featured: bool,
    created_by: i64,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl TryFrom<JobRow> for Job {
    type Error = DomainError;

    fn try_from(row: JobRow) -> Result<Self, Self::Error> {
        Ok(Job {
            id: JobId::new(row.id)?,
            title: row.title,
            company: row.company,
            location: row.location,
            description: row.description,
            category: row.category.parse::<JobCategory>()?,
            salary: row.salary,
            deadline: row.deadline,
            job_type: row.job_type,
            featured: row.featured,
            created_by: UserId::new(row.created_by)?,
            created_at: row.created_at,
            updated_at: row.updated_at,
        })
    }
}

#[async_trait]
impl JobRepository for PostgresJobRepository {
    async fn insert(&self, job: NewJob) -> DomainResult<Job> {
        let row = sqlx::query_as::<_, JobRow>(
            "INSERT INTO jobs (title, company, location, description, category, salary, deadline, job_type, featured, created_by)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)
             RETURNING id, title, company, location, description, category, salary, deadline, job_type, featured, created_by, created_at, updated_at",
        )
        .bind(&job.title)
        .bind(&job.company)
        .bind(&job.location)
        .bind(&job.description)
        .bind(job.category.as_str())
        .bind(&job.salary)
        .bind(job.deadline)
        .bind(&job.job_type)
        .bind(job.featured)
        .bind(i64::from(job.created_by))
        .fetch_one(&self.pool)
        .await
        .map_err(map_sqlx)?;

        Job::try_from(row)
    }

    async fn find_by_id(&self, id: JobId) -> DomainResult<Option<Job>> {
        let row = sqlx::query_as::<_, JobRow>(&format!(
            "SELECT {JOB_COLUMNS} FROM jobs WHERE id = $1"
        ))
        .bind(i64::from(id))
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx)?;

        row.map(Job::try_from).transpose()
    }

    async fn update(&self, update: JobUpdate) -> DomainResult<Job> {
        let JobUpdate {
            id,
            title,
            company,
            location,
            description,
            category,
            salary,
            deadline,
            job_type,
        } = update;

        let mut builder: QueryBuilder<Postgres> =
            QueryBuilder::new("UPDATE jobs SET updated_at = now()");

        if let Some(title) = title {
            builder.push(", title = ");
            builder.push_bind(title);
        }
        if let Some(company) = company {
            builder.push(", company = ");
            builder.push_bind(company);
        }
        if let Some(location) = location {
            builder.push(", location = ");
            builder.push_bind(location);
        }
        if let Some(description) = description {
            builder.push(", description = ");
            builder.push_bind(description);
        }
        if let Some(category) = category {
            builder.push(", category = ");
            builder.push_bind(category.as_str());
        }
        if let Some(salary) = salary {
            builder.push(", salary = ");
            builder.push_bind(salary);
        }
        if let Some(deadline) = deadline {
            builder.push(", deadline = ");
            builder.push_bind(deadline);
        }
        if let Some(job_type) = job_type {
            builder.push(", job_type = ");
            builder.push_bind(job_type);
        }

        builder.push(" WHERE id = ");
        builder.push_bind(i64::from(id));
        builder.push(&format!(" RETURNING {JOB_COLUMNS}"));

        let row = builder
            .build_query_as::<JobRow>()
            .fetch_optional(&self.pool)
            .await
            .map_err(map_sqlx)?
            .ok_or_else(|| DomainError::NotFound("job not found".into()))?;

        Job::try_from(row)
    }

    async fn set_featured(&self, id: JobId, featured: bool) -> DomainResult<Job> {
        let row = sqlx::query_as::<_, JobRow>(&format!(
            "UPDATE jobs SET featured = $2, updated_at = now() WHERE id = $1 RETURNING {JOB_COLUMNS}"
        ))
        .bind(i64::from(id))
        .bind(featured)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx)?
        .ok_or_else(|| DomainError::NotFound("job not found".into()))?;

        Job::try_from(row)
    }

    async fn delete(&self, id: JobId) -> DomainResult<()> {
        let result = sqlx::query("DELETE FROM jobs WHERE id = $1")
            .bind(i64::from(id))
            .execute(&self.pool)
            .await
            .map_err(map_sqlx)?;

        if result.rows_affected() == 0 {
            return Err(DomainError::NotFound("job not found".into()));
        }
        Ok(())
    }

    async fn list_by_owner(&self, owner: UserId) -> DomainResult<Vec<Job>> {
        let rows = sqlx::query_as::<_, JobRow>(&format!(
            "SELECT {JOB_COLUMNS} FROM jobs WHERE created_by = $1 ORDER BY created_at DESC"
        ))
        .bind(i64::from(owner))
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx)?;

        rows.into_iter().map(Job::try_from).collect()
    }

    async fn count_by_owner(&self, owner: UserId) -> DomainResult<u64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM jobs WHERE created_by = $1")
            .bind(i64::from(owner))
            .fetch_one(&self.pool)
            .await
            .map_err(map_sqlx)?;
        Ok(count as u64)
    }

    async fn count_active_by_owner(&self, owner: UserId, now: DateTime<Utc>) -> DomainResult<u64> {
        let count: i64 = sqlx::query_scalar(
            "SELECT COUNT(*) FROM jobs
             WHERE created_by = $1 AND (deadline IS NULL OR deadline >= $2)",
        )
        .bind(i64::from(owner))
        .bind(now)
        .fetch_one(&self.pool)
        .await
        .map_err(map_sqlx)?;
        Ok(count as u64)
    }

    async fn count_by_owner_since(
        &self,
        owner: UserId,
        cutoff: DateTime<Utc>,
    ) -> DomainResult<u64> {
        let count: i64 = sqlx::query_scalar(
            "SELECT COUNT(*) FROM jobs WHERE created_by = $1 AND created_at >= $2",
        )
        .bind(i64::from(owner))
        .bind(cutoff)
        .fetch_one(&self.pool)
        .await
        .map_err(map_sqlx)?;
        Ok(count as u64)
    }
}
