// src/infrastructure/repositories/postgres_user.rs
use super::map_sqlx;
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::stats::TrendPoint;
use crate::domain::user::{Role, User, UserId, UserRepository};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool};

#[derive(Clone)]
pub struct PostgresUserRepository {
    pool: PgPool,
}

impl PostgresUserRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct UserRow {
    id: i64,
    name: String,
    username: String,
    email: String,
    role: String,
    created_at: DateTime<Utc>,
}

impl TryFrom<UserRow> for User {
    type Error = DomainError;

    fn try_from(row: UserRow) -> Result<Self, Self::Error> {
        Ok(User {
            id: UserId::new(row.id)?,
            name: row.name,
            username: row.username,
            email: row.email,
            role: row.role.parse::<Role>()?,
            created_at: row.created_at,
        })
    }
}

#[derive(Debug, FromRow)]
struct TrendRow {
    day: String,
    count: i64,
}

#[async_trait]
impl UserRepository for PostgresUserRepository {
    async fn count_seekers(&self) -> DomainResult<u64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM users WHERE role <> 'admin'")
            .fetch_one(&self.pool)
            .await
            .map_err(map_sqlx)?;
        Ok(count as u64)
    }

    async fn count_seekers_since(&self, cutoff: DateTime<Utc>) -> DomainResult<u64> {
        let count: i64 = sqlx::query_scalar(
            "SELECT COUNT(*) FROM users WHERE role <> 'admin' AND created_at >= $1",
        )
        .bind(cutoff)
        .fetch_one(&self.pool)
        .await
        .map_err(map_sqlx)?;
        Ok(count as u64)
    }

    async fn registration_trend(&self, since: DateTime<Utc>) -> DomainResult<Vec<TrendPoint>> {
        let rows = sqlx::query_as::<_, TrendRow>(
            "SELECT to_char(created_at AT TIME ZONE 'UTC', 'YYYY-MM-DD') AS day, COUNT(*) AS count
             FROM users
             WHERE role <> 'admin' AND created_at >= $1
             GROUP BY 1
             ORDER BY 1",
        )
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

    async fn list_seekers(&self) -> DomainResult<Vec<User>> {
        let rows = sqlx::query_as::<_, UserRow>(
            "SELECT id, name, username, email, role, created_at
             FROM users
             WHERE role <> 'admin'
             ORDER BY created_at DESC",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx)?;

        rows.into_iter().map(User::try_from).collect()
    }
}
