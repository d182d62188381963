// src/infrastructure/repositories/postgres_activity_log.rs
use super::map_sqlx;
use crate::domain::activity::{ActivityLogEntry, ActivityLogRepository, NewActivityLogEntry};
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::user::UserId;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool};

#[derive(Clone)]
pub struct PostgresActivityLogRepository {
    pool: PgPool,
}

impl PostgresActivityLogRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct ActivityLogRow {
    id: i64,
    admin_id: i64,
    action: String,
    target_type: String,
    target_id: Option<i64>,
    details: String,
    ip: String,
    user_agent: String,
    created_at: DateTime<Utc>,
}

impl TryFrom<ActivityLogRow> for ActivityLogEntry {
    type Error = DomainError;

    fn try_from(row: ActivityLogRow) -> Result<Self, Self::Error> {
        Ok(ActivityLogEntry {
            id: row.id,
            admin_id: UserId::new(row.admin_id)?,
            action: row.action,
            target_type: row.target_type,
            target_id: row.target_id,
            details: row.details,
            ip: row.ip,
            user_agent: row.user_agent,
            created_at: row.created_at,
        })
    }
}

#[async_trait]
impl ActivityLogRepository for PostgresActivityLogRepository {
    async fn insert(&self, entry: NewActivityLogEntry) -> DomainResult<()> {
        sqlx::query(
            "INSERT INTO activity_logs (admin_id, action, target_type, target_id, details, ip, user_agent)
             VALUES ($1, $2, $3, $4, $5, $6, $7)",
        )
        .bind(i64::from(entry.admin_id))
        .bind(entry.action.as_str())
        .bind(entry.target_type.as_str())
        .bind(entry.target_id)
        .bind(&entry.details)
        .bind(&entry.ip)
        .bind(&entry.user_agent)
        .execute(&self.pool)
        .await
        .map_err(map_sqlx)?;

        Ok(())
    }

    async fn list_by_admin(
        &self,
        admin: UserId,
        limit: u32,
    ) -> DomainResult<Vec<ActivityLogEntry>> {
        let rows = sqlx::query_as::<_, ActivityLogRow>(
            "SELECT id, admin_id, action, target_type, target_id, details, ip, user_agent, created_at
             FROM activity_logs
             WHERE admin_id = $1
             ORDER BY created_at DESC
             LIMIT $2",
        )
        .bind(i64::from(admin))
        .bind(i64::from(limit))
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx)?;

        rows.into_iter().map(ActivityLogEntry::try_from).collect()
    }
}
