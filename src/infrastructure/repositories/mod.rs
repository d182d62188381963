// src/infrastructure/repositories/mod.rs
mod postgres_activity_log;
mod postgres_application;
mod postgres_job;
mod postgres_user;

pub use postgres_activity_log::PostgresActivityLogRepository;
pub use postgres_application::PostgresJobApplicationRepository;
pub use postgres_job::PostgresJobRepository;
pub use postgres_user::PostgresUserRepository;

use crate::domain::errors::DomainError;

const CNT_USER_USERNAME: &str = "users_username_key";
const CNT_USER_EMAIL: &str = "users_email_key";
const CNT_JOB_OWNER: &str = "jobs_created_by_fkey";
const CNT_APPLICATION_JOB: &str = "applications_job_id_fkey";
const CNT_APPLICATION_APPLICANT: &str = "applications_applicant_id_fkey";

pub fn map_sqlx(err: sqlx::Error) -> DomainError {
    match &err {
        sqlx::Error::Database(db_err) => {
            if let Some(constraint) = db_err.constraint() {
                return match constraint {
                    CNT_USER_USERNAME => DomainError::Conflict("username already exists".into()),
                    CNT_USER_EMAIL => DomainError::Conflict("email already exists".into()),
                    CNT_JOB_OWNER => DomainError::NotFound("job owner not found".into()),
                    CNT_APPLICATION_JOB => DomainError::NotFound("job not found".into()),
                    CNT_APPLICATION_APPLICANT => {
                        DomainError::NotFound("applicant not found".into())
                    }
                    other => {
                        DomainError::Persistence(format!("database constraint violation: {other}"))
                    }
                };
            }

            if let Some(code) = db_err.code() {
                match code.as_ref() {
                    "23505" => {
                        return DomainError::Conflict("unique constraint violated".into());
                    }
                    "23503" => {
                        return DomainError::NotFound("referenced record not found".into());
                    }
                    "23514" => {
                        return DomainError::Validation("check constraint violated".into());
                    }
                    _ => {}
                }
            }

            DomainError::Persistence(db_err.message().to_string())
        }
        _ => DomainError::Persistence(err.to_string()),
    }
}
