// src/presentation/http/controllers/jobs.rs
use crate::application::{
    commands::jobs::{CreateJobCommand, UpdateJobCommand},
    dto::JobDto,
};
use crate::domain::job::JobCategory;
use crate::presentation::http::error::{HttpResult, IntoHttpResult};
use crate::presentation::http::extractors::{Authenticated, RequestMeta};
use crate::presentation::http::state::HttpState;
use axum::{extract::Path, Extension, Json};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer};
use serde_json::json;

fn default_job_type() -> String {
    "Onsite".into()
}

/// Distinguishes an absent field from an explicit `null`, so a PUT can
/// clear the deadline without touching the other fields.
fn some_if_present<'de, T, D>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    T: Deserialize<'de>,
    D: Deserializer<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}

#[derive(Debug, Deserialize)]
pub struct CreateJobRequest {
    pub title: String,
    pub company: String,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub category: JobCategory,
    #[serde(default)]
    pub salary: String,
    #[serde(default)]
    pub deadline: Option<DateTime<Utc>>,
    #[serde(default = "default_job_type")]
    pub job_type: String,
    #[serde(default)]
    pub featured: bool,
}

#[derive(Debug, Deserialize)]
pub struct UpdateJobRequest {
    pub title: Option<String>,
    pub company: Option<String>,
    pub location: Option<String>,
    pub description: Option<String>,
    pub category: Option<JobCategory>,
    pub salary: Option<String>,
    #[serde(default, deserialize_with = "some_if_present")]
    pub deadline: Option<Option<DateTime<Utc>>>,
    pub job_type: Option<String>,
}

pub async fn list_jobs(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
) -> HttpResult<Json<Vec<JobDto>>> {
    state
        .services
        .job_queries
        .list_owned_jobs(&user)
        .await
        .into_http()
        .map(Json)
}

pub async fn create_job(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    RequestMeta(origin): RequestMeta,
    Json(payload): Json<CreateJobRequest>,
) -> HttpResult<Json<JobDto>> {
    let command = CreateJobCommand {
        title: payload.title,
        company: payload.company,
        location: payload.location,
        description: payload.description,
        category: payload.category,
        salary: payload.salary,
        deadline: payload.deadline,
        job_type: payload.job_type,
        featured: payload.featured,
    };

    state
        .services
        .job_commands
        .create_job(&user, command, &origin)
        .await
        .into_http()
        .map(Json)
}

pub async fn update_job(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    RequestMeta(origin): RequestMeta,
    Path(id): Path<i64>,
    Json(payload): Json<UpdateJobRequest>,
) -> HttpResult<Json<JobDto>> {
    let command = UpdateJobCommand {
        id,
        title: payload.title,
        company: payload.company,
        location: payload.location,
        description: payload.description,
        category: payload.category,
        salary: payload.salary,
        deadline: payload.deadline,
        job_type: payload.job_type,
    };

    state
        .services
        .job_commands
        .update_job(&user, command, &origin)
        .await
        .into_http()
        .map(Json)
}

pub async fn delete_job(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    RequestMeta(origin): RequestMeta,
    Path(id): Path<i64>,
) -> HttpResult<Json<serde_json::Value>> {
    state
        .services
        .job_commands
        .delete_job(&user, id, &origin)
        .await
        .into_http()?;

    Ok(Json(json!({ "message": "job deleted" })))
}

pub async fn toggle_featured(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    RequestMeta(origin): RequestMeta,
    Path(id): Path<i64>,
) -> HttpResult<Json<JobDto>> {
    state
        .services
        .job_commands
        .toggle_featured(&user, id, &origin)
        .await
        .into_http()
        .map(Json)
}

pub async fn clone_job(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    RequestMeta(origin): RequestMeta,
    Path(id): Path<i64>,
) -> HttpResult<Json<JobDto>> {
    state
        .services
        .job_commands
        .clone_job(&user, id, &origin)
        .await
        .into_http()
        .map(Json)
}
