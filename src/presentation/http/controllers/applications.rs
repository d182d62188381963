// src/presentation/http/controllers/applications.rs
use crate::application::{
    commands::applications::{BulkUpdateStatusCommand, UpdateStatusCommand},
    dto::{JobApplicationDto, JobApplicationsDto},
    error::ApplicationError,
    queries::applications::FilterApplicationsQuery,
};
use crate::domain::job_application::ApplicationStatus;
use crate::presentation::http::error::{HttpResult, IntoHttpResult};
use crate::presentation::http::extractors::{Authenticated, RequestMeta};
use crate::presentation::http::state::HttpState;
use axum::{extract::Path, Extension, Json};
use chrono::{DateTime, Utc};
use serde::Deserialize;
use serde_json::json;

/// Status values arrive as plain strings and are parsed here at the
/// boundary, so a bad value is a 400 with the offending input named,
/// not a serde rejection.
fn parse_status(value: &str) -> HttpResult<ApplicationStatus> {
    value
        .parse::<ApplicationStatus>()
        .map_err(ApplicationError::from)
        .into_http()
}

#[derive(Debug, Deserialize)]
pub struct FilterApplicationsRequest {
    #[serde(default)]
    pub job_id: Option<i64>,
    #[serde(default)]
    pub statuses: Vec<String>,
    #[serde(default)]
    pub applied_from: Option<DateTime<Utc>>,
    #[serde(default)]
    pub applied_until: Option<DateTime<Utc>>,
    #[serde(default)]
    pub job_type: Option<String>,
    #[serde(default)]
    pub search_term: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct UpdateStatusRequest {
    pub status: String,
    #[serde(default)]
    pub notes: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct BulkUpdateRequest {
    pub application_ids: Vec<i64>,
    pub status: String,
}

pub async fn list_applications(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
) -> HttpResult<Json<Vec<JobApplicationDto>>> {
    state
        .services
        .application_queries
        .list_applications(&user)
        .await
        .into_http()
        .map(Json)
}

pub async fn filter_applications(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    Json(payload): Json<FilterApplicationsRequest>,
) -> HttpResult<Json<Vec<JobApplicationDto>>> {
    let statuses = payload
        .statuses
        .iter()
        .map(|value| parse_status(value))
        .collect::<HttpResult<Vec<_>>>()?;

    let query = FilterApplicationsQuery {
        job_id: payload.job_id,
        statuses,
        applied_from: payload.applied_from,
        applied_until: payload.applied_until,
        job_type: payload.job_type,
        search_term: payload.search_term,
    };

    state
        .services
        .application_queries
        .filter_applications(&user, query)
        .await
        .into_http()
        .map(Json)
}

pub async fn list_for_job(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    Path(job_id): Path<i64>,
) -> HttpResult<Json<JobApplicationsDto>> {
    state
        .services
        .application_queries
        .list_for_job(&user, job_id)
        .await
        .into_http()
        .map(Json)
}

pub async fn update_status(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    RequestMeta(origin): RequestMeta,
    Path(id): Path<i64>,
    Json(payload): Json<UpdateStatusRequest>,
) -> HttpResult<Json<JobApplicationDto>> {
    let command = UpdateStatusCommand {
        id,
        status: parse_status(&payload.status)?,
        notes: payload.notes,
    };

    state
        .services
        .application_commands
        .update_status(&user, command, &origin)
        .await
        .into_http()
        .map(Json)
}

pub async fn bulk_update_status(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    RequestMeta(origin): RequestMeta,
    Json(payload): Json<BulkUpdateRequest>,
) -> HttpResult<Json<serde_json::Value>> {
    let command = BulkUpdateStatusCommand {
        application_ids: payload.application_ids,
        status: parse_status(&payload.status)?,
    };

    let updated = state
        .services
        .application_commands
        .bulk_update_status(&user, command, &origin)
        .await
        .into_http()?;

    Ok(Json(json!({ "updated": updated })))
}

pub async fn delete_application(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    RequestMeta(origin): RequestMeta,
    Path(id): Path<i64>,
) -> HttpResult<Json<serde_json::Value>> {
    state
        .services
        .application_commands
        .delete_application(&user, id, &origin)
        .await
        .into_http()?;

    Ok(Json(json!({ "message": "application deleted" })))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::StatusCode;
    use axum::response::IntoResponse;

    #[test]
    fn unknown_status_values_map_to_bad_request() {
        let request: UpdateStatusRequest =
            serde_json::from_value(json!({ "status": "Accepted" })).unwrap();

        let err = parse_status(&request.status).unwrap_err();
        assert_eq!(err.into_response().status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn bulk_status_values_parse_at_the_boundary() {
        let request: BulkUpdateRequest =
            serde_json::from_value(json!({ "application_ids": [1], "status": "Hired" })).unwrap();
        assert_eq!(
            parse_status(&request.status).unwrap(),
            ApplicationStatus::Hired
        );

        let request: BulkUpdateRequest =
            serde_json::from_value(json!({ "application_ids": [1], "status": "hired" })).unwrap();
        let err = parse_status(&request.status).unwrap_err();
        assert_eq!(err.into_response().status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn one_bad_filter_status_rejects_the_request() {
        let request: FilterApplicationsRequest =
            serde_json::from_value(json!({ "statuses": ["Under Review", "Accepted"] })).unwrap();

        let parsed = request
            .statuses
            .iter()
            .map(|value| parse_status(value))
            .collect::<HttpResult<Vec<_>>>();
        let err = parsed.unwrap_err();
        assert_eq!(err.into_response().status(), StatusCode::BAD_REQUEST);
    }
}
