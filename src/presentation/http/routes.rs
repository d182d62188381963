// src/presentation/http/routes.rs
use crate::presentation::http::controllers::{admin, applications, jobs};
use crate::presentation::http::state::HttpState;
use axum::{
    http::{HeaderValue, Method},
    routing::{delete, get, post, put},
    Extension, Json, Router,
};
use serde::Serialize;
use std::time::Duration;
use tower_http::{
    cors::{AllowOrigin, CorsLayer},
    trace::TraceLayer,
};

pub fn build_router(state: HttpState, allowed_origins: &[String]) -> Router {
    let origins: Vec<HeaderValue> = allowed_origins
        .iter()
        .filter_map(|origin| origin.parse::<HeaderValue>().ok())
        .collect();

    let cors = CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers(tower_http::cors::Any)
        .max_age(Duration::from_secs(3600));

    Router::new()
        .route("/health", get(health))
        .route("/api/v1/admin/stats", get(admin::dashboard_stats))
        .route("/api/v1/admin/analytics", get(admin::advanced_stats))
        .route("/api/v1/admin/activity", get(admin::activity_log))
        .route("/api/v1/admin/export/{kind}", get(admin::export_csv))
        .route(
            "/api/v1/admin/jobs",
            get(jobs::list_jobs).post(jobs::create_job),
        )
        .route(
            "/api/v1/admin/jobs/{id}",
            put(jobs::update_job).delete(jobs::delete_job),
        )
        .route("/api/v1/admin/jobs/{id}/featured", put(jobs::toggle_featured))
        .route("/api/v1/admin/jobs/{id}/clone", post(jobs::clone_job))
        .route(
            "/api/v1/admin/jobs/{id}/applications",
            get(applications::list_for_job),
        )
        .route(
            "/api/v1/admin/applications",
            get(applications::list_applications),
        )
        .route(
            "/api/v1/admin/applications/filter",
            post(applications::filter_applications),
        )
        .route(
            "/api/v1/admin/applications/bulk-update",
            put(applications::bulk_update_status),
        )
        .route(
            "/api/v1/admin/applications/{id}/status",
            put(applications::update_status),
        )
        .route(
            "/api/v1/admin/applications/{id}",
            delete(applications::delete_application),
        )
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .layer(Extension(state))
}

#[derive(Serialize)]
pub struct StatusResponse {
    pub status: String,
}

pub async fn health() -> Json<StatusResponse> {
    Json(StatusResponse {
        status: "ok".into(),
    })
}
