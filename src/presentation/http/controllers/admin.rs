// src/presentation/http/controllers/admin.rs
use crate::application::{
    dto::{ActivityLogDto, AdvancedStatsDto, DashboardStatsDto},
    queries::export::ExportKind,
};
use crate::presentation::http::error::{HttpError, HttpResult, IntoHttpResult};
use crate::presentation::http::extractors::{Authenticated, RequestMeta};
use crate::presentation::http::state::HttpState;
use axum::{
    extract::Path,
    http::header,
    response::{IntoResponse, Response},
    Extension, Json,
};

pub async fn dashboard_stats(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
) -> HttpResult<Json<DashboardStatsDto>> {
    state
        .services
        .stats_queries
        .dashboard_stats(&user)
        .await
        .into_http()
        .map(Json)
}

pub async fn advanced_stats(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
) -> HttpResult<Json<AdvancedStatsDto>> {
    state
        .services
        .stats_queries
        .advanced_stats(&user)
        .await
        .into_http()
        .map(Json)
}

pub async fn activity_log(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
) -> HttpResult<Json<Vec<ActivityLogDto>>> {
    state
        .services
        .activity_queries
        .list_for_actor(&user)
        .await
        .into_http()
        .map(Json)
}

pub async fn export_csv(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    RequestMeta(origin): RequestMeta,
    Path(kind): Path<String>,
) -> HttpResult<Response> {
    let kind = kind
        .parse::<ExportKind>()
        .map_err(HttpError::from_error)?;

    let file = state
        .services
        .exports
        .export(&user, kind, &origin)
        .await
        .into_http()?;

    let disposition = format!("attachment; filename=\"{}\"", file.filename);
    Ok((
        [
            (header::CONTENT_TYPE, "text/csv".to_string()),
            (header::CONTENT_DISPOSITION, disposition),
        ],
        file.content,
    )
        .into_response())
}
