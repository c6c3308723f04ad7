use axum::{
    extract::State,
    http::{header, StatusCode},
    response::IntoResponse,
};

use crate::{
    model::api::ErrorDto,
    server::{error::AppError, service::seo::SeoService, state::AppState},
};

/// Tag for grouping health and crawler endpoints in OpenAPI documentation
pub static SEO_TAG: &str = "seo";

/// Liveness probe.
///
/// Also mounted as `HEAD /` for uptime monitors.
#[utoipa::path(
    get,
    path = "/healthz",
    tag = SEO_TAG,
    responses(
        (status = 200, description = "Service is up", body = String, content_type = "text/plain")
    ),
)]
pub async fn health() -> impl IntoResponse {
    (StatusCode::OK, "ok")
}

/// Crawler rules.
#[utoipa::path(
    get,
    path = "/robots.txt",
    tag = SEO_TAG,
    responses(
        (status = 200, description = "Robots file", body = String, content_type = "text/plain")
    ),
)]
pub async fn robots_txt(State(state): State<AppState>) -> impl IntoResponse {
    let body = SeoService::new(&state.db, &state.cache, &state.app_url, &state.base_path)
        .robots_txt();

    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/plain; charset=utf-8")],
        body,
    )
}

/// XML sitemap of the static pages and every campground.
///
/// # Returns
/// - `200 OK` - Sitemap document
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/sitemap.xml",
    tag = SEO_TAG,
    responses(
        (status = 200, description = "Sitemap", body = String, content_type = "application/xml"),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn sitemap_xml(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let body = SeoService::new(&state.db, &state.cache, &state.app_url, &state.base_path)
        .sitemap_xml()
        .await?;

    Ok((
        StatusCode::OK,
        [(header::CONTENT_TYPE, "application/xml; charset=utf-8")],
        body,
    ))
}
